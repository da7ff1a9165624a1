mod common;

use common::{games, visible_titles};
use filterable_lib::model::{ColumnKey, FilterControl};
use filterable_lib::{ArrayColumn, FilterConfig, FilterableTable};

#[test]
fn test_filter_by_row_attribute() {
    let mut table = FilterableTable::new(FilterConfig::default(), games());
    table.toggle_control(&FilterControl::new("released", "yes"));

    assert_eq!(visible_titles(&table), vec!["Portal 2", "Diablo IV"]);
    assert!(table.engine().is_column_filtered(&ColumnKey::name("released")));
}

#[test]
fn test_row_attribute_as_array_column() {
    let config = FilterConfig::default().with_array_column("genres", ArrayColumn::new(", "));
    let mut table = FilterableTable::new(config, games());
    table.toggle_value("genres", "fps");
    table.toggle_value("genres", "adventure");

    assert_eq!(table.visibility().visible_count(), 5);
    assert!(!visible_titles(&table).contains(&"FC 4"));
}

#[test]
fn test_attribute_and_cell_filters_combine() {
    let mut table = FilterableTable::new(FilterConfig::default(), games());
    table.toggle_value("released", "no");
    table.toggle_value(1, "Valve");

    assert_eq!(
        table.engine().active_filter_columns(),
        vec![ColumnKey::Index(1), ColumnKey::name("released")]
    );
    assert_eq!(visible_titles(&table), vec!["WoW", "GTA V", "FC 4"]);
}

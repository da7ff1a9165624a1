mod common;

use common::{games, visible_titles};
use filterable_lib::model::TableRow;
use filterable_lib::{FilterConfig, Filterable, FilterableTable};

#[test]
fn test_everything_visible_without_restrictions() {
    let engine = Filterable::new(FilterConfig::default());
    let rows = games();
    assert!(engine.scan(&rows).all(|r| r.visible));
    assert!(!engine.visibility(&rows).is_result_empty());
}

#[test]
fn test_toggle_is_its_own_inverse() {
    let mut table = FilterableTable::new(FilterConfig::default(), games());
    let before = table.visibility().clone();

    table.toggle_value(1, "Blizzard");
    assert_ne!(table.visibility(), &before);
    table.toggle_value(1, "Blizzard");
    assert_eq!(table.visibility(), &before);
    assert!(table.engine().active_filter_columns().is_empty());
}

#[test]
fn test_search_case_folding() {
    let mut table = FilterableTable::new(FilterConfig::default(), games());
    table.set_search_term("BLIZZARD");
    assert_eq!(visible_titles(&table), vec!["WoW", "Diablo IV"]);

    let config = FilterConfig::default().with_case_sensitive_search(true);
    let mut table = FilterableTable::new(config, games());
    assert!(table.set_search_term("BLIZZARD").is_result_empty());
    assert_eq!(table.set_search_term("Blizzard").visible_count(), 2);
}

#[test]
fn test_empty_search_term_matches_every_row() {
    let mut table = FilterableTable::new(FilterConfig::default(), games());
    table.set_search_term("portal");
    assert_eq!(table.visibility().visible_count(), 2);
    assert_eq!(table.set_search_term("").visible_count(), 6);
}

#[test]
fn test_filter_and_search_are_and_composed() {
    let mut table = FilterableTable::new(FilterConfig::default(), games());
    table.toggle_value(1, "Valve");
    table.set_search_term("portal");
    assert!(table.visibility().is_result_empty());

    let mut reversed = FilterableTable::new(FilterConfig::default(), games());
    reversed.set_search_term("portal");
    reversed.toggle_value(1, "Valve");
    assert_eq!(reversed.visibility(), table.visibility());
}

#[test]
fn test_scan_is_idempotent() {
    let mut engine = Filterable::default();
    engine.toggle_value(3, "rpg");
    engine.set_search_term("20");
    let rows = games();

    let first = engine.visibility(&rows);
    let second = engine.visibility(&rows);
    assert_eq!(first, second);
    assert_eq!(first.visible_count(), 5);
}

#[test]
fn test_search_does_not_trim_but_filter_does() {
    let rows = vec![TableRow::new(["  Valve  "])];
    let mut engine = Filterable::default();

    engine.set_search_term("valve ");
    assert!(engine.is_visible(&rows[0]));

    engine.set_search_term("");
    engine.toggle_value(0, "valve");
    assert!(!engine.is_visible(&rows[0]));
}

#[test]
fn test_independent_tables() {
    let mut first = FilterableTable::new(FilterConfig::default(), games());
    let second = FilterableTable::new(FilterConfig::default(), games());
    first.toggle_value(0, "WoW");

    assert_eq!(first.visibility().visible_count(), 5);
    assert_eq!(second.visibility().visible_count(), 6);
}

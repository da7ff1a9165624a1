use filterable_lib::model::TableRow;

/// Games table: title, developer, year, genres; rows carry `released` and
/// `genres` attributes.
pub fn games() -> Vec<TableRow> {
    [
        ("WoW", "Blizzard", "2004", "mmorpg", "yes"),
        ("GTA V", "Rockstar", "2013", "action, adventure", "yes"),
        ("FC 4", "Ubisoft", "2014", "fps, adventure", "yes"),
        ("Portal", "Valve", "2007", "puzzle", "yes"),
        ("Portal 2", "Valve", "2011", "fps, puzzle", "no"),
        ("Diablo IV", "Blizzard", "2023", "rpg", "no"),
    ]
    .into_iter()
    .map(|(title, developer, year, genres, released)| {
        TableRow::new([title, developer, year, genres])
            .with_attribute("genres", genres)
            .with_attribute("released", released)
    })
    .collect()
}

/// Titles of the visible rows, in table order.
pub fn visible_titles(table: &filterable_lib::FilterableTable<TableRow>) -> Vec<&str> {
    table
        .visible_rows()
        .map(|row| row.cells[0].as_str())
        .collect()
}

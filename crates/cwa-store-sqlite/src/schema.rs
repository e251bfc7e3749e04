//! SQL for the `weather` table.

/// Table DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS weather (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    location    TEXT,
    min_temp    REAL,
    max_temp    REAL,
    description TEXT
);
";

pub const DELETE_ALL: &str = "DELETE FROM weather";

pub const INSERT_RECORD: &str = "
INSERT INTO weather (location, min_temp, max_temp, description)
VALUES (?1, ?2, ?3, ?4)
";

/// Fixed four-column projection read by the viewer.
pub const SELECT_ALL: &str = "
SELECT location, min_temp, max_temp, description
FROM weather
ORDER BY id
";

pub const COUNT_ALL: &str = "SELECT COUNT(*) FROM weather";

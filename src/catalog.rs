//! SQLite-backed country catalog: schema, seeding, and session loading.
//!
//! The quiz core never touches this module; it only ever sees the loaded
//! `Vec<Country>`.
use crate::country::{Country, BUILTIN_COUNTRIES};
use rusqlite::{params, Connection, Result};

/// Path to the catalog database file.
pub const DB_PATH: &str = "countries.sqlite";

/// Separator for the packed alternate-spellings column.
const ALT_SEPARATOR: char = ';';

/// Opens the catalog database, creating and seeding it on first run.
pub fn open(path: &str) -> Result<Connection> {
    let conn = Connection::open(path)?;
    conn.busy_timeout(std::time::Duration::from_secs(5))?;
    init_schema(&conn)?;
    seed_if_empty(&conn)?;
    Ok(conn)
}

/// Creates the countries table if it does not exist.
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS countries (
            code TEXT PRIMARY KEY,
            common_name TEXT NOT NULL,
            official_name TEXT NOT NULL,
            alt_spellings TEXT NOT NULL,
            flag_url TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

/// Inserts the built-in catalog when the table is empty. Returns the number
/// of rows inserted.
pub fn seed_if_empty(conn: &Connection) -> Result<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM countries", [], |row| row.get(0))?;
    if count > 0 {
        return Ok(0);
    }

    let mut inserted = 0;
    for seed in BUILTIN_COUNTRIES.iter() {
        conn.execute(
            "INSERT OR IGNORE INTO countries
                 (code, common_name, official_name, alt_spellings, flag_url)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                seed.code,
                seed.common_name,
                seed.official_name,
                seed.alternate_spellings.join(&ALT_SEPARATOR.to_string()),
                flag_url(seed.code),
            ],
        )?;
        inserted += 1;
    }
    Ok(inserted)
}

/// Flag asset URL for a country code.
pub fn flag_url(code: &str) -> String {
    format!("https://flagcdn.com/{}.svg", code.to_ascii_lowercase())
}

/// Loads the full session catalog, ordered by common name.
pub fn load(conn: &Connection) -> Result<Vec<Country>> {
    let mut stmt = conn.prepare(
        "SELECT code, common_name, official_name, alt_spellings, flag_url
         FROM countries
         ORDER BY common_name",
    )?;
    let rows = stmt.query_map([], |row| {
        let alts: String = row.get(3)?;
        Ok(Country {
            code: row.get(0)?,
            common_name: row.get(1)?,
            official_name: row.get(2)?,
            alternate_spellings: if alts.is_empty() {
                Vec::new()
            } else {
                alts.split(ALT_SEPARATOR).map(str::to_string).collect()
            },
            flag_image_ref: row.get(4)?,
        })
    })?;
    rows.collect()
}

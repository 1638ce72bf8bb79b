// CRUD operations over the favourite_homes store
use chrono::Utc;
use rusqlite::params;

use super::db::{FavouritesDb, StoreError, StoreResult};
use super::models::FavouriteHome;

/// Insert a new favourite. Fails with `AlreadyFavourite` when the id is
/// already stored; the first record is kept.
pub fn add_favourite(db: &FavouritesDb, home: &FavouriteHome) -> StoreResult<()> {
    let data = serde_json::to_string(home)?;
    let conn = db.connection()?;
    let conn = conn.lock();

    let result = conn.execute(
        "INSERT INTO favourite_homes (id, data, saved_at) VALUES (?1, ?2, ?3)",
        params![home.id, data, Utc::now().to_rfc3339()],
    );

    match result {
        Ok(_) => Ok(()),
        Err(e) if is_unique_violation(&e) => Err(StoreError::AlreadyFavourite { id: home.id }),
        Err(e) => Err(e.into()),
    }
}

/// Every stored favourite, most recently saved first. The order is
/// incidental, not contractual. An unopened store reads as empty rather
/// than erroring.
pub fn list_favourites(db: &FavouritesDb) -> StoreResult<Vec<FavouriteHome>> {
    let conn = match db.connection() {
        Ok(conn) => conn,
        Err(_) => return Ok(Vec::new()),
    };
    let conn = conn.lock();

    let mut stmt = conn.prepare("SELECT data FROM favourite_homes ORDER BY saved_at DESC")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut homes = Vec::new();
    for data in rows {
        let data = data?;
        match serde_json::from_str(&data) {
            Ok(home) => homes.push(home),
            Err(e) => log::warn!("Skipping favourite row that failed to decode: {}", e),
        }
    }

    Ok(homes)
}

/// Delete by id. Idempotent: removing an id that was never stored is not an
/// error. Returns whether a row was actually deleted.
pub fn remove_favourite(db: &FavouritesDb, id: i64) -> StoreResult<bool> {
    let conn = db.connection()?;
    let conn = conn.lock();

    let deleted = conn.execute("DELETE FROM favourite_homes WHERE id = ?1", params![id])?;
    Ok(deleted > 0)
}

fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

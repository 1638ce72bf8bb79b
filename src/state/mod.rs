// Favourites persistence module
// Connection lifecycle, data model and CRUD over the Flathunt SQLite database

pub mod db;
pub mod models;
pub mod queries;

pub use db::{init_db, open_at, DbConnection, FavouritesDb, StoreError, StoreResult};
pub use models::FavouriteHome;
pub use queries::{add_favourite, list_favourites, remove_favourite};

// Tauri IPC commands: the bridge between UI intents and the favourites store
use serde::Serialize;
use tauri::{AppHandle, Emitter, State};
use tauri_plugin_clipboard_manager::ClipboardExt;
use tauri_plugin_opener::OpenerExt;

use crate::config::BootstrapFlags;
use crate::state::{self, FavouriteHome, FavouritesDb, StoreError};

/// Event carrying the full favourites list, emitted after every mutation.
pub const FAVOURITES_UPDATED: &str = "favourites:updated";

#[derive(Debug, Serialize)]
pub struct CommandError {
    message: String,
}

impl<E: std::fmt::Display> From<E> for CommandError {
    fn from(error: E) -> Self {
        CommandError {
            message: error.to_string(),
        }
    }
}

type CommandResult<T> = Result<T, CommandError>;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Error,
}

/// Short status text for the UI's toast area, tagged so the front-end can
/// style it without parsing the message.
#[derive(Debug, Clone, Serialize)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub message: String,
}

impl StatusMessage {
    fn success(message: &str) -> Self {
        StatusMessage {
            kind: StatusKind::Success,
            message: message.to_string(),
        }
    }

    fn error(message: &str) -> Self {
        StatusMessage {
            kind: StatusKind::Error,
            message: message.to_string(),
        }
    }
}

// ==================== FAVOURITES COMMANDS ====================

#[tauri::command]
pub async fn favourite_home(
    app: AppHandle,
    db: State<'_, FavouritesDb>,
    home: FavouriteHome,
) -> CommandResult<StatusMessage> {
    match state::add_favourite(&db, &home) {
        Ok(()) => {
            broadcast_favourites(&app, &db);
            Ok(StatusMessage::success("Added to favourites"))
        }
        Err(StoreError::AlreadyFavourite { id }) => {
            log::info!("Home {} is already a favourite", id);
            Ok(StatusMessage::error("Already a favourite"))
        }
        Err(e) => {
            log::error!("Failed to save favourite {}: {}", home.id, e);
            Ok(StatusMessage::error("Could not save favourite"))
        }
    }
}

#[tauri::command]
pub async fn remove_favourite_home(
    app: AppHandle,
    db: State<'_, FavouritesDb>,
    home: FavouriteHome,
) -> CommandResult<Option<StatusMessage>> {
    let outcome = state::remove_favourite(&db, home.id);
    if outcome.is_ok() {
        broadcast_favourites(&app, &db);
    }
    Ok(removal_status(home.id, outcome))
}

// A failed removal stays silent towards the UI: logged locally only, the
// front-end reconciles from the next list broadcast. A no-op delete of a
// missing id is idempotent and reads as removed.
fn removal_status(id: i64, outcome: state::StoreResult<bool>) -> Option<StatusMessage> {
    match outcome {
        Ok(removed) => {
            if !removed {
                log::info!("Home {} was not a favourite; nothing removed", id);
            }
            Some(StatusMessage::success("Removed from favourites"))
        }
        Err(e) => {
            log::error!("Failed to remove favourite {}: {}", id, e);
            None
        }
    }
}

#[tauri::command]
pub fn get_favourite_homes(db: State<'_, FavouritesDb>) -> Vec<FavouriteHome> {
    state::list_favourites(&db).unwrap_or_else(|e| {
        log::error!("Failed to read favourites: {}", e);
        Vec::new()
    })
}

// Refresh-after-mutation: re-read and push the whole list so the UI
// reconciles against persisted state, never a delta.
fn broadcast_favourites(app: &AppHandle, db: &FavouritesDb) {
    let homes = state::list_favourites(db).unwrap_or_else(|e| {
        log::error!("Failed to refresh favourites after mutation: {}", e);
        Vec::new()
    });

    if let Err(e) = app.emit(FAVOURITES_UPDATED, &homes) {
        log::error!("Failed to broadcast favourites update: {}", e);
    }
}

// ==================== SIDE-EFFECT COMMANDS ====================

#[tauri::command]
pub fn copy_to_clipboard(app: AppHandle, text: String) -> StatusMessage {
    match app.clipboard().write_text(text) {
        Ok(()) => StatusMessage::success("Copied to clipboard"),
        Err(e) => {
            log::warn!("Clipboard write failed: {}", e);
            StatusMessage::error("Could not copy to clipboard")
        }
    }
}

#[tauri::command]
pub fn open_link(app: AppHandle, url: String) {
    if let Err(e) = app.opener().open_url(&url, None::<&str>) {
        log::warn!("Failed to open {}: {}", url, e);
    }
}

// ==================== BOOTSTRAP ====================

#[tauri::command]
pub fn get_bootstrap_flags(flags: State<'_, BootstrapFlags>) -> BootstrapFlags {
    flags.inner().clone()
}

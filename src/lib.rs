// Flathunt - desktop shell for the flat-listings front-end
// Module declarations

use tauri::Manager;

mod commands;
mod config;
pub mod state;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_clipboard_manager::init())
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }

            // Open (or create) the favourites database. A failed open is
            // survivable: the store degrades to empty reads and soft-failing
            // writes instead of taking the app down.
            let db = state::init_db().unwrap_or_else(|e| {
                log::error!("Failed to open the favourites database: {}", e);
                state::FavouritesDb::unavailable()
            });
            if !db.is_ready() {
                log::warn!("Favourites persistence is disabled for this session");
            }
            app.manage(db);

            app.manage(config::BootstrapFlags::from_env());

            log::info!("Flathunt initialized");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::favourite_home,
            commands::remove_favourite_home,
            commands::get_favourite_homes,
            commands::copy_to_clipboard,
            commands::open_link,
            commands::get_bootstrap_flags,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

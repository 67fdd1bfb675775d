//! `.env` loading for the photogen binary

use std::path::PathBuf;

use tracing::debug;

/// Directory holding the user-wide `.env` (`~/.photogen`)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".photogen"))
}

/// Load `.env` files into the process environment.
///
/// Order: `./.env`, then `~/.photogen/.env`. dotenvy never overwrites a
/// variable that is already set, so real environment variables win over both
/// and the current directory wins over the home directory.
///
/// Returns the files that were loaded, for logging once tracing is up.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded.push(path);
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() {
            match dotenvy::from_path(&env_file) {
                Ok(()) => loaded.push(env_file),
                Err(e) => debug!("Failed to load {}: {}", env_file.display(), e),
            }
        }
    }

    loaded
}

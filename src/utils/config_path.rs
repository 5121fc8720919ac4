use dotenv::dotenv;
use std::path::PathBuf;

pub const CONFIG_ENV_VAR: &str = "TOKENGRAPH_CONFIG";

/// Picks the config file to load: the explicit flag, then
/// `TOKENGRAPH_CONFIG`, then `<config dir>/tokengraph/config.json` if present.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    if explicit.is_some() {
        return explicit;
    }

    // Load environment variables from .env file in home directory if it exists
    if let Some(home_dir) = dirs::home_dir() {
        let env_path = home_dir.join(".env");
        if env_path.exists() {
            if let Err(e) = dotenv::from_path(&env_path) {
                tracing::warn!(path = %env_path.display(), "failed to load .env file: {}", e);
            }
        }
    }

    // Also load from current directory if it exists
    let _ = dotenv();

    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    dirs::config_dir()
        .map(|dir| dir.join("tokengraph").join("config.json"))
        .filter(|path| path.exists())
}

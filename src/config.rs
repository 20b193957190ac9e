//! Application configuration: data-file paths and admin credentials.
//!
//! Configuration comes from a TOML file (`shiftbook.toml` by default, path
//! overridable through `SHIFTBOOK_CONFIG`), with admin credentials also
//! accepted from environment variables, which take precedence over the file.
//! Data paths have defaults under `data/`; the admin credential pair has no
//! default and must be configured.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable naming an alternate config file path.
pub const CONFIG_PATH_VAR: &str = "SHIFTBOOK_CONFIG";
/// Environment variable overriding the admin username.
pub const ADMIN_USERNAME_VAR: &str = "SHIFTBOOK_ADMIN_USERNAME";
/// Environment variable overriding the admin password.
pub const ADMIN_PASSWORD_VAR: &str = "SHIFTBOOK_ADMIN_PASSWORD";

const DEFAULT_CONFIG_PATH: &str = "shiftbook.toml";

/// Fully resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Paths of the three record files.
    pub files: DataFiles,
    /// Administrator credential pair.
    pub admin: AdminCredentials,
}

/// Paths of the three record files.
#[derive(Debug, Clone, Deserialize)]
pub struct DataFiles {
    /// Employee roster file.
    #[serde(default = "default_employees_path")]
    pub employees: PathBuf,
    /// Work session log file.
    #[serde(default = "default_work_sessions_path")]
    pub work_sessions: PathBuf,
    /// Sales log file.
    #[serde(default = "default_sales_path")]
    pub sales: PathBuf,
}

impl Default for DataFiles {
    fn default() -> Self {
        Self {
            employees: default_employees_path(),
            work_sessions: default_work_sessions_path(),
            sales: default_sales_path(),
        }
    }
}

fn default_employees_path() -> PathBuf {
    PathBuf::from("data/employees.csv")
}

fn default_work_sessions_path() -> PathBuf {
    PathBuf::from("data/work_sessions.csv")
}

fn default_sales_path() -> PathBuf {
    PathBuf::from("data/sales.csv")
}

/// Administrator credential pair, compared by equality at login.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    /// Admin username.
    pub username: String,
    /// Admin password.
    pub password: String,
}

/// On-disk configuration file shape. Everything is optional; the resolver
/// fills in defaults and environment overrides.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    files: Option<DataFiles>,
    #[serde(default)]
    admin: Option<AdminPair>,
}

#[derive(Debug, Deserialize)]
struct AdminPair {
    username: Option<String>,
    password: Option<String>,
}

/// Loads the application configuration from file and environment.
///
/// # Errors
/// Returns [`Error::Config`] when the file exists but is malformed, or when
/// no admin credential pair is configured anywhere.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path =
        std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let file = load_file(Path::new(&path))?;
    resolve(
        file,
        std::env::var(ADMIN_USERNAME_VAR).ok(),
        std::env::var(ADMIN_PASSWORD_VAR).ok(),
    )
}

fn load_file(path: &Path) -> Result<FileConfig> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            info!(path = %path.display(), "loaded configuration file");
            toml::from_str(&contents).map_err(|e| Error::Config {
                message: format!("failed to parse {}: {e}", path.display()),
            })
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no configuration file, using defaults");
            Ok(FileConfig::default())
        }
        Err(e) => Err(Error::Config {
            message: format!("failed to read {}: {e}", path.display()),
        }),
    }
}

/// Merges file values with environment overrides. Environment wins for the
/// admin pair.
fn resolve(
    file: FileConfig,
    env_username: Option<String>,
    env_password: Option<String>,
) -> Result<AppConfig> {
    let files = file.files.unwrap_or_default();

    let (file_username, file_password) = match file.admin {
        Some(pair) => (pair.username, pair.password),
        None => (None, None),
    };
    let username = env_username.or(file_username).ok_or_else(|| Error::Config {
        message: format!(
            "admin username not configured (set [admin].username or {ADMIN_USERNAME_VAR})"
        ),
    })?;
    let password = env_password.or(file_password).ok_or_else(|| Error::Config {
        message: format!(
            "admin password not configured (set [admin].password or {ADMIN_PASSWORD_VAR})"
        ),
    })?;

    Ok(AppConfig {
        files,
        admin: AdminCredentials { username, password },
    })
}

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub llm: LlmConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory with the built frontend, served for every non-API path
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "dist".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
    /// Insert the built-in sample catalog when the names table is empty
    #[serde(default)]
    pub seed_sample_data: bool,
    /// JSON or CSV file imported when the names table is empty
    #[serde(default)]
    pub import_file: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LlmConfig {
    #[serde(default)]
    pub api_endpoint: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: i32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_endpoint: None,
            api_key: None,
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f64 {
    0.9
}

fn default_max_tokens() -> i32 {
    400
}

/// Environment variable that supplies or overrides `llm.api_key`
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
static_dir = "dist"

[database]
path = "db/names.db"
seed_sample_data = true

[llm]
api_endpoint = "https://api.openai.com/v1"
model = "gpt-4o-mini"
temperature = 0.9
max_tokens = 400
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `OPENAI_API_KEY` is applied on top of either source.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = load_file_or_default()?;
    if let Ok(key) = std::env::var(API_KEY_ENV) {
        apply_api_key(&mut config, &key);
    }
    Ok(config)
}

fn load_file_or_default() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

fn apply_api_key(config: &mut Config, key: &str) {
    let key = key.trim();
    if !key.is_empty() {
        config.llm.api_key = Some(key.to_string());
    }
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> anyhow::Result<PathBuf> {
    resolve_path(&config.database.path)
}

/// Resolve a configured path; relative paths are taken from the executable directory
pub fn resolve_path(path_str: &str) -> anyhow::Result<PathBuf> {
    let path = Path::new(path_str);

    // If absolute path, use as is
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    // If relative path, resolve it relative to the executable directory
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Ok(exe_dir.join(path));
        }
    }

    // Fallback: use relative to current directory
    Ok(PathBuf::from(path_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.database.path, "db/names.db");
        assert!(config.database.seed_sample_data);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert!(config.llm.api_key.is_none());
    }

    #[test]
    fn test_minimal_config_fills_defaults() {
        let config: Config = toml::from_str("[database]\npath = \"names.db\"\n").unwrap();
        assert_eq!(config.server.static_dir, "dist");
        assert!(!config.database.seed_sample_data);
        assert!(config.database.import_file.is_none());
        assert_eq!(config.llm.max_tokens, 400);
    }

    #[test]
    fn test_api_key_override() {
        let mut config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        apply_api_key(&mut config, "   ");
        assert!(config.llm.api_key.is_none());
        apply_api_key(&mut config, " sk-test ");
        assert_eq!(config.llm.api_key.as_deref(), Some("sk-test"));
    }

    #[test]
    fn test_absolute_path_is_kept() {
        let abs = if cfg!(windows) { "C:\\data\\names.db" } else { "/var/lib/names.db" };
        assert_eq!(resolve_path(abs).unwrap(), PathBuf::from(abs));
    }
}

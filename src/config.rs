use std::env;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub articles: ArticlesConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticlesConfig {
    /// Directory scanned for raw article files
    #[serde(default = "default_articles_dir")]
    pub dir: String,
    /// File extension accepted by the directory scanner (without the dot)
    #[serde(default = "default_article_extension")]
    pub extension: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Keywords that classify an article as a flood report
    #[serde(default = "default_flood_keywords")]
    pub flood_keywords: Vec<String>,
    /// Token window scanned around a place name for administrative context
    #[serde(default = "default_context_window")]
    pub context_window: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path; empty or absent logs to stdout
    #[serde(default)]
    pub file: Option<String>,
    /// "text" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub enable_rotation: bool,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
}

// Default value functions
fn default_articles_dir() -> String {
    "data/raw_articles".to_string()
}

fn default_article_extension() -> String {
    "txt".to_string()
}

fn default_flood_keywords() -> Vec<String> {
    [
        "flood",
        "flooding",
        "floodwater",
        "flooded",
        "inundated",
        "waterlogging",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_context_window() -> usize {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    7
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            articles: ArticlesConfig::default(),
            extraction: ExtractionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ArticlesConfig {
    fn default() -> Self {
        Self {
            dir: default_articles_dir(),
            extension: default_article_extension(),
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            flood_keywords: default_flood_keywords(),
            context_window: default_context_window(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
            format: default_log_format(),
            enable_rotation: false,
            max_backups: default_max_backups(),
        }
    }
}

impl AppConfig {
    /// Load configuration from TOML file with environment variable fallback
    pub fn load() -> Self {
        let mut config = Self::load_from_file();
        config.override_with_env();
        config
    }

    /// Load configuration from TOML file
    fn load_from_file() -> Self {
        let config_paths = [
            "disasterscan.toml",
            "config.toml",
            "config/disasterscan.toml",
            "/etc/disasterscan/config.toml",
        ];

        for path in &config_paths {
            if Path::new(path).exists() {
                debug!("Loading config from: {}", path);
                match fs::read_to_string(path) {
                    Ok(content) => match toml::from_str::<AppConfig>(&content) {
                        Ok(config) => {
                            debug!("Successfully loaded config from: {}", path);
                            return config;
                        }
                        Err(e) => {
                            warn!("Failed to parse config file {}: {}", path, e);
                        }
                    },
                    Err(e) => {
                        warn!("Failed to read config file {}: {}", path, e);
                    }
                }
            }
        }

        debug!("No config file found, using defaults");
        Self::default()
    }

    /// Override configuration with environment variables
    fn override_with_env(&mut self) {
        // Article config
        if let Ok(dir) = env::var("ARTICLES_DIR") {
            self.articles.dir = dir;
        }
        if let Ok(extension) = env::var("ARTICLE_EXTENSION") {
            self.articles.extension = extension.trim_start_matches('.').to_string();
        }

        // Extraction config
        if let Ok(keywords) = env::var("FLOOD_KEYWORDS") {
            let parsed: Vec<String> = keywords
                .split(',')
                .map(|kw| kw.trim().to_lowercase())
                .filter(|kw| !kw.is_empty())
                .collect();
            if parsed.is_empty() {
                error!("Invalid FLOOD_KEYWORDS: {}", keywords);
            } else {
                self.extraction.flood_keywords = parsed;
            }
        }
        if let Ok(window) = env::var("CONTEXT_WINDOW") {
            if let Ok(window) = window.parse() {
                self.extraction.context_window = window;
            } else {
                error!("Invalid CONTEXT_WINDOW: {}", window);
            }
        }

        // Logging config
        if let Ok(log_level) = env::var("RUST_LOG") {
            self.logging.level = log_level;
        }
        if let Ok(log_file) = env::var("LOG_FILE") {
            self.logging.file = Some(log_file);
        }
        if let Ok(log_format) = env::var("LOG_FORMAT") {
            self.logging.format = log_format;
        }
    }

    /// Generate a sample TOML configuration file
    pub fn generate_sample_config() -> String {
        let sample_config = AppConfig::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }
}

// Global configuration instance

/// Get the global configuration instance
pub fn get_config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::load)
}

/// Initialize the global configuration
pub fn init_config() {
    CONFIG.get_or_init(AppConfig::load);
}

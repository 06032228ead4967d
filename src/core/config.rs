use log::LevelFilter;

pub const DEFAULT_BASE_URL: &str = "/";
pub const DEFAULT_MODEL_PATH: &str = "models/Controller.glb";

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown log level `{0}` (expected error, warn, info, debug or trace)")]
    LogLevel(String),
}

/// Run-time settings read from `data-*` attributes on `<body>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub base_url: String,
    pub log_level: LevelFilter,
    pub model_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            log_level: LevelFilter::Info,
            model_path: DEFAULT_MODEL_PATH.to_string(),
        }
    }
}

pub fn parse_log_level(s: &str) -> Result<LevelFilter, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "error" => Ok(LevelFilter::Error),
        "warn" | "warning" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        _ => Err(ConfigError::LogLevel(s.to_string())),
    }
}

/// Ensure a leading and trailing `/`; empty means the site root.
pub fn normalize_base(s: &str) -> String {
    let trimmed = s.trim().trim_matches('/');
    if trimmed.is_empty() {
        return DEFAULT_BASE_URL.to_string();
    }
    format!("/{trimmed}/")
}

impl AppConfig {
    /// Build from optional attribute values. Missing or blank attributes keep
    /// their defaults.
    pub fn from_attrs(
        base_url: Option<&str>,
        log_level: Option<&str>,
        model_path: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut cfg = AppConfig::default();
        if let Some(b) = base_url.filter(|s| !s.trim().is_empty()) {
            cfg.base_url = normalize_base(b);
        }
        if let Some(l) = log_level.filter(|s| !s.trim().is_empty()) {
            cfg.log_level = parse_log_level(l)?;
        }
        if let Some(m) = model_path.map(str::trim).filter(|s| !s.is_empty()) {
            cfg.model_path = m.trim_start_matches('/').to_string();
        }
        Ok(cfg)
    }

    pub fn model_url(&self) -> String {
        format!("{}{}", self.base_url, self.model_path)
    }
}

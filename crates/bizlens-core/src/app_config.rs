use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub locations_path: PathBuf,
    pub export_dir: PathBuf,
    pub demo_mode: bool,
    pub demo_seed: u64,
    pub account_id: Option<String>,
    pub access_token: Option<String>,
    pub api_base_url: String,
    pub performance_base_url: String,
    pub request_timeout_secs: u64,
    pub default_range_days: u32,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("locations_path", &self.locations_path)
            .field("export_dir", &self.export_dir)
            .field("demo_mode", &self.demo_mode)
            .field("demo_seed", &self.demo_seed)
            .field("account_id", &self.account_id)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[redacted]"),
            )
            .field("api_base_url", &self.api_base_url)
            .field("performance_base_url", &self.performance_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("default_range_days", &self.default_range_days)
            .finish()
    }
}

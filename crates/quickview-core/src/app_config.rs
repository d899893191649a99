use std::time::Duration;

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

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Storefront base URL. Only the origin is used for API calls.
    pub store_url: String,
    /// Handle of the product appended to the cart when the bonus rule fires.
    /// Must name a real product in the store or the bonus is silently skipped.
    pub bonus_product_handle: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub success_label_ms: u64,
    pub auto_close_ms: u64,
    pub currency_symbol: String,
}

impl AppConfig {
    #[must_use]
    pub fn success_label_delay(&self) -> Duration {
        Duration::from_millis(self.success_label_ms)
    }

    #[must_use]
    pub fn auto_close_delay(&self) -> Duration {
        Duration::from_millis(self.auto_close_ms)
    }
}

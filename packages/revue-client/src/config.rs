//! Suite configuration.

/// Base endpoint of the deployed Revue Crafters service.
pub const DEFAULT_BASE_URL: &str = "https://d2925tksfvgq8c.cloudfront.net";
/// Login used to obtain the bearer token.
pub const DEFAULT_EMAIL: &str = "vasko85@vasko.com";
/// Password paired with [`DEFAULT_EMAIL`].
pub const DEFAULT_PASSWORD: &str = "vasko85";

/// Connection settings for one suite run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    /// Base endpoint, without the `/api` prefix
    pub base_url: String,
    /// Login email
    pub email: String,
    /// Login password
    pub password: String,
    /// Per-request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl SuiteConfig {
    /// Joins the base URL with an absolute API path such as `/api/Revue/All`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            request_timeout_ms: 30000, // 30 seconds default
        }
    }
}

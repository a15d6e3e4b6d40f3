/// Environment variable consulted by [`AnalyticsConfig::from_env`].
pub const ANALYTICS_ENABLED_ENV: &str = "DAVINCI_ANALYTICS_ENABLED";

/// Configuration for analytics dispatch.
///
/// # Examples
///
/// ```rust
/// use davinci_bridge::AnalyticsConfig;
///
/// // Tracking is on unless switched off
/// let config = AnalyticsConfig::default();
/// assert!(config.enabled);
///
/// let config = AnalyticsConfig::default().with_enabled(false);
/// assert!(!config.enabled);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticsConfig {
    /// When false, events are dropped even if a collector is supplied.
    pub enabled: bool,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl AnalyticsConfig {
    /// Builds a configuration from the process environment.
    ///
    /// Reads [`ANALYTICS_ENABLED_ENV`]. Accepts `1`/`0`, `true`/`false` and
    /// `on`/`off` in any case; anything else keeps the default. Call
    /// `dotenvy::dotenv()` first if the value lives in a `.env` file.
    pub fn from_env() -> Self {
        let value = std::env::var(ANALYTICS_ENABLED_ENV).ok();
        Self::from_env_value(value.as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        let default = Self::default();
        match value.and_then(parse_flag) {
            Some(enabled) => default.with_enabled(enabled),
            None => default,
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" => Some(true),
        "0" | "false" | "off" => Some(false),
        _ => None,
    }
}

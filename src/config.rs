pub const DEFAULT_ENVIRONMENT: &str = "development";

// Captured at build time, e.g. `APP_ENV=production trunk build --release`
const APP_ENV: Option<&str> = option_env!("APP_ENV");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    pub environment: String,
}

impl PanelConfig {
    pub fn resolve() -> Self {
        Self::from_value(APP_ENV)
    }

    /// Blank values count as unset.
    pub fn from_value(value: Option<&str>) -> Self {
        let environment = value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_ENVIRONMENT)
            .to_string();
        Self { environment }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::from_value(None)
    }
}

//! Configuration types for lemin.
//!
//! All types implement [`serde::Deserialize`] and every field has a
//! default, so a configuration file only needs the keys it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining validation and report settings.
//! - [`ValidationConfig`] - Optional strictness of the graph rules.
//! - [`ReportConfig`] - Controls what the report contains.
//!
//! # Example
//!
//! ```
//! # use lemin::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.validation().reject_reversed_connections());
//! assert!(config.validation().require_reachable());
//! assert!(config.report().echo_input());
//! ```

use serde::Deserialize;

use lemin_parser::ParseConfig;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Validation configuration section.
    #[serde(default)]
    validation: ValidationConfig,

    /// Report configuration section.
    #[serde(default)]
    report: ReportConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(validation: ValidationConfig, report: ReportConfig) -> Self {
        Self { validation, report }
    }

    /// Returns the validation configuration.
    pub fn validation(&self) -> &ValidationConfig {
        &self.validation
    }

    /// Returns the report configuration.
    pub fn report(&self) -> &ReportConfig {
        &self.report
    }
}

/// Switches for the rules that have a lenient alternative.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Reject `B-A` after `A-B`.
    reject_reversed_connections: bool,

    /// Fail when a room cannot be reached from the start room.
    require_reachable: bool,
}

impl ValidationConfig {
    /// Creates a new [`ValidationConfig`].
    ///
    /// # Arguments
    ///
    /// * `reject_reversed_connections` - Treat `B-A` after `A-B` as a duplicate.
    /// * `require_reachable` - Fail when a room has no path from the start room.
    pub fn new(reject_reversed_connections: bool, require_reachable: bool) -> Self {
        Self {
            reject_reversed_connections,
            require_reachable,
        }
    }

    pub fn reject_reversed_connections(&self) -> bool {
        self.reject_reversed_connections
    }

    pub fn require_reachable(&self) -> bool {
        self.require_reachable
    }

    /// Parser options derived from this section.
    pub fn parse_config(&self) -> ParseConfig {
        ParseConfig::new(self.reject_reversed_connections)
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::new(true, true)
    }
}

/// Report output options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Print the input lines before the summary.
    echo_input: bool,
}

impl ReportConfig {
    /// Creates a new [`ReportConfig`].
    pub fn new(echo_input: bool) -> Self {
        Self { echo_input }
    }

    pub fn echo_input(&self) -> bool {
        self.echo_input
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();

        assert!(config.validation().reject_reversed_connections());
        assert!(config.validation().require_reachable());
        assert!(config.report().echo_input());
    }

    #[test]
    fn test_partial_section() {
        let config: AppConfig = toml::from_str(
            r#"
            [validation]
            require_reachable = false
            "#,
        )
        .unwrap();

        assert!(config.validation().reject_reversed_connections());
        assert!(!config.validation().require_reachable());
        assert!(config.report().echo_input());
    }

    #[test]
    fn test_full_config() {
        let config: AppConfig = toml::from_str(
            r#"
            [validation]
            reject_reversed_connections = false
            require_reachable = false

            [report]
            echo_input = false
            "#,
        )
        .unwrap();

        assert!(!config.validation().reject_reversed_connections());
        assert!(!config.report().echo_input());
        assert_eq!(config.validation().parse_config(), ParseConfig::new(false));
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[report]\necho_input = \"yes\"");
        assert!(result.is_err());
    }
}

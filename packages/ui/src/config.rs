//! # Navigation bar configuration — `navbar.toml`
//!
//! Branding, search and route settings the [`crate::Navbar`] reads from context.
//!
//! ## Structure
//!
//! ```toml
//! [brand]
//! title = "Toursy"
//! logo_url = "/assets/toursy-logo.png"
//!
//! [search]
//! placeholder = "Search Tours"
//! results_path = "/tour/search"
//!
//! [routes]
//! home = "/"
//! profile_prefix = "/user"
//! ```
//!
//! Every section is optional. A missing or empty file is equivalent to
//! [`NavbarConfig::default`].

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a [`NavbarConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid navbar config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration stored in `navbar.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NavbarConfig {
    #[serde(default)]
    pub brand: BrandConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub routes: RoutesConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrandConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// Image shown in the branding link. Falls back to `title` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            logo_url: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default = "default_results_path")]
    pub results_path: String,
    #[serde(default = "default_empty_term_notice")]
    pub empty_term_notice: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            results_path: default_results_path(),
            empty_term_notice: default_empty_term_notice(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoutesConfig {
    #[serde(default = "default_home")]
    pub home: String,
    #[serde(default = "default_login")]
    pub login: String,
    #[serde(default = "default_signup")]
    pub signup: String,
    #[serde(default = "default_add_tour")]
    pub add_tour: String,
    /// Profile pages live at `<profile_prefix>/<user id>`.
    #[serde(default = "default_profile_prefix")]
    pub profile_prefix: String,
    #[serde(default = "default_dashboard")]
    pub dashboard: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            home: default_home(),
            login: default_login(),
            signup: default_signup(),
            add_tour: default_add_tour(),
            profile_prefix: default_profile_prefix(),
            dashboard: default_dashboard(),
        }
    }
}

impl RoutesConfig {
    pub fn profile(&self, user_id: &str) -> String {
        format!("{}/{}", self.profile_prefix.trim_end_matches('/'), user_id)
    }
}

fn default_title() -> String {
    "Toursy".to_string()
}

fn default_placeholder() -> String {
    "Search Tours".to_string()
}

fn default_results_path() -> String {
    "/tour/search".to_string()
}

fn default_empty_term_notice() -> String {
    "Please enter a search term".to_string()
}

fn default_home() -> String {
    "/".to_string()
}

fn default_login() -> String {
    "/login".to_string()
}

fn default_signup() -> String {
    "/signup".to_string()
}

fn default_add_tour() -> String {
    "/addTour".to_string()
}

fn default_profile_prefix() -> String {
    "/user".to_string()
}

fn default_dashboard() -> String {
    "/dashboard".to_string()
}

impl NavbarConfig {
    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Parse from TOML, logging and falling back to defaults on error.
    pub fn from_toml_or_default(s: &str) -> Self {
        Self::from_toml(s).unwrap_or_else(|e| {
            tracing::warn!("{e}; using default navbar config");
            Self::default()
        })
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Read the navbar config from context, or the defaults if none was provided.
pub fn use_navbar_config() -> NavbarConfig {
    try_use_context::<NavbarConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = NavbarConfig::from_toml("").unwrap();
        assert_eq!(config, NavbarConfig::default());
        assert_eq!(config.search.results_path, "/tour/search");
        assert_eq!(config.routes.add_tour, "/addTour");
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = NavbarConfig::from_toml(
            r#"
            [brand]
            logo_url = "/assets/logo.png"

            [routes]
            dashboard = "/me/dashboard"
            "#,
        )
        .unwrap();
        assert_eq!(config.brand.title, "Toursy");
        assert_eq!(config.brand.logo_url.as_deref(), Some("/assets/logo.png"));
        assert_eq!(config.routes.dashboard, "/me/dashboard");
        assert_eq!(config.routes.login, "/login");
    }

    #[test]
    fn test_invalid_toml_falls_back() {
        assert!(NavbarConfig::from_toml("[brand\ntitle = 1").is_err());
        assert_eq!(
            NavbarConfig::from_toml_or_default("[brand\ntitle = 1"),
            NavbarConfig::default()
        );
    }

    #[test]
    fn test_profile_route() {
        let mut routes = RoutesConfig::default();
        assert_eq!(routes.profile("42"), "/user/42");
        routes.profile_prefix = "/people/".to_string();
        assert_eq!(routes.profile("42"), "/people/42");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = NavbarConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(NavbarConfig::from_toml(&text).unwrap(), config);
    }
}

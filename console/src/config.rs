//! Console Configuration
//!
//! Loads configuration from environment variables.

use anyhow::{bail, Context, Result};
use std::env;

use crate::labels::Language;
use crate::permissions::UnknownRolePolicy;

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => bail!("APP_ENV must be 'development' or 'production', got '{other}'"),
        }
    }

    /// Unknown roles fail fast during development and fail closed otherwise.
    #[must_use]
    pub const fn default_unknown_role_policy(self) -> UnknownRolePolicy {
        match self {
            Self::Development => UnknownRolePolicy::Strict,
            Self::Production => UnknownRolePolicy::FailClosed,
        }
    }
}

/// Console configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Deployment environment (default: production)
    pub app_env: AppEnv,

    /// How unresolvable roles are handled (default: derived from `app_env`)
    pub unknown_role_policy: UnknownRolePolicy,

    /// Language for labels and captions (default: en)
    pub default_language: Language,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let app_env = match env::var("APP_ENV") {
            Ok(value) => AppEnv::parse(&value)?,
            Err(_) => AppEnv::Production,
        };

        let unknown_role_policy = match env::var("UNKNOWN_ROLE_POLICY") {
            Ok(value) => parse_policy(&value)?,
            Err(_) => app_env.default_unknown_role_policy(),
        };

        let default_language = match env::var("DEFAULT_LANGUAGE") {
            Ok(value) => value
                .parse::<Language>()
                .context("DEFAULT_LANGUAGE must be a supported language code")?,
            Err(_) => Language::English,
        };

        Ok(Self {
            app_env,
            unknown_role_policy,
            default_language,
        })
    }

    /// Whether unknown roles should surface as errors.
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        matches!(self.unknown_role_policy, UnknownRolePolicy::Strict)
    }

    /// Create a default configuration for testing.
    #[must_use]
    pub const fn default_for_test() -> Self {
        Self {
            app_env: AppEnv::Development,
            unknown_role_policy: UnknownRolePolicy::Strict,
            default_language: Language::English,
        }
    }
}

fn parse_policy(value: &str) -> Result<UnknownRolePolicy> {
    match value.trim().to_ascii_lowercase().as_str() {
        "strict" => Ok(UnknownRolePolicy::Strict),
        "fail_closed" | "fail-closed" => Ok(UnknownRolePolicy::FailClosed),
        other => bail!("UNKNOWN_ROLE_POLICY must be 'strict' or 'fail_closed', got '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    const VARS: [&str; 3] = ["APP_ENV", "UNKNOWN_ROLE_POLICY", "DEFAULT_LANGUAGE"];

    fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
        for var in VARS {
            env::remove_var(var);
        }
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = f();
        for var in VARS {
            env::remove_var(var);
        }
        result
    }

    #[test]
    #[serial]
    fn test_defaults_are_production() {
        let config = with_env(&[], Config::from_env).unwrap();
        assert_eq!(config.app_env, AppEnv::Production);
        assert_eq!(config.unknown_role_policy, UnknownRolePolicy::FailClosed);
        assert_eq!(config.default_language, Language::English);
        assert!(!config.is_strict());
    }

    #[test]
    #[serial]
    fn test_development_is_strict() {
        let config = with_env(&[("APP_ENV", "development")], Config::from_env).unwrap();
        assert_eq!(config.app_env, AppEnv::Development);
        assert!(config.is_strict());
    }

    #[test]
    #[serial]
    fn test_explicit_policy_wins_over_env() {
        let config = with_env(
            &[("APP_ENV", "dev"), ("UNKNOWN_ROLE_POLICY", "fail_closed")],
            Config::from_env,
        )
        .unwrap();
        assert_eq!(config.unknown_role_policy, UnknownRolePolicy::FailClosed);
    }

    #[test]
    #[serial]
    fn test_language_from_env() {
        let config = with_env(&[("DEFAULT_LANGUAGE", "ar")], Config::from_env).unwrap();
        assert_eq!(config.default_language, Language::Arabic);
    }

    #[test]
    #[serial]
    fn test_invalid_values_are_errors() {
        let err = with_env(&[("APP_ENV", "staging")], Config::from_env).unwrap_err();
        assert!(err.to_string().contains("APP_ENV"));

        let err = with_env(&[("UNKNOWN_ROLE_POLICY", "open")], Config::from_env).unwrap_err();
        assert!(err.to_string().contains("UNKNOWN_ROLE_POLICY"));

        let err = with_env(&[("DEFAULT_LANGUAGE", "fr")], Config::from_env).unwrap_err();
        assert!(err.to_string().contains("DEFAULT_LANGUAGE"));
    }

    #[test]
    fn test_default_for_test_is_strict() {
        assert!(Config::default_for_test().is_strict());
    }
}

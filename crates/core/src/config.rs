//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services, so
//! request handling never reads process-wide environment variables. The `*_from_env_value`
//! helpers take the raw optional value rather than reading the environment themselves, which
//! keeps them testable without mutating global state.

use crate::constants::DEFAULT_DB_MAX_CONNECTIONS;
use crate::render::RenderOptions;
use crate::{PitchError, PitchResult};
use pitch_types::NonEmptyText;

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    database_url: NonEmptyText,
    db_max_connections: u32,
    render_options: RenderOptions,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns `PitchError::InvalidInput` if the pool size is zero.
    pub fn new(
        database_url: NonEmptyText,
        db_max_connections: u32,
        render_options: RenderOptions,
    ) -> PitchResult<Self> {
        if db_max_connections == 0 {
            return Err(PitchError::InvalidInput(
                "db_max_connections must be at least 1".into(),
            ));
        }

        Ok(Self {
            database_url,
            db_max_connections,
            render_options,
        })
    }

    pub fn database_url(&self) -> &str {
        self.database_url.as_str()
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
    }

    pub fn render_options(&self) -> RenderOptions {
        self.render_options
    }

    /// Resolve configuration from `DATABASE_URL`, `PITCH_DB_MAX_CONNECTIONS` and
    /// `PITCH_ESCAPE_HTML`.
    ///
    /// Intended to be called once by binaries at startup.
    pub fn from_env() -> PitchResult<Self> {
        let database_url = database_url_from_env_value(std::env::var("DATABASE_URL").ok())?;
        let db_max_connections =
            db_max_connections_from_env_value(std::env::var("PITCH_DB_MAX_CONNECTIONS").ok())?;
        let escape_html = escape_html_from_env_value(std::env::var("PITCH_ESCAPE_HTML").ok())?;

        Self::new(
            database_url,
            db_max_connections,
            RenderOptions { escape_html },
        )
    }
}

fn normalise(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse the database URL from an optional string value.
///
/// # Errors
///
/// Returns `PitchError::InvalidInput` if the value is missing or blank.
pub fn database_url_from_env_value(value: Option<String>) -> PitchResult<NonEmptyText> {
    NonEmptyText::new(value.unwrap_or_default())
        .map_err(|_| PitchError::InvalidInput("DATABASE_URL is not set".into()))
}

/// Parse the connection pool size from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default pool size.
pub fn db_max_connections_from_env_value(value: Option<String>) -> PitchResult<u32> {
    let Some(value) = normalise(value) else {
        return Ok(DEFAULT_DB_MAX_CONNECTIONS);
    };

    match value.parse::<u32>() {
        Ok(0) | Err(_) => Err(PitchError::InvalidInput(format!(
            "PITCH_DB_MAX_CONNECTIONS must be a positive integer, got {value:?}"
        ))),
        Ok(n) => Ok(n),
    }
}

/// Parse the HTML escaping switch from an optional string value.
///
/// Accepts `true`/`false`/`1`/`0` (case-insensitive). Missing means `false`.
pub fn escape_html_from_env_value(value: Option<String>) -> PitchResult<bool> {
    let Some(value) = normalise(value) else {
        return Ok(false);
    };

    match value.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(PitchError::InvalidInput(format!(
            "PITCH_ESCAPE_HTML must be true or false, got {value:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url() -> NonEmptyText {
        NonEmptyText::new("postgres://localhost/pitches").unwrap()
    }

    #[test]
    fn new_rejects_empty_pool() {
        let err = CoreConfig::new(url(), 0, RenderOptions::default()).unwrap_err();
        assert!(matches!(err, PitchError::InvalidInput(_)));
    }

    #[test]
    fn new_keeps_render_options() {
        let cfg = CoreConfig::new(url(), 3, RenderOptions { escape_html: true }).unwrap();
        assert_eq!(cfg.database_url(), "postgres://localhost/pitches");
        assert_eq!(cfg.db_max_connections(), 3);
        assert!(cfg.render_options().escape_html);
    }

    #[test]
    fn database_url_is_required() {
        assert!(database_url_from_env_value(None).is_err());
        assert!(database_url_from_env_value(Some("".into())).is_err());
        assert_eq!(
            database_url_from_env_value(Some(" postgres://db/app ".into()))
                .unwrap()
                .as_str(),
            "postgres://db/app"
        );
    }

    #[test]
    fn pool_size_defaults_and_validates() {
        assert_eq!(
            db_max_connections_from_env_value(None).unwrap(),
            DEFAULT_DB_MAX_CONNECTIONS
        );
        assert_eq!(db_max_connections_from_env_value(Some("12".into())).unwrap(), 12);
        assert!(db_max_connections_from_env_value(Some("0".into())).is_err());
        assert!(db_max_connections_from_env_value(Some("many".into())).is_err());
    }

    #[test]
    fn escape_switch_parses_common_spellings() {
        assert!(!escape_html_from_env_value(None).unwrap());
        assert!(escape_html_from_env_value(Some("TRUE".into())).unwrap());
        assert!(escape_html_from_env_value(Some("1".into())).unwrap());
        assert!(!escape_html_from_env_value(Some("false".into())).unwrap());
        assert!(escape_html_from_env_value(Some("yes please".into())).is_err());
    }
}

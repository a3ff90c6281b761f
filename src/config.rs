/*
 * Responsibility
 * - Read process-level settings from the environment (PORT, ENGINE_MODE)
 * - Every value has a default: the service starts with no environment at all
 * - Reject values that are present but unusable (fail at startup, not later)
 */
use std::fmt;
use std::net::{Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8080;

/// How chatty the HTTP engine is.
///
/// Passed explicitly into `HttpRouter::new`; nothing here touches global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineMode {
    Debug,
    #[default]
    Release,
    Test,
}

impl EngineMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "release" => Some(Self::Release),
            "test" => Some(Self::Test),
            _ => None,
        }
    }

    /// Access logs and lifecycle details at INFO instead of DEBUG.
    pub fn is_verbose(&self) -> bool {
        matches!(self, Self::Debug)
    }

    /// Filter used when RUST_LOG is not set.
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Self::Debug => "info,health_service=debug,tower_http=info",
            Self::Release | Self::Test => "warn,health_service=info",
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub mode: EngineMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            mode: EngineMode::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));

        let mode = match std::env::var("ENGINE_MODE") {
            Ok(value) => EngineMode::parse(&value).ok_or(ConfigError::Invalid("ENGINE_MODE"))?,
            Err(_) => EngineMode::default(),
        };

        Ok(Self { addr, mode })
    }
}

fn parse_port(value: Option<&str>) -> Result<u16, ConfigError> {
    match value.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid("PORT")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_when_unset_or_blank() {
        assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
        assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
    }

    #[test]
    fn port_rejects_garbage() {
        assert_eq!(parse_port(Some("9090")).unwrap(), 9090);
        let err = parse_port(Some("http")).unwrap_err();
        assert_eq!(err.to_string(), "invalid configuration: PORT");
        assert!(parse_port(Some("70000")).is_err());
    }

    #[test]
    fn engine_mode_parsing() {
        assert_eq!(EngineMode::parse("Release"), Some(EngineMode::Release));
        assert_eq!(EngineMode::parse(" debug "), Some(EngineMode::Debug));
        assert_eq!(EngineMode::parse("test"), Some(EngineMode::Test));
        assert_eq!(EngineMode::parse("loud"), None);
        assert_eq!(EngineMode::default(), EngineMode::Release);
        assert!(!EngineMode::Release.is_verbose());
    }

    #[test]
    fn default_config_listens_on_all_interfaces() {
        let Config { addr, mode } = Config::default();
        assert_eq!(addr.to_string(), "0.0.0.0:8080");
        assert_eq!(mode, EngineMode::Release);
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logger configuration.
//!
//! [`Config`] collects everything a host usually decides at startup.  It can be built in code,
//! read from the environment with [`Config::from_env`], or deserialized with the `serde`
//! feature.

use crate::Level;
use crate::error::{Error, Result};
use crate::flags::Flags;
use std::path::PathBuf;

pub const ENV_LOG_THRESHOLD: &str = "LOGSPLIT_LOG_THRESHOLD";
pub const ENV_STDOUT_THRESHOLD: &str = "LOGSPLIT_STDOUT_THRESHOLD";
pub const ENV_LOG_FILE: &str = "LOGSPLIT_LOG_FILE";
pub const ENV_FLAGS: &str = "LOGSPLIT_FLAGS";

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Minimum level written to the log sink.
    pub log_threshold: Level,
    /// Minimum level written to the console.
    pub stdout_threshold: Level,
    /// File the log sink appends to.  `None` keeps the current log sink.
    pub log_file: Option<PathBuf>,
    pub flags: Flags,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_threshold: Level::Info,
            stdout_threshold: Level::Info,
            log_file: None,
            flags: Flags::STD,
        }
    }
}

impl Config {
    /**
    Reads the configuration from the process environment.

    Unset variables keep their defaults.  Thresholds use the level names (`TRACE` .. `NONE`),
    flags use the names accepted by [Flags]'s `FromStr`.
    */
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like [Config::from_env], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Config::default();
        if let Some(value) = lookup(ENV_LOG_THRESHOLD) {
            config.log_threshold = parse_var(ENV_LOG_THRESHOLD, &value)?;
        }
        if let Some(value) = lookup(ENV_STDOUT_THRESHOLD) {
            config.stdout_threshold = parse_var(ENV_STDOUT_THRESHOLD, &value)?;
        }
        if let Some(value) = lookup(ENV_LOG_FILE).filter(|value| !value.is_empty()) {
            config.log_file = Some(PathBuf::from(value));
        }
        if let Some(value) = lookup(ENV_FLAGS) {
            config.flags = parse_var(ENV_FLAGS, &value)?;
        }
        Ok(config)
    }
}

fn parse_var<T>(var: &'static str, value: &str) -> Result<T>
where
    T: std::str::FromStr<Err = Error>,
{
    value.parse().map_err(|source| Error::Env {
        var,
        source: Box::new(source),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = Config::from_lookup(lookup(&[
            (ENV_LOG_THRESHOLD, "ERROR"),
            (ENV_STDOUT_THRESHOLD, "TRACE"),
            (ENV_LOG_FILE, "/var/log/app.log"),
            (ENV_FLAGS, "time|utc"),
        ]))
        .unwrap();
        assert_eq!(config.log_threshold, Level::Error);
        assert_eq!(config.stdout_threshold, Level::Trace);
        assert_eq!(config.log_file, Some(PathBuf::from("/var/log/app.log")));
        assert_eq!(config.flags, Flags::TIME | Flags::UTC);
    }

    #[test]
    fn bad_level_names_the_variable() {
        let err = Config::from_lookup(lookup(&[(ENV_STDOUT_THRESHOLD, "Warn")])).unwrap_err();
        match err {
            Error::Env { var, source } => {
                assert_eq!(var, ENV_STDOUT_THRESHOLD);
                assert!(matches!(*source, Error::UnknownLevel(_)));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn deserializes_partial_config() {
            let config: Config =
                serde_json::from_str(r#"{"log_threshold":"WARN","flags":3}"#).unwrap();
            assert_eq!(config.log_threshold, Level::Warn);
            assert_eq!(config.stdout_threshold, Level::Info);
            assert_eq!(config.flags, Flags::STD);
            assert_eq!(config.log_file, None);
        }
    }
}

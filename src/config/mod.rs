use config::{Config, ConfigError, Environment, File};
use once_cell::sync::Lazy;
use rocket::serde::Deserialize;

/// config properties for the sqlite database
#[derive(Deserialize, Clone, Debug)]
#[serde(crate = "rocket::serde")]
pub struct DbConfig {
    /// path to the sqlite file, created on first launch if it doesn't exist
    pub location: String,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(crate = "rocket::serde")]
pub struct LogConfig {
    /// one of `off`, `error`, `warn`, `info`, `debug`, `trace`
    pub level: String,
    /// if set, logs are appended to this file as well as stdout
    pub file: Option<String>,
}

/// config properties for the whole of this application
#[derive(Deserialize, Clone, Debug)]
#[serde(crate = "rocket::serde")]
pub struct NotefulConfig {
    pub database: DbConfig,
    pub log: LogConfig,
}

/// builds the config from the defaults, then ./Noteful.toml (if it exists), then `NOTEFUL_` env vars.
///
/// nested keys use `__` in env vars, e.g. `NOTEFUL_DATABASE__LOCATION=/var/lib/noteful.sqlite`
pub fn build_config() -> Result<NotefulConfig, ConfigError> {
    Config::builder()
        .set_default("database.location", "./noteful.sqlite")?
        .set_default("log.level", "info")?
        .add_source(File::with_name("./Noteful.toml").required(false))
        .add_source(Environment::with_prefix("NOTEFUL").separator("__"))
        .build()?
        .try_deserialize()
}

/// Parses the config. A missing config file is fine, but a malformed one is not,
/// and the application will panic since logging isn't set up yet
pub fn parse_config() -> NotefulConfig {
    match build_config() {
        Ok(config) => config,
        Err(e) => panic!("Failed to parse config. Exception is {e}"),
    }
}

/// global variable for config, that way it doesn't need to be repeatedly parsed
pub static NOTEFUL_CONFIG: Lazy<NotefulConfig> = Lazy::new(parse_config);

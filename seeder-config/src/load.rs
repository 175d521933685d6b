use serde::de::DeserializeOwned;
use thiserror::Error;

/// Prefix for configuration environment variables.
const ENV_PREFIX: &str = "APP";

/// Separator between environment variable prefix and key segments.
const ENV_PREFIX_SEPARATOR: &str = "_";

/// Separator for nested configuration keys in environment variables.
const ENV_SEPARATOR: &str = "__";

/// Separator for list elements in environment variables.
const LIST_SEPARATOR: &str = ",";

/// Trait implemented by configuration structures that require list parsing help.
pub trait Config {
    /// Keys whose values should be parsed as lists when loading the configuration.
    const LIST_PARSE_KEYS: &'static [&'static str];
}

/// Errors that can occur while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum LoadConfigError {
    /// Environment variables failed to merge into the configuration.
    #[error("failed to read configuration from environment variables: {0}")]
    EnvironmentVariables(#[source] config::ConfigError),

    /// The environment was read but deserialization failed.
    ///
    /// The underlying message names the missing or invalid key; every required field
    /// maps to an `APP_`-prefixed variable with `__` separating nested keys (for
    /// example `APP_DESTINATION__HOST`).
    #[error(
        "failed to deserialize configuration: {0}; set the matching APP_* environment variable (nested keys use `__`, e.g. APP_DESTINATION__HOST)"
    )]
    Deserialization(#[source] config::ConfigError),
}

/// Loads configuration from `APP_`-prefixed environment variables.
///
/// The seeder deliberately reads its whole configuration from the process environment:
/// nested keys use double underscores (`APP_DESTINATION__HOST`), and list values are
/// comma-separated.
pub fn load_config<T>() -> Result<T, LoadConfigError>
where
    T: Config + DeserializeOwned,
{
    let mut environment_source = config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_PREFIX_SEPARATOR)
        .separator(ENV_SEPARATOR);

    if !T::LIST_PARSE_KEYS.is_empty() {
        environment_source = environment_source
            .try_parsing(true)
            .list_separator(LIST_SEPARATOR);

        for key in <T as Config>::LIST_PARSE_KEYS {
            environment_source = environment_source.with_list_parse_key(key);
        }
    }

    let settings = config::Config::builder()
        .add_source(environment_source)
        .build()
        .map_err(LoadConfigError::EnvironmentVariables)?;

    settings
        .try_deserialize::<T>()
        .map_err(LoadConfigError::Deserialization)
}

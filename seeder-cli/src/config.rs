use seeder_config::load_config;
use seeder_config::shared::SeederConfig;

use crate::error::RunnerResult;

/// Loads and validates the seeder configuration from the process environment.
pub fn load_seeder_config() -> RunnerResult<SeederConfig> {
    let config: SeederConfig = load_config()?;
    config.validate()?;

    Ok(config)
}

use chrono::Days;

use super::{
    types::{Config, SyncBackend},
    ConfigError,
};
use crate::ticket::{MAX_DAYS_OPEN, MAX_FOLLOW_UP_DAYS};

/// Days a timeline may reach on either side of the reference date.
const REFERENCE_DATE_MARGIN: u64 = MAX_DAYS_OPEN as u64 + MAX_FOLLOW_UP_DAYS;

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Reference date leaves room for every timeline
/// - SQLite sync backend has a path
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    let reference = config.engine.reference_date;
    let margin = Days::new(REFERENCE_DATE_MARGIN);
    if reference.checked_sub_days(margin).is_none() || reference.checked_add_days(margin).is_none()
    {
        return Err(ConfigError::ValidationError(format!(
            "engine.reference_date {} is within {} days of the calendar limits",
            reference, REFERENCE_DATE_MARGIN
        )));
    }

    if config.sync.backend == SyncBackend::Sqlite && config.sync.path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "sync.path must be set when using the sqlite backend".to_string(),
        ));
    }

    Ok(())
}

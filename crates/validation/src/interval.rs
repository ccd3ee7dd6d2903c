use crate::Error;
use std::time::Duration;

/// Validate a rule evaluation interval, which must be a positive whole
/// multiple of `base`. Returns the interval in seconds.
pub fn validate_interval(interval: Duration, base: Duration) -> Result<i64, Error> {
    let seconds = interval.as_secs() as i64;
    let base = base.as_secs() as i64;

    if seconds <= 0 {
        return Err(Error::IntervalNotPositive { base });
    }
    // A zero base interval places no constraint on whole-second intervals.
    if base != 0 && seconds % base != 0 {
        return Err(Error::IntervalNotMultiple { seconds, base });
    }
    Ok(seconds)
}

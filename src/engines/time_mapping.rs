use crate::error::{FibClockError, Result};
use chrono::Timelike;

/// Hour and minute targets derived from a wall-clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeTargets {
    pub hour: u32,   // 1-12
    pub minute: u32, // 0-11, five-minute blocks
}

impl TimeTargets {
    /// Rejects hours above 23 and minutes above 59.
    pub fn new(hours: u32, minutes: u32) -> Result<Self> {
        if hours > 23 || minutes > 59 {
            return Err(FibClockError::InvalidTime { hours, minutes });
        }
        Ok(Self::from_valid(hours, minutes))
    }

    pub fn from_time<T: Timelike>(time: &T) -> Self {
        Self::from_valid(time.hour(), time.minute())
    }

    fn from_valid(hours: u32, minutes: u32) -> Self {
        Self {
            hour: hour_target(hours),
            minute: minute_target(minutes),
        }
    }
}

/// 12-hour form, with midnight and noon both mapped to 12
pub fn hour_target(hours: u32) -> u32 {
    match hours % 12 {
        0 => 12,
        h => h,
    }
}

pub fn minute_target(minutes: u32) -> u32 {
    minutes / 5
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_hour_target_wraps() {
        assert_eq!(hour_target(0), 12);
        assert_eq!(hour_target(12), 12);
        assert_eq!(hour_target(13), 1);
        assert_eq!(hour_target(23), 11);
    }

    #[test]
    fn test_minute_blocks() {
        assert_eq!(minute_target(0), 0);
        assert_eq!(minute_target(4), 0);
        assert_eq!(minute_target(25), 5);
        assert_eq!(minute_target(59), 11);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(matches!(
            TimeTargets::new(24, 0),
            Err(FibClockError::InvalidTime { hours: 24, minutes: 0 })
        ));
        assert!(TimeTargets::new(10, 60).is_err());
    }

    #[test]
    fn test_from_time() {
        let time = NaiveTime::from_hms_opt(19, 50, 12).unwrap();
        let targets = TimeTargets::from_time(&time);
        assert_eq!(targets, TimeTargets { hour: 7, minute: 10 });
    }
}

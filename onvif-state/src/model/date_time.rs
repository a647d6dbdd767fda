//! Device clock

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use onvif_api::types::{DateTimeParts, DateTimeType, SystemDateAndTime};
use serde::{Deserialize, Serialize};

/// Local/UTC clock pair reported by the device
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeviceDateTime {
    /// Wall-clock time in the device's zone
    pub local: Option<NaiveDateTime>,
    pub utc: Option<DateTime<Utc>>,
    pub time_zone: Option<String>,
    pub daylight_savings: bool,
    /// Clock is synchronized via NTP rather than set manually
    pub ntp: bool,
}

impl DeviceDateTime {
    /// Difference between the device's UTC clock and `now`, in seconds
    pub fn skew_from(&self, now: DateTime<Utc>) -> Option<i64> {
        self.utc.map(|utc| (utc - now).num_seconds())
    }
}

fn naive(parts: &DateTimeParts) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(parts.year, parts.month, parts.day)?.and_hms_opt(
        parts.hour,
        parts.minute,
        parts.second,
    )
}

/// Out-of-range wire fields (month 13, hour 25) yield `None` for that clock
impl From<&SystemDateAndTime> for DeviceDateTime {
    fn from(src: &SystemDateAndTime) -> Self {
        Self {
            local: src.local.as_ref().and_then(naive),
            utc: src.utc.as_ref().and_then(naive).map(|n| n.and_utc()),
            time_zone: src.time_zone.clone(),
            daylight_savings: src.daylight_savings,
            ntp: src.date_time_type == DateTimeType::Ntp,
        }
    }
}

/// Wire form of a manual clock setting
pub fn to_wire_utc(time: DateTime<Utc>) -> DateTimeParts {
    use chrono::{Datelike, Timelike};
    DateTimeParts {
        year: time.year(),
        month: time.month(),
        day: time.day(),
        hour: time.hour(),
        minute: time.minute(),
        second: time.second(),
    }
}

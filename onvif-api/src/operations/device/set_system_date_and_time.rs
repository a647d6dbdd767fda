//! SetSystemDateAndTime operation for the Device service

use crate::operation::ValidationError;
use crate::types::{DateTimeParts, DateTimeType};
use crate::xml;

crate::define_onvif_operation! {
    /// Set the device clock
    ///
    /// With `DateTimeType::Manual` the UTC time is required; with NTP it is
    /// omitted and only the zone and daylight flag are sent.
    operation: SetSystemDateAndTimeOperation,
    action: "SetSystemDateAndTime",
    service: Device,
    request: {
        date_time_type: DateTimeType,
        daylight_savings: bool,
        time_zone: Option<String>,
        utc: Option<DateTimeParts>,
    },
    response: (),
    payload: |req| payload_for(req),
    parse: |_response| Ok(()),
}

fn payload_for(req: &SetSystemDateAndTimeOperationRequest) -> Result<String, ValidationError> {
    let mut payload = format!(
        "<DateTimeType>{}</DateTimeType><DaylightSavings>{}</DaylightSavings>",
        req.date_time_type.as_str(),
        req.daylight_savings
    );

    if let Some(tz) = &req.time_zone {
        payload.push_str(&format!("<TimeZone><tt:TZ>{}</tt:TZ></TimeZone>", xml::escape(tz)));
    }

    match (req.date_time_type, &req.utc) {
        (DateTimeType::Manual, None) => return Err(ValidationError::missing("UTCDateTime")),
        (DateTimeType::Manual, Some(utc)) => {
            if !(1..=12).contains(&utc.month) {
                return Err(ValidationError::range_error("Month", 1, 12, utc.month));
            }
            if !(1..=31).contains(&utc.day) {
                return Err(ValidationError::range_error("Day", 1, 31, utc.day));
            }
            if utc.hour > 23 || utc.minute > 59 || utc.second > 60 {
                return Err(ValidationError::invalid_value(
                    "Time",
                    format!("{:02}:{:02}:{:02}", utc.hour, utc.minute, utc.second),
                    "not a valid time of day",
                ));
            }
            payload.push_str(&format!("<UTCDateTime>{}</UTCDateTime>", utc.to_xml()));
        }
        (DateTimeType::Ntp, _) => {}
    }

    Ok(payload)
}

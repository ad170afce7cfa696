use time::{OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// Convert `date_time` to the offset `canonical_timezone` had at that instant.
pub fn to_local_time(date_time: OffsetDateTime, canonical_timezone: &str) -> Option<OffsetDateTime> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| date_time.to_offset(tz.get_offset_utc(&date_time).to_utc()))
}

//! Conversions between timestamps and `chrono` types.
use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::DurationSinceUnixEpoch;

/// It converts a timestamp to a `DateTime::<Utc>`.
/// For example, the timestamp of 0: `DurationSinceUnixEpoch::ZERO` will be
/// converted to the `DateTime::<Utc>` of the Unix Epoch.
///
/// # Panics
///
/// Will panic if the input time overflows the `u64` seconds overflows the `i64` type.
/// (this will naturally happen in 292.5 billion years)
#[must_use]
pub fn convert_from_timestamp_to_datetime_utc(duration: DurationSinceUnixEpoch) -> DateTime<Utc> {
    DateTime::from_timestamp(
        i64::try_from(duration.as_secs()).expect("Overflow of i64 seconds, very future!"),
        duration.subsec_nanos(),
    )
    .expect("timestamp should be in the range supported by chrono")
}

/// It converts a timestamp to the calendar date it falls on in the local time
/// zone of the server.
///
/// For example, `1715342400` (`2024-05-10T12:00:00Z`) is `2024-05-10` in
/// Madrid but `2024-05-11` in Kiritimati (`UTC+14`).
#[must_use]
pub fn convert_from_timestamp_to_local_date(duration: DurationSinceUnixEpoch) -> NaiveDate {
    convert_from_timestamp_to_datetime_utc(duration)
        .with_timezone(&Local)
        .date_naive()
}

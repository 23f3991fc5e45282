//! Zone strings for `%z` and `%Z`, captured once per UTC/local switch.
//!
//! The cache is not refreshed per record: a daylight-saving change shows up
//! only after the layout is reconfigured.

use chrono::{DateTime, FixedOffset, Local, Offset, Utc};
use chrono_tz::{OffsetName, Tz};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneCache {
    /// `%z`: zone abbreviation (`UTC`, `CST`), or the compact offset (`+0800`)
    /// when the host zone has no known abbreviation.
    pub short: Vec<u8>,
    /// `%Z`: `Z`, or the offset with a colon (`+08:00`).
    pub long: Vec<u8>,
}

impl ZoneCache {
    /// Captures the host zone at the current instant.
    #[must_use]
    pub fn capture(utc: bool) -> Self {
        if utc {
            return Self::at(Utc::now().fixed_offset(), None, true);
        }
        let now = Local::now();
        let name = host_zone()
            .and_then(|tz| zone_abbreviation(tz, now.with_timezone(&Utc)))
            .or_else(|| (now.offset().fix().local_minus_utc() == 0).then(|| "UTC".to_string()));
        Self::at(now.fixed_offset(), name.as_deref(), false)
    }

    /// Builds the cache for `now` in a zone called `name`; split out so tests
    /// can pin both.
    #[must_use]
    pub fn at(now: DateTime<FixedOffset>, name: Option<&str>, utc: bool) -> Self {
        if utc {
            return Self {
                short: b"UTC".to_vec(),
                long: b"Z".to_vec(),
            };
        }

        let short = name.map_or_else(
            || now.format("%z").to_string().into_bytes(),
            |name| name.as_bytes().to_vec(),
        );
        let long = if now.offset().local_minus_utc() == 0 {
            b"Z".to_vec()
        } else {
            now.format("%:z").to_string().into_bytes()
        };
        Self { short, long }
    }
}

/// Abbreviation of `tz` at `instant`, e.g. `EST` or `EDT` for `America/New_York`.
#[must_use]
pub fn zone_abbreviation(tz: Tz, instant: DateTime<Utc>) -> Option<String> {
    instant
        .with_timezone(&tz)
        .offset()
        .abbreviation()
        .map(ToString::to_string)
}

/// The host's IANA zone: `TZ` when it names one, else the system setting.
fn host_zone() -> Option<Tz> {
    std::env::var("TZ")
        .ok()
        .and_then(|name| name.trim_start_matches(':').parse().ok())
        .or_else(|| {
            iana_time_zone::get_timezone()
                .ok()
                .and_then(|name| name.parse().ok())
        })
}

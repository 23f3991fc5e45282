//! The `%`-code pattern layout.

use super::{Layout, OptionValue, to_bool, to_pattern_bytes};
use crate::Error;
use crate::config::Config;
use crate::fmt::encode::{ccyymmdd, itoa, two_two_two};
use crate::fmt::{PATTERN_DEFAULT, Placeholder, Template, ZoneCache};
use crate::record::LogRecord;
use chrono::{Datelike, NaiveDateTime, Timelike};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Rendered in place of a missing record.
pub const NIL: &[u8] = b"<nil>";

/// Everything a reconfiguration replaces. Guarded as one unit so a render
/// never sees a template from one call and a zone from another.
#[derive(Debug)]
struct State {
    template: Template,
    utc: bool,
    zone: ZoneCache,
}

/// Formats records by a `%`-code pattern such as `"[%D %T] [%L] %M\n"`.
///
/// Configuration and rendering share one lock, so they are serialized against
/// each other. Known codes:
///
/// | code | output |
/// |------|--------|
/// | `%U` | time `15:04:05.000000` |
/// | `%T` | time `15:04:05` |
/// | `%h` `%m` | hour, minute |
/// | `%Z` `%z` | zone offset, zone name |
/// | `%D` `%Y` `%d` | `2006/01/02`, `2006-01-02`, `02/01/06` |
/// | `%L` `%l` | level name, level ordinal |
/// | `%P` `%S` `%s` | prefix, source, source after the last `/` |
/// | `%N` `%M` | line, message |
/// | `%t` `%r` `%n` `%R` | tab, carriage return, newline, newline |
///
/// Unknown codes render nothing; the text after them is kept.
#[derive(Debug)]
pub struct PatternLayout {
    state: Mutex<State>,
}

impl Default for PatternLayout {
    fn default() -> Self {
        Self::new(PATTERN_DEFAULT)
    }
}

impl PatternLayout {
    /// Compiles `pattern` in local-time mode. An empty pattern selects
    /// [`PATTERN_DEFAULT`].
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        let pattern = if pattern.is_empty() {
            PATTERN_DEFAULT
        } else {
            pattern
        };
        Self {
            state: Mutex::new(State {
                template: Template::parse(pattern),
                utc: false,
                zone: ZoneCache::capture(false),
            }),
        }
    }

    /// Builds the layout described by the `[layout]` config section.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let layout = Self::new(&config.pattern());
        layout.set_utc(config.layout.utc);
        layout
    }

    /// Replaces the template. Unlike [`PatternLayout::new`], an empty pattern
    /// stays empty and renders nothing.
    pub fn set_pattern(&self, pattern: &str) {
        self.lock().template = Template::parse(pattern);
    }

    /// Switches between UTC and local time and recaptures the zone strings.
    pub fn set_utc(&self, utc: bool) {
        let zone = ZoneCache::capture(utc);
        let mut state = self.lock();
        state.zone = zone;
        state.utc = utc;
    }

    #[must_use]
    pub fn is_utc(&self) -> bool {
        self.lock().utc
    }

    /// Snapshot of the compiled template.
    #[must_use]
    pub fn template(&self) -> Template {
        self.lock().template.clone()
    }

    /// A panic while holding the lock cannot leave `State` half-written (every
    /// field is assigned whole), so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Layout for PatternLayout {
    fn set_option(&self, name: &str, value: OptionValue) -> Result<(), Error> {
        match name {
            "pattern" | "format" => {
                let bytes = to_pattern_bytes(name, &value)?;
                self.lock().template = Template::compile(&bytes);
            }
            "utc" => self.set_utc(to_bool(&value)?),
            _ => return Err(Error::BadOption(name.to_string())),
        }
        Ok(())
    }

    fn format(&self, record: Option<&LogRecord>) -> Vec<u8> {
        let state = self.lock();

        let Some(rec) = record else {
            return NIL.to_vec();
        };
        if state.template.is_empty() {
            return Vec::new();
        }

        let stamp = if state.template.uses_time() {
            let created = if state.utc {
                rec.created.naive_utc()
            } else {
                rec.created.naive_local()
            };
            Stamp::of(&created)
        } else {
            Stamp::default()
        };

        let mut out = Vec::with_capacity(64 + rec.message.len());
        out.extend_from_slice(state.template.prefix());
        for segment in state.template.segments() {
            if let Some(placeholder) = segment.placeholder {
                write_placeholder(&mut out, placeholder, rec, &stamp, &state.zone);
            }
            out.extend_from_slice(&segment.tail);
        }
        out
    }
}

/// Calendar and clock fields of one record, extracted once per render.
#[derive(Debug, Default)]
struct Stamp {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    micros: u32,
}

impl Stamp {
    fn of(t: &NaiveDateTime) -> Self {
        Self {
            year: t.year(),
            month: t.month(),
            day: t.day(),
            hour: t.hour(),
            minute: t.minute(),
            second: t.second(),
            // leap seconds report nanos >= 1e9; fold them back into six digits
            micros: (t.nanosecond() % 1_000_000_000) / 1_000,
        }
    }

    #[allow(clippy::cast_sign_loss)]
    const fn century(&self) -> u32 {
        (self.year / 100) as u32
    }

    #[allow(clippy::cast_sign_loss)]
    const fn year_of_century(&self) -> u32 {
        (self.year % 100) as u32
    }
}

fn write_placeholder(
    out: &mut Vec<u8>,
    placeholder: Placeholder,
    rec: &LogRecord,
    t: &Stamp,
    zone: &ZoneCache,
) {
    match placeholder {
        Placeholder::TimeMicros => {
            two_two_two(out, t.hour, t.minute, t.second, b':');
            out.push(b'.');
            itoa(out, u64::from(t.micros), 6);
        }
        Placeholder::Time => two_two_two(out, t.hour, t.minute, t.second, b':'),
        Placeholder::Hour => itoa(out, u64::from(t.hour), 2),
        Placeholder::Minute => itoa(out, u64::from(t.minute), 2),
        Placeholder::ZoneLong => out.extend_from_slice(&zone.long),
        Placeholder::ZoneShort => out.extend_from_slice(&zone.short),
        Placeholder::DateSlash => {
            ccyymmdd(out, t.century(), t.year_of_century(), t.month, t.day, b'/');
        }
        Placeholder::DateDash => {
            ccyymmdd(out, t.century(), t.year_of_century(), t.month, t.day, b'-');
        }
        Placeholder::DateShort => two_two_two(out, t.day, t.month, t.year_of_century(), b'/'),
        Placeholder::Level => out.extend_from_slice(rec.level.as_str().as_bytes()),
        Placeholder::LevelNum => itoa(out, u64::from(rec.level.as_u8()), 0),
        Placeholder::Prefix => out.extend_from_slice(rec.prefix.as_bytes()),
        Placeholder::Source => out.extend_from_slice(rec.source.as_bytes()),
        Placeholder::ShortSource => out.extend_from_slice(rec.short_source().as_bytes()),
        Placeholder::Line => itoa(out, u64::from(rec.line), 0),
        Placeholder::Message => out.extend_from_slice(rec.message.as_bytes()),
        Placeholder::Tab => out.push(b'\t'),
        Placeholder::Return => out.push(b'\r'),
        Placeholder::Newline => out.push(b'\n'),
    }
}

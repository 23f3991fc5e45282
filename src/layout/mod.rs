//! Layouts turn a record into the bytes an output writes. Options arrive
//! loosely typed (config files, CLI flags), so setters take a JSON value and
//! coerce it.

mod pattern;

pub use pattern::{NIL, PatternLayout};

use crate::Error;
use crate::internal;
use crate::record::LogRecord;
use serde_json::Value;

/// Loosely-typed option payload.
pub type OptionValue = Value;

/// `Send + Sync` so one layout can be shared by every thread that logs.
pub trait Layout: Send + Sync {
    /// Applies one option, reporting what went wrong.
    ///
    /// # Errors
    /// [`Error::BadOption`] for unknown names, [`Error::BadValue`] for payloads of
    /// the wrong shape, [`Error::NotBool`] when a flag cannot be coerced.
    fn set_option(&self, name: &str, value: OptionValue) -> Result<(), Error>;

    /// Chainable form of [`Layout::set_option`]. Errors are reported to the
    /// internal logger and otherwise dropped; use `set_option` to react to them.
    fn set(&self, name: &str, value: impl Into<OptionValue>) -> &Self
    where
        Self: Sized,
    {
        if let Err(e) = self.set_option(name, value.into()) {
            internal::warn("LAYOUT", &format!("Ignoring option {name}: {e}"));
        }
        self
    }

    /// Renders one record. Never fails: `None` renders as [`NIL`].
    fn format(&self, record: Option<&LogRecord>) -> Vec<u8>;
}

/// Coerces an option value to a flag.
///
/// Numbers are true when non-zero; strings accept the usual spellings of yes/no.
///
/// # Errors
/// [`Error::NotBool`] carrying the rendered value.
pub fn to_bool(value: &Value) -> Result<bool, Error> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => n
            .as_i64()
            .map(|i| i != 0)
            .or_else(|| n.as_u64().map(|u| u != 0))
            .or_else(|| n.as_f64().map(|f| f != 0.0))
            .ok_or_else(|| Error::NotBool(n.to_string())),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "1" | "t" | "true" | "y" | "yes" | "on" => Ok(true),
            "0" | "f" | "false" | "n" | "no" | "off" => Ok(false),
            _ => Err(Error::NotBool(s.clone())),
        },
        other => Err(Error::NotBool(other.to_string())),
    }
}

/// Pattern payloads are text, or raw bytes given as an array of 0-255 integers.
pub(crate) fn to_pattern_bytes(name: &str, value: &Value) -> Result<Vec<u8>, Error> {
    match value {
        Value::String(s) => Ok(s.as_bytes().to_vec()),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_u64()
                    .and_then(|b| u8::try_from(b).ok())
                    .ok_or_else(|| Error::BadValue(name.to_string()))
            })
            .collect(),
        _ => Err(Error::BadValue(name.to_string())),
    }
}

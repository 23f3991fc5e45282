//! Building blocks of the pattern layout: the template compiler, the
//! fixed-width encoders it renders with, and the cached zone strings.

pub mod encode;
pub mod pattern;
mod zone;

pub use pattern::{
    PATTERN_ABBREV, PATTERN_DEFAULT, PATTERN_JSON, PATTERN_SHORT, PRESETS, Placeholder, Segment,
    Template, preset,
};
pub use zone::{ZoneCache, zone_abbreviation};

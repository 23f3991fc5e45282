//! `%`-code templates: parsed once when configured, walked for every record.

/// Date, time, zone, level, source, line and message.
pub const PATTERN_DEFAULT: &str = "[%D %T %z] [%L] (%s:%N) %M\n";
/// Short time, short date, level and message.
pub const PATTERN_SHORT: &str = "[%h:%m %d] [%L] %M\n";
/// Level and message.
pub const PATTERN_ABBREV: &str = "[%L] %M\n";
/// Every record field in a JSON-looking line.
///
/// Field text is not escaped, so a message containing `"` yields invalid JSON.
pub const PATTERN_JSON: &str = "{\"Level\":%l,\"Created\":\"%YT%U%Z\",\"Prefix\":\"%P\",\"Source\":\"%S\",\"Line\":%N,\"Message\":\"%M\"}";

/// Named presets, in the order help output lists them.
pub const PRESETS: &[(&str, &str)] = &[
    ("default", PATTERN_DEFAULT),
    ("short", PATTERN_SHORT),
    ("abbrev", PATTERN_ABBREV),
    ("json", PATTERN_JSON),
];

/// Resolves a preset name (case-insensitive) to its pattern.
#[must_use]
pub fn preset(name: &str) -> Option<&'static str> {
    PRESETS
        .iter()
        .find(|(preset, _)| preset.eq_ignore_ascii_case(name.trim()))
        .map(|(_, pattern)| *pattern)
}

/// Closed set of known codes. Any other byte after `%` renders nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// `%U` time with microseconds.
    TimeMicros,
    /// `%T` time.
    Time,
    /// `%h`
    Hour,
    /// `%m`
    Minute,
    /// `%Z` zone offset.
    ZoneLong,
    /// `%z` zone name.
    ZoneShort,
    /// `%D` date with slashes.
    DateSlash,
    /// `%Y` date with dashes.
    DateDash,
    /// `%d` day first, two-digit year.
    DateShort,
    /// `%L`
    Level,
    /// `%l`
    LevelNum,
    /// `%P`
    Prefix,
    /// `%S`
    Source,
    /// `%s`
    ShortSource,
    /// `%N`
    Line,
    /// `%M`
    Message,
    /// `%t`
    Tab,
    /// `%r`
    Return,
    /// `%n` or `%R`
    Newline,
}

impl Placeholder {
    /// Every variant, for help output and lookups.
    pub const ALL: &'static [Self] = &[
        Self::TimeMicros,
        Self::Time,
        Self::Hour,
        Self::Minute,
        Self::ZoneLong,
        Self::ZoneShort,
        Self::DateSlash,
        Self::DateDash,
        Self::DateShort,
        Self::Level,
        Self::LevelNum,
        Self::Prefix,
        Self::Source,
        Self::ShortSource,
        Self::Line,
        Self::Message,
        Self::Tab,
        Self::Return,
        Self::Newline,
    ];

    /// Primary code byte. `Newline` also answers to `R`.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::TimeMicros => b'U',
            Self::Time => b'T',
            Self::Hour => b'h',
            Self::Minute => b'm',
            Self::ZoneLong => b'Z',
            Self::ZoneShort => b'z',
            Self::DateSlash => b'D',
            Self::DateDash => b'Y',
            Self::DateShort => b'd',
            Self::Level => b'L',
            Self::LevelNum => b'l',
            Self::Prefix => b'P',
            Self::Source => b'S',
            Self::ShortSource => b's',
            Self::Line => b'N',
            Self::Message => b'M',
            Self::Tab => b't',
            Self::Return => b'r',
            Self::Newline => b'n',
        }
    }

    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            b'U' => Some(Self::TimeMicros),
            b'T' => Some(Self::Time),
            b'h' => Some(Self::Hour),
            b'm' => Some(Self::Minute),
            b'Z' => Some(Self::ZoneLong),
            b'z' => Some(Self::ZoneShort),
            b'D' => Some(Self::DateSlash),
            b'Y' => Some(Self::DateDash),
            b'd' => Some(Self::DateShort),
            b'L' => Some(Self::Level),
            b'l' => Some(Self::LevelNum),
            b'P' => Some(Self::Prefix),
            b'S' => Some(Self::Source),
            b's' => Some(Self::ShortSource),
            b'N' => Some(Self::Line),
            b'M' => Some(Self::Message),
            b't' => Some(Self::Tab),
            b'r' => Some(Self::Return),
            b'n' | b'R' => Some(Self::Newline),
            _ => None,
        }
    }

    /// One-line description for `patlog codes`.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::TimeMicros => "time (15:04:05.000000)",
            Self::Time => "time (15:04:05)",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::ZoneLong => "zone offset (-07:00, Z for UTC)",
            Self::ZoneShort => "zone name (UTC, or -0700 for local time)",
            Self::DateSlash => "date (2006/01/02)",
            Self::DateDash => "date (2006-01-02)",
            Self::DateShort => "date (02/01/06)",
            Self::Level => "level (FNST, FINE, DEBG, TRAC, INFO, WARN, EROR, CRIT)",
            Self::LevelNum => "level ordinal",
            Self::Prefix => "prefix",
            Self::Source => "source",
            Self::ShortSource => "short source (after the last /)",
            Self::Line => "line number",
            Self::Message => "message",
            Self::Tab => "tab (\\t)",
            Self::Return => "carriage return (\\r)",
            Self::Newline => "newline (\\n), also %R",
        }
    }
}

/// One `%`-delimited piece of the pattern after the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// `None` for unknown codes and for empty pieces (`%%`, trailing `%`).
    pub placeholder: Option<Placeholder>,
    /// Bytes after the code byte, emitted verbatim.
    pub tail: Vec<u8>,
}

/// A compiled pattern: literal prefix followed by placeholder segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    prefix: Vec<u8>,
    segments: Vec<Segment>,
}

impl Template {
    /// Splits on `%`. The text before the first `%` becomes the prefix; each later
    /// piece contributes its first byte as the code and the rest as literal tail.
    ///
    /// Pieces that would render nothing (empty, or an unknown code with no tail)
    /// are dropped here rather than skipped on every render.
    #[must_use]
    pub fn compile(pattern: &[u8]) -> Self {
        let mut pieces = pattern.split(|&b| b == b'%');
        let prefix = pieces.next().unwrap_or_default().to_vec();

        let segments = pieces
            .filter_map(|piece| {
                let (&code, tail) = piece.split_first()?;
                let placeholder = Placeholder::from_code(code);
                if placeholder.is_none() && tail.is_empty() {
                    return None;
                }
                Some(Segment {
                    placeholder,
                    tail: tail.to_vec(),
                })
            })
            .collect();

        Self { prefix, segments }
    }

    /// Convenience over [`Template::compile`] for text patterns.
    #[must_use]
    pub fn parse(pattern: &str) -> Self {
        Self::compile(pattern.as_bytes())
    }

    /// True when rendering would produce nothing for any record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty() && self.segments.is_empty()
    }

    #[must_use]
    pub fn prefix(&self) -> &[u8] {
        &self.prefix
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True when some segment needs the record's clock or calendar.
    #[must_use]
    pub fn uses_time(&self) -> bool {
        self.segments.iter().any(|seg| {
            matches!(
                seg.placeholder,
                Some(
                    Placeholder::TimeMicros
                        | Placeholder::Time
                        | Placeholder::Hour
                        | Placeholder::Minute
                        | Placeholder::DateSlash
                        | Placeholder::DateDash
                        | Placeholder::DateShort
                )
            )
        })
    }
}

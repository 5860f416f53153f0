use civiltime_tz::UnknownTimeZoneError;

/// Result of converting, parsing or formatting through a timezone.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Textual input did not match the expected pattern, or characters were left
/// over once the pattern was exhausted.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("failed to parse {input:?} using format {pattern:?}")]
pub struct ParseError {
    input: String,
    pattern: String,
    source: Option<chrono::format::ParseError>,
}

impl ParseError {
    pub fn new(input: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            pattern: pattern.into(),
            source: None,
        }
    }

    pub(crate) fn with_source(self, source: chrono::format::ParseError) -> Self {
        Self {
            source: Some(source),
            ..self
        }
    }

    /// The offending input, verbatim.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The pattern the input was matched against.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// Errors that can be presented when converting between civil and absolute
/// time.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Timezone name not known to the resolver.
    #[error(transparent)]
    UnknownTimeZone(#[from] UnknownTimeZoneError),
    /// Textual input could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Format pattern contains an unknown or malformed specifier.
    #[error("invalid format pattern {0:?}")]
    InvalidPattern(String),
    /// Result cannot be represented, e.g. an instant past `Instant::MAX`.
    #[error("{0} is outside of the representable range")]
    OutOfRange(String),
}

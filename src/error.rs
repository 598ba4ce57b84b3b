//! Crate-level error types.

use std::fmt;

/// Errors produced by the geo-zoom crate.
///
/// Interaction itself never fails; only loading and saving options does.
#[derive(Debug)]
pub enum GeoZoomError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for GeoZoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for GeoZoomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for GeoZoomError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn display_and_source() {
        let io = GeoZoomError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert_eq!(io.to_string(), "I/O error: missing");
        assert!(io.source().is_some());

        let parse = GeoZoomError::OptionsParse("bad key".into());
        assert_eq!(parse.to_string(), "options parse error: bad key");
        assert!(parse.source().is_none());
    }
}

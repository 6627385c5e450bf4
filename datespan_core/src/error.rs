use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid pattern `{name}`: {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid year range: {min}..={max}")]
    InvalidYearRange { min: i32, max: i32 },
}

impl Error {
    /// Wrap a regex compilation failure for the named pattern.
    pub fn invalid_pattern(name: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            name: name.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_invalid_pattern_names_pattern_and_keeps_source() {
        let source = regex::Regex::new("(").err();
        let err = source.map(|e| Error::invalid_pattern("till", e));

        assert!(err.as_ref().is_some_and(|e| e.to_string().starts_with("invalid pattern `till`")));
        assert!(err.as_ref().is_some_and(|e| e.source().is_some()));
    }

    #[test]
    fn test_invalid_year_range_message() {
        let err = Error::InvalidYearRange { min: 2100, max: 1500 };
        assert_eq!(err.to_string(), "invalid year range: 2100..=1500");
    }
}

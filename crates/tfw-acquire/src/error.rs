use thiserror::Error;

/// Why fetching a weather report failed.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The site could not be reached or answered with a non-2xx status.
    #[error("failed to fetch weather page")]
    Fetch(#[from] reqwest::Error),

    /// The site answered, but could not resolve the requested location.
    #[error("the site could not find that location (\"I CAN'T FIND THAT SHIT\")")]
    Location,

    /// The page did not have the structure we extract from. Usually means
    /// the site's markup changed.
    #[error("couldn't parse the weather page: {0}")]
    Parse(#[from] ParseFailure),
}

impl WeatherError {
    pub fn is_location(&self) -> bool {
        matches!(self, WeatherError::Location)
    }

    /// Landmark tag of a parse failure, if this is one.
    pub fn parse_tag(&self) -> Option<&'static str> {
        match self {
            WeatherError::Parse(failure) => Some(failure.tag()),
            _ => None,
        }
    }
}

/// A landmark that was missing or held something unexpected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    #[error("large-message-missing: no <p class=\"large\">")]
    LargeMessageMissing,

    #[error("location-span-missing: no element with id=\"locationDisplaySpan\"")]
    LocationSpanMissing,

    #[error("temperature-span-missing: no <span class=\"temperature\">")]
    TemperatureSpanMissing,

    #[error("temperature-not-integer: {text:?}")]
    TemperatureNotInteger { text: String },

    #[error("remark-missing: no <p class=\"remark\">")]
    RemarkMissing,

    #[error("flavor-missing: no <p class=\"flavor\">")]
    FlavorMissing,

    #[error("forecast-body-missing: no <div class=\"forecastBody\">")]
    ForecastBodyMissing,

    #[error("forecast-row-count: expected 4 rows, found {found}")]
    ForecastRowCount { found: usize },

    #[error("forecast-integer-parse: {row} cell {text:?} is not an integer")]
    ForecastIntegerParse { row: &'static str, text: String },

    #[error(
        "forecast-count-mismatch: {days} days, {highs} highs, {lows} lows, {descriptions} descriptions"
    )]
    ForecastCountMismatch {
        days: usize,
        highs: usize,
        lows: usize,
        descriptions: usize,
    },
}

impl ParseFailure {
    /// Stable name of the extraction step that failed.
    pub fn tag(&self) -> &'static str {
        match self {
            ParseFailure::LargeMessageMissing => "large-message-missing",
            ParseFailure::LocationSpanMissing => "location-span-missing",
            ParseFailure::TemperatureSpanMissing => "temperature-span-missing",
            ParseFailure::TemperatureNotInteger { .. } => "temperature-not-integer",
            ParseFailure::RemarkMissing => "remark-missing",
            ParseFailure::FlavorMissing => "flavor-missing",
            ParseFailure::ForecastBodyMissing => "forecast-body-missing",
            ParseFailure::ForecastRowCount { .. } => "forecast-row-count",
            ParseFailure::ForecastIntegerParse { .. } => "forecast-integer-parse",
            ParseFailure::ForecastCountMismatch { .. } => "forecast-count-mismatch",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_leads_with_tag() {
        let failures = [
            ParseFailure::LargeMessageMissing,
            ParseFailure::TemperatureNotInteger { text: "N/A".into() },
            ParseFailure::ForecastRowCount { found: 3 },
            ParseFailure::ForecastIntegerParse { row: "highs", text: "x".into() },
            ParseFailure::ForecastCountMismatch {
                days: 2,
                highs: 2,
                lows: 1,
                descriptions: 2,
            },
        ];
        for failure in failures {
            assert!(failure.to_string().starts_with(failure.tag()), "{failure}");
        }
    }

    #[test]
    fn test_parse_tag_only_for_parse_errors() {
        let err = WeatherError::from(ParseFailure::FlavorMissing);
        assert_eq!(err.parse_tag(), Some("flavor-missing"));
        assert!(!err.is_location());

        assert_eq!(WeatherError::Location.parse_tag(), None);
        assert!(WeatherError::Location.is_location());
    }
}

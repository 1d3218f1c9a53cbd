use serde::{Deserialize, Serialize};

use crate::report::Unit;

/// What to ask the weather site for.
///
/// A query either names a location (city, zip code, anything the site
/// understands) or asks for a random one. An empty or blank location is
/// treated the same as no location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherQuery {
    pub location: Option<String>,
    pub use_celsius: bool,
}

impl WeatherQuery {
    /// Query for a specific location, in Fahrenheit.
    pub fn at(location: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
            use_celsius: false,
        }
    }

    /// Query for a random location, in Fahrenheit.
    pub fn random() -> Self {
        Self::default()
    }

    pub fn celsius(mut self, use_celsius: bool) -> Self {
        self.use_celsius = use_celsius;
        self
    }

    /// The location to send, as given, or `None` when the site should pick one.
    pub fn location(&self) -> Option<&str> {
        self.location
            .as_deref()
            .filter(|loc| !loc.trim().is_empty())
    }

    pub fn is_random(&self) -> bool {
        self.location().is_none()
    }

    pub fn unit(&self) -> Unit {
        if self.use_celsius {
            Unit::Celsius
        } else {
            Unit::Fahrenheit
        }
    }

    /// Key/value pairs for the request query string, in send order.
    ///
    /// Exactly one of `where` or `random` is present; the mode is signalled
    /// by which key is sent. `unit=c` is appended only for Celsius.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(2);
        match self.location() {
            Some(loc) => pairs.push(("where", loc.to_string())),
            None => pairs.push(("random", "True".to_string())),
        }
        if self.use_celsius {
            pairs.push(("unit", "c".to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(query: &WeatherQuery) -> Vec<&'static str> {
        query.query_pairs().into_iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn test_location_query_never_sends_random() {
        let query = WeatherQuery::at("Boston");
        assert_eq!(query.query_pairs(), vec![("where", "Boston".to_string())]);
        assert!(!keys(&query).contains(&"random"));
    }

    #[test]
    fn test_random_query_never_sends_where() {
        let query = WeatherQuery::random();
        assert_eq!(query.query_pairs(), vec![("random", "True".to_string())]);
        assert!(!keys(&query).contains(&"where"));
    }

    #[test]
    fn test_blank_location_is_random() {
        for blank in ["", "   "] {
            let query = WeatherQuery::at(blank);
            assert!(query.is_random());
            assert_eq!(keys(&query), vec!["random"]);
        }
    }

    #[test]
    fn test_location_sent_as_given() {
        let query = WeatherQuery::at("  Boston ");
        assert_eq!(query.location(), Some("  Boston "));
        assert_eq!(query.query_pairs(), vec![("where", "  Boston ".to_string())]);
    }

    #[test]
    fn test_celsius_adds_unit() {
        let query = WeatherQuery::at("Oslo").celsius(true);
        assert_eq!(
            query.query_pairs(),
            vec![("where", "Oslo".to_string()), ("unit", "c".to_string())]
        );
        assert_eq!(query.unit(), Unit::Celsius);

        let random = WeatherQuery::random().celsius(true);
        assert_eq!(keys(&random), vec!["random", "unit"]);
    }

    #[test]
    fn test_fahrenheit_sends_no_unit() {
        let query = WeatherQuery::at("02134");
        assert!(!keys(&query).contains(&"unit"));
        assert_eq!(query.unit(), Unit::Fahrenheit);
    }
}

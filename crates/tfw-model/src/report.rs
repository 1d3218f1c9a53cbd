use serde::{Deserialize, Serialize};

/// Degree sign for rendering temperatures.
pub const DEGREE_SYMBOL: char = '\u{b0}';

/// Temperature scale of every number in a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Fahrenheit,
    Celsius,
}

impl Unit {
    pub fn suffix(self) -> char {
        match self {
            Unit::Fahrenheit => 'F',
            Unit::Celsius => 'C',
        }
    }
}

/// Everything extracted from one weather page.
///
/// Reports are built whole or not at all: extraction fails before any
/// report exists if a single field is missing or malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Display location as echoed by the site. Passed through verbatim,
    /// including for random-location queries.
    pub location: String,
    pub unit: Unit,
    pub current: CurrentConditions,
    /// Upcoming days in the column order of the site's forecast table.
    pub forecast: Vec<ForecastDay>,
}

/// Current weather at the reported location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: i32,
    /// Primary remark (e.g., "ITS FUCKING NICE"), optionally followed by a
    /// special condition (e.g., "AND THUNDERING"). Always one or two entries.
    pub weather_phrases: Vec<String>,
    /// The witty aside printed under the weather phrases.
    pub flavor_remark: String,
}

impl CurrentConditions {
    pub fn primary_phrase(&self) -> &str {
        self.weather_phrases.first().map(String::as_str).unwrap_or_default()
    }

    pub fn special_condition(&self) -> Option<&str> {
        self.weather_phrases.get(1).map(String::as_str)
    }
}

/// One column of the forecast table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Three-letter weekday abbreviation (e.g., "Mon").
    pub day: String,
    pub high: i32,
    pub low: i32,
    /// Free-text description (e.g., "Scattered Thunderstorms").
    pub weather: String,
}

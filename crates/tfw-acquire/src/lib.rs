pub mod client;
pub mod document;
pub mod error;
pub mod extract;

pub use client::{fetch_weather, FetchConfig, WeatherClient, DEFAULT_BASE_URL};
pub use document::{HtmlDocument, Landmarks, MemoryDocument, TableRow};
pub use error::{ParseFailure, WeatherError};
pub use extract::{extract_report, parse_report, LOCATION_NOT_FOUND};

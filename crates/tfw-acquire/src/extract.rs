use crate::document::{HtmlDocument, Landmarks, TableRow};
use crate::error::{ParseFailure, WeatherError};
use tfw_model::{CurrentConditions, ForecastDay, Unit, WeatherReport};

/// Text the site puts in the large message when it cannot resolve a location.
pub const LOCATION_NOT_FOUND: &str = "I CAN'T FIND THAT SHIT";

const FORECAST_ROWS: usize = 4;

/// Parse a raw weather page and extract a report from it.
pub fn parse_report(html: &str, unit: Unit) -> Result<WeatherReport, WeatherError> {
    let document = HtmlDocument::parse(html);
    extract_report(&document, unit)
}

/// Extract a report from a page's landmarks.
///
/// Steps run in a fixed order and the first failure aborts the whole
/// extraction, so callers never see a partially filled report:
/// 1. `p.large` must exist; text equal to the site's not-found message,
///    byte for byte, means a location error.
/// 2. `#locationDisplaySpan` (any tag) gives the display location.
/// 3. `span.temperature` must hold a signed integer.
/// 4. `p.remark` and the optional `p.specialCondition` give the weather phrases.
/// 5. `p.flavor` gives the flavor remark.
/// 6. `div.forecastBody` must hold exactly four rows of equal width.
///
/// Text fields are returned exactly as the page has them. Only integer
/// cells are trimmed, for parsing.
pub fn extract_report<D>(doc: &D, unit: Unit) -> Result<WeatherReport, WeatherError>
where
    D: Landmarks + ?Sized,
{
    let result = extract_fields(doc, unit);
    if let Err(e) = &result {
        tracing::warn!(error = %e, "Weather page extraction failed");
    }
    result
}

fn extract_fields<D>(doc: &D, unit: Unit) -> Result<WeatherReport, WeatherError>
where
    D: Landmarks + ?Sized,
{
    let large = doc
        .text_by_class("p", "large")
        .ok_or(ParseFailure::LargeMessageMissing)?;
    if large == LOCATION_NOT_FOUND {
        return Err(WeatherError::Location);
    }

    let location = doc
        .text_by_id("locationDisplaySpan")
        .ok_or(ParseFailure::LocationSpanMissing)?;
    tracing::debug!(location = %location, "Found display location");

    let temp_text = doc
        .text_by_class("span", "temperature")
        .ok_or(ParseFailure::TemperatureSpanMissing)?;
    let temperature = parse_int(&temp_text)
        .ok_or_else(|| ParseFailure::TemperatureNotInteger { text: temp_text.clone() })?;

    let remark = doc
        .text_by_class("p", "remark")
        .ok_or(ParseFailure::RemarkMissing)?;
    let mut weather_phrases = vec![remark];
    if let Some(special) = doc.text_by_class("p", "specialCondition") {
        weather_phrases.push(special);
    }

    let flavor_remark = doc
        .text_by_class("p", "flavor")
        .ok_or(ParseFailure::FlavorMissing)?;

    let rows = doc
        .table_rows("div", "forecastBody")
        .ok_or(ParseFailure::ForecastBodyMissing)?;
    let forecast = extract_forecast(rows)?;

    tracing::debug!(
        temperature,
        phrases = weather_phrases.len(),
        days = forecast.len(),
        "Extracted weather report"
    );

    Ok(WeatherReport {
        location,
        unit,
        current: CurrentConditions {
            temperature,
            weather_phrases,
            flavor_remark,
        },
        forecast,
    })
}

/// Zip the four forecast rows (days, highs, lows, descriptions) column by column.
fn extract_forecast(rows: Vec<TableRow>) -> Result<Vec<ForecastDay>, ParseFailure> {
    let [day_row, high_row, low_row, weather_row]: [TableRow; FORECAST_ROWS] = rows
        .try_into()
        .map_err(|rows: Vec<TableRow>| ParseFailure::ForecastRowCount { found: rows.len() })?;

    // First header cell labels the row.
    let days: Vec<String> = day_row.header_cells.into_iter().skip(1).collect();
    let highs = parse_int_cells("highs", &high_row.data_cells)?;
    let lows = parse_int_cells("lows", &low_row.data_cells)?;
    let descriptions = weather_row.data_cells;

    let n = days.len();
    if highs.len() != n || lows.len() != n || descriptions.len() != n {
        return Err(ParseFailure::ForecastCountMismatch {
            days: n,
            highs: highs.len(),
            lows: lows.len(),
            descriptions: descriptions.len(),
        });
    }

    Ok(days
        .into_iter()
        .zip(highs)
        .zip(lows)
        .zip(descriptions)
        .map(|(((day, high), low), weather)| ForecastDay {
            day,
            high,
            low,
            weather,
        })
        .collect())
}

fn parse_int_cells(row: &'static str, cells: &[String]) -> Result<Vec<i32>, ParseFailure> {
    cells
        .iter()
        .map(|text| {
            parse_int(text).ok_or_else(|| ParseFailure::ForecastIntegerParse {
                row,
                text: text.clone(),
            })
        })
        .collect()
}

/// Signed integer parse; accepts a leading `-` or `+`.
fn parse_int(text: &str) -> Option<i32> {
    text.trim().parse().ok()
}

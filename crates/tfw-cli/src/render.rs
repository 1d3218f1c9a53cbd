use tfw_model::{ForecastDay, WeatherReport, DEGREE_SYMBOL};

/// Lay out a report the way the site reads: location, shouted temperature,
/// the flavor remark, then the forecast one day per block.
pub fn render_text(report: &WeatherReport) -> String {
    let current = &report.current;
    let special = current
        .special_condition()
        .map(|s| format!("{s}\n"))
        .unwrap_or_default();
    let forecast: String = report.forecast.iter().map(render_day).collect();

    format!(
        "({})\n\
         {}{DEGREE_SYMBOL}?! {}\n\
         {special}\
         {}\n\
         \n\
         Forecast:\n\
         {forecast}",
        report.location,
        current.temperature,
        current.primary_phrase(),
        current.flavor_remark,
    )
}

fn render_day(day: &ForecastDay) -> String {
    format!(
        "  {}:\n    High: {}\n    Low: {}\n    Weather: {}\n",
        day.day, day.high, day.low, day.weather
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tfw_model::{CurrentConditions, Unit};

    fn report(phrases: &[&str]) -> WeatherReport {
        WeatherReport {
            location: "Boston, MA".into(),
            unit: Unit::Fahrenheit,
            current: CurrentConditions {
                temperature: 72,
                weather_phrases: phrases.iter().map(|p| p.to_string()).collect(),
                flavor_remark: "Enjoy it.".into(),
            },
            forecast: vec![
                ForecastDay { day: "Mon".into(), high: 75, low: 60, weather: "Sunny".into() },
                ForecastDay { day: "Tue".into(), high: 70, low: -5, weather: "Cloudy".into() },
            ],
        }
    }

    #[test]
    fn test_render_single_phrase() {
        let text = render_text(&report(&["ITS FUCKING NICE"]));
        assert_eq!(
            text,
            "(Boston, MA)\n\
             72°?! ITS FUCKING NICE\n\
             Enjoy it.\n\
             \n\
             Forecast:\n  \
             Mon:\n    \
             High: 75\n    \
             Low: 60\n    \
             Weather: Sunny\n  \
             Tue:\n    \
             High: 70\n    \
             Low: -5\n    \
             Weather: Cloudy\n"
        );
    }

    #[test]
    fn test_render_special_condition_on_own_line() {
        let text = render_text(&report(&["ITS FUCKING HOT", "AND THUNDERING"]));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "72°?! ITS FUCKING HOT");
        assert_eq!(lines[2], "AND THUNDERING");
        assert_eq!(lines[3], "Enjoy it.");
    }
}

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tfw_acquire::{FetchConfig, WeatherClient, DEFAULT_BASE_URL};
use tfw_model::WeatherQuery;

mod render;

#[derive(Parser)]
#[command(name = "tfw")]
#[command(about = "The weather, as reported by thefuckingweather.com")]
#[command(version)]
struct Cli {
    /// Location to look up: city name, zip code, anything the site understands
    location: Option<String>,

    /// Return temperatures in Celsius (Fahrenheit without this switch)
    #[arg(short, long)]
    celsius: bool,

    /// Let the site pick a random location instead
    #[arg(long, conflicts_with = "location")]
    random: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Request timeout in seconds (0 waits indefinitely)
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Weather site endpoint
    #[arg(long, default_value = DEFAULT_BASE_URL, hide = true)]
    base_url: String,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "warn", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long)]
    utc: bool,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Cli {
    /// The query to send, or `None` when neither a location nor `--random`
    /// was given. A blank location counts as none.
    fn query(&self) -> Option<WeatherQuery> {
        let query = if self.random {
            WeatherQuery::random()
        } else {
            let query = WeatherQuery::at(self.location.as_deref()?);
            if query.is_random() {
                return None;
            }
            query
        };
        Some(query.celsius(self.celsius))
    }

    fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            base_url: self.base_url.clone(),
            timeout: (self.timeout > 0).then(|| Duration::from_secs(self.timeout)),
            ..FetchConfig::default()
        }
    }
}

fn init_logging(cli: &Cli) {
    // Map log level, suppressing noisy HTML-parsing crates at debug/trace
    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn  => "warn",
        LogLevel::Info  => "info",
        LogLevel::Debug => "debug,selectors=warn,html5ever=warn",
        LogLevel::Trace => "trace,selectors=warn,html5ever=warn",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    // Logs go to stderr; stdout carries the report.
    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let Some(query) = cli.query() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let target = query.location().unwrap_or("a random location").to_string();
    tracing::info!(location = %target, celsius = query.use_celsius, "Looking up weather");

    let client = WeatherClient::new(cli.fetch_config())?;
    let report = client
        .fetch(&query)
        .await
        .with_context(|| format!("Looking up the weather for {target}"))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render::render_text(&report));
    }

    Ok(())
}

use clap::Parser;
use tracing::debug;
use weather_core::{Config, OpenWeatherClient, render};

/// Top-level CLI struct. The tool takes no arguments: everything comes from
/// the environment, `.env` or `config.json`.
#[derive(Debug, Parser)]
#[command(
    name = "weather",
    version,
    about = "Show the current weather for the configured city",
    long_about = "Show the current weather for the configured city.\n\n\
                  Reads API_KEY, CITY and UNITS from the environment (or the .env file one \
                  directory above the executable), falling back to ./config.json."
)]
pub struct Cli {}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;
        debug!(city = %config.city, units = %config.units, "configuration loaded");

        let client = OpenWeatherClient::new();
        let report = client.current(&config).await?;

        print!("{}", render(&report, &config.units()));
        Ok(())
    }
}

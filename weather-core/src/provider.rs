use tracing::debug;

use crate::{error::UpstreamError, model::WeatherReport};

pub mod openweather;

pub use openweather::OpenWeatherClient;

/// Turn the upstream `cod` field into an error for anything but 200.
pub fn check_status(report: &WeatherReport) -> Result<(), UpstreamError> {
    match UpstreamError::from_status(report.cod) {
        None => Ok(()),
        Some(err) => {
            debug!(
                cod = report.cod,
                message = %report.message_text().unwrap_or_default(),
                "upstream reported an error"
            );
            Err(err)
        }
    }
}

/// First bytes of a response body, for diagnostics.
pub(crate) fn truncate_body(body: &[u8]) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", String::from_utf8_lossy(&body[..MAX]))
    } else {
        String::from_utf8_lossy(body).into_owned()
    }
}

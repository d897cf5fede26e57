//! ASCII-art rendering of a successful report.
//!
//! Layout: one blank line, the condition glyph (if any) followed by a blank
//! line, the five labelled readings, one blank line.

use crate::model::{Condition, Units, WeatherReport};

pub const YELLOW: &str = "\x1b[1;33m";
pub const GREY: &str = "\x1b[1;37m";
pub const WHITE: &str = "\x1b[1;37m";
pub const BLUE: &str = "\x1b[1;34m";
pub const RESET: &str = "\x1b[0m";

const LABEL_INDENT: &str = "   ";

/// (indent, art) pairs. Only the art part is colored.
pub type GlyphLine = (&'static str, &'static str);

const SUN: &[GlyphLine] = &[
    ("     ", "\\   /"),
    ("      ", ".-."),
    ("   ", "‒ (   ) ‒"),
    ("      ", "`-᾿"),
    ("     ", "/   \\"),
];

const CLOUD: &[GlyphLine] = &[
    ("       ", ".--."),
    ("    ", ".-(    )."),
    ("   ", "(___.__)__)"),
];

const RAIN: &[GlyphLine] = &[
    ("       ", ".--."),
    ("    ", ".-(    )."),
    ("   ", "(___.__)__)"),
    ("    ", "ʻ‚ʻ‚ʻ‚ʻ‚ʻ"),
];

const SNOW: &[GlyphLine] = &[
    ("       ", ".--."),
    ("    ", ".-(    )."),
    ("   ", "(___.__)__)"),
    ("    ", "* * * * *"),
];

const STORM: &[GlyphLine] = &[
    ("       ", ".--."),
    ("    ", ".-(    )."),
    ("   ", "(___.__)__)"),
    ("    ", "⚡ʻ‚ʻ⚡ʻ‚ʻ"),
];

/// Glyph and accent color for a condition; `None` for unrecognized ones.
pub fn glyph(condition: &Condition) -> Option<(&'static str, &'static [GlyphLine])> {
    match condition {
        Condition::Clear => Some((YELLOW, SUN)),
        Condition::Clouds => Some((GREY, CLOUD)),
        Condition::Rain => Some((BLUE, RAIN)),
        Condition::Snow => Some((WHITE, SNOW)),
        Condition::Thunderstorm => Some((BLUE, STORM)),
        Condition::Other(_) => None,
    }
}

/// Round half away from zero. Never yields `-0`.
pub fn round(value: f64) -> i64 {
    value.round() as i64
}

pub fn render(report: &WeatherReport, units: &Units) -> String {
    let mut out = String::from("\n");
    let condition = report.condition();

    if let Some((color, lines)) = glyph(&condition) {
        for (indent, art) in lines {
            out.push_str(&format!("{indent}{color}{art}{RESET}\n"));
        }
        out.push('\n');
    }

    let readings = [
        format!("Weather: {}", condition.label()),
        format!("Temperature: {}", round(report.main.temp)),
        format!("Min/Max: {}/{}", round(report.main.temp_min), round(report.main.temp_max)),
        format!("Wind speed: {} {}", round(report.wind.speed), units.wind_speed_suffix()),
        format!("Humidity: {}%", report.main.humidity),
    ];
    for line in readings {
        out.push_str(LABEL_INDENT);
        out.push_str(&line);
        out.push('\n');
    }

    out.push('\n');
    out
}

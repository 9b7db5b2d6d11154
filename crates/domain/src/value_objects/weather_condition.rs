//! Weather condition derived from WMO weather codes
//!
//! Open-Meteo reports conditions as WMO 4677 codes. Related codes (for example
//! the light/moderate/heavy rain intensities 61, 63, 65) collapse into a single
//! label. Every integer maps to a label; codes outside the table are `Unknown`.
//!
//! ```
//! use domain::{WeatherCondition, classify};
//!
//! assert_eq!(classify(61), "Rain");
//! assert_eq!(WeatherCondition::from_wmo_code(96), WeatherCondition::Thunderstorm);
//! assert_eq!(classify(-1), "Unknown");
//! ```

use serde::{Deserialize, Serialize};

/// Closed set of condition labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherCondition {
    /// WMO 0
    #[serde(rename = "Clear sky")]
    ClearSky,
    /// WMO 1, 2
    #[serde(rename = "Partly cloudy")]
    PartlyCloudy,
    /// WMO 3
    #[serde(rename = "Overcast")]
    Overcast,
    /// WMO 45, 48
    #[serde(rename = "Foggy")]
    Foggy,
    /// WMO 51, 53, 55
    #[serde(rename = "Drizzle")]
    Drizzle,
    /// WMO 61, 63, 65
    #[serde(rename = "Rain")]
    Rain,
    /// WMO 71, 73, 75
    #[serde(rename = "Snow")]
    Snow,
    /// WMO 80, 81, 82
    #[serde(rename = "Rain showers")]
    RainShowers,
    /// WMO 85, 86
    #[serde(rename = "Snow showers")]
    SnowShowers,
    /// WMO 95, 96, 99
    #[serde(rename = "Thunderstorm")]
    Thunderstorm,
    /// Any code not listed above
    #[serde(rename = "Unknown")]
    Unknown,
}

impl WeatherCondition {
    /// All conditions, in table order
    pub const ALL: [Self; 11] = [
        Self::ClearSky,
        Self::PartlyCloudy,
        Self::Overcast,
        Self::Foggy,
        Self::Drizzle,
        Self::Rain,
        Self::Snow,
        Self::RainShowers,
        Self::SnowShowers,
        Self::Thunderstorm,
        Self::Unknown,
    ];

    /// Convert a WMO weather code to a `WeatherCondition`
    ///
    /// See: <https://open-meteo.com/en/docs> for the code reference
    #[must_use]
    pub const fn from_wmo_code(code: i64) -> Self {
        match code {
            0 => Self::ClearSky,
            1 | 2 => Self::PartlyCloudy,
            3 => Self::Overcast,
            45 | 48 => Self::Foggy,
            51 | 53 | 55 => Self::Drizzle,
            61 | 63 | 65 => Self::Rain,
            71 | 73 | 75 => Self::Snow,
            80..=82 => Self::RainShowers,
            85 | 86 => Self::SnowShowers,
            95 | 96 | 99 => Self::Thunderstorm,
            _ => Self::Unknown,
        }
    }

    /// Human-readable label, identical to the serialized form
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ClearSky => "Clear sky",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Overcast => "Overcast",
            Self::Foggy => "Foggy",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::RainShowers => "Rain showers",
            Self::SnowShowers => "Snow showers",
            Self::Thunderstorm => "Thunderstorm",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a WMO weather code straight to its label
#[must_use]
pub const fn classify(code: i64) -> &'static str {
    WeatherCondition::from_wmo_code(code).label()
}

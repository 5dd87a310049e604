//! Provider response model and the rendered report.

use std::fmt;

use serde::Deserialize;

/// The subset of a `format=j1` body we read.
#[derive(Debug, Deserialize)]
pub struct WttrResponse {
    #[serde(default)]
    pub current_condition: Vec<CurrentCondition>,
}

/// One `current_condition` record. The provider encodes numbers as strings.
#[derive(Debug, Deserialize)]
pub struct CurrentCondition {
    #[serde(rename = "temp_F", deserialize_with = "scalar_text")]
    pub temp_f: String,
    #[serde(rename = "temp_C", deserialize_with = "scalar_text")]
    pub temp_c: String,
    #[serde(rename = "weatherDesc", default)]
    pub weather_desc: Vec<WeatherDesc>,
    #[serde(deserialize_with = "scalar_text")]
    pub humidity: String,
    #[serde(rename = "windspeedMiles", deserialize_with = "scalar_text")]
    pub windspeed_miles: String,
    #[serde(rename = "winddir16Point")]
    pub winddir_16_point: String,
}

#[derive(Debug, Deserialize)]
pub struct WeatherDesc {
    pub value: String,
}

fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(s) => s,
        Scalar::Number(n) => n.to_string(),
    })
}

/// A weather snapshot for one request. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReport {
    /// Location as the caller wrote it.
    pub location: String,
    pub temp_f: String,
    pub temp_c: String,
    pub condition: String,
    pub humidity: String,
    pub wind_mph: String,
    pub wind_dir: String,
}

impl WeatherReport {
    /// Build a report from the first current-condition record, or `None`
    /// when the body lacks one (or lacks a description).
    pub fn from_response(location: &str, response: WttrResponse) -> Option<Self> {
        let current = response.current_condition.into_iter().next()?;
        let condition = current.weather_desc.into_iter().next()?.value;
        Some(Self {
            location: location.to_string(),
            temp_f: current.temp_f,
            temp_c: current.temp_c,
            condition,
            humidity: current.humidity,
            wind_mph: current.windspeed_miles,
            wind_dir: current.winddir_16_point,
        })
    }
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Weather for {}:", self.location)?;
        writeln!(f, "  Temperature: {}°F ({}°C)", self.temp_f, self.temp_c)?;
        writeln!(f, "  Condition:   {}", self.condition)?;
        writeln!(f, "  Humidity:    {}%", self.humidity)?;
        write!(f, "  Wind:        {} mph {}", self.wind_mph, self.wind_dir)
    }
}

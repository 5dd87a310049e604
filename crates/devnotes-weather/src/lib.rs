//! # devnotes-weather
//!
//! Fetches current conditions for a free-text location from a wttr.in
//! compatible endpoint (`<base>/<location>?format=j1`) and renders them as a
//! short text block. Every call is an independent round trip: no cache, no
//! retry, no timeout.

pub mod client;
pub mod report;

pub use client::WeatherClient;
pub use report::WeatherReport;

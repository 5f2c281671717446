use thiserror::Error;

/// Errors raised by the chart computation core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Insufficient house data: expected {expected} cusps, received {received}")]
    InsufficientData { expected: usize, received: usize },
    #[error("Longitude for {body} is not a finite number: {value}")]
    NonFiniteLongitude { body: String, value: f64 },
    #[error("Chart size must be a finite positive number, got {0}")]
    InvalidChartSize(f64),
}

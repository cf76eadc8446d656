use thiserror::Error;

pub type GaugeResult<T> = Result<T, GaugeError>;

#[derive(Debug, Error)]
pub enum GaugeError {
    #[error("invalid gauge configuration: max value must be > 0, got {max_value}")]
    Configuration { max_value: i64 },

    #[error("degenerate layout area: width={width}, height={height}")]
    DegenerateLayout { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("render backend failure: {0}")]
    Backend(String),
}

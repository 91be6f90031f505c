use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("series length mismatch: xs={xs}, ys={ys}")]
    SeriesLengthMismatch { xs: usize, ys: usize },

    #[error("failed to serialize chart options: {0}")]
    Options(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid plot rectangle: left={left}, top={top}, right={right}, bottom={bottom}")]
    InvalidPlotRect {
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown pen `{0}`")]
    UnknownPen(String),
}

use thiserror::Error;

use realsets_core::CoreError;

#[derive(Error, Debug)]
pub enum RegionError {
    #[error("NaN cannot be used as a region boundary")]
    NanBoundary,

    #[error("Not a well-formed interval: {0}")]
    MalformedSegment(String),

    #[error("Cannot bisect segment {0}: degenerate or inverted bounds")]
    InvalidBisection(String),

    #[error("Region {0} has a boundary no closed interval can represent")]
    NotClosed(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

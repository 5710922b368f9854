use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("NaN is not a valid interval bound")]
    NanBound,

    #[error("Inverted interval bounds: lower {lower} exceeds upper {upper}")]
    InvertedBounds { lower: String, upper: String },
}

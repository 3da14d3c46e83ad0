use chartfx_ramp::{RampError};

///
/// Possible errors from configuring a raster filter
///
/// Filters validate their whole configuration when they are built, so that the per-render
/// filtering path never has an error to report.
///
#[derive(Clone, Debug, PartialEq)]
pub enum FilterError {
    /// A configuration value (such as a gradient direction) or buffer layout could not be accepted
    InvalidInput(String),

    /// A colour ramp or preset could not be resolved
    Ramp(RampError),
}

impl From<RampError> for FilterError {
    fn from(err: RampError) -> FilterError {
        FilterError::Ramp(err)
    }
}

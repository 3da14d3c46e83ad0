///
/// Possible errors from building a colour ramp or resolving a preset
///
#[derive(Clone, Debug, PartialEq)]
pub enum RampError {
    /// A colour specification or set of stop positions could not be accepted
    InvalidInput(String),

    /// No preset ramp is registered under the requested name
    NotFound(String),
}

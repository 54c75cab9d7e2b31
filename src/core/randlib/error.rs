use thiserror::Error;

/// Error definition for the bounded draw operations.
///
/// The classical implementations of this generator signal bad bounds by
/// returning -1, which collides with legitimate draws once the range
/// covers negative values. The bounds checks here run before any sample
/// is taken, so a failed call never advances the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Returned when a bounded draw is requested with min above max
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: i32, max: i32 },
    /// Returned when an exclusive-max draw is requested with a negative bound
    #[error("negative upper bound {max} for exclusive-max draw")]
    NegativeMax { max: i32 },
}

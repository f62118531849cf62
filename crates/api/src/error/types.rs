//! Error type definitions for field, curve and protocol operations

/// Primary error type for ecrypt operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid parameter error: non-prime modulus, malformed irreducible
    /// polynomial, or missing required curve metadata
    InvalidParameter {
        /// Operation or type that rejected the parameter
        context: &'static str,
        /// Reason the parameter is invalid
        message: String,
    },

    /// Degenerate curve coefficients (zero discriminant, zero `a`/`d`,
    /// `B(A^2 - 4) = 0`)
    InvalidCurveParameters {
        /// Curve form that rejected the coefficients
        context: &'static str,
        /// Reason the coefficients are degenerate
        message: String,
    },

    /// A constructed point fails the owning curve's membership equation
    PointNotOnCurve {
        /// Operation that produced the point
        context: &'static str,
    },

    /// Arithmetic mixing elements from different fields
    FieldMismatch {
        /// Operation that mixed the elements
        context: &'static str,
    },

    /// Arithmetic mixing points from different curves
    CurveMismatch {
        /// Operation that mixed the points
        context: &'static str,
    },

    /// Inverse or division by the zero field element
    DivisionByZero {
        /// Operation that divided by zero
        context: &'static str,
    },

    /// Operation with no implemented algorithm for the given shape
    Unsupported {
        /// Name of the unimplemented feature
        feature: &'static str,
    },

    /// Malformed serialized public key (unrecognized prefix byte, garbage
    /// trailing data)
    InvalidEncoding {
        /// Decoder that rejected the bytes
        context: &'static str,
        /// Reason the encoding is malformed
        message: String,
    },

    /// Invalid length error with expected/actual sizes
    InvalidLength {
        /// Decoder or validator that measured the input
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Randomized retry loop exhausted its attempt ceiling
    RandomGeneration {
        /// Operation that exhausted its retries
        context: &'static str,
        /// Description of the failure
        message: String,
    },
}

/// Result type for ecrypt operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidParameter` error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create an `InvalidCurveParameters` error
    pub fn curve_params(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidCurveParameters {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create an `InvalidEncoding` error
    pub fn encoding(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidEncoding {
            context,
            message: message.into(),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: invalid parameter: {}", context, message)
            }
            Self::InvalidCurveParameters { context, message } => {
                write!(f, "{}: invalid curve parameters: {}", context, message)
            }
            Self::PointNotOnCurve { context } => {
                write!(f, "{}: point is not on the curve", context)
            }
            Self::FieldMismatch { context } => {
                write!(f, "{}: elements belong to different fields", context)
            }
            Self::CurveMismatch { context } => {
                write!(f, "{}: points belong to different curves", context)
            }
            Self::DivisionByZero { context } => {
                write!(f, "{}: division by zero", context)
            }
            Self::Unsupported { feature } => {
                write!(f, "{} is not implemented", feature)
            }
            Self::InvalidEncoding { context, message } => {
                write!(f, "{}: invalid encoding: {}", context, message)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::RandomGeneration { context, message } => {
                write!(f, "{}: random generation failed: {}", context, message)
            }
        }
    }
}

impl std::error::Error for Error {}

//! Constant values for the ecrypt library
//!
//! Standard curve parameters (bit-exact to the published standards) plus the
//! numeric tunables used by the field engine and the protocol layers. This
//! crate holds data only; the registry in `ecrypt-algorithms` turns these
//! constants into live field/curve/point objects.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod curves;
pub mod ecdh;
pub mod ecdsa;
pub mod field;

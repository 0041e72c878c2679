#![no_std]

//! Pieces shared by the crop insurance contracts: the caller guards, the
//! error codes every entry point returns, and the records that cross
//! contract boundaries.

pub mod access;
pub mod errors;
pub mod ttl;
pub mod types;

pub use access::{require_authorized_provider, require_owner, Authority};
pub use errors::InsuranceError;
pub use types::{FarmerRecord, WeatherEvent, WeatherEventType};

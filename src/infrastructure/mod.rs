//! Infrastructure layer implementing the domain contracts.
//!
//! - [`persistence`] - Mapping store implementations

pub mod persistence;

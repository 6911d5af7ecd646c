//! Utility functions for code generation and input validation.
//!
//! - [`code_generator`] - Random base62 short code generation
//! - [`validator`] - Long URL and custom short code validation

pub mod code_generator;
pub mod validator;

//! Error types and error handling for the parser.
//!
//! This module defines the error types raised while parsing. It includes:
//!
//! - Error structures with source position information
//! - Specific syntax-error variants
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

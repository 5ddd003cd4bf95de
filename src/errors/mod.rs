//! Diagnostic types for the lexer.
//!
//! This module defines the diagnostics emitted during scanning. It includes:
//!
//! - Diagnostic structures with source line information
//! - Specific variants for each recoverable lexical error
//! - Diagnostic formatting and display functionality
//! - Helpful tips for the driver's error reports

pub mod errors;

//! Lexical analysis module.
//!
//! This module contains the scanner that converts source code into a stream
//! of line-tagged tokens. It handles:
//!
//! - Incremental tokenization via `Scanner::next_token`
//! - Recognition of keywords, identifiers, number literals and operators
//! - A flat, session-lifetime symbol table seeded with the reserved words
//! - Comment and whitespace skipping with line tracking
//! - Recovery from invalid characters without interrupting the stream

pub mod scanner;
pub mod symbols;
pub mod tokens;

//! Utility macros for the lexer.
//!
//! This module defines the `MK_TOKEN!` helper macro used by the scanner to
//! reduce boilerplate when building tokens.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's TokenValue payload
/// * `$line` - The 1-based source line the token started on
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, TokenValue::Number(42.0), 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $line:expr) => {
        Token {
            kind: $kind,
            value: $value,
            line: $line,
        }
    };
}

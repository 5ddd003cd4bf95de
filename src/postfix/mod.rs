//! Infix to postfix conversion.
//!
//! A standalone shunting-yard converter operating on a raw character
//! sequence, independent of the scanner. It handles the four binary
//! operators, parentheses and multi-digit integer operands.

pub mod postfix;

use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("se", TokenKind::Keyword);
        map.insert("entao", TokenKind::Keyword);
        map.insert("senao", TokenKind::Keyword);
        map.insert("enquanto", TokenKind::Keyword);
        map.insert("faca", TokenKind::Keyword);
        map.insert("retorne", TokenKind::Keyword);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Eof,
    Number,
    Identifier,
    Keyword,

    ArithOp, // + - * / %
    RelOp,   // == != < <= > >=
    Assign,  // =

    OpenParen,
    CloseParen,
    Semicolon,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Semantic payload of a token: number literals carry their converted
/// floating-point value, everything else carries its spelling, and end of
/// input carries nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Number(f64),
    Lexeme(String),
    None,
}

impl TokenValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            TokenValue::Number(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_lexeme(&self) -> Option<&str> {
        match self {
            TokenValue::Lexeme(lexeme) => Some(lexeme),
            _ => None,
        }
    }
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Number(number) => write!(f, "{}", number),
            TokenValue::Lexeme(lexeme) => write!(f, "{}", lexeme),
            TokenValue::None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub line: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({}, '{}', line {})", self.kind, self.value, self.line)
    }
}

impl Token {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    pub fn debug(&self) {
        if let TokenValue::None = self.value {
            println!("{} ()", self.kind);
        } else {
            println!("{} ({})", self.kind, self.value);
        }
    }
}

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Diagnostic, DiagnosticImpl},
    MK_TOKEN,
};

use super::{
    symbols::SymbolTable,
    tokens::{Token, TokenKind, TokenValue},
};

lazy_static! {
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+(\\.[0-9]*)?").unwrap();
    static ref SYMBOL_PATTERN: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
}

/// Operator and punctuation lookup, checked in order. Multi-character forms
/// come before their single-character prefixes so `==` is never read as two
/// `=` and `<=`/`>=` are never split.
const OPERATOR_TABLE: &[(&str, TokenKind)] = &[
    ("==", TokenKind::RelOp),
    ("!=", TokenKind::RelOp),
    ("<=", TokenKind::RelOp),
    (">=", TokenKind::RelOp),
    ("=", TokenKind::Assign),
    ("<", TokenKind::RelOp),
    (">", TokenKind::RelOp),
    ("+", TokenKind::ArithOp),
    ("-", TokenKind::ArithOp),
    ("*", TokenKind::ArithOp),
    ("/", TokenKind::ArithOp),
    ("%", TokenKind::ArithOp),
    ("(", TokenKind::OpenParen),
    (")", TokenKind::CloseParen),
    (";", TokenKind::Semicolon),
];

/// Single-pass cursor over one in-memory source buffer.
///
/// A scanner owns its symbol table and its collected diagnostics; separate
/// scanning sessions share no state. Once the input is exhausted every
/// further `next_token` call returns an `Eof` token.
pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
    line: u32,
    symbols: SymbolTable,
    diagnostics: Vec<Diagnostic>,
}

impl Scanner {
    pub fn new(source: &str) -> Scanner {
        Scanner {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            symbols: SymbolTable::new(),
            diagnostics: vec![],
        }
    }

    /// Produces the next token, skipping whitespace and comments first.
    ///
    /// Invalid characters are consumed one at a time, recorded as
    /// diagnostics and never surface in the token stream.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_insignificant();

            let current = match self.current() {
                Some(current) => current,
                None => return MK_TOKEN!(TokenKind::Eof, TokenValue::None, self.line),
            };

            if current.is_ascii_digit() {
                return self.read_number();
            }

            if current.is_ascii_alphabetic() || current == '_' {
                return self.read_identifier();
            }

            if let Some(token) = self.read_operator() {
                return token;
            }

            // Recovery: discard exactly this character and keep scanning.
            let line = self.line;
            self.advance();
            self.diagnostics.push(Diagnostic::new(
                DiagnosticImpl::InvalidCharacter { character: current },
                line,
            ));
        }
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn advance(&mut self) {
        if self.pos < self.chars.len() {
            if self.chars[self.pos] == '\n' {
                self.line += 1;
            }
            self.pos += 1;
        }
    }

    fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    fn remainder(&self) -> String {
        self.chars[self.pos..].iter().collect()
    }

    /// Consumes whitespace, `//` line comments and `/* ... */` block
    /// comments. Newlines inside block comments still advance the line
    /// counter. A block comment left open at end of input is reported with
    /// the line it was opened on.
    fn skip_insignificant(&mut self) {
        while let Some(current) = self.current() {
            if current.is_whitespace() {
                self.advance();
                continue;
            }

            if current == '/' && self.peek() == Some('/') {
                while let Some(current) = self.current() {
                    if current == '\n' {
                        break;
                    }
                    self.advance();
                }
                continue;
            }

            if current == '/' && self.peek() == Some('*') {
                let opened_on = self.line;
                self.advance();
                self.advance();

                let mut closed = false;
                while let Some(current) = self.current() {
                    if current == '*' && self.peek() == Some('/') {
                        self.advance();
                        self.advance();
                        closed = true;
                        break;
                    }
                    self.advance();
                }

                if !closed {
                    self.diagnostics
                        .push(Diagnostic::new(DiagnosticImpl::UnterminatedComment, opened_on));
                }
                continue;
            }

            break;
        }
    }

    /// Reads an unsigned number literal. A trailing `.` with no fractional
    /// digits is accepted, and integers convert to floating point (`10`
    /// yields `10.0`).
    fn read_number(&mut self) -> Token {
        let line = self.line;
        let remaining = self.remainder();
        let matched = NUMBER_PATTERN.find(&remaining).unwrap().as_str();

        // The pattern only ever matches a valid float literal.
        let number = matched.parse::<f64>().unwrap();
        self.advance_n(matched.len());

        MK_TOKEN!(TokenKind::Number, TokenValue::Number(number), line)
    }

    /// Reads an identifier or keyword lexeme and resolves it through the
    /// symbol table. Known lexemes reuse their stored kind and value with
    /// the current line; unknown ones are registered as identifiers.
    fn read_identifier(&mut self) -> Token {
        let line = self.line;
        let remaining = self.remainder();
        let lexeme = SYMBOL_PATTERN.find(&remaining).unwrap().as_str().to_string();
        self.advance_n(lexeme.len());

        if let Some(entry) = self.symbols.lookup(&lexeme) {
            return MK_TOKEN!(entry.kind, entry.value.clone(), line);
        }

        self.symbols.insert(
            &lexeme,
            TokenKind::Identifier,
            TokenValue::Lexeme(lexeme.clone()),
        );

        MK_TOKEN!(TokenKind::Identifier, TokenValue::Lexeme(lexeme), line)
    }

    fn read_operator(&mut self) -> Option<Token> {
        for (pattern, kind) in OPERATOR_TABLE {
            if self.matches(pattern) {
                let line = self.line;
                self.advance_n(pattern.len());
                return Some(MK_TOKEN!(
                    *kind,
                    TokenValue::Lexeme((*pattern).to_string()),
                    line
                ));
            }
        }

        None
    }

    fn matches(&self, pattern: &str) -> bool {
        pattern
            .chars()
            .enumerate()
            .all(|(offset, expected)| self.chars.get(self.pos + offset) == Some(&expected))
    }
}

/// Runs one whole scanning session, returning every token up to and
/// including the `Eof` sentinel alongside the collected diagnostics.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut scanner = Scanner::new(source);
    let mut tokens = vec![];

    loop {
        let token = scanner.next_token();
        let at_end = token.is_eof();
        tokens.push(token);

        if at_end {
            break;
        }
    }

    (tokens, scanner.take_diagnostics())
}

//! minic-lex - lexical analyzer for the minic C-like subset language.
//!
//! This is explicitly an external collaborator to the parsing core per
//! spec.md §1 ("Lexing... assumed to deliver a singly-linked token stream
//! ending in an end-of-input sentinel"), but a shippable crate still needs
//! a real tokenizer to drive. It is sized to the grammar `minic-par`
//! actually implements — keywords `return`/`if`/`else`/`while`/`for`,
//! the punctuation spec.md §6 lists, identifiers, and decimal integer
//! literals — rather than the teacher's full Rust-like token set.
//!
//! Tokens are produced eagerly into a `Vec<Token>` ending in `Token::Eof`,
//! which is the idiomatic-Rust rendition of spec.md's "forward-only linked
//! token sequence ending in an EOF sentinel" (see `DESIGN.md`).

use minic_util::{Handler, Span};

/// A lexical token: either a reserved keyword/punctuator (compared by
/// exact lexeme bytes, mirroring spec.md §4.1's `consume`/`expect`
/// contract), an identifier, an integer literal, or end-of-input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind<'a> {
    /// A keyword or punctuator. The lexeme is one of a fixed, known set of
    /// `&'static str` literals, so kind equality plus lexeme byte equality
    /// is all `consume`/`expect` need.
    Reserved(&'a str),
    Ident(&'a str),
    Number(i64),
    Eof,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub span: Span,
}

impl<'a> Token<'a> {
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

/// Reserved lexemes recognized by `lex_identifier`'s keyword check and by
/// the multi-character operator dispatch below. Longer operators are
/// listed before their single-character prefixes so a maximal-munch
/// lookup (not needed here since dispatch is by first character, but kept
/// as documentation of intent) never ambiguous.
const KEYWORDS: &[&str] = &["return", "if", "else", "while", "for"];

pub struct Lexer<'a, 'h> {
    source: &'a str,
    position: usize,
    line: u32,
    column: u32,
    handler: &'h Handler,
}

impl<'a, 'h> Lexer<'a, 'h> {
    pub fn new(source: &'a str, handler: &'h Handler) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
            handler,
        }
    }

    /// Tokenize the entire source, ending the sequence with `Token::Eof`.
    pub fn tokenize(mut self) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace();

        let start = self.position;
        let (start_line, start_column) = (self.line, self.column);

        if self.is_at_end() {
            return self.make(TokenKind::Eof, start, start_line, start_column);
        }

        let c = self.current_char();

        if c.is_ascii_digit() {
            return self.lex_number(start, start_line, start_column);
        }
        if c.is_ascii_alphabetic() || c == '_' {
            return self.lex_identifier(start, start_line, start_column);
        }

        for &lexeme in TWO_CHAR_OPERATORS {
            if self.source[self.position..].starts_with(lexeme) {
                self.advance_by(lexeme.len());
                return self.make(TokenKind::Reserved(lexeme), start, start_line, start_column);
            }
        }

        if ONE_CHAR_OPERATORS.contains(&c) {
            self.advance();
            let lexeme = &self.source[start..self.position];
            return self.make(TokenKind::Reserved(lexeme), start, start_line, start_column);
        }

        let span = Span::new(start, start + c.len_utf8(), start_line, start_column);
        self.handler
            .fatal(span, format!("unexpected character '{}'", c));
    }

    fn lex_number(&mut self, start: usize, line: u32, column: u32) -> Token<'a> {
        while !self.is_at_end() && self.current_char().is_ascii_digit() {
            self.advance();
        }
        let text = &self.source[start..self.position];
        let value: i64 = match text.parse() {
            Ok(value) => value,
            Err(_) => {
                let span = Span::new(start, self.position, line, column);
                self.handler
                    .fatal(span, format!("integer literal '{text}' out of range"));
            }
        };
        self.make(TokenKind::Number(value), start, line, column)
    }

    fn lex_identifier(&mut self, start: usize, line: u32, column: u32) -> Token<'a> {
        while !self.is_at_end()
            && (self.current_char().is_ascii_alphanumeric() || self.current_char() == '_')
        {
            self.advance();
        }
        let text = &self.source[start..self.position];
        let kind = if KEYWORDS.contains(&text) {
            TokenKind::Reserved(text)
        } else {
            TokenKind::Ident(text)
        };
        self.make(kind, start, line, column)
    }

    fn make(&self, kind: TokenKind<'a>, start: usize, line: u32, column: u32) -> Token<'a> {
        Token {
            kind,
            span: Span::new(start, self.position, line, column),
        }
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && self.current_char().is_whitespace() {
            self.advance();
        }
    }

    fn current_char(&self) -> char {
        self.source[self.position..].chars().next().unwrap_or('\0')
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    fn advance(&mut self) {
        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }
}

const TWO_CHAR_OPERATORS: &[&str] = &["==", "!=", "<=", ">="];
const ONE_CHAR_OPERATORS: &[char] = &[
    '(', ')', '{', '}', ';', ',', '=', '<', '>', '+', '-', '*', '/',
];

//! Lexer for the MC programming language
//!
//! Handles tokenization including:
//! - Reserved words (keywords, boolean literals, type specifiers, word operators) and identifiers
//! - Integer literals in binary, decimal, and hexadecimal, plus floating-point literals
//! - Character and string literals with escape sequences
//! - One- and two-character operators and punctuation (longest match first)
//! - `#` line comments
//!
//! ## Module Structure
//!
//! - `numbers` - Numeric literal scanning
//! - `literals` - Character/string literal and escape scanning
//!
//! ## Notes
//! - The lexer is pull-based: [`Lexer::next_token`] produces one token per call and keeps returning
//!   [`TokenKind::Eof`] once the input is exhausted.
//! - Errors are fatal. After the first error every further `next_token` returns that same error.

mod literals;
mod numbers;

pub use numbers::MAX_INTEGER_LITERAL;

use std::collections::HashMap;

use crate::diagnostics::{CompileError, CompileResult, errors};
use crate::interner::{Interner, Symbol};
use crate::location::Location;
use crate::token::{Token, TokenKind, reserved_kind};
use mc_core::lang::keywords::KEYWORDS;
use mc_core::lang::operators::OperatorId;
use mc_core::lang::punctuation::PunctuationId;

// ============================================================================
// LEXER STATE
// ============================================================================

/// Lexer for MC source code.
///
/// Borrows the compilation's [`Interner`] for its whole lifetime: identifiers and string literals are interned
/// as they are scanned, and reserved words are recognized by symbol identity.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    line: u32,
    column: u32,
    interner: &'a mut Interner,
    /// Reserved-word table keyed by interned spelling.
    reserved: HashMap<Symbol, TokenKind>,
    failure: Option<CompileError>,
    /// Set once the iterator adapter has yielded its last item.
    exhausted: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str, interner: &'a mut Interner) -> Self {
        let reserved = KEYWORDS
            .iter()
            .map(|info| (interner.intern(info.canonical), reserved_kind(info.id)))
            .collect();

        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            line: Location::START.line,
            column: Location::START.column,
            interner,
            reserved,
            failure: None,
            exhausted: false,
        }
    }

    /// Location of the next character to be consumed.
    pub fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }

    /// Scan the next token.
    ///
    /// ## Errors
    /// Returns a [`CompileError`] of kind lexical for an invalid character, an unterminated or multi-line
    /// literal, or an invalid escape sequence. The error is sticky.
    pub fn next_token(&mut self) -> CompileResult<Token> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        let result = self.scan_token();
        if let Err(err) = &result {
            self.failure = Some(err.clone());
        }
        result
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.current_pos = pos + c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consume the next character if it is `expected`.
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn skip_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) -> CompileResult<Token> {
        loop {
            let start = self.location();
            let Some(c) = self.advance() else {
                return Ok(Token::new(TokenKind::Eof, start));
            };

            let kind = match c {
                ' ' | '\t' | '\r' | '\n' => continue,
                '#' => {
                    self.skip_comment();
                    continue;
                }

                // Punctuation
                '{' => TokenKind::Punctuation(PunctuationId::LBrace),
                '}' => TokenKind::Punctuation(PunctuationId::RBrace),
                '(' => TokenKind::Punctuation(PunctuationId::LParen),
                ')' => TokenKind::Punctuation(PunctuationId::RParen),
                '[' => TokenKind::Punctuation(PunctuationId::LBracket),
                ']' => TokenKind::Punctuation(PunctuationId::RBracket),
                ',' => TokenKind::Punctuation(PunctuationId::Comma),
                ';' => TokenKind::Punctuation(PunctuationId::Semicolon),
                ':' => TokenKind::Punctuation(PunctuationId::Colon),
                '-' => {
                    if self.match_char('>') {
                        TokenKind::Punctuation(PunctuationId::Arrow)
                    } else {
                        TokenKind::Operator(OperatorId::Minus)
                    }
                }

                // Operators
                '<' => self.operator(OperatorId::Lt, &[('=', OperatorId::LtEq), ('<', OperatorId::Shl)]),
                '>' => self.operator(OperatorId::Gt, &[('=', OperatorId::GtEq), ('>', OperatorId::Shr)]),
                '=' => self.operator(OperatorId::Eq, &[('=', OperatorId::EqEq)]),
                '!' => self.operator(OperatorId::LogicalNot, &[('=', OperatorId::NotEq)]),
                '&' => self.operator(OperatorId::Amp, &[('&', OperatorId::LogicalAnd)]),
                '|' => self.operator(OperatorId::Pipe, &[('|', OperatorId::LogicalOr)]),
                '+' => TokenKind::Operator(OperatorId::Plus),
                '*' => TokenKind::Operator(OperatorId::Star),
                '/' => TokenKind::Operator(OperatorId::Slash),
                '%' => TokenKind::Operator(OperatorId::Percent),
                '^' => TokenKind::Operator(OperatorId::Caret),
                '~' => TokenKind::Operator(OperatorId::Tilde),
                '?' => TokenKind::Operator(OperatorId::Question),

                // Literals
                '\'' => self.scan_character(start)?,
                '"' => self.scan_string(start)?,
                c if c.is_ascii_digit() => self.scan_number(c, start)?,

                c if is_ident_start(c) => self.scan_word(c),

                c => return Err(errors::unexpected_character(c, start)),
            };

            return Ok(Token::new(kind, start));
        }
    }

    /// Pick the longest operator starting with the character just consumed.
    ///
    /// ## Parameters
    /// - `single`: The operator when no second character matches.
    /// - `compounds`: `(second char, operator)` pairs tried in order.
    fn operator(&mut self, single: OperatorId, compounds: &[(char, OperatorId)]) -> TokenKind {
        for &(next, compound) in compounds {
            if self.match_char(next) {
                return TokenKind::Operator(compound);
            }
        }
        TokenKind::Operator(single)
    }

    /// Scan an identifier or reserved word whose first character was just consumed.
    fn scan_word(&mut self, first: char) -> TokenKind {
        let source = self.source;
        let start_pos = self.current_pos - first.len_utf8();
        while let Some(c) = self.peek() {
            if !is_ident_continue(c) {
                break;
            }
            self.advance();
        }

        let symbol = self.interner.intern(&source[start_pos..self.current_pos]);
        match self.reserved.get(&symbol) {
            Some(kind) => kind.clone(),
            None => TokenKind::Identifier(symbol),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = CompileResult<Token>;

    /// Yield tokens up to (not including) end-of-input, or a single error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.kind.is_eof() => {
                self.exhausted = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.exhausted = true;
                Some(Err(err))
            }
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Tokenize a whole source text.
///
/// ## Returns
/// - The token sequence, always terminated by a single [`TokenKind::Eof`] token.
///
/// ## Errors
/// - The first lexical error encountered.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str, interner: &mut Interner) -> CompileResult<Vec<Token>> {
    let mut lexer = Lexer::new(source, interner);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.kind.is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }
    tracing::debug!(tokens = tokens.len(), "lexed source");
    Ok(tokens)
}

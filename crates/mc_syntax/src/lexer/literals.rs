//! Character and string literal scanning for the MC lexer

use super::Lexer;
use crate::diagnostics::{CompileError, CompileResult, errors};
use crate::location::Location;
use crate::token::TokenKind;
use mc_core::lang::escapes;

impl<'a> Lexer<'a> {
    /// Scan a character literal whose opening `'` was just consumed.
    pub(super) fn scan_character(&mut self, start: Location) -> CompileResult<TokenKind> {
        let value = match self.peek() {
            None => return Err(errors::unterminated_literal("character", start)),
            Some('\n') => return Err(errors::multi_line_literal("character", start)),
            Some('\'') => return Err(CompileError::lexical("empty character literal", start)),
            Some('\\') => self.scan_escape()?,
            Some(c) => {
                self.advance();
                c
            }
        };

        match self.peek() {
            Some('\'') => {
                self.advance();
                Ok(TokenKind::Character(value))
            }
            None | Some('\n') => Err(errors::unterminated_literal("character", start)),
            Some(_) => Err(CompileError::lexical(
                "character literal holds more than one character",
                start,
            )),
        }
    }

    /// Scan a string literal whose opening `"` was just consumed. The contents are interned.
    pub(super) fn scan_string(&mut self, start: Location) -> CompileResult<TokenKind> {
        let mut text = String::new();
        loop {
            match self.peek() {
                None => return Err(errors::unterminated_literal("string", start)),
                Some('\n') => return Err(errors::multi_line_literal("string", start)),
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => text.push(self.scan_escape()?),
                Some(c) => {
                    self.advance();
                    text.push(c);
                }
            }
        }
        Ok(TokenKind::String(self.interner.intern(&text)))
    }

    /// Decode an escape sequence starting at the (unconsumed) backslash.
    fn scan_escape(&mut self) -> CompileResult<char> {
        let at = self.location();
        self.advance();
        match self.peek() {
            None => Err(errors::unterminated_escape(at)),
            Some(letter) => {
                let value = escapes::unescape(letter).ok_or_else(|| errors::invalid_escape(letter, at))?;
                self.advance();
                Ok(value)
            }
        }
    }
}

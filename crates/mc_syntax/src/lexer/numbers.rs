//! Number scanning for the MC lexer
//!
//! Handles `0b`/`0x` radix integers, decimal integers, and floating-point literals.

use super::Lexer;
use crate::diagnostics::{CompileError, CompileResult};
use crate::location::Location;
use crate::token::TokenKind;
use mc_core::lang::literals::Radix;

impl<'a> Lexer<'a> {
    /// Scan a number whose first digit was just consumed.
    ///
    /// ## Notes
    /// - A `.` after the decimal digits makes the literal floating point; digits after the `.` are optional.
    /// - Radix literals never have a fractional part.
    pub(super) fn scan_number(&mut self, first: char, start: Location) -> CompileResult<TokenKind> {
        if first == '0' {
            if let Some(radix) = self.peek().and_then(Radix::from_prefix) {
                self.advance();
                return self.scan_radix_integer(radix, start);
            }
        }

        let mut digits = String::from(first);
        self.take_digits(Radix::Decimal, &mut digits);

        if self.match_char('.') {
            digits.push('.');
            self.take_digits(Radix::Decimal, &mut digits);
            return digits.parse::<f64>().map(TokenKind::Float).map_err(|_| {
                CompileError::lexical(format!("invalid floating-point literal '{digits}'"), start)
            });
        }

        integer(&digits, Radix::Decimal, start)
    }

    fn scan_radix_integer(&mut self, radix: Radix, start: Location) -> CompileResult<TokenKind> {
        let mut digits = String::new();
        self.take_digits(radix, &mut digits);
        if digits.is_empty() {
            return Err(CompileError::lexical(
                format!("expected digits after '{}'", radix.prefix()),
                start,
            ));
        }
        integer(&digits, radix, start)
    }

    fn take_digits(&mut self, radix: Radix, digits: &mut String) {
        while let Some(c) = self.peek() {
            if !radix.is_digit(c) {
                break;
            }
            digits.push(c);
            self.advance();
        }
    }
}

/// Largest integer literal in any radix: `int` is 32-bit signed and literals carry no sign.
pub const MAX_INTEGER_LITERAL: i64 = i32::MAX as i64;

fn integer(digits: &str, radix: Radix, start: Location) -> CompileResult<TokenKind> {
    i64::from_str_radix(digits, radix.base())
        .ok()
        .filter(|value| *value <= MAX_INTEGER_LITERAL)
        .map(|value| TokenKind::Integer { radix, value })
        .ok_or_else(|| {
            CompileError::lexical(
                format!("integer literal '{}{}' is out of range", radix.prefix(), digits),
                start,
            )
        })
}

//! Character escape vocabulary.
//!
//! Character and string literals share one fixed escape table. The lexer uses [`unescape`] to decode the
//! character after a backslash; token display uses [`escape`] to print literals back in source form.
//!
//! ## Examples
//! ```rust
//! use mc_core::lang::escapes;
//!
//! assert_eq!(escapes::unescape('n'), Some('\n'));
//! assert_eq!(escapes::escape('\t'), Some("\\t"));
//! assert_eq!(escapes::unescape('q'), None);
//! ```

/// One escape sequence: the character written after `\` and the character it denotes.
#[derive(Debug, Clone, Copy)]
pub struct EscapeInfo {
    pub letter: char,
    pub value: char,
    pub spelling: &'static str,
}

/// Registry of all escape sequences.
pub const ESCAPES: &[EscapeInfo] = &[
    esc('\'', '\'', "\\'"),
    esc('"', '"', "\\\""),
    esc('\\', '\\', "\\\\"),
    esc('a', '\u{07}', "\\a"),
    esc('b', '\u{08}', "\\b"),
    esc('f', '\u{0C}', "\\f"),
    esc('n', '\n', "\\n"),
    esc('r', '\r', "\\r"),
    esc('t', '\t', "\\t"),
    esc('v', '\u{0B}', "\\v"),
];

/// Decode the character written after a backslash.
pub fn unescape(letter: char) -> Option<char> {
    ESCAPES.iter().find(|e| e.letter == letter).map(|e| e.value)
}

/// The escaped spelling of `value`, if it needs one.
pub fn escape(value: char) -> Option<&'static str> {
    ESCAPES.iter().find(|e| e.value == value).map(|e| e.spelling)
}

const fn esc(letter: char, value: char, spelling: &'static str) -> EscapeInfo {
    EscapeInfo { letter, value, spelling }
}

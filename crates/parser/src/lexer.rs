//! Logos-based field splitter for rover description lines.
//!
//! A line is a sequence of fields separated by spaces or tabs. The lexer does
//! not judge what a field contains; that is left to the field parsers so that
//! an invalid field can be reported with its literal text.
//!
//! # Example input
//!
//! ```text
//! 5 5
//! 1 2 N
//! LMLMLMLMM
//! ```

use core::ops::Range;

/// All token kinds produced by the line lexer.
#[derive(::logos::Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A maximal run of non-blank characters.
    #[regex(r"[^ \t\r\n]+")]
    Field,

    /// Spaces, tabs and stray carriage returns.
    #[regex(r"[ \t\r]+")]
    Whitespace,

    /// A line feed.
    #[token("\n")]
    Newline,
}

/// A single token with its kind and the byte-offset span in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

impl Token {
    /// The slice of `source` this token covers.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.clone()]
    }
}

/// A field of a line together with its 1-based column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    pub text: &'a str,
    pub column: usize,
}

/// Tokenize `input` into a flat list of tokens.
///
/// Every byte belongs to exactly one token kind, so nothing is skipped.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    use logos::Logos as _;
    TokenKind::lexer(input)
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|kind| Token { kind, span }))
        .collect()
}

/// The fields of a single line, in order.
#[must_use]
pub fn fields(line: &str) -> Vec<Field<'_>> {
    tokenize(line)
        .into_iter()
        .filter(|token| token.kind == TokenKind::Field)
        .map(|token| Field {
            text: token.text(line),
            column: line[..token.span.start].chars().count() + 1,
        })
        .collect()
}

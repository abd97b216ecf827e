mod decl;
mod defaults;
mod expr;
mod postfix;
mod statement;
mod types;

use std::iter::Peekable;

use ast::defaults::DefaultProperties;
use ast::{Program, Spanned};
use logos::Span;

use crate::lexer::{SpannedToken, Token};

#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub span: Span,
}

impl ParseError {
    /// 1-based line and column of the error's start offset.
    pub fn line_col(&self, source: &str) -> (usize, usize) {
        let offset = self.span.start.min(source.len());
        let upto = &source[..offset];
        let line = upto.matches('\n').count() + 1;
        let col = offset - upto.rfind('\n').map(|i| i + 1).unwrap_or(0) + 1;
        (line, col)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ParseError at {:?}: {}", self.span, self.message)
    }
}

impl std::error::Error for ParseError {}

type ParseResult<T> = Result<T, ParseError>;

pub struct Parser<I: Iterator<Item = SpannedToken>> {
    tokens: Peekable<I>,
    current_span: Span,
    /// Stores the source text for slicing identifiers / literals
    source: String,
    /// `>` closers still owed after splitting a `>>`/`>>>` token inside a
    /// type argument list
    pending_gt: u8,
}

impl<I: Iterator<Item = SpannedToken>> Parser<I> {
    pub fn new(source: &str, iterator: I) -> Self {
        Self {
            tokens: iterator.peekable(),
            current_span: 0..0,
            source: source.to_string(),
            pending_gt: 0,
        }
    }

    /// Peek at the token, returning a clone (avoids borrow issues).
    fn peek_token(&mut self) -> Token {
        self.tokens
            .peek()
            .map(|(t, _)| t.clone())
            .unwrap_or(Token::Eof)
    }

    /// Peek at the span of the next token.
    fn peek_span(&mut self) -> Span {
        self.tokens
            .peek()
            .map(|(_, s)| s.clone())
            .unwrap_or(self.current_span.clone())
    }

    /// Advances to the next token and returns it, updating the current span.
    fn advance(&mut self) -> Option<Token> {
        if let Some((token, span)) = self.tokens.next() {
            self.current_span = span;
            Some(token)
        } else {
            None
        }
    }

    /// Returns the source text for a span.
    fn text(&self, span: &Span) -> &str {
        &self.source[span.start..span.end]
    }

    /// Returns the source text of the last consumed token.
    fn last_text(&self) -> &str {
        self.text(&self.current_span)
    }

    /// Builds an error pointing at the next token.
    fn error(&mut self, message: impl Into<String>) -> ParseError {
        ParseError {
            message: message.into(),
            span: self.peek_span(),
        }
    }

    /// Consumes the next token if it matches `expected`, else returns an error.
    fn expect(&mut self, expected: Token) -> ParseResult<Span> {
        let tok = self.peek_token();
        let span = self.peek_span();
        if tok == expected {
            self.advance();
            Ok(self.current_span.clone())
        } else if tok == Token::Error {
            Err(ParseError {
                message: "unrecognized character sequence".into(),
                span,
            })
        } else {
            Err(ParseError {
                message: format!("expected {:?}, found {:?}", expected, tok),
                span,
            })
        }
    }

    /// Consume an identifier and return its text. Error if not an identifier.
    fn expect_ident(&mut self) -> ParseResult<String> {
        let tok = self.peek_token();
        let span = self.peek_span();
        if tok == Token::Ident {
            self.advance();
            Ok(self.last_text().to_string())
        } else if tok == Token::Error {
            Err(ParseError {
                message: "unrecognized character sequence".into(),
                span,
            })
        } else {
            Err(ParseError {
                message: format!("expected identifier, found {:?}", tok),
                span,
            })
        }
    }

    /// Consume a literal integer (array sizes, default-properties indices).
    /// A fractional or hex number here is a malformed index.
    fn expect_integer(&mut self) -> ParseResult<u32> {
        let tok = self.peek_token();
        let span = self.peek_span();
        if tok == Token::Number {
            if let Ok(value) = self.text(&span).parse::<u32>() {
                self.advance();
                return Ok(value);
            }
        }
        Err(ParseError {
            message: format!("expected integer, found {:?}", tok),
            span,
        })
    }

    /// Checks if the next token matches, consuming it if so.
    fn eat(&mut self, expected: Token) -> bool {
        if self.peek_token() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    // --- Keywords ---
    //
    // The language is case-insensitive and its keywords are not reserved,
    // so keywords are plain identifier tokens matched by text.

    /// Check if the next token is an identifier spelling `word`
    /// (case-insensitive).
    fn peek_kw(&mut self, word: &str) -> bool {
        if self.peek_token() != Token::Ident {
            return false;
        }
        let span = self.peek_span();
        self.text(&span).eq_ignore_ascii_case(word)
    }

    /// Consume the keyword if present.
    fn eat_kw(&mut self, word: &str) -> bool {
        if self.peek_kw(word) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Require the keyword.
    fn expect_kw(&mut self, word: &str) -> ParseResult<()> {
        if self.eat_kw(word) {
            return Ok(());
        }
        let tok = self.peek_token();
        let span = self.peek_span();
        if tok == Token::Error {
            return Err(ParseError {
                message: "unrecognized character sequence".into(),
                span,
            });
        }
        Err(ParseError {
            message: format!("expected '{}', found {:?}", word, tok),
            span,
        })
    }

    // --- Top-level ---

    /// Parse a whole compilation unit: one class body.
    ///
    /// The sections must appear in the fixed order — pre-class consts, the
    /// class declaration, the var/struct/enum/const section, the
    /// function/state/const section, then an optional defaultproperties
    /// block. Anything out of order fails the final end-of-input check.
    pub fn parse_program(&mut self) -> ParseResult<Spanned<Program>> {
        let start = self.peek_span();

        let mut constants = Vec::new();
        while self.peek_kw("const") {
            constants.push(self.parse_const()?);
        }

        let class = self.parse_class_declaration()?;

        let mut members = Vec::new();
        while let Some(member) = self.try_parse_member_decl()? {
            members.push(member);
        }

        let mut body = Vec::new();
        while let Some(decl) = self.try_parse_body_decl()? {
            body.push(decl);
        }

        let default_properties = if self.peek_kw("defaultproperties") {
            self.parse_default_properties()?
        } else {
            let span = self.peek_span();
            Spanned::new(DefaultProperties::default(), span.start..span.start)
        };

        let tok = self.peek_token();
        if tok != Token::Eof {
            return Err(self.error(format!("expected end of class body, found {:?}", tok)));
        }

        let end = self.current_span.end;
        Ok(Spanned::new(
            Program {
                constants,
                class,
                members,
                body,
                default_properties,
            },
            start.start..end,
        ))
    }
}

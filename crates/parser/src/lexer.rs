use logos::{Logos, Span};

/// Tokens of the class-script language.
///
/// Keywords are deliberately not reserved here: the language matches them
/// case-insensitively and lets most of them double as identifiers (a
/// default-properties key named `Name`, say), so the parser recognizes
/// keywords by identifier text instead.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")] // whitespace
#[logos(skip r"//[^\n]*")] // single-line comment
#[logos(skip r"/\*[^*]*\*+([^/*][^*]*\*+)*/")] // multi-line comment
pub enum Token {
    // Multi-char operators
    #[token("<<<")]
    UnsignedShl,
    #[token(">>>")]
    UnsignedShr,
    #[token("<<")]
    Shl,
    #[token(">>")]
    Shr,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<=")]
    Le,
    #[token(">=")]
    Ge,
    #[token("~=")]
    ApproxEq,
    #[token("**")]
    Pow,
    #[token("||")]
    OrOr,
    #[token("&&")]
    AndAnd,
    #[token("^^")]
    XorXor,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("+=")]
    PlusAssign,
    #[token("-=")]
    MinusAssign,
    #[token("*=")]
    StarAssign,
    #[token("/=")]
    SlashAssign,
    #[token("$=")]
    DollarAssign,
    #[token("@=")]
    AtAssign,

    // Single-char operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("$")]
    Dollar,
    #[token("@")]
    At,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("!")]
    Bang,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("=")]
    Assign,

    // Punctuation
    #[token(".")]
    Dot,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // Literals and identifiers
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    /// Decimal with optional fraction, or `0x` hex. Defaults to 32-bit
    /// signed integers and single-precision floats.
    #[regex(r"0[xX][0-9a-fA-F]+|[0-9]+(\.[0-9]+)?")]
    Number,

    /// Double-quoted, no escape processing.
    #[regex(r#""[^"\n]*""#)]
    String,

    /// Single-quoted name literal, `'PackageName.ObjectName'`.
    #[regex(r"'[^'\n]*'")]
    Name,

    /// Input that matches no terminal; surfaces as a syntax error at its
    /// span. Lexing does not attempt recovery past it.
    Error,

    Eof,
}

pub type SpannedToken = (Token, Span);

/// Lex `source` into spanned tokens. Whitespace and comments are skipped
/// before the parser ever sees them.
pub fn tokenize(source: &str) -> impl Iterator<Item = SpannedToken> + '_ {
    Token::lexer(source).spanned().map(|(token, span)| match token {
        Ok(token) => (token, span),
        Err(()) => (Token::Error, span),
    })
}

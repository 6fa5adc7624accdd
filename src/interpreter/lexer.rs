use logos::Logos;
use tracing::trace;

use crate::error::LexError;

/// The kind of a lexical token.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// The enum is the closed alphabet of the language: literal categories,
/// operators, delimiters and keywords. Characters that have no rule of their
/// own are reported as [`TokenKind::Other`] rather than rejected.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r]+")]
pub enum TokenKind {
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Number,
    /// String literal tokens delimited by `"` or `'`. No escape sequences.
    #[regex(r#""[^"]*""#, count_newlines)]
    #[regex(r"'[^']*'", count_newlines)]
    String,
    /// Identifier tokens; variable or function names such as `x` or `add`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,

    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `!`
    #[token("!")]
    Bang,
    /// `=`
    #[token("=")]
    Assign,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `||`
    #[token("||")]
    DoublePipe,
    /// `&&`
    #[token("&&")]
    DoubleAmpersand,

    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    /// `let`
    #[token("let")]
    Let,
    /// `function`
    #[token("function")]
    Function,
    /// `return`
    #[token("return")]
    Return,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `elif`
    #[token("elif")]
    Elif,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,

    /// Newlines only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Any character without a rule of its own, kept verbatim.
    Other,
}

impl TokenKind {
    /// Returns `true` for tokens that end an expression regardless of the
    /// current precedence: `,`, `)` and `;`.
    #[must_use]
    pub const fn terminates_expression(self) -> bool {
        matches!(self, Self::Comma | Self::RParen | Self::Semicolon)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Identifier => "identifier",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::Bang => "'!'",
            Self::Assign => "'='",
            Self::Less => "'<'",
            Self::Greater => "'>'",
            Self::LessEqual => "'<='",
            Self::GreaterEqual => "'>='",
            Self::EqualEqual => "'=='",
            Self::BangEqual => "'!='",
            Self::DoublePipe => "'||'",
            Self::DoubleAmpersand => "'&&'",
            Self::Comma => "','",
            Self::Semicolon => "';'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::Let => "'let'",
            Self::Function => "'function'",
            Self::Return => "'return'",
            Self::If => "'if'",
            Self::Else => "'else'",
            Self::Elif => "'elif'",
            Self::True => "'true'",
            Self::False => "'false'",
            Self::NewLine => "newline",
            Self::Other => "character",
        };
        write!(f, "{text}")
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A single token: its kind, the raw text it stands for and the line it was
/// found on.
///
/// Two tokens are equal when their kind and lexeme are equal; the line is
/// diagnostic metadata only. For string literals the lexeme is the text
/// between the quotes.
#[derive(Debug, Clone, Eq)]
pub struct Token {
    /// The token category.
    pub kind:   TokenKind,
    /// The source text of the token.
    pub lexeme: String,
    /// The source line where the token ends.
    pub line:   usize,
}

impl Token {
    /// Creates a token on line 1.
    ///
    /// Mostly useful for building expected token sequences in tests.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               line: 1 }
    }

    /// Creates a token on the given line.
    #[must_use]
    pub fn at_line(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               line }
    }

    /// Returns the source text that lexes back into this token.
    ///
    /// String lexemes are re-quoted, using single quotes when the text
    /// itself contains a double quote.
    #[must_use]
    pub fn source_text(&self) -> String {
        match self.kind {
            TokenKind::String if self.lexeme.contains('"') => format!("'{}'", self.lexeme),
            TokenKind::String => format!("\"{}\"", self.lexeme),
            _ => self.lexeme.clone(),
        }
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.lexeme == other.lexeme
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Number | TokenKind::Identifier | TokenKind::String => {
                write!(f, "{} '{}'", self.kind, self.lexeme)
            },
            TokenKind::Other => write!(f, "'{}'", self.lexeme),
            _ => write!(f, "{}", self.kind),
        }
    }
}

/// Converts source text into a sequence of tokens.
///
/// Whitespace is skipped, keywords are recognized from identifier-shaped
/// text, and string lexemes lose their quotes. Unknown characters become
/// [`TokenKind::Other`] tokens.
///
/// # Errors
/// Returns [`LexError::UnterminatedString`] when a quote is never closed.
///
/// # Example
/// ```
/// use sprout::interpreter::lexer::{Token, TokenKind, tokenize};
///
/// let tokens = tokenize("let a = 'hi';").unwrap();
///
/// assert_eq!(tokens,
///            vec![Token::new(TokenKind::Let, "let"),
///                 Token::new(TokenKind::Identifier, "a"),
///                 Token::new(TokenKind::Assign, "="),
///                 Token::new(TokenKind::String, "hi"),
///                 Token::new(TokenKind::Semicolon, ";")]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(kind) = lexer.next() {
        let slice = lexer.slice();
        let line = lexer.extras.line;

        match kind {
            Ok(TokenKind::String) => {
                let inner = &slice[1..slice.len() - 1];
                tokens.push(Token::at_line(TokenKind::String, inner, line));
            },
            Ok(kind) => tokens.push(Token::at_line(kind, slice, line)),
            Err(()) => {
                if let Some(quote) = slice.chars().next()
                   && (quote == '"' || quote == '\'')
                {
                    return Err(LexError::UnterminatedString { quote, line });
                }
                tokens.extend(slice.chars()
                                   .map(|ch| Token::at_line(TokenKind::Other, ch, line)));
            },
        }
    }

    trace!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}

/// Joins tokens back into source text that tokenizes to the same sequence.
///
/// # Example
/// ```
/// use sprout::interpreter::lexer::{render, tokenize};
///
/// let tokens = tokenize("print('a' + 1);").unwrap();
/// assert_eq!(tokenize(&render(&tokens)).unwrap(), tokens);
/// ```
#[must_use]
pub fn render(tokens: &[Token]) -> String {
    tokens.iter()
          .map(Token::source_text)
          .collect::<Vec<_>>()
          .join(" ")
}

/// Advances the line counter past newlines inside a string literal.
fn count_newlines(lex: &mut logos::Lexer<TokenKind>) -> bool {
    lex.extras.line += lex.slice().matches('\n').count();
    true
}

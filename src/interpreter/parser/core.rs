use std::collections::HashMap;

use tracing::trace;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{infix, prefix},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses the tokens of an expression starting at the current token.
///
/// A prefix handler consumes the tokens of one term, starting with the
/// token it was registered for.
pub type PrefixHandler = fn(&mut Parser<'_>) -> ParseResult<Expr>;

/// Extends an already parsed left operand.
///
/// The current token is the operator the handler was registered for; the
/// precedence passed in is that operator's own.
pub type InfixHandler = fn(&mut Parser<'_>, Expr, Precedence) -> ParseResult<Expr>;

/// Binding power of operators, from loosest to tightest.
///
/// Any token that is not an infix operator has [`Precedence::Lowest`], so it
/// ends the expression in front of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Tokens that are not infix operators.
    Lowest         = 1,
    /// `||` and `&&`.
    Logical        = 2,
    /// `+` and `-`, together with the comparison and equality operators.
    Additive       = 3,
    /// `*` and `/`.
    Multiplicative = 5,
    /// Operands of `+`, `-` and `!` used as prefix operators.
    Prefix         = 8,
    /// Function calls.
    Call           = 10,
}

/// A Pratt parser over a token slice.
///
/// Expressions are parsed by looking up the current token in two tables:
/// the prefix table says how a term can start, the infix table says how a
/// term already parsed can be continued. Statements are recognized by
/// their first token.
///
/// # Example
/// ```
/// use sprout::{
///     ast::{Expr, InfixOperator},
///     interpreter::{
///         lexer::tokenize,
///         parser::core::{Parser, Precedence},
///     },
/// };
///
/// let tokens = tokenize("1 + 2 * 3").unwrap();
/// let expr = Parser::new(&tokens).parse_expression(Precedence::Lowest).unwrap();
///
/// let product = Expr::infix(Expr::number(2), InfixOperator::Mul, Expr::number(3));
/// assert_eq!(expr, Expr::infix(Expr::number(1), InfixOperator::Add, product));
/// ```
pub struct Parser<'t> {
    tokens:          &'t [Token],
    position:        usize,
    prefix_handlers: HashMap<TokenKind, PrefixHandler>,
    infix_handlers:  HashMap<TokenKind, InfixHandler>,
}

impl<'t> Parser<'t> {
    /// Creates a parser positioned at the first token, with every handler
    /// registered.
    #[must_use]
    pub fn new(tokens: &'t [Token]) -> Self {
        let mut parser = Self { tokens,
                                position: 0,
                                prefix_handlers: HashMap::new(),
                                infix_handlers: HashMap::new() };

        parser.register_prefix(TokenKind::Number, prefix::parse_number);
        parser.register_prefix(TokenKind::String, prefix::parse_string);
        parser.register_prefix(TokenKind::True, prefix::parse_boolean);
        parser.register_prefix(TokenKind::False, prefix::parse_boolean);
        parser.register_prefix(TokenKind::Identifier, prefix::parse_identifier_or_call);
        parser.register_prefix(TokenKind::LParen, prefix::parse_grouped);
        for kind in [TokenKind::Minus, TokenKind::Plus, TokenKind::Bang] {
            parser.register_prefix(kind, prefix::parse_prefix_operator);
        }

        for kind in [TokenKind::Plus,
                     TokenKind::Minus,
                     TokenKind::Star,
                     TokenKind::Slash,
                     TokenKind::Less,
                     TokenKind::Greater,
                     TokenKind::LessEqual,
                     TokenKind::GreaterEqual,
                     TokenKind::EqualEqual,
                     TokenKind::BangEqual,
                     TokenKind::DoublePipe,
                     TokenKind::DoubleAmpersand]
        {
            parser.register_infix(kind, infix::parse_infix_operator);
        }

        parser
    }

    /// Registers (or replaces) the prefix handler for `kind`.
    pub fn register_prefix(&mut self, kind: TokenKind, handler: PrefixHandler) {
        self.prefix_handlers.insert(kind, handler);
    }

    /// Registers (or replaces) the infix handler for `kind`.
    pub fn register_infix(&mut self, kind: TokenKind, handler: InfixHandler) {
        self.infix_handlers.insert(kind, handler);
    }

    /// Tests whether an expression can start with `kind`.
    #[must_use]
    pub fn has_prefix_handler(&self, kind: TokenKind) -> bool {
        self.prefix_handlers.contains_key(&kind)
    }

    /// Parses an expression whose operators all bind tighter than `min`.
    ///
    /// Parsing stops at `,`, `)` or `;`, at the end of input, and in front
    /// of any token whose precedence is not greater than `min`. The
    /// stopping token is left unconsumed.
    ///
    /// # Errors
    /// - [`ParseError::MissingPrefixHandler`] if no expression can start
    ///   with the current token.
    /// - [`ParseError::UnexpectedEndOfInput`] if there is no token at all.
    pub fn parse_expression(&mut self, min: Precedence) -> ParseResult<Expr> {
        let token = self.peek().ok_or_else(|| self.end_of_input("expression"))?;
        let parse_prefix = self.prefix_handlers
                               .get(&token.kind)
                               .copied()
                               .ok_or_else(|| ParseError::MissingPrefixHandler { token: token.to_string(),
                                                                                 line:  token.line, })?;

        let mut left = parse_prefix(self)?;

        while let Some(token) = self.peek() {
            if token.kind.terminates_expression() {
                break;
            }

            let precedence = infix::precedence_of(token.kind);
            if precedence <= min {
                break;
            }

            let parse_infix =
                self.infix_handlers
                    .get(&token.kind)
                    .copied()
                    .ok_or_else(|| ParseError::MissingInfixHandler { token: token.to_string(),
                                                                     line:  token.line, })?;
            left = parse_infix(self, left, precedence)?;
        }

        Ok(left)
    }

    /// Returns the current token without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.position)
    }

    /// Returns the kind of the token `offset` positions ahead.
    #[must_use]
    pub fn peek_kind_at(&self, offset: usize) -> Option<TokenKind> {
        self.tokens.get(self.position + offset).map(|token| token.kind)
    }

    /// Returns the kind of the current token.
    #[must_use]
    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.peek_kind_at(0)
    }

    /// Consumes and returns the current token.
    pub fn advance(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    /// Consumes the current token if it has the given kind.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedToken`] or
    /// [`ParseError::UnexpectedEndOfInput`] otherwise, leaving the cursor
    /// where it was.
    pub fn expect(&mut self, kind: TokenKind) -> ParseResult<&'t Token> {
        match self.peek() {
            Some(token) if token.kind == kind => {
                self.position += 1;
                Ok(token)
            },
            _ => Err(self.unexpected(&kind.to_string())),
        }
    }

    /// Builds the error for finding something other than `expected` at the
    /// current position.
    pub(in crate::interpreter::parser) fn unexpected(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::UnexpectedToken { expected: expected.to_string(),
                                                         found:    token.to_string(),
                                                         line:     token.line, },
            None => self.end_of_input(expected),
        }
    }

    pub(in crate::interpreter::parser) fn end_of_input(&self, expected: &str) -> ParseError {
        ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                           line:     self.tokens.last().map_or(1, |t| t.line), }
    }
}

/// Parses a whole program.
///
/// # Errors
/// Returns the first [`ParseError`] encountered; there is no recovery.
///
/// # Example
/// ```
/// use sprout::{
///     ast::{Expr, Statement},
///     interpreter::{lexer::tokenize, parser::core::parse},
/// };
///
/// let tokens = tokenize("let x = 5;").unwrap();
///
/// assert_eq!(parse(&tokens).unwrap(),
///            vec![Statement::Let { name:  "x".to_string(),
///                                  value: Expr::number(5), }]);
/// assert!(parse(&tokenize("let x = 5").unwrap()).is_err());
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Vec<Statement>> {
    let statements = Parser::new(tokens).parse_program()?;
    trace!(count = statements.len(), "parsed program");
    Ok(statements)
}

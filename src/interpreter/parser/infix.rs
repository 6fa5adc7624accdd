use crate::{
    ast::{Expr, InfixOperator},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

/// Maps a token to the binary operator it spells, if any.
#[must_use]
pub const fn infix_operator(kind: TokenKind) -> Option<InfixOperator> {
    let op = match kind {
        TokenKind::Plus => InfixOperator::Add,
        TokenKind::Minus => InfixOperator::Sub,
        TokenKind::Star => InfixOperator::Mul,
        TokenKind::Slash => InfixOperator::Div,
        TokenKind::Less => InfixOperator::Less,
        TokenKind::Greater => InfixOperator::Greater,
        TokenKind::LessEqual => InfixOperator::LessEqual,
        TokenKind::GreaterEqual => InfixOperator::GreaterEqual,
        TokenKind::EqualEqual => InfixOperator::Equal,
        TokenKind::BangEqual => InfixOperator::NotEqual,
        TokenKind::DoublePipe => InfixOperator::Or,
        TokenKind::DoubleAmpersand => InfixOperator::And,
        _ => return None,
    };
    Some(op)
}

/// Returns how tightly a token binds when it appears after an operand.
///
/// Comparison and equality share the additive level, so `1 + 2 < 4` groups
/// as `(1 + 2) < 4` but `1 < 2 + 3` groups as `(1 < 2) + 3`.
///
/// # Example
/// ```
/// use sprout::interpreter::{
///     lexer::TokenKind,
///     parser::{core::Precedence, infix::precedence_of},
/// };
///
/// assert_eq!(precedence_of(TokenKind::Star), Precedence::Multiplicative);
/// assert_eq!(precedence_of(TokenKind::EqualEqual), Precedence::Additive);
/// assert_eq!(precedence_of(TokenKind::Identifier), Precedence::Lowest);
/// ```
#[must_use]
pub const fn precedence_of(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::DoublePipe | TokenKind::DoubleAmpersand => Precedence::Logical,
        TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Less
        | TokenKind::Greater
        | TokenKind::EqualEqual
        | TokenKind::LessEqual
        | TokenKind::GreaterEqual
        | TokenKind::BangEqual => Precedence::Additive,
        TokenKind::Star | TokenKind::Slash => Precedence::Multiplicative,
        _ => Precedence::Lowest,
    }
}

/// Parses `left <op> right`.
///
/// The right operand is parsed at the operator's own precedence, so a
/// following operator of the same level folds onto the result rather than
/// onto `right`: `a - b - c` is `(a - b) - c`.
pub fn parse_infix_operator(parser: &mut Parser<'_>,
                            left: Expr,
                            precedence: Precedence)
                            -> ParseResult<Expr> {
    let Some(op) = parser.peek_kind().and_then(infix_operator) else {
        return Err(parser.unexpected("infix operator"));
    };
    parser.advance();

    let right = parser.parse_expression(precedence)?;
    Ok(Expr::infix(left, op, right))
}

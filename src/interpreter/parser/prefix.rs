use crate::{
    ast::{Expr, PrefixOperator},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

/// Parses a number literal, keeping its lexeme.
pub fn parse_number(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    let token = parser.expect(TokenKind::Number)?;
    Ok(Expr::Number(token.lexeme.clone()))
}

/// Parses a string literal.
pub fn parse_string(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    let token = parser.expect(TokenKind::String)?;
    Ok(Expr::String(token.lexeme.clone()))
}

/// Parses `true` or `false`.
pub fn parse_boolean(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    match parser.peek_kind() {
        Some(TokenKind::True) => {
            parser.advance();
            Ok(Expr::Boolean(true))
        },
        Some(TokenKind::False) => {
            parser.advance();
            Ok(Expr::Boolean(false))
        },
        _ => Err(parser.unexpected("boolean")),
    }
}

/// Parses an identifier, or a call when the identifier is followed by `(`.
///
/// Call arguments are full expressions separated by commas.
///
/// Grammar: `call := identifier "(" (expression ("," expression)*)? ")"`
pub fn parse_identifier_or_call(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    let name = parser.expect_identifier()?;

    if parser.peek_kind() != Some(TokenKind::LParen) {
        return Ok(Expr::Identifier(name));
    }
    parser.advance();

    let arguments = parser.parse_comma_separated(|p| p.parse_expression(Precedence::Lowest),
                                                 TokenKind::RParen)?;

    Ok(Expr::Call { callee: name,
                    arguments })
}

/// Parses a parenthesized expression.
///
/// Grouping leaves no trace in the tree; it only changes its shape.
pub fn parse_grouped(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    parser.expect(TokenKind::LParen)?;
    let expr = parser.parse_expression(Precedence::Lowest)?;
    parser.expect(TokenKind::RParen)?;
    Ok(expr)
}

/// Parses `-x`, `+x` or `!x`.
///
/// The operand binds tighter than every infix operator, so `-a * b` is
/// `(-a) * b`.
pub fn parse_prefix_operator(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    let op = match parser.peek_kind() {
        Some(TokenKind::Minus) => PrefixOperator::Negate,
        Some(TokenKind::Plus) => PrefixOperator::Plus,
        Some(TokenKind::Bang) => PrefixOperator::Not,
        _ => return Err(parser.unexpected("prefix operator")),
    };
    parser.advance();

    let operand = parser.parse_expression(Precedence::Prefix)?;
    Ok(Expr::prefix(op, operand))
}

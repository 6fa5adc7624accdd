use std::rc::Rc;

use crate::{
    ast::{Block, Expr, FunctionDef, Statement},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// The first token decides the statement kind:
    /// - `let`: variable declaration,
    /// - `if`, `elif`, `else`: a branch of a conditional chain,
    /// - `function`: function definition,
    /// - `return`: return statement,
    /// - `{`: nested block,
    /// - an identifier followed by `=`: assignment,
    /// - anything an expression can start with: expression statement.
    ///
    /// `elif` and `else` are parsed here without checking what precedes
    /// them; the statement list does that.
    ///
    /// # Errors
    /// Returns [`ParseError::UnknownStatement`] when no statement can start
    /// with the current token, and otherwise the first error found inside
    /// the statement.
    ///
    /// # Example
    /// ```
    /// use sprout::{
    ///     ast::{Expr, Statement},
    ///     interpreter::{lexer::tokenize, parser::core::Parser},
    /// };
    ///
    /// let tokens = tokenize("x = 2").unwrap();
    /// let statement = Parser::new(&tokens).parse_statement().unwrap();
    ///
    /// assert_eq!(statement,
    ///            Statement::Assign { name:  "x".to_string(),
    ///                                value: Expr::number(2), });
    /// ```
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        let token = self.peek().ok_or_else(|| self.end_of_input("statement"))?;

        match token.kind {
            TokenKind::Let => self.parse_let(),
            TokenKind::If => {
                self.advance();
                let (condition, body) = self.parse_branch()?;
                Ok(Statement::If { condition, body })
            },
            TokenKind::Elif => {
                self.advance();
                let (condition, body) = self.parse_branch()?;
                Ok(Statement::Elif { condition, body })
            },
            TokenKind::Else => {
                self.advance();
                Ok(Statement::Else { body: self.parse_block()? })
            },
            TokenKind::Function => self.parse_function(),
            TokenKind::Return => {
                self.advance();
                let value = self.parse_expression(Precedence::Lowest)?;
                self.end_statement()?;
                Ok(Statement::Return(value))
            },
            TokenKind::LBrace => Ok(Statement::Block(self.parse_block()?)),
            TokenKind::Identifier if self.peek_kind_at(1) == Some(TokenKind::Assign) => {
                self.parse_assignment()
            },
            kind if self.has_prefix_handler(kind) => {
                let expr = self.parse_expression(Precedence::Lowest)?;
                self.end_statement()?;
                Ok(Statement::Expression(expr))
            },
            _ => Err(ParseError::UnknownStatement { token: token.to_string(),
                                                    line:  token.line, }),
        }
    }

    /// Parses `let <identifier> = <expression>;`.
    ///
    /// The trailing `;` is mandatory.
    fn parse_let(&mut self) -> ParseResult<Statement> {
        self.expect(TokenKind::Let)?;
        let name = self.expect_identifier()?;
        self.expect(TokenKind::Assign)?;
        let value = self.parse_expression(Precedence::Lowest)?;
        self.expect(TokenKind::Semicolon)?;

        Ok(Statement::Let { name, value })
    }

    /// Parses `<identifier> = <expression>`, with the usual optional `;`.
    fn parse_assignment(&mut self) -> ParseResult<Statement> {
        let name = self.expect_identifier()?;
        self.expect(TokenKind::Assign)?;
        let value = self.parse_expression(Precedence::Lowest)?;
        self.end_statement()?;

        Ok(Statement::Assign { name, value })
    }

    /// Parses `(<condition>) { ... }` after `if` or `elif`.
    fn parse_branch(&mut self) -> ParseResult<(Expr, Block)> {
        self.expect(TokenKind::LParen)?;
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect(TokenKind::RParen)?;
        let body = self.parse_block()?;

        Ok((condition, body))
    }

    /// Parses `function <name>(<params>) { ... }`.
    ///
    /// Parameters must be plain identifiers.
    fn parse_function(&mut self) -> ParseResult<Statement> {
        self.expect(TokenKind::Function)?;
        let name = self.expect_identifier()?;
        self.expect(TokenKind::LParen)?;
        let params = self.parse_comma_separated(Self::expect_identifier, TokenKind::RParen)?;
        let body = self.parse_block()?;

        Ok(Statement::Function(Rc::new(FunctionDef { name, params, body })))
    }
}

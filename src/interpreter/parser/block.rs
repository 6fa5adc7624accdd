use crate::{
    ast::{Block, Statement},
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, Parser},
            utils::dangling_branch,
        },
    },
};

impl Parser<'_> {
    /// Parses a block delimited by braces.
    ///
    /// Grammar: `block := "{" statement* "}"`
    ///
    /// # Errors
    /// Returns a `ParseError` if the block does not start with `{`, if any
    /// statement fails to parse, or if the input ends before the closing
    /// `}`.
    pub fn parse_block(&mut self) -> ParseResult<Block> {
        self.expect(TokenKind::LBrace)?;
        let statements = self.parse_statements(Some(TokenKind::RBrace))?;
        Ok(Block { statements })
    }

    /// Parses statements until the input is exhausted.
    pub fn parse_program(&mut self) -> ParseResult<Vec<Statement>> {
        self.parse_statements(None)
    }

    /// Parses statements up to `closing`, which is consumed, or to the end
    /// of input when `closing` is `None`.
    ///
    /// `elif` and `else` are only accepted directly after an `if` or `elif`
    /// of the same list.
    fn parse_statements(&mut self, closing: Option<TokenKind>) -> ParseResult<Vec<Statement>> {
        let mut statements = Vec::new();
        let mut in_conditional = false;

        loop {
            let Some(token) = self.peek() else {
                if let Some(closing) = closing {
                    return Err(self.end_of_input(&closing.to_string()));
                }
                break;
            };

            if Some(token.kind) == closing {
                self.advance();
                break;
            }

            if matches!(token.kind, TokenKind::Elif | TokenKind::Else) && !in_conditional {
                return Err(dangling_branch(token.kind, token.line));
            }

            let statement = self.parse_statement()?;
            in_conditional = matches!(statement, Statement::If { .. } | Statement::Elif { .. });
            statements.push(statement);
        }

        Ok(statements)
    }
}

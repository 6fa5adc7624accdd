use crate::{
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a comma-separated list of items up to and including `closing`.
    ///
    /// The opening delimiter must already be consumed. An immediately
    /// encountered closing token produces an empty list.
    ///
    /// Grammar (simplified): `list := (item ("," item)*)? closing`
    ///
    /// # Errors
    /// Returns a `ParseError` if an item fails to parse, if something other
    /// than `,` or `closing` follows an item, or if the input ends first.
    pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
        &mut self,
        mut parse_item: impl FnMut(&mut Self) -> ParseResult<T>,
        closing: TokenKind)
        -> ParseResult<Vec<T>> {
        let mut items = Vec::new();

        if self.peek_kind() == Some(closing) {
            self.advance();
            return Ok(items);
        }

        loop {
            items.push(parse_item(self)?);

            match self.peek_kind() {
                Some(TokenKind::Comma) => {
                    self.advance();
                },
                Some(kind) if kind == closing => {
                    self.advance();
                    break;
                },
                _ => return Err(self.unexpected(&format!("',' or {closing}"))),
            }
        }

        Ok(items)
    }

    /// Consumes an identifier and returns its name.
    ///
    /// # Errors
    /// Returns a `ParseError` if the current token is not an identifier.
    pub fn expect_identifier(&mut self) -> ParseResult<String> {
        match self.peek() {
            Some(token) if token.kind == TokenKind::Identifier => {
                self.advance();
                Ok(token.lexeme.clone())
            },
            _ => Err(self.unexpected("identifier")),
        }
    }

    /// Ends an expression-like statement.
    ///
    /// A `;` is consumed if present. It may only be left out when the
    /// statement is the last one before a `}` or the end of input.
    pub(in crate::interpreter::parser) fn end_statement(&mut self) -> ParseResult<()> {
        match self.peek_kind() {
            Some(TokenKind::Semicolon) => {
                self.advance();
                Ok(())
            },
            Some(TokenKind::RBrace) | None => Ok(()),
            Some(_) => Err(self.unexpected("';'")),
        }
    }
}

/// Builds the error for an `elif` or `else` without a preceding conditional.
pub(in crate::interpreter::parser) const fn dangling_branch(kind: TokenKind,
                                                             line: usize)
                                                             -> ParseError {
    let keyword = match kind {
        TokenKind::Elif => "elif",
        _ => "else",
    };
    ParseError::DanglingBranch { keyword, line }
}

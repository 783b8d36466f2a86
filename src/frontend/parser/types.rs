/// Type parsing: `bool`, `char`, `int`, `float`, `* T`, and `( T )`.
impl<'a> Parser<'a> {
    // ========================================================================
    // Types
    // ========================================================================

    /// Parse a type.
    ///
    /// ## Errors
    /// Syntax error if the current token cannot start a type.
    pub fn parse_type(&mut self) -> CompileResult<Type> {
        self.nested(Self::type_specifier)
    }

    fn type_specifier(&mut self) -> CompileResult<Type> {
        if let TokenKind::TypeSpecifier(id) = self.peek().kind {
            self.accept()?;
            return Ok(self.sema.on_basic_type(id));
        }
        if self.match_op(OperatorId::Star)? {
            let pointee = self.parse_type()?;
            return Ok(self.sema.on_pointer_type(pointee));
        }
        if self.match_punct(PunctuationId::LParen)? {
            let ty = self.parse_type()?;
            self.expect_punct(PunctuationId::RParen, "')' after a type")?;
            return Ok(ty);
        }
        Err(self.unexpected("a type"))
    }
}

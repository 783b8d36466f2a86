/// Declaration parsing.
///
/// ```text
/// declaration := ('var' | 'let') object-tail
///              | 'def' IDENT ':' ...          (value)
///              | 'def' IDENT '(' ...          (function)
/// object-tail := IDENT ':' type ('=' expression)? ';'
/// function    := 'def' IDENT '(' params? ')' '->' type (block | ';')
/// ```
impl<'a> Parser<'a> {
    // ========================================================================
    // Declarations
    // ========================================================================

    /// Parse one top-level declaration.
    ///
    /// ## Errors
    /// Syntax error if the current token does not start a declaration, or if `def NAME` is followed by neither
    /// `:` nor `(`.
    pub fn parse_declaration(&mut self) -> CompileResult<Rc<Declaration>> {
        if self.check_keyword(KeywordId::Def) && self.lookahead(2)?.kind.is_punctuation(PunctuationId::LParen) {
            return self.function_declaration();
        }
        self.object_declaration()
    }

    /// Parse a variable, constant, or value declaration.
    fn object_declaration(&mut self) -> CompileResult<Rc<Declaration>> {
        let kind = if self.check_keyword(KeywordId::Var) {
            DeclKind::Variable
        } else if self.check_keyword(KeywordId::Let) {
            DeclKind::Constant
        } else if self.check_keyword(KeywordId::Def) {
            if !self.lookahead(2)?.kind.is_punctuation(PunctuationId::Colon) {
                let token = self.lookahead(2)?;
                return Err(errors::expected("':' or '(' after the defined name", &token.to_string(), token.location));
            }
            DeclKind::Value
        } else {
            return Err(self.unexpected("a declaration"));
        };
        self.accept()?;

        let (name, location) = self.expect_identifier()?;
        self.expect_punct(PunctuationId::Colon, "':' before the declared type")?;
        let ty = self.parse_type()?;
        let init = if self.match_op(OperatorId::Eq)? {
            Some(self.parse_expression()?)
        } else {
            None
        };
        self.expect_punct(PunctuationId::Semicolon, "';' after a declaration")?;
        self.sema.on_object_declaration(kind, name, ty, init, location)
    }

    /// Parse a function declaration or definition.
    ///
    /// Parameters are declared in their own scope. The function itself is declared in the enclosing scope
    /// before the body is parsed, so the body can call it recursively.
    fn function_declaration(&mut self) -> CompileResult<Rc<Declaration>> {
        self.expect_keyword(KeywordId::Def, "'def'")?;
        let (name, location) = self.expect_identifier()?;
        let params = self.scoped(ScopeKind::Parameter, Self::parameter_list)?;
        self.expect_punct(PunctuationId::Arrow, "'->' before the return type")?;
        let ret = self.parse_type()?;
        let function = self.sema.on_function_declaration(name, params, ret, location)?;

        if self.match_punct(PunctuationId::Semicolon)? {
            return Ok(function);
        }
        if !self.check_punct(PunctuationId::LBrace) {
            return Err(self.unexpected("a function body or ';'"));
        }

        self.sema.begin_function(&function);
        let body = self.block_statement();
        self.sema.end_function();
        self.sema.on_function_definition(&function, body?);
        Ok(function)
    }

    /// `( name : type, ... )`
    fn parameter_list(&mut self) -> CompileResult<Vec<Rc<Declaration>>> {
        self.expect_punct(PunctuationId::LParen, "'(' before the parameter list")?;
        let mut params = Vec::new();
        if !self.check_punct(PunctuationId::RParen) {
            loop {
                let (name, location) = self.expect_identifier()?;
                self.expect_punct(PunctuationId::Colon, "':' before the parameter type")?;
                let ty = self.parse_type()?;
                params.push(self.sema.on_parameter_declaration(name, ty, location)?);
                if !self.match_punct(PunctuationId::Comma)? {
                    break;
                }
            }
        }
        self.expect_punct(PunctuationId::RParen, "')' after the parameter list")?;
        Ok(params)
    }

    /// A declaration inside a block. Only object declarations may appear here.
    fn local_declaration(&mut self) -> CompileResult<Rc<Declaration>> {
        if self.check_keyword(KeywordId::Def) && self.lookahead(2)?.kind.is_punctuation(PunctuationId::LParen) {
            let location = self.peek().location;
            return Err(CompileError::syntax(
                "function definitions are only allowed at the top level",
                location,
            ));
        }
        self.object_declaration()
    }
}

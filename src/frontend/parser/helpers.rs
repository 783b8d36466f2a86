/// Token-buffer primitives.
///
/// - Peeking (`peek`, `lookahead`) never consumes.
/// - `accept` consumes exactly one token.
/// - `check_*` tests the current token; `match_*` consumes it on success; `expect_*` fails with a syntax
///   error naming what was expected and the token actually found.
impl<'a> Parser<'a> {
    // ========================================================================
    // Lookahead buffer
    // ========================================================================

    /// The current token.
    fn peek(&self) -> &Token {
        self.tokens
            .front()
            .expect("INVARIANT: lookahead buffer is never empty")
    }

    /// The token `n` positions ahead of the current one (`lookahead(0)` is the current token).
    ///
    /// Pulls tokens from the lexer until `n + 1` are buffered; once the input is exhausted the lexer keeps
    /// producing end-of-input, so this never runs dry.
    fn lookahead(&mut self, n: usize) -> CompileResult<&Token> {
        while self.tokens.len() <= n {
            let token = self.lexer.next_token()?;
            self.tokens.push_back(token);
        }
        Ok(&self.tokens[n])
    }

    /// Consume and return the current token, refilling the buffer if it becomes empty.
    fn accept(&mut self) -> CompileResult<Token> {
        let token = self
            .tokens
            .pop_front()
            .expect("INVARIANT: lookahead buffer is never empty");
        if self.tokens.is_empty() {
            let next = self.lexer.next_token()?;
            self.tokens.push_back(next);
        }
        Ok(token)
    }

    // ========================================================================
    // Matching
    // ========================================================================

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    fn check_op(&self, id: OperatorId) -> bool {
        self.peek().kind.is_operator(id)
    }

    fn match_punct(&mut self, id: PunctuationId) -> CompileResult<bool> {
        if self.check_punct(id) {
            self.accept()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn match_op(&mut self, id: OperatorId) -> CompileResult<bool> {
        if self.check_op(id) {
            self.accept()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect_keyword(&mut self, id: KeywordId, what: &str) -> CompileResult<Token> {
        if self.check_keyword(id) {
            self.accept()
        } else {
            Err(self.unexpected(what))
        }
    }

    fn expect_punct(&mut self, id: PunctuationId, what: &str) -> CompileResult<Token> {
        if self.check_punct(id) {
            self.accept()
        } else {
            Err(self.unexpected(what))
        }
    }

    /// Consume an identifier and return its symbol and location.
    fn expect_identifier(&mut self) -> CompileResult<(Symbol, Location)> {
        if matches!(self.peek().kind, TokenKind::Identifier(_)) {
            let token = self.accept()?;
            Ok((token.symbol().clone(), token.location))
        } else {
            Err(self.unexpected("an identifier"))
        }
    }

    /// Syntax error at the current token.
    fn unexpected(&self, what: &str) -> CompileError {
        let token = self.peek();
        errors::expected(what, &token.to_string(), token.location)
    }

    // ========================================================================
    // Scopes
    // ========================================================================

    /// Run `parse` inside a new scope of `kind`.
    ///
    /// The scope is left whether or not `parse` succeeds, so enter and leave always pair up.
    fn scoped<T>(
        &mut self,
        kind: ScopeKind,
        parse: impl FnOnce(&mut Self) -> CompileResult<T>,
    ) -> CompileResult<T> {
        let entered = match kind {
            ScopeKind::Global => {
                self.sema.enter_global_scope();
                Ok(())
            }
            ScopeKind::Parameter => {
                self.sema.enter_parameter_scope();
                Ok(())
            }
            ScopeKind::Block => self.sema.enter_block_scope(),
        };
        let result = entered.and_then(|()| parse(self));
        self.sema.leave_scope();
        result
    }

    // ========================================================================
    // Nesting
    // ========================================================================

    /// Run `parse` one nesting level deeper.
    ///
    /// ## Errors
    /// Syntax error once more than [`MAX_NESTING_DEPTH`] levels are open.
    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> CompileResult<T>) -> CompileResult<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(errors::nesting_too_deep(MAX_NESTING_DEPTH, self.peek().location));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }
}

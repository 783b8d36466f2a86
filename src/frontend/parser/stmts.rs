/// Statement parsing.
///
/// ```text
/// statement := block
///            | 'if' '(' expression ')' statement ('else' statement)?
///            | 'while' '(' expression ')' statement
///            | 'break' ';' | 'continue' ';' | 'return' expression? ';'
///            | ('var' | 'let' | 'def') local-declaration
///            | expression ';'
/// block     := '{' statement* '}'
/// ```
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    /// Parse one statement.
    ///
    /// ## Errors
    /// The first error in the statement, including `break`/`continue` outside of a loop.
    pub fn parse_statement(&mut self) -> CompileResult<Stmt> {
        self.nested(Self::statement)
    }

    fn statement(&mut self) -> CompileResult<Stmt> {
        match self.peek().kind.clone() {
            TokenKind::Punctuation(PunctuationId::LBrace) => self.block_statement(),
            TokenKind::Keyword(KeywordId::If) => self.if_statement(),
            TokenKind::Keyword(KeywordId::While) => self.while_statement(),
            TokenKind::Keyword(KeywordId::Break) => {
                let token = self.accept()?;
                self.expect_punct(PunctuationId::Semicolon, "';' after 'break'")?;
                self.sema.on_break_statement(token.location)
            }
            TokenKind::Keyword(KeywordId::Continue) => {
                let token = self.accept()?;
                self.expect_punct(PunctuationId::Semicolon, "';' after 'continue'")?;
                self.sema.on_continue_statement(token.location)
            }
            TokenKind::Keyword(KeywordId::Return) => self.return_statement(),
            TokenKind::Keyword(KeywordId::Var | KeywordId::Let | KeywordId::Def) => {
                let decl = self.local_declaration()?;
                Ok(self.sema.on_declaration_statement(decl))
            }
            _ => {
                let expr = self.parse_expression()?;
                self.expect_punct(PunctuationId::Semicolon, "';' after an expression")?;
                Ok(self.sema.on_expression_statement(expr))
            }
        }
    }

    /// `{ statement* }` in a fresh block scope.
    fn block_statement(&mut self) -> CompileResult<Stmt> {
        self.expect_punct(PunctuationId::LBrace, "'{'")?;
        let statements = self.scoped(ScopeKind::Block, |p| {
            let mut statements = Vec::new();
            while !p.check_punct(PunctuationId::RBrace) {
                if p.peek().kind.is_eof() {
                    return Err(p.unexpected("'}'"));
                }
                statements.push(p.parse_statement()?);
            }
            Ok(statements)
        })?;
        self.expect_punct(PunctuationId::RBrace, "'}'")?;
        Ok(self.sema.on_block_statement(statements))
    }

    /// `( expression )` converted to `bool`.
    fn condition(&mut self) -> CompileResult<Expr> {
        self.expect_punct(PunctuationId::LParen, "'(' before the condition")?;
        let condition = self.parse_expression()?;
        self.expect_punct(PunctuationId::RParen, "')' after the condition")?;
        self.sema.on_condition(condition)
    }

    fn if_statement(&mut self) -> CompileResult<Stmt> {
        self.expect_keyword(KeywordId::If, "'if'")?;
        let condition = self.condition()?;
        let then_branch = self.parse_statement()?;
        let else_branch = if self.check_keyword(KeywordId::Else) {
            self.accept()?;
            Some(self.parse_statement()?)
        } else {
            None
        };
        Ok(self.sema.on_if_statement(condition, then_branch, else_branch))
    }

    fn while_statement(&mut self) -> CompileResult<Stmt> {
        self.expect_keyword(KeywordId::While, "'while'")?;
        let condition = self.condition()?;
        self.sema.enter_loop();
        let body = self.parse_statement();
        self.sema.leave_loop();
        Ok(self.sema.on_while_statement(condition, body?))
    }

    fn return_statement(&mut self) -> CompileResult<Stmt> {
        let token = self.expect_keyword(KeywordId::Return, "'return'")?;
        let value = if self.check_punct(PunctuationId::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect_punct(PunctuationId::Semicolon, "';' after 'return'")?;
        self.sema.on_return_statement(value, token.location)
    }
}

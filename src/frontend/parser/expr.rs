/// Expression parsing.
///
/// Precedence, loosest to tightest: assignment and conditional (right-associative, one shared entry) →
/// the binary ladder from the operator registry (`or` … multiplicative, all left-associative) → cast
/// (`as T`) → prefix unary → postfix call/index → primary.
///
/// ## Notes
/// - Binary levels are climbed with [`operators::precedence`], so the ladder lives in one table.
/// - `+ - * &` are binary after an operand and prefix everywhere else.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    /// Parse a full expression, assignment included.
    pub fn parse_expression(&mut self) -> CompileResult<Expr> {
        self.assignment_expression()
    }

    /// `target = value` and `condition ? then : else`, both right-associative.
    fn assignment_expression(&mut self) -> CompileResult<Expr> {
        self.nested(Self::assignment_tail)
    }

    fn assignment_tail(&mut self) -> CompileResult<Expr> {
        let lhs = self.binary_expression(operators::precedence(OperatorId::LogicalOr))?;

        if self.check_op(OperatorId::Question) {
            let question = self.accept()?;
            let then_branch = self.assignment_expression()?;
            self.expect_punct(PunctuationId::Colon, "':' in a conditional expression")?;
            let else_branch = self.assignment_expression()?;
            return self
                .sema
                .on_conditional_expression(lhs, then_branch, else_branch, question.location);
        }
        if self.check_op(OperatorId::Eq) {
            let assign = self.accept()?;
            let value = self.assignment_expression()?;
            return self.sema.on_assignment_expression(lhs, value, assign.location);
        }
        Ok(lhs)
    }

    /// The binary operator at the current token, if it binds at least as tightly as `min_precedence`.
    fn binary_operator(&self, min_precedence: u8) -> Option<BinaryOp> {
        let TokenKind::Operator(id) = self.peek().kind else {
            return None;
        };
        if matches!(
            operators::category(id),
            OperatorCategory::Assignment | OperatorCategory::Conditional
        ) || operators::precedence(id) < min_precedence
        {
            return None;
        }
        BinaryOp::from_operator(id)
    }

    /// Precedence climbing over the left-associative binary levels.
    ///
    /// Every folded operator deepens the tree by one level, so a long chain counts against the nesting limit
    /// like explicit parentheses do.
    fn binary_expression(&mut self, min_precedence: u8) -> CompileResult<Expr> {
        let open = self.depth;
        let result = self.binary_chain(min_precedence);
        self.depth = open;
        result
    }

    fn binary_chain(&mut self, min_precedence: u8) -> CompileResult<Expr> {
        let mut lhs = self.cast_expression()?;
        while let Some(op) = self.binary_operator(min_precedence) {
            if self.depth >= MAX_NESTING_DEPTH {
                return Err(errors::nesting_too_deep(MAX_NESTING_DEPTH, self.peek().location));
            }
            self.depth += 1;
            let token = self.accept()?;
            let precedence = operators::precedence(token.operator());
            let rhs = self.binary_expression(precedence + 1)?;
            lhs = self.sema.on_binary_expression(op, lhs, rhs, token.location)?;
        }
        Ok(lhs)
    }

    /// `e as T as U ...`
    fn cast_expression(&mut self) -> CompileResult<Expr> {
        let open = self.depth;
        let result = self.cast_chain();
        self.depth = open;
        result
    }

    fn cast_chain(&mut self) -> CompileResult<Expr> {
        let mut expr = self.unary_expression()?;
        while self.check_keyword(KeywordId::As) {
            if self.depth >= MAX_NESTING_DEPTH {
                return Err(errors::nesting_too_deep(MAX_NESTING_DEPTH, self.peek().location));
            }
            self.depth += 1;
            let token = self.accept()?;
            let target = self.parse_type()?;
            expr = self.sema.on_cast_expression(expr, target, token.location)?;
        }
        Ok(expr)
    }

    fn unary_expression(&mut self) -> CompileResult<Expr> {
        let op = match self.peek().kind {
            TokenKind::Operator(id) => UnaryOp::from_operator(id),
            _ => None,
        };
        match op {
            Some(op) => {
                let token = self.accept()?;
                let operand = self.nested(Self::unary_expression)?;
                self.sema.on_unary_expression(op, operand, token.location)
            }
            None => self.postfix_expression(),
        }
    }

    /// Calls `f(args)` and indexing `p[i]`, applied left to right.
    fn postfix_expression(&mut self) -> CompileResult<Expr> {
        let mut expr = self.primary_expression()?;
        loop {
            if self.check_punct(PunctuationId::LParen) {
                let token = self.accept()?;
                let args = self.argument_list(PunctuationId::RParen, "')' after the arguments")?;
                expr = self.sema.on_call_expression(expr, args, token.location)?;
            } else if self.check_punct(PunctuationId::LBracket) {
                let token = self.accept()?;
                let args = self.argument_list(PunctuationId::RBracket, "']' after the index")?;
                expr = self.sema.on_index_expression(expr, args, token.location)?;
            } else {
                return Ok(expr);
            }
        }
    }

    /// Comma-separated expressions up to and including `close`.
    fn argument_list(&mut self, close: PunctuationId, what: &str) -> CompileResult<Vec<Expr>> {
        let mut args = Vec::new();
        if !self.check_punct(close) {
            loop {
                args.push(self.parse_expression()?);
                if !self.match_punct(PunctuationId::Comma)? {
                    break;
                }
            }
        }
        self.expect_punct(close, what)?;
        Ok(args)
    }

    fn primary_expression(&mut self) -> CompileResult<Expr> {
        let location = self.peek().location;
        match self.peek().kind.clone() {
            TokenKind::Boolean(value) => {
                self.accept()?;
                Ok(self.sema.on_bool_literal(value, location))
            }
            TokenKind::Integer { value, .. } => {
                self.accept()?;
                Ok(self.sema.on_int_literal(value, location))
            }
            TokenKind::Float(value) => {
                self.accept()?;
                Ok(self.sema.on_float_literal(value, location))
            }
            TokenKind::Character(value) => {
                self.accept()?;
                Ok(self.sema.on_char_literal(value, location))
            }
            TokenKind::Identifier(name) => {
                self.accept()?;
                self.sema.on_id_expression(name, location)
            }
            TokenKind::Punctuation(PunctuationId::LParen) => {
                self.accept()?;
                let expr = self.parse_expression()?;
                self.expect_punct(PunctuationId::RParen, "')' after the expression")?;
                Ok(expr)
            }
            _ => Err(self.unexpected("a primary expression")),
        }
    }
}

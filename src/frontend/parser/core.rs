/// Parser state and construction.
///
/// ## Notes
/// - Lookahead is a FIFO of already-scanned tokens. It is never empty: [`Parser::new`] scans the first token
///   and [`Parser::accept`] refills the buffer as soon as it pops the last one.
/// - Parsing is single-pass and fail-fast. There is no error recovery.
/// - `depth` counts open statements, expressions, and types so that hostile nesting fails with a syntax error
///   instead of exhausting the stack.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    tokens: VecDeque<Token>,
    sema: Semantics,
    depth: usize,
}

/// Deepest nesting of statements, expressions, and types the parser accepts.
pub const MAX_NESTING_DEPTH: usize = 128;

impl<'a> Parser<'a> {
    /// Create a parser over `lexer` and scan the first token.
    ///
    /// ## Errors
    /// Returns the lexical error if the very first token is malformed.
    pub fn new(mut lexer: Lexer<'a>) -> CompileResult<Self> {
        let first = lexer.next_token()?;
        Ok(Self {
            lexer,
            tokens: VecDeque::from([first]),
            sema: Semantics::new(),
            depth: 0,
        })
    }

    /// Open the global scope, for parsing fragments outside of [`Parser::parse_program`].
    pub fn enter_global_scope(&mut self) {
        self.sema.enter_global_scope();
    }

    /// Parse a whole translation unit: declarations up to end of input.
    ///
    /// ## Errors
    /// The first lexical, syntax, type, or name error encountered.
    pub fn parse_program(&mut self) -> CompileResult<Declaration> {
        let declarations = self.scoped(ScopeKind::Global, |p| {
            let mut declarations = Vec::new();
            while !p.peek().kind.is_eof() {
                declarations.push(p.parse_declaration()?);
            }
            Ok(declarations)
        })?;
        Ok(self.sema.on_program(declarations))
    }
}

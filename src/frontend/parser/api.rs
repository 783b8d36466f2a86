/// Compile one source file to its typed program.
///
/// This is the main public entrypoint of the front end: it lexes, parses, and analyzes `source` in a single
/// pass.
///
/// ## Parameters
/// - `source`: the file's path and text; the path only labels diagnostics.
/// - `interner`: the compilation's symbol table. Symbols in the returned tree belong to it.
///
/// ## Returns
/// - The root [`Declaration::Program`].
///
/// ## Errors
/// The first lexical, syntax, type, or name error.
#[tracing::instrument(skip_all, fields(path = %source.path().display(), len = source.text().len()))]
pub fn compile(source: &SourceFile, interner: &mut Interner) -> CompileResult<Declaration> {
    let mut parser = Parser::new(Lexer::new(source.text(), interner))?;
    let program = parser.parse_program()?;
    tracing::debug!(declarations = program.declarations().len(), "compiled");
    Ok(program)
}

#![no_main]

use libfuzzer_sys::fuzz_target;
use mcc::frontend::interner::Interner;
use mcc::frontend::location::SourceFile;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(text) = std::str::from_utf8(data) {
        let source = SourceFile::new("fuzz.mc", text);
        let mut interner = Interner::new();
        // Any input must produce a program or an error, never a panic.
        if let Ok(program) = mcc::compile(&source, &mut interner) {
            let _ = mcc::ast::dump(&program);
        }
    }
});

#![no_main]

use libfuzzer_sys::fuzz_target;
use mcc::frontend::interner::Interner;
use mcc::frontend::lexer::Lexer;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Errors are sticky: after the first failure every call repeats it.
    let mut interner = Interner::new();
    let mut lexer = Lexer::new(text, &mut interner);
    match lexer.next_token() {
        Ok(_) => {
            while let Ok(token) = lexer.next_token() {
                if token.kind.is_eof() {
                    break;
                }
            }
        }
        Err(first) => assert_eq!(lexer.next_token().unwrap_err(), first),
    }
});

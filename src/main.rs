use std::io::{self, Write};

use interpreter::lexer::{lexer::Lexer, tokens::TokenKind};

/// Token-printing read loop: every line gets a fresh lexer and its tokens
/// are echoed until the line is exhausted. `exit()` (or closing stdin)
/// leaves the loop.
fn main() {
    let stdin = io::stdin();

    loop {
        print!(">> ");
        io::stdout().flush().expect("Failed to flush stdout!");

        let mut line = String::new();
        let bytes_read = stdin.read_line(&mut line).expect("Failed to read line!");
        if bytes_read == 0 {
            break;
        }

        let source = line.trim_end_matches(['\r', '\n']);
        if source == "exit()" {
            break;
        }

        let mut lexer = Lexer::new(source);
        loop {
            let token = lexer.next_token();
            if token.kind == TokenKind::Eof {
                break;
            }
            println!("{}", token);
        }
    }
}

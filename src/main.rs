use std::{
    env,
    fs::read_to_string,
    io::{self, BufRead, Write},
};

use lexico::{
    errors::errors::{Diagnostic, DiagnosticTip},
    lexer::scanner::Scanner,
    line_text,
    postfix::postfix::infix_to_postfix,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() > 2 {
        panic!("Incorrect arguments provided!");
    }

    match args.get(1).map(String::as_str) {
        Some("--posfixa") => postfix_loop(),
        Some(file_path) => {
            let source = read_to_string(file_path).expect("Failed to read file!");
            scan_and_report(&source);
        }
        None => interactive_loop(),
    }
}

/// Runs one scanning session over `source`: prints every token, then the
/// collected diagnostics, then the identifiers registered in the symbol
/// table.
fn scan_and_report(source: &str) {
    let mut scanner = Scanner::new(source);

    println!("--- Tokens ---");
    loop {
        let token = scanner.next_token();
        if token.is_eof() {
            break;
        }
        token.debug();
    }

    for diagnostic in scanner.diagnostics() {
        display_diagnostic(diagnostic, source);
    }

    let identifiers = scanner.symbols().identifiers();
    if !identifiers.is_empty() {
        println!("--- Symbol table ---");
        for name in identifiers {
            println!("Identifier ({})", name);
        }
    }
}

fn display_diagnostic(diagnostic: &Diagnostic, source: &str) {
    /*
        Error: InvalidCharacter (line 3: invalid character: '@')
        3 | valor = 10 @ 100;
    */

    if let DiagnosticTip::None = diagnostic.get_tip() {
        println!("Error: {} ({})", diagnostic.get_error_name(), diagnostic);
    } else {
        println!(
            "Error: {} ({}; {})",
            diagnostic.get_error_name(),
            diagnostic,
            diagnostic.get_tip()
        );
    }

    if let Some(text) = line_text(source, diagnostic.get_line()) {
        println!("{} | {}", diagnostic.get_line(), text.trim());
    }
}

/// Reads source lines from stdin until a line reading `FIM`, scans the
/// accumulated buffer, and repeats. `SAIR` exits.
fn interactive_loop() {
    println!("Type source lines, then `FIM` on its own line to scan (`SAIR` exits)");

    let stdin = io::stdin();
    let mut lines: Vec<String> = vec![];

    loop {
        print!("> ");
        io::stdout().flush().expect("Failed to flush stdout!");

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).expect("Failed to read stdin!") == 0 {
            break;
        }

        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("SAIR") {
            break;
        }
        if trimmed.eq_ignore_ascii_case("FIM") {
            if !lines.is_empty() {
                scan_and_report(&lines.join("\n"));
                lines.clear();
            }
            continue;
        }

        lines.push(line.trim_end().to_string());
    }
}

/// Reads one infix expression per line and prints its postfix form.
/// `sair` exits.
fn postfix_loop() {
    println!("Type an infix expression per line (`sair` exits)");

    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush().expect("Failed to flush stdout!");

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).expect("Failed to read stdin!") == 0 {
            break;
        }

        let expression = line.trim();
        if expression.eq_ignore_ascii_case("sair") {
            break;
        }
        if expression.is_empty() {
            continue;
        }

        let conversion = infix_to_postfix(expression);
        for character in &conversion.ignored {
            println!("Warning: character {:?} is invalid and was ignored", character);
        }
        println!("Infix:   {}", expression);
        println!("Postfix: {}", conversion.output);
    }
}

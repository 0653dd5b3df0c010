use std::io::{self, BufRead, Write};

use crate::output::{CYAN, GRAY, RESET};

/// Ask a yes/no question on stdin and return the user's choice.
///
/// Unreadable input counts as `default`.
pub fn confirm(question: &str, default: bool) -> bool {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    print!("{CYAN}?{RESET} {} {GRAY}{}{RESET} ", question, hint);
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }
    parse_answer(&input, default)
}

/// Interpret a typed answer. Anything unrecognised falls back to `default`.
pub fn parse_answer(input: &str, default: bool) -> bool {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    }
}

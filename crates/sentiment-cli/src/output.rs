//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use sentiment_core::FormattedResponse;

/// Print a formatted response: status line on stderr, JSON body on stdout.
pub fn print_response(response: &FormattedResponse) {
    eprintln!("{} {}", "Status".bold(), status_colored(response.status));

    let pretty = serde_json::from_str::<serde_json::Value>(&response.body)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_else(|_| response.body.clone());
    println!("{}", pretty);
}

fn status_colored(status: u16) -> ColoredString {
    match status {
        200..=299 => status.to_string().green(),
        400..=499 => status.to_string().yellow(),
        _ => status.to_string().red(),
    }
}

use crate::error::{ErrorContext, JdkPinError};
use colored::{ColoredString, Colorize};

pub fn format_error_chain(error: &JdkPinError) -> String {
    ErrorContext::new(error).to_string()
}

/// Render `error` for the terminal: the message, an indented details block
/// and a hint line.
///
/// Without `use_color` the output carries no escape codes at all.
pub fn format_error_with_color(error: &JdkPinError, use_color: bool) -> String {
    let context = ErrorContext::new(error);

    let mut output = format!("{} {error}\n", paint("error:", use_color, |s| s.red().bold()));

    if let Some(details) = &context.details {
        output.push('\n');
        for line in details.lines() {
            output.push_str(&format!("  {line}\n"));
        }
    }

    if let Some(suggestion) = &context.suggestion {
        output.push_str(&format!(
            "\n{} {}\n",
            paint("hint:", use_color, |s| s.yellow().bold()),
            paint(suggestion, use_color, |s| s.cyan())
        ));
    }

    output
}

fn paint(text: &str, use_color: bool, style: impl Fn(&str) -> ColoredString) -> String {
    if use_color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

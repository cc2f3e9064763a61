use colored::Colorize;
use std::fmt::Display;

/// Prints a progress line, dimmed so it recedes behind command output.
pub fn status(message: impl Display) {
    println!("{}", message.to_string().bright_black());
}

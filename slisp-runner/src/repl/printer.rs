use std::fmt::Display;

use slisp_core::ast::Atom;

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

pub fn error_line(error: &impl Display) -> String {
    format!("Error: {error}")
}

/// Hands drained graphics to the log; there is no canvas in the terminal.
pub fn print_graphics(graphics: &[Atom]) {
    for graphic in graphics {
        tracing::info!(%graphic, "draw");
    }
}

//! Textual form of evaluation results, one line per result.

use slisp_core::ast::{Atom, Expression};

/// Renders the value of an evaluated program.
///
/// Scalars are wrapped in parentheses (`(3)`, `(True)`), graphics use their
/// coordinate form. Values without a textual form, such as the result of
/// `draw`, yield `None`.
pub fn render_result(result: &Expression) -> Option<String> {
    match &result.head {
        atom @ (Atom::Number(_) | Atom::Boolean(_)) => Some(format!("({})", atom)),
        atom @ (Atom::Point(_) | Atom::Line(_) | Atom::Arc(_)) => Some(atom.to_string()),
        Atom::None | Atom::Symbol(_) => None,
    }
}

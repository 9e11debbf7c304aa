use std::io::Read;

use slisp_interpreter::error::{LoadError, SemanticError};
use slisp_interpreter::render::render_result;
use slisp_interpreter::Interpreter;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Semantic(#[from] SemanticError),
}

/// Parses and evaluates a whole program once, returning its result line.
pub fn execute(source: impl Read) -> Result<Option<String>, RunError> {
    let mut interpreter = Interpreter::new();
    interpreter.parse_reader(source)?;
    let result = interpreter.eval()?;

    for graphic in interpreter.drain_graphics() {
        tracing::info!(%graphic, "draw");
    }
    Ok(render_result(&result))
}

#[cfg(test)]
mod tests {
    use slisp_core::parser::ParseError;

    use super::*;

    #[test]
    fn test_execute() {
        let tests = vec![
            ("(+ 1 2)", Some("(3)")),
            ("(begin (define a 2)\n (< a 3))", Some("(True)")),
            ("(point 1 2)", Some("(1,2)")),
            ("(draw (point 1 2))", None),
        ];

        for (source, expected) in tests {
            let result = execute(source.as_bytes()).unwrap();
            assert_eq!(result.as_deref(), expected, "source: {source}");
        }
    }

    #[test]
    fn test_execute_errors() {
        assert!(matches!(
            execute("(+ 1".as_bytes()),
            Err(RunError::Load(LoadError::Parse(
                ParseError::UnmatchedOpenParen(_)
            )))
        ));
        assert!(matches!(
            execute("(+ 1 True)".as_bytes()),
            Err(RunError::Semantic(SemanticError::TypeMismatch { .. }))
        ));
    }

    #[test]
    fn test_error_messages() {
        let error = execute("(foo 1)".as_bytes()).unwrap_err();

        assert_eq!(error.to_string(), "Unbound name: foo");
    }
}

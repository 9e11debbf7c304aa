use std::io::Read;

use slisp_core::ast::{Atom, Expression};
use slisp_core::parser::{self, ParseError};

use crate::environment::Environment;
use crate::error::{LoadError, SemanticError};
use crate::evaluator::eval_program;

/// An interpreter session.
///
/// Holds the last successfully parsed program, the global environment and the
/// queue of graphics produced by `draw`. Parsing replaces the program;
/// evaluation may be repeated and keeps mutating the same environment.
#[derive(Debug, Default)]
pub struct Interpreter {
    environment: Environment,
    program: Option<Expression>,
    graphics: Vec<Atom>,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `input` as the program to evaluate next.
    ///
    /// On failure the previously parsed program is discarded, so a later
    /// [`Interpreter::eval`] reports [`SemanticError::NoProgram`].
    pub fn parse(&mut self, input: &str) -> Result<(), ParseError> {
        match parser::parse(input) {
            Ok(program) => {
                tracing::debug!(%program, "parsed program");
                self.program = Some(program);
                Ok(())
            }
            Err(error) => {
                tracing::debug!(%error, "parse failed");
                self.program = None;
                Err(error)
            }
        }
    }

    pub fn parse_reader(&mut self, mut reader: impl Read) -> Result<(), LoadError> {
        let mut input = String::new();
        if let Err(error) = reader.read_to_string(&mut input) {
            self.program = None;
            return Err(error.into());
        }
        Ok(self.parse(&input)?)
    }

    pub fn eval(&mut self) -> Result<Expression, SemanticError> {
        let program = self.program.as_ref().ok_or(SemanticError::NoProgram)?;
        let result = eval_program(program, &mut self.environment, &mut self.graphics);
        match &result {
            Ok(value) => tracing::debug!(%value, "evaluated program"),
            Err(error) => tracing::debug!(%error, "evaluation failed"),
        }
        result
    }

    /// Every atom queued by `draw` since the queue was last cleared, oldest
    /// first. This is the raw queue and may hold non-graphic atoms.
    pub fn graphics(&self) -> &[Atom] {
        &self.graphics
    }

    /// Empties the queue and returns the points, lines and arcs it held.
    pub fn drain_graphics(&mut self) -> Vec<Atom> {
        std::mem::take(&mut self.graphics)
            .into_iter()
            .filter(Atom::is_graphic)
            .collect()
    }

    pub fn clear_graphics(&mut self) {
        self.graphics.clear();
    }

    pub fn clear_ast(&mut self) {
        self.program = None;
    }

    pub fn reset_environment(&mut self) {
        self.environment.reset_to_default();
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }
}

#[cfg(test)]
mod tests {
    use slisp_core::ast::Point;
    use slisp_core::lexer::{Token, TokenKind};

    use super::*;

    #[test]
    fn test_parse_then_eval() {
        let mut interpreter = Interpreter::new();

        assert_eq!(interpreter.parse("(+ 1 2)"), Ok(()));
        assert_eq!(interpreter.eval(), Ok(Expression::leaf(3.0)));
    }

    #[test]
    fn test_eval_without_program() {
        let mut interpreter = Interpreter::new();

        assert_eq!(interpreter.eval(), Err(SemanticError::NoProgram));
    }

    #[test]
    fn test_failed_parse_discards_program() {
        let mut interpreter = Interpreter::new();

        interpreter.parse("(+ 1 2)").unwrap();
        assert_eq!(
            interpreter.parse("(+ 1 2"),
            Err(ParseError::UnmatchedOpenParen(Token {
                kind: TokenKind::LParen,
                start: 0,
                end: 1,
            }))
        );
        assert_eq!(interpreter.eval(), Err(SemanticError::NoProgram));
    }

    #[test]
    fn test_clear_ast() {
        let mut interpreter = Interpreter::new();

        interpreter.parse("1").unwrap();
        interpreter.clear_ast();

        assert_eq!(interpreter.eval(), Err(SemanticError::NoProgram));
    }

    #[test]
    fn test_parse_reader() {
        let mut interpreter = Interpreter::new();
        let source = "(begin\n  (define r 2) ; radius\n  (* r r))\n";

        interpreter.parse_reader(source.as_bytes()).unwrap();

        assert_eq!(interpreter.eval(), Ok(Expression::leaf(4.0)));
    }

    #[test]
    fn test_parse_reader_reports_syntax_errors() {
        let mut interpreter = Interpreter::new();

        let result = interpreter.parse_reader("())".as_bytes());

        assert!(matches!(
            result,
            Err(LoadError::Parse(ParseError::EmptyExpression(_)))
        ));
    }

    #[test]
    fn test_environment_persists_between_evaluations() {
        let mut interpreter = Interpreter::new();

        interpreter.parse("(define a 1)").unwrap();
        interpreter.eval().unwrap();
        interpreter.parse("(+ a 1)").unwrap();

        assert_eq!(interpreter.eval(), Ok(Expression::leaf(2.0)));
        assert!(interpreter.environment().contains("a"));
    }

    #[test]
    fn test_reevaluating_a_define_fails() {
        let mut interpreter = Interpreter::new();

        interpreter.parse("(define a 1)").unwrap();
        assert_eq!(interpreter.eval(), Ok(Expression::leaf(1.0)));
        assert_eq!(
            interpreter.eval(),
            Err(SemanticError::Redefinition("a".into()))
        );
    }

    #[test]
    fn test_reset_environment() {
        let mut interpreter = Interpreter::new();

        interpreter.parse("(define a 1)").unwrap();
        interpreter.eval().unwrap();
        interpreter.reset_environment();

        assert_eq!(interpreter.environment(), &Environment::new());
        assert_eq!(interpreter.eval(), Ok(Expression::leaf(1.0)));
    }

    #[test]
    fn test_graphics_queue() {
        let mut interpreter = Interpreter::new();
        let origin = Atom::Point(Point { x: 0.0, y: 0.0 });

        interpreter.parse("(draw (point 0 0))").unwrap();
        interpreter.eval().unwrap();
        interpreter.eval().unwrap();
        assert_eq!(interpreter.graphics(), &[origin.clone(), origin.clone()]);

        assert_eq!(interpreter.drain_graphics(), vec![origin.clone(), origin]);
        assert!(interpreter.graphics().is_empty());

        interpreter.eval().unwrap();
        interpreter.clear_graphics();
        assert!(interpreter.graphics().is_empty());
    }

    #[test]
    fn test_drain_keeps_only_graphics() {
        let mut interpreter = Interpreter::new();

        interpreter.parse("(draw 1 (point 0 0) True)").unwrap();
        interpreter.eval().unwrap();
        assert_eq!(interpreter.graphics().len(), 3);

        assert_eq!(
            interpreter.drain_graphics(),
            vec![Atom::Point(Point { x: 0.0, y: 0.0 })]
        );
        assert!(interpreter.graphics().is_empty());
    }
}

pub mod error;
pub mod expressions;

use crate::ast::Expression;
pub use error::ParseError;
use expressions::parse_expression;

pub struct Parser<'a> {
    pub iter: std::iter::Peekable<crate::lexer::Tokenizer<'a>>,
}

impl<'a> Parser<'a> {
    pub fn new(tokenizer: crate::lexer::Tokenizer<'a>) -> Self {
        let iter = tokenizer.peekable();
        Self { iter }
    }

    /// Parses exactly one expression; anything left over is an error.
    pub fn parse_program(&mut self) -> Result<Expression, ParseError> {
        let expression = parse_expression(self)?;
        match self.iter.next() {
            Some(token) => Err(ParseError::ExcessTokens(token)),
            None => Ok(expression),
        }
    }
}

/// Tokenizes and parses `input` in one go.
pub fn parse(input: &str) -> Result<Expression, ParseError> {
    Parser::new(crate::lexer::Tokenizer::new(input)).parse_program()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Atom;
    use crate::lexer::{Token, TokenKind};

    fn test_parsing(tests: Vec<(&str, &str)>) {
        for (input, expected) in tests {
            let tokenizer = crate::lexer::Tokenizer::new(input);
            let mut parser = crate::parser::Parser::new(tokenizer);

            let program = parser.parse_program().unwrap();

            assert_eq!(program.to_string(), expected)
        }
    }

    fn test_failures(tests: Vec<(&str, ParseError)>) {
        for (input, expected) in tests {
            assert_eq!(parse(input), Err(expected), "input: {input:?}");
        }
    }

    fn token(kind: TokenKind, start: usize) -> Token {
        let end = start + kind.to_string().len();
        Token { kind, start, end }
    }

    #[test]
    fn test_structure() {
        let program = parse("(+ 1 2)").unwrap();

        assert_eq!(
            program,
            Expression::new(
                Atom::symbol("+"),
                vec![Expression::leaf(1.0), Expression::leaf(2.0)]
            )
        );
        assert_eq!(program.tail.len(), 2);
    }

    #[test]
    fn test_single_atoms() {
        let tests = vec![
            ("1", Expression::leaf(1.0)),
            ("-4.5", Expression::leaf(-4.5)),
            ("True", Expression::leaf(true)),
            ("a", Expression::leaf(Atom::symbol("a"))),
            ("pi", Expression::leaf(Atom::symbol("pi"))),
        ];

        for (input, expected) in tests {
            assert_eq!(parse(input), Ok(expected));
        }
    }

    #[test]
    fn test_expressions() {
        let tests = vec![
            ("(+ 1 2)", "(+ 1 2)"),
            ("(begin (define a 1) a)", "(begin (define a 1) a)"),
            ("(if true (- 4) 5)", "(if True (- 4) 5)"),
            (
                "(draw (line (point 0 0) (point 10 0)))",
                "(draw (line (point 0 0) (point 10 0)))",
            ),
            ("(begin\n  (define x 3) ; set x\n  x)", "(begin (define x 3) x)"),
            ("(draw)", "draw"),
            ("(#)", "#"),
        ];

        test_parsing(tests)
    }

    #[test]
    fn test_head_without_operands() {
        let program = parse("(log10)").unwrap();
        assert_eq!(program.head, Atom::symbol("log10"));
        assert!(program.tail.is_empty());
    }

    #[test]
    fn test_syntax_errors() {
        let tests = vec![
            ("", ParseError::NoTokens),
            ("; only a comment", ParseError::NoTokens),
            (
                "()1)",
                ParseError::EmptyExpression(token(TokenKind::LParen, 0)),
            ),
            (
                "))(1 and)",
                ParseError::UnexpectedCloseParen(token(TokenKind::RParen, 0)),
            ),
            (
                "(+ 1 2",
                ParseError::UnmatchedOpenParen(token(TokenKind::LParen, 0)),
            ),
            (
                "(begin (+ 1 2)",
                ParseError::UnmatchedOpenParen(token(TokenKind::LParen, 0)),
            ),
            (
                "(+ 1 2))",
                ParseError::ExcessTokens(token(TokenKind::RParen, 7)),
            ),
            (
                "(+ 1 2) 3",
                ParseError::ExcessTokens(token(TokenKind::Word("3".into()), 8)),
            ),
            (
                "(1ee1)",
                ParseError::InvalidToken(token(TokenKind::Word("1ee1".into()), 1)),
            ),
            (
                "(+ 0.5.10 1)",
                ParseError::InvalidToken(token(TokenKind::Word("0.5.10".into()), 3)),
            ),
            (
                "((+ 1 2))",
                ParseError::InvalidHead(token(TokenKind::LParen, 1)),
            ),
            ("(", ParseError::UnmatchedOpenParen(token(TokenKind::LParen, 0))),
        ];

        test_failures(tests)
    }
}

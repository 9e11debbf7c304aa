use thiserror::Error;

use crate::lexer::Token;

#[derive(Debug, PartialEq, Error)]
pub enum ParseError {
    #[error("no tokens to parse")]
    NoTokens,
    #[error("empty expression: `()` opened {0}")]
    EmptyExpression(Token),
    #[error("unexpected closing parenthesis {0}")]
    UnexpectedCloseParen(Token),
    #[error("no matching closing parenthesis for {0}")]
    UnmatchedOpenParen(Token),
    #[error("invalid token {0}")]
    InvalidToken(Token),
    #[error("expected an atom after `(`, got {0}")]
    InvalidHead(Token),
    #[error("excess tokens after a complete expression, starting with {0}")]
    ExcessTokens(Token),
}

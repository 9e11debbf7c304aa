use super::error::ParseError;
use crate::ast::Expression;
use crate::classify::classify;
use crate::lexer::{Token, TokenKind};
use crate::parser::Parser;

pub fn parse_expression(parser: &mut Parser) -> Result<Expression, ParseError> {
    let Some(token) = parser.iter.next() else {
        return Err(ParseError::NoTokens);
    };
    match token.kind {
        TokenKind::LParen => parse_compound(parser, token),
        TokenKind::RParen => Err(ParseError::UnexpectedCloseParen(token)),
        TokenKind::Word(_) => parse_atom(token).map(Expression::leaf),
    }
}

fn parse_atom(token: Token) -> Result<crate::ast::Atom, ParseError> {
    match &token.kind {
        TokenKind::Word(word) => classify(word).ok_or(ParseError::InvalidToken(token)),
        _ => Err(ParseError::InvalidToken(token)),
    }
}

/// Parses the rest of a group whose `(` has already been consumed.
fn parse_compound(parser: &mut Parser, open: Token) -> Result<Expression, ParseError> {
    let head = match parser.iter.next() {
        None => return Err(ParseError::UnmatchedOpenParen(open)),
        Some(Token {
            kind: TokenKind::RParen,
            ..
        }) => return Err(ParseError::EmptyExpression(open)),
        Some(
            token @ Token {
                kind: TokenKind::LParen,
                ..
            },
        ) => return Err(ParseError::InvalidHead(token)),
        Some(token) => parse_atom(token)?,
    };

    let mut tail = Vec::new();
    loop {
        match parser.iter.peek().map(|t| &t.kind) {
            None => return Err(ParseError::UnmatchedOpenParen(open)),
            Some(TokenKind::RParen) => {
                parser.iter.next();
                break;
            }
            Some(_) => tail.push(parse_expression(parser)?),
        }
    }

    Ok(Expression::new(head, tail))
}

use std::fmt::Display;
use std::rc::Rc;

const COMMENT: char = ';';

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TokenKind {
    LParen,
    RParen,
    Word(Rc<str>),
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::Word(word) => write!(f, "{}", word),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "`{}` at {}", self.kind, self.start)
    }
}

/// Splits source text into parentheses and words.
///
/// Only the ASCII space separates words. Newlines and carriage returns are
/// dropped without ending the current word, and a `;` starts a comment that
/// runs until the next line break.
#[derive(Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    iter: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        let iter = input.char_indices().peekable();
        Self { input, iter }
    }

    fn skip_comment(&mut self) {
        for (_, ch) in self.iter.by_ref() {
            if ch == '\n' || ch == '\r' {
                break;
            }
        }
    }

    fn next_idx(&mut self) -> usize {
        self.iter
            .peek()
            .map(|(idx, _)| *idx)
            .unwrap_or(self.input.len())
    }

    fn bracket(&mut self, kind: TokenKind, start: usize) -> Token {
        self.iter.next();
        Token {
            kind,
            start,
            end: self.next_idx(),
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let mut word = String::new();
        let mut start = None;
        let mut end = 0;

        while let Some(&(idx, ch)) = self.iter.peek() {
            match ch {
                ' ' => {
                    self.iter.next();
                    if start.is_some() {
                        break;
                    }
                }
                '\n' | '\r' => {
                    self.iter.next();
                }
                // a pending word is flushed first, the comment is skipped on the next call
                COMMENT if start.is_some() => break,
                COMMENT => self.skip_comment(),
                '(' | ')' if start.is_some() => break,
                '(' => return Some(self.bracket(TokenKind::LParen, idx)),
                ')' => return Some(self.bracket(TokenKind::RParen, idx)),
                _ => {
                    self.iter.next();
                    start.get_or_insert(idx);
                    word.push(ch);
                    end = idx + ch.len_utf8();
                }
            }
        }

        start.map(|start| Token {
            kind: TokenKind::Word(word.into()),
            start,
            end,
        })
    }
}

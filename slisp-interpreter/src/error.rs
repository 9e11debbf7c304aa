use std::fmt::Display;
use std::rc::Rc;

use slisp_core::ast::{Atom, Expression};
use slisp_core::parser::ParseError;
use thiserror::Error;

/// Number of operands a procedure or special form accepts.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
    OneOf(usize, usize),
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Arity::Exactly(expected) => count == expected,
            Arity::AtLeast(minimum) => count >= minimum,
            Arity::OneOf(first, second) => count == first || count == second,
        }
    }
}

impl Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arity::Exactly(expected) => write!(f, "{}", expected),
            Arity::AtLeast(minimum) => write!(f, "at least {}", minimum),
            Arity::OneOf(first, second) => write!(f, "{} or {}", first, second),
        }
    }
}

#[derive(Debug, PartialEq, Error)]
pub enum SemanticError {
    #[error("Wrong number of arguments for {name}. Expected {expected}, got {actual}")]
    WrongArgumentCount {
        name: Rc<str>,
        expected: Arity,
        actual: usize,
    },
    #[error(
        "Invalid type for argument {position} of {name}. Expected {expected}, got {} {got}",
        .got.type_name()
    )]
    TypeMismatch {
        name: Rc<str>,
        position: usize,
        expected: &'static str,
        got: Atom,
    },
    #[error("Unbound name: {0}")]
    UnboundName(Rc<str>),
    #[error("Name is already defined: {0}")]
    Redefinition(Rc<str>),
    #[error("Reserved name cannot be defined: {0}")]
    ReservedName(Rc<str>),
    #[error("Special character cannot be evaluated: {0}")]
    IllegalCharacter(Rc<str>),
    #[error("define expects a symbol as its first argument, got {0}")]
    InvalidDefineTarget(Expression),
    #[error("Non boolean used in condition: {} {0}", .0.type_name())]
    NonBooleanCondition(Atom),
    #[error("No parsed program to evaluate")]
    NoProgram,
}

/// Failure while loading a program from a reader.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not read program: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl SemanticError {
    pub(crate) fn wrong_argument_count(name: &str, expected: Arity, actual: usize) -> Self {
        SemanticError::WrongArgumentCount {
            name: name.into(),
            expected,
            actual,
        }
    }

    pub(crate) fn type_mismatch(
        name: &str,
        position: usize,
        expected: &'static str,
        got: &Atom,
    ) -> Self {
        SemanticError::TypeMismatch {
            name: name.into(),
            position,
            expected,
            got: got.clone(),
        }
    }
}

use std::collections::HashMap;
use std::rc::Rc;

use slisp_core::ast::{Atom, Expression};
use slisp_core::classify::PI;

use crate::error::SemanticError;

pub type Procedure = fn(Vec<Atom>) -> Result<Expression, SemanticError>;

#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub func: Procedure,
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.func as usize == other.func as usize
    }
}

impl std::fmt::Debug for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builtin").field("name", &self.name).finish()
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SpecialForm {
    Define,
    Begin,
    If,
    Draw,
}

impl SpecialForm {
    pub const ALL: [SpecialForm; 4] = [
        SpecialForm::Define,
        SpecialForm::Begin,
        SpecialForm::If,
        SpecialForm::Draw,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SpecialForm::Define => "define",
            SpecialForm::Begin => "begin",
            SpecialForm::If => "if",
            SpecialForm::Draw => "draw",
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum EnvironmentEntry {
    Keyword(SpecialForm),
    Bound(Expression),
    Proc(Builtin),
}

/// The single global symbol table of a session.
#[derive(Debug, PartialEq, Clone)]
pub struct Environment {
    store: HashMap<Rc<str>, EnvironmentEntry>,
}

impl Environment {
    pub fn new() -> Self {
        let mut environment = Environment {
            store: HashMap::new(),
        };
        environment.populate_defaults();
        environment
    }

    fn populate_defaults(&mut self) {
        for form in SpecialForm::ALL {
            self.store.insert(form.name().into(), EnvironmentEntry::Keyword(form));
        }
        for builtin in crate::builtins::BUILTINS {
            self.store.insert(builtin.name.into(), EnvironmentEntry::Proc(builtin));
        }
        let pi = 0f64.atan2(-1.0);
        self.store.insert(PI.into(), EnvironmentEntry::Bound(Expression::leaf(pi)));
    }

    pub fn entry(&self, name: &str) -> Option<&EnvironmentEntry> {
        self.store.get(name)
    }

    pub fn lookup_expression(&self, name: &str) -> Result<&Expression, SemanticError> {
        match self.store.get(name) {
            Some(EnvironmentEntry::Bound(expression)) => Ok(expression),
            _ => Err(SemanticError::UnboundName(name.into())),
        }
    }

    pub fn lookup_procedure(&self, name: &str) -> Result<Builtin, SemanticError> {
        match self.store.get(name) {
            Some(EnvironmentEntry::Proc(builtin)) => Ok(*builtin),
            _ => Err(SemanticError::UnboundName(name.into())),
        }
    }

    pub fn special_form(&self, name: &str) -> Option<SpecialForm> {
        match self.store.get(name) {
            Some(EnvironmentEntry::Keyword(form)) => Some(*form),
            _ => None,
        }
    }

    /// Binds `name` once; names are never rebound.
    pub fn define(&mut self, name: Rc<str>, value: Expression) -> Result<(), SemanticError> {
        if self.store.contains_key(&name) {
            return Err(SemanticError::Redefinition(name));
        }
        tracing::debug!(name = %name, value = %value, "bound name");
        self.store.insert(name, EnvironmentEntry::Bound(value));
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.store.contains_key(name)
    }

    pub fn reset_to_default(&mut self) {
        self.store.clear();
        self.populate_defaults();
        tracing::debug!("environment reset to defaults");
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

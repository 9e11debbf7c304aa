use slisp_core::ast::{Atom, Expression};
use slisp_core::classify::{is_illegal, is_reserved};

use crate::environment::{Environment, EnvironmentEntry, SpecialForm};
use crate::error::{Arity, SemanticError};

/// Evaluates a parsed program.
///
/// `define` mutates `environment` and `draw` appends to `graphics`. Effects
/// made before a failure are kept.
pub fn eval_program(
    program: &Expression,
    environment: &mut Environment,
    graphics: &mut Vec<Atom>,
) -> Result<Expression, SemanticError> {
    eval_expression(program, environment, graphics)
}

fn eval_expression(
    expression: &Expression,
    environment: &mut Environment,
    graphics: &mut Vec<Atom>,
) -> Result<Expression, SemanticError> {
    match &expression.head {
        Atom::None
        | Atom::Boolean(_)
        | Atom::Number(_)
        | Atom::Point(_)
        | Atom::Line(_)
        | Atom::Arc(_) => Ok(expression.clone()),
        Atom::Symbol(name) => match environment.entry(name).cloned() {
            Some(EnvironmentEntry::Bound(value)) => Ok(value),
            Some(EnvironmentEntry::Keyword(form)) => {
                eval_special_form(form, &expression.tail, environment, graphics)
            }
            _ if is_illegal(name) => Err(SemanticError::IllegalCharacter(name.clone())),
            _ => {
                let arguments = eval_arguments(&expression.tail, environment, graphics)?;
                let procedure = environment.lookup_procedure(name)?;
                tracing::trace!(procedure = procedure.name, ?arguments, "applying procedure");
                (procedure.func)(arguments)
            }
        },
    }
}

fn eval_arguments(
    arguments: &[Expression],
    environment: &mut Environment,
    graphics: &mut Vec<Atom>,
) -> Result<Vec<Atom>, SemanticError> {
    let mut result = Vec::with_capacity(arguments.len());
    for argument in arguments {
        result.push(eval_expression(argument, environment, graphics)?.head);
    }
    Ok(result)
}

fn expect_arity(form: SpecialForm, tail: &[Expression], arity: Arity) -> Result<(), SemanticError> {
    if arity.accepts(tail.len()) {
        Ok(())
    } else {
        Err(SemanticError::wrong_argument_count(form.name(), arity, tail.len()))
    }
}

fn eval_special_form(
    form: SpecialForm,
    tail: &[Expression],
    environment: &mut Environment,
    graphics: &mut Vec<Atom>,
) -> Result<Expression, SemanticError> {
    match form {
        SpecialForm::Begin => eval_begin(tail, environment, graphics),
        SpecialForm::Define => eval_define(tail, environment, graphics),
        SpecialForm::If => eval_if(tail, environment, graphics),
        SpecialForm::Draw => eval_draw(tail, environment, graphics),
    }
}

fn eval_begin(
    tail: &[Expression],
    environment: &mut Environment,
    graphics: &mut Vec<Atom>,
) -> Result<Expression, SemanticError> {
    expect_arity(SpecialForm::Begin, tail, Arity::AtLeast(1))?;
    let mut result = Expression::none();
    for expression in tail {
        result = eval_expression(expression, environment, graphics)?;
    }
    Ok(result)
}

fn eval_define(
    tail: &[Expression],
    environment: &mut Environment,
    graphics: &mut Vec<Atom>,
) -> Result<Expression, SemanticError> {
    expect_arity(SpecialForm::Define, tail, Arity::Exactly(2))?;
    let target = &tail[0];
    let name = match &target.head {
        Atom::Symbol(name) if target.is_leaf() => name.clone(),
        _ => return Err(SemanticError::InvalidDefineTarget(target.clone())),
    };
    if is_reserved(&name) {
        return Err(SemanticError::ReservedName(name));
    }
    if is_illegal(&name) {
        return Err(SemanticError::IllegalCharacter(name));
    }
    if environment.contains(&name) {
        return Err(SemanticError::Redefinition(name));
    }

    let value = eval_expression(&tail[1], environment, graphics)?;
    environment.define(name, value.clone())?;
    Ok(value)
}

fn eval_if(
    tail: &[Expression],
    environment: &mut Environment,
    graphics: &mut Vec<Atom>,
) -> Result<Expression, SemanticError> {
    expect_arity(SpecialForm::If, tail, Arity::Exactly(3))?;
    let condition = eval_expression(&tail[0], environment, graphics)?;
    match condition.head {
        Atom::Boolean(true) => eval_expression(&tail[1], environment, graphics),
        Atom::Boolean(false) => eval_expression(&tail[2], environment, graphics),
        other => Err(SemanticError::NonBooleanCondition(other)),
    }
}

fn eval_draw(
    tail: &[Expression],
    environment: &mut Environment,
    graphics: &mut Vec<Atom>,
) -> Result<Expression, SemanticError> {
    expect_arity(SpecialForm::Draw, tail, Arity::AtLeast(1))?;
    for expression in tail {
        let graphic = eval_expression(expression, environment, graphics)?.head;
        tracing::debug!(%graphic, "queued graphic");
        graphics.push(graphic);
    }
    Ok(Expression::none())
}

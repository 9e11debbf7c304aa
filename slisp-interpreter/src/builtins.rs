use slisp_core::ast::{Arc, Atom, Expression, Line, Point};

use crate::environment::Builtin;
use crate::error::{Arity, SemanticError};

pub const BUILTINS: [Builtin; 20] = [
    Builtin { name: "not", func: builtin_not },
    Builtin { name: "and", func: builtin_and },
    Builtin { name: "or", func: builtin_or },
    Builtin { name: "<", func: builtin_less_than },
    Builtin { name: "<=", func: builtin_less_equal },
    Builtin { name: ">", func: builtin_greater_than },
    Builtin { name: ">=", func: builtin_greater_equal },
    Builtin { name: "=", func: builtin_equal },
    Builtin { name: "+", func: builtin_add },
    Builtin { name: "-", func: builtin_subtract },
    Builtin { name: "*", func: builtin_multiply },
    Builtin { name: "/", func: builtin_divide },
    Builtin { name: "log10", func: builtin_log10 },
    Builtin { name: "pow", func: builtin_pow },
    Builtin { name: "point", func: builtin_point },
    Builtin { name: "line", func: builtin_line },
    Builtin { name: "arc", func: builtin_arc },
    Builtin { name: "sin", func: builtin_sin },
    Builtin { name: "cos", func: builtin_cos },
    Builtin { name: "arctan", func: builtin_arctan },
];

fn check_arity(name: &str, args: &[Atom], arity: Arity) -> Result<(), SemanticError> {
    if arity.accepts(args.len()) {
        Ok(())
    } else {
        Err(SemanticError::wrong_argument_count(name, arity, args.len()))
    }
}

fn numbers(name: &str, args: &[Atom]) -> Result<Vec<f64>, SemanticError> {
    args.iter()
        .enumerate()
        .map(|(idx, arg)| match arg {
            Atom::Number(value) => Ok(*value),
            _ => Err(SemanticError::type_mismatch(name, idx + 1, "Number", arg)),
        })
        .collect()
}

fn booleans(name: &str, args: &[Atom]) -> Result<Vec<bool>, SemanticError> {
    args.iter()
        .enumerate()
        .map(|(idx, arg)| match arg {
            Atom::Boolean(value) => Ok(*value),
            _ => Err(SemanticError::type_mismatch(name, idx + 1, "Boolean", arg)),
        })
        .collect()
}

fn point(name: &str, args: &[Atom], idx: usize) -> Result<Point, SemanticError> {
    match &args[idx] {
        Atom::Point(point) => Ok(*point),
        arg => Err(SemanticError::type_mismatch(name, idx + 1, "Point", arg)),
    }
}

fn number(name: &str, args: &[Atom], idx: usize) -> Result<f64, SemanticError> {
    match &args[idx] {
        Atom::Number(value) => Ok(*value),
        arg => Err(SemanticError::type_mismatch(name, idx + 1, "Number", arg)),
    }
}

fn unary_number(
    name: &str,
    args: Vec<Atom>,
    op: fn(f64) -> f64,
) -> Result<Expression, SemanticError> {
    check_arity(name, &args, Arity::Exactly(1))?;
    Ok(Expression::leaf(op(number(name, &args, 0)?)))
}

fn binary_number(
    name: &str,
    args: Vec<Atom>,
    op: fn(f64, f64) -> f64,
) -> Result<Expression, SemanticError> {
    check_arity(name, &args, Arity::Exactly(2))?;
    let values = numbers(name, &args)?;
    Ok(Expression::leaf(op(values[0], values[1])))
}

fn compare(
    name: &str,
    args: Vec<Atom>,
    op: fn(&f64, &f64) -> bool,
) -> Result<Expression, SemanticError> {
    check_arity(name, &args, Arity::Exactly(2))?;
    let values = numbers(name, &args)?;
    Ok(Expression::leaf(op(&values[0], &values[1])))
}

fn fold_numbers(
    name: &str,
    args: Vec<Atom>,
    identity: f64,
    op: fn(f64, f64) -> f64,
) -> Result<Expression, SemanticError> {
    check_arity(name, &args, Arity::AtLeast(2))?;
    let values = numbers(name, &args)?;
    Ok(Expression::leaf(values.into_iter().fold(identity, op)))
}

fn fold_booleans(
    name: &str,
    args: Vec<Atom>,
    identity: bool,
    op: fn(bool, bool) -> bool,
) -> Result<Expression, SemanticError> {
    check_arity(name, &args, Arity::AtLeast(2))?;
    let values = booleans(name, &args)?;
    Ok(Expression::leaf(values.into_iter().fold(identity, op)))
}

fn builtin_not(args: Vec<Atom>) -> Result<Expression, SemanticError> {
    check_arity("not", &args, Arity::Exactly(1))?;
    let values = booleans("not", &args)?;
    Ok(Expression::leaf(!values[0]))
}

fn builtin_and(args: Vec<Atom>) -> Result<Expression, SemanticError> {
    fold_booleans("and", args, true, |left, right| left && right)
}

fn builtin_or(args: Vec<Atom>) -> Result<Expression, SemanticError> {
    fold_booleans("or", args, false, |left, right| left || right)
}

fn builtin_less_than(args: Vec<Atom>) -> Result<Expression, SemanticError> {
    compare("<", args, f64::lt)
}

fn builtin_less_equal(args: Vec<Atom>) -> Result<Expression, SemanticError> {
    compare("<=", args, f64::le)
}

fn builtin_greater_than(args: Vec<Atom>) -> Result<Expression, SemanticError> {
    compare(">", args, f64::gt)
}

fn builtin_greater_equal(args: Vec<Atom>) -> Result<Expression, SemanticError> {
    compare(">=", args, f64::ge)
}

fn builtin_equal(args: Vec<Atom>) -> Result<Expression, SemanticError> {
    compare("=", args, f64::eq)
}

fn builtin_add(args: Vec<Atom>) -> Result<Expression, SemanticError> {
    fold_numbers("+", args, 0.0, |left, right| left + right)
}

fn builtin_multiply(args: Vec<Atom>) -> Result<Expression, SemanticError> {
    fold_numbers("*", args, 1.0, |left, right| left * right)
}

fn builtin_subtract(args: Vec<Atom>) -> Result<Expression, SemanticError> {
    check_arity("-", &args, Arity::OneOf(1, 2))?;
    let values = numbers("-", &args)?;
    match values[..] {
        [value] => Ok(Expression::leaf(-value)),
        [left, right] => Ok(Expression::leaf(left - right)),
        _ => Err(SemanticError::wrong_argument_count(
            "-",
            Arity::OneOf(1, 2),
            values.len(),
        )),
    }
}

// Division by zero follows IEEE-754 and yields an infinity or NaN.
fn builtin_divide(args: Vec<Atom>) -> Result<Expression, SemanticError> {
    binary_number("/", args, |left, right| left / right)
}

fn builtin_log10(args: Vec<Atom>) -> Result<Expression, SemanticError> {
    unary_number("log10", args, f64::log10)
}

fn builtin_pow(args: Vec<Atom>) -> Result<Expression, SemanticError> {
    binary_number("pow", args, f64::powf)
}

fn builtin_sin(args: Vec<Atom>) -> Result<Expression, SemanticError> {
    unary_number("sin", args, f64::sin)
}

fn builtin_cos(args: Vec<Atom>) -> Result<Expression, SemanticError> {
    unary_number("cos", args, f64::cos)
}

fn builtin_arctan(args: Vec<Atom>) -> Result<Expression, SemanticError> {
    binary_number("arctan", args, f64::atan2)
}

fn builtin_point(args: Vec<Atom>) -> Result<Expression, SemanticError> {
    check_arity("point", &args, Arity::Exactly(2))?;
    let values = numbers("point", &args)?;
    Ok(Expression::leaf(Point {
        x: values[0],
        y: values[1],
    }))
}

fn builtin_line(args: Vec<Atom>) -> Result<Expression, SemanticError> {
    check_arity("line", &args, Arity::Exactly(2))?;
    Ok(Expression::leaf(Line {
        first: point("line", &args, 0)?,
        second: point("line", &args, 1)?,
    }))
}

fn builtin_arc(args: Vec<Atom>) -> Result<Expression, SemanticError> {
    check_arity("arc", &args, Arity::Exactly(3))?;
    Ok(Expression::leaf(Arc {
        center: point("arc", &args, 0)?,
        start: point("arc", &args, 1)?,
        span: number("arc", &args, 2)?,
    }))
}

use std::fmt::Display;
use std::rc::Rc;

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Line {
    pub first: Point,
    pub second: Point,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Arc {
    pub center: Point,
    pub start: Point,
    /// Angle swept from `start`, in radians.
    pub span: f64,
}

/// The smallest value of the language.
///
/// Keywords, operator names and procedure names are all carried as
/// [`Atom::Symbol`] and resolved against the environment when evaluated.
#[derive(Debug, Clone)]
pub enum Atom {
    /// No printable value, e.g. the result of `draw`.
    None,
    Boolean(bool),
    Number(f64),
    Symbol(Rc<str>),
    Point(Point),
    Line(Line),
    Arc(Arc),
}

impl Atom {
    pub fn symbol(name: &str) -> Atom {
        Atom::Symbol(name.into())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Atom::None => "None",
            Atom::Boolean(_) => "Boolean",
            Atom::Number(_) => "Number",
            Atom::Symbol(_) => "Symbol",
            Atom::Point(_) => "Point",
            Atom::Line(_) => "Line",
            Atom::Arc(_) => "Arc",
        }
    }

    pub fn is_graphic(&self) -> bool {
        matches!(self, Atom::Point(_) | Atom::Line(_) | Atom::Arc(_))
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Atom::None, Atom::None) => true,
            (Atom::Boolean(left), Atom::Boolean(right)) => left == right,
            (Atom::Number(left), Atom::Number(right)) => (left - right).abs() < f64::EPSILON,
            (Atom::Symbol(left), Atom::Symbol(right)) => left == right,
            (Atom::Point(left), Atom::Point(right)) => left == right,
            (Atom::Line(left), Atom::Line(right)) => left == right,
            (Atom::Arc(left), Atom::Arc(right)) => left == right,
            _ => false,
        }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}{})", self.first, self.second)
    }
}

impl Display for Arc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}{}({}))", self.center, self.start, self.span)
    }
}

impl Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Atom::None => write!(f, "None"),
            Atom::Boolean(true) => write!(f, "True"),
            Atom::Boolean(false) => write!(f, "False"),
            Atom::Number(value) => write!(f, "{}", value),
            Atom::Symbol(name) => write!(f, "{}", name),
            Atom::Point(point) => write!(f, "{}", point),
            Atom::Line(line) => write!(f, "{}", line),
            Atom::Arc(arc) => write!(f, "{}", arc),
        }
    }
}

impl From<bool> for Atom {
    fn from(value: bool) -> Self {
        Atom::Boolean(value)
    }
}

impl From<f64> for Atom {
    fn from(value: f64) -> Self {
        Atom::Number(value)
    }
}

impl From<Point> for Atom {
    fn from(value: Point) -> Self {
        Atom::Point(value)
    }
}

impl From<Line> for Atom {
    fn from(value: Line) -> Self {
        Atom::Line(value)
    }
}

impl From<Arc> for Atom {
    fn from(value: Arc) -> Self {
        Atom::Arc(value)
    }
}

/// A node of the syntax tree: an atom followed by its operands in source order.
#[derive(Debug, PartialEq, Clone)]
pub struct Expression {
    pub head: Atom,
    pub tail: Vec<Expression>,
}

impl Expression {
    pub fn new(head: Atom, tail: Vec<Expression>) -> Self {
        Expression { head, tail }
    }

    pub fn leaf(head: impl Into<Atom>) -> Self {
        Expression {
            head: head.into(),
            tail: Vec::new(),
        }
    }

    pub fn none() -> Self {
        Expression::leaf(Atom::None)
    }

    pub fn is_leaf(&self) -> bool {
        self.tail.is_empty()
    }
}

impl From<Atom> for Expression {
    fn from(value: Atom) -> Self {
        Expression::leaf(value)
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_leaf() {
            return write!(f, "{}", self.head);
        }
        write!(f, "({}", self.head)?;
        for expression in &self.tail {
            write!(f, " {}", expression)?;
        }
        write!(f, ")")
    }
}

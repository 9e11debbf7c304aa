pub mod builtins;
pub mod environment;
pub mod error;
pub mod evaluator;
pub mod interpreter;
pub mod render;

pub use interpreter::Interpreter;

pub mod ast;
pub mod classify;
pub mod lexer;
pub mod parser;

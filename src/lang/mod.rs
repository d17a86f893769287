/*!
# Rust Language Module

This Rust module turns BASIC source text into structured statements.
Statement syntax is described by grammar programs in a static table and
executed by a backtracking interpreter. Expressions are compiled to postfix.

*/

pub type LineNumber = Option<u32>;
pub type Column = std::ops::Range<usize>;

/// Longest accepted source line, in characters.
pub const MAX_LINE_LEN: usize = 80;

#[macro_use]
mod error;
mod expr;
mod grammar;
mod line;
mod parse;
mod scan;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use expr::compile;
pub use line::Line;
pub use parse::{parse_input, Symbols};
pub use scan::Cursor;
pub use token::{Function, Operator, Postfix, Relation, Token};

pub mod ast;

#[cfg(test)]
mod tests;

/*!
## Rust Machine Module

This Rust module links parsed statements into a program and runs it.

*/

pub type Address = usize;

mod array;
mod eval;
mod function;
mod link;
mod operation;
mod options;
mod program;
mod rnd;
mod runtime;
mod stack;
mod var;

pub use array::{Arrays, DEFAULT_ARRAY, DEFAULT_ARRAY_SIZE, MAX_RANK};
pub use eval::{Evaluator, MAX_CALL_DEPTH};
pub use function::{Builtin, Functions, UserFunction};
pub use link::Link;
pub use operation::{Operation, EPSILON};
pub use options::Options;
pub use program::{Names, Program};
pub use rnd::{Rnd, RndMode};
pub use runtime::{format_number, Event, Runtime};
pub use stack::Stack;
pub use var::{Scope, Var};

#[cfg(test)]
mod tests;

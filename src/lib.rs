//! # Classroom BASIC
//!
//! A line-numbered BASIC for learning to program. A program is a text
//! file of numbered lines which the interpreter loads and runs:
//! ```text
//! basic hello.bas
//! basic -TRON -WAIT http://example.com/hello.bas
//! ```
//!
//! Set `BASIC_LOG=debug` to see what the interpreter is doing.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/statements.rs"]
#[allow(non_snake_case)]
pub mod __Statements;

pub mod lang;
pub mod mach;

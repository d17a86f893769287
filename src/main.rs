//! # BASIC
//!
//! Runs one line-numbered BASIC program from a file or URL.
//!

mod term;

fn main() {
    term::main();
}

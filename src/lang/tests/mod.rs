use super::ast::*;
use super::*;

mod parse_test;

fn expr(s: &str) -> Postfix {
    compile(&mut Cursor::new(s), &()).unwrap()
}

fn statements(s: &str) -> Vec<Statement> {
    Line::parse(s, &()).unwrap().unwrap().into_statements()
}

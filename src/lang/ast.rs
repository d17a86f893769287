use super::parse::{Field, Record};
use super::{Error, Postfix, Relation};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Statements
///
/// Command records are converted to these once, when a line is loaded.

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Base(Postfix),
    Change(Vec<FilePart>),
    Clear,
    Cursor(Postfix, Postfix),
    Data(Postfix),
    Def(Rc<str>, Vec<Rc<str>>, Postfix),
    Dim(Rc<str>, Vec<Postfix>),
    Erase(Rc<str>),
    For(Rc<str>, Postfix, Postfix, Postfix),
    Gosub(Postfix),
    Goto(Postfix),
    If(Postfix, Relation, Postfix),
    Input(Option<String>, Vec<Rc<str>>),
    Let(Target, Postfix),
    Next(Option<Rc<str>>),
    On(Postfix, Branch, Vec<Postfix>),
    Print(Vec<PrintItem>),
    Randomize,
    Read(Rc<str>),
    Rem,
    Restore(Option<Postfix>),
    Return,
    Stop,
    Swap(Rc<str>, Rc<str>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    Scalar(Rc<str>),
    Array(Rc<str>, Vec<Postfix>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Branch {
    Goto,
    Gosub,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilePart {
    Text(String),
    Number(Postfix),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrintItem {
    pub item: Item,
    pub separator: Separator,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Tab(Postfix),
    Width(Postfix),
    Text(String),
    Value(Postfix),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Separator {
    Comma,
    Semicolon,
    Newline,
}

struct Fields {
    tag: String,
    iter: std::vec::IntoIter<Field>,
}

impl Fields {
    fn malformed(&self) -> Error {
        error!(InternalError; format!("MALFORMED {} RECORD", self.tag))
    }

    fn next(&mut self) -> Result<Field> {
        match self.iter.next() {
            Some(field) => Ok(field),
            None => Err(self.malformed()),
        }
    }

    fn peek_is_empty(&self) -> bool {
        self.iter.as_slice().is_empty()
    }

    fn expression(&mut self) -> Result<Postfix> {
        match self.next()? {
            Field::Expression(expr) => Ok(expr),
            _ => Err(self.malformed()),
        }
    }

    fn name(&mut self) -> Result<Rc<str>> {
        match self.next()? {
            Field::Name(name) | Field::Text(name) => Ok(name.into()),
            _ => Err(self.malformed()),
        }
    }

    fn text(&mut self) -> Result<String> {
        match self.next()? {
            Field::Text(text) => Ok(text),
            _ => Err(self.malformed()),
        }
    }

    fn finish(self) -> Result<()> {
        if self.peek_is_empty() {
            Ok(())
        } else {
            Err(self.malformed())
        }
    }
}

impl Statement {
    pub fn from_record(record: Record) -> Result<Statement> {
        let mut iter = record.into_iter();
        let tag = match iter.next() {
            Some(Field::Text(tag)) => tag,
            _ => return Err(error!(InternalError; "UNTAGGED RECORD")),
        };
        let mut f = Fields {
            tag: tag.clone(),
            iter,
        };
        let statement = match tag.as_str() {
            "BASE" => match f.next()? {
                Field::Text(digit) => match digit.as_str() {
                    "0" => Statement::Base(Postfix::number(0.0)),
                    "1" => Statement::Base(Postfix::number(1.0)),
                    _ => return Err(f.malformed()),
                },
                Field::Expression(expr) => Statement::Base(expr),
                _ => return Err(f.malformed()),
            },
            "CHANGE" => {
                let mut parts = vec![];
                while !f.peek_is_empty() {
                    let part = match f.next()? {
                        Field::Text(text) => FilePart::Text(text),
                        Field::Expression(expr) => FilePart::Number(expr),
                        _ => return Err(f.malformed()),
                    };
                    f.text()?;
                    parts.push(part);
                }
                Statement::Change(parts)
            }
            "CLEAR" => Statement::Clear,
            "CURSOR" => Statement::Cursor(f.expression()?, f.expression()?),
            "DATA" => Statement::Data(f.expression()?),
            "DEF" => {
                let name = f.name()?;
                let mut params: Vec<Rc<str>> = vec![];
                let mut body = None;
                while !f.peek_is_empty() {
                    match f.next()? {
                        Field::Name(param) => params.push(param.into()),
                        Field::Expression(expr) => body = Some(expr),
                        _ => return Err(f.malformed()),
                    }
                }
                match body {
                    Some(body) => Statement::Def(name, params, body),
                    None => return Err(f.malformed()),
                }
            }
            "DIM" => {
                let name = f.name()?;
                match f.next()? {
                    Field::Index(dims) => Statement::Dim(name, dims),
                    _ => return Err(f.malformed()),
                }
            }
            "ERASE" => Statement::Erase(f.name()?),
            "FOR" => Statement::For(f.name()?, f.expression()?, f.expression()?, f.expression()?),
            "GOSUB" => Statement::Gosub(f.expression()?),
            "GOTO" => Statement::Goto(f.expression()?),
            "IF" => {
                let lhs = f.expression()?;
                let relation = match f.next()? {
                    Field::Relation(relation) => relation,
                    _ => return Err(f.malformed()),
                };
                Statement::If(lhs, relation, f.expression()?)
            }
            "INPUT" => {
                let prompt = match f.next()? {
                    Field::Text(prompt) => Some(prompt),
                    Field::Null => None,
                    _ => return Err(f.malformed()),
                };
                let mut vars = vec![];
                while !f.peek_is_empty() {
                    vars.push(f.name()?);
                }
                Statement::Input(prompt, vars)
            }
            "LET" => {
                let name = f.name()?;
                let target = match f.next()? {
                    Field::Index(index) => Target::Array(name, index),
                    Field::Null => Target::Scalar(name),
                    _ => return Err(f.malformed()),
                };
                f.text()?;
                Statement::Let(target, f.expression()?)
            }
            "NEXT" => match f.next()? {
                Field::Name(name) => Statement::Next(Some(name.into())),
                Field::Null => Statement::Next(None),
                _ => return Err(f.malformed()),
            },
            "ON" => {
                let selector = f.expression()?;
                let branch = match f.text()?.as_str() {
                    "GOTO" => Branch::Goto,
                    "GOSUB" => Branch::Gosub,
                    _ => return Err(f.malformed()),
                };
                let mut targets = vec![];
                while !f.peek_is_empty() {
                    targets.push(f.expression()?);
                }
                Statement::On(selector, branch, targets)
            }
            "PRINT" => {
                let mut items = vec![];
                while !f.peek_is_empty() {
                    let value = f.next()?;
                    let item = match (value, f.text()?.as_str()) {
                        (Field::Expression(expr), "TAB") => Item::Tab(expr),
                        (Field::Expression(expr), "#") => Item::Width(expr),
                        (Field::Text(text), "STRING") => Item::Text(text),
                        (Field::Expression(expr), "EXPRESSION") => Item::Value(expr),
                        _ => return Err(f.malformed()),
                    };
                    let separator = match f.next()? {
                        Field::Text(sep) if sep == "," => Separator::Comma,
                        Field::Text(sep) if sep == ";" => Separator::Semicolon,
                        Field::Null => Separator::Newline,
                        _ => return Err(f.malformed()),
                    };
                    items.push(PrintItem { item, separator });
                }
                Statement::Print(items)
            }
            "RANDOMIZE" => Statement::Randomize,
            "READ" => Statement::Read(f.name()?),
            "REM" => Statement::Rem,
            "RESTORE" => match f.next()? {
                Field::Expression(expr) => Statement::Restore(Some(expr)),
                Field::Null => Statement::Restore(None),
                _ => return Err(f.malformed()),
            },
            "RETURN" => Statement::Return,
            "STOP" => Statement::Stop,
            "SWAP" => Statement::Swap(f.name()?, f.name()?),
            _ => return Err(f.malformed()),
        };
        f.finish()?;
        Ok(statement)
    }

    /// Statements that only matter while a program is being linked.
    pub fn is_declaration(&self) -> bool {
        matches!(
            self,
            Statement::Base(_) | Statement::Data(_) | Statement::Def(..) | Statement::Dim(..)
        )
    }
}

use super::expr::compile;
use super::grammar::{self, Element, ARRAY, INPUT_LINE, LINE, MAX_KEYWORD_LEN};
use super::scan::Cursor;
use super::{Postfix, Relation};

/// Names that change how an expression compiles. Arrays and user
/// functions are only known once an earlier line has declared them.
pub trait Symbols {
    fn is_array(&self, name: &str) -> bool;
    fn is_user_function(&self, name: &str) -> bool;
}

impl Symbols for () {
    fn is_array(&self, name: &str) -> bool {
        name == "@"
    }
    fn is_user_function(&self, _name: &str) -> bool {
        false
    }
}

/// One field of a command record. The first field is the statement tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Text(String),
    Name(String),
    Expression(Postfix),
    Relation(Relation),
    Index(Vec<Postfix>),
    Null,
}

pub type Record = Vec<Field>;

/// Parses everything after a line number into command records.
pub fn parse_records<S: Symbols + ?Sized>(cursor: &mut Cursor, symbols: &S) -> Option<Vec<Record>> {
    Parser { symbols }.run(cursor, "LINE", LINE)
}

/// Parses a comma separated list of expressions typed at an `INPUT`
/// prompt. The whole line must be consumed.
pub fn parse_input<S: Symbols + ?Sized>(text: &str, symbols: &S) -> Option<Vec<Postfix>> {
    let mut cursor = Cursor::new(text);
    let records = Parser { symbols }.run(&mut cursor, "INPUT_LINE", INPUT_LINE)?;
    cursor.skip_whitespace();
    if !cursor.is_at_end() {
        return None;
    }
    records
        .into_iter()
        .map(|record| match record.into_iter().nth(1) {
            Some(Field::Expression(expr)) => Some(expr),
            _ => None,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Flow {
    Next,
    Done,
}

struct Invocation {
    keyword: &'static str,
    program: &'static [Element],
    record: Record,
    results: Vec<Record>,
    flags: Vec<&'static str>,
}

struct Checkpoint {
    pos: usize,
    record: Record,
    results: usize,
    flags: Vec<&'static str>,
}

impl Invocation {
    fn flush(&mut self) {
        if !self.record.is_empty() {
            self.results.push(std::mem::take(&mut self.record));
        }
    }

    fn checkpoint(&self, cursor: &Cursor) -> Checkpoint {
        Checkpoint {
            pos: cursor.pos(),
            record: self.record.clone(),
            results: self.results.len(),
            flags: self.flags.clone(),
        }
    }

    fn restore(&mut self, checkpoint: Checkpoint, cursor: &mut Cursor) {
        cursor.set_pos(checkpoint.pos);
        self.record = checkpoint.record;
        self.results.truncate(checkpoint.results);
        self.flags = checkpoint.flags;
    }
}

struct Parser<'s, S: ?Sized> {
    symbols: &'s S,
}

impl<'s, S: Symbols + ?Sized> Parser<'s, S> {
    fn run(
        &self,
        cursor: &mut Cursor,
        keyword: &'static str,
        program: &'static [Element],
    ) -> Option<Vec<Record>> {
        let start = cursor.pos();
        let mut inv = Invocation {
            keyword,
            program,
            record: vec![Field::Text(keyword.to_string())],
            results: vec![],
            flags: vec![],
        };
        match self.sequence(cursor, &mut inv, program) {
            Some(_) => {
                inv.flush();
                Some(inv.results)
            }
            None => {
                cursor.set_pos(start);
                None
            }
        }
    }

    fn invoke(&self, cursor: &mut Cursor, keyword: &str) -> Option<Vec<Record>> {
        let (keyword, program) = grammar::lookup(keyword)?;
        self.run(cursor, keyword, program)
    }

    fn statement(&self, cursor: &mut Cursor, in_if: bool) -> Option<Vec<Record>> {
        cursor.skip_whitespace();
        let start = cursor.pos();
        for len in (0..=MAX_KEYWORD_LEN).rev() {
            let prefix = cursor.upper_prefix(len);
            if prefix.len() != len {
                continue;
            }
            if let Some((keyword, program)) = grammar::lookup(&prefix) {
                cursor.advance(len);
                if let Some(records) = self.run(cursor, keyword, program) {
                    return Some(records);
                }
                cursor.set_pos(start);
                break;
            }
        }
        if in_if {
            if let Some(records) = self.invoke(cursor, "GOTO") {
                return Some(records);
            }
        }
        cursor.set_pos(start);
        None
    }

    fn sequence(
        &self,
        cursor: &mut Cursor,
        inv: &mut Invocation,
        elements: &'static [Element],
    ) -> Option<Flow> {
        for element in elements {
            if self.element(cursor, inv, element)? == Flow::Done {
                return Some(Flow::Done);
            }
        }
        Some(Flow::Next)
    }

    /// Tries each group in order. `None` means no group matched and
    /// nothing was changed.
    fn alternatives(
        &self,
        cursor: &mut Cursor,
        inv: &mut Invocation,
        groups: &'static [&'static [Element]],
    ) -> Option<Flow> {
        for group in groups {
            let checkpoint = inv.checkpoint(cursor);
            match self.sequence(cursor, inv, group) {
                Some(flow) => return Some(flow),
                None => inv.restore(checkpoint, cursor),
            }
        }
        None
    }

    fn element(&self, cursor: &mut Cursor, inv: &mut Invocation, element: &Element) -> Option<Flow> {
        use Element::*;
        match element {
            Array => {
                let records = self.run(cursor, "ARRAY", ARRAY)?;
                let mut fields = records.into_iter().next()?.into_iter();
                let name = fields.next()?;
                let index = fields
                    .map(|field| match field {
                        Field::Expression(expr) => Some(expr),
                        _ => None,
                    })
                    .collect::<Option<Vec<Postfix>>>()?;
                inv.record.push(name);
                inv.record.push(Field::Index(index));
            }
            Loop(body) => loop {
                let checkpoint = inv.checkpoint(cursor);
                match self.sequence(cursor, inv, *body) {
                    Some(Flow::Done) => return Some(Flow::Done),
                    Some(Flow::Next) if cursor.pos() > checkpoint.pos => {}
                    _ => {
                        inv.restore(checkpoint, cursor);
                        break;
                    }
                }
            },
            Optional(groups) => {
                if self.alternatives(cursor, inv, *groups) == Some(Flow::Done) {
                    return Some(Flow::Done);
                }
            }
            Select(groups) => {
                if self.alternatives(cursor, inv, *groups)? == Flow::Done {
                    return Some(Flow::Done);
                }
            }
            Statement => {
                let mut records = self.statement(cursor, inv.keyword == "IF")?;
                inv.flush();
                inv.results.append(&mut records);
            }
            Recursive => {
                inv.flush();
                let mut records = self.run(cursor, inv.keyword, inv.program)?;
                inv.results.append(&mut records);
                return Some(Flow::Done);
            }
            Rename(keyword) => {
                let mut records = self.invoke(cursor, keyword)?;
                inv.record.clear();
                inv.results.append(&mut records);
            }
            Expression => {
                let expr = compile(cursor, self.symbols)?;
                inv.record.push(Field::Expression(expr));
            }
            Variable => {
                let name = cursor.variable_name()?;
                inv.record.push(Field::Name(name));
            }
            RelationalOperator => {
                let relation = cursor.relation()?;
                inv.record.push(Field::Relation(relation));
            }
            QuotedString => {
                let text = cursor.quoted_string()?;
                inv.record.push(Field::Text(text));
            }
            String => {
                let name = cursor.word()?;
                inv.record.push(Field::Name(name));
            }
            Literal(text) => {
                if !cursor.literal(text) {
                    return None;
                }
                inv.record.push(Field::Text(text.to_string()));
            }
            End => return Some(Flow::Done),
            EndOfLine => {
                cursor.skip_to_end();
                return Some(Flow::Done);
            }
            DelValue => {
                inv.record.pop();
            }
            AddValue(text) => inv.record.push(Field::Text(text.to_string())),
            AddExpression(src) => {
                let expr = compile(&mut Cursor::new(src), self.symbols)?;
                inv.record.push(Field::Expression(expr));
            }
            AddNull => inv.record.push(Field::Null),
            SetFlag(flag) => inv.flags.push(*flag),
            CheckFlag(flag) => {
                if !inv.flags.contains(flag) {
                    return None;
                }
            }
            ResetFlag(flag) => inv.flags.retain(|f| f != flag),
        }
        Some(Flow::Next)
    }
}

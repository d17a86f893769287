use super::ast::Statement;
use super::parse::{parse_records, Symbols};
use super::scan::Cursor;
use super::{Error, MAX_LINE_LEN};

type Result<T> = std::result::Result<T, Error>;

/// ## A numbered source line and the statements parsed from it

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    number: u32,
    source: String,
    statements: Vec<Statement>,
}

impl Line {
    /// Blank lines parse to `None`.
    pub fn parse<S: Symbols + ?Sized>(src: &str, symbols: &S) -> Result<Option<Line>> {
        let src = src.trim_end_matches(|c| c == '\r' || c == '\n');
        if src.trim().is_empty() {
            return Ok(None);
        }
        if src.chars().count() > MAX_LINE_LEN {
            return Err(error!(LineBufferOverflow, ..&(MAX_LINE_LEN..src.len());
                format!("LINES ARE LIMITED TO {} CHARACTERS", MAX_LINE_LEN)));
        }
        if let Some((col, _)) = src
            .char_indices()
            .find(|(_, ch)| *ch != '\t' && !(' '..='~').contains(ch))
        {
            return Err(error!(SyntaxError, ..&(col..col + 1); "ILLEGAL CHARACTER"));
        }
        let mut cursor = Cursor::new(src);
        let number = match cursor.natural() {
            Some(number) if number <= u64::from(u32::max_value()) => number as u32,
            Some(_) => return Err(error!(SyntaxError, ..&(0..cursor.pos()); "INVALID LINE NUMBER")),
            None => return Err(error!(SyntaxError, ..&(0..src.len()); "LINE NUMBER REQUIRED")),
        };
        let body = cursor.pos();
        let records = match parse_records(&mut cursor, symbols) {
            Some(records) => records,
            None => return Err(error!(SyntaxError, Some(number), ..&(body..src.len()))),
        };
        cursor.skip_whitespace();
        if !cursor.is_at_end() {
            return Err(error!(SyntaxError, Some(number), ..&(cursor.pos()..src.len())));
        }
        let mut statements = vec![];
        for record in records {
            match Statement::from_record(record) {
                Ok(statement) => statements.push(statement),
                Err(error) => return Err(error.in_line_number(Some(number))),
            }
        }
        Ok(Some(Line {
            number,
            source: src[body..].trim().to_string(),
            statements,
        }))
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn into_statements(self) -> Vec<Statement> {
        self.statements
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.number, self.source)
    }
}

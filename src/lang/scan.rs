use super::Relation;

/// ## Source cursor
///
/// Primitive scanners shared by the statement parser and the expression
/// compiler. Every scanner either advances past what it recognized or
/// leaves the position where it was.

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    src: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Cursor<'a> {
        Cursor {
            src: src.as_bytes(),
            pos: 0,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn set_pos(&mut self, pos: usize) {
        debug_assert!(pos <= self.src.len());
        self.pos = pos;
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    pub fn skip_to_end(&mut self) {
        self.pos = self.src.len();
    }

    pub fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    pub fn peek_at(&self, pos: usize) -> Option<u8> {
        self.src.get(pos).copied()
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if !is_whitespace(ch) {
                break;
            }
            self.pos += 1;
        }
    }

    /// Digits with at most one decimal point.
    pub fn decimal(&mut self) -> Option<f64> {
        let start = self.pos;
        let mut end = start;
        let mut seen_point = false;
        while let Some(ch) = self.peek_at(end) {
            if ch == b'.' && !seen_point {
                seen_point = true;
            } else if !ch.is_ascii_digit() {
                break;
            }
            end += 1;
        }
        let text = std::str::from_utf8(&self.src[start..end]).ok()?;
        let number = text.parse::<f64>().ok()?;
        self.pos = end;
        Some(number)
    }

    /// Digits only. Used for line numbers.
    pub fn natural(&mut self) -> Option<u64> {
        let mut start = self.pos;
        while let Some(ch) = self.peek_at(start) {
            if !is_whitespace(ch) {
                break;
            }
            start += 1;
        }
        let mut end = start;
        while let Some(ch) = self.peek_at(end) {
            if !ch.is_ascii_digit() {
                break;
            }
            end += 1;
        }
        if end == start {
            return None;
        }
        let text = std::str::from_utf8(&self.src[start..end]).ok()?;
        let number = text.parse::<u64>().ok()?;
        self.pos = end;
        Some(number)
    }

    pub fn quoted_string(&mut self) -> Option<String> {
        let start = self.pos;
        self.skip_whitespace();
        if self.peek() != Some(b'"') {
            self.pos = start;
            return None;
        }
        let mut s = String::new();
        let mut i = self.pos + 1;
        while let Some(ch) = self.peek_at(i) {
            match ch {
                b'"' => {
                    self.pos = i + 1;
                    return Some(s);
                }
                b'\\' if self.peek_at(i + 1) == Some(b'"') => {
                    s.push('"');
                    i += 2;
                    continue;
                }
                b' '..=b'~' => s.push(char::from(ch)),
                _ => break,
            }
            i += 1;
        }
        self.pos = start;
        None
    }

    /// A letter followed by an optional digit, uppercased.
    pub fn variable_name(&mut self) -> Option<String> {
        let start = self.pos;
        self.skip_whitespace();
        match self.peek() {
            Some(ch) if ch.is_ascii_alphabetic() => {
                let mut s = String::new();
                s.push(char::from(ch.to_ascii_uppercase()));
                self.pos += 1;
                if let Some(digit) = self.peek() {
                    if digit.is_ascii_digit() {
                        s.push(char::from(digit));
                        self.pos += 1;
                    }
                }
                Some(s)
            }
            _ => {
                self.pos = start;
                None
            }
        }
    }

    /// A letter followed by letters and digits. A trailing period is part
    /// of the word so abbreviations like `R.` survive.
    pub fn word(&mut self) -> Option<String> {
        let start = self.pos;
        self.skip_whitespace();
        match self.peek() {
            Some(ch) if ch.is_ascii_alphabetic() => {}
            _ => {
                self.pos = start;
                return None;
            }
        }
        let mut s = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() {
                s.push(char::from(ch.to_ascii_uppercase()));
                self.pos += 1;
            } else {
                if ch == b'.' {
                    s.push('.');
                    self.pos += 1;
                }
                break;
            }
        }
        Some(s)
    }

    /// Case-insensitive match of fixed text after optional whitespace.
    pub fn literal(&mut self, text: &str) -> bool {
        let start = self.pos;
        self.skip_whitespace();
        let end = self.pos + text.len();
        if end <= self.src.len() && self.src[self.pos..end].eq_ignore_ascii_case(text.as_bytes()) {
            self.pos = end;
            true
        } else {
            self.pos = start;
            false
        }
    }

    pub fn relation(&mut self) -> Option<Relation> {
        let start = self.pos;
        self.skip_whitespace();
        for &len in &[2usize, 1] {
            let end = self.pos + len;
            if end > self.src.len() {
                continue;
            }
            if let Ok(symbol) = std::str::from_utf8(&self.src[self.pos..end]) {
                if let Some(relation) = Relation::from_symbol(symbol) {
                    self.pos = end;
                    return Some(relation);
                }
            }
        }
        self.pos = start;
        None
    }

    /// Uppercased text starting at the cursor, at most `len` bytes.
    pub fn upper_prefix(&self, len: usize) -> String {
        let end = (self.pos + len).min(self.src.len());
        self.src[self.pos..end]
            .iter()
            .map(|ch| char::from(ch.to_ascii_uppercase()))
            .collect()
    }

    pub fn advance(&mut self, len: usize) {
        self.pos = (self.pos + len).min(self.src.len());
    }
}

pub fn is_whitespace(ch: u8) -> bool {
    ch == b' ' || ch == b'\t'
}

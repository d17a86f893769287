use super::parse::Symbols;
use super::scan::{is_whitespace, Cursor};
use super::{Function, Operator, Postfix, Token};
use std::rc::Rc;

/// ## Expression compiler
///
/// Shunting-yard over the source text, producing postfix tokens.
/// A unary minus is a function marker, not an operator: operators never
/// pop it, so it negates everything up to the end of its group.
/// Scanning stops at the first character that cannot continue the
/// expression; the cursor is left there. On failure the cursor is not moved.

pub fn compile<S: Symbols + ?Sized>(cursor: &mut Cursor, symbols: &S) -> Option<Postfix> {
    let start = cursor.pos();
    let compiled = Compiler::new(symbols).run(cursor);
    if compiled.is_none() {
        cursor.set_pos(start);
    }
    compiled
}

pub fn is_variable_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    match bytes.len() {
        1 => bytes[0].is_ascii_alphabetic(),
        2 => bytes[0].is_ascii_alphabetic() && bytes[1].is_ascii_digit(),
        _ => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Last {
    Top,
    Value,
    LParen,
    RParen,
    Call,
    Negate,
    Operator,
    Comma,
}

#[derive(Debug)]
enum Pending {
    LParen,
    Operator(Operator),
    Negate,
    Callable(Callable),
}

impl Pending {
    fn into_token(self) -> Option<Token> {
        match self {
            Pending::LParen | Pending::Callable(_) => None,
            Pending::Operator(op) => Some(Token::Operator(op)),
            Pending::Negate => Some(Token::Negate),
        }
    }
}

/// A name waiting for its parenthesized arguments.
#[derive(Debug)]
enum Callable {
    Function(Function),
    Array(Rc<str>),
    UserFunction(Rc<str>),
}

impl Callable {
    fn into_token(self, args: usize) -> Option<Token> {
        match self {
            Callable::Function(function) if function.arity() == args => Some(Token::Function(function)),
            Callable::Function(_) => None,
            Callable::Array(name) => Some(Token::Array(name, args)),
            Callable::UserFunction(name) => Some(Token::UserFunction(name, args)),
        }
    }
}

struct Compiler<'s, S: ?Sized> {
    symbols: &'s S,
    output: Vec<Token>,
    stack: Vec<Pending>,
    args: Vec<usize>,
    last: Last,
}

impl<'s, S: Symbols + ?Sized> Compiler<'s, S> {
    fn new(symbols: &'s S) -> Compiler<'s, S> {
        Compiler {
            symbols,
            output: vec![],
            stack: vec![],
            args: vec![],
            last: Last::Top,
        }
    }

    fn follows_value(&self) -> bool {
        self.last == Last::Value || self.last == Last::RParen
    }

    fn run(mut self, cursor: &mut Cursor) -> Option<Postfix> {
        cursor.skip_whitespace();
        if cursor.is_at_end() {
            return None;
        }
        while let Some(ch) = cursor.peek() {
            let ch = ch.to_ascii_uppercase();
            if is_whitespace(ch) {
                cursor.advance(1);
                continue;
            }
            if self.last == Last::Call && ch != b'(' {
                return None;
            }
            if ch.is_ascii_digit() || ch == b'.' {
                if self.follows_value() {
                    break;
                }
                let number = cursor.decimal()?;
                self.output.push(Token::Number(number));
                self.last = Last::Value;
            } else if ch == b'(' {
                if self.follows_value() {
                    break;
                }
                self.args.push(1);
                self.stack.push(Pending::LParen);
                self.last = Last::LParen;
                cursor.advance(1);
            } else if ch == b')' {
                if self.args.is_empty() {
                    break;
                }
                if !self.follows_value() {
                    return None;
                }
                self.close_group()?;
                let args = self.args.pop()?;
                if let Some(Pending::Callable(_)) = self.stack.last() {
                    match self.stack.pop() {
                        Some(Pending::Callable(callable)) => self.output.push(callable.into_token(args)?),
                        _ => return None,
                    }
                } else if args != 1 {
                    return None;
                }
                self.last = Last::RParen;
                cursor.advance(1);
            } else if ch == b'@' {
                if self.follows_value() {
                    break;
                }
                self.stack.push(Pending::Callable(Callable::Array("@".into())));
                self.last = Last::Call;
                cursor.advance(1);
            } else if ch.is_ascii_alphabetic() {
                if self.follows_value() {
                    break;
                }
                let mark = cursor.pos();
                let name = cursor.word()?;
                if let Some(callable) = self.callable(&name) {
                    self.stack.push(Pending::Callable(callable));
                    self.last = Last::Call;
                } else if is_variable_name(&name) {
                    self.output.push(Token::Variable(name.into()));
                    self.last = Last::Value;
                } else {
                    cursor.set_pos(mark);
                    break;
                }
            } else if ch == b',' {
                if self.args.is_empty() || !self.follows_value() {
                    break;
                }
                self.unwind_to_paren()?;
                if let Some(args) = self.args.last_mut() {
                    *args += 1;
                }
                self.last = Last::Comma;
                cursor.advance(1);
            } else if let Some(op) = Operator::from_char(ch) {
                if self.follows_value() {
                    cursor.advance(1);
                    let op = if op == Operator::Multiply && self.second_star(cursor) {
                        Operator::Caret
                    } else {
                        op
                    };
                    self.push_operator(op);
                    self.last = Last::Operator;
                } else if op == Operator::Plus {
                    cursor.advance(1);
                } else if op == Operator::Minus {
                    self.stack.push(Pending::Negate);
                    self.last = Last::Negate;
                    cursor.advance(1);
                } else {
                    break;
                }
            } else {
                break;
            }
        }
        if !self.follows_value() {
            return None;
        }
        while let Some(pending) = self.stack.pop() {
            self.output.push(pending.into_token()?);
        }
        if self.output.is_empty() {
            return None;
        }
        Some(Postfix::new(self.output))
    }

    fn callable(&self, name: &str) -> Option<Callable> {
        if let Some(function) = Function::from_name(name) {
            Some(Callable::Function(function))
        } else if self.symbols.is_user_function(name) {
            Some(Callable::UserFunction(name.into()))
        } else if self.symbols.is_array(name) {
            Some(Callable::Array(name.into()))
        } else {
            None
        }
    }

    fn second_star(&self, cursor: &mut Cursor) -> bool {
        let mark = cursor.pos();
        cursor.skip_whitespace();
        if cursor.peek() == Some(b'*') {
            cursor.advance(1);
            true
        } else {
            cursor.set_pos(mark);
            false
        }
    }

    fn push_operator(&mut self, op: Operator) {
        loop {
            let pop = match self.stack.last() {
                Some(Pending::Operator(top)) => {
                    if op.is_right_associative() {
                        op.precedence() < top.precedence()
                    } else {
                        op.precedence() <= top.precedence()
                    }
                }
                _ => false,
            };
            if !pop {
                break;
            }
            if let Some(token) = self.stack.pop().and_then(Pending::into_token) {
                self.output.push(token);
            }
        }
        self.stack.push(Pending::Operator(op));
    }

    fn close_group(&mut self) -> Option<()> {
        loop {
            match self.stack.pop()? {
                Pending::LParen => return Some(()),
                pending => self.output.push(pending.into_token()?),
            }
        }
    }

    fn unwind_to_paren(&mut self) -> Option<()> {
        loop {
            match self.stack.last()? {
                Pending::LParen => return Some(()),
                _ => {
                    let token = self.stack.pop()?.into_token()?;
                    self.output.push(token);
                }
            }
        }
    }
}

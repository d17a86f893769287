use super::program::Names;
use super::{Address, Arrays, Evaluator, Operation, Options, Program, Rnd, Scope, Stack, Var};
use crate::error;
use crate::lang::ast::{Branch, FilePart, Item, PrintItem, Separator, Statement, Target};
use crate::lang::{parse_input, Error, LineNumber, Postfix};

type Result<T> = std::result::Result<T, Error>;

/// Prompt used when `INPUT` doesn't give one.
pub const DEFAULT_PROMPT: &str = "? ";
/// Column spacing for `,` in `PRINT` when no field width is set.
pub const TAB_STOP: usize = 8;
/// Largest column or row accepted by `TAB`, `#` and `CURSOR`.
pub const MAX_COLUMN: usize = 255;

/// ## Events for the user interface

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Stopped,
    Running,
    Print(String),
    Input(String),
    Cls,
    Cursor(usize, usize),
    Change(String),
    Error(Error),
}

#[derive(Debug, Clone, PartialEq)]
enum State {
    Stopped,
    Running,
    Input(String),
    Change(String),
    Failed(Error),
}

/// ## Interpreter session
///
/// Owns all program state. `load` replaces the program and keeps the
/// variables; `run` resets only the execution state.

pub struct Runtime {
    program: Program,
    vars: Var,
    arrays: Arrays,
    rnd: Rnd,
    trace: bool,
    state: State,
    pc: Address,
    gosub: Stack<Address>,
    data_pos: usize,
    print_col: usize,
    traced: Option<Address>,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(&Options::default())
    }
}

impl Runtime {
    pub fn new(options: &Options) -> Runtime {
        Runtime {
            program: Program::default(),
            vars: Var::new(),
            arrays: Arrays::new(),
            rnd: Rnd::new(options.rnd),
            trace: options.trace,
            state: State::Stopped,
            pc: 0,
            gosub: Stack::new("TOO MANY GOSUBS"),
            data_pos: 0,
            print_col: 0,
            traced: None,
        }
    }

    /// Parses and links a whole source file. A failed load leaves the
    /// previous program in place.
    pub fn load(&mut self, source: &str) -> Result<()> {
        let program = Program::load(source, &self.vars, &mut self.arrays, &mut self.rnd)?;
        self.program = program;
        self.state = State::Stopped;
        Ok(())
    }

    pub fn run(&mut self) -> Result<()> {
        if self.program.is_empty() {
            return Err(error!(EmptyProgram));
        }
        self.pc = 0;
        self.gosub.clear();
        self.data_pos = 0;
        self.rnd.reset();
        self.print_col = 0;
        self.traced = None;
        self.state = State::Running;
        Ok(())
    }

    pub fn seed(&mut self, seed: u64) {
        self.rnd.seed(seed);
    }

    pub fn variable(&self, name: &str) -> f64 {
        self.vars.fetch(&name.to_ascii_uppercase())
    }

    pub fn array(&self, name: &str, index: &[i64]) -> Result<f64> {
        self.arrays.fetch(&name.to_ascii_uppercase(), index)
    }

    /// Stops whatever is running with a `BREAK` error.
    pub fn interrupt(&mut self) {
        match self.state {
            State::Running | State::Input(_) | State::Change(_) => {
                let line_number = self.line_number();
                self.state = State::Failed(error!(Break, line_number));
            }
            State::Stopped | State::Failed(_) => {}
        }
    }

    /// Answers an `Input` event. `None` means input has ended and halts
    /// the program. Returns false when the answer was rejected; the next
    /// `execute` asks again.
    pub fn enter_input(&mut self, line: Option<&str>) -> bool {
        if !matches!(self.state, State::Input(_)) {
            return false;
        }
        self.print_col = 0;
        let text = match line {
            Some(text) => text.trim().to_ascii_uppercase(),
            None => {
                self.state = State::Stopped;
                return true;
            }
        };
        let names = match self.program.statement(self.pc) {
            Some(Statement::Input(_, names)) => names.clone(),
            _ => {
                self.state = State::Failed(error!(InternalError, self.line_number(); "NOT WAITING FOR INPUT"));
                return false;
            }
        };
        let values = match self.answers(&text, names.len()) {
            Some(values) => values,
            None => return false,
        };
        for (name, value) in names.iter().zip(values) {
            self.vars.store(name, value);
        }
        self.pc += 1;
        self.state = State::Running;
        true
    }

    /// Answers a `Change` event with the new source text. Variables,
    /// arrays and the array base carry over to the new program.
    pub fn change(&mut self, source: Result<String>) {
        if !matches!(self.state, State::Change(_)) {
            return;
        }
        let loaded = source
            .and_then(|source| Program::load(&source, &self.vars, &mut self.arrays, &mut self.rnd));
        match loaded {
            Ok(program) => {
                tracing::debug!(statements = program.len(), "changed program");
                self.program = program;
                self.pc = 0;
                self.gosub.clear();
                self.data_pos = 0;
                self.traced = None;
                self.state = State::Running;
            }
            Err(error) => self.state = State::Failed(error),
        }
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        match std::mem::replace(&mut self.state, State::Running) {
            State::Running => {}
            State::Stopped => {
                self.state = State::Stopped;
                return Event::Stopped;
            }
            State::Failed(error) => {
                self.state = State::Stopped;
                return Event::Error(error);
            }
            State::Input(prompt) => {
                self.state = State::Input(prompt.clone());
                return Event::Input(prompt);
            }
            State::Change(name) => {
                self.state = State::Change(name.clone());
                return Event::Change(name);
            }
        }
        for _ in 0..cycles {
            if self.pc >= self.program.len() {
                self.state = State::Stopped;
                return Event::Stopped;
            }
            if self.trace && self.traced.is_none() && self.program.link().starts_line(self.pc) {
                self.traced = Some(self.pc);
                if let Some(number) = self.line_number() {
                    let s = format!("{} ", number);
                    self.print_col += s.len();
                    return Event::Print(s);
                }
            }
            self.traced = None;
            tracing::trace!(pc = self.pc, "execute");
            let program = std::mem::take(&mut self.program);
            let result = self.step(&program);
            self.program = program;
            match result {
                Ok(None) => {}
                Ok(Some(event)) => return event,
                Err(error) => {
                    let error = match error.line_number() {
                        Some(_) => error,
                        None => error.in_line_number(self.line_number()),
                    };
                    self.state = State::Stopped;
                    return Event::Error(error);
                }
            }
        }
        Event::Running
    }

    fn line_number(&self) -> LineNumber {
        self.program.link().line_number_for(self.pc)
    }

    fn eval(&mut self, program: &Program, expr: &Postfix) -> Result<f64> {
        Evaluator::new(&self.arrays, program.functions(), &mut self.rnd).eval(expr, &Scope::Global(&self.vars))
    }

    fn answers(&mut self, text: &str, count: usize) -> Option<Vec<f64>> {
        let exprs = parse_input(text, &Names::new(&self.arrays, self.program.functions()))?;
        if exprs.len() != count {
            return None;
        }
        let vars = &self.vars;
        let mut evaluator = Evaluator::new(&self.arrays, self.program.functions(), &mut self.rnd);
        exprs
            .iter()
            .map(|expr| evaluator.eval(expr, &Scope::Global(vars)).ok())
            .collect()
    }

    /// Screen positions are truncated and must not pass `MAX_COLUMN`.
    fn column(&mut self, program: &Program, expr: &Postfix) -> Result<f64> {
        let n = self.eval(program, expr)?.trunc();
        if n.is_nan() || n > MAX_COLUMN as f64 {
            return Err(error!(IllegalFunctionCall; "COLUMN OUT OF RANGE"));
        }
        Ok(n)
    }

    /// Evaluates a line number and finds its first statement.
    fn target(&mut self, program: &Program, expr: &Postfix) -> Result<Address> {
        let n = self.eval(program, expr)?.trunc();
        let address = if n >= 0.0 && n <= f64::from(u32::max_value()) {
            program.link().address_of(n as u32)
        } else {
            None
        };
        match address {
            Some(address) => Ok(address),
            None => Err(error!(UndefinedLine; format_number(n))),
        }
    }

    fn step(&mut self, program: &Program) -> Result<Option<Event>> {
        let statement = match program.statement(self.pc) {
            Some(statement) => statement,
            None => return Err(error!(InternalError; "PROGRAM COUNTER OUT OF RANGE")),
        };
        let mut next = self.pc + 1;
        let mut event = None;
        match statement {
            Statement::Base(_)
            | Statement::Data(_)
            | Statement::Def(..)
            | Statement::Dim(..)
            | Statement::Rem => {}
            Statement::Change(parts) => {
                let mut name = String::new();
                for part in parts {
                    match part {
                        FilePart::Text(text) => name.push_str(text),
                        FilePart::Number(expr) => name.push_str(&format_number(self.eval(program, expr)?)),
                    }
                }
                self.state = State::Change(name.clone());
                return Ok(Some(Event::Change(name)));
            }
            Statement::Clear => {
                self.print_col = 0;
                event = Some(Event::Cls);
            }
            Statement::Cursor(x, y) => {
                let x = self.column(program, x)?.max(0.0) as usize;
                let y = self.column(program, y)?.max(0.0) as usize;
                self.print_col = x;
                event = Some(Event::Cursor(x, y));
            }
            Statement::For(var, start, limit, step) => {
                let start = self.eval(program, start)?;
                let limit = self.eval(program, limit)?;
                let step = self.eval(program, step)?;
                self.vars.store(var, start);
                if !continues(start, limit, step) {
                    next = match program.link().next_for(self.pc) {
                        Some(next_addr) => next_addr + 1,
                        None => return Err(error!(ForWithoutNext)),
                    };
                }
            }
            Statement::Next(name) => {
                let for_addr = match program.link().for_of_next(self.pc) {
                    Some(for_addr) => for_addr,
                    None => return Err(error!(NextWithoutFor)),
                };
                let (var, limit, step) = match program.statement(for_addr) {
                    Some(Statement::For(var, _, limit, step)) => (var, limit, step),
                    _ => return Err(error!(InternalError; "NEXT IS NOT LINKED TO FOR")),
                };
                if let Some(name) = name {
                    if name != var {
                        return Err(error!(NextWithoutFor; format!("{} IS NOT {}", name, var)));
                    }
                }
                let limit = self.eval(program, limit)?;
                let step = self.eval(program, step)?;
                let value = self.vars.fetch(var) + step;
                self.vars.store(var, value);
                if continues(value, limit, step) {
                    next = for_addr + 1;
                }
            }
            Statement::Gosub(expr) => {
                next = self.target(program, expr)?;
                self.gosub.push(self.pc)?;
            }
            Statement::Goto(expr) => next = self.target(program, expr)?,
            Statement::If(lhs, relation, rhs) => {
                let lhs = self.eval(program, lhs)?;
                let rhs = self.eval(program, rhs)?;
                if !Operation::compare(*relation, lhs, rhs) {
                    next = match program.link().if_false(self.pc) {
                        Some(addr) => addr,
                        None => return Err(error!(InternalError; "IF IS NOT LINKED")),
                    };
                }
            }
            Statement::Input(prompt, _) => {
                let prompt = match prompt {
                    Some(prompt) => prompt.clone(),
                    None => DEFAULT_PROMPT.to_string(),
                };
                self.state = State::Input(prompt.clone());
                return Ok(Some(Event::Input(prompt)));
            }
            Statement::Let(target, expr) => {
                let value = self.eval(program, expr)?;
                match target {
                    Target::Scalar(name) => self.vars.store(name, value),
                    Target::Array(name, index) => {
                        let mut subscripts = vec![];
                        for expr in index {
                            subscripts.push(self.eval(program, expr)? as i64);
                        }
                        self.arrays.store(name, &subscripts, value)?;
                    }
                }
            }
            Statement::On(selector, branch, targets) => {
                let n = self.eval(program, selector)?.trunc();
                if n >= 1.0 && n <= targets.len() as f64 {
                    let addr = self.target(program, &targets[n as usize - 1])?;
                    if *branch == Branch::Gosub {
                        self.gosub.push(self.pc)?;
                    }
                    next = addr;
                }
            }
            Statement::Print(items) => {
                let s = self.print(program, items)?;
                event = Some(Event::Print(s));
            }
            Statement::Randomize => self.rnd.randomize(),
            Statement::Read(name) => {
                let expr = match program.link().data().get(self.data_pos) {
                    Some(expr) => expr,
                    None => return Err(error!(OutOfData)),
                };
                let value = self.eval(program, expr)?;
                self.data_pos += 1;
                self.vars.store(name, value);
            }
            Statement::Restore(None) => self.data_pos = 0,
            Statement::Restore(Some(expr)) => {
                let n = self.eval(program, expr)?.trunc();
                let offset = if n >= 0.0 && n <= f64::from(u32::max_value()) {
                    program.link().data_offset(n as u32)
                } else {
                    None
                };
                match offset {
                    Some(offset) => self.data_pos = offset,
                    None => return Err(error!(UndefinedLine; format!("NO DATA IN {}", format_number(n)))),
                }
            }
            Statement::Return => {
                if self.gosub.is_empty() {
                    return Err(error!(ReturnWithoutGosub));
                }
                next = self.gosub.pop()? + 1;
            }
            Statement::Stop => {
                self.pc = next;
                self.state = State::Stopped;
                return Ok(Some(Event::Stopped));
            }
            Statement::Swap(lhs, rhs) => {
                if self.arrays.contains(lhs) || self.arrays.contains(rhs) {
                    return Err(error!(TypeMismatch; "SWAP NEEDS VARIABLES"));
                }
                self.vars.swap(lhs, rhs);
            }
            Statement::Erase(name) => self.arrays.erase(name)?,
        }
        self.pc = next;
        Ok(event)
    }

    fn print(&mut self, program: &Program, items: &[PrintItem]) -> Result<String> {
        let mut s = String::new();
        if items.is_empty() {
            s.push('\n');
        }
        let mut width: Option<usize> = None;
        let mut col = self.print_col;
        for item in items {
            match &item.item {
                Item::Tab(expr) => {
                    let tab = self.column(program, expr)?;
                    if tab > col as f64 {
                        let pad = tab as usize - col;
                        push_str(&mut s, &mut col, &" ".repeat(pad));
                    }
                }
                Item::Width(expr) => {
                    let w = self.column(program, expr)?;
                    width = if w < 1.0 { None } else { Some(w as usize) };
                }
                Item::Text(text) => push_str(&mut s, &mut col, text),
                Item::Value(expr) => {
                    let n = format_number(self.eval(program, expr)?);
                    match width {
                        Some(w) => push_str(&mut s, &mut col, &format!("{:>width$}", n, width = w)),
                        None => push_str(&mut s, &mut col, &n),
                    }
                }
            }
            match item.separator {
                Separator::Comma => {
                    let pad = match width {
                        Some(w) if col % w == 0 => 0,
                        Some(w) => w - col % w,
                        None => TAB_STOP - col % TAB_STOP,
                    };
                    push_str(&mut s, &mut col, &" ".repeat(pad));
                }
                Separator::Semicolon => {}
                Separator::Newline => push_str(&mut s, &mut col, "\n"),
            }
        }
        self.print_col = col;
        Ok(s)
    }
}

/// A zero step never finishes on its own.
fn continues(value: f64, limit: f64, step: f64) -> bool {
    !(step > 0.0 && value > limit || step < 0.0 && value < limit)
}

fn push_str(s: &mut String, col: &mut usize, text: &str) {
    s.push_str(text);
    match text.rfind('\n') {
        Some(pos) => *col = text.len() - pos - 1,
        None => *col += text.len(),
    }
}

/// Formats a number the way `PRINT` shows it: at most 15 significant
/// digits and no trailing zeros.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NAN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "INF" } else { "-INF" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let rounded = format!("{:.14e}", n).parse::<f64>().unwrap_or(n);
    format!("{}", rounded)
}

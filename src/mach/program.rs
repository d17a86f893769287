use super::array::{DEFAULT_ARRAY, MAX_RANK};
use super::{Address, Arrays, Evaluator, Functions, Link, Rnd, Scope, Var};
use crate::error;
use crate::lang::ast::Statement;
use crate::lang::{Error, Line, Postfix, Symbols};

type Result<T> = std::result::Result<T, Error>;

/// Declared arrays and user functions, as seen by the parser.
pub struct Names<'a> {
    arrays: &'a Arrays,
    functions: &'a Functions,
}

impl<'a> Names<'a> {
    pub fn new(arrays: &'a Arrays, functions: &'a Functions) -> Names<'a> {
        Names { arrays, functions }
    }
}

impl<'a> Symbols for Names<'a> {
    fn is_array(&self, name: &str) -> bool {
        self.arrays.contains(name)
    }
    fn is_user_function(&self, name: &str) -> bool {
        self.functions.contains(name)
    }
}

/// ## A loaded program
///
/// Statements in source order plus the link tables and user functions
/// built while loading. Declarations (`BASE`, `DIM`, `DEF`) take effect
/// as their line is loaded so later lines compile against them.

#[derive(Debug, Default, Clone)]
pub struct Program {
    statements: Vec<Statement>,
    link: Link,
    functions: Functions,
}

#[derive(Default)]
struct Declared {
    dim: bool,
    default_redefined: bool,
}

impl Program {
    /// Arrays declared by a program that fails to load are rolled back.
    pub fn load(source: &str, vars: &Var, arrays: &mut Arrays, rnd: &mut Rnd) -> Result<Program> {
        let saved = arrays.clone();
        let mut program = Program::default();
        match program.build(source, vars, arrays, rnd) {
            Ok(()) => {
                tracing::debug!(
                    lines = program.link.line_count(),
                    statements = program.statements.len(),
                    data = program.link.data().len(),
                    "program loaded"
                );
                Ok(program)
            }
            Err(error) => {
                *arrays = saved;
                Err(error)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn statement(&self, addr: Address) -> Option<&Statement> {
        self.statements.get(addr)
    }

    pub fn link(&self) -> &Link {
        &self.link
    }

    pub fn functions(&self) -> &Functions {
        &self.functions
    }

    fn build(&mut self, source: &str, vars: &Var, arrays: &mut Arrays, rnd: &mut Rnd) -> Result<()> {
        let mut declared = Declared::default();
        for text in source.lines() {
            let line = match Line::parse(text, &Names::new(arrays, &self.functions))? {
                Some(line) => line,
                None => continue,
            };
            let number = line.number();
            let first = self.statements.len();
            self.link.begin_line(number, first)?;
            for (offset, statement) in line.into_statements().into_iter().enumerate() {
                let addr = first + offset;
                self.declare(addr, &statement, &mut declared, vars, arrays, rnd)
                    .map_err(|error| match error.line_number() {
                        Some(_) => error,
                        None => error.in_line_number(Some(number)),
                    })?;
                self.statements.push(statement);
            }
            self.link.end_line(self.statements.len());
        }
        if self.statements.is_empty() {
            return Err(error!(EmptyProgram));
        }
        self.link.finish()
    }

    fn declare(
        &mut self,
        addr: Address,
        statement: &Statement,
        declared: &mut Declared,
        vars: &Var,
        arrays: &mut Arrays,
        rnd: &mut Rnd,
    ) -> Result<()> {
        match statement {
            Statement::Base(expr) => {
                if declared.dim {
                    return Err(error!(SyntaxError; "BASE MUST COME BEFORE DIM"));
                }
                let base = Evaluator::new(arrays, &self.functions, rnd).eval(expr, &Scope::Global(vars))?;
                if base != 0.0 && base != 1.0 {
                    return Err(error!(IllegalFunctionCall; "BASE MUST BE 0 OR 1"));
                }
                arrays.set_base(base as i64);
            }
            Statement::Dim(name, dims) => {
                declared.dim = true;
                if dims.len() > MAX_RANK {
                    return Err(error!(SubscriptOutOfRange; "ARRAYS HAVE 1 TO 3 DIMENSIONS"));
                }
                let sizes = self.sizes(dims, vars, arrays, rnd)?;
                if &**name == DEFAULT_ARRAY && arrays.contains(name) && !declared.default_redefined {
                    arrays.remove(name);
                    declared.default_redefined = true;
                }
                arrays.dimension(name, sizes)?;
            }
            Statement::Def(name, params, body) => self.functions.define(name, params, body)?,
            Statement::Data(expr) => self.link.link_data(expr),
            Statement::For(..) => self.link.link_for(addr),
            Statement::Next(_) => self.link.link_next(addr)?,
            Statement::If(..) => self.link.link_if(addr),
            _ => {}
        }
        Ok(())
    }

    fn sizes(&self, dims: &[Postfix], vars: &Var, arrays: &Arrays, rnd: &mut Rnd) -> Result<Vec<usize>> {
        let mut evaluator = Evaluator::new(arrays, &self.functions, rnd);
        let mut sizes = vec![];
        for dim in dims {
            let size = evaluator.eval(dim, &Scope::Global(vars))?.trunc();
            if !(size >= 1.0) {
                return Err(error!(IllegalFunctionCall; "ARRAY SIZE MUST BE POSITIVE"));
            }
            sizes.push(size as usize);
        }
        Ok(sizes)
    }
}

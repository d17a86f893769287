use super::function::Builtin;
use super::{Arrays, Functions, Operation, Rnd, Scope, Stack};
use crate::error;
use crate::lang::{Error, Postfix, Token};

type Result<T> = std::result::Result<T, Error>;

/// User functions may call each other this deep. A body can only name
/// functions defined before it, so only a chain of more definitions
/// than this can reach the limit; it stops such a chain with
/// `OUT OF MEMORY` before the native stack runs out.
pub const MAX_CALL_DEPTH: usize = 256;

/// ## Postfix evaluator
///
/// A stack machine over compiled expressions. Variables are read through
/// a `Scope` so user function parameters never leak into the caller.

pub struct Evaluator<'a> {
    arrays: &'a Arrays,
    functions: &'a Functions,
    rnd: &'a mut Rnd,
}

impl<'a> Evaluator<'a> {
    pub fn new(arrays: &'a Arrays, functions: &'a Functions, rnd: &'a mut Rnd) -> Evaluator<'a> {
        Evaluator {
            arrays,
            functions,
            rnd,
        }
    }

    pub fn eval(&mut self, expr: &Postfix, scope: &Scope) -> Result<f64> {
        if let [Token::Variable(name)] = expr.tokens() {
            return Ok(scope.fetch(name));
        }
        let mut stack: Stack<f64> = Stack::new("EXPRESSION TOO COMPLEX");
        for token in expr.tokens() {
            match token {
                Token::Number(n) => stack.push(*n)?,
                Token::Variable(name) => stack.push(scope.fetch(name))?,
                Token::Operator(op) => {
                    let (lhs, rhs) = stack.pop_2()?;
                    stack.push(Operation::binary(*op, lhs, rhs))?;
                }
                Token::Negate => {
                    let n = stack.pop()?;
                    stack.push(Operation::negate(n))?;
                }
                Token::Function(function) => {
                    let value = Builtin::call(*function, &mut stack, self.rnd)?;
                    stack.push(value)?;
                }
                Token::Array(name, count) => {
                    let index: Vec<i64> = stack.pop_n(*count)?.into_iter().map(|n| n as i64).collect();
                    stack.push(self.arrays.fetch(name, &index)?)?;
                }
                Token::UserFunction(name, count) => {
                    let args = stack.pop_n(*count)?;
                    let value = self.call(name, args, scope)?;
                    stack.push(value)?;
                }
            }
        }
        let value = stack.pop()?;
        if !stack.is_empty() {
            return Err(error!(IllegalFunctionCall; "WRONG NUMBER OF ARGUMENTS"));
        }
        Ok(value)
    }

    fn call(&mut self, name: &str, args: Vec<f64>, scope: &Scope) -> Result<f64> {
        let functions = self.functions;
        let function = match functions.get(name) {
            Some(function) => function,
            None => return Err(error!(UndefinedUserFunction; name.to_string())),
        };
        if function.params().len() != args.len() {
            return Err(error!(IllegalFunctionCall; format!("WRONG NUMBER OF ARGUMENTS TO {}", name)));
        }
        if scope.depth() >= MAX_CALL_DEPTH {
            return Err(error!(OutOfMemory; "FUNCTION CALLS TOO DEEP"));
        }
        let bindings = function.params().iter().cloned().zip(args).collect();
        let local = Scope::Local(scope, bindings);
        self.eval(function.body(), &local)
    }
}

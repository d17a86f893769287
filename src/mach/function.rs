use super::{Rnd, Stack};
use crate::error;
use crate::lang::{Error, Function, Postfix};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Builtin functions

pub struct Builtin {}

impl Builtin {
    /// Pops the arguments for `function` and computes its value.
    pub fn call(function: Function, stack: &mut Stack<f64>, rnd: &mut Rnd) -> Result<f64> {
        use Function::*;
        if function.arity() == 2 {
            let first = stack.pop()?;
            let second = stack.pop()?;
            return Ok(match function {
                Max => second.max(first),
                Min => second.min(first),
                Mod => second % first,
                _ => return Err(error!(InternalError; format!("{} IS NOT BINARY", function))),
            });
        }
        let n = stack.pop()?;
        Ok(match function {
            Abs => n.abs(),
            Acos => n.acos(),
            Asin => n.asin(),
            Atn => n.atan(),
            Cos => n.cos(),
            Exp => n.exp(),
            Int => n.round(),
            Log => n.ln(),
            Log10 => n.log10(),
            Log2 => n.log2(),
            Rnd => rnd.next(n),
            Sgn => Builtin::sgn(n),
            Sin => n.sin(),
            Sqr => n.sqrt(),
            Tan => n.tan(),
            Max | Min | Mod => return Err(error!(InternalError; format!("{} IS BINARY", function))),
        })
    }

    fn sgn(n: f64) -> f64 {
        if n > 0.0 {
            1.0
        } else if n < 0.0 {
            -1.0
        } else {
            0.0
        }
    }
}

/// ## User functions
///
/// `DEF NAME(P1, P2, ...) = expression`. Definitions are kept in the
/// order they were made.

#[derive(Debug, Clone, PartialEq)]
pub struct UserFunction {
    name: Rc<str>,
    params: Vec<Rc<str>>,
    body: Postfix,
}

impl UserFunction {
    pub fn params(&self) -> &[Rc<str>] {
        &self.params
    }

    pub fn body(&self) -> &Postfix {
        &self.body
    }
}

#[derive(Debug, Default, Clone)]
pub struct Functions {
    list: Vec<UserFunction>,
}

impl Functions {
    pub fn new() -> Functions {
        Functions::default()
    }

    pub fn define(&mut self, name: &Rc<str>, params: &[Rc<str>], body: &Postfix) -> Result<()> {
        if Function::from_name(name).is_some() {
            return Err(error!(SyntaxError; "RESERVED FOR BUILT-IN"));
        }
        if self.contains(name) {
            return Err(error!(SyntaxError; format!("FUNCTION {} ALREADY DEFINED", name)));
        }
        self.list.push(UserFunction {
            name: name.clone(),
            params: params.to_vec(),
            body: body.clone(),
        });
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&UserFunction> {
        self.list.iter().find(|f| &*f.name == name)
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(function: Function, args: &[f64]) -> f64 {
        let mut stack = Stack::new("TEST");
        for arg in args {
            stack.push(*arg).unwrap();
        }
        Builtin::call(function, &mut stack, &mut Rnd::default()).unwrap()
    }

    #[test]
    fn test_mod_uses_second_popped_as_dividend() {
        assert_eq!(call(Function::Mod, &[7.0, 3.0]), 1.0);
        assert_eq!(call(Function::Mod, &[-7.0, 3.0]), -1.0);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(call(Function::Max, &[2.0, 9.0]), 9.0);
        assert_eq!(call(Function::Min, &[2.0, 9.0]), 2.0);
    }

    #[test]
    fn test_int_rounds() {
        assert_eq!(call(Function::Int, &[2.5]), 3.0);
        assert_eq!(call(Function::Int, &[2.4]), 2.0);
        assert_eq!(call(Function::Int, &[-2.6]), -3.0);
    }

    #[test]
    fn test_define_rejects_builtin_and_duplicate() {
        let mut f = Functions::new();
        let body = Postfix::number(1.0);
        assert!(f.define(&"SIN".into(), &[], &body).is_err());
        assert!(f.define(&"R.".into(), &[], &body).is_err());
        f.define(&"SQ".into(), &["X".into()], &body).unwrap();
        assert!(f.define(&"SQ".into(), &[], &body).is_err());
        assert_eq!(f.len(), 1);
    }
}

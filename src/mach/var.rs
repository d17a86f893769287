use std::collections::HashMap;
use std::rc::Rc;

/// ## Variable memory
///
/// Unassigned variables read as zero. Zero values are not stored.

#[derive(Debug, Default, Clone)]
pub struct Var {
    vars: HashMap<Rc<str>, f64>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn fetch(&self, var_name: &str) -> f64 {
        self.vars.get(var_name).copied().unwrap_or(0.0)
    }

    pub fn store(&mut self, var_name: &Rc<str>, value: f64) {
        if value == 0.0 {
            self.vars.remove(var_name);
        } else {
            match self.vars.get_mut(var_name) {
                Some(var) => *var = value,
                None => {
                    self.vars.insert(var_name.clone(), value);
                }
            };
        }
    }

    pub fn swap(&mut self, lhs: &Rc<str>, rhs: &Rc<str>) {
        let l = self.fetch(lhs);
        let r = self.fetch(rhs);
        self.store(lhs, r);
        self.store(rhs, l);
    }
}

/// ## Evaluation scope
///
/// User function calls evaluate against their own bindings layered
/// over the caller's scope. The outer scope is never written.

#[derive(Debug)]
pub enum Scope<'a> {
    Global(&'a Var),
    Local(&'a Scope<'a>, Vec<(Rc<str>, f64)>),
}

impl<'a> Scope<'a> {
    pub fn fetch(&self, var_name: &str) -> f64 {
        match self {
            Scope::Global(var) => var.fetch(var_name),
            Scope::Local(outer, bindings) => bindings
                .iter()
                .rev()
                .find(|(name, _)| &**name == var_name)
                .map(|(_, value)| *value)
                .unwrap_or_else(|| outer.fetch(var_name)),
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            Scope::Global(_) => 0,
            Scope::Local(outer, _) => outer.depth() + 1,
        }
    }
}

use crate::lang::{Operator, Relation};

/// Values closer than this compare equal.
pub const EPSILON: f64 = 0.00001;

pub struct Operation {}

impl Operation {
    pub fn binary(op: Operator, lhs: f64, rhs: f64) -> f64 {
        use Operator::*;
        match op {
            Caret => lhs.powf(rhs),
            Multiply => lhs * rhs,
            Divide => lhs / rhs,
            Plus => lhs + rhs,
            Minus => lhs - rhs,
        }
    }

    pub fn negate(n: f64) -> f64 {
        -n
    }

    pub fn equal(lhs: f64, rhs: f64) -> bool {
        (lhs - rhs).abs() < EPSILON
    }

    pub fn compare(relation: Relation, lhs: f64, rhs: f64) -> bool {
        use Relation::*;
        match relation {
            Equal => Operation::equal(lhs, rhs),
            NotEqual => !Operation::equal(lhs, rhs),
            Less => lhs < rhs,
            LessEqual => Operation::equal(lhs, rhs) || lhs < rhs,
            Greater => lhs > rhs,
            GreaterEqual => Operation::equal(lhs, rhs) || lhs > rhs,
        }
    }
}

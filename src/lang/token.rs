use std::rc::Rc;

/// ## Postfix expression tokens
///
/// The expression compiler emits these in reverse-Polish order.
/// Arrays and user functions are classified when compiled, so the
/// evaluator never has to guess what a name is.

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Number(f64),
    Variable(Rc<str>),
    Operator(Operator),
    Negate,
    Function(Function),
    /// Array name and subscript count.
    Array(Rc<str>, usize),
    /// Function name and argument count.
    UserFunction(Rc<str>, usize),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Number(n) => write!(f, "{}", n),
            Variable(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Negate => write!(f, "NEG"),
            Function(s) => write!(f, "{}", s),
            Array(s, _) => write!(f, "{}()", s),
            UserFunction(s, _) => write!(f, "FN {}", s),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct Postfix(Vec<Token>);

impl Postfix {
    pub fn new(tokens: Vec<Token>) -> Postfix {
        Postfix(tokens)
    }

    pub fn number(n: f64) -> Postfix {
        Postfix(vec![Token::Number(n)])
    }

    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Postfix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let words: Vec<String> = self.0.iter().map(|t| t.to_string()).collect();
        write!(f, "{}", words.join(" "))
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Caret,
    Multiply,
    Divide,
    Plus,
    Minus,
}

impl Operator {
    pub fn from_char(ch: u8) -> Option<Operator> {
        use Operator::*;
        match ch {
            b'^' => Some(Caret),
            b'*' => Some(Multiply),
            b'/' => Some(Divide),
            b'+' => Some(Plus),
            b'-' => Some(Minus),
            _ => None,
        }
    }

    pub fn precedence(self) -> usize {
        use Operator::*;
        match self {
            Caret => 4,
            Multiply | Divide => 3,
            Plus | Minus => 2,
        }
    }

    pub fn is_right_associative(self) -> bool {
        self == Operator::Caret
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Caret => write!(f, "^"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Relation {
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl Relation {
    /// Accepts the canonical symbols and their aliases.
    pub fn from_symbol(s: &str) -> Option<Relation> {
        use Relation::*;
        match s {
            "=" => Some(Equal),
            "<>" | "><" | "#" => Some(NotEqual),
            "<" => Some(Less),
            "<=" | "=<" => Some(LessEqual),
            ">" => Some(Greater),
            ">=" | "=>" => Some(GreaterEqual),
            _ => None,
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Relation::*;
        match self {
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Function {
    Abs,
    Acos,
    Asin,
    Atn,
    Cos,
    Exp,
    Int,
    Log,
    Log10,
    Log2,
    Max,
    Min,
    Mod,
    Rnd,
    Sgn,
    Sin,
    Sqr,
    Tan,
}

impl Function {
    pub fn from_name(name: &str) -> Option<Function> {
        use Function::*;
        match name {
            "ABS" => Some(Abs),
            "ACOS" => Some(Acos),
            "ASIN" => Some(Asin),
            "ATN" => Some(Atn),
            "COS" => Some(Cos),
            "EXP" => Some(Exp),
            "INT" | "I." => Some(Int),
            "LOG" => Some(Log),
            "LOG10" => Some(Log10),
            "LOG2" => Some(Log2),
            "MAX" => Some(Max),
            "MIN" => Some(Min),
            "MOD" => Some(Mod),
            "RND" | "R." => Some(Rnd),
            "SGN" => Some(Sgn),
            "SIN" => Some(Sin),
            "SQR" => Some(Sqr),
            "TAN" => Some(Tan),
            _ => None,
        }
    }

    pub fn arity(self) -> usize {
        use Function::*;
        match self {
            Max | Min | Mod => 2,
            _ => 1,
        }
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Function::*;
        let name = match self {
            Abs => "ABS",
            Acos => "ACOS",
            Asin => "ASIN",
            Atn => "ATN",
            Cos => "COS",
            Exp => "EXP",
            Int => "INT",
            Log => "LOG",
            Log10 => "LOG10",
            Log2 => "LOG2",
            Max => "MAX",
            Min => "MIN",
            Mod => "MOD",
            Rnd => "RND",
            Sgn => "SGN",
            Sin => "SIN",
            Sqr => "SQR",
            Tan => "TAN",
        };
        write!(f, "{}", name)
    }
}

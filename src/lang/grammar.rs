/// ## Grammar programs
///
/// Each statement keyword maps to a program of elements run by the
/// interpreter in `parse.rs`. Matching elements consume source text and
/// append fields to the record under construction. Editing elements change
/// the record without consuming input. The structural elements nest: a
/// group is a slice of elements and `Optional`/`Select` take a list of
/// groups to try in order.

#[derive(Debug)]
pub enum Element {
    /// `@` or a name, then a parenthesized list of subscripts.
    Array,
    /// Repeat the body until it fails.
    Loop(&'static [Element]),
    /// First matching group, or nothing.
    Optional(&'static [&'static [Element]]),
    /// First matching group. Fails when none matches.
    Select(&'static [&'static [Element]]),
    /// A nested statement. Inside `IF` an unknown statement is retried as `GOTO`.
    Statement,
    /// Flush the record and run this keyword's program again.
    Recursive,
    /// Discard the record and run another keyword's program.
    Rename(&'static str),
    Expression,
    Variable,
    RelationalOperator,
    QuotedString,
    String,
    Literal(&'static str),
    End,
    EndOfLine,
    DelValue,
    AddValue(&'static str),
    AddExpression(&'static str),
    AddNull,
    SetFlag(&'static str),
    CheckFlag(&'static str),
    ResetFlag(&'static str),
}

use self::Element::*;

/// Longest keyword in the table.
pub const MAX_KEYWORD_LEN: usize = 9;

/// Everything after the line number.
pub const LINE: &[Element] = &[
    DelValue,
    Statement,
    Loop(&[Literal(":"), DelValue, Recursive]),
    End,
];

pub const ARRAY: &[Element] = &[
    DelValue,
    Select(&[&[Literal("@")], &[Variable]]),
    Literal("("),
    DelValue,
    Expression,
    Loop(&[Literal(","), DelValue, Expression]),
    Literal(")"),
    DelValue,
    End,
];

/// Answers typed at an `INPUT` prompt.
pub const INPUT_LINE: &[Element] = &[
    Expression,
    Loop(&[Literal(","), DelValue, Recursive]),
    End,
];

const CHANGE_PART: &[&[Element]] = &[
    &[QuotedString, AddValue("STRING")],
    &[Expression, AddValue("EXPRESSION")],
];

const CHANGE: &[Element] = &[
    Select(CHANGE_PART),
    Loop(&[Literal(","), DelValue, Select(CHANGE_PART)]),
    End,
];

const CURSOR: &[Element] = &[Expression, Literal(","), DelValue, Expression, End];

const DATA: &[Element] = &[
    Expression,
    Loop(&[Literal(","), DelValue, Recursive]),
    End,
];

const ERASE: &[Element] = &[
    Select(&[&[Literal("@")], &[Variable]]),
    Loop(&[Literal(","), DelValue, Recursive]),
    End,
];

const SWAP: &[Element] = &[Variable, Literal(","), DelValue, Variable, End];

const DEF: &[Element] = &[
    String,
    Literal("("),
    DelValue,
    Variable,
    Loop(&[Literal(","), DelValue, Variable]),
    Literal(")"),
    DelValue,
    Literal("="),
    DelValue,
    Expression,
    End,
];

const DIM: &[Element] = &[Array, Loop(&[Literal(","), DelValue, Recursive]), End];

const FOR: &[Element] = &[
    Variable,
    Literal("="),
    DelValue,
    Expression,
    Literal("TO"),
    DelValue,
    Expression,
    Optional(&[&[Literal("STEP"), DelValue, Expression], &[AddExpression("1")]]),
    End,
];

const NEXT: &[Element] = &[Optional(&[&[Variable], &[AddNull]]), End];

const JUMP: &[Element] = &[Expression, End];

const BARE: &[Element] = &[End];

const IF: &[Element] = &[
    Expression,
    RelationalOperator,
    Expression,
    Optional(&[&[Literal("THEN"), DelValue], &[Literal("T."), DelValue]]),
    Select(&[&[Statement], &[Rename("GOTO")]]),
    End,
];

const INPUT: &[Element] = &[
    Optional(&[&[QuotedString, Literal(","), DelValue], &[AddNull]]),
    Variable,
    Loop(&[Literal(","), DelValue, Variable]),
    End,
];

const ON: &[Element] = &[
    Expression,
    Select(&[
        &[Literal("GOS."), DelValue, SetFlag("GOS.")],
        &[Literal("G."), DelValue, SetFlag("G.")],
        &[Literal("GO"), DelValue],
    ]),
    Select(&[
        &[CheckFlag("G."), AddValue("GOTO"), ResetFlag("G.")],
        &[CheckFlag("GOS."), AddValue("GOSUB"), ResetFlag("GOS.")],
        &[Literal("TO"), DelValue, AddValue("GOTO")],
        &[Literal("SUB"), DelValue, AddValue("GOSUB")],
    ]),
    Expression,
    Loop(&[Literal(","), DelValue, Expression]),
    End,
];

const READ: &[Element] = &[Variable, Loop(&[Literal(","), DelValue, Recursive]), End];

const REM: &[Element] = &[EndOfLine];

const RESTORE: &[Element] = &[Optional(&[&[Expression], &[AddNull]]), End];

const PRINT: &[Element] = &[
    Loop(&[
        Select(&[
            &[
                Literal("TAB"),
                DelValue,
                Literal("("),
                DelValue,
                Expression,
                Literal(")"),
                DelValue,
                AddValue("TAB"),
            ],
            &[Literal("#"), DelValue, Expression, AddValue("#")],
            &[QuotedString, AddValue("STRING")],
            &[Expression, AddValue("EXPRESSION")],
        ]),
        Select(&[&[Literal(",")], &[Literal(";")], &[AddNull, End]]),
    ]),
    End,
];

const LET: &[Element] = &[
    Select(&[
        &[Array, AddValue("ARRAY")],
        &[Variable, AddNull, AddValue("VARIABLE")],
    ]),
    Literal("="),
    DelValue,
    Expression,
    Loop(&[Literal(","), DelValue, Recursive]),
    End,
];

const BASE: &[Element] = &[Select(&[&[Literal("0")], &[Literal("1")]]), End];

const OPTION: &[Element] = &[DelValue, Literal("BASE"), Expression, End];

const GO: &[Element] = &[
    Select(&[
        &[Literal("TO"), DelValue, Rename("GOTO")],
        &[Literal("SUB"), DelValue, Rename("GOSUB")],
    ]),
    End,
];

static STATEMENTS: &[(&str, &[Element])] = &[
    ("BASE", BASE),
    ("CHANGE", CHANGE),
    ("CLEAR", BARE),
    ("CLS", &[Rename("CLEAR")]),
    ("CURSOR", CURSOR),
    ("LC", &[Rename("CURSOR")]),
    ("LOCATE", &[Rename("CURSOR")]),
    ("DATA", DATA),
    ("DEF", DEF),
    ("DIM", DIM),
    ("END", &[Rename("STOP")]),
    ("ERASE", ERASE),
    ("F.", &[Rename("FOR")]),
    ("FOR", FOR),
    ("G.", &[Rename("GOTO")]),
    ("GO", GO),
    ("GOS.", &[Rename("GOSUB")]),
    ("GOSUB", JUMP),
    ("GOTO", JUMP),
    ("IF", IF),
    ("IN.", &[Rename("INPUT")]),
    ("INPUT", INPUT),
    ("LET", LET),
    ("N.", &[Rename("NEXT")]),
    ("NEXT", NEXT),
    ("ON", ON),
    ("OPTION", OPTION),
    ("?", &[Rename("PRINT")]),
    ("P.", &[Rename("PRINT")]),
    ("PRINT", PRINT),
    ("WRITE", &[Rename("PRINT")]),
    ("R.", &[Rename("RETURN")]),
    ("RANDOMIZE", BARE),
    ("READ", READ),
    ("REM", REM),
    ("'", &[Rename("REM")]),
    ("RESTORE", RESTORE),
    ("RETURN", BARE),
    ("S.", &[Rename("STOP")]),
    ("STOP", BARE),
    ("SWAP", SWAP),
    ("", &[Rename("LET")]),
];

pub fn lookup(keyword: &str) -> Option<(&'static str, &'static [Element])> {
    STATEMENTS
        .iter()
        .find(|(name, _)| *name == keyword)
        .map(|(name, program)| (*name, *program))
}

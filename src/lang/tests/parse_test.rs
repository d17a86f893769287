use super::*;
use std::rc::Rc;

fn name(s: &str) -> Rc<str> {
    s.into()
}

#[test]
fn test_let_chain() {
    assert_eq!(
        statements("10 A=1,B(2)=3"),
        vec![
            Statement::Let(Target::Scalar(name("A")), expr("1")),
            Statement::Let(Target::Array(name("B"), vec![expr("2")]), expr("3")),
        ]
    );
    assert_eq!(
        statements("10 let x1 = x1+1"),
        vec![Statement::Let(Target::Scalar(name("X1")), expr("X1+1"))]
    );
}

#[test]
fn test_print_items() {
    assert_eq!(statements("10 PRINT"), vec![Statement::Print(vec![])]);
    assert_eq!(
        statements(r#"10 ?"hi""#),
        vec![Statement::Print(vec![PrintItem {
            item: Item::Text("hi".to_string()),
            separator: Separator::Newline,
        }])]
    );
    assert_eq!(
        statements("10 PRINT TAB(5);#3;X,"),
        vec![Statement::Print(vec![
            PrintItem {
                item: Item::Tab(expr("5")),
                separator: Separator::Semicolon,
            },
            PrintItem {
                item: Item::Width(expr("3")),
                separator: Separator::Semicolon,
            },
            PrintItem {
                item: Item::Value(expr("X")),
                separator: Separator::Comma,
            },
        ])]
    );
}

#[test]
fn test_if_then_line_number() {
    assert_eq!(
        statements("10 IF X=1 THEN 100"),
        vec![
            Statement::If(expr("X"), Relation::Equal, expr("1")),
            Statement::Goto(expr("100")),
        ]
    );
    assert_eq!(
        statements("10 IF X=>1 T. PRINT"),
        vec![
            Statement::If(expr("X"), Relation::GreaterEqual, expr("1")),
            Statement::Print(vec![]),
        ]
    );
    assert_eq!(
        statements("10 IF A#B GOTO 5"),
        vec![
            Statement::If(expr("A"), Relation::NotEqual, expr("B")),
            Statement::Goto(expr("5")),
        ]
    );
}

#[test]
fn test_for_next() {
    assert_eq!(
        statements("10 FOR I=1 TO 3"),
        vec![Statement::For(name("I"), expr("1"), expr("3"), expr("1"))]
    );
    assert_eq!(
        statements("10 F. I=9 TO 1 STEP -2"),
        vec![Statement::For(name("I"), expr("9"), expr("1"), expr("-2"))]
    );
    assert_eq!(statements("10 N."), vec![Statement::Next(None)]);
    assert_eq!(statements("10 NEXT i"), vec![Statement::Next(Some(name("I")))]);
}

#[test]
fn test_on_spellings() {
    let targets = vec![expr("10"), expr("20")];
    let gosub = vec![Statement::On(expr("X"), Branch::Gosub, targets.clone())];
    let goto = vec![Statement::On(expr("X"), Branch::Goto, targets)];
    assert_eq!(statements("1 ON X GOSUB 10,20"), gosub);
    assert_eq!(statements("1 ON X GO SUB 10,20"), gosub);
    assert_eq!(statements("1 ON X GOS. 10,20"), gosub);
    assert_eq!(statements("1 ON X GOTO 10,20"), goto);
    assert_eq!(statements("1 ON X GO TO 10,20"), goto);
    assert_eq!(statements("1 ON X G. 10,20"), goto);
}

#[test]
fn test_jumps() {
    assert_eq!(statements("10 GO SUB 100"), vec![Statement::Gosub(expr("100"))]);
    assert_eq!(statements("10 GO TO 100"), vec![Statement::Goto(expr("100"))]);
    assert_eq!(statements("10 G. 100"), vec![Statement::Goto(expr("100"))]);
    assert_eq!(statements("10 R."), vec![Statement::Return]);
    assert_eq!(statements("10 END"), vec![Statement::Stop]);
    assert_eq!(statements("10 S."), vec![Statement::Stop]);
}

#[test]
fn test_data_read_restore() {
    assert_eq!(
        statements("10 DATA 1,-2"),
        vec![Statement::Data(expr("1")), Statement::Data(expr("-2"))]
    );
    assert_eq!(
        statements("10 READ A,B"),
        vec![Statement::Read(name("A")), Statement::Read(name("B"))]
    );
    assert_eq!(statements("10 RESTORE"), vec![Statement::Restore(None)]);
    assert_eq!(statements("10 RESTORE 20"), vec![Statement::Restore(Some(expr("20")))]);
}

#[test]
fn test_input() {
    assert_eq!(
        statements(r#"10 INPUT "AGE",A,B"#),
        vec![Statement::Input(Some("AGE".to_string()), vec![name("A"), name("B")])]
    );
    assert_eq!(statements("10 IN. X"), vec![Statement::Input(None, vec![name("X")])]);
}

#[test]
fn test_declarations() {
    assert_eq!(
        statements("10 DIM A(3),B(2,2)"),
        vec![
            Statement::Dim(name("A"), vec![expr("3")]),
            Statement::Dim(name("B"), vec![expr("2"), expr("2")]),
        ]
    );
    assert_eq!(
        statements("10 DEF SQ(X)=X*X"),
        vec![Statement::Def(name("SQ"), vec![name("X")], expr("X*X"))]
    );
    assert_eq!(
        statements("10 DEF HY(A,B)=SQR(A*A+B*B)"),
        vec![Statement::Def(name("HY"), vec![name("A"), name("B")], expr("SQR(A*A+B*B)"))]
    );
    assert_eq!(statements("10 OPTION BASE 1"), vec![Statement::Base(expr("1"))]);
    assert_eq!(statements("10 BASE 0"), vec![Statement::Base(expr("0"))]);
}

#[test]
fn test_console_statements() {
    assert_eq!(
        statements("10 CLS:LC 1,2"),
        vec![Statement::Clear, Statement::Cursor(expr("1"), expr("2"))]
    );
    assert_eq!(
        statements("10 LOCATE 0,X"),
        vec![Statement::Cursor(expr("0"), expr("X"))]
    );
    assert_eq!(
        statements(r#"10 CHANGE "PART",N,".BAS""#),
        vec![Statement::Change(vec![
            FilePart::Text("PART".to_string()),
            FilePart::Number(expr("N")),
            FilePart::Text(".BAS".to_string()),
        ])]
    );
}

#[test]
fn test_misc_statements() {
    assert_eq!(
        statements("10 SWAP A,B:ERASE @,C"),
        vec![
            Statement::Swap(name("A"), name("B")),
            Statement::Erase(name("@")),
            Statement::Erase(name("C")),
        ]
    );
    assert_eq!(statements("10 ' anything : here"), vec![Statement::Rem]);
    assert_eq!(statements("10 REM X=1:PRINT"), vec![Statement::Rem]);
    assert_eq!(statements("10 RANDOMIZE"), vec![Statement::Randomize]);
}

#[test]
fn test_input_line() {
    let exprs = parse_input("1, 2+3", &()).unwrap();
    assert_eq!(exprs, vec![expr("1"), expr("2+3")]);
    assert!(parse_input("1 2", &()).is_none());
    assert!(parse_input("", &()).is_none());
    assert!(parse_input("1,", &()).is_none());
}

mod common;
use common::*;

fn print(expr: &str) -> String {
    run_program(&format!("10 PRINT {}\n", expr))
}

#[test]
fn test_precedence_and_associativity() {
    assert_eq!(print("2+3*4"), "14\n");
    assert_eq!(print("(2+3)*4"), "20\n");
    assert_eq!(print("2^3^2"), "512\n");
    assert_eq!(print("2**3"), "8\n");
    assert_eq!(print("10-4-3"), "3\n");
    assert_eq!(print("2*3/4"), "1.5\n");
    assert_eq!(print("-2^2"), "-4\n");
    assert_eq!(print("2*-3"), "-6\n");
    assert_eq!(print("--2"), "2\n");
    assert_eq!(print("+-+2"), "-2\n");
}

#[test]
fn test_negation_covers_rest_of_group() {
    assert_eq!(print("-2+3"), "-5\n");
    assert_eq!(print("2*-3+1"), "-8\n");
    assert_eq!(print("(-2)+3"), "1\n");
    assert_eq!(print("(-2+3)*2"), "-10\n");
    assert_eq!(print("MAX(-2+3,0)"), "0\n");
    assert_eq!(run_program("10 X=4\n20 PRINT 1-X;-X+1\n"), "-3-5\n");
}

#[test]
fn test_number_formatting() {
    assert_eq!(print("0.1+0.2"), "0.3\n");
    assert_eq!(print("10/4"), "2.5\n");
    assert_eq!(print("2/3"), "0.666666666666667\n");
    assert_eq!(print(".5"), "0.5\n");
    assert_eq!(print("1000000*1000000"), "1000000000000\n");
    assert_eq!(print("0-0"), "0\n");
}

#[test]
fn test_ieee_division() {
    assert_eq!(print("1/0"), "INF\n");
    assert_eq!(print("-1/0"), "-INF\n");
    assert_eq!(print("0/0"), "NAN\n");
    assert_eq!(print("SQR(-1)"), "NAN\n");
}

#[test]
fn test_variables() {
    assert_eq!(run_program("10 A=3:A1=4:Z9=5\n20 PRINT A*A1*Z9;Q\n"), "600\n");
    assert_eq!(run_program("10 a=2\n20 PRINT A\n"), "2\n");
}

#[test]
fn test_bad_expressions() {
    assert_eq!(load_error("10 PRINT (1+2\n"), "SYNTAX ERROR IN 10 (9..14)");
    assert_eq!(load_error("10 A=2+\n"), "SYNTAX ERROR IN 10 (2..7)");
    assert_eq!(load_error("10 A=ABC\n"), "SYNTAX ERROR IN 10 (2..8)");
}

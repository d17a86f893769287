mod common;
use common::*;

#[test]
fn test_def() {
    assert_eq!(run_program("10 DEF SQ(X)=X*X\n20 PRINT SQ(5)\n"), "25\n");
    let src = "10 DEF HY(A,B)=SQR(A*A+B*B)\n20 PRINT HY(3,4);\" \";HY(5,12)\n";
    assert_eq!(run_program(src), "5 13\n");
}

#[test]
fn test_parameters_do_not_leak() {
    let src = "10 X=7\n20 DEF SQ(X)=X*X\n30 PRINT SQ(3);\" \";X\n";
    assert_eq!(run_program(src), "9 7\n");
    let src = "10 Y=2\n20 DEF F(X)=X+Y\n30 Y=5\n40 PRINT F(1)\n";
    assert_eq!(run_program(src), "6\n");
}

#[test]
fn test_functions_call_earlier_functions() {
    let src = "10 DEF SQ(X)=X*X\n20 DEF CU(X)=SQ(X)*X\n30 PRINT CU(3);\" \";SQ(CU(2))\n";
    assert_eq!(run_program(src), "27 64\n");
}

#[test]
fn test_function_used_before_its_line() {
    assert_eq!(
        load_error("10 PRINT SQ(2)\n20 DEF SQ(X)=X*X\n"),
        "SYNTAX ERROR IN 10 (9..14)"
    );
}

#[test]
fn test_reserved_and_duplicate_names() {
    assert_eq!(
        load_error("10 DEF SIN(X)=X\n"),
        "SYNTAX ERROR IN 10; RESERVED FOR BUILT-IN"
    );
    assert_eq!(
        load_error("10 DEF F(X)=X\n20 DEF F(Y)=Y\n"),
        "SYNTAX ERROR IN 20; FUNCTION F ALREADY DEFINED"
    );
}

#[test]
fn test_argument_count_is_checked() {
    assert_eq!(
        run_program("10 DEF F(X)=X\n20 PRINT F(1,2)\n"),
        "ILLEGAL FUNCTION CALL IN 20; WRONG NUMBER OF ARGUMENTS TO F\n"
    );
    assert_eq!(load_error("10 PRINT MAX(1)\n"), "SYNTAX ERROR IN 10 (9..15)");
}

#[test]
fn test_builtins() {
    let src = "10 PRINT ABS(-2);INT(2.5);INT(-2.5);SGN(-4);SGN(0);SQR(9)\n\
               20 PRINT MAX(3,4);MIN(3,4);MOD(10,4)\n\
               30 PRINT LOG10(1000);LOG2(16);EXP(0);LOG(1)\n\
               40 PRINT SIN(0);COS(0);TAN(0);ATN(0);ASIN(0);ACOS(1)\n";
    assert_eq!(run_program(src), "23-3-103\n432\n3410\n010000\n");
}

#[test]
fn test_rnd_modes() {
    use basic::mach::{Options, RndMode, Runtime};
    let mut r = Runtime::new(&Options {
        rnd: RndMode::ZeroToArg,
        ..Options::default()
    });
    r.load("10 FOR I=1 TO 50\n20 X=RND(3)\n30 IF X<0 GOTO 70\n40 IF X>3 GOTO 70\n50 IF INT(X)<>X GOTO 70\n60 NEXT I:STOP\n70 PRINT \"BAD\";X\n").unwrap();
    r.seed(9);
    r.run().unwrap();
    assert_eq!(exec(&mut r), "");

    let mut r = runtime("10 FOR I=1 TO 50\n20 X=RND(1)\n30 IF X<0 GOTO 60\n40 IF X>=1 GOTO 60\n50 NEXT I:STOP\n60 PRINT \"BAD\";X\n");
    assert_eq!(exec(&mut r), "");
}

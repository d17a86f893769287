mod common;
use basic::mach::Runtime;
use common::*;

#[test]
fn test_array_basics() {
    let src = "10 DIM A(3)\n20 LET A(1)=10\n30 PRINT A(1)\n40 PRINT A(4)\n50 PRINT \"UNREACHED\"\n";
    assert_eq!(run_program(src), "10\nSUBSCRIPT OUT OF RANGE IN 40\n");
}

#[test]
fn test_subscripts_include_declared_size() {
    let src = "10 DIM A(3)\n20 FOR I=0 TO 3:A(I)=I*I:NEXT\n30 PRINT A(0);A(3)\n";
    assert_eq!(run_program(src), "09\n");
    assert_eq!(
        run_program("10 DIM A(3)\n20 A(-1)=1\n"),
        "SUBSCRIPT OUT OF RANGE IN 20\n"
    );
}

#[test]
fn test_multiple_dimensions() {
    let src = "10 DIM X(2,3),Y(1,1,1)\n20 X(2,3)=2.5:Y(1,0,1)=4\n30 PRINT X(2,3);\" \";Y(1,0,1);\" \";X(0,0)\n";
    assert_eq!(run_program(src), "2.5 4 0\n");
    assert_eq!(
        run_program("10 DIM X(2,3)\n20 PRINT X(1)\n"),
        "SUBSCRIPT OUT OF RANGE IN 20; WRONG NUMBER OF SUBSCRIPTS\n"
    );
}

#[test]
fn test_subscripts_truncate() {
    assert_eq!(run_program("10 DIM A(3)\n20 A(2.9)=7\n30 PRINT A(2)\n"), "7\n");
    assert_eq!(run_program("10 DIM A(3.7)\n20 A(3)=1:PRINT A(3)\n"), "1\n");
}

#[test]
fn test_option_base() {
    let src = "10 OPTION BASE 1\n20 DIM A(3)\n30 A(3)=2\n40 PRINT A(3)\n50 A(0)=1\n";
    assert_eq!(run_program(src), "2\nSUBSCRIPT OUT OF RANGE IN 50\n");
    assert_eq!(
        load_error("10 DIM A(3)\n20 OPTION BASE 1\n"),
        "SYNTAX ERROR IN 20; BASE MUST COME BEFORE DIM"
    );
    assert_eq!(load_error("10 BASE 1\n20 DIM A(3)\n"), "");
    assert_eq!(
        load_error("10 OPTION BASE 2\n"),
        "ILLEGAL FUNCTION CALL IN 10; BASE MUST BE 0 OR 1"
    );
}

#[test]
fn test_bad_declarations() {
    assert_eq!(
        load_error("10 DIM A(2)\n20 DIM A(3)\n"),
        "REDIMENSIONED ARRAY IN 20; A"
    );
    assert_eq!(
        load_error("10 DIM A(1,1,1,1)\n"),
        "SUBSCRIPT OUT OF RANGE IN 10; ARRAYS HAVE 1 TO 3 DIMENSIONS"
    );
    assert_eq!(
        load_error("10 DIM A(0)\n"),
        "ILLEGAL FUNCTION CALL IN 10; ARRAY SIZE MUST BE POSITIVE"
    );
    assert_eq!(
        load_error("10 DIM A(100000,100000)\n"),
        "OUT OF MEMORY IN 10; ARRAY TOO LARGE"
    );
}

#[test]
fn test_default_array() {
    let src = "10 @(100)=5\n20 PRINT @(100)\n30 PRINT @(101)\n";
    assert_eq!(run_program(src), "5\nSUBSCRIPT OUT OF RANGE IN 30\n");
    let src = "10 DIM @(2,2)\n20 @(2,2)=3:PRINT @(2,2)\n";
    assert_eq!(run_program(src), "3\n");
    assert_eq!(
        load_error("10 DIM @(5)\n20 DIM @(6)\n"),
        "REDIMENSIONED ARRAY IN 20; @"
    );
}

#[test]
fn test_array_declared_later_reads_as_variable() {
    let src = "10 A=4\n20 PRINT A\n30 DIM A(2)\n40 A(1)=7\n50 PRINT A(1)\n";
    assert_eq!(run_program(src), "4\n7\n");
    assert_eq!(load_error("10 DIM A(2)\n20 PRINT A\n"), "SYNTAX ERROR IN 20 (9..10)");
}

#[test]
fn test_arrays_survive_reload() {
    let mut r = Runtime::default();
    r.load("10 DIM B(2)\n20 B(2)=9\n").unwrap();
    r.run().unwrap();
    exec(&mut r);
    r.load("10 PRINT B(2)\n").unwrap();
    r.run().unwrap();
    assert_eq!(exec(&mut r), "9\n");
    assert_eq!(r.array("b", &[2]).unwrap(), 9.0);
}

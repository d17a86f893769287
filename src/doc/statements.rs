/*!
# Statements

Several statements may share a line when separated by `:`.
Keywords may be abbreviated where listed.

## `LET`

`[LET] V=expression` assigns a variable or array element.
Several assignments may be chained with commas.

```text
10 A=1, B(2)=A+1
```

## `PRINT` (`?`, `P.`, `WRITE`)

Prints strings and numbers. A `;` keeps the cursor where it is, a `,`
moves to the next column of 8 and no separator ends the line.
`TAB(n)` moves to column `n`. `#n` right-aligns the following numbers in
fields of `n` characters.

```text
10 PRINT "X";TAB(6);1,2
20 PRINT #5;1;22
RUN
X     1 2
    1   22
```

## `INPUT` (`IN.`)

`INPUT ["prompt",] V1, V2, ...` reads numbers typed by the user. The
default prompt is `? `. Each answer may be any expression. The prompt
repeats until the right number of values is entered.

## `IF`

`IF x op y [THEN|T.] statement` where `op` is one of `= <> < > <= >=`.
`=<`, `=>`, `><` and `#` are accepted too. `IF X=1 THEN 100` jumps to
line 100. When the test fails the rest of the line is skipped.

## `FOR` (`F.`) and `NEXT` (`N.`)

```text
10 FOR I=3 TO 1 STEP -1
20 PRINT I;
30 NEXT I
RUN
321
```

The loop is skipped entirely when the start is already past the limit.
Every `FOR` needs a matching `NEXT` later in the file.

## `GOTO` (`G.`, `GO TO`), `GOSUB` (`GOS.`, `GO SUB`) and `RETURN` (`R.`)

Jump to a line, or call a subroutine that ends in `RETURN`.

## `ON`

`ON X GOTO 100,200,300` picks the X-th line. Nothing happens when X is
out of range. `GOSUB`, `G.` and `GOS.` work the same way.

## `DIM`, `ERASE` and `OPTION BASE`

`DIM A(10), B(3,4)` declares arrays of 1 to 3 dimensions. Subscripts
run from 0 up to the declared size. `OPTION BASE 1` (or `BASE 1`) makes
them start at 1 and must come before the first `DIM`. `@` is an array of
100 that every program gets for free; it may be declared again once.
`ERASE A` sets every element back to zero.

## `DATA`, `READ` and `RESTORE`

```text
10 DATA 1,2,3
20 READ A: READ B
30 RESTORE
40 READ C
50 PRINT A;B;C
RUN
121
```

`RESTORE 10` moves the data pointer to the first value on line 10.

## `DEF`

`DEF SQ(X)=X*X` defines a function of one or more parameters. It may be
used on any later line. Built-in names cannot be redefined.

## Other statements

* `SWAP A,B` exchanges two variables.
* `RANDOMIZE` reseeds the random numbers.
* `CLEAR` (`CLS`) clears the screen.
* `CURSOR X,Y` (`LC`, `LOCATE`) moves the cursor.
* `CHANGE "PART",N,".BAS"` runs another program and keeps all variables.
* `REM` (`'`) ignores the rest of the line.
* `STOP` (`S.`, `END`) ends the program.

## Functions

`ABS ACOS ASIN ATN COS EXP INT LOG LOG10 LOG2 SGN SIN SQR TAN RND`
take one argument. `MAX MIN MOD` take two. `INT` rounds to the
nearest whole number. `R.` and `I.` abbreviate `RND` and `INT`.
*/

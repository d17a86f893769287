/*!
# Introductory Tutorial

A program is a plain text file. Every line starts with a line number
and the lines must be in increasing order. Blank lines are ignored.
Save the following as `hello.bas`.

```text
10 PRINT "HELLO WORLD"
20 END
```

Run it by naming the file on the command line.

```text
basic hello.bas
HELLO WORLD
```

A program can also be loaded from the web with an `http://` or
`https://` address in place of the file name.

## Command line flags

Flags may be written in any case and may start with `/` instead of `-`.

* `-TRON` prints each line number as the program reaches it.
* `-WAIT` asks for ENTER before the window closes.
* `-ZERO_TO_ONE` makes `RND(X)` return a fraction from 0 up to 1. This is the default.
* `-ZERO_TO_ARG` makes `RND(X)` return a whole number from 0 to `X`.

## Numbers and variables

All numbers are floating point. A variable name is a letter, or a
letter followed by one digit: `A`, `X1`, `Z9`. Variables start at zero.

```text
10 A=10/4
20 B1=A*2
30 PRINT A;" ";B1
RUN
2.5 5
```

Expressions use `+ - * / ^` and parentheses. `**` means the same as `^`.
Powers group from the right, so `2^3^2` is 512. A leading minus
negates everything after it up to the closing parenthesis or the end
of the expression, so `-2+3` is -5. Write `(-2)+3` to negate only
the 2.

Comparisons in `IF` allow a tiny rounding error, so `0.1+0.2 = 0.3`
is true.

## Stopping

Press CTRL-C to stop a running program. The interpreter reports the
line where it stopped.

```text
BREAK IN 20
```

Set the environment variable `BASIC_LOG=debug` to see how programs
are loaded.
*/

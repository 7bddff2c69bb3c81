// Pattern: Function-like Macros
// Arguments are bound once and locals inside an expansion cannot collide
// with the caller's names.

use crate::console::Console;
use std::cell::Cell;

macro_rules! max {
    ($a:expr, $b:expr) => {{
        let (a, b) = ($a, $b);
        if a > b {
            a
        } else {
            b
        }
    }};
}

macro_rules! square {
    ($x:expr) => {{
        let x = $x;
        x * x
    }};
}

macro_rules! add {
    ($a:expr, $b:expr) => {
        $a + $b
    };
}

macro_rules! plus_hundred {
    ($e:expr) => {{
        let tmp = 100;
        $e + tmp
    }};
}

macro_rules! count {
    () => { 0usize };
    ($head:tt $($tail:tt)*) => { 1usize + count!($($tail)*) };
}

pub fn evaluations_of_square() -> (i32, usize) {
    let calls = Cell::new(0);
    let next = || {
        calls.set(calls.get() + 1);
        5
    };
    let value = square!(next());
    (value, calls.get())
}

pub fn hygiene_result() -> i32 {
    let tmp = 1;
    plus_hundred!(tmp)
}

pub fn run(console: &Console) -> anyhow::Result<()> {
    console.heading("Function-like macros")?;
    say!(console, "Max from 35 and 67 is: {}", max!(35, 67));
    say!(console, "Square of 5 is: {}", square!(5));
    say!(console, "Addition of 3 and 5 is: {}", add!(3, 5));
    say!(console);

    console.heading("Arguments evaluate once")?;
    let (value, calls) = evaluations_of_square();
    say!(console, "square!(next()) = {value}, next() ran {calls} time(s)");
    say!(console);

    console.heading("Hygiene")?;
    // The macro's `tmp` and the caller's `tmp` are different bindings, so
    // no counter-based unique names are needed.
    say!(console, "caller tmp = 1, plus_hundred!(tmp) = {}", hygiene_result());
    say!(console, "count!(a b c d) = {}", count!(a b c d));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_evaluation() {
        assert_eq!(evaluations_of_square(), (25, 1));
    }

    #[test]
    fn test_hygiene() {
        assert_eq!(hygiene_result(), 101);
    }

    #[test]
    fn test_arithmetic_macros() {
        assert_eq!(max!(35, 67), 67);
        assert_eq!(max!(-1, -9), -1);
        assert_eq!(add!(3, 5), 8);
        assert_eq!(count!(), 0);
        assert_eq!(count!(x y z), 3);
    }
}

// Pattern: Compile-Time Evaluation
// `const fn` can run during compilation when its inputs are constants.

use crate::console::Console;

pub const fn factorial(n: u64) -> u64 {
    if n == 0 {
        1
    } else {
        n * factorial(n - 1)
    }
}

pub const fn square(n: i64) -> i64 {
    n * n
}

pub const fn get_array() -> [i32; 3] {
    [1, 2, 3]
}

/// Sum of 0..=n.
pub const fn sum_to(n: u32) -> u32 {
    let mut total = 0;
    let mut i = 0;
    while i <= n {
        total += i;
        i += 1;
    }
    total
}

/// The bound travels in the type; the value is computed per instantiation.
pub struct Sum<const N: u32>;

impl<const N: u32> Sum<N> {
    pub const VALUE: u32 = sum_to(N);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn x(&self) -> i32 {
        self.x
    }

    pub const fn y(&self) -> i32 {
        self.y
    }
}

const MAX_BUFFER_SIZE: usize = 16;
const SQUARE_OF_5: i64 = square(5);
const FACTORIAL_OF_5: u64 = factorial(5);
const ARRAY: [i32; 3] = get_array();
const SUM_TO_10: u32 = Sum::<10>::VALUE;
const ORIGIN: Point = Point::new(10, 20);

// Fails the build, not the run, if it ever stops holding.
const _: () = assert!(FACTORIAL_OF_5 == 120);

pub fn run(console: &Console) -> anyhow::Result<()> {
    console.heading("const fn")?;
    say!(console, "Square of 5 is: {SQUARE_OF_5}");
    say!(console, "Factorial of 5 is: {FACTORIAL_OF_5}");
    say!(
        console,
        "Array from const fn: {}",
        ARRAY.iter().map(i32::to_string).collect::<Vec<_>>().join(" ")
    );
    say!(console, "Sum from 0 to 10 is: {SUM_TO_10}");
    say!(console, "Point coordinates: ({}, {})", ORIGIN.x(), ORIGIN.y());
    say!(console);

    console.heading("Constants as array lengths")?;
    let buffer = [0u8; MAX_BUFFER_SIZE];
    say!(console, "buffer holds {} bytes, sized at compile time", buffer.len());

    // The same function also runs on runtime values.
    let n: u64 = "7".parse()?;
    say!(console, "factorial({n}) at runtime = {}", factorial(n));

    Ok(())
}

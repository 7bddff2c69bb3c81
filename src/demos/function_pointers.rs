// Pattern: Function Pointers

use crate::console::Console;

fn hello() -> &'static str {
    "Hello"
}

pub fn square(n: i32) -> i32 {
    n * n
}

pub fn greet(name: &str) -> String {
    format!("Hello, {name}")
}

pub fn apply(f: fn(i32) -> i32, value: i32) -> i32 {
    f(value)
}

pub fn run(console: &Console) -> anyhow::Result<()> {
    console.heading("Function pointers")?;

    let without_args: fn() -> &'static str = hello;
    say!(console, "{}", without_args());

    let with_args: fn(i32) -> i32 = square;
    say!(console, "Square of 4 is: {}", with_args(4));

    let more: fn(&str) -> String = greet;
    say!(console, "{}", more("John"));

    say!(console, "apply(square, 7) = {}", apply(square, 7));
    // Non-capturing closures coerce to fn pointers too.
    say!(console, "apply(|n| n + 1, 7) = {}", apply(|n| n + 1, 7));
    Ok(())
}

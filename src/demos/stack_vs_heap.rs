// Pattern: Stack vs Heap
// Fixed-size values live on the stack; Box and Vec put their contents on the
// heap. Both are freed when their owner goes out of scope.

use crate::console::Console;
use std::mem::size_of_val;

const COMPARISON: &[(&str, &str, &str)] = &[
    ("Size", "fixed, known at compile time", "can grow or shrink at runtime"),
    ("Lifetime", "until the owning scope ends", "until the owner is dropped"),
    ("Freed by", "leaving the scope", "Drop on the owning Box/Vec"),
    ("Limit", "thread stack size", "available memory"),
    ("Example", "let x = 5;", "let x = Box::new(5);"),
];

struct Noisy<'c> {
    name: &'static str,
    console: &'c Console,
}

impl Drop for Noisy<'_> {
    fn drop(&mut self) {
        let _ = self.console.line(format!("  dropped {}", self.name));
    }
}

/// Capacities seen while pushing `n` items into an empty Vec.
pub fn capacity_steps(n: usize) -> Vec<usize> {
    let mut values = Vec::new();
    let mut steps = vec![values.capacity()];
    for i in 0..n {
        values.push(i);
        if values.capacity() != *steps.last().unwrap_or(&0) {
            steps.push(values.capacity());
        }
    }
    steps
}

pub fn run(console: &Console) -> anyhow::Result<()> {
    console.heading("Stack vs heap")?;
    console.block(|w| {
        writeln!(w, "{:<10}| {:<30}| {}", "Feature", "Stack", "Heap")?;
        writeln!(w, "{}", "-".repeat(72))?;
        for (feature, stack, heap) in COMPARISON {
            writeln!(w, "{feature:<10}| {stack:<30}| {heap}")?;
        }
        Ok(())
    })?;
    say!(console);

    let array = [0i32; 10];
    say!(console, "[i32; 10] on the stack: {} bytes", size_of_val(&array));

    let boxed = Box::new(10);
    say!(
        console,
        "Box<i32> holds {} and is itself {} bytes (a pointer)",
        *boxed,
        size_of_val(&boxed)
    );

    say!(console, "Vec capacity while pushing 20 items: {:?}", capacity_steps(20));
    say!(console);

    console.heading("Scope-based cleanup")?;
    let _outer = Noisy {
        name: "outer",
        console,
    };
    {
        let _inner = Noisy {
            name: "inner",
            console,
        };
        say!(console, "  leaving inner scope");
    }
    say!(console, "  leaving run()");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_grows() {
        let steps = capacity_steps(20);
        assert_eq!(steps[0], 0);
        assert!(steps.windows(2).all(|w| w[0] < w[1]));
        assert!(*steps.last().unwrap() >= 20);
    }

    #[test]
    fn test_drop_order() {
        let (console, buffer) = Console::capture();
        run(&console).unwrap();
        let lines = buffer.lines();
        let pos = |text: &str| lines.iter().position(|l| l.trim() == text).unwrap();
        assert!(pos("leaving inner scope") < pos("dropped inner"));
        assert!(pos("dropped inner") < pos("leaving run()"));
        assert!(pos("leaving run()") < pos("dropped outer"));
    }
}

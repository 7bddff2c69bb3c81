// Pattern: Closures as Arguments

use crate::console::Console;

pub fn sorted_descending(mut values: Vec<i32>) -> Vec<i32> {
    values.sort_by(|a, b| b.cmp(a));
    values
}

pub fn evens_only(mut values: Vec<i32>) -> Vec<i32> {
    values.retain(|n| n % 2 == 0);
    values
}

pub fn run(console: &Console) -> anyhow::Result<()> {
    console.heading("Closures")?;

    let add = |a: i32, b: i32| a + b;
    say!(console, "Sum of 5 and 4 is: {}", add(5, 4));

    let sorted = sorted_descending(vec![5, 1, 4, 6, 3]);
    say!(console, "Elements sorted descending: {sorted:?}");

    let evens = evens_only(vec![1, 2, 3, 4, 5]);
    say!(console, "Even elements: {evens:?}");

    // Capturing by reference: the closure sees `threshold` from the scope.
    let threshold = 3;
    let above: Vec<i32> = [1, 5, 2, 8].into_iter().filter(|&n| n > threshold).collect();
    say!(console, "Above {threshold}: {above:?}");
    Ok(())
}

// Pattern: Rebinding Arguments with Closures
// A closure with named parameters spells out which argument goes where.

use crate::console::Console;

pub fn format_pair(first: i32, second: i32) -> String {
    format!("{first}, {second}")
}

pub fn swapped() -> impl Fn(i32, i32) -> String {
    |first, second| format_pair(second, first)
}

pub fn with_first_fixed(first: i32) -> impl Fn(i32) -> String {
    move |second| format_pair(first, second)
}

pub fn run(console: &Console) -> anyhow::Result<()> {
    console.heading("Argument binding")?;
    say!(console, "format_pair(1, 2)      -> {}", format_pair(1, 2));

    let swap = swapped();
    say!(console, "swapped(1, 2)          -> {}", swap(1, 2));

    let from_ten = with_first_fixed(10);
    say!(console, "with_first_fixed(10)(2) -> {}", from_ten(2));
    Ok(())
}

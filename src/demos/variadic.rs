// Pattern: Variadic Printing
// A recursive macro peels one argument per step, down to an empty base case.
// A slice of trait objects does the same job at runtime.

use crate::console::Console;
use itertools::Itertools;
use std::fmt::Display;

macro_rules! print_all {
    () => { String::new() };
    ($first:expr $(, $rest:expr)*) => {
        format!("{} {}", $first, print_all!($($rest),*))
    };
}

pub fn join_display(items: &[&dyn Display]) -> String {
    items.iter().join(" ")
}

pub fn run(console: &Console) -> anyhow::Result<()> {
    console.heading("Variadic macro")?;
    say!(console, "{}", print_all!(324, 23.3344f32, 'g', "Xyz").trim_end());
    say!(console, "{}", print_all!("only one").trim_end());
    say!(console, "empty call gives {:?}", print_all!());
    say!(console);

    console.heading("Slice of trait objects")?;
    say!(console, "{}", join_display(&[&324, &23.3344f32, &'g', &"Xyz"]));
    Ok(())
}

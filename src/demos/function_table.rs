// Pattern: Calling Functions by Index

use crate::console::Console;

fn func1() -> &'static str {
    "Function 1"
}

fn func2() -> &'static str {
    "Function 2"
}

fn func3() -> &'static str {
    "Function 3"
}

fn func4() -> &'static str {
    "Function 4"
}

fn func5() -> &'static str {
    "Function 5"
}

const FUNC_TABLE: [fn() -> &'static str; 5] = [func1, func2, func3, func4, func5];

/// None for an index past the end of the table.
pub fn call_by_index(index: usize) -> Option<&'static str> {
    FUNC_TABLE.get(index).map(|f| f())
}

pub fn run(console: &Console) -> anyhow::Result<()> {
    console.heading("Function table")?;
    for index in [4, 2, 9] {
        match call_by_index(index) {
            Some(output) => say!(console, "table[{index}]() -> {output}"),
            None => say!(console, "table[{index}] does not exist"),
        }
    }
    say!(console);
    say!(console, "All functions:");
    for func in FUNC_TABLE {
        say!(console, "  {}", func());
    }
    Ok(())
}

// Pattern: Callable Objects
// A struct with a method, a closure that carries its own state, and an
// array of boxed closures called by position.

use crate::console::Console;

pub struct Greeter {
    greeting: String,
}

impl Greeter {
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            greeting: greeting.into(),
        }
    }

    pub fn greet(&self, name: &str) -> String {
        format!("{}, {name}!", self.greeting)
    }
}

/// A closure that owns its greeting.
pub fn make_greeter(greeting: &str) -> impl Fn(&str) -> String {
    let greeting = greeting.to_string();
    move |name| format!("{greeting}, {name}!")
}

/// Each call returns the next number, starting at `start`.
pub fn make_counter(start: u32) -> impl FnMut() -> u32 {
    let mut next = start;
    move || {
        let current = next;
        next += 1;
        current
    }
}

pub fn function_array() -> [Box<dyn Fn() -> String>; 3] {
    let suffix = String::from("(captured)");
    [
        Box::new(|| "Function 1".to_string()),
        Box::new(|| "Function 2".to_string()),
        Box::new(move || format!("Function 3 {suffix}")),
    ]
}

pub fn run(console: &Console) -> anyhow::Result<()> {
    console.heading("Struct with a method")?;
    let g = Greeter::new("hello");
    for name in ["Manthan", "Dhaval", "Xyz"] {
        say!(console, "{}", g.greet(name));
    }
    say!(console);

    console.heading("Closures")?;
    let hi = make_greeter("hi");
    say!(console, "{}", hi("Rust"));
    let mut counter = make_counter(1);
    say!(console, "counter: {} {} {}", counter(), counter(), counter());
    say!(console);

    console.heading("Array of boxed closures")?;
    let funcs = function_array();
    for (index, func) in funcs.iter().enumerate() {
        say!(console, "funcs[{index}]() -> {}", func());
    }
    Ok(())
}

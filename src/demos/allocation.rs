// Pattern: Allocation Tracking
// The counters are an ordinary value owned by this function and lent to
// every tracked allocation.

use crate::alloc_tracker::AllocationMetrics;
use crate::console::Console;
use anyhow::ensure;

#[derive(Debug, Default)]
pub struct Object {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

pub fn run(console: &Console) -> anyhow::Result<()> {
    console.heading("Allocation tracking")?;
    let metrics = AllocationMetrics::new();
    let start = metrics.current_usage();
    say!(console, "{}", metrics.snapshot());

    // Only the String header is counted; its text buffer is a separate
    // allocation owned by the String.
    let text = metrics.track(String::from("hello"));

    // String literals and arrays of them are not heap allocations.
    let greeting = "Hello";
    let fruits = ["Cherry", "Apple", "Banana"];
    say!(console, "{}  after tracking {:?}", metrics.snapshot(), *text);
    say!(console, "untracked: {greeting:?} and {fruits:?} live in static memory");

    {
        let object = metrics.track(Object::default());
        say!(console, "{}  with {:?} in scope", metrics.snapshot(), *object);
    }
    say!(console, "{}  after the object's scope ended", metrics.snapshot());

    drop(text);
    let end = metrics.snapshot();
    say!(console, "{end}  after dropping the string");
    say!(
        console,
        "totals: {} bytes allocated, {} bytes freed",
        end.total_allocated,
        end.total_freed
    );

    ensure!(
        end.current_usage() == start,
        "leaked {} bytes",
        end.current_usage() - start
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_object_size() {
        assert_eq!(size_of::<Object>(), 12);
    }

    #[test]
    fn test_usage_reported() {
        let (console, buffer) = Console::capture();
        run(&console).unwrap();
        let text = buffer.contents();
        let string_bytes = size_of::<String>();
        assert!(text.contains(&format!("Memory usage: {string_bytes} bytes")));
        assert!(text.contains(&format!("Memory usage: {} bytes", string_bytes + 12)));
        assert!(text.contains("Memory usage: 0 bytes (0 live allocations)  after dropping"));
    }
}

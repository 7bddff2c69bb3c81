// Pattern: Unique Ownership
// A Box has exactly one owner. Moving it transfers ownership; the old
// binding can no longer be used. Option<Box<T>> models a pointer that can be
// emptied at runtime.

use crate::console::Console;
use std::io;

pub struct Resource<'c> {
    value: i32,
    console: &'c Console,
}

impl<'c> Resource<'c> {
    pub fn new(value: i32, console: &'c Console) -> io::Result<Self> {
        console.line(format!("Constructed with value {value}"))?;
        Ok(Self { value, console })
    }

    pub fn show(&self) -> io::Result<()> {
        self.console.line(format!("Value: {}", self.value))
    }
}

impl Drop for Resource<'_> {
    fn drop(&mut self) {
        let _ = self.console.line("Destructed");
    }
}

pub fn run(console: &Console) -> anyhow::Result<()> {
    console.heading("Unique ownership")?;

    let mut ptr = Some(Box::new(Resource::new(42, console)?));
    if let Some(resource) = &ptr {
        resource.show()?;
    }

    // Transfer ownership out of `ptr`, leaving None behind.
    let ptr2 = ptr.take();
    if ptr.is_none() {
        say!(console, "ptr is now empty.");
    }

    if let Some(resource) = &ptr2 {
        resource.show()?;
    }

    // A plain move makes the source unusable at compile time instead.
    let moved = ptr2;
    // ptr2.is_some(); // error[E0382]: borrow of moved value
    drop(moved);

    say!(console, "end of scope");
    Ok(())
}

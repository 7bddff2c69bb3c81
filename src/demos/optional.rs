// Pattern: Optional Values and Checked Access
// Each checked form is shown next to the form that panics.

use crate::console::Console;
use std::cell::Cell;
use std::hint::black_box;
use std::panic::{self, catch_unwind, AssertUnwindSafe};
use std::sync::Once;

const USERS: &[(u32, &str)] = &[(1, "ada"), (2, "grace"), (3, "linus")];

pub fn find_user(id: u32) -> Option<&'static str> {
    USERS
        .iter()
        .find(|(uid, _)| *uid == id)
        .map(|(_, name)| *name)
}

pub fn name_length(id: u32) -> usize {
    find_user(id).map(str::len).unwrap_or(0)
}

thread_local! {
    static QUIET: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

// Wraps the installed hook once. Silent only on a thread inside `panics`.
fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !QUIET.with(Cell::get) {
                previous(info);
            }
        }));
    });
}

/// Runs `f` and reports whether it panicked, without the panic message.
fn panics<T>(f: impl FnOnce() -> T) -> bool {
    install_quiet_hook();
    QUIET.with(|q| q.set(true));
    let result = catch_unwind(AssertUnwindSafe(f));
    QUIET.with(|q| q.set(false));
    result.is_err()
}

pub fn run(console: &Console) -> anyhow::Result<()> {
    console.heading("Option")?;
    for id in [2, 9] {
        match find_user(id) {
            Some(name) => say!(console, "user {id}: {name}"),
            None => say!(console, "user {id}: not found"),
        }
    }
    say!(console, "name_length(3) = {}", name_length(3));
    say!(console, "name_length(9) = {}", name_length(9));
    say!(console, "unwrap_or(\"guest\") = {}", find_user(9).unwrap_or("guest"));
    say!(console, "find_user(9).unwrap() panics: {}", panics(|| find_user(9).unwrap()));
    say!(console);

    console.heading("Slices")?;
    let values = [10, 20, 30];
    let view = &values[1..];
    say!(console, "view = {view:?}, len = {}", view.len());
    let index = black_box(5);
    say!(console, "view.get({index}) = {:?}", view.get(index));
    say!(console, "view[{index}] panics: {}", panics(|| view[index]));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(find_user(1), Some("ada"));
        assert_eq!(find_user(42), None);
        assert_eq!(name_length(2), 5);
        assert_eq!(name_length(42), 0);
    }

    #[test]
    fn test_quiet_only_while_catching() {
        assert!(panics(|| find_user(9).unwrap()));
        assert!(!QUIET.with(Cell::get));
        assert!(!panics(|| find_user(1).unwrap()));
        assert!(!QUIET.with(Cell::get));
    }

    #[test]
    fn test_panicking_forms_are_contained() {
        let (console, buffer) = Console::capture();
        run(&console).unwrap();
        let text = buffer.contents();
        assert!(text.contains("find_user(9).unwrap() panics: true"));
        assert!(text.contains("view[5] panics: true"));
    }
}

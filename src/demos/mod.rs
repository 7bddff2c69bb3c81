//! # Built-in demos
//!
//! One module per feature. Every module exposes a `run` function that
//! writes to a [`Console`]; [`catalog`] wraps them into a registry in a
//! fixed order.

use crate::config::DemoSettings;
use crate::console::Console;
use crate::registry::{DemoFn, DemoRegistry, RegistryError};
use tracing::debug;

/// `println!` for a console: formats one line and propagates write errors.
macro_rules! say {
    ($console:expr) => {
        $console.blank()?
    };
    ($console:expr, $($arg:tt)*) => {
        $console.line(format!($($arg)*))?
    };
}

pub mod allocation;
pub mod any;
pub mod argument_binding;
pub mod closures;
pub mod conditional_compilation;
pub mod const_eval;
pub mod custom_blocks;
pub mod fast_io;
pub mod function_pointers;
pub mod function_table;
pub mod functor;
pub mod love;
pub mod macros;
pub mod memory_footprint;
pub mod namespaces;
pub mod numeric_limits;
pub mod operator_traits;
pub mod optional;
pub mod scope_timer;
pub mod singleton;
pub mod stack_vs_heap;
pub mod threads;
pub mod type_inference;
pub mod unique_ownership;
pub mod variadic;
pub mod variant;

struct Entry {
    name: &'static str,
    summary: &'static str,
    build: fn(Console, &DemoSettings) -> DemoFn,
}

const CATALOG: &[Entry] = &[
    Entry {
        name: "type-inference",
        summary: "let-binding inference and generic functions",
        build: |c, _| Box::new(move || type_inference::run(&c)),
    },
    Entry {
        name: "const-eval",
        summary: "const fn, const generics and compile-time assertions",
        build: |c, _| Box::new(move || const_eval::run(&c)),
    },
    Entry {
        name: "macros",
        summary: "function-like macros and hygiene",
        build: |c, _| Box::new(move || macros::run(&c)),
    },
    Entry {
        name: "conditional-compilation",
        summary: "cfg! and #[cfg] instead of preprocessor branches",
        build: |c, _| Box::new(move || conditional_compilation::run(&c)),
    },
    Entry {
        name: "stack-vs-heap",
        summary: "stack values, Box, Vec growth and scope-based drop",
        build: |c, _| Box::new(move || stack_vs_heap::run(&c)),
    },
    Entry {
        name: "unique-ownership",
        summary: "moving a Box and observing Drop",
        build: |c, _| Box::new(move || unique_ownership::run(&c)),
    },
    Entry {
        name: "allocation-tracking",
        summary: "counting allocations with owned metrics",
        build: |c, _| Box::new(move || allocation::run(&c)),
    },
    Entry {
        name: "memory-footprint",
        summary: "summing size_of_val over any number of values",
        build: |c, _| Box::new(move || memory_footprint::run(&c)),
    },
    Entry {
        name: "variadic",
        summary: "recursive macro_rules! over a variable argument list",
        build: |c, _| Box::new(move || variadic::run(&c)),
    },
    Entry {
        name: "variant",
        summary: "enums as tagged unions",
        build: |c, _| Box::new(move || variant::run(&c)),
    },
    Entry {
        name: "any",
        summary: "heterogeneous values with dyn Any and downcasting",
        build: |c, _| Box::new(move || any::run(&c)),
    },
    Entry {
        name: "optional",
        summary: "Option and checked slice access next to their panicking forms",
        build: |c, _| Box::new(move || optional::run(&c)),
    },
    Entry {
        name: "function-pointers",
        summary: "fn pointer types and passing functions around",
        build: |c, _| Box::new(move || function_pointers::run(&c)),
    },
    Entry {
        name: "function-table",
        summary: "calling functions by index",
        build: |c, _| Box::new(move || function_table::run(&c)),
    },
    Entry {
        name: "functor",
        summary: "callable structs, closures and arrays of boxed closures",
        build: |c, _| Box::new(move || functor::run(&c)),
    },
    Entry {
        name: "closures",
        summary: "closures as sort keys and filters",
        build: |c, _| Box::new(move || closures::run(&c)),
    },
    Entry {
        name: "argument-binding",
        summary: "reordering and fixing arguments with named closures",
        build: |c, _| Box::new(move || argument_binding::run(&c)),
    },
    Entry {
        name: "operator-traits",
        summary: "Add, PartialEq and Index on user types",
        build: |c, _| Box::new(move || operator_traits::run(&c)),
    },
    Entry {
        name: "love",
        summary: "a named method where an operator would mislead",
        build: |c, _| Box::new(move || love::run(&c)),
    },
    Entry {
        name: "custom-blocks",
        summary: "a sorting collection built from a brace list",
        build: |c, _| Box::new(move || custom_blocks::run(&c)),
    },
    Entry {
        name: "numeric-limits",
        summary: "MIN, MAX and integer/signed queries per type",
        build: |c, _| Box::new(move || numeric_limits::run(&c)),
    },
    Entry {
        name: "singleton",
        summary: "one lazily constructed shared instance",
        build: |c, _| Box::new(move || singleton::run(&c)),
    },
    Entry {
        name: "namespaces",
        summary: "same-named functions kept apart by modules",
        build: |c, _| Box::new(move || namespaces::run(&c)),
    },
    Entry {
        name: "scope-timer",
        summary: "a guard that reports elapsed time on drop",
        build: |c, s| {
            let settings = s.scope_timer.clone();
            Box::new(move || scope_timer::run(&c, &settings))
        },
    },
    Entry {
        name: "fast-io",
        summary: "unbuffered versus buffered writes",
        build: |c, s| {
            let settings = s.fast_io.clone();
            Box::new(move || fast_io::run(&c, &settings))
        },
    },
    Entry {
        name: "threads",
        summary: "two threads writing whole blocks under one lock",
        build: |c, s| {
            let settings = s.threads.clone();
            Box::new(move || threads::run(&c, &settings))
        },
    },
];

pub fn names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|e| e.name)
}

pub fn is_known(name: &str) -> bool {
    CATALOG.iter().any(|e| e.name == name)
}

/// Registers every built-in demo except those in `settings.disabled`.
pub fn catalog(console: &Console, settings: &DemoSettings) -> Result<DemoRegistry, RegistryError> {
    let mut registry = DemoRegistry::new();
    for entry in CATALOG {
        if settings.disabled.iter().any(|d| d == entry.name) {
            debug!(demo = entry.name, "skipping disabled demo");
            continue;
        }
        let routine = (entry.build)(console.clone(), settings);
        registry.register_with_summary(entry.name, entry.summary, routine)?;
    }
    Ok(registry)
}

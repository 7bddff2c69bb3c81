// Pattern: Lazily Initialised Shared Instance
// The instance is built on first access and every later access returns the
// same one. It cannot be cloned or constructed from outside.

use crate::console::Console;
use anyhow::ensure;
use lazy_static::lazy_static;
use std::ptr;
use std::sync::atomic::{AtomicUsize, Ordering};

static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

lazy_static! {
    static ref INSTANCE: Singleton = Singleton::new();
}

pub struct Singleton {
    data: f32,
}

impl Singleton {
    fn new() -> Self {
        CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
        Self { data: 0.0 }
    }

    pub fn get() -> &'static Singleton {
        &INSTANCE
    }

    pub fn data(&self) -> f32 {
        self.data
    }

    pub fn describe(&self) -> &'static str {
        "I'm a method of the singleton"
    }
}

pub fn constructions() -> usize {
    CONSTRUCTIONS.load(Ordering::SeqCst)
}

pub fn run(console: &Console) -> anyhow::Result<()> {
    console.heading("Singleton")?;
    let obj = Singleton::get();
    say!(console, "{}", obj.describe());
    say!(console, "Data of obj is: {}", obj.data());

    let obj2 = Singleton::get();
    say!(console, "Data of obj2 is: {}", obj2.data());
    say!(console, "obj and obj2 are the same instance: {}", ptr::eq(obj, obj2));
    say!(console, "constructed {} time(s)", constructions());

    ensure!(constructions() == 1, "singleton constructed more than once");
    Ok(())
}

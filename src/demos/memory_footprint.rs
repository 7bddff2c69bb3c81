// Pattern: Summing Sizes over a Variable Argument List

use crate::console::Console;
use std::mem::{size_of, size_of_val};

macro_rules! total_size {
    () => { 0usize };
    ($first:expr $(, $rest:expr)*) => {
        size_of_val(&$first) + total_size!($($rest),*)
    };
}

#[allow(dead_code)]
pub struct ExampleStruct {
    x: i32,
    y: f64,
    z: u8,
}

pub fn sample_total() -> usize {
    let a = 0i32;
    let b = 0f64;
    let c = 'c';
    let d = 0f32;
    let arr = [0i32; 10];
    let my_struct = ExampleStruct { x: 0, y: 0.0, z: 0 };
    let e = 0i32;
    total_size!(a, b, c, d, e, arr, my_struct)
}

pub fn run(console: &Console) -> anyhow::Result<()> {
    console.heading("Memory footprint")?;
    say!(console, "i32: {}, f64: {}, char: {}, f32: {}", size_of::<i32>(), size_of::<f64>(), size_of::<char>(), size_of::<f32>());
    say!(console, "[i32; 10]: {}", size_of::<[i32; 10]>());
    // Fields are reordered to avoid padding, so 8 + 4 + 1 rounds up to 16.
    say!(console, "ExampleStruct {{ i32, f64, u8 }}: {}", size_of::<ExampleStruct>());
    say!(console, "Total memory occupied: {} bytes", sample_total());
    say!(console, "total_size!() with no arguments: {}", total_size!());
    Ok(())
}

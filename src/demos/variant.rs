// Pattern: Enums as Tagged Unions
// The active alternative is always known and every read is checked by a
// match. A raw `union` leaves the tag to the programmer.

use crate::console::Console;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Data {
    Int(i32),
    Float(f32),
    Char(char),
}

impl Data {
    pub fn index(&self) -> usize {
        match self {
            Data::Int(_) => 0,
            Data::Float(_) => 1,
            Data::Char(_) => 2,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match *self {
            Data::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match *self {
            Data::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match *self {
            Data::Char(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Data::Int(v) => write!(f, "It is int: {v}"),
            Data::Float(v) => write!(f, "It is float: {v}"),
            Data::Char(v) => write!(f, "It is char: {v}"),
        }
    }
}

#[repr(C)]
union RawData {
    int: i32,
    float: f32,
}

fn reinterpret(value: f32) -> i32 {
    let raw = RawData { float: value };
    // SAFETY: every bit pattern is a valid i32.
    unsafe { raw.int }
}

pub fn run(console: &Console) -> anyhow::Result<()> {
    console.heading("Enum as variant")?;

    let mut data = Data::Int(3434);
    say!(console, "{data} (index {})", data.index());
    data = Data::Float(23.234);
    say!(console, "{data} (index {})", data.index());
    data = Data::Char('X');
    say!(console, "Current type index: {}", data.index());
    say!(console, "{data}");
    say!(console);

    console.heading("Checked access")?;
    say!(console, "as_char()  = {:?}", data.as_char());
    say!(console, "as_float() = {:?} (wrong alternative, no undefined read)", data.as_float());
    say!(console);

    console.heading("Raw union")?;
    say!(
        console,
        "writing 1.0f32 and reading the int field gives {:#x}",
        reinterpret(1.0)
    );
    Ok(())
}

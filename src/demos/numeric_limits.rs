// Pattern: Numeric Limits
// Ranges are associated constants on each type. The integer/signed queries
// are a small trait implemented per type.

use crate::console::Console;
use std::any::type_name;
use std::fmt::Display;

pub trait Limits: Sized + Display {
    const MIN: Self;
    const MAX: Self;
    const IS_INTEGER: bool;
    const IS_SIGNED: bool;
}

macro_rules! impl_limits {
    ($($t:ty => integer: $int:expr, signed: $signed:expr;)*) => {
        $(
            impl Limits for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
                const IS_INTEGER: bool = $int;
                const IS_SIGNED: bool = $signed;
            }
        )*
    };
}

impl_limits! {
    i8 => integer: true, signed: true;
    i32 => integer: true, signed: true;
    u32 => integer: true, signed: false;
    i64 => integer: true, signed: true;
    f32 => integer: false, signed: true;
    f64 => integer: false, signed: true;
}

impl Limits for bool {
    const MIN: Self = false;
    const MAX: Self = true;
    const IS_INTEGER: bool = false;
    const IS_SIGNED: bool = false;
}

impl Limits for char {
    const MIN: Self = '\0';
    const MAX: Self = char::MAX;
    const IS_INTEGER: bool = false;
    const IS_SIGNED: bool = false;
}

pub fn range_of<T: Limits>() -> String {
    format!("Range of {} is: {} to {}", type_name::<T>(), T::MIN, T::MAX)
}

/// Query by value; inference picks the type.
pub fn is_integer<T: Limits>(_: &T) -> bool {
    T::IS_INTEGER
}

pub fn is_signed<T: Limits>(_: &T) -> bool {
    T::IS_SIGNED
}

pub fn run(console: &Console) -> anyhow::Result<()> {
    console.heading("Numeric limits")?;
    say!(console, "{}", range_of::<i32>());
    say!(console, "{}", range_of::<bool>());
    say!(console, "{}", range_of::<u32>());
    // f64::MIN is the most negative finite value, not the smallest positive.
    say!(console, "{}", range_of::<f64>());
    say!(console, "smallest positive f64: {:e}", f64::MIN_POSITIVE);
    say!(console);

    let i = 43223213.23;
    say!(console, "Is i ({i}) an integer? {}", is_integer(&i));
    let j = 'h';
    say!(console, "Is j ({j}) signed? {}", is_signed(&j));
    let k = -7i8;
    say!(console, "Is k ({k}) signed? {}", is_signed(&k));
    Ok(())
}

// Pattern: Type Inference
// `let` bindings infer their type from the initializer; generic functions
// infer their type parameters from the arguments.

use crate::console::Console;
use std::any::type_name;
use std::mem::size_of_val;
use std::ops::Add;

pub fn type_of<T>(_: &T) -> &'static str {
    type_name::<T>()
}

/// Works for any `T` that can be added to itself.
pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// Left and right may differ, as long as `A + B` is defined.
pub fn add_mixed<A, B>(a: A, b: B) -> A::Output
where
    A: Add<B>,
{
    a + b
}

/// Only compiles for things that can be called with no arguments.
pub fn is_callable<F: Fn() -> R, R>(_: &F) -> bool {
    true
}

fn func() {}

fn calc() -> f64 {
    0.0
}

pub fn run(console: &Console) -> anyhow::Result<()> {
    console.heading("Type inference")?;

    let a = 45;
    let b = 34.23;
    let c = 'c';
    let d = "string";
    let e = 4344.5235_f32;

    say!(console, "a = {a:<10} inferred as {}", type_of(&a));
    say!(console, "b = {b:<10} inferred as {}", type_of(&b));
    say!(console, "c = {c:<10} inferred as {}", type_of(&c));
    say!(console, "d = {d:<10} inferred as {}", type_of(&d));
    say!(console, "e = {e:<10} inferred as {} (suffix picks the type)", type_of(&e));
    say!(console);

    console.heading("Generic functions")?;
    say!(console, "add(3, 4)                   = {}", add(3, 4));
    say!(console, "add(5.2, 2.5)               = {}", add(5.2, 2.5));
    say!(console, "add(54324.2344, 2344.3534)  = {}", add(54324.2344, 2344.3534));
    // No implicit int -> float conversion: the integer is converted explicitly.
    say!(console, "add_mixed(4545.334, 34545 as f64) = {}", add_mixed(4545.334, f64::from(34545_i32)));
    say!(console, "add_mixed(String, &str)     = {}", add_mixed(String::from("con"), "cat"));
    say!(console);

    console.heading("Function item types")?;
    say!(console, "func is callable: {}", is_callable(&func));
    say!(console, "calc is callable: {}", is_callable(&calc));
    // is_callable(&addition) would not compile: i32 does not implement Fn.
    let addition = 0;
    say!(console, "addition is {}, not a function", type_of(&addition));
    say!(
        console,
        "each fn item has its own zero-sized type: size_of_val(&func) = {}",
        size_of_val(&func)
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inferred_names() {
        assert_eq!(type_of(&45), "i32");
        assert_eq!(type_of(&34.23), "f64");
        assert_eq!(type_of(&'c'), "char");
        assert_eq!(type_of(&"s"), "&str");
    }

    #[test]
    fn test_add() {
        assert_eq!(add(3, 4), 7);
        assert_eq!(add(5.0, 2.5), 7.5);
        assert_eq!(add_mixed(String::from("a"), "b"), "ab");
    }

    #[test]
    fn test_fn_items_are_zero_sized() {
        assert_eq!(size_of_val(&func), 0);
        assert!(is_callable(&calc));
    }
}

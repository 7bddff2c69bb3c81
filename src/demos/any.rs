// Pattern: Type-Erased Values
// Box<dyn Any> holds a value of any 'static type; downcast_ref recovers it
// only when asked for the right type.

use crate::console::Console;
use std::any::Any;

pub fn describe(value: &dyn Any) -> String {
    if let Some(s) = value.downcast_ref::<String>() {
        s.clone()
    } else if let Some(n) = value.downcast_ref::<i32>() {
        n.to_string()
    } else if let Some(x) = value.downcast_ref::<f32>() {
        x.to_string()
    } else if let Some(b) = value.downcast_ref::<bool>() {
        b.to_string()
    } else {
        "<unknown>".to_string()
    }
}

pub fn sample() -> Vec<Box<dyn Any>> {
    vec![
        Box::new(String::from("hello")),
        Box::new(1344_i32),
        Box::new(344.324_f32),
        Box::new(true),
        Box::new('?'),
    ]
}

pub fn run(console: &Console) -> anyhow::Result<()> {
    console.heading("Vec<Box<dyn Any>>")?;
    let values = sample();
    let rendered: Vec<String> = values.iter().map(|v| describe(v.as_ref())).collect();
    say!(console, "{}", rendered.join(" "));

    // Asking for the wrong type is a None, not a crash.
    let first = &values[0];
    say!(console, "first as i32: {:?}", first.downcast_ref::<i32>());
    say!(console, "first is String: {}", first.is::<String>());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_each() {
        let described: Vec<String> = sample().iter().map(|v| describe(v.as_ref())).collect();
        assert_eq!(described, vec!["hello", "1344", "344.324", "true", "<unknown>"]);
    }
}

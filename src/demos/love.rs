// Pattern: Named Methods over Surprising Operators
// Combining efforts is addition, so it gets a name instead of `*`.

use crate::console::Console;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Love {
    value: f64,
}

impl Love {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Efforts add up; a zero response never cancels them.
    pub fn combine(self, other: Love) -> Love {
        Love::new(self.value + other.value)
    }
}

impl fmt::Display for Love {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

pub fn run(console: &Console) -> anyhow::Result<()> {
    console.heading("Love")?;
    let efforts = Love::new(99999.99);
    let response = Love::new(0.0);
    say!(console, "efforts.combine(response) = {}", efforts.combine(response));
    say!(console, "plain multiplication would give {}", efforts.value() * response.value());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_adds() {
        let total = Love::new(99999.99).combine(Love::new(0.0));
        assert_eq!(total.value(), 99999.99);
        assert_eq!(total.to_string(), "99999.99");
    }
}

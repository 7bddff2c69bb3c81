// Pattern: Modules Keep Same-Named Functions Apart
// Glob-importing both modules would make `print` ambiguous; qualified paths
// or a renaming `use` say exactly which one is meant.

use crate::console::Console;

pub mod plain {
    pub fn print(text: &str) -> String {
        text.to_string()
    }
}

pub mod reversed {
    pub fn print(text: &str) -> String {
        text.chars().rev().collect()
    }
}

use reversed::print as print_reversed;

pub fn run(console: &Console) -> anyhow::Result<()> {
    console.heading("Namespaces")?;
    say!(console, "plain::print(\"Hello\")    -> {}", plain::print("Hello"));
    say!(console, "reversed::print(\"Hello\") -> {}", reversed::print("Hello"));
    say!(console, "print_reversed(\"Dhaval\") -> {}", print_reversed("Dhaval"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_prints() {
        assert_eq!(plain::print("Hello"), "Hello");
        assert_eq!(reversed::print("Hello"), "olleH");
    }
}

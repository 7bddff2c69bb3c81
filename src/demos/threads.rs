//! Pattern: Threads Sharing One Output Lock
//!
//! Two workers run on their own threads. Each writes its whole block while
//! holding the console lock, so the blocks may come in either order but never
//! interleave. The demo waits for both before returning.

use crate::config::ThreadSettings;
use crate::console::Console;
use anyhow::anyhow;
use std::io;
use std::thread;

pub fn greeting_block(number: i64) -> Vec<String> {
    vec![format!("Hello thread! Received number: {number}")]
}

pub fn table_block(base: u64) -> Vec<String> {
    (1..=10u64)
        .map(|i| format!("{base} x {i} = {}", u128::from(base) * u128::from(i)))
        .collect()
}

fn write_block(console: &Console, lines: &[String]) -> io::Result<()> {
    console.block(|w| {
        for line in lines {
            writeln!(w, "{line}")?;
        }
        Ok(())
    })
}

pub fn run(console: &Console, settings: &ThreadSettings) -> anyhow::Result<()> {
    console.heading("Threads and a mutex")?;
    let greeting = greeting_block(settings.greeting_number);
    let table = table_block(settings.table_base);

    thread::scope(|s| -> anyhow::Result<()> {
        let t1 = s.spawn(|| write_block(console, &greeting));
        let t2 = s.spawn(|| write_block(console, &table));

        t1.join().map_err(|_| anyhow!("greeting thread panicked"))??;
        t2.join().map_err(|_| anyhow!("table thread panicked"))??;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_block() {
        let table = table_block(25);
        assert_eq!(table.len(), 10);
        assert_eq!(table[0], "25 x 1 = 25");
        assert_eq!(table[9], "25 x 10 = 250");
    }

    #[test]
    fn test_large_base_does_not_overflow() {
        let table = table_block(u64::MAX);
        assert_eq!(table[9], format!("{} x 10 = {}", u64::MAX, u128::from(u64::MAX) * 10));
    }

    #[test]
    fn test_blocks_are_whole() {
        for _ in 0..20 {
            let (console, buffer) = Console::capture();
            run(&console, &ThreadSettings::default()).unwrap();

            let lines = buffer.lines();
            let body = &lines[1..];
            assert_eq!(body.len(), 11);

            let greeting = "Hello thread! Received number: 42";
            let expected_table = table_block(25);
            if body[0] == greeting {
                assert_eq!(&body[1..], expected_table.as_slice());
            } else {
                assert_eq!(&body[..10], expected_table.as_slice());
                assert_eq!(body[10], greeting);
            }
        }
    }
}

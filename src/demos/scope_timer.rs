// Pattern: RAII Timer
// The guard records a start time and reports when it is dropped, however
// the scope is left.

use crate::config::TimerSettings;
use crate::console::Console;
use std::fmt::Write as _;
use std::hint::black_box;
use std::time::{Duration, Instant};

pub struct ScopeTimer<'c> {
    label: &'static str,
    start: Instant,
    console: &'c Console,
}

impl<'c> ScopeTimer<'c> {
    pub fn start(label: &'static str, console: &'c Console) -> Self {
        Self {
            label,
            start: Instant::now(),
            console,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for ScopeTimer<'_> {
    fn drop(&mut self) {
        let ms = self.elapsed().as_secs_f64() * 1000.0;
        let _ = self
            .console
            .line(format!("Timer '{}' took {ms:.3} ms", self.label));
    }
}

pub fn build_greetings(iterations: usize) -> String {
    let mut out = String::new();
    for _ in 0..iterations {
        let _ = writeln!(out, "Hello");
    }
    out
}

pub fn run(console: &Console, settings: &TimerSettings) -> anyhow::Result<()> {
    console.heading("Scope timer")?;
    let bytes = {
        let _timer = ScopeTimer::start("greetings", console);
        black_box(build_greetings(settings.iterations)).len()
    };
    say!(console, "built {} lines ({bytes} bytes)", settings.iterations);

    let _outer = ScopeTimer::start("whole demo", console);
    say!(console, "leaving the demo stops the outer timer");
    Ok(())
}

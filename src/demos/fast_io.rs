// Pattern: Buffered Output
// Every unbuffered `writeln!` reaches the underlying writer; BufWriter
// batches them into a few large writes.

use crate::config::FastIoSettings;
use crate::console::Console;
use anyhow::Context;
use std::io::{self, BufWriter, Write};
use std::time::{Duration, Instant};

/// Counts how often, and with how much, it is written to.
#[derive(Debug, Default)]
pub struct CountingSink {
    pub writes: usize,
    pub bytes: usize,
}

impl Write for CountingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes += 1;
        self.bytes += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Measurement {
    pub writes: usize,
    pub bytes: usize,
    pub elapsed: Duration,
}

pub fn write_lines<W: Write>(out: &mut W, lines: usize) -> io::Result<()> {
    for i in 0..lines {
        writeln!(out, "{i}")?;
    }
    out.flush()
}

pub fn measure_unbuffered(lines: usize) -> io::Result<Measurement> {
    let mut sink = CountingSink::default();
    let start = Instant::now();
    write_lines(&mut sink, lines)?;
    Ok(Measurement {
        writes: sink.writes,
        bytes: sink.bytes,
        elapsed: start.elapsed(),
    })
}

pub fn measure_buffered(lines: usize) -> io::Result<Measurement> {
    let mut sink = CountingSink::default();
    let start = Instant::now();
    {
        let mut out = BufWriter::new(&mut sink);
        write_lines(&mut out, lines)?;
    }
    Ok(Measurement {
        writes: sink.writes,
        bytes: sink.bytes,
        elapsed: start.elapsed(),
    })
}

pub fn run(console: &Console, settings: &FastIoSettings) -> anyhow::Result<()> {
    console.heading("Buffered output")?;
    let lines = settings.lines;
    let unbuffered = measure_unbuffered(lines).context("unbuffered write failed")?;
    let buffered = measure_buffered(lines).context("buffered write failed")?;

    console.block(|w| {
        writeln!(w, "{lines} lines, {} bytes each way", unbuffered.bytes)?;
        for (label, m) in [("unbuffered", unbuffered), ("BufWriter", buffered)] {
            writeln!(
                w,
                "{label:<11} {:>8} writes in {:.3}s",
                m.writes,
                m.elapsed.as_secs_f64()
            )?;
        }
        Ok(())
    })?;
    Ok(())
}

// Pattern: Conditional Compilation
// cfg! is a compile-time boolean; #[cfg] removes items from the build.

use crate::console::Console;

pub fn platform() -> &'static str {
    if cfg!(target_os = "windows") {
        "Windows"
    } else if cfg!(target_os = "linux") {
        "Linux"
    } else if cfg!(target_os = "macos") {
        "MacOS"
    } else {
        "Unknown OS"
    }
}

#[cfg(debug_assertions)]
pub fn build_profile() -> &'static str {
    "debug"
}

#[cfg(not(debug_assertions))]
pub fn build_profile() -> &'static str {
    "release"
}

pub fn pointer_width() -> u32 {
    usize::BITS
}

/// `rust-version` from the manifest, baked in at compile time.
pub fn minimum_rustc() -> &'static str {
    match env!("CARGO_PKG_RUST_VERSION") {
        "" => "unspecified",
        version => version,
    }
}

pub fn run(console: &Console) -> anyhow::Result<()> {
    console.heading("Conditional compilation")?;
    say!(console, "Running on {}", platform());
    say!(console, "Build profile: {}", build_profile());
    say!(console, "Pointer width: {} bits", pointer_width());
    say!(console, "Minimum rustc: {}", minimum_rustc());
    say!(
        console,
        "Little endian target: {}",
        cfg!(target_endian = "little")
    );
    Ok(())
}

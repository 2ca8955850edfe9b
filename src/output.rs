//! Process-wide output mutex guarding `--print-incumbents` progress lines,
//! so interleaved writes from worker threads never tear a line in half.

use std::sync::{Mutex, OnceLock};
use std::time::Duration;

static OUTPUT_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn lock() -> &'static Mutex<()> {
    OUTPUT_LOCK.get_or_init(|| Mutex::new(()))
}

/// print one progress line: `-- <ms> found <size> at <positions>`
pub fn print_incumbent(elapsed: Duration, size: usize, position: &[usize]) {
    let _guard = lock().lock().expect("output mutex poisoned");
    let positions: Vec<String> = position.iter().map(|p| p.to_string()).collect();
    println!("-- {} found {} at {}", elapsed.as_millis(), size, positions.join(" "));
}

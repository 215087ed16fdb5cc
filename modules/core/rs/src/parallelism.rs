use std::thread::available_parallelism;

use eyre::Result;

/// Clamp the requested number of worker threads to `[1, max]`.
/// Zero is a request for every available core.
fn _clamp(requested: usize, max: usize) -> usize {
    let max = max.max(1);
    match requested {
        0 => max,
        x => x.min(max),
    }
}

/// Number of worker threads to use given the user request and the number of available cores.
pub fn available(requested: usize) -> Result<usize> {
    let max = available_parallelism()?.get();
    Ok(_clamp(requested, max))
}

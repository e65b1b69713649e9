//! Run-time measurement helpers for the CLI summary lines.

use std::time::Duration;

/// Formats a duration as HH:MM:SS.d (tenths of a second).
#[must_use]
pub fn format_elapsed(d: Duration) -> String {
    let total_secs = d.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    let tenths = d.subsec_millis() / 100;
    format!("{hours:02}:{minutes:02}:{seconds:02}.{tenths}")
}

/// Returns peak resident set size in bytes, or None if unavailable.
#[must_use]
pub fn peak_memory_bytes() -> Option<u64> {
    #[cfg(any(target_os = "macos", target_os = "linux"))]
    {
        use std::mem::MaybeUninit;
        let mut usage = MaybeUninit::<libc::rusage>::uninit();
        // SAFETY: `getrusage` with `RUSAGE_SELF` and a pointer to a properly
        // sized and aligned `rusage` struct is well-defined.
        let ret = unsafe { libc::getrusage(libc::RUSAGE_SELF, usage.as_mut_ptr()) };
        if ret == 0 {
            // SAFETY: a zero return guarantees the struct was initialized.
            let usage = unsafe { usage.assume_init() };
            // ru_maxrss is bytes on macOS, kilobytes on Linux.
            let bytes = if cfg!(target_os = "macos") {
                usage.ru_maxrss as u64
            } else {
                usage.ru_maxrss as u64 * 1024
            };
            return Some(bytes);
        }
    }
    None
}

/// Formats a byte count as a human-readable string (B, KB, MB, GB).
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    const GB: u64 = 1024 * 1024 * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

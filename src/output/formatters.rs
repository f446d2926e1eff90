//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for a score ratio in percent
#[must_use]
pub fn ratio_bar(ratio: f64, width: usize) -> String {
    create_progress_bar(ratio, 100.0, width)
}

/// Short verdict for a score ratio
#[must_use]
pub fn ratio_verdict(ratio: f64) -> &'static str {
    if ratio >= 100.0 {
        "Perfect!"
    } else if ratio >= 75.0 {
        "Great!"
    } else if ratio >= 50.0 {
        "Good"
    } else {
        "Keep practicing"
    }
}

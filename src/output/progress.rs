use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for the check run.
///
/// Draws on stderr so formatted output on stdout stays clean; disabled in
/// quiet mode or when stderr is not a TTY. Thread-safe for use with rayon
/// parallel iterators.
pub struct ScanProgress {
    bar: ProgressBar,
}

impl ScanProgress {
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let bar = if quiet || !std::io::stderr().is_terminal() {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new(total);
            bar.set_style(
                ProgressStyle::with_template("[{bar:40}] {pos}/{len} files").map_or_else(
                    |_| ProgressStyle::default_bar(),
                    |style| style.progress_chars("=> "),
                ),
            );
            bar
        };
        Self { bar }
    }

    pub fn inc(&self) {
        self.bar.inc(1);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;

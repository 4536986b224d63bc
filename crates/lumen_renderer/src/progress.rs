//! Row progress reporting and cooperative cancellation.

use indicatif::{ProgressBar, ProgressState, ProgressStyle};
use std::fmt::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Status line template for a render at `samples_per_pixel`.
fn template(samples_per_pixel: u32) -> String {
    format!("Rendering ({} spp) {{percent_2}}%", samples_per_pixel)
}

fn style(samples_per_pixel: u32) -> ProgressStyle {
    match ProgressStyle::with_template(&template(samples_per_pixel)) {
        Ok(style) => style.with_key(
            "percent_2",
            |state: &ProgressState, w: &mut dyn Write| {
                let _ = write!(w, "{:5.2}", state.fraction() * 100.0);
            },
        ),
        Err(err) => {
            log::warn!("Falling back to the default progress style: {}", err);
            ProgressStyle::default_bar()
        }
    }
}

/// Row counter shared by the render workers, drawn as a status line on
/// stderr.
pub struct Progress {
    bar: ProgressBar,
}

impl Progress {
    /// Progress for `total_rows` rows, drawn on stderr.
    pub fn new(total_rows: usize, samples_per_pixel: u32) -> Self {
        let bar = ProgressBar::new(total_rows as u64);
        bar.set_style(style(samples_per_pixel));
        Self { bar }
    }

    /// Progress that only counts.
    pub fn hidden(total_rows: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total_rows as u64);
        Self { bar }
    }

    /// Record one finished row.
    pub fn row_finished(&self) {
        self.bar.inc(1);
    }

    /// Leave the final status line in place.
    pub fn finish(&self) {
        self.bar.finish();
    }

    /// Rows finished so far.
    pub fn rows_done(&self) -> usize {
        self.bar.position() as usize
    }
}

/// Shared flag asking a render to stop at the next row boundary.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Rows already in flight still complete.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_counts_rows() {
        let progress = Progress::hidden(4);
        assert_eq!(progress.rows_done(), 0);
        progress.row_finished();
        assert_eq!(progress.rows_done(), 1);
        for _ in 0..3 {
            progress.row_finished();
        }
        assert_eq!(progress.rows_done(), 4);
        progress.finish();
        assert_eq!(progress.rows_done(), 4);
    }

    #[test]
    fn test_progress_counts_across_threads() {
        let progress = Progress::hidden(1000);
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..250 {
                        progress.row_finished();
                    }
                });
            }
        });
        assert_eq!(progress.rows_done(), 1000);
    }

    #[test]
    fn test_status_template() {
        assert_eq!(template(16), "Rendering (16 spp) {percent_2}%");
        assert!(ProgressStyle::with_template(&template(16)).is_ok());
    }

    #[test]
    fn test_visible_progress_counts_rows() {
        // Draws nowhere when stderr is not a terminal
        let progress = Progress::new(3, 4);
        progress.row_finished();
        progress.row_finished();
        assert_eq!(progress.rows_done(), 2);
        progress.finish();
    }

    #[test]
    fn test_cancel_token_is_shared() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }
}

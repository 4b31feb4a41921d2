//! Progress display for large query batches

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_MIN_QUERIES};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Queries solved between progress bar redraws
const UPDATE_INTERVAL: usize = 4_096;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Queries: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for batch solving
///
/// Batches below [`PROGRESS_MIN_QUERIES`] finish too quickly to be worth a
/// bar, so no bar is created for them.
#[derive(Default)]
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a progress manager with no bar yet
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Prepare a bar for `query_count` queries if the batch is large enough
    pub fn initialize(&mut self, query_count: usize) {
        if query_count >= PROGRESS_MIN_QUERIES {
            let bar = ProgressBar::new(query_count as u64);
            bar.set_style(BATCH_STYLE.clone());
            self.bar = Some(bar);
        }
    }

    /// Whether a bar is being displayed
    pub const fn is_active(&self) -> bool {
        self.bar.is_some()
    }

    /// Report that the query at zero-based `index` has been solved
    pub fn record(&self, index: usize) {
        let solved = index + 1;
        if let Some(ref bar) = self.bar {
            if solved % UPDATE_INTERVAL == 0 {
                bar.set_position(solved as u64);
            }
        }
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}

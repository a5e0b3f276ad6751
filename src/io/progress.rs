//! Multi-variation progress tracking with automatic batching for large runs

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Coordinates progress display for a batch of mosaic variations
///
/// Shows one bar per variation for small batches and adds a single batch
/// bar once the count exceeds `MAX_INDIVIDUAL_PROGRESS_BARS`, keeping only
/// the most recent variations visible.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    variation_bars: Vec<ProgressBar>,
    /// Stores (`label`, `current_stage`, `stage_count`) for rolling window display
    variation_states: Vec<(String, usize, usize)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>16} [{bar:30.cyan/blue}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Mosaics: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            variation_bars: Vec::new(),
            variation_states: Vec::new(),
        }
    }

    /// Initialize progress bars based on variation count
    pub fn initialize(&mut self, variation_count: usize) {
        if variation_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(variation_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = variation_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new(0);
            pb.set_style(STAGE_STYLE.clone());
            self.variation_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Register a variation and the number of stages it will go through
    pub fn start_variation(&mut self, index: usize, label: &str, stage_count: usize) {
        if index >= self.variation_states.len() {
            self.variation_states
                .resize(index + 1, (String::new(), 0, 0));
        }
        if let Some(state) = self.variation_states.get_mut(index) {
            *state = (label.to_string(), 0, stage_count);
        }
        self.update_bars(None);
    }

    /// Advance a variation to its next stage
    pub fn advance(&mut self, index: usize, stage: &str) {
        if let Some(state) = self.variation_states.get_mut(index) {
            state.1 = (state.1 + 1).min(state.2);
        }
        self.update_bars(Some((index, stage)));
    }

    /// Mark a variation as completed and update batch progress
    pub fn complete_variation(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.variation_states.get_mut(index) {
            state.0 = format!("✓ {}", state.0);
            state.1 = state.2;
        }
        self.update_bars(Some((index, "done")));
    }

    /// True when a batch bar tracks overall progress
    pub const fn has_batch_bar(&self) -> bool {
        self.batch_bar.is_some()
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All mosaics generated");
        }
        let _ = self.multi_progress.clear();
    }

    /// Suspend bar drawing while writing a line to stderr
    pub fn println(&self, line: &str) {
        let _ = self.multi_progress.println(line);
    }

    /// Redraw the bars for the last N registered variations
    fn update_bars(&self, stage: Option<(usize, &str)>) {
        let active: Vec<(usize, &(String, usize, usize))> = self
            .variation_states
            .iter()
            .enumerate()
            .filter(|(_, (label, _, _))| !label.is_empty())
            .collect();

        let start_idx = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, (variation_idx, (label, current, max))) in visible.iter().enumerate() {
            if let Some(bar) = self.variation_bars.get(bar_idx) {
                bar.set_length(*max as u64);
                bar.set_position(*current as u64);
                bar.set_prefix(label.clone());
                if let Some((index, message)) = stage
                    && index == *variation_idx
                {
                    bar.set_message(message.to_string());
                }
            }
        }

        for bar_idx in visible.len()..self.variation_bars.len() {
            if let Some(bar) = self.variation_bars.get(bar_idx) {
                bar.set_length(0);
                bar.set_position(0);
                bar.set_message(String::new());
                bar.set_prefix(String::new());
            }
        }
    }
}

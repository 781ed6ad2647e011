//! Stage timing and progress display for a generation run

use crate::io::configuration::{PROGRESS_BAR_WIDTH, SPINNER_TICK_MS};
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;
use std::time::{Duration, Instant};

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static CELL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} cells"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Reports each pipeline stage as a spinner that finishes with its duration
///
/// A hidden reporter still tracks timings, so callers don't branch on `--quiet`.
pub struct ProgressReporter {
    multi_progress: MultiProgress,
    current: Option<(ProgressBar, String, Instant)>,
    started: Instant,
    completed: Vec<(String, Duration)>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    /// Create a reporter drawing to stderr
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    /// Create a reporter that draws nothing
    pub fn hidden() -> Self {
        Self::with_target(ProgressDrawTarget::hidden())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        Self {
            multi_progress: MultiProgress::with_draw_target(target),
            current: None,
            started: Instant::now(),
            completed: Vec::new(),
        }
    }

    /// Start a spinner stage, finishing any stage still running
    pub fn begin_stage(&mut self, name: &str) {
        self.finish_stage();

        let bar = self.multi_progress.add(ProgressBar::new_spinner());
        bar.set_style(SPINNER_STYLE.clone());
        bar.set_message(format!("{name}..."));
        bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        self.current = Some((bar, name.to_string(), Instant::now()));
    }

    /// Start a stage that counts solved cells
    pub fn begin_cell_stage(&mut self, name: &str, total_cells: usize) {
        self.finish_stage();

        let bar = self
            .multi_progress
            .add(ProgressBar::new(total_cells as u64));
        bar.set_style(CELL_STYLE.clone());
        bar.set_message(name.to_string());
        self.current = Some((bar, name.to_string(), Instant::now()));
    }

    /// Update the running cell stage
    pub fn set_cells(&self, cells: usize) {
        if let Some((bar, _, _)) = &self.current {
            bar.set_position(cells as u64);
        }
    }

    /// Restart the running cell stage's counter for another attempt
    pub fn restart_cells(&self, attempt: u32, seed: u64) {
        if let Some((bar, name, _)) = &self.current {
            bar.reset();
            bar.set_message(format!("{name} (attempt {attempt}, seed {seed})"));
        }
    }

    /// Finish the running stage and record its duration
    pub fn finish_stage(&mut self) {
        if let Some((bar, name, started)) = self.current.take() {
            let elapsed = started.elapsed();
            bar.finish_with_message(format!("{name} took {elapsed:.2?}"));
            self.completed.push((name, elapsed));
        }
    }

    /// Abandon the running stage without recording it
    pub fn abandon_stage(&mut self) {
        if let Some((bar, name, _)) = self.current.take() {
            bar.abandon_with_message(format!("{name} failed"));
        }
    }

    /// Print a line above the progress display
    pub fn note(&self, message: &str) {
        // Terminal write failures never abort a run
        let _ = self.multi_progress.println(message);
    }

    /// Durations of every finished stage, in order
    pub fn completed_stages(&self) -> &[(String, Duration)] {
        &self.completed
    }

    /// Time since the reporter was created
    pub fn total_elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

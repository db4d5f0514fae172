use std::sync::Mutex;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use lazy_static::lazy_static;

lazy_static! {
    // Bar currently drawn on the terminal, if any
    static ref ACTIVE_BAR: Mutex<Option<ProgressBar>> = Mutex::new(None);
}

fn active_bar() -> Option<ProgressBar> {
    match ACTIVE_BAR.lock() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

fn set_active_bar(bar: Option<ProgressBar>) {
    match ACTIVE_BAR.lock() {
        Ok(mut guard) => *guard = bar,
        Err(poisoned) => *poisoned.into_inner() = bar,
    }
}

/// Run `f` with the visible progress bar cleared, redrawing it afterwards
///
/// Console output written inside `f` lands above the bar instead of being
/// torn up by its redraws. Without a visible bar `f` simply runs.
pub fn suspend<F: FnOnce() -> R, R>(f: F) -> R {
    match active_bar() {
        Some(bar) => bar.suspend(f),
        None => f(),
    }
}

/// Whether a visible progress bar is currently registered
pub fn has_active_bar() -> bool {
    active_bar().is_some()
}

pub struct ProgressTracker {
    bar: ProgressBar,
    visible: bool,
}

impl ProgressTracker {
    pub fn new(total: u64, description: &str) -> Self {
        let bar = ProgressBar::new(total);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            bar.set_style(style.progress_chars("#>-"));
        }
        bar.set_message(description.to_string());
        set_active_bar(Some(bar.clone()));

        ProgressTracker {
            bar,
            visible: true,
        }
    }

    /// Tracker that counts but never draws
    pub fn hidden(total: u64) -> Self {
        let bar = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::hidden());
        ProgressTracker {
            bar,
            visible: false,
        }
    }

    pub fn increment(&self, amount: u64) {
        self.bar.inc(amount);
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("Completed");
        self.release();
    }

    pub fn set_message(&self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    fn release(&self) {
        if self.visible {
            set_active_bar(None);
        }
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.release();
    }
}

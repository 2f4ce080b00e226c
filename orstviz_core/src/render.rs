//! Terminal rendering of session frames.
//!
//! Each value is drawn as a bar whose height is scaled to the configured maximum. Settled indices
//! are green, compared ones red, swapped ones yellow and everything else blue, in that order of
//! precedence.

use std::fmt::Display;

use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};

use crate::orst::Algorithm;
use crate::session::Frame;

const LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// How a single index is drawn in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Settled,
    Compared,
    Swapped,
    Plain,
}

impl Shade {
    pub fn of(frame: &Frame, index: usize) -> Self {
        let h = &frame.highlights;
        if h.settled.contains(&index) {
            Shade::Settled
        } else if h.compared.contains(&index) {
            Shade::Compared
        } else if h.swapped.contains(&index) {
            Shade::Swapped
        } else {
            Shade::Plain
        }
    }

    fn paint(self, s: &str) -> ColoredString {
        match self {
            Shade::Settled => s.green().bold(),
            Shade::Compared => s.red().bold(),
            Shade::Swapped => s.yellow().bold(),
            Shade::Plain => s.blue(),
        }
    }
}

/// The bar glyph for `value` on a scale from 0 to `max`.
pub fn level(value: u32, max: u32) -> char {
    if max == 0 {
        return LEVELS[0];
    }
    let idx = (value.min(max) as usize * (LEVELS.len() - 1)) / max as usize;
    LEVELS[idx]
}

/// One line: the bars, the values and the counters.
pub fn line(frame: &Frame, max: u32) -> String {
    let mut bars = String::new();
    let mut values = Vec::with_capacity(frame.array.len());

    for (i, &v) in frame.array.iter().enumerate() {
        let shade = Shade::of(frame, i);
        bars.push_str(&shade.paint(&level(v, max).to_string()).to_string());
        values.push(shade.paint(&v.to_string()).to_string());
    }

    format!(
        "{bars}  [{}]  comparisons: {} swaps: {}",
        values.join(", "),
        frame.stats.comparisons.to_string().bold(),
        frame.stats.swaps.to_string().bold()
    )
}

/// Animated view of a run: a spinner whose message is the latest frame.
pub struct Renderer {
    bar: ProgressBar,
    max: u32,
}

impl Renderer {
    pub fn new(algorithm: Algorithm, max: u32) -> anyhow::Result<Self> {
        let bar = ProgressBar::new_spinner();
        bar.set_style(ProgressStyle::with_template(
            "{prefix:.bold} -> {spinner:.green} [{elapsed_precise}] {msg}",
        )?);
        bar.set_prefix(algorithm.name());

        Ok(Self { bar, max })
    }

    pub fn draw(&self, frame: &Frame) {
        self.bar.set_message(line(frame, self.max));
        self.bar.tick();
    }

    pub fn finish(&self) {
        self.bar.finish();
    }
}

/// Prints a `==> header: value` status line.
pub fn print_info<T: Display>(header: &str, value: T) {
    println!(
        "{} {header}: {}",
        "==>".green().bold(),
        value.to_string().bold().cyan()
    );
}

/// Prints a `==> header: message` line for something that went wrong but was recovered from.
pub fn print_warning<T: Display>(header: &str, message: T) {
    println!(
        "{} {header}: {}",
        "==>".yellow().bold(),
        message.to_string().italic()
    );
}

/// Formats values the way the status lines show arrays.
pub fn join(values: &[u32]) -> String {
    values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

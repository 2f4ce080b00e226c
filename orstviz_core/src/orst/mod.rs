//! Step-wise implementations of the classic sorting algorithms, based on the sorters from [Crust of
//! Rust: Sorting Algorithms](https://www.youtube.com/watch?v=h4RkCyJyXmM) but broken up so that
//! every comparison and every swap can be looked at before the next one happens.
//!
//! Each algorithm comes in two flavours:
//!
//! - an [`Engine`] (the `*Stepper` types) which performs exactly one atomic unit of work per call
//!   to [`Engine::step`] and reports the indices it touched, and
//! - a zero sized [`Sorter`] which simply drives its engine until it is done.
//!
//! # Example
//!
//! ```
//! use orstviz_core::orst::{BubbleSorter, BubbleStepper, Engine, Sorter, Stats, Step};
//!
//! let mut slice = vec![1, 3, 2, 5, 4];
//! BubbleSorter.sort(&mut slice);
//! assert_eq!(vec![1, 2, 3, 4, 5], slice);
//!
//! let mut slice = vec![5, 3, 8, 1];
//! let mut engine = BubbleStepper::new();
//! let mut stats = Stats::default();
//! while let Step::Progress(_) = engine.step(slice.as_mut_slice(), &mut stats) {}
//! assert_eq!(slice, [1, 3, 5, 8]);
//! assert_eq!(stats, Stats { comparisons: 6, swaps: 4 });
//! ```

pub mod benchmark;
mod sorters;

use std::fmt::{self, Display};
use std::str::FromStr;

use clap::ValueEnum;

pub use sorters::bubble_sorter::{BubbleSorter, BubbleStepper};
pub use sorters::insertion_sorter::{InsertionSorter, InsertionStepper};
pub use sorters::merge_sorter::{MergeSorter, MergeStepper};
pub use sorters::quick_sorter::{QuickSorter, QuickStepper};
pub use sorters::selection_sorter::{SelectionSorter, SelectionStepper};

/// The sorting algorithm must implement the trait `Sorter`.
pub trait Sorter<T>
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]);
}

/// A sorting algorithm that has been turned inside out: instead of running to completion it keeps
/// its loop indices as state and advances by one comparison, swap or placement per call.
pub trait Engine<T> {
    /// Performs one atomic unit of work on `slice`, counting it in `stats`.
    ///
    /// The length of `slice` must not change between calls.
    fn step(&mut self, slice: &mut [T], stats: &mut Stats) -> Step;

    /// Called when a run is cancelled half way. Engines that hold values outside of `slice`
    /// between steps must write them back here so that `slice` stays a permutation of its input.
    fn abandon(&mut self, _slice: &mut [T]) {}
}

impl<T, E> Engine<T> for Box<E>
where
    E: Engine<T> + ?Sized,
{
    fn step(&mut self, slice: &mut [T], stats: &mut Stats) -> Step {
        (**self).step(slice, stats)
    }

    fn abandon(&mut self, slice: &mut [T]) {
        (**self).abandon(slice)
    }
}

/// Outcome of a single [`Engine::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Some work was done. The highlights name the indices involved.
    Progress(Highlights),
    /// The slice is sorted. Nothing was done by this call.
    Done,
}

/// Indices touched by one step, tagged by what happened to them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Highlights {
    pub compared: Vec<usize>,
    pub swapped: Vec<usize>,
    pub settled: Vec<usize>,
}

impl Highlights {
    pub fn compare(mut self, a: usize, b: usize) -> Self {
        self.compared.extend([a, b]);
        self
    }

    pub fn swap(mut self, a: usize, b: usize) -> Self {
        self.swapped.extend([a, b]);
        self
    }

    /// A single index was written to. Used by merge sort which places instead of swapping.
    pub fn write(mut self, at: usize) -> Self {
        self.swapped.push(at);
        self
    }

    pub fn settle(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.settled.extend(indices);
        self
    }
}

/// Running totals of the work an [`Engine`] has done.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub comparisons: u64,
    pub swaps: u64,
}

impl Stats {
    #[inline]
    pub(crate) fn compared(&mut self) {
        self.comparisons += 1;
    }

    #[inline]
    pub(crate) fn swapped(&mut self) {
        self.swaps += 1;
    }
}

/// Drives `engine` over `slice` until it reports [`Step::Done`] and returns the final counters
/// along with the number of steps it took.
pub fn drive<T, E>(mut engine: E, slice: &mut [T]) -> (Stats, usize)
where
    E: Engine<T>,
{
    let mut stats = Stats::default();
    let mut steps = 0;
    while let Step::Progress(_) = engine.step(slice, &mut stats) {
        steps += 1;
    }
    (stats, steps)
}

/// The algorithms a [`Session`](crate::Session) can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Algorithm {
    #[value(alias = "bubble")]
    BubbleSort,
    #[value(alias = "selection")]
    SelectionSort,
    #[value(alias = "insertion")]
    InsertionSort,
    #[value(alias = "merge")]
    MergeSort,
    #[value(alias = "quick")]
    QuickSort,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::BubbleSort,
        Algorithm::SelectionSort,
        Algorithm::InsertionSort,
        Algorithm::MergeSort,
        Algorithm::QuickSort,
    ];

    /// A fresh engine for this algorithm, positioned before its first step.
    pub fn engine<T>(self) -> Box<dyn Engine<T>>
    where
        T: Ord + Clone + 'static,
    {
        match self {
            Algorithm::BubbleSort => Box::new(BubbleStepper::new()),
            Algorithm::SelectionSort => Box::new(SelectionStepper::new()),
            Algorithm::InsertionSort => Box::new(InsertionStepper::new()),
            Algorithm::MergeSort => Box::new(MergeStepper::new()),
            Algorithm::QuickSort => Box::new(QuickStepper::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "Bubble Sort",
            Algorithm::SelectionSort => "Selection Sort",
            Algorithm::InsertionSort => "Insertion Sort",
            Algorithm::MergeSort => "Merge Sort",
            Algorithm::QuickSort => "Quick Sort",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    /// Accepts the menu names ("Bubble Sort"), the variant names ("BubbleSort") and the short
    /// names ("bubble"), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        let normalized = normalized.strip_suffix("sort").unwrap_or(&normalized);

        match normalized {
            "bubble" => Ok(Algorithm::BubbleSort),
            "selection" => Ok(Algorithm::SelectionSort),
            "insertion" => Ok(Algorithm::InsertionSort),
            "merge" => Ok(Algorithm::MergeSort),
            "quick" => Ok(Algorithm::QuickSort),
            _ => Err(format!(
                "Unknown algorithm `{s}` (expected one of: {:?})",
                Algorithm::ALL.map(|a| a.name())
            )),
        }
    }
}

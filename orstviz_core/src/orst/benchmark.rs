use colored::Colorize;
use std::{cell::Cell, rc::Rc, time::Duration, time::Instant};

use prettytable::{row, Table};

use super::{drive, Algorithm, Stats};

// The `elem` is what gets compared. The `comparison_counter` is shared by every element of a slice
// and goes up on each comparison, whoever makes it.
#[derive(Clone)]
struct SortEvaluator<T> {
    elem: T,
    comparison_counter: Rc<Cell<u64>>,
}

impl<T> SortEvaluator<T> {
    fn new(elem: T, comparison_counter: Rc<Cell<u64>>) -> Self {
        Self {
            elem,
            comparison_counter,
        }
    }

    fn count(&self) {
        self.comparison_counter
            .set(self.comparison_counter.get() + 1);
    }
}

impl<T: Eq> Eq for SortEvaluator<T> {}

impl<T: PartialEq> PartialEq for SortEvaluator<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count();
        self.elem == other.elem
    }
}

// `<`, `<=`, `>` and `>=` all go through `partial_cmp`, so each of them is counted once.
impl<T: PartialOrd> PartialOrd for SortEvaluator<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.count();
        self.elem.partial_cmp(&other.elem)
    }
}

impl<T: Ord> Ord for SortEvaluator<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.count();
        self.elem.cmp(&other.elem)
    }
}

/// One line of the benchmark table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchRow {
    pub algorithm: Algorithm,
    /// What the engine reported.
    pub stats: Stats,
    /// Comparisons actually made on the elements.
    pub observed_comparisons: u64,
    pub steps: usize,
    pub sorted: Vec<u32>,
    pub elapsed: Duration,
}

/// Runs every algorithm headless on its own copy of `values`.
pub fn run_bench(values: &[u32]) -> Vec<BenchRow> {
    let counter = Rc::new(Cell::new(0));

    Algorithm::ALL
        .into_iter()
        .map(|algorithm| {
            let mut slice: Vec<_> = values
                .iter()
                .map(|&v| SortEvaluator::new(v, counter.clone()))
                .collect();

            counter.set(0);
            let now = Instant::now();
            let (stats, steps) = drive(algorithm.engine(), &mut slice);
            let elapsed = now.elapsed();

            BenchRow {
                algorithm,
                stats,
                observed_comparisons: counter.get(),
                steps,
                sorted: slice.into_iter().map(|e| e.elem).collect(),
                elapsed,
            }
        })
        .collect()
}

pub fn print_bench(values: &[u32], rows: &[BenchRow]) {
    println!(
        "{} {}",
        "List Size -> ".bold().underline().blue(),
        values.len().to_string().bold()
    );

    let mut table = Table::new();
    table.add_row(row![
        "Sorter".bold(),
        "Comparisons Made".bold(),
        "Swaps Made".bold(),
        "Steps".bold(),
        "Time Taken".bold()
    ]);

    for r in rows {
        let comparisons = if r.observed_comparisons == r.stats.comparisons {
            r.stats.comparisons.to_string().normal()
        } else {
            format!("{} ({} observed)", r.stats.comparisons, r.observed_comparisons).red()
        };

        table.add_row(row![
            r.algorithm.name(),
            comparisons,
            r.stats.swaps.to_string(),
            r.steps.to_string(),
            format!("{:?}", r.elapsed)
        ]);
    }

    table.printstd();
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counted_comparisons_are_real_comparisons() {
        let values = [120, 45, 300, 10, 77, 45, 200, 150, 99, 10, 260];
        let mut expected = values.to_vec();
        expected.sort();

        for row in run_bench(&values) {
            assert_eq!(
                row.observed_comparisons, row.stats.comparisons,
                "{}",
                row.algorithm
            );
            assert_eq!(row.sorted, expected, "{}", row.algorithm);
        }
    }
}

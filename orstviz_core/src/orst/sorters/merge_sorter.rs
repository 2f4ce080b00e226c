use crate::orst::{Engine, Highlights, Sorter, Stats, Step};

/// An implementation of [Merge Sort](https://en.wikipedia.org/wiki/Merge_sort)
///
/// # Usage
///```
/// use orstviz_core::orst::{MergeSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// MergeSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Merge sort is a divide-and-conquer algorithm invented by John von Neumann in 1945. The range is
/// split in half, both halves are sorted recursively, and the two sorted halves are then merged by
/// repeatedly taking the smaller of their heads. On ties the left head is taken, which makes the
/// sort stable.
pub struct MergeSorter;

impl<T> Sorter<T> for MergeSorter
where
    T: Ord + Clone,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        crate::orst::drive(MergeStepper::new(), slice);
    }
}

// Work left to do, innermost on top. Bounds are inclusive.
#[derive(Debug, Clone, Copy)]
enum Task {
    Sort { lo: usize, hi: usize },
    Merge { lo: usize, mid: usize, hi: usize },
}

/// A merge in flight: copies of both runs and a cursor into each.
#[derive(Debug, Clone)]
struct Run<T> {
    left: Vec<T>,
    right: Vec<T>,
    lo: usize,
    mid: usize,
    l: usize,
    r: usize,
    out: usize,
}

impl<T> Run<T>
where
    T: Ord + Clone,
{
    fn new(slice: &[T], lo: usize, mid: usize, hi: usize) -> Self {
        Self {
            left: slice[lo..=mid].to_vec(),
            right: slice[mid + 1..=hi].to_vec(),
            lo,
            mid,
            l: 0,
            r: 0,
            out: lo,
        }
    }

    /// Writes the next element of the merged output, or returns `None` once both runs are
    /// drained.
    fn place(&mut self, slice: &mut [T], stats: &mut Stats) -> Option<Highlights> {
        let mut highlights = Highlights::default();

        let from_left = match (self.left.get(self.l), self.right.get(self.r)) {
            (Some(left), Some(right)) => {
                stats.compared();
                highlights = highlights.compare(self.lo + self.l, self.mid + 1 + self.r);
                left <= right
            }
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => return None,
        };

        slice[self.out] = if from_left {
            self.l += 1;
            self.left[self.l - 1].clone()
        } else {
            self.r += 1;
            self.right[self.r - 1].clone()
        };
        stats.swapped();
        highlights = highlights.write(self.out);
        self.out += 1;

        Some(highlights)
    }

    /// Writes everything not yet placed back into the tail of the range.
    fn flush(self, slice: &mut [T]) {
        let rest = self.left[self.l..].iter().chain(&self.right[self.r..]);
        for (slot, value) in slice[self.out..].iter_mut().zip(rest) {
            *slot = value.clone();
        }
    }
}

/// Step-wise [`MergeSorter`].
///
/// The recursion lives on an explicit stack of [`Task`]s. Splitting ranges costs no steps; every
/// step writes exactly one element of some merge.
#[derive(Debug, Clone)]
pub struct MergeStepper<T> {
    pending: Vec<Task>,
    merging: Option<Run<T>>,
    started: bool,
}

impl<T> MergeStepper<T> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            merging: None,
            started: false,
        }
    }
}

impl<T> Default for MergeStepper<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Engine<T> for MergeStepper<T>
where
    T: Ord + Clone,
{
    fn step(&mut self, slice: &mut [T], stats: &mut Stats) -> Step {
        if !self.started {
            self.started = true;
            if !slice.is_empty() {
                self.pending.push(Task::Sort {
                    lo: 0,
                    hi: slice.len() - 1,
                });
            }
        }

        loop {
            if let Some(run) = self.merging.as_mut() {
                if let Some(highlights) = run.place(slice, stats) {
                    return Step::Progress(highlights);
                }
                self.merging = None;
            }

            match self.pending.pop() {
                None => return Step::Done,
                Some(Task::Sort { lo, hi }) if lo < hi => {
                    let mid = lo + (hi - lo) / 2;
                    self.pending.push(Task::Merge { lo, mid, hi });
                    self.pending.push(Task::Sort { lo: mid + 1, hi });
                    self.pending.push(Task::Sort { lo, hi: mid });
                }
                Some(Task::Sort { .. }) => {}
                Some(Task::Merge { lo, mid, hi }) => {
                    self.merging = Some(Run::new(slice, lo, mid, hi));
                }
            }
        }
    }

    fn abandon(&mut self, slice: &mut [T]) {
        if let Some(run) = self.merging.take() {
            run.flush(slice);
        }
        self.pending.clear();
    }
}

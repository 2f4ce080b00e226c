use crate::orst::{Engine, Highlights, Sorter, Stats, Step};

/// An implementation of [Quick Sort](https://en.wikipedia.org/wiki/Quicksort)
///
/// # Usage
///```
/// use orstviz_core::orst::{QuickSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// QuickSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Quicksort is an in-place sorting algorithm. Developed by British computer scientist Tony Hoare
/// in 1959 and published in 1961 it is still a commonly used algorithm for sorting.
///
/// # Algorithm
///
/// Quicksort is a divide-and-conquer algorithm. It works by selecting a 'pivot' element from the
/// array and partitioning the other elements into two sub-arrays, according to whether they are
/// less than or greater than the pivot. The sub-arrays are then sorted recursively.
///
/// This implementation uses the Lomuto partition scheme: the pivot is the last element of the
/// range, and a single scan from the left moves every element that is not greater than the pivot
/// into a growing low region. The pivot is then exchanged into the slot right after the low
/// region, which is its final position.
pub struct QuickSorter;

impl<T> Sorter<T> for QuickSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        crate::orst::drive(QuickStepper::new(), slice);
    }
}

#[derive(Debug, Clone, Copy)]
struct Partition {
    lo: usize,
    // the pivot sits here until the scan is over
    hi: usize,
    // first slot after the low region
    store: usize,
    scan: usize,
}

/// Step-wise [`QuickSorter`].
///
/// Every element that joins the low region counts as a swap, including the case where it is
/// already in place (`store == scan`). Placing the pivot always counts as one swap too.
#[derive(Debug, Clone, Default)]
pub struct QuickStepper {
    pending: Vec<(usize, usize)>,
    partition: Option<Partition>,
    started: bool,
}

impl QuickStepper {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> Engine<T> for QuickStepper
where
    T: Ord,
{
    fn step(&mut self, slice: &mut [T], stats: &mut Stats) -> Step {
        if !self.started {
            self.started = true;
            if !slice.is_empty() {
                self.pending.push((0, slice.len() - 1));
            }
        }

        loop {
            if let Some(part) = self.partition.as_mut() {
                let Partition { lo, hi, store, scan } = *part;

                if scan < hi {
                    stats.compared();
                    let mut highlights = Highlights::default().compare(scan, hi);
                    if slice[scan] <= slice[hi] {
                        slice.swap(store, scan);
                        stats.swapped();
                        highlights = highlights.swap(store, scan);
                        part.store += 1;
                    }
                    part.scan += 1;
                    return Step::Progress(highlights);
                }

                slice.swap(store, hi);
                stats.swapped();
                self.partition = None;

                // right half waits under the left half
                self.pending.push((store + 1, hi));
                if store > lo {
                    self.pending.push((lo, store - 1));
                }

                return Step::Progress(Highlights::default().swap(store, hi).settle([store]));
            }

            match self.pending.pop() {
                None => return Step::Done,
                Some((lo, hi)) if lo < hi => {
                    self.partition = Some(Partition {
                        lo,
                        hi,
                        store: lo,
                        scan: lo,
                    });
                }
                Some(_) => {}
            }
        }
    }
}

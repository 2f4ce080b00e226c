use crate::orst::{Engine, Highlights, Sorter, Stats, Step};

/// An implementation of [Selection Sort](https://en.wikipedia.org/wiki/Selection_sort)
///
/// # Usage
///```
/// use orstviz_core::orst::{SelectionSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// SelectionSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Selection sort is an in-place comparison sorting algorithm with an O(n2) time complexity. It
/// divides the input into a sorted prefix, which starts out empty, and an unsorted rest. Every
/// round scans the rest for its smallest element and exchanges it with the leftmost unsorted
/// element, moving the boundary one element to the right.
///
/// Unlike bubble sort, at most one exchange happens per round, and only when the smallest element
/// is not already in place.
pub struct SelectionSorter;

impl<T> Sorter<T> for SelectionSorter
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]) {
        crate::orst::drive(SelectionStepper::new(), slice);
    }
}

/// Step-wise [`SelectionSorter`]: one comparison against the current minimum per step, and one
/// step per round to exchange and settle the boundary.
#[derive(Debug, Clone)]
pub struct SelectionStepper {
    unsorted: usize,
    scan: usize,
    smallest_in_rest: usize,
}

impl SelectionStepper {
    pub fn new() -> Self {
        Self {
            unsorted: 0,
            scan: 1,
            smallest_in_rest: 0,
        }
    }
}

impl Default for SelectionStepper {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Engine<T> for SelectionStepper
where
    T: Ord,
{
    fn step(&mut self, slice: &mut [T], stats: &mut Stats) -> Step {
        if self.unsorted + 1 >= slice.len() {
            return Step::Done;
        }

        if self.scan < slice.len() {
            stats.compared();
            let highlights = Highlights::default().compare(self.scan, self.smallest_in_rest);
            if slice[self.scan] < slice[self.smallest_in_rest] {
                self.smallest_in_rest = self.scan;
            }
            self.scan += 1;
            return Step::Progress(highlights);
        }

        let (unsorted, smallest) = (self.unsorted, self.smallest_in_rest);
        let mut highlights = Highlights::default();
        if unsorted != smallest {
            slice.swap(unsorted, smallest);
            stats.swapped();
            highlights = highlights.swap(unsorted, smallest);
        }

        self.unsorted += 1;
        self.scan = self.unsorted + 1;
        self.smallest_in_rest = self.unsorted;
        Step::Progress(highlights.settle([unsorted]))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::orst::drive;

    #[test]
    fn arbitrary_array() {
        let mut slice = [1, 5, 4, 2, 3];
        SelectionSorter.sort(&mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let mut slice = (1..10).collect::<Vec<_>>();
        let (stats, _) = drive(SelectionStepper::new(), &mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
        assert_eq!(stats, Stats { comparisons: 36, swaps: 0 });
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..300).rev().collect::<Vec<_>>();
        SelectionSorter.sort(&mut slice);
        assert_eq!(slice, (1..300).collect::<Vec<_>>());
    }

    #[test]
    fn swaps_only_when_minimum_moved() {
        let mut slice = [5, 3, 8, 1];
        let (stats, steps) = drive(SelectionStepper::new(), &mut slice);

        assert_eq!(slice, [1, 3, 5, 8]);
        // [5,3,8,1] -> [1,3,8,5] -> (3 in place) -> [1,3,5,8]
        assert_eq!(stats, Stats { comparisons: 6, swaps: 2 });
        assert_eq!(steps, 6 + 3);
    }

    #[test]
    fn settles_the_boundary_each_round() {
        let mut slice = [3, 1, 2];
        let mut engine = SelectionStepper::new();
        let mut stats = Stats::default();
        let mut settled = vec![];

        while let Step::Progress(highlights) = engine.step(&mut slice, &mut stats) {
            settled.extend(highlights.settled);
        }

        assert_eq!(settled, [0, 1]);
    }

    #[test]
    fn simple_edge_cases() {
        let mut one = vec![1];
        SelectionSorter.sort(&mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![1, 2];
        SelectionSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut two = vec![2, 1];
        SelectionSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        SelectionSorter.sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }
}

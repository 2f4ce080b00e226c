use crate::orst::{Engine, Highlights, Sorter, Stats, Step};

/// An implementation of [Insertion Sort](https://en.wikipedia.org/wiki/Insertion_sort)
///
/// # Explanation
///
/// Insertion sort is a simple sorting algorithm that builds the final sorted array (or list) one
/// item at a time.
///
/// Sorting is done in-place, by iterating up the array, growing the sorted list behind it. At each
/// array-position, it checks the value there (the key) against the largest value in the sorted
/// list. If larger, it leaves the element in place and moves to the next. If smaller, the larger
/// values are moved up one slot each until the correct position for the key opens up.
///
/// # Usage
///```
/// use orstviz_core::orst::{InsertionSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// InsertionSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
pub struct InsertionSorter;

impl<T> Sorter<T> for InsertionSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        crate::orst::drive(InsertionStepper::new(), slice);
    }
}

/// Step-wise [`InsertionSorter`].
///
/// The key being inserted is carried down with the hole it leaves behind, so moving a larger
/// value up is an exchange of two neighbours. That keeps the slice a permutation of its input
/// after every step, which a cancelled run relies on.
#[derive(Debug, Clone)]
pub struct InsertionStepper {
    unsorted: usize,
    // position of the key
    hole: usize,
}

impl InsertionStepper {
    pub fn new() -> Self {
        Self {
            unsorted: 1,
            hole: 1,
        }
    }
}

impl Default for InsertionStepper {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Engine<T> for InsertionStepper
where
    T: Ord,
{
    fn step(&mut self, slice: &mut [T], stats: &mut Stats) -> Step {
        if self.unsorted >= slice.len() {
            return Step::Done;
        }

        let hole = self.hole;
        if hole > 0 && slice[hole - 1] > slice[hole] {
            stats.compared();
            slice.swap(hole - 1, hole);
            stats.swapped();
            self.hole -= 1;
            return Step::Progress(
                Highlights::default()
                    .compare(hole - 1, hole)
                    .swap(hole - 1, hole),
            );
        }

        let mut highlights = Highlights::default();
        if hole > 0 {
            // the comparison that stopped the key
            stats.compared();
            highlights = highlights.compare(hole - 1, hole);
        }

        let placed = self.unsorted;
        self.unsorted += 1;
        self.hole = self.unsorted;
        Step::Progress(highlights.settle(0..=placed))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::orst::drive;

    #[test]
    fn arbitrary_array() {
        let mut slice = [1, 5, 4, 2, 3];
        InsertionSorter.sort(&mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let mut slice = (1..10).collect::<Vec<_>>();
        let (stats, steps) = drive(InsertionStepper::new(), &mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
        assert_eq!(stats, Stats { comparisons: 8, swaps: 0 });
        assert_eq!(steps, 8);
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..300).rev().collect::<Vec<_>>();
        InsertionSorter.sort(&mut slice);
        assert_eq!(slice, (1..300).collect::<Vec<_>>());
    }

    #[test]
    fn key_moves_down_with_the_hole() {
        let mut slice = [5, 3, 8, 1];
        let mut engine = InsertionStepper::new();
        let mut stats = Stats::default();

        // 3 < 5: moved down
        engine.step(&mut slice, &mut stats);
        assert_eq!(slice, [3, 5, 8, 1]);
        // hole reached the front: placed, 0..=1 settled
        let step = engine.step(&mut slice, &mut stats);
        assert_eq!(
            step,
            Step::Progress(Highlights::default().settle([0, 1]))
        );

        while let Step::Progress(_) = engine.step(&mut slice, &mut stats) {
            let mut seen = slice;
            seen.sort();
            assert_eq!(seen, [1, 3, 5, 8]);
        }

        assert_eq!(slice, [1, 3, 5, 8]);
        assert_eq!(stats, Stats { comparisons: 5, swaps: 4 });
    }

    #[test]
    fn simple_edge_cases() {
        let mut one = vec![1];
        let (_, steps) = drive(InsertionStepper::new(), &mut one);
        assert_eq!(one, vec![1]);
        assert_eq!(steps, 0);

        let mut two = vec![1, 2];
        InsertionSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut two = vec![2, 1];
        InsertionSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        InsertionSorter.sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }
}

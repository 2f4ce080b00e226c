use crate::orst::{Engine, Highlights, Sorter, Stats, Step};

/// An implementation of [Bubble Sort](https://en.wikipedia.org/wiki/Bubble_sort)
///
/// # Usage
///```
/// use orstviz_core::orst::{BubbleSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// BubbleSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Bubble sort, sometimes referred to as sinking sort, repeatedly steps through the list,
/// compares adjacent elements and swaps them if they are in the wrong order. After pass `i` the
/// largest `i + 1` elements have "bubbled" to the end of the list and never move again.
///
/// # Algorithm
///
/// ```
/// let mut slice = vec![5, 3, 8, 1];
/// let n = slice.len();
///
/// for i in 0..n - 1 {
///     for j in 0..n - i - 1 {
///         if slice[j] > slice[j + 1] {
///             slice.swap(j, j + 1);
///         }
///     }
///     // slice[n - i - 1] is now in its final place
/// }
/// # assert_eq!(slice, [1, 3, 5, 8]);
/// ```
///
/// [`BubbleStepper`] runs the body of the inner loop once per step, plus one step at the end of
/// every pass to settle the last index of that pass.
#[derive(Default)]
pub struct BubbleSorter;

impl<T> Sorter<T> for BubbleSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        crate::orst::drive(BubbleStepper::new(), slice);
    }
}

/// Step-wise [`BubbleSorter`]. `pass` is the outer loop index and `at` the inner one.
#[derive(Debug, Default, Clone)]
pub struct BubbleStepper {
    pass: usize,
    at: usize,
}

impl BubbleStepper {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> Engine<T> for BubbleStepper
where
    T: Ord,
{
    fn step(&mut self, slice: &mut [T], stats: &mut Stats) -> Step {
        let len = slice.len();
        if self.pass + 1 >= len {
            return Step::Done;
        }

        let boundary = len - self.pass - 1;
        if self.at < boundary {
            let j = self.at;
            stats.compared();
            let mut highlights = Highlights::default().compare(j, j + 1);

            if slice[j] > slice[j + 1] {
                slice.swap(j, j + 1);
                stats.swapped();
                highlights = highlights.swap(j, j + 1);
            }

            self.at += 1;
            Step::Progress(highlights)
        } else {
            self.pass += 1;
            self.at = 0;
            Step::Progress(Highlights::default().settle([boundary]))
        }
    }
}

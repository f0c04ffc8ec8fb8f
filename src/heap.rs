use std::cmp::Ordering;

use crate::error::HeapError;

/// An array-backed binary max-heap that heap-sorts its contents on construction.
///
/// The heap is built once from a fixed collection and is read-only afterwards;
/// [`MaxHeap::sorted`] exposes the elements in ascending order. The sort is not
/// stable.
#[derive(Debug, Clone)]
pub struct MaxHeap<T> {
    data: Vec<T>,
}

impl<T> MaxHeap<T>
where
    T: Ord,
{
    /// Copies `list` into a new heap and sorts it. The input is left untouched.
    pub fn new(list: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from(list.to_vec())
    }

    /// The elements in ascending order.
    pub fn sorted(&self) -> &[T] {
        debug_assert!(self.check_sorted().is_ok(), "heap storage is not sorted");
        &self.data
    }

    pub fn into_sorted_vec(self) -> Vec<T> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Verifies that the storage is ascending.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::OutOfOrder`] with the first index whose element is
    /// greater than the one after it.
    pub fn check_sorted(&self) -> Result<(), HeapError> {
        match self.data.windows(2).position(|pair| pair[0] > pair[1]) {
            Some(index) => Err(HeapError::OutOfOrder { index }),
            None => Ok(()),
        }
    }
}

impl<T: Ord> From<Vec<T>> for MaxHeap<T> {
    /// Takes ownership of `data` and sorts it in place, without copying.
    fn from(mut data: Vec<T>) -> Self {
        heap_sort(&mut data);
        Self { data }
    }
}

impl<T: Ord> FromIterator<T> for MaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

/// Sorts `data` ascending in place using heapsort.
///
/// Runs in `O(n log n)` time and `O(1)` extra space.
pub fn heap_sort<T: Ord>(data: &mut [T]) {
    HeapRegion::new(data, |a: &T, b: &T| a < b).sort();
}

/// Sorts `data` in place with heapsort, ordering elements by `compare`.
///
/// `compare` must describe a total order. Elements it considers equal may end
/// up in any relative order.
pub fn heap_sort_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    HeapRegion::new(data, |a: &T, b: &T| compare(a, b) == Ordering::Less).sort();
}

fn left_child(index: usize) -> usize {
    2 * index + 1
}

fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// A slice viewed as a complete binary tree.
///
/// `[0, size)` holds the max-heap, `[size, len)` holds elements already in
/// their final ascending position.
struct HeapRegion<'a, T, F> {
    data: &'a mut [T],
    size: usize,
    is_less: F,
}

impl<'a, T, F> HeapRegion<'a, T, F>
where
    F: FnMut(&T, &T) -> bool,
{
    fn new(data: &'a mut [T], is_less: F) -> Self {
        let size = data.len();
        Self {
            data,
            size,
            is_less,
        }
    }

    fn sort(mut self) {
        self.build_max_heap();
        for _ in 0..self.data.len().saturating_sub(1) {
            // move the current maximum into the sorted suffix
            self.data.swap(0, self.size - 1);
            self.size -= 1;
            self.sift_down(0);
        }
    }

    fn build_max_heap(&mut self) {
        for i in (0..self.size / 2).rev() {
            self.sift_down(i);
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = left_child(index);
            if !self.is_index(left) {
                return;
            }
            let larger = self.larger_child(left, right_child(index));
            if !(self.is_less)(&self.data[index], &self.data[larger]) {
                return;
            }
            self.data.swap(index, larger);
            index = larger;
        }
    }

    // ties go to the left child
    fn larger_child(&mut self, left: usize, right: usize) -> usize {
        if self.is_index(right) && (self.is_less)(&self.data[left], &self.data[right]) {
            right
        } else {
            left
        }
    }

    fn is_index(&self, index: usize) -> bool {
        index < self.size
    }
}

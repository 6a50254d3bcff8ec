//! Circular cursor over a fixed, non-empty sequence

use crate::{CoreError, CoreResult};

/// Tracks the active item of an ordered list and wraps in both directions.
///
/// The list is fixed at construction; the cursor is always a valid index.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel<T> {
    items: Vec<T>,
    cursor: usize,
}

impl<T> Carousel<T> {
    /// Build a carousel positioned on the first item.
    ///
    /// An empty list has no valid cursor and is rejected.
    pub fn new(items: Vec<T>) -> CoreResult<Self> {
        if items.is_empty() {
            return Err(CoreError::InvalidState(
                "empty testimonial list".to_string(),
            ));
        }
        Ok(Self { items, cursor: 0 })
    }

    pub fn next(&mut self) {
        self.cursor = (self.cursor + 1) % self.items.len();
    }

    pub fn previous(&mut self) {
        let len = self.items.len();
        self.cursor = (self.cursor + len - 1) % len;
    }

    pub fn current(&self) -> &T {
        &self.items[self.cursor]
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    // Never empty, but clippy wants the pair.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_rejected() {
        let result = Carousel::<&str>::new(Vec::new());
        assert!(matches!(result, Err(CoreError::InvalidState(_))));
    }

    #[test]
    fn test_next_walks_and_wraps() {
        let mut carousel = Carousel::new(vec!["A", "B", "C"]).unwrap();
        assert_eq!(carousel.position(), 0);

        let mut seen = Vec::new();
        for _ in 0..3 {
            carousel.next();
            seen.push((carousel.position(), *carousel.current()));
        }
        assert_eq!(seen, vec![(1, "B"), (2, "C"), (0, "A")]);
    }

    #[test]
    fn test_previous_wraps_from_start() {
        let mut carousel = Carousel::new(vec![10, 20, 30]).unwrap();
        carousel.previous();
        assert_eq!(carousel.position(), 2);
        assert_eq!(*carousel.current(), 30);
    }

    #[test]
    fn test_next_n_times_is_identity() {
        for n in 1..=7 {
            let mut carousel = Carousel::new((0..n).collect::<Vec<_>>()).unwrap();
            carousel.next();
            let start = carousel.position();
            for _ in 0..n {
                carousel.next();
            }
            assert_eq!(carousel.position(), start, "n = {}", n);
        }
    }

    #[test]
    fn test_previous_inverts_next() {
        let mut carousel = Carousel::new(vec!['a', 'b', 'c', 'd']).unwrap();
        for start in 0..4 {
            while carousel.position() != start {
                carousel.next();
            }
            carousel.next();
            carousel.previous();
            assert_eq!(carousel.position(), start);
        }
    }

    #[test]
    fn test_cursor_stays_in_range() {
        // Deterministic mixed walk over several lengths
        for n in 1..=5usize {
            let mut carousel = Carousel::new(vec![(); n]).unwrap();
            for step in 0..50usize {
                if (step * 7 + n) % 3 == 0 {
                    carousel.previous();
                } else {
                    carousel.next();
                }
                assert!(carousel.position() < n);
            }
        }
    }

    #[test]
    fn test_current_after_k_steps() {
        let items = vec!["A", "B", "C"];
        for k in 0..10 {
            let mut carousel = Carousel::new(items.clone()).unwrap();
            for _ in 0..k {
                carousel.next();
            }
            assert_eq!(*carousel.current(), items[k % items.len()]);
        }
    }

    #[test]
    fn test_single_item() {
        let mut carousel = Carousel::new(vec!["only"]).unwrap();
        carousel.next();
        carousel.previous();
        carousel.previous();
        assert_eq!(carousel.position(), 0);
        assert_eq!(carousel.len(), 1);
    }
}

use crate::models::{Album, AlbumCollection};

/// Position shown by the progress indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Zero-based index of the current album
    pub index: usize,
    /// Number of albums in the crate
    pub total: usize,
}

/// Pure data structure holding the current crate and the active card.
///
/// Handles bounds and stepping without any I/O. The index is only meaningful
/// while the crate is non-empty.
#[derive(Debug, Default)]
pub struct Carousel {
    albums: Vec<Album>,
    current: usize,
}

impl Carousel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a freshly fetched crate and go back to the first card
    pub fn replace(&mut self, collection: AlbumCollection) {
        self.albums = collection.albums;
        self.current = 0;
    }

    pub fn current_index(&self) -> Option<usize> {
        (!self.albums.is_empty()).then_some(self.current)
    }

    pub fn current(&self) -> Option<&Album> {
        self.albums.get(self.current)
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    pub fn can_prev(&self) -> bool {
        !self.albums.is_empty() && self.current > 0
    }

    pub fn can_next(&self) -> bool {
        !self.albums.is_empty() && self.current + 1 < self.albums.len()
    }

    /// Move one card forward. Returns the new index, or None at the last card.
    pub fn step_next(&mut self) -> Option<usize> {
        if !self.can_next() {
            return None;
        }
        self.current += 1;
        Some(self.current)
    }

    /// Move one card back. Returns the new index, or None at the first card.
    pub fn step_prev(&mut self) -> Option<usize> {
        if !self.can_prev() {
            return None;
        }
        self.current -= 1;
        Some(self.current)
    }

    pub fn progress(&self) -> Option<Progress> {
        self.current_index().map(|index| Progress {
            index,
            total: self.albums.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::collection;

    #[test]
    fn test_empty_carousel_has_no_index() {
        let c = Carousel::new();
        assert_eq!(c.current_index(), None);
        assert!(c.current().is_none());
        assert!(!c.can_prev());
        assert!(!c.can_next());
        assert_eq!(c.progress(), None);
    }

    #[test]
    fn test_step_next_until_last() {
        for n in 1..6 {
            let mut c = Carousel::new();
            c.replace(collection(n));
            for i in 0..n - 1 {
                assert_eq!(c.step_next(), Some(i + 1));
            }
            assert_eq!(c.step_next(), None);
            assert_eq!(c.current_index(), Some(n - 1));
        }
    }

    #[test]
    fn test_step_prev_is_guarded_at_zero() {
        let mut c = Carousel::new();
        c.replace(collection(3));
        assert_eq!(c.step_prev(), None);
        assert_eq!(c.current_index(), Some(0));
        c.step_next();
        assert_eq!(c.step_prev(), Some(0));
    }

    #[test]
    fn test_replace_resets_index() {
        let mut c = Carousel::new();
        c.replace(collection(4));
        c.step_next();
        c.step_next();
        c.replace(collection(2));
        assert_eq!(c.current_index(), Some(0));
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn test_replace_with_empty_collection() {
        let mut c = Carousel::new();
        c.replace(collection(3));
        c.step_next();
        c.replace(AlbumCollection::default());
        assert_eq!(c.current_index(), None);
        assert!(c.is_empty());
    }

    #[test]
    fn test_progress_tracks_index() {
        let mut c = Carousel::new();
        c.replace(collection(2));
        assert_eq!(c.progress(), Some(Progress { index: 0, total: 2 }));
        c.step_next();
        assert_eq!(c.progress(), Some(Progress { index: 1, total: 2 }));
    }
}

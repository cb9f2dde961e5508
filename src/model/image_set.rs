use super::{CoreError, LoadedImage, Result};

/// Ordered batch of loaded images with one active entry.
///
/// The active index is always in range while the set is non-empty and is
/// meaningless when it is empty.
#[derive(Debug, Clone, Default)]
pub struct ImageSet {
    images: Vec<LoadedImage>,
    active: usize,
}

impl ImageSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole set and activates the first image.
    ///
    /// An empty input leaves the current set untouched and returns `false`.
    pub fn replace(&mut self, images: Vec<LoadedImage>) -> bool {
        if images.is_empty() {
            return false;
        }
        self.images = images;
        self.active = 0;
        true
    }

    pub fn select_active(&mut self, index: usize) -> Result<()> {
        if index >= self.images.len() {
            return Err(CoreError::OutOfRange {
                index,
                len: self.images.len(),
            });
        }
        self.active = index;
        Ok(())
    }

    pub fn active_index(&self) -> Option<usize> {
        (!self.images.is_empty()).then_some(self.active)
    }

    pub fn active(&self) -> Option<&LoadedImage> {
        self.images.get(self.active)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LoadedImage> {
        self.images.iter()
    }

    /// `(index, image)` pairs in set order, for thumbnail strips.
    pub fn previews(&self) -> impl Iterator<Item = (usize, &LoadedImage)> {
        self.images.iter().enumerate()
    }
}

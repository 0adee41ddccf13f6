use crate::Marshal;

// -----------------------------------------------------------------------------
// List

/// An ordered sequence; order is part of the data.
pub trait List: Marshal {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<&dyn Marshal>;
}

// -----------------------------------------------------------------------------
// ListIter

/// Iterates a [`List`] front to back.
pub struct ListIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl<'a> ListIter<'a> {
    #[inline]
    pub const fn new(list: &'a dyn List) -> Self {
        Self { list, index: 0 }
    }
}

impl<'a> Iterator for ListIter<'a> {
    type Item = &'a dyn Marshal;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.list.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ListIter<'_> {}

use bytes::Bytes;

use crate::rope::Rope;

/// A terminal rope node holding one contiguous, immutable fragment.
///
/// Splitting or slicing a leaf hands out views into the same allocation, so
/// no fragment bytes are copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    value: Bytes,
}

impl Leaf {
    pub fn new(value: impl Into<Bytes>) -> Self {
        Self { value: value.into() }
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub(crate) fn split_at(&self, index: usize) -> (Rope, Rope) {
        debug_assert!(index <= self.len());
        (Rope::from(self.value.slice(..index)), Rope::from(self.value.slice(index..)))
    }

    pub(crate) fn slice(&self, start: usize, end: usize) -> Rope {
        debug_assert!(start <= end && end <= self.len());
        Rope::from(self.value.slice(start..end))
    }

    pub(crate) fn byte_at(&self, index: usize) -> u8 {
        debug_assert!(index < self.len());
        self.value[index]
    }

    pub(crate) fn index(&self, byte: u8) -> Option<usize> {
        self.value.iter().position(|&b| b == byte)
    }
}

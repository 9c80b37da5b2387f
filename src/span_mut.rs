use crate::{
    backing::{locate, window, BackingMut, Iter, SpanKind},
    element::Element,
    error::Result,
    span::{byte_window, write_preview, Span},
};
use core::{cmp::Ordering, fmt};

/// A writable window over exclusively borrowed storage.
///
/// Reads behave exactly like [`Span`]; writes go straight to the storage, encoding
/// little-endian when it is a byte buffer. Because the borrow is exclusive, a span can
/// never be copied onto a window that aliases it.
pub struct SpanMut<'a, T: Element> {
    backing: BackingMut<'a, T>,
    offset: usize,
    len: usize,
}

impl<'a, T: Element> SpanMut<'a, T> {
    #[inline]
    const fn new(backing: BackingMut<'a, T>, offset: usize, len: usize) -> Self {
        Self { backing, offset, len }
    }

    /// Spans the whole of `array`.
    #[inline]
    pub fn wrap(array: &'a mut [T]) -> Self {
        let len = array.len();
        Self::new(BackingMut::Array(array), 0, len)
    }

    /// Spans `len` elements of `array` starting at `offset`.
    #[inline]
    pub fn wrap_range(array: &'a mut [T], offset: usize, len: usize) -> Self {
        Self::new(BackingMut::Array(array), offset, len)
    }

    /// Spans `array` from `offset` to its end.
    #[inline]
    pub fn wrap_from(array: &'a mut [T], offset: usize) -> Self {
        let len = array.len().saturating_sub(offset);
        Self::new(BackingMut::Array(array), offset, len)
    }

    /// Spans every whole element packed in `bytes`; a trailing partial element is ignored.
    #[inline]
    pub fn wrap_bytes(bytes: &'a mut [u8]) -> Self {
        let byte_len = bytes.len();
        Self::wrap_bytes_range(bytes, 0, byte_len)
    }

    /// Spans `byte_len` bytes starting at `byte_offset`, both rounded down to whole elements.
    #[inline]
    pub fn wrap_bytes_range(bytes: &'a mut [u8], byte_offset: usize, byte_len: usize) -> Self {
        let (offset, len) = byte_window::<T>(byte_offset, byte_len);
        Self::new(BackingMut::Bytes(bytes), offset, len)
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn kind(&self) -> SpanKind {
        self.backing.as_backing().kind()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.backing.as_backing().capacity()
    }

    #[inline]
    pub(crate) fn backing_mut(&mut self) -> &mut BackingMut<'a, T> {
        &mut self.backing
    }

    /// Read-only view of the same window.
    #[inline]
    pub fn as_span(&self) -> Span<'_, T> {
        Span::new(self.backing.as_backing(), self.offset, self.len)
    }

    #[inline]
    pub fn get(&self, index: usize) -> Result<T> {
        self.as_span().get(index)
    }

    #[inline]
    pub fn put(&mut self, index: usize, value: T) -> Result<()> {
        let pos = locate(self.offset, self.len, self.capacity(), index)?;
        self.backing.write(pos, value);
        Ok(())
    }

    /// Reborrows `len` elements starting at `offset` within this span.
    #[inline]
    pub fn slice(&mut self, offset: usize, len: usize) -> SpanMut<'_, T> {
        SpanMut::new(self.backing.reborrow(), self.offset.saturating_add(offset), len)
    }

    #[inline]
    pub fn slice_from(&mut self, offset: usize) -> SpanMut<'_, T> {
        let len = self.len.saturating_sub(offset);
        self.slice(offset, len)
    }

    /// Like [`slice`](Self::slice), but keeps the full storage borrow.
    #[inline]
    pub fn into_slice(self, offset: usize, len: usize) -> SpanMut<'a, T> {
        Self::new(self.backing, self.offset.saturating_add(offset), len)
    }

    /// Sets every element to `value`.
    ///
    /// The whole window is checked first, so nothing is written if it runs past the storage.
    /// This differs from [`put`](Self::put) in a loop and from [`copy_to`](Self::copy_to),
    /// which keep the writes made before the first rejected element.
    pub fn fill(&mut self, value: T) -> Result<()> {
        let window = window(self.offset, self.len, self.capacity())?;
        self.backing.fill(window, value);
        Ok(())
    }

    #[inline]
    pub fn copy_to(&self, dst: &mut SpanMut<'_, T>) -> Result<()> {
        self.as_span().copy_to(dst)
    }

    /// Overwrites the front of this span with `src`.
    #[inline]
    pub fn copy_from(&mut self, src: &Span<'_, T>) -> Result<()> {
        src.copy_to(self)
    }

    #[inline]
    pub fn iter(&self) -> Result<Iter<'_, T>> {
        self.as_span().iter()
    }

    #[inline]
    pub fn compare(&self, other: &Span<'_, T>) -> Result<Ordering> {
        self.as_span().compare(other)
    }

    #[inline]
    pub fn equals(&self, other: &Span<'_, T>) -> Result<bool> {
        self.as_span().equals(other)
    }

    #[inline]
    pub fn to_vec(&self) -> Result<Vec<T>> {
        self.as_span().to_vec()
    }
}

impl<'a, T: Element> From<&'a mut [T]> for SpanMut<'a, T> {
    #[inline]
    fn from(array: &'a mut [T]) -> Self {
        Self::wrap(array)
    }
}

impl<T: Element> fmt::Display for SpanMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_preview(&self.as_span(), f)
    }
}

impl<T: Element> fmt::Debug for SpanMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpanMut")
            .field("kind", &self.kind())
            .field("offset", &self.offset)
            .field("len", &self.len)
            .field("head", &format_args!("{}", self))
            .finish()
    }
}

impl<T: Element> PartialEq<SpanMut<'_, T>> for SpanMut<'_, T> {
    #[inline]
    fn eq(&self, other: &SpanMut<'_, T>) -> bool {
        self.as_span() == other.as_span()
    }
}

impl<T: Element> PartialEq<Span<'_, T>> for SpanMut<'_, T> {
    #[inline]
    fn eq(&self, other: &Span<'_, T>) -> bool {
        self.as_span() == *other
    }
}

impl<T: Element> PartialOrd<SpanMut<'_, T>> for SpanMut<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &SpanMut<'_, T>) -> Option<Ordering> {
        self.as_span().partial_cmp(&other.as_span())
    }
}

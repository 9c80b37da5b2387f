use crate::{
    backing::{locate, window, Backing, Iter, SpanKind},
    element::Element,
    error::Result,
    span_mut::SpanMut,
};
use core::{cmp::Ordering, fmt, ops::Range};

/// Number of leading elements rendered by the `Display` preview.
pub const PREVIEW_LEN: usize = 10;

/// A read-only window of `len` elements starting at element `offset` of borrowed storage.
///
/// The storage is either a slice of `T` or a byte buffer holding `T`s packed little-endian.
/// Windows are not checked against the storage when a span is built or sliced; an access
/// that reaches past the storage fails with [`Error::WindowOutOfBounds`] instead.
///
/// [`Error::WindowOutOfBounds`]: crate::Error::WindowOutOfBounds
#[derive(Clone, Copy)]
pub struct Span<'a, T: Element> {
    backing: Backing<'a, T>,
    offset: usize,
    len: usize,
}

impl<'a, T: Element> Span<'a, T> {
    #[inline]
    pub(crate) const fn new(backing: Backing<'a, T>, offset: usize, len: usize) -> Self {
        Self { backing, offset, len }
    }

    /// Spans the whole of `array`.
    #[inline]
    pub const fn wrap(array: &'a [T]) -> Self {
        Self::new(Backing::Array(array), 0, array.len())
    }

    /// Spans `len` elements of `array` starting at `offset`.
    #[inline]
    pub const fn wrap_range(array: &'a [T], offset: usize, len: usize) -> Self {
        Self::new(Backing::Array(array), offset, len)
    }

    /// Spans `array` from `offset` to its end.
    #[inline]
    pub const fn wrap_from(array: &'a [T], offset: usize) -> Self {
        Self::new(Backing::Array(array), offset, array.len().saturating_sub(offset))
    }

    /// Spans every whole element packed in `bytes`. Trailing bytes that do not make up a
    /// full element are ignored.
    #[inline]
    pub fn wrap_bytes(bytes: &'a [u8]) -> Self {
        Self::wrap_bytes_range(bytes, 0, bytes.len())
    }

    /// Spans `byte_len` bytes starting at `byte_offset`, both rounded down to whole elements.
    #[inline]
    pub fn wrap_bytes_range(bytes: &'a [u8], byte_offset: usize, byte_len: usize) -> Self {
        let (offset, len) = byte_window::<T>(byte_offset, byte_len);
        Self::new(Backing::Bytes(bytes), offset, len)
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Position of element 0 within the storage, in elements.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub const fn kind(&self) -> SpanKind {
        self.backing.kind()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Result<T> {
        let pos = locate(self.offset, self.len, self.backing.capacity(), index)?;
        Ok(self.backing.read(pos))
    }

    /// Narrows to `len` elements starting at `offset` within this span.
    ///
    /// Never fails and never copies; a window past the end only errors once it is read.
    #[inline]
    pub const fn slice(&self, offset: usize, len: usize) -> Span<'a, T> {
        Self::new(self.backing, self.offset.saturating_add(offset), len)
    }

    #[inline]
    pub const fn slice_from(&self, offset: usize) -> Span<'a, T> {
        self.slice(offset, self.len.saturating_sub(offset))
    }

    /// Iterates the decoded elements, after checking the whole window against the storage.
    #[inline]
    pub fn iter(&self) -> Result<Iter<'a, T>> {
        Ok(self.backing.iter(self.resolve()?))
    }

    /// Lexicographic comparison by element value; a strict prefix orders first.
    ///
    /// Only the common prefix of both windows is read.
    pub fn compare(&self, other: &Span<'_, T>) -> Result<Ordering> {
        let common = self.len.min(other.len);
        let ours = window(self.offset, common, self.backing.capacity())?;
        let theirs = window(other.offset, common, other.backing.capacity())?;
        let ordering = self.backing.iter(ours).cmp(other.backing.iter(theirs));
        Ok(ordering.then(self.len.cmp(&other.len)))
    }

    /// Same length and pairwise equal elements. Content is not read when the lengths differ,
    /// and reading stops at the first mismatch.
    pub fn equals(&self, other: &Span<'_, T>) -> Result<bool> {
        if self.len != other.len {
            return Ok(false);
        }
        for index in 0..self.len {
            if self.get(index)? != other.get(index)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Writes every element of this span to the same index of `dst`, front to back.
    ///
    /// `dst` must be at least as long as `self`; otherwise the elements that fit are written
    /// and the first one that does not is reported.
    pub fn copy_to(&self, dst: &mut SpanMut<'_, T>) -> Result<()> {
        let source = self.resolve()?;
        if dst.len() >= self.len {
            if let Ok(target) = window(dst.offset(), self.len, dst.capacity()) {
                dst.backing_mut().copy_from(target, self.backing, source);
                return Ok(());
            }
        }
        for (index, value) in self.backing.iter(source).enumerate() {
            dst.put(index, value)?;
        }
        Ok(())
    }

    /// Copies the window out into a new vector.
    #[inline]
    pub fn to_vec(&self) -> Result<Vec<T>> {
        Ok(self.iter()?.collect())
    }

    #[inline]
    fn resolve(&self) -> Result<Range<usize>> {
        window(self.offset, self.len, self.backing.capacity())
    }
}

/// Converts a byte window to whole elements, rounding both ends toward zero.
#[inline]
pub(crate) fn byte_window<T: Element>(byte_offset: usize, byte_len: usize) -> (usize, usize) {
    if byte_len % T::WIDTH != 0 {
        tracing::debug!(
            byte_len,
            width = T::WIDTH,
            dropped = byte_len % T::WIDTH,
            "truncating partial element"
        );
    }
    (byte_offset / T::WIDTH, byte_len / T::WIDTH)
}

/// Renders up to [`PREVIEW_LEN`] elements as `[a,b,c]`, stopping early at an unreadable one.
pub(crate) fn write_preview<T: Element>(
    span: &Span<'_, T>,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    f.write_str("[")?;
    for index in 0..span.len().min(PREVIEW_LEN) {
        let Ok(value) = span.get(index) else { break };
        if index > 0 {
            f.write_str(",")?;
        }
        write!(f, "{}", value)?;
    }
    f.write_str("]")
}

impl<'a, T: Element> From<&'a [T]> for Span<'a, T> {
    #[inline]
    fn from(array: &'a [T]) -> Self {
        Self::wrap(array)
    }
}

impl<T: Element> fmt::Display for Span<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_preview(self, f)
    }
}

impl<T: Element> fmt::Debug for Span<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Span")
            .field("kind", &self.kind())
            .field("offset", &self.offset)
            .field("len", &self.len)
            .field("head", &format_args!("{}", self))
            .finish()
    }
}

// A comparison that has to read past the storage is unequal and unordered.
impl<T: Element> PartialEq<Span<'_, T>> for Span<'_, T> {
    #[inline]
    fn eq(&self, other: &Span<'_, T>) -> bool {
        self.equals(other).unwrap_or(false)
    }
}

impl<T: Element> PartialOrd<Span<'_, T>> for Span<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &Span<'_, T>) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl<T: Element> PartialEq<SpanMut<'_, T>> for Span<'_, T> {
    #[inline]
    fn eq(&self, other: &SpanMut<'_, T>) -> bool {
        *self == other.as_span()
    }
}

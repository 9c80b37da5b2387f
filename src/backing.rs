use crate::{
    element::Element,
    error::{Error, Result},
};
use core::{iter::FusedIterator, ops::Range, slice};

/// Which kind of storage a span reads through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Native elements, read and written without conversion.
    Array,
    /// Packed little-endian bytes, decoded and encoded on every access.
    Bytes,
}

#[derive(Debug)]
pub(crate) enum Backing<'a, T> {
    Array(&'a [T]),
    Bytes(&'a [u8]),
}

// derive would require `T: Clone` on top of the references
impl<T> Clone for Backing<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Backing<'_, T> {}

#[derive(Debug)]
pub(crate) enum BackingMut<'a, T> {
    Array(&'a mut [T]),
    Bytes(&'a mut [u8]),
}

impl<'a, T: Element> Backing<'a, T> {
    #[inline]
    pub(crate) const fn kind(&self) -> SpanKind {
        match self {
            Backing::Array(_) => SpanKind::Array,
            Backing::Bytes(_) => SpanKind::Bytes,
        }
    }

    /// Number of whole elements the storage holds.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        match self {
            Backing::Array(array) => array.len(),
            Backing::Bytes(bytes) => bytes.len() / T::WIDTH,
        }
    }

    /// Reads the element at absolute storage position `pos`, which must be below `capacity`.
    #[inline]
    pub(crate) fn read(&self, pos: usize) -> T {
        match self {
            Backing::Array(array) => array[pos],
            Backing::Bytes(bytes) => T::get_le(&mut &bytes[pos * T::WIDTH..]),
        }
    }

    #[inline]
    pub(crate) fn iter(&self, window: Range<usize>) -> Iter<'a, T> {
        let inner = match *self {
            Backing::Array(array) => IterInner::Array(array[window].iter()),
            Backing::Bytes(bytes) => IterInner::Bytes(
                bytes[window.start * T::WIDTH..window.end * T::WIDTH].chunks_exact(T::WIDTH),
            ),
        };
        Iter { inner }
    }
}

impl<T: Element> BackingMut<'_, T> {
    #[inline]
    pub(crate) fn as_backing(&self) -> Backing<'_, T> {
        match self {
            BackingMut::Array(array) => Backing::Array(&array[..]),
            BackingMut::Bytes(bytes) => Backing::Bytes(&bytes[..]),
        }
    }

    #[inline]
    pub(crate) fn reborrow(&mut self) -> BackingMut<'_, T> {
        match self {
            BackingMut::Array(array) => BackingMut::Array(&mut array[..]),
            BackingMut::Bytes(bytes) => BackingMut::Bytes(&mut bytes[..]),
        }
    }

    /// Writes `value` at absolute storage position `pos`, which must be below `capacity`.
    #[inline]
    pub(crate) fn write(&mut self, pos: usize, value: T) {
        match self {
            BackingMut::Array(array) => array[pos] = value,
            BackingMut::Bytes(bytes) => {
                let mut out = &mut bytes[pos * T::WIDTH..(pos + 1) * T::WIDTH];
                value.put_le(&mut out);
            }
        }
    }

    /// Copies the `source` window of `src` onto the equally long `target` window.
    pub(crate) fn copy_from(
        &mut self,
        target: Range<usize>,
        src: Backing<'_, T>,
        source: Range<usize>,
    ) {
        debug_assert_eq!(target.len(), source.len());
        match (self, src) {
            (BackingMut::Array(dst), Backing::Array(src)) => {
                dst[target].copy_from_slice(&src[source]);
            }
            // identical layout on both sides, no need to decode
            (BackingMut::Bytes(dst), Backing::Bytes(src)) => {
                dst[target.start * T::WIDTH..target.end * T::WIDTH]
                    .copy_from_slice(&src[source.start * T::WIDTH..source.end * T::WIDTH]);
            }
            (dst, src) => {
                for (pos, value) in target.zip(src.iter(source)) {
                    dst.write(pos, value);
                }
            }
        }
    }

    pub(crate) fn fill(&mut self, window: Range<usize>, value: T) {
        match self {
            BackingMut::Array(array) => array[window].fill(value),
            BackingMut::Bytes(bytes) => {
                let mut out = &mut bytes[window.start * T::WIDTH..window.end * T::WIDTH];
                while !out.is_empty() {
                    value.put_le(&mut out);
                }
            }
        }
    }
}

/// Checks that `[offset, offset + len)` lies inside `capacity` elements.
#[inline]
pub(crate) fn window(offset: usize, len: usize, capacity: usize) -> Result<Range<usize>> {
    match offset.checked_add(len) {
        Some(end) if end <= capacity => Ok(offset..end),
        _ => {
            tracing::trace!(offset, len, capacity, "span window exceeds storage");
            Err(Error::WindowOutOfBounds { offset, len, capacity })
        }
    }
}

/// Maps a window-relative `index` to its absolute storage position.
#[inline]
pub(crate) fn locate(offset: usize, len: usize, capacity: usize, index: usize) -> Result<usize> {
    if index >= len {
        tracing::trace!(index, len, "span index out of range");
        return Err(Error::IndexOutOfRange { index, len });
    }
    match offset.checked_add(index) {
        Some(pos) if pos < capacity => Ok(pos),
        _ => {
            tracing::trace!(offset, len, capacity, index, "span element beyond storage");
            Err(Error::WindowOutOfBounds { offset, len, capacity })
        }
    }
}

/// Iterator over the decoded elements of a span window.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    inner: IterInner<'a, T>,
}

#[derive(Clone, Debug)]
enum IterInner<'a, T> {
    Array(slice::Iter<'a, T>),
    Bytes(slice::ChunksExact<'a, u8>),
}

impl<T: Element> Iterator for Iter<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        match &mut self.inner {
            IterInner::Array(it) => it.next().copied(),
            IterInner::Bytes(it) => it.next().map(|mut chunk| T::get_le(&mut chunk)),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            IterInner::Array(it) => it.size_hint(),
            IterInner::Bytes(it) => it.size_hint(),
        }
    }
}

impl<T: Element> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        match &mut self.inner {
            IterInner::Array(it) => it.next_back().copied(),
            IterInner::Bytes(it) => it.next_back().map(|mut chunk| T::get_le(&mut chunk)),
        }
    }
}

impl<T: Element> ExactSizeIterator for Iter<'_, T> {}

impl<T: Element> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn window_bounds() {
        assert_eq!(window(0, 3, 3), Ok(0..3));
        assert_eq!(window(3, 0, 3), Ok(3..3));
        assert_eq!(
            window(2, 2, 3),
            Err(Error::WindowOutOfBounds { offset: 2, len: 2, capacity: 3 })
        );
        assert!(window(usize::MAX, 1, 3).is_err());
    }

    #[test]
    fn locate_checks_index_before_storage() {
        assert_eq!(locate(1, 2, 3, 1), Ok(2));
        assert_eq!(locate(1, 2, 3, 2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(
            locate(2, 4, 3, 1),
            Err(Error::WindowOutOfBounds { offset: 2, len: 4, capacity: 3 })
        );
    }

    #[test]
    fn byte_capacity_truncates() {
        let bytes = hex!("0100 0200 ff");
        assert_eq!(Backing::<i16>::Bytes(&bytes).capacity(), 2);
        assert_eq!(Backing::<i32>::Bytes(&bytes).capacity(), 1);
        assert_eq!(Backing::<u8>::Bytes(&bytes).capacity(), 5);
    }

    #[test]
    fn iter_both_ends() {
        let bytes = hex!("0100 0200 0300 0400");
        let mut it = Backing::<i16>::Bytes(&bytes).iter(1..4);
        assert_eq!(it.len(), 3);
        assert_eq!(it.next_back(), Some(4));
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next(), Some(3));
        assert_eq!(it.next(), None);

        let array = [5u32, 6, 7];
        let it = Backing::Array(&array).iter(0..2);
        assert_eq!(it.collect::<Vec<_>>(), vec![5, 6]);
    }

    #[test]
    fn write_encodes_little_endian() {
        let mut bytes = [0u8; 6];
        let mut backing = BackingMut::<i16>::Bytes(&mut bytes);
        backing.write(1, -2);
        backing.fill(2..3, 0x0102);
        assert_eq!(backing.as_backing().read(1), -2);
        assert_eq!(bytes, hex!("0000 feff 0201"));
    }
}

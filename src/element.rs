use bytes::{Buf as _, BufMut};
use core::fmt::{Debug, Display};

/// A fixed-width integer that can back a span, either natively or packed
/// little-endian in a byte buffer.
pub trait Element: Copy + Ord + Default + Debug + Display {
    /// Number of bytes one element occupies in a byte buffer.
    const WIDTH: usize;

    /// Decodes one element from the front of `buf` and advances past it.
    ///
    /// # Panics
    /// If `buf` holds fewer than [`Self::WIDTH`] bytes.
    fn get_le(buf: &mut &[u8]) -> Self;

    /// Appends the little-endian bytes of this element to `out`.
    ///
    /// # Panics
    /// If `out` has fewer than [`Self::WIDTH`] bytes of room.
    fn put_le(&self, out: &mut dyn BufMut);
}

macro_rules! impl_element {
    ($($t:ty => $get:ident, $put:ident);+ $(;)?) => {$(
        impl Element for $t {
            const WIDTH: usize = core::mem::size_of::<$t>();

            #[inline]
            fn get_le(buf: &mut &[u8]) -> Self {
                buf.$get()
            }

            #[inline]
            fn put_le(&self, out: &mut dyn BufMut) {
                out.$put(*self)
            }
        }
    )+};
}

// single byte types have no byte order
impl_element! {
    u8 => get_u8, put_u8;
    i8 => get_i8, put_i8;
    u16 => get_u16_le, put_u16_le;
    i16 => get_i16_le, put_i16_le;
    u32 => get_u32_le, put_u32_le;
    i32 => get_i32_le, put_i32_le;
    u64 => get_u64_le, put_u64_le;
    i64 => get_i64_le, put_i64_le;
    u128 => get_u128_le, put_u128_le;
    i128 => get_i128_le, put_i128_le;
}

/// Writes `values` to `out` as packed little-endian elements.
#[inline]
pub fn encode_slice<T: Element>(values: &[T], out: &mut dyn BufMut) {
    for value in values {
        value.put_le(out);
    }
}

/// Packs `values` into a freshly allocated little-endian byte buffer.
#[inline]
pub fn encode<T: Element>(values: &[T]) -> Vec<u8> {
    let mut out = Vec::with_capacity(values.len() * T::WIDTH);
    encode_slice(values, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn encode_shorts() {
        assert_eq!(encode(&[1i16, 2, -1]), hex!("0100 0200 ffff"));
        assert_eq!(encode(&[0x1234u16]), hex!("3412"));
        assert_eq!(encode::<i16>(&[]), Vec::<u8>::new());
    }

    #[test]
    fn encode_wide() {
        assert_eq!(encode(&[-2i32]), hex!("feffffff"));
        assert_eq!(encode(&[0x0102030405060708u64]), hex!("0807060504030201"));
        assert_eq!(encode(&[0x80u8, 0x7f]), hex!("807f"));
        assert_eq!(encode(&[1u128]).len(), 16);
    }

    #[test]
    fn decode_advances() {
        let bytes = hex!("0100 0200 ffff 07");
        let mut buf = &bytes[..];
        assert_eq!(i16::get_le(&mut buf), 1);
        assert_eq!(i16::get_le(&mut buf), 2);
        assert_eq!(i16::get_le(&mut buf), -1);
        assert_eq!(buf, &[0x07u8][..]);
        assert_eq!(u16::get_le(&mut &hex!("ffff")[..]), u16::MAX);
        assert_eq!(i8::get_le(&mut &hex!("80")[..]), i8::MIN);
    }

    #[test]
    fn encode_into_slice() {
        let mut bytes = [0u8; 6];
        let mut out = &mut bytes[..];
        encode_slice(&[-1i16, 0x0201], &mut out);
        assert_eq!(out.len(), 2);
        assert_eq!(bytes, hex!("ffff 0102 0000"));
    }

    #[test]
    fn widths() {
        assert_eq!(u8::WIDTH, 1);
        assert_eq!(i16::WIDTH, 2);
        assert_eq!(u32::WIDTH, 4);
        assert_eq!(i64::WIDTH, 8);
        assert_eq!(i128::WIDTH, 16);
    }
}

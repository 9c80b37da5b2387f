//! Typed windows over integer storage that is either already native or still packed
//! little-endian in a byte buffer.
//!
//! ```
//! use typed_span::ShortSpan;
//!
//! let buf = [0x01, 0x00, 0x02, 0x00, 0xff, 0xff];
//! let span = ShortSpan::wrap_bytes(&buf);
//! assert_eq!(span.to_vec(), Ok(vec![1, 2, -1]));
//! assert_eq!(span.slice_from(1).get(0), Ok(2));
//! ```

pub mod backing;
pub mod element;
pub mod error;
pub mod span;
pub mod span_mut;

pub use backing::{Iter, SpanKind};
pub use element::{encode, encode_slice, Element};
pub use error::{Error, Result};
pub use span::{Span, PREVIEW_LEN};
pub use span_mut::SpanMut;

pub type ByteSpan<'a> = Span<'a, i8>;
pub type ShortSpan<'a> = Span<'a, i16>;
pub type IntSpan<'a> = Span<'a, i32>;
pub type LongSpan<'a> = Span<'a, i64>;

pub type ByteSpanMut<'a> = SpanMut<'a, i8>;
pub type ShortSpanMut<'a> = SpanMut<'a, i16>;
pub type IntSpanMut<'a> = SpanMut<'a, i32>;
pub type LongSpanMut<'a> = SpanMut<'a, i64>;

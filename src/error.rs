use core::fmt;

/// Span result type alias
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Access errors, raised when an operation touches an element it cannot reach.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// `index` is outside the span's `[0, len)` window.
    IndexOutOfRange { index: usize, len: usize },
    /// The window `[offset, offset + len)` runs past the `capacity` elements the storage holds.
    WindowOutOfBounds { offset: usize, len: usize, capacity: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexOutOfRange { index, len } => {
                write!(f, "Index {} out of range for span of length {}", index, len)
            }
            Error::WindowOutOfBounds { offset, len, capacity } => write!(
                f,
                "Window at offset {} with length {} exceeds storage of {} elements",
                offset, len, capacity
            ),
        }
    }
}

impl std::error::Error for Error {}

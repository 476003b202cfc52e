/// Standard Result used in the library
pub type Result<T> = std::result::Result<T, Error>;

/// Standard error type used in the library
#[derive(Debug)]
pub enum Error {
    /// A write would advance past the fixed capacity of the buffer.
    BufferFull {
        /// The fixed capacity the writer was created with.
        capacity: usize,
        /// The committed length the rejected write would have required.
        required: usize,
    },
    /// The data provided is too small to perform the operation.
    DataTooSmall,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::BufferFull { capacity, required } => f.write_str(&format!(
                "buffer full: capacity {} bytes, write requires {}",
                capacity, required
            )),
            Error::DataTooSmall => f.write_str("data too small"),
        }
    }
}

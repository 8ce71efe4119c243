//! Error types for PVS conversion.

use thiserror::Error;

/// Errors from converting a PVS document into scene items.
#[derive(Error, Debug)]
pub enum PvsError {
    /// The document could not be deserialized.
    #[error("malformed PVS document: {0}")]
    Parse(#[from] quick_xml::DeError),

    /// The structure section contains no components.
    #[error("PVS document contains no components")]
    EmptyAssembly,

    /// A component instance references a slot outside the component
    /// table.
    #[error("component instance index {index} out of bounds (component table has {len} entries)")]
    IndexOutOfBounds {
        /// The out-of-range index.
        index: usize,
        /// Number of entries in the component table.
        len: usize,
    },
}

/// Result type for PVS conversion.
pub type Result<T> = std::result::Result<T, PvsError>;

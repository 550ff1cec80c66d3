//! Wrapper around the external `font2c` font-to-source converter.
//!
//! Resolves where the binary lives, downloads it when missing and runs
//! it with its standard output captured.

mod converter;
mod fetch;
mod paths;

pub use converter::{ConvertMode, DEFAULT_SYMBOL, Font2c, FontConverter, convert_to_file};
pub use fetch::{BinaryFetcher, Font2cFetcher, Font2cFetcherBuilder, LocalBinaryFetcher, ensure_available};
pub use paths::{BINARY_NAME, is_available, resolve_binary_path, resolve_binary_path_from_env};

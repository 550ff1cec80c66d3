//! Image folder to C byte-array conversion.
//!
//! Every `.png` file directly inside a folder is emitted as an
//! `unsigned char` array declaration followed by a `size_t` size
//! declaration. File contents are copied byte for byte; nothing is
//! decoded.

mod declaration;
mod error;
mod generate;

pub use declaration::{ArrayDeclaration, convert_file, derive_variable_name, render_declaration};
pub use error::GenerateError;
pub use generate::{GenerateSummary, find_name_collisions, generate, is_qualifying_name};

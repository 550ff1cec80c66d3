//! Rendering of a single array declaration.

use std::fmt;
use std::path::Path;

use crate::error::GenerateError;

/// Suffix appended to every derived variable name.
const NAME_SUFFIX: &str = "1";

/// Indentation of the byte literal line.
const BODY_INDENT: &str = "    ";

/// One rendered `unsigned char` array plus its size declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayDeclaration {
    /// C identifier used for the array.
    pub name: String,
    /// Number of bytes in the array.
    pub byte_len: usize,
    /// Declaration source text, newline terminated.
    pub text: String,
}

/// Declaration source for one array.
struct DeclarationSource<'a> {
    name: &'a str,
    bytes: &'a [u8],
}

impl fmt::Display for DeclarationSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name;
        write!(f, "unsigned char {name}[] = {{\n{BODY_INDENT}")?;
        for byte in self.bytes {
            write!(f, "0x{byte:02x}, ")?;
        }
        f.write_str("};\n")?;
        writeln!(f, "size_t {name}Size = sizeof({name});")
    }
}

/// Renders `bytes` as an array declaration named `name`.
///
/// Each byte becomes a lowercase `0xNN, ` literal, in input order. The
/// trailing separator is kept after the last literal.
#[must_use]
pub fn render_declaration(name: &str, bytes: &[u8]) -> ArrayDeclaration {
    ArrayDeclaration {
        name: String::from(name),
        byte_len: bytes.len(),
        text: DeclarationSource { name, bytes }.to_string(),
    }
}

/// Reads `file_path` and renders its raw bytes as a declaration named
/// `variable_name`.
///
/// # Errors
///
/// Returns `GenerateError::Io` if the file cannot be read.
pub fn convert_file(
    file_path: &Path,
    variable_name: &str,
) -> Result<ArrayDeclaration, GenerateError> {
    let bytes = std::fs::read(file_path).map_err(|e| GenerateError::io(file_path, e))?;
    tracing::debug!(
        file = %file_path.display(),
        bytes = bytes.len(),
        name = variable_name,
        "Converted image"
    );
    Ok(render_declaration(variable_name, &bytes))
}

/// Derives the array identifier for `filename`.
///
/// Strips any leading directories and the extension, then appends `1`.
/// Case is preserved and no sanitization is applied, so files sharing a
/// stem produce the same identifier.
#[must_use]
pub fn derive_variable_name(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .map_or_else(String::new, |s| s.to_string_lossy().into_owned());
    format!("{stem}{NAME_SUFFIX}")
}

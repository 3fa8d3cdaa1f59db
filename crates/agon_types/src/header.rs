//! C header emission for palette index buffers.
//!
//! The generated text looks like this:
//!
//! ```text
//! #ifndef SPRITE_H
//! #define SPRITE_H
//!
//! #include <stdint.h>
//!
//! #define SPRITE_WIDTH  2
//! #define SPRITE_HEIGHT 1
//!
//! static const uint8_t sprite_data[] = {
//!     0x00, 0x3F
//! };
//!
//! #endif // SPRITE
//! ```

use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use crate::quantize::IndexBuffer;

/// Number of array entries per line.
pub const ENTRIES_PER_LINE: usize = 16;

/// Indentation used for array lines.
const INDENT: &str = "    ";

/// Makes `name` usable as a C identifier.
///
/// Characters outside `[A-Za-z0-9_]` become `_`, a leading digit gets a `_`
/// prefix and an empty name becomes `image`.
pub fn sanitize_identifier(name: &str) -> String {
	let mut out: String =
		name.chars().map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' }).collect();
	if out.is_empty() {
		out.push_str("image");
	} else if out.starts_with(|c: char| c.is_ascii_digit()) {
		out.insert(0, '_');
	}
	out
}

/// A C header view over an [`IndexBuffer`].
#[derive(Debug, Clone)]
pub struct CHeader<'a> {
	name: String,
	buffer: &'a IndexBuffer,
}

impl<'a> CHeader<'a> {
	/// Creates a header for `buffer`. The name is sanitized.
	pub fn new(name: &str, buffer: &'a IndexBuffer) -> Self {
		Self {
			name: sanitize_identifier(name),
			buffer,
		}
	}

	/// Identifier used for the array (`<name>_data`).
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Upper-cased identifier used for the guard and the macros.
	pub fn macro_name(&self) -> String {
		self.name.to_ascii_uppercase()
	}

	/// Renders the complete header text.
	pub fn render(&self) -> String {
		let upper = self.macro_name();
		let mut out = String::with_capacity(256 + self.buffer.len() * 6);

		let _ = writeln!(out, "#ifndef {upper}_H");
		let _ = writeln!(out, "#define {upper}_H");
		out.push('\n');
		out.push_str("#include <stdint.h>\n\n");
		let _ = writeln!(out, "#define {upper}_WIDTH  {}", self.buffer.width());
		let _ = writeln!(out, "#define {upper}_HEIGHT {}", self.buffer.height());
		out.push('\n');
		let _ = writeln!(out, "static const uint8_t {}_data[] = {{", self.name);

		let lines = self.buffer.indices().chunks(ENTRIES_PER_LINE);
		let line_count = lines.len();
		for (n, line) in lines.enumerate() {
			out.push_str(INDENT);
			for (i, index) in line.iter().enumerate() {
				if i > 0 {
					out.push_str(", ");
				}
				let _ = write!(out, "0x{index:02X}");
			}
			if n + 1 < line_count {
				out.push(',');
			}
			out.push('\n');
		}

		out.push_str("};\n\n");
		let _ = writeln!(out, "#endif // {upper}");
		out
	}

	/// Writes the header text to `writer`.
	pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
		writer.write_all(self.render().as_bytes())
	}

	/// Writes the header text to a file.
	pub fn save<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
		std::fs::write(path, self.render())
	}
}

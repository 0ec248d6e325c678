//! Split a combined shader file into its vertex and fragment parts.
//!
//! ```text
//! #shader vertex
//! ...
//! #shader fragment
//! ...
//! ```

use std::path::Path;

pub const SECTION_MARKER: &str = "#shader";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    pub vertex: String,
    pub fragment: String,
}

#[derive(Clone, Copy)]
enum Section {
    Vertex,
    Fragment,
}

impl ShaderSource {
    /// Lines before the first marker land in the vertex block. A marker
    /// naming neither stage leaves the current section unchanged.
    pub fn parse(text: &str) -> Self {
        let mut source = ShaderSource::default();
        let mut section = Section::Vertex;
        for line in text.lines() {
            if line.contains(SECTION_MARKER) {
                if line.contains("vertex") {
                    section = Section::Vertex;
                } else if line.contains("fragment") {
                    section = Section::Fragment;
                }
                continue;
            }
            let block = match section {
                Section::Vertex => &mut source.vertex,
                Section::Fragment => &mut source.fragment,
            };
            block.push_str(line);
            block.push('\n');
        }
        source
    }

    /// An unreadable file gives two empty sections; the failure is only logged.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(err) => {
                log::warn!("cannot read shader file {}: {err}", path.display());
                Self::default()
            }
        }
    }
}

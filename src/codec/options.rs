//! Decoder and encoder options

/// Options for decoding EAD3 documents
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Maximum element nesting depth before the input is rejected.
    ///
    /// Decoding recurses once per element, so the limit also bounds stack
    /// use. The default leaves room for the deepest component trees seen in
    /// practice on a 2 MiB thread stack.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self { max_depth: 64 }
    }
}

/// Options for encoding EAD3 documents
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    /// Number of spaces per indentation level (0 = no indentation)
    pub tab_size: usize,
    /// Use spaces for indentation (false = one tab per level)
    pub insert_spaces: bool,
    /// Emit the `<?xml ...?>` declaration
    pub xml_declaration: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            tab_size: 4,
            insert_spaces: true,
            xml_declaration: true,
        }
    }
}

impl EncodeOptions {
    /// Options producing a single-line document without declaration
    pub fn compact() -> Self {
        Self {
            tab_size: 0,
            insert_spaces: true,
            xml_declaration: false,
        }
    }

    /// Indentation character and width per level, if indenting at all
    pub fn indent(&self) -> Option<(u8, usize)> {
        match (self.tab_size, self.insert_spaces) {
            (0, _) => None,
            (size, true) => Some((b' ', size)),
            (_, false) => Some((b'\t', 1)),
        }
    }
}

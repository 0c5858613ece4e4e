// Copyright (c) 2023 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::fmt;

/// The encoding an entry's name is declared in.
///
/// Only [`StringEncoding::Utf8`] sets the language encoding flag (general purpose bit 11); readers interpret any
/// other name using their legacy code page.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringEncoding {
    #[default]
    Utf8,
    Ascii,
}

impl StringEncoding {
    /// Returns the conventional label of this encoding, eg. `"UTF-8"`.
    pub fn label(&self) -> &'static str {
        match self {
            StringEncoding::Utf8 => "UTF-8",
            StringEncoding::Ascii => "ASCII",
        }
    }

    /// Parses a conventional encoding label, ignoring case and a missing dash (`"utf8"`).
    ///
    /// Any label other than UTF-8 is treated as ASCII since names are never transcoded.
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_uppercase().as_str() {
            "UTF-8" | "UTF8" => StringEncoding::Utf8,
            _ => StringEncoding::Ascii,
        }
    }

    pub(crate) fn is_utf8(&self) -> bool {
        matches!(self, StringEncoding::Utf8)
    }
}

impl fmt::Display for StringEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

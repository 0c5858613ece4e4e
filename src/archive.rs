// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::sync::Arc;

use crate::entry::EntrySource;

/// An ordered list of entries plus an archive comment.
///
/// Each builder method consumes the archive and returns a new snapshot, so an archive handed to an encoder is never
/// mutated underneath it. Cloning is cheap as entries are reference counted.
#[derive(Debug, Clone, Default)]
pub struct Archive {
    contents: Vec<Arc<dyn EntrySource>>,
    comment: String,
}

impl Archive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry; entries are emitted in the order they were added.
    pub fn with_content(self, content: impl EntrySource + 'static) -> Self {
        self.with_shared_content(Arc::new(content))
    }

    /// Appends an entry which may also be shared with other archives.
    pub fn with_shared_content(mut self, content: Arc<dyn EntrySource>) -> Self {
        self.contents.push(content);
        self
    }

    /// Sets the archive comment, written verbatim into the end of central directory record.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn contents(&self) -> &[Arc<dyn EntrySource>] {
        &self.contents
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }
}

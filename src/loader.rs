//! Word source loading.
//!
//! Reads text from a file or any reader, splits it into keys according to the
//! configured [`Delimiter`], and feeds them into a [`Trie`].

use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::config::loader::{Delimiter, LoaderConfig};
use crate::data_structures::Trie;
use crate::error::loader::LoaderError;

/// Result type for loader operations.
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Splits word sources into keys.
#[derive(Debug, Clone, Default)]
pub struct WordLoader {
    config: LoaderConfig,
}

impl WordLoader {
    /// Creates a loader with the given configuration.
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Reads and splits the file at `path`.
    ///
    /// # Errors
    ///
    /// * `LoaderError::FileNotFound` - if `path` does not exist
    /// * `LoaderError::Read` - if the file cannot be read
    /// * `LoaderError::InvalidUtf8` - if the contents are not UTF-8
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> LoaderResult<Vec<String>> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LoaderError::FileNotFound(path.to_path_buf()));
        }

        let bytes = fs::read(path).map_err(|source| LoaderError::Read {
            source_name: path.display().to_string(),
            source,
        })?;
        let text = String::from_utf8(bytes)
            .map_err(|_| LoaderError::InvalidUtf8(path.display().to_string()))?;

        let words = self.split(&text);
        debug!(path = %path.display(), words = words.len(), "Loaded word file");
        Ok(words)
    }

    /// Reads and splits everything `reader` yields.
    pub fn load_reader<R: Read>(&self, mut reader: R) -> LoaderResult<Vec<String>> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|source| LoaderError::Read {
                source_name: "reader".to_string(),
                source,
            })?;
        let text =
            String::from_utf8(bytes).map_err(|_| LoaderError::InvalidUtf8("reader".to_string()))?;
        Ok(self.split(&text))
    }

    /// Splits `text` into keys, honouring `max_words`.
    pub fn split(&self, text: &str) -> Vec<String> {
        let limit = self.config.max_words.unwrap_or(usize::MAX);
        match self.config.delimiter {
            Delimiter::Whitespace => text
                .split_whitespace()
                .take(limit)
                .map(str::to_owned)
                .collect(),
            Delimiter::Line => text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .take(limit)
                .map(str::to_owned)
                .collect(),
        }
    }
}

/// Builds a trie whose payload is the number of times each word occurs.
pub fn index_words<I, S>(words: I) -> Trie<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut trie = Trie::new();
    let mut total = 0usize;
    for word in words {
        let word = word.as_ref();
        match trie.search_mut(word) {
            Some(count) => *count += 1,
            None => {
                trie.insert(word, 1);
            }
        }
        total += 1;
    }
    debug!(total, "Indexed words");
    trie
}

//! Sources of raw document text.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use hashbrown::HashMap;

use crate::errors::{DocsimError, Result};

/// Read-only access to the raw text of stored documents.
///
/// Implementations are shared across ranking workers, so they must be [`Sync`].
pub trait ContentProvider: Sync {
    /// Gets the raw text of the document `id`, or a not-found error.
    fn get(&self, id: &str) -> Result<String>;

    /// Lists the ids of all stored documents in ascending order.
    fn ids(&self) -> Result<Vec<String>>;
}

impl<P> ContentProvider for &P
where
    P: ContentProvider + ?Sized,
{
    fn get(&self, id: &str) -> Result<String> {
        (**self).get(id)
    }

    fn ids(&self) -> Result<Vec<String>> {
        (**self).ids()
    }
}

/// Thread-safe in-memory document store.
#[derive(Default)]
pub struct MemoryStore {
    docs: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a document, returning the previous text if any.
    pub fn insert<I, S>(&self, id: I, text: S) -> Option<String>
    where
        I: Into<String>,
        S: Into<String>,
    {
        self.docs
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.into(), text.into())
    }

    /// Removes a document, returning its text if it existed.
    pub fn remove(&self, id: &str) -> Option<String> {
        self.docs
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
    }

    /// Gets the number of stored documents.
    pub fn len(&self) -> usize {
        self.docs.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Checks if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<I, S> FromIterator<(I, S)> for MemoryStore
where
    I: Into<String>,
    S: Into<String>,
{
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (I, S)>,
    {
        let docs = iter
            .into_iter()
            .map(|(id, text)| (id.into(), text.into()))
            .collect();
        Self {
            docs: RwLock::new(docs),
        }
    }
}

impl ContentProvider for MemoryStore {
    fn get(&self, id: &str) -> Result<String> {
        self.docs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| DocsimError::not_found(id))
    }

    fn ids(&self) -> Result<Vec<String>> {
        let mut ids: Vec<_> = self
            .docs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        ids.sort_unstable();
        Ok(ids)
    }
}

/// Directory of extracted plain-text files, one `<id>.txt` per document.
pub struct TextDirectory {
    root: PathBuf,
}

impl TextDirectory {
    const EXTENSION: &'static str = "txt";

    /// Creates a provider reading from `root`.
    pub fn new<P>(root: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self { root: root.into() }
    }

    /// Gets the directory documents are read from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Gets the file path holding the text of `id`.
    pub fn path_for(&self, id: &str) -> Result<PathBuf> {
        if !is_valid_id(id) {
            return Err(DocsimError::input(format!("invalid document id {id:?}")));
        }
        Ok(self.root.join(format!("{id}.{}", Self::EXTENSION)))
    }
}

impl ContentProvider for TextDirectory {
    fn get(&self, id: &str) -> Result<String> {
        let path = self.path_for(id)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(DocsimError::not_found(id)),
            Err(e) => Err(e.into()),
        }
    }

    fn ids(&self) -> Result<Vec<String>> {
        let mut ids = vec![];
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(Self::EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if is_valid_id(stem) {
                    ids.push(stem.to_string());
                }
            }
        }
        ids.sort_unstable();
        Ok(ids)
    }
}

/// Checks that `id` is non-empty and made of ASCII letters, digits, `_`, or `-`.
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

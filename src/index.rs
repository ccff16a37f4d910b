//! Flat entry-name index for an archive.
//!
//! The archive layer hands us an ordered list of entry names with no
//! uniqueness or sorting guarantee; everything here works over that list.
//! Archive format parsing stays on the other side of [`EntrySource`].

use std::io;

use anyhow::{Context, Result};

use crate::pattern::{Matcher, compile};

/// Return the names matching `pattern`, in their original order.
///
/// Compiles the pattern once and reuses one [`Matcher`] across the whole
/// scan. Duplicate input names that match appear duplicated in the output;
/// nothing is invented or reordered.
pub fn find_matches<'a, I>(names: I, pattern: &str) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let prog = compile(pattern);
    let mut matcher = Matcher::new();
    names
        .into_iter()
        .filter(|name| matcher.is_match(&prog, name))
        .collect()
}

/// Drop directory entries (names ending in `/`) from a path list, keeping
/// the remaining order. An empty name is kept: it is not a directory.
pub fn filter_out_dirs(paths: &mut Vec<String>) {
    paths.retain(|p| !p.ends_with('/'));
}

/// An archive's name index: the ordered entry names, as enumerated.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    names: Vec<String>,
}

impl NameIndex {
    pub fn from_names<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a textual listing, one entry name per line. Blank lines are
    /// skipped; everything else, including leading whitespace, is part of
    /// the name.
    pub fn from_listing(text: &str) -> Self {
        Self::from_names(text.lines().filter(|line| !line.is_empty()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names matching `pattern`, in enumeration order.
    pub fn glob(&self, pattern: &str) -> Vec<&str> {
        find_matches(self.names(), pattern)
    }

    /// Look up an entry by exact name (no glob interpretation).
    ///
    /// A miss is reported as a distinct does-not-exist condition: the error
    /// chain bottoms out in [`io::ErrorKind::NotFound`].
    pub fn find(&self, name: &str) -> Result<&str> {
        self.names()
            .find(|n| *n == name)
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
            .with_context(|| format!("error finding {name}"))
    }

    /// Drop directory entries in place.
    pub fn retain_files(&mut self) {
        filter_out_dirs(&mut self.names);
    }
}

/// Capability to open an entry's byte stream by exact name.
///
/// Implemented by the archive backend; this crate never parses archive
/// formats itself.
pub trait EntrySource {
    type Reader: io::Read;

    fn open(&mut self, name: &str) -> io::Result<Self::Reader>;
}

/// Open the entry called `name`, checking the index first so a missing name
/// reports the same does-not-exist condition as [`NameIndex::find`].
pub fn open_entry<S: EntrySource>(
    source: &mut S,
    index: &NameIndex,
    name: &str,
) -> Result<S::Reader> {
    index.find(name)?;
    source
        .open(name)
        .with_context(|| format!("error opening {name}"))
}

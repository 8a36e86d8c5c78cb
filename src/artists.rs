//! Artist side index.
//!
//! A prepend-only log of `(artist, title)` pairs recorded whenever a track is
//! added. Entries are owned copies, so they never alias the track index and
//! stay readable after the track itself is deleted.

use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistEntry {
    pub artist: String,
    /// Title of the track that was added under this artist.
    pub title: String,
}

#[derive(Debug, Default)]
pub struct ArtistIndex {
    entries: VecDeque<ArtistEntry>,
}

impl ArtistIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an entry; newest entries come first.
    pub fn record(&mut self, artist: impl Into<String>, title: impl Into<String>) {
        self.entries.push_front(ArtistEntry {
            artist: artist.into(),
            title: title.into(),
        });
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &ArtistEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! The ordered track index: an AVL tree keyed by title.
//!
//! Titles order ordinally (byte-wise, case-sensitive) inside the tree, while
//! lookups and deletions accept any ASCII casing of a stored title. Artist,
//! genre and year are not sort keys, so queries on them scan every node.

mod error;
mod model;
mod query;
mod shuffle;
mod stats;
mod tree;

pub use error::IndexError;
pub use model::Track;
pub use query::Iter;

use rand::Rng;
use tracing::debug;

use tree::Link;

/// Height-balanced collection of tracks, ordered by title.
///
/// Query results borrow from the index, so they must be dropped before the
/// next [`insert`](Self::insert) or [`delete`](Self::delete).
#[derive(Debug, Default)]
pub struct TrackIndex {
    root: Link,
    len: usize,
}

impl TrackIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracks in the index.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tree, 0 when empty.
    pub fn height(&self) -> usize {
        tree::height(&self.root)
    }

    /// Insert a new track.
    ///
    /// Fails with [`IndexError::AlreadyExists`] when a track with exactly the
    /// same title is present; the index is then left as it was.
    pub fn insert(
        &mut self,
        title: impl Into<String>,
        artist: impl Into<String>,
        genre: impl Into<String>,
        year: u32,
    ) -> Result<(), IndexError> {
        let track = Track::new(title.into(), artist.into(), genre.into(), year);
        let key = track.title().to_string();
        tree::insert(&mut self.root, track, &key)?;
        self.len += 1;
        debug!(title = %key, len = self.len, height = self.height(), "inserted track");
        Ok(())
    }

    /// Remove the track matching `title` (ASCII case-insensitive) and return it.
    pub fn delete(&mut self, title: &str) -> Result<Track, IndexError> {
        let key = self
            .find_by_title(title)
            .map(|t| t.title().to_string())
            .ok_or_else(|| IndexError::NotFound {
                title: title.to_string(),
            })?;
        let removed = tree::remove(&mut self.root, &key)
            .ok_or(IndexError::NotFound { title: key })?;
        self.len -= 1;
        debug!(title = removed.title(), len = self.len, "deleted track");
        Ok(removed)
    }

    /// Look a track up by title, ignoring ASCII case.
    pub fn find_by_title(&self, title: &str) -> Option<&Track> {
        query::find_exact(&self.root, title).or_else(|| query::find_folded(&self.root, title))
    }

    /// Every track by `artist` (ASCII case-insensitive), in title order.
    pub fn find_all_by_artist(&self, artist: &str) -> Vec<&Track> {
        self.iter()
            .filter(|t| t.artist().eq_ignore_ascii_case(artist))
            .collect()
    }

    /// Every track in `genre` (ASCII case-insensitive), in title order.
    pub fn find_all_by_genre(&self, genre: &str) -> Vec<&Track> {
        self.iter()
            .filter(|t| t.genre().eq_ignore_ascii_case(genre))
            .collect()
    }

    /// Every track released in `year`, in title order, with the match count.
    pub fn find_all_by_year(&self, year: u32) -> (Vec<&Track>, usize) {
        let matches: Vec<&Track> = self.iter().filter(|t| t.year() == year).collect();
        let count = matches.len();
        (matches, count)
    }

    /// Artist with the longest run of consecutive tracks in title order.
    ///
    /// This is a streak, not a frequency: two tracks by the same artist that
    /// are separated by another artist's track in title order count as two
    /// streaks of one.
    pub fn most_common_artist(&self) -> Option<(String, usize)> {
        stats::longest_streak(self.iter().map(Track::artist))
    }

    /// Genre with the longest run of consecutive tracks in title order.
    pub fn most_common_genre(&self) -> Option<(String, usize)> {
        stats::longest_streak(self.iter().map(Track::genre))
    }

    /// All tracks in a uniformly random order, drawn from the thread RNG.
    pub fn shuffled(&self) -> Vec<&Track> {
        self.shuffled_with(&mut rand::rng())
    }

    /// All tracks in a random order drawn from `rng`.
    pub fn shuffled_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<&Track> {
        shuffle::shuffle_in(self.iter(), rng)
    }

    /// Snapshot of all tracks in title order.
    pub fn in_order(&self) -> Vec<&Track> {
        self.iter().collect()
    }

    /// In-order iterator over the tracks.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.root, self.len)
    }
}

impl<'a> IntoIterator for &'a TrackIndex {
    type Item = &'a Track;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

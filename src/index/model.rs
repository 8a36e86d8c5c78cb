use std::fmt;

/// A single track record owned by a [`TrackIndex`](super::TrackIndex).
///
/// Tracks are only created by [`TrackIndex::insert`](super::TrackIndex::insert)
/// and only destroyed by [`TrackIndex::delete`](super::TrackIndex::delete).
/// Everything else sees them through shared references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    title: String,
    artist: String,
    genre: String,
    year: u32,
}

impl Track {
    pub(crate) fn new(title: String, artist: String, genre: String, year: u32) -> Self {
        Self {
            title,
            artist,
            genre,
            year,
        }
    }

    /// The unique key of the track.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Release year.
    pub fn year(&self) -> u32 {
        self.year
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} ({}, {})",
            self.title, self.artist, self.genre, self.year
        )
    }
}

use thiserror::Error;

/// Failures reported by [`TrackIndex`](super::TrackIndex) mutations.
///
/// Both variants leave the index untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("a track titled '{title}' already exists")]
    AlreadyExists { title: String },

    #[error("no track titled '{title}' in the playlist")]
    NotFound { title: String },
}

//! Creating and editing songs for callers.
//!
//! [`crate::model::Song`] only reports failures as [`SongError`] values.
//! This module is the layer that decides what to do with them: it logs a
//! diagnostic through `tracing` and hands back a plain outcome, either the
//! invalid placeholder record or `false`.
//!
//! - [`SongFactory`]: owns the [`IdCounter`] and builds records
//! - [`Edit`] / [`apply_edit`]: one validated change to a record
//! - [`search`] / [`sort_for_display`]: helpers over caller-owned slices

mod ids;

pub use ids::IdCounter;

use crate::config::CatalogConfig;
use crate::error::{Error, Result, SongError};
use crate::model::Song;

/// Builds songs with ids from its own counter.
#[derive(Debug, Default)]
pub struct SongFactory {
    ids: IdCounter,
}

impl SongFactory {
    /// Create a factory whose first id is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a factory that draws ids from `ids`.
    pub fn with_ids(ids: IdCounter) -> Self {
        Self { ids }
    }

    /// Create a factory from the catalog section of the config.
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::with_ids(IdCounter::starting_at(config.first_id))
    }

    /// The counter ids are drawn from.
    pub fn ids(&self) -> &IdCounter {
        &self.ids
    }

    /// Build a song, returning why it was refused on failure.
    pub fn try_create(
        &self,
        title: &str,
        artist: &str,
        duration_secs: i64,
        rating: i64,
    ) -> Result<Song> {
        Song::new(title, artist, duration_secs, rating, &self.ids)
            .map_err(Error::ConstructionInvalid)
    }

    /// Build a song, logging a diagnostic and returning the invalid
    /// placeholder on failure.
    ///
    /// Check [`Song::is_valid`] before trusting the result.
    pub fn create(&self, title: &str, artist: &str, duration_secs: i64, rating: i64) -> Song {
        match Song::new(title, artist, duration_secs, rating, &self.ids) {
            Ok(song) => {
                tracing::debug!(id = song.id(), "Created song {}", song);
                song
            }
            Err(e) => {
                tracing::warn!(field = e.field(), "Song not created: {}", e);
                Song::invalid()
            }
        }
    }
}

/// A single change to a song.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    SetTitle(String),
    SetArtist(String),
    SetDuration(i64),
    SetRating(i64),
    AddTag(String),
    RemoveTag(String),
}

impl Edit {
    /// Operation name used in diagnostics and errors.
    pub fn operation(&self) -> &'static str {
        match self {
            Edit::SetTitle(_) => "set_title",
            Edit::SetArtist(_) => "set_artist",
            Edit::SetDuration(_) => "set_duration",
            Edit::SetRating(_) => "set_rating",
            Edit::AddTag(_) => "add_tag",
            Edit::RemoveTag(_) => "remove_tag",
        }
    }

    fn apply_to(&self, song: &mut Song) -> std::result::Result<(), SongError> {
        match self {
            Edit::SetTitle(title) => song.set_title(title),
            Edit::SetArtist(artist) => song.set_artist(artist),
            Edit::SetDuration(secs) => song.set_duration(*secs),
            Edit::SetRating(rating) => song.set_rating(*rating),
            Edit::AddTag(tag) => song.add_tag(tag),
            Edit::RemoveTag(tag) => song.remove_tag(tag),
        }
    }
}

/// Apply an edit, returning [`Error::MutationRejected`] if it had no effect.
pub fn try_apply_edit(song: &mut Song, edit: &Edit) -> Result<()> {
    edit.apply_to(song).map_err(|e| Error::rejected(edit.operation(), e))
}

/// Apply an edit and report whether it took effect.
///
/// A rejected edit leaves the song untouched and logs why.
pub fn apply_edit(song: &mut Song, edit: Edit) -> bool {
    match edit.apply_to(song) {
        Ok(()) => {
            tracing::debug!(id = song.id(), op = edit.operation(), "Edit applied");
            true
        }
        Err(e) => {
            tracing::warn!(
                id = song.id(),
                op = edit.operation(),
                field = e.field(),
                "Edit ignored: {}",
                e
            );
            false
        }
    }
}

/// Songs matching `keyword`, in their original order.
pub fn search<'a>(songs: &'a [Song], keyword: &str) -> Vec<&'a Song> {
    songs.iter().filter(|s| s.matches_keyword(keyword)).collect()
}

/// Sort songs into display order (see [`Song::display_cmp`]).
pub fn sort_for_display(songs: &mut [Song]) {
    songs.sort_by(Song::display_cmp);
}

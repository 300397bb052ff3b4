//! Test fixtures for songbook tests.
//!
//! Each fixture uses a fresh [`IdCounter`], so the returned song has id 1.
//!
//! ```ignore
//! let mut song = mock_song();
//! song.add_tag("rock").unwrap();
//! ```

use crate::library::IdCounter;
use crate::model::Song;

/// A valid song with sensible defaults.
pub fn mock_song() -> Song {
    song_with("Test Track", "Test Artist", 4)
}

/// A valid song with the given title, artist and rating.
pub fn song_with(title: &str, artist: &str, rating: i64) -> Song {
    Song::new(title, artist, 180, rating, &IdCounter::new())
        .expect("fixture song should be valid")
}

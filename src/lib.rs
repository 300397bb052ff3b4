//! Songbook - validated song records.
//!
//! A [`model::Song`] holds a title, artist, duration, rating and a list of
//! tags. Every change is validated; rejected changes leave the record as it
//! was. Records can be searched by keyword and ordered for display.
//!
//! Record ids come from an [`library::IdCounter`] owned by a
//! [`library::SongFactory`]. The factory and the other helpers in
//! [`library`] turn validation failures into log diagnostics and plain
//! boolean outcomes for callers that don't want to match on errors.
//!
//! # Example
//!
//! ```
//! use songbook::library::SongFactory;
//!
//! let factory = SongFactory::new();
//! let mut song = factory.create("Hotel California", "Eagles", 391, 5);
//! assert!(song.is_valid());
//!
//! song.add_tag("rock").unwrap();
//! assert!(song.matches_keyword("ROCK"));
//! assert_eq!(
//!     song.to_string(),
//!     "[#1] Eagles - Hotel California (391s) *****  [tags: rock]"
//! );
//! ```

pub mod config;
pub mod error;
pub mod library;
pub mod logging;
pub mod model;
#[cfg(test)]
pub mod test_utils;

pub use error::{Error, Result, SongError};
pub use library::{IdCounter, SongFactory};
pub use model::Song;

//! The song record.
//!
//! A [`Song`] is either *valid* (built from good input, holding an id from
//! an [`IdCounter`]) or the *invalid* placeholder returned by
//! [`Song::invalid`], with id 0 and every field zero or empty.
//!
//! Every mutator validates its input first and returns a [`SongError`]
//! without touching the record when the input is refused. Nothing in this
//! module logs; see [`crate::library`] for the diagnostic layer.

mod text;

use std::cmp::Ordering;
use std::fmt;

use crate::error::SongError;
use crate::library::IdCounter;

/// Lowest accepted rating.
pub const MIN_RATING: u8 = 1;
/// Highest accepted rating.
pub const MAX_RATING: u8 = 5;

/// A single song with its tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Song {
    /// Assigned at construction, 0 for an invalid record
    id: u32,
    /// Trimmed, never empty on a valid record
    title: String,
    /// Trimmed, never empty on a valid record
    artist: String,
    /// Length in seconds
    duration_secs: u64,
    /// 1..=5 on a valid record
    rating: u8,
    /// Trimmed, unique ignoring case, in insertion order
    tags: Vec<String>,
    valid: bool,
}

impl Song {
    /// Build a validated record and take the next id from `ids`.
    ///
    /// Title and artist are trimmed. Checks run in order (title, artist,
    /// duration, rating) and stop at the first failure. No id is consumed
    /// unless every check passes.
    pub fn new(
        title: &str,
        artist: &str,
        duration_secs: i64,
        rating: i64,
        ids: &IdCounter,
    ) -> Result<Self, SongError> {
        let title = validate_title(title)?;
        let artist = validate_artist(artist)?;
        let duration_secs = validate_duration(duration_secs)?;
        let rating = validate_rating(rating)?;
        let id = ids.allocate().ok_or(SongError::IdsExhausted)?;

        Ok(Self {
            id,
            title,
            artist,
            duration_secs,
            rating,
            tags: Vec::new(),
            valid: true,
        })
    }

    /// The placeholder for a record that failed construction.
    pub fn invalid() -> Self {
        Self::default()
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn duration_secs(&self) -> u64 {
        self.duration_secs
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Whether construction passed validation.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The rating as a row of `*`.
    pub fn stars(&self) -> String {
        "*".repeat(usize::from(self.rating))
    }

    /// Whether a tag equal to `tag` (trimmed, ignoring case) is present.
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = text::trim_space(tag);
        self.tags.iter().any(|t| text::eq_folded(t, tag))
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), SongError> {
        self.title = validate_title(title)?;
        Ok(())
    }

    pub fn set_artist(&mut self, artist: &str) -> Result<(), SongError> {
        self.artist = validate_artist(artist)?;
        Ok(())
    }

    pub fn set_duration(&mut self, secs: i64) -> Result<(), SongError> {
        self.duration_secs = validate_duration(secs)?;
        Ok(())
    }

    pub fn set_rating(&mut self, rating: i64) -> Result<(), SongError> {
        self.rating = validate_rating(rating)?;
        Ok(())
    }

    /// Append a tag, keeping the caller's casing.
    ///
    /// Refused when the trimmed tag is empty or already present ignoring
    /// case.
    pub fn add_tag(&mut self, tag: &str) -> Result<(), SongError> {
        let tag = text::trimmed(tag);
        if tag.is_empty() {
            return Err(SongError::EmptyTag);
        }
        if self.has_tag(&tag) {
            return Err(SongError::DuplicateTag(tag));
        }
        self.tags.push(tag);
        Ok(())
    }

    /// Remove the first tag equal to `tag` ignoring case.
    ///
    /// Remaining tags keep their order.
    pub fn remove_tag(&mut self, tag: &str) -> Result<(), SongError> {
        let tag = text::trim_space(tag);
        match self.tags.iter().position(|t| text::eq_folded(t, tag)) {
            Some(index) => {
                self.tags.remove(index);
                Ok(())
            }
            None => Err(SongError::TagNotFound(tag.to_string())),
        }
    }

    /// Case-insensitive substring match against title, artist, then tags.
    ///
    /// A blank keyword never matches.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = text::trim_space(keyword);
        if keyword.is_empty() {
            return false;
        }
        let keyword = text::fold(keyword);

        text::contains_folded(&self.title, &keyword)
            || text::contains_folded(&self.artist, &keyword)
            || self.tags.iter().any(|t| text::contains_folded(t, &keyword))
    }

    /// Display order: higher rating first, then title ignoring case, then
    /// lower id.
    pub fn display_cmp(&self, other: &Song) -> Ordering {
        other
            .rating
            .cmp(&self.rating)
            .then_with(|| text::cmp_folded(&self.title, &other.title))
            .then_with(|| self.id.cmp(&other.id))
    }

    /// Whether `self` sorts strictly before `other` in display order.
    pub fn sorts_before(&self, other: &Song) -> bool {
        self.display_cmp(other) == Ordering::Less
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[#{}] {} - {} ({}s) {}",
            self.id,
            self.artist,
            self.title,
            self.duration_secs,
            self.stars()
        )?;
        if !self.tags.is_empty() {
            write!(f, "  [tags: {}]", self.tags.join(", "))?;
        }
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<String, SongError> {
    let title = text::trimmed(title);
    if title.is_empty() {
        return Err(SongError::EmptyTitle);
    }
    Ok(title)
}

fn validate_artist(artist: &str) -> Result<String, SongError> {
    let artist = text::trimmed(artist);
    if artist.is_empty() {
        return Err(SongError::EmptyArtist);
    }
    Ok(artist)
}

fn validate_duration(secs: i64) -> Result<u64, SongError> {
    match u64::try_from(secs) {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(SongError::NonPositiveDuration(secs)),
    }
}

fn validate_rating(rating: i64) -> Result<u8, SongError> {
    match u8::try_from(rating) {
        Ok(r) if (MIN_RATING..=MAX_RATING).contains(&r) => Ok(r),
        _ => Err(SongError::RatingOutOfRange(rating)),
    }
}


/// Property-based tests using proptest
#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Printable ASCII text with at least one non-space character
    fn non_blank() -> impl Strategy<Value = String> {
        prop::string::string_regex("[ ]{0,2}[!-~][ -~]{0,20}").unwrap()
    }

    fn blank() -> impl Strategy<Value = String> {
        prop::string::string_regex("[ \t\n]{0,4}").unwrap()
    }

    proptest! {
        /// Good input always yields a valid record with a fresh positive id
        #[test]
        fn valid_input_is_valid(
            title in non_blank(),
            artist in non_blank(),
            duration in 1i64..100_000,
            rating in 1i64..=5,
        ) {
            let ids = IdCounter::new();
            let first = Song::new(&title, &artist, duration, rating, &ids).unwrap();
            let second = Song::new(&title, &artist, duration, rating, &ids).unwrap();
            prop_assert!(first.is_valid());
            prop_assert!(first.id() > 0);
            prop_assert!(second.id() > first.id());
        }

        /// Any single bad field makes construction fail
        #[test]
        fn invalid_input_is_rejected(
            title in blank(),
            duration in -1000i64..=0,
            rating in prop_oneof![-10i64..=0, 6i64..100],
        ) {
            let ids = IdCounter::new();
            prop_assert!(Song::new(&title, "A", 1, 1, &ids).is_err());
            prop_assert!(Song::new("T", &title, 1, 1, &ids).is_err());
            prop_assert!(Song::new("T", "A", duration, 1, &ids).is_err());
            prop_assert!(Song::new("T", "A", 1, rating, &ids).is_err());
            prop_assert_eq!(ids.peek(), 1);
        }

        /// Adding a case variant of an existing tag never grows the list
        #[test]
        fn case_variant_tags_are_duplicates(tag in non_blank()) {
            let ids = IdCounter::new();
            let mut song = Song::new("T", "A", 1, 1, &ids).unwrap();
            song.add_tag(&tag).unwrap();
            prop_assert!(song.add_tag(&tag.to_ascii_uppercase()).is_err());
            prop_assert!(song.add_tag(&tag.to_ascii_lowercase()).is_err());
            prop_assert_eq!(song.tags().len(), 1);
        }

        /// Removing removes exactly one entry and keeps the rest in order
        #[test]
        fn remove_tag_removes_one(
            tags in prop::collection::vec("[a-z]{1,8}", 1..8),
            pick in any::<prop::sample::Index>(),
        ) {
            let ids = IdCounter::new();
            let mut song = Song::new("T", "A", 1, 1, &ids).unwrap();
            for tag in &tags {
                let _ = song.add_tag(tag);
            }
            let before = song.tags().to_vec();
            let target = pick.get(before.as_slice()).clone();

            song.remove_tag(&target.to_ascii_uppercase()).unwrap();

            let expected: Vec<String> =
                before.iter().filter(|t| **t != target).cloned().collect();
            prop_assert_eq!(song.tags(), expected.as_slice());
        }

        /// Keyword matching ignores ASCII case
        #[test]
        fn keyword_match_ignores_case(title in "[a-zA-Z]{3,12}") {
            let ids = IdCounter::new();
            let song = Song::new(&title, "Someone", 1, 1, &ids).unwrap();
            prop_assert!(song.matches_keyword(&title.to_ascii_uppercase()));
            prop_assert!(song.matches_keyword(&title[1..]));
        }

        /// Display order is a strict order consistent with sorting
        #[test]
        fn display_order_is_consistent(seed in prop::collection::vec((non_blank(), 1i64..=5), 3)) {
            let ids = IdCounter::new();
            let songs: Vec<Song> = seed
                .iter()
                .map(|(t, r)| Song::new(t, "A", 1, *r, &ids).unwrap())
                .collect();

            for a in &songs {
                prop_assert!(!a.sorts_before(a));
                for b in &songs {
                    if a.sorts_before(b) {
                        prop_assert!(!b.sorts_before(a));
                        for c in &songs {
                            if b.sorts_before(c) {
                                prop_assert!(a.sorts_before(c));
                            }
                        }
                    }
                }
            }
        }

        /// Sorted output never has a lower rating ahead of a higher one
        #[test]
        fn sorted_ratings_descend(seed in prop::collection::vec((non_blank(), 1i64..=5), 1..10)) {
            let ids = IdCounter::new();
            let mut songs: Vec<Song> = seed
                .iter()
                .map(|(t, r)| Song::new(t, "A", 1, *r, &ids).unwrap())
                .collect();
            songs.sort_by(Song::display_cmp);
            for pair in songs.windows(2) {
                prop_assert!(pair[0].rating() >= pair[1].rating());
            }
        }
    }
}

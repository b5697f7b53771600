//! Request construction for the album endpoints

use std::ops::RangeInclusive;

/// Number of albums requested per crate
pub const DEFAULT_CRATE_SIZE: u32 = 10;

/// `count` values accepted by `/albums/random`
pub const RANDOM_COUNT_RANGE: RangeInclusive<u32> = 1..=30;

/// `count` values accepted by `/albums/chart`
pub const CHART_COUNT_RANGE: RangeInclusive<u32> = 1..=50;

/// `count` values accepted by `/albums/search`
pub const SEARCH_COUNT_RANGE: RangeInclusive<u32> = 1..=50;

/// `min_tracks` sent when only full albums (no singles) are wanted
pub const ALBUMS_ONLY_MIN_TRACKS: u32 = 2;

/// Where a crate is dug from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrateSource {
    /// Randomized discovery, optionally filtered by genre
    Random,
    /// Current chart albums
    Chart,
    /// Free-text album search
    Search,
}

#[allow(clippy::derivable_impls)]
impl Default for CrateSource {
    fn default() -> Self {
        CrateSource::Random
    }
}

/// A fully-resolved album request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrateQuery {
    Random {
        count: u32,
        /// Ascending, deduplicated
        genre_ids: Vec<u32>,
        min_tracks: Option<u32>,
    },
    Chart {
        count: u32,
    },
    Search {
        /// Trimmed, never empty
        q: String,
        count: u32,
    },
    /// A single album by Deezer id
    Album {
        id: u64,
    },
}

impl CrateQuery {
    pub fn random(
        count: u32,
        genre_ids: impl IntoIterator<Item = u32>,
        min_tracks: Option<u32>,
    ) -> Self {
        let mut genre_ids: Vec<u32> = genre_ids.into_iter().collect();
        genre_ids.sort_unstable();
        genre_ids.dedup();

        CrateQuery::Random {
            count: clamp_count(count, &RANDOM_COUNT_RANGE),
            genre_ids,
            min_tracks: min_tracks.filter(|n| *n > 0),
        }
    }

    pub fn chart(count: u32) -> Self {
        CrateQuery::Chart {
            count: clamp_count(count, &CHART_COUNT_RANGE),
        }
    }

    /// None when the search text is blank, which the provider rejects
    pub fn search(q: &str, count: u32) -> Option<Self> {
        let q = q.trim();
        if q.is_empty() {
            return None;
        }
        Some(CrateQuery::Search {
            q: q.to_string(),
            count: clamp_count(count, &SEARCH_COUNT_RANGE),
        })
    }

    pub fn album(id: u64) -> Self {
        CrateQuery::Album { id }
    }

    pub fn path(&self) -> String {
        match self {
            CrateQuery::Random { .. } => "/albums/random".to_string(),
            CrateQuery::Chart { .. } => "/albums/chart".to_string(),
            CrateQuery::Search { .. } => "/albums/search".to_string(),
            CrateQuery::Album { id } => format!("/albums/{id}"),
        }
    }

    /// Query string without the leading `?`.
    ///
    /// Random crates always order parameters `count`, `genres`, `min_tracks`
    /// and omit absent filters entirely. Album lookups have no parameters.
    pub fn query_string(&self) -> String {
        match self {
            CrateQuery::Random {
                count,
                genre_ids,
                min_tracks,
            } => {
                let mut parts = vec![format!("count={count}")];
                if !genre_ids.is_empty() {
                    let csv = genre_ids
                        .iter()
                        .map(|id| id.to_string())
                        .collect::<Vec<_>>()
                        .join(",");
                    parts.push(format!("genres={csv}"));
                }
                if let Some(min) = min_tracks {
                    parts.push(format!("min_tracks={min}"));
                }
                parts.join("&")
            }
            CrateQuery::Chart { count } => format!("count={count}"),
            CrateQuery::Search { q, count } => {
                format!("q={}&count={count}", urlencoding::encode(q))
            }
            CrateQuery::Album { .. } => String::new(),
        }
    }

    /// Absolute request URL against the given API base (no trailing slash)
    pub fn url(&self, base: &str) -> String {
        let query = self.query_string();
        if query.is_empty() {
            format!("{}{}", base, self.path())
        } else {
            format!("{}{}?{}", base, self.path(), query)
        }
    }
}

fn clamp_count(count: u32, range: &RangeInclusive<u32>) -> u32 {
    count.clamp(*range.start(), *range.end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_with_genres_and_albums_only() {
        let q = CrateQuery::random(10, [152, 129], Some(ALBUMS_ONLY_MIN_TRACKS));
        assert_eq!(q.query_string(), "count=10&genres=129,152&min_tracks=2");
    }

    #[test]
    fn test_query_omits_empty_filters() {
        let q = CrateQuery::random(10, Vec::new(), None);
        assert_eq!(q.query_string(), "count=10");
    }

    #[test]
    fn test_query_omits_non_positive_min_tracks() {
        let q = CrateQuery::random(10, [85], Some(0));
        assert_eq!(q.query_string(), "count=10&genres=85");
    }

    #[test]
    fn test_duplicate_genres_collapse() {
        let q = CrateQuery::random(5, [464, 152, 464], None);
        assert_eq!(q.query_string(), "count=5&genres=152,464");
    }

    #[test]
    fn test_count_is_clamped_to_endpoint_bounds() {
        assert_eq!(CrateQuery::random(0, Vec::new(), None).query_string(), "count=1");
        assert_eq!(CrateQuery::random(100, Vec::new(), None).query_string(), "count=30");
        assert_eq!(CrateQuery::chart(100).query_string(), "count=50");
    }

    #[test]
    fn test_url_joins_base_path_and_query() {
        let q = CrateQuery::random(10, [129], None);
        assert_eq!(
            q.url("http://localhost:8000"),
            "http://localhost:8000/albums/random?count=10&genres=129"
        );
        assert_eq!(
            CrateQuery::chart(20).url("https://api.example"),
            "https://api.example/albums/chart?count=20"
        );
    }

    #[test]
    fn test_search_encodes_text_and_clamps_count() {
        let q = CrateQuery::search("  miles davis & co ", 80).unwrap();
        assert_eq!(q.query_string(), "q=miles%20davis%20%26%20co&count=50");
        assert_eq!(
            q.url("http://localhost:8000"),
            "http://localhost:8000/albums/search?q=miles%20davis%20%26%20co&count=50"
        );
    }

    #[test]
    fn test_blank_search_is_rejected() {
        assert_eq!(CrateQuery::search("", 10), None);
        assert_eq!(CrateQuery::search("   ", 10), None);
    }

    #[test]
    fn test_album_url_has_no_query_string() {
        assert_eq!(
            CrateQuery::album(302127).url("https://api.example"),
            "https://api.example/albums/302127"
        );
    }

    #[test]
    fn test_source_default_is_random() {
        assert_eq!(CrateSource::default(), CrateSource::Random);
    }
}

use std::collections::BTreeSet;

use crate::models::Genre;
use crate::query::{CrateQuery, CrateSource, ALBUMS_ONLY_MIN_TRACKS};

/// The user's filter choices.
///
/// Changing a filter never reloads by itself; the caller decides when to
/// turn the selection into a [`CrateQuery`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    genre_ids: BTreeSet<u32>,
    albums_only: bool,
    source: CrateSource,
    search_text: String,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the genre if absent, remove it if present. Returns whether it is
    /// selected afterwards.
    pub fn toggle_genre(&mut self, genre_id: u32) -> bool {
        if self.genre_ids.remove(&genre_id) {
            false
        } else {
            self.genre_ids.insert(genre_id);
            true
        }
    }

    /// Empty the genre selection. Other toggles are left alone.
    pub fn clear(&mut self) {
        self.genre_ids.clear();
    }

    pub fn genre_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.genre_ids.iter().copied()
    }

    pub fn has_genres(&self) -> bool {
        !self.genre_ids.is_empty()
    }

    /// Names of the selected genres in the order of the canonical genre list,
    /// not the order they were picked in.
    pub fn selected_names<'a>(&self, genres: &'a [Genre]) -> Vec<&'a str> {
        genres
            .iter()
            .filter(|g| self.genre_ids.contains(&g.id))
            .map(|g| g.name.as_str())
            .collect()
    }

    pub fn set_albums_only(&mut self, albums_only: bool) {
        self.albums_only = albums_only;
    }

    pub fn albums_only(&self) -> bool {
        self.albums_only
    }

    pub fn set_source(&mut self, source: CrateSource) {
        self.source = source;
    }

    pub fn source(&self) -> CrateSource {
        self.source
    }

    /// Raw text as typed; trimmed when the query is built
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Whether [`Self::to_query`] honours the chosen source. Search needs
    /// non-blank text.
    pub fn is_complete(&self) -> bool {
        self.source != CrateSource::Search || !self.search_text.trim().is_empty()
    }

    /// Build the request for a crate of `count` albums. A blank search
    /// falls back to a random crate with the current genre filters.
    pub fn to_query(&self, count: u32) -> CrateQuery {
        match self.source {
            CrateSource::Random => self.random_query(count),
            CrateSource::Chart => CrateQuery::chart(count),
            CrateSource::Search => CrateQuery::search(&self.search_text, count)
                .unwrap_or_else(|| self.random_query(count)),
        }
    }

    fn random_query(&self, count: u32) -> CrateQuery {
        CrateQuery::random(
            count,
            self.genre_ids.iter().copied(),
            self.albums_only.then_some(ALBUMS_ONLY_MIN_TRACKS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genres() -> Vec<Genre> {
        [(132, "Pop"), (152, "Rock"), (129, "Jazz")]
            .into_iter()
            .map(|(id, name)| Genre {
                id,
                name: name.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut f = FilterSelection::new();
        f.toggle_genre(129);
        let before = f.clone();

        assert!(f.toggle_genre(152));
        assert!(!f.toggle_genre(152));
        assert_eq!(f, before);
    }

    #[test]
    fn test_selected_names_follow_canonical_order() {
        let mut f = FilterSelection::new();
        f.toggle_genre(129);
        f.toggle_genre(132);
        assert_eq!(f.selected_names(&genres()), vec!["Pop", "Jazz"]);
    }

    #[test]
    fn test_selected_names_skip_unknown_ids() {
        let mut f = FilterSelection::new();
        f.toggle_genre(9999);
        f.toggle_genre(152);
        assert_eq!(f.selected_names(&genres()), vec!["Rock"]);
    }

    #[test]
    fn test_clear_keeps_albums_only() {
        let mut f = FilterSelection::new();
        f.toggle_genre(129);
        f.set_albums_only(true);
        f.clear();
        assert!(!f.has_genres());
        assert!(f.albums_only());
    }

    #[test]
    fn test_to_query_uses_selection() {
        let mut f = FilterSelection::new();
        f.toggle_genre(152);
        f.toggle_genre(129);
        f.set_albums_only(true);
        assert_eq!(
            f.to_query(10).query_string(),
            "count=10&genres=129,152&min_tracks=2"
        );
    }

    #[test]
    fn test_chart_source_ignores_genre_filters() {
        let mut f = FilterSelection::new();
        f.toggle_genre(152);
        f.set_albums_only(true);
        f.set_source(CrateSource::Chart);
        assert_eq!(f.to_query(10), CrateQuery::chart(10));
    }

    #[test]
    fn test_search_source_uses_trimmed_text() {
        let mut f = FilterSelection::new();
        f.toggle_genre(152);
        f.set_source(CrateSource::Search);
        f.set_search_text(" Blue Train ");
        assert!(f.is_complete());
        assert_eq!(
            f.to_query(10),
            CrateQuery::Search {
                q: "Blue Train".to_string(),
                count: 10
            }
        );
    }

    #[test]
    fn test_blank_search_falls_back_to_random() {
        let mut f = FilterSelection::new();
        f.toggle_genre(129);
        f.set_source(CrateSource::Search);
        f.set_search_text("  ");
        assert!(!f.is_complete());
        assert_eq!(f.to_query(10).query_string(), "count=10&genres=129");
    }
}

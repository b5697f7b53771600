//! Crate digger UI state store

use dig_common::{Album, CrateSource, DiggerSnapshot, DragGesture, Genre, PlaybackState, Progress};
use dioxus::prelude::*;

/// Root state for the digging page
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct DiggerUiState {
    pub carousel: CarouselState,
    pub playback: PlaybackUiState,
    pub gesture: GestureState,
    pub filters: FilterState,
    pub load: LoadState,
}

/// The crate on screen
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct CarouselState {
    pub albums: Vec<Album>,
    /// None while the crate is empty
    pub current_index: Option<usize>,
    pub progress: Option<Progress>,
    pub can_prev: bool,
    pub can_next: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct PlaybackUiState {
    pub state: PlaybackState,
}

/// Live pointer drag, for the card transform
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct GestureState {
    pub dragging: bool,
    pub offset: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct FilterState {
    /// Canonical genre list, empty if it failed to load
    pub genres: Vec<Genre>,
    pub selected_ids: Vec<u32>,
    /// Selected genre names in canonical order
    pub selected_names: Vec<String>,
    pub albums_only: bool,
    pub source: CrateSource,
    pub search_text: String,
    /// Whether the Dig button is enabled
    pub can_apply: bool,
    pub is_open: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct LoadState {
    pub loading: bool,
    /// Message of the last failed album load
    pub error: Option<String>,
    /// Whether any crate has been shown yet
    pub has_loaded: bool,
}

impl From<&DragGesture> for GestureState {
    fn from(gesture: &DragGesture) -> Self {
        Self {
            dragging: gesture.is_dragging(),
            offset: gesture.offset(),
        }
    }
}

impl From<&DiggerSnapshot> for DiggerUiState {
    fn from(snapshot: &DiggerSnapshot) -> Self {
        Self {
            carousel: CarouselState {
                albums: snapshot.albums.clone(),
                current_index: snapshot.current_index,
                progress: snapshot.progress,
                can_prev: snapshot.can_prev,
                can_next: snapshot.can_next,
            },
            playback: PlaybackUiState {
                state: snapshot.playback,
            },
            gesture: GestureState {
                dragging: snapshot.dragging,
                offset: snapshot.drag_offset,
            },
            filters: FilterState {
                genres: snapshot.genres.clone(),
                selected_ids: snapshot.selected_genre_ids.clone(),
                selected_names: snapshot.selected_genre_names.clone(),
                albums_only: snapshot.albums_only,
                source: snapshot.source,
                search_text: snapshot.search_text.clone(),
                can_apply: snapshot.can_apply,
                is_open: snapshot.filter_open,
            },
            load: LoadState {
                loading: snapshot.loading,
                error: snapshot.error.clone(),
                has_loaded: snapshot.has_loaded,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_maps_into_sub_stores() {
        let snapshot = DiggerSnapshot {
            current_index: Some(1),
            progress: Some(Progress { index: 1, total: 2 }),
            can_prev: true,
            playback: PlaybackState::Playing,
            dragging: true,
            drag_offset: -30.0,
            selected_genre_ids: vec![129, 152],
            selected_genre_names: vec!["Rock".to_string(), "Jazz".to_string()],
            filter_open: true,
            error: Some("Failed to fetch albums".to_string()),
            has_loaded: true,
            ..DiggerSnapshot::default()
        };

        let state = DiggerUiState::from(&snapshot);

        assert_eq!(state.carousel.current_index, Some(1));
        assert!(state.carousel.can_prev);
        assert!(!state.carousel.can_next);
        assert_eq!(state.playback.state, PlaybackState::Playing);
        assert_eq!(state.gesture.offset, -30.0);
        assert_eq!(state.filters.selected_ids, vec![129, 152]);
        assert!(state.filters.is_open);
        assert_eq!(state.load.error.as_deref(), Some("Failed to fetch albums"));
    }

    #[test]
    fn test_gesture_state_follows_live_drag() {
        let mut gesture = DragGesture::default();
        gesture.start(200.0);
        gesture.update(150.0);

        let state = GestureState::from(&gesture);
        assert!(state.dragging);
        assert_eq!(state.offset, -50.0);

        gesture.cancel();
        assert_eq!(GestureState::from(&gesture), GestureState::default());
    }

    #[test]
    fn test_default_snapshot_is_default_state() {
        assert_eq!(
            DiggerUiState::from(&DiggerSnapshot::default()),
            DiggerUiState::default()
        );
    }
}

//! View components

pub mod album_card;
pub mod button;
pub mod carousel;
pub mod crate_view;
pub mod filter_panel;
pub mod helpers;
pub mod icons;
pub mod progress;
pub mod segmented_control;
pub mod utils;

pub use album_card::AlbumCard;
pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use carousel::CarouselView;
pub use crate_view::CrateView;
pub use filter_panel::FilterPanelView;
pub use helpers::{ErrorBanner, ErrorDisplay, LoadingSpinner};
pub use icons::{
    AlertTriangleIcon, ChevronLeftIcon, ChevronRightIcon, DiscIcon, ExternalLinkIcon, ImageIcon,
    PauseIcon, PlayIcon, RefreshIcon, ShuffleIcon, SlidersIcon, XIcon,
};
pub use progress::ProgressView;
pub use segmented_control::{Segment, SegmentedControl};
pub use utils::{genre_summary, progress_label, track_transform};

mod dig;
mod layout;
mod not_found;

pub use dig::{Dig, SharedAlbum};
pub use layout::AppLayout;
pub use not_found::NotFound;

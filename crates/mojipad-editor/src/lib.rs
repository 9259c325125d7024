pub mod buffer;
pub mod catalog;
pub mod filter;
pub mod recent;

pub use buffer::{delete_backward, delete_backward_grapheme, insert_at, EditBuffer};
pub use catalog::{Category, Emoji};
pub use filter::{filter_to_allowed, is_disallowed};
pub use recent::RecentEmoji;

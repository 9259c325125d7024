pub mod field;
pub mod popup;

pub use field::{render_text_field, visible_tail};
pub use popup::{centered_rect, render_popup_block};

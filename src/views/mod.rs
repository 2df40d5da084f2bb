pub mod layout;
pub mod verify;

pub use layout::render_page;
pub use verify::{render_failed, render_loading, render_state, render_verified};

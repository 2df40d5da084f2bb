pub mod view;

pub use view::VerificationView;

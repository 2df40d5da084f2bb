pub mod health;
pub mod verify;

pub use health::health_handler;
pub use verify::{
    fallback_handler, run_verification, verify_json_handler, verify_live_page_handler,
    verify_page_handler, verify_page_missing_handler,
};

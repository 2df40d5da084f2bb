// src/api/mod.rs

pub mod error;
pub mod extract;
pub mod handler;
pub mod router;
pub mod ws;

pub use error::ApiError;
pub use router::build_router;
pub use ws::{handle_socket, websocket_handler};

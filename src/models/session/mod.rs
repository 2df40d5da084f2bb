pub mod session;

pub use session::{Role, Session, SessionError};

pub mod date_utils;
pub mod html_utils;
pub mod log_utils;

pub use date_utils::format_appointment_date;
pub use html_utils::escape_html;
pub use log_utils::init_logging;

pub mod badge;
pub mod edition;
pub mod event_tag;
pub mod progress;
pub mod read_log;

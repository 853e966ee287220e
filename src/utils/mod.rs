pub mod log_format;

pub use log_format::{compress_label_set, preview_compact};

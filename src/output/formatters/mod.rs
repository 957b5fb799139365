mod concise;
mod json;
mod text;

pub use concise::ConciseFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;

mod json;

pub use json::JsonFileSink;

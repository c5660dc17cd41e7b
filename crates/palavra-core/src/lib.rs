pub mod settings;
pub mod status;

pub use settings::{Language, RequestSettings};
pub use status::FetchStatus;

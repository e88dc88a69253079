pub mod import;
pub mod metadata;
pub mod preview;
pub mod resolve;

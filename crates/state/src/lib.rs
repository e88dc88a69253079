pub mod catalog;
pub mod event;
pub mod level;
pub mod project;
pub mod selection;
pub mod time;
pub mod timeline;

pub mod configs;
pub mod timeline;

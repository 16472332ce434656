pub mod timeline_event;
pub mod timeline_layout;

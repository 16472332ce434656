pub mod timeline_error;

pub mod timeline_schedule;

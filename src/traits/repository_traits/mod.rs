pub mod smtp_repository;

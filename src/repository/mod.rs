pub mod smtp_repository_impl;

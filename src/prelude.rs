pub use std::{
    env, fs,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};

pub use anyhow::Context;
pub use async_trait::async_trait;
pub use derive_new::new;
pub use getset::Getters;
pub use log::info;

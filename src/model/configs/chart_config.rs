use crate::common::*;

use crate::env_configuration::env_config::*;

pub const CHART_TITLE: &str = "PhD Timeline Overview";
pub const CHART_WIDTH: u32 = 1000;
pub const CHART_HEIGHT: u32 = 600;

#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct ChartConfig {
    output_path: PathBuf,
    title: String,
    width: u32,
    height: u32,
}

impl ChartConfig {
    #[doc = "Chart settings with the output path taken from `TIMELINE_IMAGE_PATH`"]
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let output_path: PathBuf = PathBuf::from(var_or_default(
            lookup,
            TIMELINE_IMAGE_PATH,
            DEFAULT_TIMELINE_IMAGE_PATH,
        ));

        Self::with_output_path(output_path)
    }

    pub fn from_env() -> Self {
        Self::from_lookup(&read_env_var)
    }

    pub fn with_output_path(output_path: impl Into<PathBuf>) -> Self {
        ChartConfig::new(
            output_path.into(),
            CHART_TITLE.to_string(),
            CHART_WIDTH,
            CHART_HEIGHT,
        )
    }
}

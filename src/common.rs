pub use crate::external_deps::*;
pub use crate::prelude::*;

pub use crate::errors::timeline_error::*;

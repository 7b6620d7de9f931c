use thiserror::Error;

use crate::model::{AttemptError, ParseModuleError, ParseTestRefError, PartError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Attempt(#[from] AttemptError),
    #[error(transparent)]
    Module(#[from] ParseModuleError),
    #[error(transparent)]
    TestRef(#[from] ParseTestRefError),
    #[error(transparent)]
    Part(#[from] PartError),
}

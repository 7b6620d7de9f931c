mod attempt;
mod module;
mod test_ref;

pub use attempt::{AttemptDraft, AttemptError, AttemptRecord};
pub use module::{Module, ParseModuleError};
pub use test_ref::{ParseTestRefError, Part, PartError, TestRef};

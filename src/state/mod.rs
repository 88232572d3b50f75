//! Workflow state module

mod fields;
mod record;
mod session;
mod validate;

pub use fields::*;
pub use record::*;
pub use session::*;
pub use validate::*;

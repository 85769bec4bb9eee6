pub mod checks;
pub mod error;
pub mod report;
pub mod run;

pub use error::{CheckError, Error, Result};

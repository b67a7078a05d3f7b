mod aggregate;
mod command;
mod error;
mod filters;
mod query;
mod types;
mod validation;

pub use aggregate::*;
pub use command::Command;
pub use error::{Error, Result, STORAGE_TIMEOUT};
pub use filters::*;
pub use query::{Query, RecipesQuery};
pub use types::*;
pub use validation::*;

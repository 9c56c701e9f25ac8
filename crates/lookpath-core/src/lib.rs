#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod env;
pub mod error;
pub mod version;
pub mod which;

pub use env::{Environment, RealEnvironment};
pub use error::Error;
pub use version::VERSION;
pub use which::{which, which_sync};

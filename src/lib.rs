//! # Greeter
//!
//! Produces a greeting for a name, and a small CLI that prints it.
//!
//! ```
//! assert_eq!(greeter::greet("Jules"), "Hello, Jules!");
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]

pub mod cli;
pub mod error;
pub mod greeting;
pub mod logging;

pub use error::{Error, Result};

pub use greeting::{DEFAULT_NAME, Greeter, Template, greet};

pub use cli::{Cli, execute};

//! Command handlers.
//!
//! One module per subcommand. Handlers translate parsed CLI arguments into
//! core service calls and render the results; no business logic lives here.

pub mod completions;
pub mod init;
pub mod inspect;
pub mod new;

//! Library side of the `medcode` command line: logging setup and the stage
//! runners the subcommands call.

pub mod logging;
pub mod pipeline;
pub mod types;

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::parse_invocation, CliConfig};
pub use crate::core::solver::{assess, write_report};
pub use domain::model::Assessment;
pub use utils::error::{Result, SolverError};

use domain::ports::ConfigProvider;
use std::ffi::OsString;
use std::io::Write;
use utils::validation::Validate;

/// Parses `args` (program name first), checks the sides and writes the
/// report to `out`.
pub fn run<I, T, W>(args: I, out: &mut W) -> Result<Assessment>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    W: Write,
{
    let config = parse_invocation(args)?;
    let sides = config.validate()?;
    let assessment = assess(sides);
    write_report(out, &assessment, config.verbose())?;
    Ok(assessment)
}

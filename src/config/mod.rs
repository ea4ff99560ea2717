pub mod cli;

use crate::domain::model::{Side, TriangleSides};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    parse_c_float, validate_positive_length, validate_required_field, Validate,
};
use clap::Parser;

/// Option values are kept as raw text and converted with `atof` rules, so a
/// malformed number is a zero length rather than a parse failure.
#[derive(Debug, Clone, Parser)]
#[command(name = "pyth-solver")]
#[command(about = "Check whether two legs and a hypotenuse form a right triangle")]
#[command(disable_help_flag = true, args_override_self = true)]
pub struct CliConfig {
    #[arg(short = 'v', help = "Print the squared side lengths")]
    pub verbose: bool,

    #[arg(short = 'a', value_name = "FLOAT", allow_hyphen_values = true, help = "First leg")]
    pub a: Option<String>,

    #[arg(short = 'b', value_name = "FLOAT", allow_hyphen_values = true, help = "Second leg")]
    pub b: Option<String>,

    #[arg(short = 'c', value_name = "FLOAT", allow_hyphen_values = true, help = "Hypotenuse")]
    pub c: Option<String>,

    /// Non-option operands; accepted and ignored.
    #[arg(hide = true)]
    pub operands: Vec<String>,
}

impl CliConfig {
    fn raw(&self, side: Side) -> Option<&str> {
        match side {
            Side::A => self.a.as_deref(),
            Side::B => self.b.as_deref(),
            Side::C => self.c.as_deref(),
        }
    }
}

impl ConfigProvider for CliConfig {
    fn verbose(&self) -> bool {
        self.verbose
    }

    fn side(&self, side: Side) -> Option<f32> {
        self.raw(side).map(|text| parse_c_float(text) as f32)
    }
}

impl Validate for CliConfig {
    type Output = TriangleSides;

    fn validate(&self) -> Result<TriangleSides> {
        let checked = |side: Side| -> Result<f32> {
            let value = validate_required_field(side.name(), self.side(side))?;
            validate_positive_length(side.name(), value)
        };

        Ok(TriangleSides {
            a: checked(Side::A)?,
            b: checked(Side::B)?,
            c: checked(Side::C)?,
        })
    }
}

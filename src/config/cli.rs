use crate::config::CliConfig;
use crate::utils::error::{Result, SolverError};
use clap::Parser;
use std::ffi::OsString;

/// Total argument counts (program name included) that are always rejected.
/// Kept from the historical tool: it catches `-a3 -b4 -c5` and `-a 3`, but
/// also rejects otherwise valid invocations of that length.
pub const REJECTED_ARG_COUNTS: [usize; 2] = [3, 4];

/// Short options that take a value.
const VALUE_OPTIONS: [char; 3] = ['a', 'b', 'c'];

/// Parses `args` (program name first) into a [`CliConfig`].
///
/// Option errors take precedence over the argument-count check; both exit
/// with status 1 so the order only affects which cause is logged.
pub fn parse_invocation<I, T>(args: I) -> Result<CliConfig>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let count = args.len();

    let config = CliConfig::try_parse_from(keep_attached_equals(args))?;

    if REJECTED_ARG_COUNTS.contains(&count) {
        return Err(SolverError::ArgumentCountError { count });
    }

    if !config.operands.is_empty() {
        tracing::debug!("Ignoring operands: {:?}", config.operands);
    }
    tracing::debug!("CLI config: {:?}", config);

    Ok(config)
}

/// clap drops the `=` in `-a=3`; the value is `=3` here, so such tokens are
/// split into `-a` and `=3` before parsing. Tokens consumed as the value of
/// a preceding option, and everything after `--`, are left untouched.
fn keep_attached_equals(args: Vec<OsString>) -> Vec<OsString> {
    let mut out = Vec::with_capacity(args.len() + 1);
    let mut iter = args.into_iter();
    out.extend(iter.next());

    let mut value_pending = false;
    let mut options_done = false;
    for arg in iter {
        if value_pending || options_done {
            value_pending = false;
            out.push(arg);
            continue;
        }
        let Some(text) = arg.to_str() else {
            out.push(arg);
            continue;
        };
        if text == "--" {
            options_done = true;
            out.push(arg);
            continue;
        }
        if text == "-" || !text.starts_with('-') || text.starts_with("--") {
            out.push(arg);
            continue;
        }

        let mut split_at = None;
        for (i, ch) in text.char_indices().skip(1) {
            if VALUE_OPTIONS.contains(&ch) {
                let value_start = i + ch.len_utf8();
                if value_start == text.len() {
                    value_pending = true;
                } else if text[value_start..].starts_with('=') {
                    split_at = Some(value_start);
                }
                break;
            }
        }

        match split_at {
            Some(at) => {
                out.push(OsString::from(&text[..at]));
                out.push(OsString::from(&text[at..]));
            }
            None => out.push(arg),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Side;
    use crate::domain::ports::ConfigProvider;

    fn parse(args: &[&str]) -> Result<CliConfig> {
        parse_invocation(std::iter::once("pyth-solver").chain(args.iter().copied()))
    }

    #[test]
    fn test_separate_values() {
        let cfg = parse(&["-a", "3", "-b", "4", "-c", "5"]).unwrap();
        assert!(!cfg.verbose());
        assert_eq!(cfg.side(Side::A), Some(3.0));
        assert_eq!(cfg.side(Side::B), Some(4.0));
        assert_eq!(cfg.side(Side::C), Some(5.0));
    }

    #[test]
    fn test_attached_values_and_clustered_flags() {
        let cfg = parse(&["-va3", "-b4", "-c", "5", "-v"]).unwrap();
        assert!(cfg.verbose());
        assert_eq!(cfg.side(Side::A), Some(3.0));
        assert_eq!(cfg.side(Side::B), Some(4.0));
        assert_eq!(cfg.side(Side::C), Some(5.0));
    }

    #[test]
    fn test_values_may_start_with_hyphen() {
        let cfg = parse(&["-a", "-3", "-b", "4", "-c", "5"]).unwrap();
        assert_eq!(cfg.side(Side::A), Some(-3.0));

        let cfg = parse(&["-a", "-v", "-b", "4", "-c", "5"]).unwrap();
        assert!(!cfg.verbose());
        assert_eq!(cfg.a.as_deref(), Some("-v"));
    }

    #[test]
    fn test_last_occurrence_wins() {
        let cfg = parse(&["-a", "1", "-a", "3", "-b", "4", "-c", "5"]).unwrap();
        assert_eq!(cfg.side(Side::A), Some(3.0));
    }

    #[test]
    fn test_operands_are_ignored() {
        let cfg = parse(&["-a", "3", "extra", "-b", "4", "-c", "5"]).unwrap();
        assert_eq!(cfg.operands, vec!["extra".to_string()]);
        assert_eq!(cfg.side(Side::B), Some(4.0));
    }

    #[test]
    fn test_equals_stays_in_attached_value() {
        let cfg = parse(&["-a=3", "-b", "4", "-c", "5"]).unwrap();
        assert_eq!(cfg.a.as_deref(), Some("=3"));
        assert_eq!(cfg.side(Side::A), Some(0.0));

        let cfg = parse(&["-va=3", "-b", "4", "-c", "5"]).unwrap();
        assert!(cfg.verbose());
        assert_eq!(cfg.a.as_deref(), Some("=3"));
    }

    #[test]
    fn test_equals_token_used_as_value_is_untouched() {
        let cfg = parse(&["-b", "-a=3", "-c", "5"]).unwrap();
        assert_eq!(cfg.b.as_deref(), Some("-a=3"));
        assert_eq!(cfg.a, None);
    }

    #[test]
    fn test_double_dash_ends_options() {
        let cfg = parse(&["-a", "3", "-b", "4", "--", "-c", "5"]).unwrap();
        assert_eq!(cfg.c, None);
        assert_eq!(cfg.operands, vec!["-c".to_string(), "5".to_string()]);
    }

    #[test]
    fn test_keep_attached_equals_leaves_other_tokens() {
        let args: Vec<OsString> = ["pyth-solver", "-a3", "--", "-b=4", "x=1", "-v"]
            .iter()
            .map(OsString::from)
            .collect();
        assert_eq!(keep_attached_equals(args.clone()), args);
    }

    #[test]
    fn test_unknown_option_is_a_parse_error() {
        let err = parse(&["-x", "-a", "3", "-b", "4", "-c", "5"]).unwrap_err();
        assert!(matches!(err, SolverError::CliParseError(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_help_and_long_options_are_unknown() {
        assert!(matches!(parse(&["-h"]), Err(SolverError::CliParseError(_))));
        assert!(matches!(parse(&["--help"]), Err(SolverError::CliParseError(_))));
        assert!(matches!(parse(&["--a", "3"]), Err(SolverError::CliParseError(_))));
    }

    #[test]
    fn test_missing_option_value_is_a_parse_error() {
        let err = parse(&["-b", "4", "-c", "5", "-a"]).unwrap_err();
        assert!(matches!(err, SolverError::CliParseError(_)));
    }

    #[test]
    fn test_rejected_argument_counts() {
        let err = parse(&["-a3", "-b4", "-c5"]).unwrap_err();
        assert!(matches!(err, SolverError::ArgumentCountError { count: 4 }));

        let err = parse(&["-a", "3"]).unwrap_err();
        assert!(matches!(err, SolverError::ArgumentCountError { count: 3 }));
    }

    #[test]
    fn test_other_argument_counts_pass_through() {
        assert!(parse(&[]).is_ok());
        assert!(parse(&["-v"]).is_ok());
        assert!(parse(&["-a3", "-b4", "-c5", "-v"]).is_ok());
    }
}

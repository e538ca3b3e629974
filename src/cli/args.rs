use clap::{Parser, ValueEnum};

use crate::pass::WeakInputPolicy;
use crate::settings::MAX_CLI_LENGTH;

/// Most passwords one invocation will generate.
pub const MAX_COUNT: u32 = 100_000;

#[derive(Parser, Debug, Default)]
#[command(
    name = "pwforge",
    version,
    about = "Generate passwords from selected character classes and rate their strength",
    long_about = None
)]
pub struct Args {
    /// Characters per password (defaults to the saved setting, 16 out of the box)
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(0..=MAX_CLI_LENGTH as i64))]
    pub length: Option<u16>,

    /// How many passwords to generate
    #[arg(
        short,
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..=MAX_COUNT as i64)
    )]
    pub number: u32,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// How short or low-variety passwords are rated
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,

    /// Map random draws by rejection sampling instead of plain modulo
    #[arg(long)]
    pub unbiased: bool,

    /// Print the strength tier, meter value and crack-time estimate to stderr
    #[arg(long)]
    pub strength: bool,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long)]
    pub board: bool,

    /// Suppress all output except passwords
    #[arg(short, long)]
    pub quiet: bool,

    /// Ignore saved settings
    #[arg(short, long)]
    pub default: bool,

    /// Save the effective options as defaults
    #[arg(short = 'w', long)]
    pub save: bool,

    /// Open the interactive screen with the effective options
    #[arg(short, long)]
    pub interactive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Cap the score of weak inputs before rating
    Cap,
    /// Force the tier label of weak inputs down
    Override,
}

impl From<PolicyArg> for WeakInputPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Cap => WeakInputPolicy::CapScore,
            PolicyArg::Override => WeakInputPolicy::OverrideTier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_class_and_policy_flags() {
        let args = Args::try_parse_from([
            "pwforge", "-l", "20", "--no-symbols", "--policy", "override", "-n", "3",
        ])
        .unwrap();
        assert_eq!(args.length, Some(20));
        assert_eq!(args.number, 3);
        assert!(args.no_symbols && !args.no_digits);
        assert_eq!(
            args.policy.map(WeakInputPolicy::from),
            Some(WeakInputPolicy::OverrideTier)
        );
    }

    #[test]
    fn rejects_out_of_range_length() {
        assert!(Args::try_parse_from(["pwforge", "-l", "5000"]).is_err());
        assert!(Args::try_parse_from(["pwforge", "-l", "-1"]).is_err());
        assert!(Args::try_parse_from(["pwforge", "-l", "4096"]).is_ok());
    }

    #[test]
    fn rejects_out_of_range_count() {
        assert!(Args::try_parse_from(["pwforge", "-n", "0"]).is_err());
        assert!(Args::try_parse_from(["pwforge", "-n", "18446744073709551615"]).is_err());
        let max = MAX_COUNT.to_string();
        assert!(Args::try_parse_from(["pwforge", "-n", max.as_str()]).is_ok());
    }
}

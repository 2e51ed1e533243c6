use std::path::PathBuf;

use clap::{ArgAction, Parser};
use strongpass::pass::{CharacterClass, ClassSet, parse_length};
use strongpass::settings::{CONFIG_ENV, default_path};

/// Password generator with class coverage and live strength feedback.
///
/// Run without arguments for the interactive widget.
#[derive(Parser, Debug, Default)]
#[command(name = "strongpass", author, version, about)]
pub struct CliFlags {
    /// Characters per password, clamped to 4..=32 (default: 16)
    #[arg(short, long, value_name = "N", allow_hyphen_values = true, value_parser = length_arg)]
    pub length: Option<usize>,

    /// How many passwords to generate
    #[arg(short = 'n', long, value_name = "N")]
    pub number: Option<usize>,

    /// Leave out uppercase letters (A-Z)
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out lowercase letters (a-z)
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out digits (0-9)
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Print the strength estimate only, generate nothing
    #[arg(long)]
    pub strength: bool,

    /// Start from the saved settings instead of the defaults
    #[arg(short, long)]
    pub saved: bool,

    /// Save the resulting settings as the new defaults
    #[arg(long)]
    pub save: bool,

    /// Settings file to read and write
    #[arg(long, value_name = "PATH", env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Open the interactive widget
    #[arg(short, long)]
    pub interactive: bool,

    /// Suppress everything except passwords
    #[arg(short, long)]
    pub quiet: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CliFlags {
    /// `--config` if given, else the default settings location.
    pub fn settings_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(default_path)
    }

    /// Apply the `--no-*` flags to `classes`.
    pub fn apply_exclusions(&self, classes: &mut ClassSet) {
        let exclusions = [
            (self.no_upper, CharacterClass::Uppercase),
            (self.no_lower, CharacterClass::Lowercase),
            (self.no_digits, CharacterClass::Digit),
            (self.no_symbols, CharacterClass::Symbol),
        ];
        for (excluded, class) in exclusions {
            if excluded {
                classes.remove(class);
            }
        }
    }
}

/// Lengths behave like the widget's text box: garbage reads as the minimum.
fn length_arg(s: &str) -> Result<usize, String> {
    Ok(parse_length(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliFlags {
        CliFlags::try_parse_from(std::iter::once("strongpass").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn length_is_clamped() {
        assert_eq!(parse(&["-l", "12"]).length, Some(12));
        assert_eq!(parse(&["--length", "64"]).length, Some(32));
        assert_eq!(parse(&["-l", "-3"]).length, Some(4));
        assert_eq!(parse(&[]).length, None);
    }

    #[test]
    fn exclusions() {
        let flags = parse(&["--no-upper", "--no-symbols"]);
        let mut classes = ClassSet::all();
        flags.apply_exclusions(&mut classes);
        assert_eq!(
            classes.iter().collect::<Vec<_>>(),
            vec![CharacterClass::Lowercase, CharacterClass::Digit]
        );
    }

    #[test]
    fn config_flag_picks_settings_file() {
        let flags = parse(&["--config", "/tmp/strongpass-alt.json"]);
        assert_eq!(
            flags.settings_path(),
            PathBuf::from("/tmp/strongpass-alt.json")
        );
    }

    #[test]
    fn verbose_counts() {
        assert_eq!(parse(&["-vv"]).verbose, 2);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(CliFlags::try_parse_from(["strongpass", "--hex"]).is_err());
    }
}

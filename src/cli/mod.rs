pub mod commands;

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::Parser;

use crate::app::Result;
use crate::config::{Config, KeybindingConfig};
use crate::fetcher::PassageQuery;

#[derive(Parser, Debug)]
#[command(name = "bgate", version)]
#[command(about = "A terminal interface to Bible Gateway", long_about = None)]
pub struct Cli {
    /// Passage to look up, e.g. "John 3:16" or "Psalm 23"
    pub query: String,

    /// Config file to use [default: ~/.config/bgate/config.toml]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// The translation of the Bible to search for
    #[arg(short, long, env = "BGATE_TRANSLATION")]
    pub translation: Option<String>,

    /// Interactive view, scroll with j/down and k/up (`--interactive=false` turns it off)
    #[arg(
        short,
        long,
        env = "BGATE_INTERACTIVE",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub interactive: Option<bool>,

    /// Horizontal padding in columns
    #[arg(short, long, env = "BGATE_PADDING")]
    pub padding: Option<usize>,
}

/// Everything a run needs, with flags and environment layered over the
/// config file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub query: PassageQuery,
    pub interactive: bool,
    pub padding: usize,
    pub base_url: String,
    pub keybindings: KeybindingConfig,
}

impl Cli {
    pub fn into_settings(self, config: Config) -> Result<Settings> {
        let translation = self.translation.or(config.translation);
        Ok(Settings {
            query: PassageQuery::new(&self.query, translation.as_deref())?,
            interactive: self.interactive.unwrap_or(config.interactive),
            padding: self.padding.unwrap_or(config.padding),
            base_url: config.base_url,
            keybindings: config.keybindings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("bgate").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_requires_exactly_one_query() {
        assert!(Cli::try_parse_from(["bgate"]).is_err());
        assert!(Cli::try_parse_from(["bgate", "John 3", "John 4"]).is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = parse(&["-t", "NIV", "-p", "4", "-i", "Psalm 23"]);
        let config = Config {
            translation: Some("KJV".into()),
            padding: 1,
            ..Config::default()
        };

        let settings = cli.into_settings(config).unwrap();
        assert_eq!(settings.query.reference, "Psalm 23");
        assert_eq!(settings.query.translation.as_deref(), Some("NIV"));
        assert_eq!(settings.padding, 4);
        assert!(settings.interactive);
    }

    #[test]
    fn test_config_fills_unset_flags() {
        let cli = Cli {
            query: "Genesis 1".into(),
            config: None,
            translation: None,
            interactive: None,
            padding: None,
        };
        let config = Config {
            translation: Some("KJV".into()),
            interactive: true,
            padding: 2,
            ..Config::default()
        };

        let settings = cli.into_settings(config).unwrap();
        assert_eq!(settings.query.translation.as_deref(), Some("KJV"));
        assert_eq!(settings.padding, 2);
        assert!(settings.interactive);
    }

    #[test]
    fn test_explicit_false_overrides_config() {
        let config = Config {
            interactive: true,
            ..Config::default()
        };
        let settings = parse(&["--interactive=false", "Psalm 23"])
            .into_settings(config)
            .unwrap();
        assert!(!settings.interactive);
    }

    #[test]
    fn test_short_flag_does_not_swallow_query() {
        let cli = parse(&["-i", "Psalm 23"]);
        assert_eq!(cli.interactive, Some(true));
        assert_eq!(cli.query, "Psalm 23");
    }

    #[test]
    fn test_environment_overrides_config() {
        // The only test that touches BGATE_INTERACTIVE.
        let config = Config {
            interactive: true,
            ..Config::default()
        };

        std::env::set_var("BGATE_INTERACTIVE", "false");
        let cli = Cli::try_parse_from(["bgate", "Psalm 23"]);
        std::env::remove_var("BGATE_INTERACTIVE");

        let settings = cli.unwrap().into_settings(config).unwrap();
        assert!(!settings.interactive);
    }

    #[test]
    fn test_blank_query_is_rejected() {
        let cli = Cli {
            query: "  ".into(),
            config: None,
            translation: None,
            interactive: None,
            padding: None,
        };
        assert!(cli.into_settings(Config::default()).is_err());
    }
}

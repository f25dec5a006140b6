use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gramm")]
#[command(about = "Grammar and spelling checks against a LanguageTool endpoint")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Config file (defaults to the platform config dir)
	#[arg(long, short = 'c', value_name = "PATH", global = true)]
	pub config: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Check text and print a flat report
	Check {
		/// Language code, overriding the configured one
		#[arg(long, short = 'l')]
		language: Option<String>,

		/// Text to check (read from stdin if omitted)
		text: Option<String>,
	},
	/// Print the effective configuration
	Config,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn check_takes_inline_text_and_language() {
		let cli = Cli::try_parse_from(["gramm", "check", "-l", "en-US", "Teh cat"]).unwrap();
		match cli.command {
			Command::Check { language, text } => {
				assert_eq!(language.as_deref(), Some("en-US"));
				assert_eq!(text.as_deref(), Some("Teh cat"));
			}
			Command::Config => panic!("expected check"),
		}
	}

	#[test]
	fn global_flags_follow_subcommand() {
		let cli = Cli::try_parse_from(["gramm", "config", "-v", "--config", "/tmp/g.toml"]).unwrap();
		assert!(cli.verbose);
		assert_eq!(cli.config, Some(PathBuf::from("/tmp/g.toml")));
	}

	#[test]
	fn subcommand_is_required() {
		assert!(Cli::try_parse_from(["gramm"]).is_err());
	}
}

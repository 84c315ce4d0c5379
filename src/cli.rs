use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::ExplicitOptions;
use crate::output::ColorMode;
use crate::validator::DEFAULT_LINT_TOOL;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

/// Output format for `config show`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigOutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "commit-guard")]
#[command(author, version, about = "Validate XML, YAML and Python files at commit and push time")]
#[command(long_about = "Git hook gate that validates the files a commit or push touches.\n\n\
    Exit codes:\n  \
    0   - Allowed (all checks passed, or advisory mode)\n  \
    1   - Rejected (a check failed and reject mode is on)\n  \
    255 - Configuration, input or startup error")]
pub struct Cli {
    /// Increase output verbosity (-v prints passing checks and debug logs, -vv traces)
    #[arg(short, long, action = clap::ArgAction::Count, overrides_with = "no_verbose", global = true)]
    pub verbose: u8,

    /// Do not print passing checks, even when the configuration file asks for it
    #[arg(long, overrides_with = "verbose", global = true)]
    pub no_verbose: bool,

    /// Suppress the summary line and passing checks
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Path to the configuration file [default: .commit-guard.conf]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: OverrideArgs,

    /// Lint program invoked for Python files
    #[arg(long, default_value = DEFAULT_LINT_TOOL, global = true)]
    pub lint_tool: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Command-line overrides; each one beats the configuration file.
#[derive(Args, Debug, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct OverrideArgs {
    /// Validate XML files
    #[arg(long, overrides_with = "no_xml", global = true)]
    pub xml: bool,

    /// Do not validate XML files
    #[arg(long, overrides_with = "xml", global = true)]
    pub no_xml: bool,

    /// Validate YAML files
    #[arg(long, overrides_with = "no_yaml", global = true)]
    pub yaml: bool,

    /// Do not validate YAML files
    #[arg(long, overrides_with = "yaml", global = true)]
    pub no_yaml: bool,

    /// Lint Python files
    #[arg(long, overrides_with = "no_python", global = true)]
    pub python: bool,

    /// Do not lint Python files (a non-zero threshold still enables linting)
    #[arg(long, overrides_with = "python", global = true)]
    pub no_python: bool,

    /// Block the commit or push when a check fails
    #[arg(long, overrides_with = "no_reject", global = true)]
    pub reject: bool,

    /// Report failures without blocking (advisory mode)
    #[arg(long, overrides_with = "reject", global = true)]
    pub no_reject: bool,

    /// Minimum lint score out of 10; 0 disables the score check
    #[arg(long, value_name = "SCORE", global = true)]
    pub threshold: Option<f64>,

    /// Enable the docbuilder setting
    #[arg(long, overrides_with = "no_docbuilder", global = true)]
    pub docbuilder: bool,

    /// Disable the docbuilder setting
    #[arg(long, overrides_with = "docbuilder", global = true)]
    pub no_docbuilder: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate staged files (run from a pre-commit hook)
    PreCommit(PreCommitArgs),

    /// Validate pushed revisions read from stdin (run from a pre-receive hook)
    PreReceive,

    /// Configuration file utilities
    Config(ConfigArgs),

    /// Generate a commented configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug, Default)]
pub struct PreCommitArgs {
    /// Check every tracked file instead of only staged ones
    #[arg(long)]
    pub all: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the generated file
    #[arg(short, long, default_value = crate::config::DEFAULT_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the resolved configuration and any warnings
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ConfigOutputFormat,
    },
}

const fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

impl Cli {
    /// Explicit options for configuration resolution. Unset flags stay `None`.
    #[must_use]
    pub const fn explicit_options(&self) -> ExplicitOptions {
        let o = &self.overrides;
        ExplicitOptions {
            docbuilder: flag_pair(o.docbuilder, o.no_docbuilder),
            python: flag_pair(o.python, o.no_python),
            reject: flag_pair(o.reject, o.no_reject),
            threshold: o.threshold,
            verbose: flag_pair(self.verbose > 0, self.no_verbose),
            xml: flag_pair(o.xml, o.no_xml),
            yaml: flag_pair(o.yaml, o.no_yaml),
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

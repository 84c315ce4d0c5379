use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::output::{ColorMode, ErrorOutput};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, GuardError, Result};

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            ErrorOutput::new(ColorMode::from(cli.color)).print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes the commented template configuration.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(GuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template()).map_err(|source| GuardError::FileWrite {
        path: output_path.clone(),
        source,
    })?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub const fn generate_config_template() -> &'static str {
    r"# commit-guard configuration
# One 'key: value' per line. Any value other than 'false' turns a switch on.
# Command-line options (--xml, --no-reject, --threshold, ...) override this file.

# Check that XML files are well-formed
xml: true

# Check that YAML files parse
yaml: true

# Lint Python files (*.py and scripts with a python shebang)
python: false

# Minimum lint score out of 10; 0 disables the score check.
# A non-zero value enables Python linting even when 'python' is false.
treshold: 0

# Block the commit or push when any check fails.
# With 'false' failures are reported but the operation goes through.
reject: true

# Print passing checks as well as failures
verbose: false

# Accepted for compatibility; no check uses it
# docbuilder: false
"
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;

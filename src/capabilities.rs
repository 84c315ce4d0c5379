//! Parser support compiled into this build, resolved once at startup.

use crate::{GuardError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub xml: bool,
    pub yaml: bool,
}

impl Capabilities {
    #[must_use]
    pub const fn detect() -> Self {
        Self {
            xml: cfg!(feature = "xml"),
            yaml: cfg!(feature = "yaml"),
        }
    }

    /// Fails when a parser every run depends on is missing.
    ///
    /// YAML support is optional and only degrades the configuration.
    ///
    /// # Errors
    /// Returns `MissingDependency` naming the absent crate.
    pub fn require_core(&self) -> Result<()> {
        if self.xml {
            Ok(())
        } else {
            Err(GuardError::MissingDependency("quick-xml"))
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::detect()
    }
}

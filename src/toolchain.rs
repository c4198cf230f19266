//! Availability probe for the external font-conversion executable

use crate::error::{Error, Result};

/// Something that can tell whether the font toolchain is installed.
///
/// Passed into [`crate::prepare`] so tests can swap it out.
pub trait Toolchain {
    /// Executable name, used in the error message
    fn name(&self) -> &str;

    fn is_available(&self) -> bool;
}

/// FontForge, looked up on `PATH`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FontForge;

impl Toolchain for FontForge {
    fn name(&self) -> &str {
        "fontforge"
    }

    fn is_available(&self) -> bool {
        which::which(self.name()).is_ok()
    }
}

/// Fail with [`Error::ToolchainMissing`] unless `toolchain` is available.
pub fn check_toolchain(toolchain: &dyn Toolchain) -> Result<()> {
    if toolchain.is_available() {
        Ok(())
    } else {
        Err(Error::ToolchainMissing(toolchain.name().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stub(bool);

    impl Toolchain for Stub {
        fn name(&self) -> &str {
            "fontforge"
        }

        fn is_available(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_missing_toolchain_asks_for_install() {
        let err = check_toolchain(&Stub(false)).unwrap_err();

        assert!(matches!(err, Error::ToolchainMissing(_)));
        assert!(err.to_string().contains("install fontforge"));
    }

    #[test]
    fn test_available_toolchain_passes() {
        assert!(check_toolchain(&Stub(true)).is_ok());
    }
}

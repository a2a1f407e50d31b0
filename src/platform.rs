//! Translation between the manifest's platform vocabulary and Adoptium's.
//!
//! The manifest names operating systems and CPU architectures the way the
//! build does (`macos`, `amd64`); the Adoptium API wants its own tokens
//! (`mac`, `x64`). Both tables are small, fixed and matched exactly: no case
//! folding and no aliases.

use crate::error::{JdkPinError, Result};
use std::collections::BTreeMap;
use std::fmt;

/// Manifest OS token → Adoptium `os` query value.
const OS_TABLE: &[(&str, &str)] = &[
    ("windows", "windows"),
    ("linux", "linux"),
    ("macos", "mac"),
];

/// Manifest architecture token → Adoptium `architecture` query value.
const ARCH_TABLE: &[(&str, &str)] = &[("amd64", "x64"), ("aarch64", "aarch64")];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Os,
    Arch,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            LookupKind::Os => "operating system",
            LookupKind::Arch => "architecture",
        };
        write!(f, "{kind}")
    }
}

#[derive(Debug, Clone)]
pub struct PlatformMapper {
    os: BTreeMap<&'static str, &'static str>,
    arch: BTreeMap<&'static str, &'static str>,
}

impl PlatformMapper {
    pub fn new() -> Self {
        Self {
            os: OS_TABLE.iter().copied().collect(),
            arch: ARCH_TABLE.iter().copied().collect(),
        }
    }

    /// Look up `value` in the table for `kind`.
    ///
    /// Fails with [`JdkPinError::Lookup`] listing every valid key when the
    /// value is not in the table.
    pub fn map(&self, kind: LookupKind, value: &str) -> Result<&'static str> {
        let table = self.table(kind);
        table
            .get(value)
            .copied()
            .ok_or_else(|| JdkPinError::Lookup {
                kind,
                value: value.to_string(),
                valid: table.keys().map(|key| key.to_string()).collect(),
            })
    }

    pub fn map_os(&self, platform: &str) -> Result<&'static str> {
        self.map(LookupKind::Os, platform)
    }

    pub fn map_arch(&self, architecture: &str) -> Result<&'static str> {
        self.map(LookupKind::Arch, architecture)
    }

    fn table(&self, kind: LookupKind) -> &BTreeMap<&'static str, &'static str> {
        match kind {
            LookupKind::Os => &self.os,
            LookupKind::Arch => &self.arch,
        }
    }
}

impl Default for PlatformMapper {
    fn default() -> Self {
        Self::new()
    }
}

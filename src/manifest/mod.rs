// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The pinned-JDK manifest.
//!
//! A YAML mapping whose `jdks` key holds the list of pinned JDKs:
//!
//! ```yaml
//! jdks:
//!   - platform: linux
//!     architecture: amd64
//!     vendor: adoptium
//!     version: jdk-21.0.3+9
//!     sha256: fffa52c22d797b715a962e6c8d11ec7d79b90dd819b5bc51d62137ea4b22a340
//! ```
//!
//! Only `adoptium` entries are typed strictly. Entries of other vendors are
//! read leniently and never written. Saving edits the `version` and `sha256`
//! scalars of changed entries in the source text, so every other byte of the
//! file survives.

mod edit;

use crate::error::{JdkPinError, Result};
use log::debug;
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const JDKS_KEY: &str = "jdks";

/// The only vendor whose entries are kept up to date automatically.
pub const SUPPORTED_VENDOR: &str = "adoptium";

/// A release name and the checksum of its artifact. The two only ever travel
/// together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePin {
    pub version: String,
    pub sha256: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JdkEntry {
    pub platform: String,
    pub architecture: String,
    pub vendor: String,
    pub version: String,
    pub sha256: String,
    /// Keys other than the five above, as written.
    pub extra: Mapping,
}

impl JdkEntry {
    pub fn is_managed(&self) -> bool {
        self.vendor == SUPPORTED_VENDOR
    }

    pub fn pin(&self) -> ReleasePin {
        ReleasePin {
            version: self.version.clone(),
            sha256: self.sha256.clone(),
        }
    }

    /// Replace version and checksum together, returning the previous pair.
    pub fn replace_pin(&mut self, pin: ReleasePin) -> ReleasePin {
        let previous = self.pin();
        self.version = pin.version;
        self.sha256 = pin.sha256;
        previous
    }
}

impl fmt::Display for JdkEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}/{})",
            self.vendor, self.version, self.platform, self.architecture
        )
    }
}

/// An entry as found in the file, before deciding how strictly to read it.
#[derive(Deserialize)]
struct RawEntry {
    #[serde(default)]
    platform: Value,
    #[serde(default)]
    architecture: Value,
    #[serde(default)]
    vendor: Value,
    #[serde(default)]
    version: Value,
    #[serde(default)]
    sha256: Value,
    #[serde(flatten)]
    extra: Mapping,
}

impl RawEntry {
    fn into_entry(self) -> std::result::Result<JdkEntry, String> {
        let vendor = scalar_text(&self.vendor);
        if vendor != SUPPORTED_VENDOR {
            return Ok(JdkEntry {
                platform: scalar_text(&self.platform),
                architecture: scalar_text(&self.architecture),
                vendor,
                version: scalar_text(&self.version),
                sha256: scalar_text(&self.sha256),
                extra: self.extra,
            });
        }

        Ok(JdkEntry {
            platform: required_string("platform", self.platform)?,
            architecture: required_string("architecture", self.architecture)?,
            vendor,
            version: required_string("version", self.version)?,
            sha256: required_string("sha256", self.sha256)?,
            extra: self.extra,
        })
    }
}

fn required_string(field: &str, value: Value) -> std::result::Result<String, String> {
    match value {
        Value::String(text) => Ok(text),
        Value::Null => Err(format!("missing field '{field}'")),
        other => Err(format!(
            "'{field}' must be a string, got '{}' (quote it)",
            scalar_text(&other)
        )),
    }
}

/// Display form of a scalar of an entry that is not type-checked.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        other => serde_yaml::to_string(other)
            .map(|text| text.trim_end().to_string())
            .unwrap_or_default(),
    }
}

#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    source: String,
    loaded: Vec<ReleasePin>,
    pub jdks: Vec<JdkEntry>,
}

impl Manifest {
    /// Read and parse the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| load_error(path, e))?;
        let manifest = Self::from_yaml(path, &contents)?;
        debug!(
            "Loaded {} JDK entries from {}",
            manifest.jdks.len(),
            path.display()
        );
        Ok(manifest)
    }

    pub fn from_yaml(path: &Path, contents: &str) -> Result<Self> {
        let document: Mapping =
            serde_yaml::from_str(contents).map_err(|e| load_error(path, e))?;

        let jdks_value = document
            .get(JDKS_KEY)
            .ok_or_else(|| load_error(path, format!("missing top-level '{JDKS_KEY}' key")))?;
        let raw: Vec<RawEntry> = serde_yaml::from_value(jdks_value.clone())
            .map_err(|e| load_error(path, format!("invalid '{JDKS_KEY}' list: {e}")))?;

        let jdks = raw
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                entry
                    .into_entry()
                    .map_err(|reason| load_error(path, format!("entry {}: {reason}", index + 1)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            path: path.to_path_buf(),
            source: contents.to_string(),
            loaded: jdks.iter().map(JdkEntry::pin).collect(),
            jdks,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The document with every changed pin written back into the source
    /// text.
    ///
    /// Only `version` and `sha256` may differ from what was loaded. Entries
    /// whose pins cannot be located in the text (flow style, block scalars)
    /// fail with [`JdkPinError::Write`].
    pub fn to_yaml(&self) -> Result<String> {
        let changed: Vec<usize> = self
            .jdks
            .iter()
            .zip(&self.loaded)
            .enumerate()
            .filter(|(_, (entry, loaded))| entry.pin() != **loaded)
            .map(|(index, _)| index)
            .collect();
        if changed.is_empty() {
            return Ok(self.source.clone());
        }

        let spans = edit::locate_pins(&self.source);
        let mut edits = Vec::new();
        for index in changed {
            let span = spans.get(index).and_then(Option::as_ref).ok_or_else(|| {
                self.write_error(format!(
                    "entry {} cannot be edited in place; use a block-style entry with \
                     single-line 'version' and 'sha256' values",
                    index + 1
                ))
            })?;
            let entry = &self.jdks[index];
            for (range, value) in [
                (&span.version, &entry.version),
                (&span.sha256, &entry.sha256),
            ] {
                let rendered = edit::render_scalar(&self.source[range.clone()], value)?;
                edits.push((range.clone(), rendered));
            }
        }
        let contents = edit::apply_edits(&self.source, edits);

        let rewritten = Self::from_yaml(&self.path, &contents)
            .map_err(|e| self.write_error(format!("edited manifest no longer parses: {e}")))?;
        if rewritten.jdks != self.jdks {
            return Err(self.write_error(
                "edited manifest does not match the updated entries".to_string(),
            ));
        }
        Ok(contents)
    }

    /// Overwrite the source file. The new content is staged in a temporary
    /// file next to it and renamed into place.
    pub fn save(&self) -> Result<()> {
        let contents = self.to_yaml()?;
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp_file = NamedTempFile::new_in(parent).map_err(|e| self.write_error(e))?;
        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| self.write_error(e))?;
        if let Ok(metadata) = fs::metadata(&self.path) {
            fs::set_permissions(temp_file.path(), metadata.permissions())
                .map_err(|e| self.write_error(e))?;
        }
        temp_file
            .persist(&self.path)
            .map_err(|e| self.write_error(e.error))?;

        debug!("Wrote {} bytes to {}", contents.len(), self.path.display());
        Ok(())
    }

    fn write_error(&self, reason: impl fmt::Display) -> JdkPinError {
        JdkPinError::Write {
            path: self.path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

fn load_error(path: &Path, reason: impl fmt::Display) -> JdkPinError {
    JdkPinError::Load {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

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

use crate::api::ReleaseSource;
use crate::error::Result;
use crate::manifest::{Manifest, ReleasePin};
use crate::resolver::ReleaseResolver;
use log::{debug, info};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Every managed entry already pins the latest release; nothing written.
    Unchanged,
    /// At least one entry changed and the manifest was rewritten.
    Written,
    /// At least one entry is stale, but writing was disabled.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryChange {
    /// Position of the entry in the manifest's `jdks` list.
    pub index: usize,
    pub platform: String,
    pub architecture: String,
    pub previous: ReleasePin,
    pub current: ReleasePin,
}

#[derive(Debug, Clone)]
pub struct UpdateReport {
    pub manifest_path: PathBuf,
    pub checked: usize,
    pub skipped: usize,
    pub changes: Vec<EntryChange>,
    pub outcome: UpdateOutcome,
}

/// Brings every managed entry of a manifest up to the latest release.
///
/// The manifest is read once up front and written at most once at the end,
/// and only when something changed. Any error aborts the run before the
/// write, so the file on disk is either fully updated or untouched.
pub struct ManifestUpdater<S: ReleaseSource> {
    resolver: ReleaseResolver<S>,
    manifest_path: PathBuf,
    write: bool,
}

impl<S: ReleaseSource> ManifestUpdater<S> {
    pub fn new(source: S, manifest_path: &Path) -> Self {
        Self {
            resolver: ReleaseResolver::new(source),
            manifest_path: manifest_path.to_path_buf(),
            write: true,
        }
    }

    /// Resolve and report, but never touch the file.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.write = !dry_run;
        self
    }

    pub fn run(&self) -> Result<UpdateReport> {
        let mut manifest = Manifest::load(&self.manifest_path)?;
        info!(
            "Checking {} pinned JDK(s) in {}",
            manifest.jdks.len(),
            self.manifest_path.display()
        );

        let mut checked = 0;
        let mut skipped = 0;
        let mut changes = Vec::new();

        for (index, entry) in manifest.jdks.iter_mut().enumerate() {
            if !entry.is_managed() {
                debug!("Skipping {entry}: vendor is not managed");
                skipped += 1;
                continue;
            }

            let latest = self
                .resolver
                .resolve(entry)
                .map_err(|e| e.for_entry(entry.to_string()))?;
            checked += 1;

            if latest.version == entry.version {
                info!("{entry} is up to date");
                continue;
            }

            info!("{entry} -> {}", latest.version);
            let current = latest.clone();
            let previous = entry.replace_pin(latest);
            changes.push(EntryChange {
                index,
                platform: entry.platform.clone(),
                architecture: entry.architecture.clone(),
                previous,
                current,
            });
        }

        let outcome = if changes.is_empty() {
            info!("All pinned JDKs are up to date");
            UpdateOutcome::Unchanged
        } else if self.write {
            manifest.save()?;
            info!(
                "Updated {} entr{} in {}",
                changes.len(),
                if changes.len() == 1 { "y" } else { "ies" },
                manifest.path().display()
            );
            UpdateOutcome::Written
        } else {
            UpdateOutcome::Stale
        };

        Ok(UpdateReport {
            manifest_path: self.manifest_path.clone(),
            checked,
            skipped,
            changes,
            outcome,
        })
    }
}

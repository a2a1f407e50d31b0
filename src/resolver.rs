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

use crate::api::{ReleaseQuery, ReleaseSource, parse_latest_release};
use crate::error::Result;
use crate::manifest::{JdkEntry, ReleasePin};
use crate::platform::PlatformMapper;
use crate::version::extract_major_version;
use log::debug;

/// Finds the newest release for the release line, OS and architecture of a
/// manifest entry.
pub struct ReleaseResolver<S: ReleaseSource> {
    source: S,
    mapper: PlatformMapper,
}

impl<S: ReleaseSource> ReleaseResolver<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            mapper: PlatformMapper::new(),
        }
    }

    /// Build the API query for `entry` without sending it.
    pub fn query_for(&self, entry: &JdkEntry) -> Result<ReleaseQuery> {
        let major = extract_major_version(&entry.version)?;
        let os = self.mapper.map_os(&entry.platform)?;
        let architecture = self.mapper.map_arch(&entry.architecture)?;

        Ok(ReleaseQuery::new(major).os(os).architecture(architecture))
    }

    /// One request per call; the first descriptor in the answer wins.
    pub fn resolve(&self, entry: &JdkEntry) -> Result<ReleasePin> {
        let query = self.query_for(entry)?;
        let body = self.source.fetch_latest_assets(&query)?;
        let latest = parse_latest_release(&body)?;

        debug!(
            "Latest JDK {} for {}/{}: {} ({})",
            query.feature_version,
            query.os,
            query.architecture,
            latest.release_name,
            latest.link.as_deref().unwrap_or("no download link")
        );

        Ok(ReleasePin {
            version: latest.release_name,
            sha256: latest.checksum,
        })
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

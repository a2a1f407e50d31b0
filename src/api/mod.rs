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

//! Access to the Adoptium release API (`api.adoptium.net`).

pub mod client;
pub mod models;
pub mod query;

#[cfg(test)]
mod tests;

pub use client::ApiClient;
pub use models::{LatestRelease, ReleaseDescriptor, parse_latest_release};
pub use query::ReleaseQuery;

use crate::error::Result;

/// Something that can answer a "latest release" query with the raw response
/// body.
///
/// Implementations must fail with [`crate::error::JdkPinError::Fetch`] when
/// the upstream answers with a non-success status.
pub trait ReleaseSource {
    fn fetch_latest_assets(&self, query: &ReleaseQuery) -> Result<String>;
}

impl ReleaseSource for ApiClient {
    fn fetch_latest_assets(&self, query: &ReleaseQuery) -> Result<String> {
        self.get_latest_assets(query)
    }
}

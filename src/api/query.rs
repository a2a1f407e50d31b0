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

pub const DEFAULT_JVM_IMPL: &str = "hotspot";
pub const DEFAULT_IMAGE_TYPE: &str = "jdk";

/// Parameters of an `assets/latest/{feature_version}/{jvm_impl}` request.
///
/// `os` and `architecture` are already in Adoptium's vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseQuery {
    pub feature_version: u32,
    pub jvm_impl: String,
    pub os: String,
    pub architecture: String,
    pub image_type: String,
}

impl ReleaseQuery {
    pub fn new(feature_version: u32) -> Self {
        Self {
            feature_version,
            jvm_impl: DEFAULT_JVM_IMPL.to_string(),
            os: String::new(),
            architecture: String::new(),
            image_type: DEFAULT_IMAGE_TYPE.to_string(),
        }
    }

    pub fn os(mut self, os: impl Into<String>) -> Self {
        self.os = os.into();
        self
    }

    pub fn architecture(mut self, architecture: impl Into<String>) -> Self {
        self.architecture = architecture.into();
        self
    }

    /// Path below the API base URL, without the query string.
    pub fn path(&self) -> String {
        format!(
            "/v3/assets/latest/{}/{}",
            self.feature_version, self.jvm_impl
        )
    }

    /// Query-string parameters in the order they are sent.
    pub fn params(&self) -> [(&'static str, &str); 3] {
        [
            ("architecture", self.architecture.as_str()),
            ("image_type", self.image_type.as_str()),
            ("os", self.os.as_str()),
        ]
    }
}

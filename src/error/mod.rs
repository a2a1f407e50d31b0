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

mod context;
mod exit_codes;
mod format;

pub use context::ErrorContext;
pub use exit_codes::get_exit_code;
pub use format::{format_error_chain, format_error_with_color};

use crate::platform::LookupKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JdkPinError {
    #[error("Unknown {kind} '{value}' (valid values: {})", .valid.join(", "))]
    Lookup {
        kind: LookupKind,
        value: String,
        valid: Vec<String>,
    },

    #[error("Cannot extract a major version from '{0}'")]
    Parse(String),

    #[error("Release API returned HTTP {status} for {url}")]
    Fetch {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Malformed release API response: {reason}")]
    MalformedResponse { reason: String, payload: String },

    #[error("Failed to load manifest {path}: {reason}")]
    Load { path: String, reason: String },

    #[error("Failed to write manifest {path}: {reason}")]
    Write { path: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{label}: {source}")]
    Entry {
        label: String,
        #[source]
        source: Box<JdkPinError>,
    },

    #[error("{0} pinned JDK(s) out of date")]
    StaleManifest(usize),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] attohttpc::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl JdkPinError {
    /// Attach the label of the manifest entry being processed.
    pub fn for_entry(self, label: impl Into<String>) -> Self {
        JdkPinError::Entry {
            label: label.into(),
            source: Box::new(self),
        }
    }

    /// The underlying error with any entry labels peeled off.
    pub fn root(&self) -> &JdkPinError {
        match self {
            JdkPinError::Entry { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, JdkPinError>;

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

use crate::error::JdkPinError;
use std::fmt;

/// Longest response body echoed back to the user before it is cut off.
const MAX_PAYLOAD_CHARS: usize = 2048;

pub struct ErrorContext<'a> {
    pub error: &'a JdkPinError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a JdkPinError) -> Self {
        let (suggestion, details) = match error.root() {
            JdkPinError::Lookup { kind, value, .. } => {
                let suggestion = Some(format!(
                    "Use one of the listed {kind} values in the manifest, or add a mapping for \
                     '{value}'."
                ));
                (suggestion, None)
            }
            JdkPinError::Parse(version) => {
                let suggestion = Some(
                    "Adoptium versions look like 'jdk8u432-b06' or 'jdk-21.0.3+9'.".to_string(),
                );
                let details = Some(format!("Unparseable version string: {version}"));
                (suggestion, details)
            }
            JdkPinError::Fetch { status, body, .. } => {
                let suggestion = match status {
                    404 => Some(
                        "The requested release line may not exist for this platform. Check the \
                         entry's version, platform and architecture."
                            .to_string(),
                    ),
                    429 => Some(
                        "API rate limit exceeded. The next scheduled run will try again."
                            .to_string(),
                    ),
                    500..=599 => Some(
                        "The release API is having trouble. The next scheduled run will try \
                         again."
                            .to_string(),
                    ),
                    _ => None,
                };
                let details = if body.trim().is_empty() {
                    None
                } else {
                    Some(format!("Response body:\n{}", truncate_payload(body)))
                };
                (suggestion, details)
            }
            JdkPinError::MalformedResponse { payload, .. } => {
                let suggestion = Some(
                    "The release API response did not have the expected shape. Check whether \
                     the API has changed."
                        .to_string(),
                );
                let details = Some(format!("Raw payload:\n{}", truncate_payload(payload)));
                (suggestion, details)
            }
            JdkPinError::Load { .. } => {
                let suggestion = Some(
                    "The manifest must be a YAML mapping with a 'jdks' list. Use --manifest to \
                     point at a different file."
                        .to_string(),
                );
                (suggestion, None)
            }
            JdkPinError::Write { path, .. } => {
                let suggestion = Some(format!(
                    "Ensure the directory containing {path} is writable and that its 'jdks' \
                     entries are block-style YAML."
                ));
                (suggestion, None)
            }
            JdkPinError::Config(_) => {
                let suggestion = Some(
                    "Check jdkpin.toml and any JDKPIN_* environment variables.".to_string(),
                );
                (suggestion, None)
            }
            JdkPinError::StaleManifest(_) => {
                let suggestion =
                    Some("Run 'jdkpin update' to rewrite the manifest.".to_string());
                (suggestion, None)
            }
            JdkPinError::Http(http_err) => {
                let error_string = http_err.to_string();
                let suggestion = if error_string.contains("timeout")
                    || error_string.contains("Timeout")
                {
                    Some("The release API did not answer in time.".to_string())
                } else {
                    Some("Check your internet connection and proxy settings.".to_string())
                };
                let details = Some(format!("Network issue: {error_string}"));
                (suggestion, details)
            }
            _ => (None, None),
        };

        ErrorContext {
            error,
            suggestion,
            details,
        }
    }
}

fn truncate_payload(payload: &str) -> String {
    if payload.chars().count() <= MAX_PAYLOAD_CHARS {
        return payload.to_string();
    }
    let head: String = payload.chars().take(MAX_PAYLOAD_CHARS).collect();
    format!("{head}... (truncated)")
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

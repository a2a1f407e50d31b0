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

use crate::api::client::ADOPTIUM_API_BASE;
use crate::error::{JdkPinError, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "jdkpin.toml";
pub const DEFAULT_MANIFEST_PATH: &str = ".github/jdks.yml";
const ENV_PREFIX: &str = "JDKPIN";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JdkPinConfig {
    #[serde(default = "default_manifest_path")]
    pub manifest_path: PathBuf,

    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for JdkPinConfig {
    fn default() -> Self {
        Self {
            manifest_path: default_manifest_path(),
            api: ApiConfig::default(),
        }
    }
}

fn default_manifest_path() -> PathBuf {
    PathBuf::from(DEFAULT_MANIFEST_PATH)
}

fn default_base_url() -> String {
    ADOPTIUM_API_BASE.to_string()
}

impl JdkPinConfig {
    /// Layer defaults, the config file and `JDKPIN_*` environment variables.
    ///
    /// With `explicit_file` the file must exist; otherwise `jdkpin.toml` in
    /// the working directory is used when present.
    pub fn load(explicit_file: Option<&Path>) -> Result<Self> {
        let file_source = match explicit_file {
            Some(path) => File::from(path).format(FileFormat::Toml).required(true),
            None => File::new(CONFIG_FILE_NAME, FileFormat::Toml).required(false),
        };

        let settings = Config::builder()
            .set_default("manifest_path", DEFAULT_MANIFEST_PATH)
            .and_then(|builder| builder.set_default("api.base_url", ADOPTIUM_API_BASE))
            .map_err(|e| JdkPinError::Config(e.to_string()))?
            .add_source(file_source)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(|e| JdkPinError::Config(e.to_string()))?;

        let config: JdkPinConfig = settings
            .try_deserialize()
            .map_err(|e| JdkPinError::Config(e.to_string()))?;
        config.validate()?;

        log::debug!(
            "Using manifest {} and API {}",
            config.manifest_path.display(),
            config.api.base_url
        );
        Ok(config)
    }

    /// Apply command-line overrides, which take precedence over every other
    /// layer.
    pub fn with_overrides(
        mut self,
        manifest: Option<PathBuf>,
        api_url: Option<String>,
    ) -> Result<Self> {
        if let Some(manifest) = manifest {
            self.manifest_path = manifest;
        }
        if let Some(api_url) = api_url {
            self.api.base_url = api_url;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.manifest_path.as_os_str().is_empty() {
            return Err(JdkPinError::Config(
                "manifest_path must not be empty".to_string(),
            ));
        }
        if !(self.api.base_url.starts_with("http://") || self.api.base_url.starts_with("https://"))
        {
            return Err(JdkPinError::Config(format!(
                "api.base_url must be an http(s) URL, got '{}'",
                self.api.base_url
            )));
        }
        Ok(())
    }
}

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

/// Shared fixtures for driving the jdkpin binary against a mock API
use assert_cmd::Command;
use mockito::{Matcher, Mock, ServerGuard};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const MANIFEST: &str = r#"# JDKs used by the build
jdks:
  - platform: linux
    architecture: amd64
    vendor: adoptium
    version: jdk-21.0.3+9
    sha256: 0c6ea4b6b5ecc4fd7a5dbbd0ab8c45a3d8b6ab1f8bd2e8f1d3b6ff3c2a1cb001
  - platform: macos
    architecture: aarch64
    vendor: zulu
    version: 21.34.19-ca-jdk21.0.3
    sha256: 2d8b7a2a0a4b9a9c8d1e0f5a6b7c8d9e0f1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c
  - platform: windows
    architecture: amd64
    vendor: adoptium
    version: jdk8u422-b05
    sha256: a1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f60718293a4b5c6d7e8f90
gradle:
  distribution: bin
  version: 8.10
"#;

/// A scratch working directory holding a manifest.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn with_manifest(contents: &str) -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("jdks.yml"), contents).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.dir.path().join("jdks.yml")
    }

    pub fn manifest(&self) -> String {
        fs::read_to_string(self.manifest_path()).unwrap()
    }

    /// `jdkpin` run inside the workspace with any inherited configuration
    /// removed.
    pub fn jdkpin_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("jdkpin").unwrap();
        cmd.current_dir(self.path())
            .env_remove("JDKPIN_MANIFEST_PATH")
            .env_remove("JDKPIN_API__BASE_URL")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Like [`Workspace::jdkpin_bare`], pointed at the workspace manifest and
    /// `api_url`.
    pub fn jdkpin(&self, api_url: &str) -> Command {
        let mut cmd = self.jdkpin_bare();
        cmd.args(["--manifest", "jdks.yml", "--api-url", api_url]);
        cmd
    }
}

/// Body of an `assets/latest` answer carrying a single release.
pub fn release_body(release_name: &str, checksum: &str) -> String {
    format!(
        r#"[{{"binary":{{"image_type":"jdk","jvm_impl":"hotspot","package":{{"checksum":"{checksum}","name":"{release_name}.tar.gz"}}}},"release_name":"{release_name}","vendor":"eclipse"}}]"#
    )
}

/// Mock the `assets/latest` endpoint for one release line and platform.
pub fn mock_latest(
    server: &mut ServerGuard,
    major: u32,
    os: &str,
    arch: &str,
    status: usize,
    body: &str,
) -> Mock {
    server
        .mock("GET", format!("/v3/assets/latest/{major}/hotspot").as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("architecture".into(), arch.into()),
            Matcher::UrlEncoded("image_type".into(), "jdk".into()),
            Matcher::UrlEncoded("os".into(), os.into()),
        ]))
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create()
}

/// Mock a successful answer for `(major, os, arch)` naming one release.
pub fn mock_release(
    server: &mut ServerGuard,
    (major, os, arch): (u32, &str, &str),
    release_name: &str,
    checksum: &str,
) -> Mock {
    mock_latest(
        server,
        major,
        os,
        arch,
        200,
        &release_body(release_name, checksum),
    )
}

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

use crate::error::{JdkPinError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Prefix of every Adoptium JDK 8 release name (`jdk8u432-b06`).
const LEGACY_PREFIX: &str = "jdk8u";

static MAJOR_VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"jdk-(\d+)").expect("major version pattern is a valid regex")
});

/// Extract the major release line from an Adoptium release name.
///
/// JDK 8 releases are named `jdk8u<update>-b<build>`; every later line uses
/// `jdk-<major>[.<minor>.<patch>][+<build>][-<qualifier>]`. Anything after
/// the major digits is ignored.
///
/// # Examples
///
/// ```
/// use jdkpin::version::extract_major_version;
///
/// assert_eq!(extract_major_version("jdk8u432-b06").unwrap(), 8);
/// assert_eq!(extract_major_version("jdk-21.0.3+9").unwrap(), 21);
/// ```
pub fn extract_major_version(version: &str) -> Result<u32> {
    if version.starts_with(LEGACY_PREFIX) {
        return Ok(8);
    }

    MAJOR_VERSION_PATTERN
        .captures(version)
        .and_then(|captures| captures.get(1))
        .and_then(|digits| digits.as_str().parse::<u32>().ok())
        .ok_or_else(|| JdkPinError::Parse(version.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_jdk8() {
        assert_eq!(extract_major_version("jdk8u432-b06").unwrap(), 8);
        assert_eq!(extract_major_version("jdk8u").unwrap(), 8);
    }

    #[test]
    fn test_ea_qualifier_is_ignored() {
        assert_eq!(extract_major_version("jdk-23+30-ea-beta").unwrap(), 23);
    }

    #[test]
    fn test_full_release_name() {
        assert_eq!(extract_major_version("jdk-21.0.3+9").unwrap(), 21);
        assert_eq!(extract_major_version("jdk-17.0.12+7").unwrap(), 17);
        assert_eq!(extract_major_version("jdk-11.0.24+8").unwrap(), 11);
    }

    #[test]
    fn test_bare_major() {
        assert_eq!(extract_major_version("jdk-22").unwrap(), 22);
    }

    #[test]
    fn test_unparseable() {
        match extract_major_version("not-a-jdk-string") {
            Err(JdkPinError::Parse(value)) => assert_eq!(value, "not-a-jdk-string"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_digits_must_follow_dash() {
        assert!(extract_major_version("jdk-").is_err());
        assert!(extract_major_version("jdk-ea").is_err());
        assert!(extract_major_version("jdk21.0.3").is_err());
        assert!(extract_major_version("").is_err());
    }

    #[test]
    fn test_legacy_prefix_must_lead() {
        // `jdk8u` only counts at the start; elsewhere the jdk-<n> rule applies.
        assert_eq!(extract_major_version("openjdk-jdk-17+35-jdk8u").unwrap(), 17);
        assert!(extract_major_version("openjdk8u").is_err());
    }

    #[test]
    fn test_major_overflow_is_parse_error() {
        assert!(extract_major_version("jdk-99999999999999999999").is_err());
    }
}

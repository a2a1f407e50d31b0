use crate::error::{JdkPinError, Result};
use serde::Deserialize;

/// One element of an `assets/latest` response, as sent by the API.
///
/// Every field is optional here; [`parse_latest_release`] decides which ones
/// must be present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReleaseDescriptor {
    pub release_name: Option<String>,
    pub binary: Option<BinaryDescriptor>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BinaryDescriptor {
    pub package: Option<PackageDescriptor>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageDescriptor {
    pub link: Option<String>,
    pub checksum: Option<String>,
}

/// The fields of a release descriptor this tool relies on, checked present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestRelease {
    pub release_name: String,
    pub checksum: String,
    pub link: Option<String>,
}

impl ReleaseDescriptor {
    fn checksum(&self) -> Option<&str> {
        self.binary
            .as_ref()
            .and_then(|binary| binary.package.as_ref())
            .and_then(|package| package.checksum.as_deref())
            .filter(|checksum| !checksum.is_empty())
    }

    fn link(&self) -> Option<&str> {
        self.binary
            .as_ref()
            .and_then(|binary| binary.package.as_ref())
            .and_then(|package| package.link.as_deref())
    }
}

/// Parse an `assets/latest` body and select its first element.
///
/// The API sorts newest first, so the first descriptor is taken as the
/// latest without re-sorting.
pub fn parse_latest_release(body: &str) -> Result<LatestRelease> {
    let malformed = |reason: String| JdkPinError::MalformedResponse {
        reason,
        payload: body.to_string(),
    };

    let descriptors: Vec<ReleaseDescriptor> = serde_json::from_str(body)
        .map_err(|e| malformed(format!("expected a JSON array of release descriptors: {e}")))?;

    let latest = descriptors
        .first()
        .ok_or_else(|| malformed("response contains no releases".to_string()))?;

    let release_name = latest
        .release_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| malformed("latest release has no 'release_name'".to_string()))?;

    let checksum = latest
        .checksum()
        .ok_or_else(|| malformed("latest release has no 'binary.package.checksum'".to_string()))?;

    Ok(LatestRelease {
        release_name: release_name.to_string(),
        checksum: checksum.to_string(),
        link: latest.link().map(str::to_string),
    })
}

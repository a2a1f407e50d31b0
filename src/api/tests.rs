#[cfg(test)]
use crate::api::client::ApiClient;
#[cfg(test)]
use crate::api::models::*;
#[cfg(test)]
use crate::api::query::ReleaseQuery;
#[cfg(test)]
use crate::error::JdkPinError;
#[cfg(test)]
use mockito::{Matcher, Server};

// Trimmed response of
// curl 'https://api.adoptium.net/v3/assets/latest/21/hotspot?architecture=x64&image_type=jdk&os=linux'
#[cfg(test)]
const LATEST_21_LINUX_X64: &str = r#"[
  {
    "binary": {
      "architecture": "x64",
      "download_count": 1524345,
      "heap_size": "normal",
      "image_type": "jdk",
      "jvm_impl": "hotspot",
      "os": "linux",
      "package": {
        "checksum": "51fb4d03a4429c39d397d3a03a779077159317616550e4e71624c9843083e7b9",
        "checksum_link": "https://github.com/adoptium/temurin21-binaries/releases/download/jdk-21.0.4%2B7/OpenJDK21U-jdk_x64_linux_hotspot_21.0.4_7.tar.gz.sha256.txt",
        "download_count": 1524345,
        "link": "https://github.com/adoptium/temurin21-binaries/releases/download/jdk-21.0.4%2B7/OpenJDK21U-jdk_x64_linux_hotspot_21.0.4_7.tar.gz",
        "name": "OpenJDK21U-jdk_x64_linux_hotspot_21.0.4_7.tar.gz",
        "size": 206798222
      },
      "project": "jdk",
      "scm_ref": "jdk-21.0.4+7_adopt",
      "updated_at": "2024-07-18T13:35:03Z"
    },
    "release_link": "https://github.com/adoptium/temurin21-binaries/releases/tag/jdk-21.0.4%2B7",
    "release_name": "jdk-21.0.4+7",
    "vendor": "eclipse",
    "version": {
      "build": 7,
      "major": 21,
      "minor": 0,
      "openjdk_version": "21.0.4+7-LTS",
      "security": 4,
      "semver": "21.0.4+7.0.LTS"
    }
  }
]"#;

#[test]
fn test_api_client_creation() {
    let client = ApiClient::new();
    assert_eq!(client.base_url, "https://api.adoptium.net");
}

#[test]
fn test_api_client_with_custom_base_url_trims_slash() {
    let client = ApiClient::new().with_base_url("https://mirror.example.com/".to_string());
    assert_eq!(client.base_url(), "https://mirror.example.com");
}

#[test]
fn test_release_query_builder() {
    let query = ReleaseQuery::new(21).os("mac").architecture("aarch64");

    assert_eq!(query.feature_version, 21);
    assert_eq!(query.jvm_impl, "hotspot");
    assert_eq!(query.image_type, "jdk");
    assert_eq!(query.path(), "/v3/assets/latest/21/hotspot");
    assert_eq!(
        query.params(),
        [
            ("architecture", "aarch64"),
            ("image_type", "jdk"),
            ("os", "mac")
        ]
    );
}

#[test]
fn test_latest_assets_url() {
    let client = ApiClient::new();
    let query = ReleaseQuery::new(8).os("linux").architecture("x64");
    assert_eq!(
        client.latest_assets_url(&query),
        "https://api.adoptium.net/v3/assets/latest/8/hotspot"
    );
}

#[test]
fn test_parse_latest_release() {
    let release = parse_latest_release(LATEST_21_LINUX_X64).unwrap();

    assert_eq!(release.release_name, "jdk-21.0.4+7");
    assert_eq!(
        release.checksum,
        "51fb4d03a4429c39d397d3a03a779077159317616550e4e71624c9843083e7b9"
    );
    assert!(release.link.unwrap().ends_with(".tar.gz"));
}

#[test]
fn test_parse_takes_first_element() {
    let body = r#"[
        {"release_name": "jdk-17.0.12+7", "binary": {"package": {"checksum": "first"}}},
        {"release_name": "jdk-17.0.11+9", "binary": {"package": {"checksum": "second"}}}
    ]"#;

    let release = parse_latest_release(body).unwrap();
    assert_eq!(release.release_name, "jdk-17.0.12+7");
    assert_eq!(release.checksum, "first");
}

#[test]
fn test_parse_missing_checksum_is_malformed() {
    let body = r#"[{"release_name": "jdk-21.0.4+7", "binary": {"package": {"name": "x.tar.gz"}}}]"#;

    match parse_latest_release(body) {
        Err(JdkPinError::MalformedResponse { reason, payload }) => {
            assert!(reason.contains("checksum"));
            assert_eq!(payload, body);
        }
        other => panic!("expected malformed response, got {other:?}"),
    }
}

#[test]
fn test_parse_missing_binary_is_malformed() {
    let body = r#"[{"release_name": "jdk-21.0.4+7"}]"#;
    assert!(matches!(
        parse_latest_release(body),
        Err(JdkPinError::MalformedResponse { .. })
    ));
}

#[test]
fn test_parse_missing_release_name_is_malformed() {
    let body = r#"[{"binary": {"package": {"checksum": "abc"}}}]"#;

    match parse_latest_release(body) {
        Err(JdkPinError::MalformedResponse { reason, .. }) => {
            assert!(reason.contains("release_name"));
        }
        other => panic!("expected malformed response, got {other:?}"),
    }
}

#[test]
fn test_parse_empty_array_is_malformed() {
    assert!(matches!(
        parse_latest_release("[]"),
        Err(JdkPinError::MalformedResponse { .. })
    ));
}

#[test]
fn test_parse_non_array_is_malformed() {
    let body = r#"{"errorMessage": "unexpected"}"#;
    match parse_latest_release(body) {
        Err(JdkPinError::MalformedResponse { payload, .. }) => assert_eq!(payload, body),
        other => panic!("expected malformed response, got {other:?}"),
    }
}

#[test]
fn test_get_latest_assets_success() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/v3/assets/latest/21/hotspot")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("architecture".into(), "x64".into()),
            Matcher::UrlEncoded("image_type".into(), "jdk".into()),
            Matcher::UrlEncoded("os".into(), "linux".into()),
        ]))
        .match_header("user-agent", Matcher::Regex("^jdkpin/api/".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(LATEST_21_LINUX_X64)
        .expect(1)
        .create();

    let client = ApiClient::new().with_base_url(server.url());
    let query = ReleaseQuery::new(21).os("linux").architecture("x64");
    let body = client.get_latest_assets(&query).unwrap();

    assert_eq!(body, LATEST_21_LINUX_X64);
    mock.assert();
}

#[test]
fn test_get_latest_assets_http_error() {
    let mut server = Server::new();

    let _m = server
        .mock("GET", "/v3/assets/latest/99/hotspot")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"errorMessage":"No releases match the request"}"#)
        .create();

    let client = ApiClient::new().with_base_url(server.url());
    let query = ReleaseQuery::new(99).os("linux").architecture("x64");

    match client.get_latest_assets(&query) {
        Err(JdkPinError::Fetch { status, body, url }) => {
            assert_eq!(status, 404);
            assert!(body.contains("No releases match"));
            assert!(url.ends_with("/v3/assets/latest/99/hotspot"));
        }
        other => panic!("expected fetch error, got {other:?}"),
    }
}

#[test]
fn test_get_latest_assets_server_error_is_not_retried() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/v3/assets/latest/17/hotspot")
        .match_query(Matcher::Any)
        .with_status(503)
        .expect(1)
        .create();

    let client = ApiClient::new().with_base_url(server.url());
    let query = ReleaseQuery::new(17).os("windows").architecture("x64");
    let result = client.get_latest_assets(&query);

    assert!(matches!(
        result,
        Err(JdkPinError::Fetch { status: 503, .. })
    ));
    mock.assert();
}

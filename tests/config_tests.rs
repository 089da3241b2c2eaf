//! Tests for loading configuration from YAML files

use billed::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_from_yaml_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
bills_page:
  title: "Mes justificatifs"
  receipt_width: 250
server:
  bind_addr: "0.0.0.0:8080"
"#
    )
    .unwrap();

    let config = AppConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();

    assert_eq!(config.bills_page.title, "Mes justificatifs");
    assert_eq!(config.bills_page.receipt_width, 250);
    assert!(config.bills_page.format_dates);
    assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
    assert_eq!(config.navigation.wait_timeout_ms, 1000);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    assert!(AppConfig::from_yaml_file(path.to_str().unwrap()).is_err());
}

#[tokio::test]
async fn test_configured_title_and_raw_dates_reach_the_page() {
    let config = AppConfig::from_yaml_str(
        r#"
bills_page:
  title: "Mes justificatifs"
  format_dates: false
"#,
    )
    .unwrap();
    let session = InMemorySessionStorage::new();
    SessionUser::employee("employee@test.tld").store(&session).unwrap();
    let router = Router::install(
        NavigationContext::new(Arc::new(MockStore::with_fixtures()), Arc::new(session), config),
        SharedDocument::new(Document::with_root()),
    );

    router
        .on_navigate(ROUTES_PATH.bills)
        .unwrap()
        .settled()
        .await
        .unwrap();

    router.document().read(|doc| {
        assert!(doc.get_by_text("Mes justificatifs").is_ok());
        assert!(doc.get_by_text("2004-04-04").is_ok());
    });
}

//! Tests for catalog files

use std::fs;

use constrain::adapters::catalog::StaticCatalog;
use constrain::core::models::{ResourceRef, Token};
use constrain::core::ports::Catalog;
use tempfile::TempDir;

#[test]
fn test_load_toml_catalog() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.toml");
    fs::write(
        &path,
        r#"
[[resource]]
type = "file"
title = "/etc/motd"
properties = { ensure = " file ", mode = "0644" }

[[resource]]
type = "Package"
title = "nginx"
"#,
    )
    .unwrap();

    let catalog = StaticCatalog::load(&path).unwrap();

    assert_eq!(catalog.len(), 2);
    let motd = catalog.resolve(&ResourceRef::new("File", "/etc/motd")).unwrap();
    assert_eq!(motd.get(&Token::new("ensure")), Some(Token::new("file")));
    let nginx = catalog.resolve(&ResourceRef::new("Package", "nginx")).unwrap();
    assert_eq!(nginx.get(&Token::new("ensure")), None);
}

#[test]
fn test_load_json_catalog() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"{"resource": [{"type": "Service", "title": "sshd", "properties": {"enable": true}}]}"#,
    )
    .unwrap();

    let catalog = StaticCatalog::load(&path).unwrap();
    let sshd = catalog.resolve(&ResourceRef::new("Service", "sshd")).unwrap();
    assert_eq!(sshd.get(&Token::new("enable")), Some(Token::new("true")));
}

#[test]
fn test_duplicate_resource_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.toml");
    fs::write(
        &path,
        "[[resource]]\ntype = \"File\"\ntitle = \"a\"\n\n[[resource]]\ntype = \"FILE\"\ntitle = \"a\"\n",
    )
    .unwrap();

    let err = StaticCatalog::load(&path).unwrap_err();
    assert!(err.to_string().contains("duplicate declaration of File[a]"));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    assert!(StaticCatalog::load(&dir.path().join("nope.toml")).is_err());
}

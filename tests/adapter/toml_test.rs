//! Tests for the TOML declaration source

use std::fs;
use std::path::Path;

use constrain::adapters::toml::{TomlDeclarationSource, find_declaration_files, load_file};
use constrain::core::models::RawValue;
use constrain::core::ports::DeclarationSource;
use tempfile::TempDir;

const WEB: &str = r#"
[[constraint]]
name = "web-root"
resource = ["File[/srv/www]", "File[/srv/www/index.html]"]
properties = { ensure = { forbidden = "absent" } }
"#;

const PKG: &str = r#"
[[constraint]]
name = "nginx"
resource = "Package[nginx]"
allow = { ensure = ["present", "latest"] }
weak = true
"#;

fn write(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn test_load_file() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "web.toml", WEB);

    let file = load_file(&dir.path().join("web.toml")).unwrap();

    assert_eq!(file.constraints.len(), 1);
    let decl = &file.constraints[0];
    assert_eq!(decl.name, "web-root");
    assert!(matches!(decl.resource, Some(RawValue::List(ref items)) if items.len() == 2));
    assert!(!decl.weak);
}

#[test]
fn test_load_file_reports_path_on_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "bad.toml", "[[constraint]]\nname = \"x\"\nresources = \"File[a]\"\n");

    let err = load_file(&dir.path().join("bad.toml")).unwrap_err();
    assert!(format!("{err:#}").contains("bad.toml"));
}

#[test]
fn test_non_string_scalars_survive_as_unsupported() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "mode.toml",
        "[[constraint]]\nname = \"m\"\nresource = \"File[a]\"\nproperties = { mode = 644 }\n",
    );

    let file = load_file(&dir.path().join("mode.toml")).unwrap();
    let Some(RawValue::Map(properties)) = &file.constraints[0].properties else {
        panic!("properties should be a hash");
    };
    assert!(matches!(properties["mode"], RawValue::Unsupported(_)));
}

#[test]
fn test_find_files_in_directory_glob_and_path() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "constraints/web.toml", WEB);
    write(dir.path(), "constraints/nested/pkg.toml", PKG);
    write(dir.path(), "constraints/notes.md", "not a declaration");
    write(dir.path(), "extra.toml", PKG);

    let from_dir = find_declaration_files(&["constraints".to_string()], dir.path()).unwrap();
    assert_eq!(from_dir.len(), 2);

    let from_glob = find_declaration_files(&["constraints/**/*.toml".to_string()], dir.path()).unwrap();
    assert_eq!(from_glob, from_dir);

    let mixed = find_declaration_files(
        &["extra.toml".to_string(), "constraints".to_string(), "constraints/web.toml".to_string()],
        dir.path(),
    )
    .unwrap();
    assert_eq!(mixed.len(), 3);
}

#[test]
fn test_glob_matching_nothing_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = find_declaration_files(&["constraints/**/*.toml".to_string()], dir.path()).unwrap_err();
    assert!(err.to_string().contains("matches no declaration files"));
}

#[test]
fn test_missing_plain_path_is_an_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "web.toml", WEB);

    let err = find_declaration_files(&["web.toml".to_string(), "wbe.toml".to_string()], dir.path())
        .unwrap_err();
    assert!(err.to_string().contains("wbe.toml"));
}

#[test]
fn test_source_loads_in_path_order() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "b.toml", WEB);
    write(dir.path(), "a.toml", PKG);

    let source = TomlDeclarationSource::new(dir.path().to_path_buf(), vec![".".to_string()]);
    let loaded = source.load().unwrap();

    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].0.name, "nginx");
    assert!(loaded[0].1.ends_with("a.toml"));
    assert_eq!(loaded[1].0.name, "web-root");

    let names: Vec<String> = source.declarations().unwrap().into_iter().map(|d| d.name).collect();
    assert_eq!(names, vec!["nginx", "web-root"]);
}

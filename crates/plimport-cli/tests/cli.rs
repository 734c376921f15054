//! Integration tests for the argument and exit-code surface.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn plimport() -> Command {
    Command::cargo_bin("plimport").unwrap()
}

/// Builds a one-page PDF with a single Helvetica text line. The line is
/// WinAnsi-encoded bytes, so `\x80` stands for the euro sign.
fn write_fixture_pdf(path: &Path, line: &[u8]) {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });
    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![72.into(), 720.into()]),
            Operation::new("Tj", vec![Object::string_literal(line.to_vec())]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).unwrap();
}

/// Config + two-item catalog where the fixture PDF can only cover one item.
fn partial_import_setup(dir: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let pdf = dir.join("prices.pdf");
    write_fixture_pdf(&pdf, b"iPhone 16e  169 \x80");

    let config = dir.join("import-config.json");
    fs::write(&config, format!(r#"{{"pdf_url": "{}"}}"#, pdf.display())).unwrap();

    let catalog = dir.join("catalog.json");
    fs::write(
        &catalog,
        r#"{"categories": [{"id": "iphone", "items": [
            {"id": "iphone-16e", "name": "iPhone 16e"},
            {"id": "iphone-17-pro", "name": "iPhone 17 Pro"}]}]}"#,
    )
    .unwrap();
    (config, catalog)
}

fn write_catalog(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("catalog.json");
    fs::write(
        &path,
        r#"{"categories": [{"id": "iphone", "items": [{"id": "iphone-17", "name": "iPhone 17"}]}]}"#,
    )
    .unwrap();
    path
}

#[test]
fn missing_required_flags_fails_with_usage() {
    plimport()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--config"));
}

#[test]
fn missing_config_file_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path());

    plimport()
        .arg("--config")
        .arg(dir.path().join("nope.json"))
        .arg("--output")
        .arg(&catalog)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to load config"));
}

#[test]
fn missing_pdf_url_exits_one_before_touching_anything() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("import-config.json");
    fs::write(&config, "{}").unwrap();
    let catalog = write_catalog(dir.path());
    let before = fs::read(&catalog).unwrap();

    plimport()
        .arg("--config")
        .arg(&config)
        .arg("--output")
        .arg(&catalog)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("pdf_url"));

    assert_eq!(fs::read(&catalog).unwrap(), before);
    assert!(!dir.path().join("import-report.json").exists());
}

#[test]
fn partial_match_exits_two_and_writes_report_only() {
    let dir = tempfile::tempdir().unwrap();
    let (config, catalog) = partial_import_setup(dir.path());
    let before = fs::read(&catalog).unwrap();

    plimport()
        .arg("--config")
        .arg(&config)
        .arg("--output")
        .arg(&catalog)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Not all items matched"));

    assert_eq!(fs::read(&catalog).unwrap(), before);

    let report: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(dir.path().join("import-report.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(report["total"], 2);
    assert_eq!(report["main"].as_array().unwrap().len(), 2);
}

#[test]
fn force_accepts_partial_match_and_stamps_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let (config, catalog) = partial_import_setup(dir.path());

    plimport()
        .arg("--config")
        .arg(&config)
        .arg("--output")
        .arg(&catalog)
        .arg("--force")
        .assert()
        .success();

    let written = fs::read_to_string(&catalog).unwrap();
    assert!(written.contains("lastUpdated"));
    assert!(written.contains("sources"));
    assert!(dir.path().join("import-report.json").exists());
}

#[test]
fn unreachable_document_exits_one_and_leaves_catalog_alone() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("import-config.json");
    fs::write(
        &config,
        format!(
            r#"{{"pdf_url": "{}"}}"#,
            dir.path().join("absent.pdf").display()
        ),
    )
    .unwrap();
    let catalog = write_catalog(dir.path());
    let before = fs::read(&catalog).unwrap();

    plimport()
        .arg("--config")
        .arg(&config)
        .arg("--output")
        .arg(&catalog)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("document not found"));

    assert_eq!(fs::read(&catalog).unwrap(), before);
    assert!(!dir.path().join("import-report.json").exists());
}

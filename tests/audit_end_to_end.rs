//! End-to-end audit runs against real on-disk trees.
//!
//! These tests drive `run_audit` the way the CLI does: a scratch resource
//! root with real PNG files, a scratch output directory, and assertions on
//! the produced `index.html` and summary counts.

mod common;

use common::{bucket_file, write_png};
use drawable_audit::{run_audit, AuditError, AuditOptions};
use std::fs;
use tempfile::TempDir;

fn audit(root: &TempDir, out: &TempDir) -> drawable_audit::AuditSummary {
    run_audit(&AuditOptions {
        root: root.path().into(),
        output_dir: out.path().into(),
    })
    .unwrap()
}

fn report_html(out: &TempDir) -> String {
    fs::read_to_string(out.path().join("index.html")).unwrap()
}

#[test]
fn conforming_asset_with_partial_bucket_coverage() {
    let root = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_png(&bucket_file(root.path(), "drawable-mdpi", "icon.png"), 48, 48);
    write_png(&bucket_file(root.path(), "drawable-xhdpi", "icon.png"), 96, 96);

    let summary = audit(&root, &out);
    assert_eq!(summary.assets, 1);
    assert_eq!(summary.valid, 2);
    assert_eq!(summary.invalid, 0);
    assert_eq!(summary.missing, 3);

    let html = report_html(&out);
    assert!(html.contains("<h1>icon.png</h1>"));
    assert!(html.contains("<span class='goodSize'>48×48</span>"));
    assert!(html.contains("<span class='goodSize'>96×96</span>"));
    assert!(html.contains("[missing, expected 72×72]"));
    assert!(html.contains("drawable-xxxhdpi"));
}

#[test]
fn wrong_size_is_reported_not_fatal() {
    let root = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_png(&bucket_file(root.path(), "drawable-mdpi", "icon.png"), 48, 48);
    write_png(
        &bucket_file(root.path(), "drawable-xhdpi", "icon.png"),
        100,
        100,
    );

    let summary = audit(&root, &out);
    assert_eq!(summary.valid, 1);
    assert_eq!(summary.invalid, 1);

    let html = report_html(&out);
    assert!(html.contains("<span class='wrongSize'>100×100 (expected 96×96)</span>"));
}

#[test]
fn nine_patches_never_appear_in_the_report() {
    let root = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    for bucket in [
        "drawable-mdpi",
        "drawable-hdpi",
        "drawable-xhdpi",
        "drawable-xxhdpi",
        "drawable-xxxhdpi",
    ] {
        write_png(&bucket_file(root.path(), bucket, "logo.9.png"), 10, 10);
    }
    write_png(&bucket_file(root.path(), "drawable-mdpi", "icon.png"), 24, 24);

    let summary = audit(&root, &out);
    assert_eq!(summary.assets, 1);

    let html = report_html(&out);
    assert!(!html.contains("logo.9.png"));
    assert!(html.contains("icon.png"));
}

#[test]
fn baseline_missing_row_is_indeterminate() {
    let root = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_png(&bucket_file(root.path(), "drawable-hdpi", "icon.png"), 72, 72);

    let summary = audit(&root, &out);
    assert_eq!(summary.assets, 1);
    assert_eq!(summary.valid, 0);
    assert_eq!(summary.invalid, 1);
    assert_eq!(summary.missing, 4);

    let html = report_html(&out);
    assert!(html.contains("<span class='wrongSize'>? (expected ?)</span>"));
}

#[test]
fn fractional_expectations_flag_rounded_copies() {
    let root = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_png(&bucket_file(root.path(), "drawable-mdpi", "icon.png"), 49, 48);
    write_png(&bucket_file(root.path(), "drawable-hdpi", "icon.png"), 74, 72);

    let summary = audit(&root, &out);
    assert_eq!(summary.valid, 1);
    assert_eq!(summary.invalid, 1);

    let html = report_html(&out);
    assert!(html.contains("74×72 (expected 73.5×72)"));
}

#[test]
fn corrupt_file_degrades_to_unreadable_cell() {
    let root = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_png(&bucket_file(root.path(), "drawable-mdpi", "icon.png"), 48, 48);
    let corrupt = bucket_file(root.path(), "drawable-xhdpi", "icon.png");
    fs::create_dir_all(corrupt.parent().unwrap()).unwrap();
    fs::write(&corrupt, b"not a png").unwrap();

    let summary = audit(&root, &out);
    assert_eq!(summary.valid, 1);
    assert_eq!(summary.invalid, 1);

    let html = report_html(&out);
    assert!(html.contains("<span class='wrongSize'>? (expected 96×96)</span>"));
}

#[test]
fn empty_root_produces_an_empty_report() {
    let root = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    let summary = audit(&root, &out);
    assert_eq!(summary.assets, 0);
    assert!(report_html(&out).contains("<body role=\"document\">"));
}

#[test]
fn report_is_fully_regenerated() {
    let root = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(out.path().join("index.html"), "stale marker").unwrap();
    write_png(&bucket_file(root.path(), "drawable-mdpi", "icon.png"), 16, 16);

    audit(&root, &out);
    let html = report_html(&out);
    assert!(!html.contains("stale marker"));
    assert!(html.contains("icon.png"));
}

#[test]
fn missing_root_is_a_startup_error() {
    let out = TempDir::new().unwrap();
    let err = run_audit(&AuditOptions {
        root: out.path().join("nope"),
        output_dir: out.path().into(),
    })
    .unwrap_err();
    assert!(matches!(err, AuditError::RootNotFound { .. }));
    assert!(!out.path().join("index.html").exists());
}

#[test]
fn file_root_is_a_startup_error() {
    let out = TempDir::new().unwrap();
    let file = out.path().join("root.txt");
    fs::write(&file, "x").unwrap();

    let err = run_audit(&AuditOptions {
        root: file,
        output_dir: out.path().into(),
    })
    .unwrap_err();
    assert!(matches!(err, AuditError::RootNotADirectory { .. }));
}

#[test]
fn unchanged_tree_audits_identically() {
    let root = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_png(&bucket_file(root.path(), "drawable-mdpi", "icon.png"), 48, 48);
    write_png(&bucket_file(root.path(), "drawable-hdpi", "icon.png"), 72, 72);
    write_png(
        &bucket_file(root.path(), "drawable-xxhdpi", "icon.png"),
        150,
        150,
    );

    let first = audit(&root, &out);
    let first_html = report_html(&out);
    let second = audit(&root, &out);
    assert_eq!(first, second);
    assert_eq!(first_html, report_html(&out));
}

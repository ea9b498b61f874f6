//! End-to-end tests for `faqforge compile`.

mod common;

use common::{fragment_in, run_faqforge, source_dir_with, stdout};

#[test]
fn compile_writes_fragment_addressed_by_category_id() {
    let src = source_dir_with(&["rhinoplasty.txt"]);
    let out = tempfile::tempdir().unwrap();

    let output = run_faqforge(&[
        "compile",
        "--source",
        src.path().to_str().unwrap(),
        "--output",
        out.path().to_str().unwrap(),
    ]);
    assert!(output.status.success(), "compile failed: {}", common::stderr(&output));

    let html = std::fs::read_to_string(fragment_in(out.path(), "rhinoplasty")).unwrap();
    assert!(html.contains(r#"<section class="faq-section" id="rhinoplasty">"#));
    assert!(html.contains("<h2>Rhinoplasty FAQ</h2>"));
    assert_eq!(html.matches("faq-item-header").count(), 2);
    assert!(html.contains("What is rhinoplasty?"));
    assert!(html.contains("How long is recovery?"));
    // First item expanded, second collapsed
    assert_eq!(html.matches(r#"aria-expanded="true""#).count(), 1);
    assert_eq!(html.matches(r#"aria-expanded="false""#).count(), 1);
}

#[test]
fn compile_reports_skips_without_aborting_batch() {
    let src = source_dir_with(&["rhinoplasty.txt", "missing_header.txt", "no_prefix.txt"]);
    let out = tempfile::tempdir().unwrap();

    let output = run_faqforge(&[
        "compile",
        "--source",
        src.path().to_str().unwrap(),
        "--output",
        out.path().to_str().unwrap(),
    ]);
    // Skips are data, not failures
    assert!(output.status.success());

    let report = stdout(&output);
    assert!(report.contains("wrote rhinoplasty"), "report: {report}");
    assert!(report.contains("skipped missing_header.txt"), "report: {report}");
    assert!(report.contains("skipped no_prefix.txt"), "report: {report}");
    assert!(report.contains("1 fragment(s), 2 skipped"), "report: {report}");

    assert!(fragment_in(out.path(), "rhinoplasty").exists());
    assert!(!fragment_in(out.path(), "orphan").exists());
    assert!(!fragment_in(out.path(), "noprefix").exists());
}

#[test]
fn compile_json_report_shape() {
    let src = source_dir_with(&["otoplasty.txt", "empty_content.txt"]);
    let out = tempfile::tempdir().unwrap();

    let output = run_faqforge(&[
        "compile",
        "--source",
        src.path().to_str().unwrap(),
        "--output",
        out.path().to_str().unwrap(),
        "--format",
        "json",
    ]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["written"].as_array().unwrap().len(), 1);
    assert_eq!(report["written"][0]["category_id"], "otoplasty");
    assert_eq!(report["written"][0]["pair_count"], 2);
    assert_eq!(report["skipped"][0]["file"], "empty_content.txt");
    assert_eq!(report["skipped"][0]["reason"]["kind"], "empty_content");
}

#[test]
fn compile_empty_content_emit_flag() {
    let src = source_dir_with(&["empty_content.txt"]);
    let out = tempfile::tempdir().unwrap();

    let output = run_faqforge(&[
        "compile",
        "--source",
        src.path().to_str().unwrap(),
        "--output",
        out.path().to_str().unwrap(),
        "--emit-empty",
    ]);
    assert!(output.status.success());

    let html = std::fs::read_to_string(fragment_in(out.path(), "stub")).unwrap();
    assert!(html.contains("<h2>Coming Soon</h2>"));
    assert!(!html.contains("faq-item-header"));
}

#[test]
fn compile_twice_is_byte_identical() {
    let src = source_dir_with(&["rhinoplasty.txt", "otoplasty.txt"]);
    let out = tempfile::tempdir().unwrap();
    let args = [
        "compile",
        "--source",
        src.path().to_str().unwrap(),
        "--output",
        out.path().to_str().unwrap(),
    ];

    assert!(run_faqforge(&args).status.success());
    let first_rhino = std::fs::read(fragment_in(out.path(), "rhinoplasty")).unwrap();
    let first_oto = std::fs::read(fragment_in(out.path(), "otoplasty")).unwrap();

    assert!(run_faqforge(&args).status.success());
    assert_eq!(std::fs::read(fragment_in(out.path(), "rhinoplasty")).unwrap(), first_rhino);
    assert_eq!(std::fs::read(fragment_in(out.path(), "otoplasty")).unwrap(), first_oto);
}

#[test]
fn compile_multiline_answer_and_inline_numbers() {
    let src = source_dir_with(&["otoplasty.txt"]);
    let out = tempfile::tempdir().unwrap();

    let output = run_faqforge(&[
        "compile",
        "--source",
        src.path().to_str().unwrap(),
        "--output",
        out.path().to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let html = std::fs::read_to_string(fragment_in(out.path(), "otoplasty")).unwrap();
    // Two-line answer joined with a single space
    assert!(html.contains(
        "Healthy patients with fully developed ears. \
         The procedure is commonly performed from age 6 onward."
    ));
    // "Item 12." mid-line never starts a third question
    assert_eq!(html.matches("faq-item-header").count(), 2);
    assert!(html.contains("Item 12. on the aftercare sheet"));
}

#[test]
fn compile_defaults_output_to_source_dir() {
    let src = source_dir_with(&["rhinoplasty.txt"]);

    let output = run_faqforge(&["compile", "--source", src.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert!(fragment_in(src.path(), "rhinoplasty").exists());
}

#[test]
fn compile_missing_source_dir_is_fatal() {
    let output = run_faqforge(&["compile", "--source", "/nonexistent/faq-sources"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(5));
    let stderr = common::stderr(&output);
    assert!(
        stderr.contains("source directory"),
        "stderr should name the source directory failure: {stderr}"
    );
}

#[test]
fn compile_invalid_groups_file_is_config_error() {
    let src = source_dir_with(&["rhinoplasty.txt"]);
    let dir = tempfile::tempdir().unwrap();
    let bad_groups = dir.path().join("groups.yaml");
    std::fs::write(
        &bad_groups,
        "groups:\n  a:\n    title: A\n    members: [x]\n  b:\n    title: B\n    members: [x]\n",
    )
    .unwrap();

    let output = run_faqforge(&[
        "compile",
        "--source",
        src.path().to_str().unwrap(),
        "--groups",
        bad_groups.to_str().unwrap(),
    ]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
}

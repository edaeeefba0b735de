//! Integration tests for the linkrank binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn linkrank_cmd() -> Command {
    Command::cargo_bin("linkrank").unwrap()
}

fn create_corpus(dir: &TempDir) {
    let pages = vec![
        ("1.html", r#"<html><body><a href="2.html">Two</a></body></html>"#),
        (
            "2.html",
            r#"<a href="1.html">One</a> <a href="3.html">Three</a> <a href="2.html">Self</a>"#,
        ),
        (
            "3.html",
            r#"<a href="2.html">Two</a> <a href="4.html">Four</a> <a href="https://example.com">out</a>"#,
        ),
        ("4.html", r#"<a href="2.html">Two</a>"#),
        ("notes.txt", r#"<a href="4.html">not a page</a>"#),
    ];

    for (name, content) in &pages {
        fs::write(dir.path().join(name), content).unwrap();
    }
}

#[test]
fn test_prints_both_rankings() {
    let corpus = TempDir::new().unwrap();
    create_corpus(&corpus);

    linkrank_cmd()
        .arg(corpus.path())
        .arg("--seed")
        .arg("7")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "PageRank Results from Sampling (n = 10000)\n  1.html: ",
        ))
        .stdout(predicate::str::contains(
            "PageRank Results from Iteration\n  1.html: 0.219",
        ))
        .stdout(predicate::str::contains("  2.html: 0.429"))
        .stdout(predicate::str::contains("  4.html: 0.131"))
        .stdout(predicate::str::contains("notes.txt").not());
}

#[test]
fn test_seeded_output_is_reproducible() {
    let corpus = TempDir::new().unwrap();
    create_corpus(&corpus);

    let run = || {
        linkrank_cmd()
            .arg(corpus.path())
            .args(["--seed", "123", "-n", "500"])
            .output()
            .unwrap()
    };
    let first = run();
    let second = run();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert!(String::from_utf8_lossy(&first.stdout).contains("(n = 500)"));
}

#[test]
fn test_json_format() {
    let corpus = TempDir::new().unwrap();
    create_corpus(&corpus);

    let output = linkrank_cmd()
        .arg(corpus.path())
        .args(["--format", "json", "--seed", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["samples"], 10_000);
    assert_eq!(value["converged"], true);
    assert_eq!(value["iteration"].as_object().unwrap().len(), 4);
    assert_eq!(value["sampling"].as_object().unwrap().len(), 4);
}

#[test]
fn test_missing_argument_shows_usage() {
    linkrank_cmd()
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_extra_argument_rejected() {
    linkrank_cmd()
        .args(["corpus0", "corpus1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_empty_corpus_fails() {
    let corpus = TempDir::new().unwrap();
    fs::write(corpus.path().join("readme.md"), "no pages").unwrap();

    linkrank_cmd()
        .arg(corpus.path())
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Corpus contains no pages"));
}

#[test]
fn test_missing_corpus_fails() {
    let dir = TempDir::new().unwrap();

    linkrank_cmd()
        .arg(dir.path().join("absent"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to crawl corpus"));
}

#[test]
fn test_invalid_damping_fails() {
    let corpus = TempDir::new().unwrap();
    create_corpus(&corpus);

    linkrank_cmd()
        .arg(corpus.path())
        .args(["--damping", "1.5"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("damping"));
}

use assert_cmd::cargo::CommandCargoExt;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::process::{Command as StdCommand, Stdio};
use tempfile::tempdir;

#[allow(deprecated)]
fn folio() -> Command {
    let mut cmd = Command::cargo_bin("folio").expect("binary");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn pages_prints_window() {
    folio()
        .args(["pages", "--current", "7", "--max", "8"])
        .assert()
        .success()
        .stdout("1 … 6 [7] 8\n");
}

#[test]
fn pages_json_labels() {
    let output = folio()
        .args(["pages", "--current", "3", "--max", "10", "--json"])
        .output()
        .expect("command run");
    assert!(output.status.success());

    let labels: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(
        labels,
        serde_json::json!([
            {"page": 1}, {"page": 2}, {"page": 3}, {"page": 4}, "ellipsis", {"page": 10}
        ])
    );
}

#[test]
fn pages_hidden_for_single_page() {
    folio()
        .args(["pages", "--current", "1", "--max", "1"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn pages_rejects_page_past_the_end() {
    folio()
        .args(["pages", "--current", "9", "--max", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid page range"));
}

#[test]
fn excerpt_from_stdin() {
    let body = format!(
        r#"<p>See <a href="/docs">the docs</a> for details. {}</p>"#,
        vec!["more"; 80].join(" ")
    );
    folio()
        .args(["excerpt", "--budget", "40"])
        .write_stdin(body)
        .assert()
        .success()
        .stdout(r#"See <a href="/docs">the docs</a> for details. more more more […]"#.to_string() + "\n");
}

#[test]
fn excerpt_json_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("post.html");
    fs::write(&path, "<p>Short post.</p>").unwrap();

    let output = folio()
        .args(["excerpt", "--json", "--file"])
        .arg(&path)
        .output()
        .expect("command run");
    assert!(output.status.success());

    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(body["text"], "Short post.");
    assert_eq!(body["is_small"], true);
    assert_eq!(body["truncated"], false);
}

#[test]
fn excerpt_rejects_zero_budget() {
    folio()
        .args(["excerpt", "--budget", "0"])
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --budget"));
}

#[test]
fn render_paginates_post_list_with_settings() {
    let dir = tempdir().unwrap();
    let posts: Vec<Value> = (1..=5)
        .map(|id| {
            serde_json::json!({
                "id": id,
                "title": format!("Post {id}"),
                "permalink": format!("/post-{id}"),
                "author": "Ada",
                "date": "01/01/2024",
                "content": "<p>Hello.</p>"
            })
        })
        .collect();
    let posts_path = dir.path().join("posts.json");
    fs::write(&posts_path, serde_json::to_vec(&posts).unwrap()).unwrap();
    let settings_path = dir.path().join("theme.toml");
    fs::write(&settings_path, "posts_per_page = 2\nshow_lists_mode = \"tiles\"\n").unwrap();

    folio()
        .args(["render", "--page", "2", "--links", "pretty", "--base-url", "/blog"])
        .arg("--posts")
        .arg(&posts_path)
        .arg("--settings")
        .arg(&settings_path)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"<div id="posts-tiles""#))
        .stdout(predicate::str::contains(r#"href="/post-3""#))
        .stdout(predicate::str::contains(r#"href="/post-4""#))
        .stdout(predicate::str::contains(r#"href="/post-5""#).not())
        .stdout(predicate::str::contains(r#"href="/blog/page/3/""#));
}

#[test]
fn render_single_post() {
    let dir = tempdir().unwrap();
    let page_path = dir.path().join("page.json");
    fs::write(
        &page_path,
        r#"{"posts": [{"title": "About", "permalink": "/about", "content": "<p>Who we are.</p>"}], "current_page": 1, "max_page": 1}"#,
    )
    .unwrap();

    folio()
        .args(["render", "--single", "--posts"])
        .arg(&page_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("<p>Who we are.</p>"))
        .stdout(predicate::str::contains(r#"<nav class="level">"#));
}

#[test]
fn render_reports_bad_settings() {
    let dir = tempdir().unwrap();
    let page_path = dir.path().join("page.json");
    fs::write(&page_path, "[]").unwrap();
    let settings_path = dir.path().join("theme.json");
    fs::write(&settings_path, r#"{"show_lists_mode": "condensed"}"#).unwrap();

    folio()
        .arg("render")
        .arg("--posts")
        .arg(&page_path)
        .arg("--settings")
        .arg(&settings_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid theme settings"));
}

#[test]
fn render_survives_reader_closing_early() {
    let dir = tempdir().unwrap();
    let posts: Vec<Value> = (1..=2000)
        .map(|id| {
            serde_json::json!({
                "id": id,
                "title": format!("Post {id}"),
                "permalink": format!("/post-{id}"),
                "content": "<p>Some body text for the card.</p>"
            })
        })
        .collect();
    let page_path = dir.path().join("page.json");
    let page = serde_json::json!({"posts": posts, "current_page": 1, "max_page": 1});
    fs::write(&page_path, serde_json::to_vec(&page).unwrap()).unwrap();

    #[allow(deprecated)]
    let mut child = StdCommand::cargo_bin("folio")
        .expect("binary")
        .args(["--quiet", "render", "--posts"])
        .arg(&page_path)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn folio");

    let mut head = [0u8; 10];
    let mut stdout = child.stdout.take().expect("piped stdout");
    stdout.read_exact(&mut head).unwrap();
    drop(stdout);

    let output = child.wait_with_output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "stderr: {stderr}");
    assert!(!stderr.contains("panicked"));
}

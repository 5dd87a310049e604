//! End-to-end tests for the dev-notes binary.
//!
//! Tests spawn `dev-notes` with `HOME` pointed at a temporary directory and
//! talk newline-delimited JSON-RPC over its stdio.

use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use serde_json::{json, Value};
use tempfile::TempDir;

struct Session {
    child: Child,
    stdin: Option<ChildStdin>,
    stdout: BufReader<ChildStdout>,
}

impl Session {
    fn start(home: &Path) -> Self {
        Self::start_with_stderr(home, Stdio::null())
    }

    fn start_with_stderr(home: &Path, stderr: Stdio) -> Self {
        let mut child = Command::new(env!("CARGO_BIN_EXE_dev-notes"))
            .env("HOME", home)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(stderr)
            .spawn()
            .unwrap();
        let stdin = child.stdin.take();
        let stdout = BufReader::new(child.stdout.take().unwrap());
        let mut session = Self {
            child,
            stdin,
            stdout,
        };

        let init = session.request(
            1,
            "initialize",
            json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": {"name": "e2e", "version": "0.0.0"}
            }),
        );
        assert_eq!(init["result"]["serverInfo"]["name"], "dev-notes");
        session.send(&json!({"jsonrpc": "2.0", "method": "notifications/initialized"}));
        session
    }

    fn send(&mut self, message: &Value) {
        let stdin = self.stdin.as_mut().expect("stdin already closed");
        writeln!(stdin, "{message}").unwrap();
        stdin.flush().unwrap();
    }

    /// Close stdin, wait for the server to exit, and return its stderr.
    fn shutdown(&mut self) -> String {
        drop(self.stdin.take());
        let mut stderr = String::new();
        if let Some(mut pipe) = self.child.stderr.take() {
            pipe.read_to_string(&mut stderr).unwrap();
        }
        let status = self.child.wait().unwrap();
        assert!(status.success(), "server exited with {status}");
        stderr
    }

    fn request(&mut self, id: u64, method: &str, params: Value) -> Value {
        self.send(&json!({"jsonrpc": "2.0", "id": id, "method": method, "params": params}));
        loop {
            let mut line = String::new();
            let n = self.stdout.read_line(&mut line).unwrap();
            assert!(n > 0, "server closed stdout before answering {method}");
            let message: Value = serde_json::from_str(&line).unwrap();
            if message["id"] == id {
                return message;
            }
        }
    }

    fn call(&mut self, id: u64, tool: &str, arguments: Value) -> Value {
        self.request(
            id,
            "tools/call",
            json!({"name": tool, "arguments": arguments}),
        )
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

fn text_of(response: &Value) -> &str {
    response["result"]["content"][0]["text"].as_str().unwrap()
}

#[test]
fn e2e_startup_creates_notes_directory() {
    let home = TempDir::new().unwrap();
    let _session = Session::start(home.path());
    assert!(home.path().join("dev-notes").is_dir());
}

#[test]
fn e2e_stderr_carries_only_the_startup_line() {
    let home = TempDir::new().unwrap();
    let mut session = Session::start_with_stderr(home.path(), Stdio::piped());

    let listed = session.call(2, "list_notes", json!({}));
    assert!(text_of(&listed).starts_with("No notes found in "));

    let stderr = session.shutdown();
    let lines: Vec<&str> = stderr.lines().collect();
    assert_eq!(lines.len(), 1, "unexpected stderr output: {stderr}");
    assert!(lines[0].contains("Dev Notes MCP server is running."));
}

#[test]
fn e2e_lists_four_tools() {
    let home = TempDir::new().unwrap();
    let mut session = Session::start(home.path());

    let response = session.request(2, "tools/list", json!({}));
    let mut names: Vec<&str> = response["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    names.sort_unstable();
    assert_eq!(names, ["get_weather", "list_notes", "read_note", "save_note"]);
}

#[test]
fn e2e_save_read_list() {
    let home = TempDir::new().unwrap();
    let mut session = Session::start(home.path());

    let saved = session.call(
        2,
        "save_note",
        json!({"title": "Bug Backlog", "content": "- fix X\n- fix Y"}),
    );
    assert!(text_of(&saved).contains("bug-backlog.md"));
    assert_eq!(
        std::fs::read_to_string(home.path().join("dev-notes").join("bug-backlog.md")).unwrap(),
        "- fix X\n- fix Y"
    );

    let read = session.call(3, "read_note", json!({"title": "Bug Backlog"}));
    assert_eq!(text_of(&read), "- fix X\n- fix Y");
    assert_ne!(read["result"]["isError"], true);

    let listed = session.call(4, "list_notes", json!({}));
    assert!(text_of(&listed).contains("bug backlog"));
    assert!(text_of(&listed).contains("bug-backlog.md"));
}

#[test]
fn e2e_read_missing_note_is_error_result() {
    let home = TempDir::new().unwrap();
    let mut session = Session::start(home.path());

    let read = session.call(2, "read_note", json!({"title": "does-not-exist"}));
    assert_eq!(read["result"]["isError"], true);
    assert!(text_of(&read).contains("does-not-exist.md"));
}

#[test]
fn e2e_malformed_arguments_are_protocol_errors() {
    let home = TempDir::new().unwrap();
    let mut session = Session::start(home.path());

    let response = session.call(2, "save_note", json!({"title": 42}));
    assert!(response.get("error").is_some());
    assert!(std::fs::read_dir(home.path().join("dev-notes"))
        .unwrap()
        .next()
        .is_none());
}

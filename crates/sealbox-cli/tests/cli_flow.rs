use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_sealbox"))
}

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    fn db_path(&self) -> PathBuf {
        self.dir.path().join("data").join("sealbox.db")
    }

    fn config_home(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    fn write_config(&self, contents: &str) {
        let path = self.config_home().join("sealbox").join("config.toml");
        std::fs::create_dir_all(path.parent().expect("parent")).expect("create config dir");
        std::fs::write(path, contents).expect("write config");
    }

    /// Command with isolated XDG dirs, the sandbox DB and a password.
    fn cmd(&self, password: Option<&str>) -> Command {
        let mut cmd = Command::new(bin());
        cmd.env("XDG_CONFIG_HOME", self.config_home())
            .env("XDG_DATA_HOME", self.dir.path().join("xdg-data"))
            .env("SEALBOX_DB", self.db_path())
            .env_remove("SEALBOX_CONFIG")
            .env_remove("SEALBOX_LOG")
            .env_remove("SEALBOX_PASSWORD");
        if let Some(password) = password {
            cmd.env("SEALBOX_PASSWORD", password);
        }
        cmd
    }
}

fn run(mut cmd: Command, args: &[&str]) -> Output {
    cmd.args(args).output().expect("run sealbox")
}

fn run_with_stdin(mut cmd: Command, args: &[&str], stdin: &str) -> Output {
    let mut child = cmd
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn sealbox");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait sealbox")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("valid JSON on stdout")
}

fn encrypt(sandbox: &Sandbox, text: &str, password: &str) -> String {
    let output = run(sandbox.cmd(Some(password)), &["encrypt", text]);
    assert!(output.status.success(), "encrypt failed: {}", stderr(&output));
    stdout(&output)
}

#[test]
fn test_encrypt_decrypt_round_trip() {
    let sandbox = Sandbox::new();
    let blob = encrypt(&sandbox, "attack at dawn", "pw");

    let output = run(sandbox.cmd(Some("pw")), &["decrypt", &blob]);
    assert!(output.status.success(), "decrypt failed: {}", stderr(&output));
    assert_eq!(stdout(&output), "attack at dawn");

    // Pure encrypt/decrypt never creates the database.
    assert!(!sandbox.db_path().exists());
}

#[test]
fn test_stdin_input_round_trip() {
    let sandbox = Sandbox::new();
    let output = run_with_stdin(sandbox.cmd(Some("pw")), &["encrypt"], "from stdin\n");
    assert!(output.status.success(), "encrypt failed: {}", stderr(&output));
    let blob = stdout(&output);

    let output = run_with_stdin(sandbox.cmd(Some("pw")), &["--json", "decrypt"], &blob);
    assert!(output.status.success(), "decrypt failed: {}", stderr(&output));
    assert_eq!(json(&output)["plaintext"], "from stdin");
}

#[test]
fn test_wrong_password_exits_5_with_uniform_message() {
    let sandbox = Sandbox::new();
    let blob = encrypt(&sandbox, "secret", "right");

    let wrong = run(sandbox.cmd(Some("wrong")), &["decrypt", &blob]);
    assert_eq!(wrong.status.code(), Some(5));
    assert!(stderr(&wrong).contains("Decryption failed (bad password or corrupted data)"));

    let garbage = run(sandbox.cmd(Some("right")), &["decrypt", "not-base64!"]);
    assert_eq!(garbage.status.code(), Some(5));
    assert_eq!(stderr(&garbage), stderr(&wrong));
}

#[test]
fn test_missing_password_without_tty_exits_4() {
    let sandbox = Sandbox::new();
    let output = run(sandbox.cmd(None), &["encrypt", "text"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("SEALBOX_PASSWORD"));
}

#[test]
fn test_save_show_list_delete_flow() {
    let sandbox = Sandbox::new();

    let output = run(
        sandbox.cmd(Some("pw")),
        &[
            "--json",
            "encrypt",
            "stored secret",
            "--save",
            "--filename",
            "a.txt",
            "--note",
            "first",
        ],
    );
    assert!(output.status.success(), "encrypt failed: {}", stderr(&output));
    let first = json(&output);
    let first_id = first["id"].as_i64().expect("id");
    assert!(first["created_at"].is_string());
    assert!(sandbox.db_path().exists());

    let blob = encrypt(&sandbox, "second secret", "pw");
    let output = run(
        sandbox.cmd(None),
        &["--json", "save", &blob, "--filename", "b.txt"],
    );
    assert!(output.status.success(), "save failed: {}", stderr(&output));
    let second_id = json(&output)["id"].as_i64().expect("id");
    assert!(second_id > first_id);

    let output = run(sandbox.cmd(None), &["--json", "show", &first_id.to_string()]);
    assert!(output.status.success());
    let record = json(&output);
    assert_eq!(record["filename"], "a.txt");
    assert_eq!(record["note"], "first");
    assert_eq!(record["algorithm"], "AES-256-GCM");
    assert_eq!(record["kdf"], "PBKDF2:100000");
    assert_eq!(record["ciphertext_b64"], first["ciphertext_b64"]);

    let output = run(sandbox.cmd(None), &["--json", "list", "--limit", "1"]);
    let listed = json(&output);
    let listed = listed.as_array().expect("array");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"].as_i64(), Some(second_id));

    let output = run(sandbox.cmd(None), &["list"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("a.txt"));
    assert!(stdout(&output).contains("b.txt"));

    let output = run(
        sandbox.cmd(Some("pw")),
        &["decrypt", "--id", &first_id.to_string()],
    );
    assert_eq!(stdout(&output), "stored secret");

    let output = run(sandbox.cmd(None), &["--json", "delete", &first_id.to_string()]);
    assert!(output.status.success());
    assert_eq!(json(&output)["deleted"], true);

    let again = run(sandbox.cmd(None), &["delete", &first_id.to_string()]);
    assert_eq!(again.status.code(), Some(3));
    let missing = run(sandbox.cmd(None), &["show", &first_id.to_string()]);
    assert_eq!(missing.status.code(), Some(3));
}

#[test]
fn test_no_db_still_encrypts_but_storage_commands_exit_6() {
    let sandbox = Sandbox::new();
    let output = run(sandbox.cmd(Some("pw")), &["--no-db", "encrypt", "x"]);
    assert!(output.status.success());

    let output = run(sandbox.cmd(None), &["--no-db", "list"]);
    assert_eq!(output.status.code(), Some(6));
    assert!(stderr(&output).contains("Database disabled"));

    let output = run(sandbox.cmd(Some("pw")), &["--no-db", "encrypt", "x", "--save"]);
    assert_eq!(output.status.code(), Some(6));
    assert!(!sandbox.db_path().exists());
}

#[test]
fn test_config_disables_storage_and_rejects_weak_kdf() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[storage]\nenabled = false\n");

    let mut cmd = sandbox.cmd(None);
    cmd.env_remove("SEALBOX_DB");
    let output = run(cmd, &["list"]);
    assert_eq!(output.status.code(), Some(6));

    sandbox.write_config("[kdf]\niterations = 10\n");
    let output = run(sandbox.cmd(Some("pw")), &["encrypt", "x"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("kdf.iterations"));
}

#[test]
fn test_metadata_flags_require_save() {
    let sandbox = Sandbox::new();
    let output = run(
        sandbox.cmd(Some("pw")),
        &["encrypt", "x", "--filename", "a.txt"],
    );
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_oversized_metadata_exits_4() {
    let sandbox = Sandbox::new();
    let long_name = "f".repeat(256);
    let output = run(
        sandbox.cmd(None),
        &["save", "QUJD", "--filename", &long_name],
    );
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_ping_and_completions() {
    let sandbox = Sandbox::new();
    let output = run(sandbox.cmd(None), &["--json", "ping"]);
    assert!(output.status.success());
    let pong = json(&output);
    assert_eq!(pong["ok"], true);
    assert_eq!(pong["msg"], "pong");

    let output = run(sandbox.cmd(None), &["completions", "bash"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("sealbox"));
}

#[test]
fn test_unwritable_db_path_exits_6() {
    let sandbox = Sandbox::new();
    let blocker = sandbox.dir.path().join("blocker");
    std::fs::write(&blocker, b"x").expect("write blocker");
    let db: &Path = &blocker.join("sealbox.db");

    let output = run(sandbox.cmd(None), &["--db", db.to_str().expect("utf8"), "list"]);
    assert_eq!(output.status.code(), Some(6));
    assert!(stderr(&output).contains("Hint:"));
}

#[test]
fn test_decrypt_missing_id_exits_3_before_password() {
    let sandbox = Sandbox::new();
    let output = run(sandbox.cmd(None), &["decrypt", "--id", "42"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("Blob not found: 42"));
}

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub input: PathBuf,
    pub output: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let input = tmp.path().join("assets");
        fs::create_dir_all(&input).expect("create input dir");
        let output = tmp.path().join("out").join("assets.c");
        fs::create_dir_all(output.parent().expect("output parent")).expect("create output dir");

        Self {
            _tmp: tmp,
            input,
            output,
        }
    }

    pub fn file(&self, name: &str, data: &[u8]) -> &Self {
        fs::write(self.input.join(name), data).expect("write input file");
        self
    }

    pub fn dir(&self, name: &str) -> &Self {
        fs::create_dir_all(self.input.join(name)).expect("create input subdir");
        self
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("packdir");
        cmd.env_remove("RUST_LOG").arg(&self.input).arg(&self.output);
        cmd
    }

    pub fn output_text(&self) -> String {
        fs::read_to_string(&self.output).expect("read generated output")
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

/// Decodes every `unsigned char <id>[] = { ... };` block back into
/// (identifier, bytes).
#[allow(dead_code)]
pub fn parse_blocks(text: &str) -> Vec<(String, Vec<u8>)> {
    let mut blocks = Vec::new();
    let mut lines = text.lines();
    while let Some(header) = lines.next() {
        let Some(rest) = header.strip_prefix("unsigned char ") else {
            continue;
        };
        let ident = rest
            .strip_suffix("[] = {")
            .expect("block header shape")
            .to_string();
        let body = lines.next().expect("block body").trim();
        let bytes = if body.is_empty() {
            Vec::new()
        } else {
            body.split(", ")
                .map(|h| {
                    let hex = h.strip_prefix("0x").expect("0x prefix");
                    assert_eq!(hex.len(), 2, "two hex digits: {h}");
                    assert_eq!(hex, hex.to_ascii_lowercase(), "lowercase hex: {h}");
                    u8::from_str_radix(hex, 16).expect("hex byte")
                })
                .collect()
        };
        assert_eq!(lines.next(), Some("};"));
        blocks.push((ident, bytes));
    }
    blocks
}

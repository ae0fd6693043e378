use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command as StdCommand;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub work: PathBuf,
    pub root: PathBuf,
    pub models_src: PathBuf,
    pub build_json: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let work = tmp.path().join("work");
        let root = work.join("n4s");
        let models_src = tmp.path().join("models_src");

        make_fixture_package(&root);
        make_fixture_models(&models_src);

        let build_json = work.join("project_build.json");
        fs::write(
            &build_json,
            serde_json::json!({
                "package_name": "fixture-pkg",
                "models": ["m1", "m2"]
            })
            .to_string(),
        )
        .expect("write build manifest");

        Self {
            _tmp: tmp,
            work,
            root,
            models_src,
            build_json,
        }
    }

    /// Make the workspace a git repo with one tag, so the version probe
    /// resolves `git describe --tags` to `v1.2.3`.
    pub fn init_git(&self) {
        git(&self.work, &["init", "-q"]);
        git(
            &self.work,
            &[
                "-c",
                "user.email=fixture@example.com",
                "-c",
                "user.name=Fixture",
                "commit",
                "--allow-empty",
                "-q",
                "-m",
                "init",
            ],
        );
        git(&self.work, &["tag", "v1.2.3"]);
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("prepack").expect("binary built");
        cmd.current_dir(&self.work)
            .env("MODELS_FOLDER", &self.models_src);
        cmd
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

fn git(dir: &Path, args: &[&str]) {
    let status = StdCommand::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .expect("run git");
    assert!(status.success(), "git {:?} failed", args);
}

fn make_fixture_package(root: &Path) {
    fs::create_dir_all(root.join("core")).expect("create package tree");
    fs::write(root.join("__init__.py"), "").expect("write init");
    fs::write(root.join("service.py"), "print('service')\n").expect("write module");
    fs::write(root.join("core/__init__.py"), "").expect("write sub init");
    fs::write(root.join("core/ops.py"), "print('ops')\n").expect("write sub module");
}

fn make_fixture_models(models_src: &Path) {
    // m1 is a directory tree, m2 a single file: both copy shapes covered.
    fs::create_dir_all(models_src.join("m1/weights")).expect("create model dir");
    fs::write(models_src.join("m1/weights/w.bin"), b"weights-v1").expect("write weight");
    fs::write(models_src.join("m1/meta.json"), "{}").expect("write model meta");
    fs::write(models_src.join("m2"), b"single-file-model").expect("write file model");
}

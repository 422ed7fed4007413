//! Integration tests for the `kraken` binary.
//!
//! Every test runs with a fresh `HOME` and no config environment so the
//! user's own configuration never leaks in.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command for running kraken in an isolated environment.
fn kraken(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("kraken").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("KRAKEN_CONFIG")
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn version_flag_works() {
    let home = TempDir::new().unwrap();
    kraken(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("kraken"));
}

#[test]
fn help_flag_works() {
    let home = TempDir::new().unwrap();
    kraken(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("command console"));
}

mod commands {
    use super::*;

    #[test]
    fn runs_each_line_without_prompt() {
        let home = TempDir::new().unwrap();
        kraken(&home)
            .args(["-c", "core.echo \"hello world\"", "-c", "core.aliases"])
            .assert()
            .success()
            .stdout("hello world\ncore\n");
    }

    #[test]
    fn failures_do_not_stop_later_lines() {
        let home = TempDir::new().unwrap();
        kraken(&home)
            .args(["-c", "ghost.run", "-c", "core", "-c", "core.echo still here"])
            .assert()
            .success()
            .stdout("command not found: ghost\nsyntax error.\nstill here\n");
    }

    #[test]
    fn usage_help_on_missing_argument() {
        let home = TempDir::new().unwrap();
        kraken(&home)
            .args(["-c", "core.usage core"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Arguments\n1. alias: command alias (required)\n"));
    }
}

mod script {
    use super::*;

    #[test]
    fn runs_script_file() {
        let home = TempDir::new().unwrap();
        let script = home.path().join("setup.krk");
        fs::write(&script, "# list things\ncore.aliases\n\ncore.echo done\n").unwrap();

        kraken(&home)
            .arg(&script)
            .assert()
            .success()
            .stdout("core\ndone\n");
    }

    #[test]
    fn missing_script_fails() {
        let home = TempDir::new().unwrap();
        kraken(&home)
            .arg(home.path().join("absent.krk"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to read script"));
    }
}

mod interactive {
    use super::*;

    #[test]
    fn banner_prompt_and_commands() {
        let home = TempDir::new().unwrap();
        kraken(&home)
            .write_stdin("core.echo hi\nbogus\n")
            .assert()
            .success()
            .stdout("Kraken console\nkraken> hi\nkraken> syntax error.\nkraken> \n");
    }

    #[test]
    fn quiet_custom_prompt() {
        let home = TempDir::new().unwrap();
        kraken(&home)
            .args(["-q", "--prompt", "$ "])
            .write_stdin("core.echo hi\n")
            .assert()
            .success()
            .stdout("$ hi\n$ \n");
    }

    #[test]
    fn no_prompt_flag() {
        let home = TempDir::new().unwrap();
        kraken(&home)
            .args(["--quiet", "--no-prompt"])
            .write_stdin("core.echo hi\n")
            .assert()
            .success()
            .stdout("hi\n");
    }
}

mod config {
    use super::*;

    #[test]
    fn explicit_config_file() {
        let home = TempDir::new().unwrap();
        let path = home.path().join("console.toml");
        fs::write(&path, "prompt = \"octo> \"\nbanner = \"Welcome\"\n").unwrap();

        kraken(&home)
            .arg("--config")
            .arg(&path)
            .write_stdin("")
            .assert()
            .success()
            .stdout("Welcome\nocto> \n");
    }

    #[test]
    fn home_config_is_found() {
        let home = TempDir::new().unwrap();
        fs::create_dir_all(home.path().join(".kraken")).unwrap();
        fs::write(
            home.path().join(".kraken/config.toml"),
            "prompt_enabled = false\n",
        )
        .unwrap();

        kraken(&home)
            .arg("-q")
            .write_stdin("core.echo hi\n")
            .assert()
            .success()
            .stdout("hi\n");
    }

    #[test]
    fn env_config_wins() {
        let home = TempDir::new().unwrap();
        let path = home.path().join("env.toml");
        fs::write(&path, "banner = \"from env\"\nprompt_enabled = false\n").unwrap();

        kraken(&home)
            .env("KRAKEN_CONFIG", &path)
            .write_stdin("")
            .assert()
            .success()
            .stdout("from env\n");
    }

    #[test]
    fn unknown_key_is_rejected() {
        let home = TempDir::new().unwrap();
        let path = home.path().join("bad.toml");
        fs::write(&path, "colour = \"red\"\n").unwrap();

        kraken(&home)
            .arg("--config")
            .arg(&path)
            .write_stdin("")
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load configuration"));
    }
}

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn paradox_sql() -> Command {
    Command::cargo_bin("paradox-sql").expect("binary is built")
}

#[test]
fn test_tokens_from_argument() {
    paradox_sql()
        .args(["tokens", "SELECT a FROM t WHERE b<>'it''s'"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SELECT SELECT"))
        .stdout(predicate::str::contains("NOTEQUALS <>"))
        .stdout(predicate::str::contains("CHARACTER it's"));
}

#[test]
fn test_tokens_from_stdin() {
    paradox_sql()
        .arg("tokens")
        .write_stdin("select count(*) from t")
        .assert()
        .success()
        .stdout(predicate::str::contains("IDENTIFIER count (procedure COUNT)"));
}

#[test]
fn test_tokens_tsv() {
    paradox_sql()
        .args(["tokens", "--format", "tsv", "sum(x)"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("IDENTIFIER\tsum\tSUM\n"));
}

#[test]
fn test_empty_input() {
    paradox_sql()
        .arg("tokens")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no SQL input provided"));
}

#[test]
fn test_invalid_number() {
    paradox_sql()
        .args(["tokens", "SELECT 1.2.3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid numeric format"));
}

#[test]
fn test_types() {
    paradox_sql()
        .arg("types")
        .assert()
        .success()
        .stdout(predicate::str::contains("0x0c\tMEMO\tCLOB"))
        .stdout(predicate::str::contains("0x16\tAUTO_INCREMENT\tINTEGER"));
}

#[test]
fn test_clob_from_file() {
    let text = b"memo stored out of row";
    let mut data = vec![0u8; 4096];
    let mut block = vec![0u8; 4096];
    block[0] = 0x02;
    block[1..3].copy_from_slice(&1u16.to_le_bytes());
    block[3..7].copy_from_slice(&(text.len() as u32).to_le_bytes());
    block[9..9 + text.len()].copy_from_slice(text);
    data.extend(block);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&data).unwrap();

    paradox_sql()
        .arg("clob")
        .arg(file.path())
        .arg("--offset")
        .arg((4096 | 0xFF).to_string())
        .arg("--length")
        .arg(text.len().to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("memo stored out of row"));
}

#[test]
fn test_clob_in_leader() {
    paradox_sql()
        .arg("clob")
        .args(["--offset", "0", "--length", "4", "--leader", "abcdef"])
        .assert()
        .success()
        .stdout(predicate::str::diff("abcd\n"));
}

#[test]
fn test_clob_out_of_row_needs_file() {
    paradox_sql()
        .args(["clob", "--offset", "4351", "--length", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("a blob file is needed"));
}

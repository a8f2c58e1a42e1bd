use anyhow::Result;
use std::process::Command;
use tempfile::TempDir;

fn bin() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_grid-icon-gen"));
    command.env_remove("RUST_LOG");
    command
}

fn count_svgs(dir: &std::path::Path) -> Result<usize> {
    let mut count = 0;
    for entry in std::fs::read_dir(dir)? {
        if entry?.path().extension().and_then(|ext| ext.to_str()) == Some("svg") {
            count += 1;
        }
    }
    Ok(count)
}

#[test]
fn test_defaults_write_into_working_directory() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = bin().current_dir(temp_dir.path()).output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout.lines().count(), 9);
    assert!(stdout.lines().all(|line| line.starts_with("Created ")));
    assert!(stdout.contains("grid_3_3.svg"));
    assert_eq!(count_svgs(temp_dir.path())?, 9);
    Ok(())
}

#[test]
fn test_too_small_exits_nonzero_with_diagnostic() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = bin()
        .current_dir(temp_dir.path())
        .args(["--width", "20", "--height", "20", "--max-size", "32", "--min-size", "30"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr)?;
    assert_eq!(
        stderr.lines().collect::<Vec<_>>(),
        vec!["ERROR: computed icon size 20px < min-size 30px."]
    );
    assert!(output.stdout.is_empty());
    assert_eq!(count_svgs(temp_dir.path())?, 0);
    Ok(())
}

#[test]
fn test_huge_grid_with_unusable_output_dir_exits_with_filesystem_code() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, "x")?;

    let output = bin()
        .args(["-W", "1000000", "-H", "1000000", "-M", "1000000", "-m", "1", "-o"])
        .arg(blocker.join("sub"))
        .output()?;

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr)?;
    assert_eq!(stderr.lines().count(), 1);
    assert!(stderr.contains("blocker"));
    Ok(())
}

#[test]
fn test_output_dir_that_is_a_file_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let file = temp_dir.path().join("icons");
    std::fs::write(&file, "x")?;

    let output = bin().arg("--output-dir").arg(&file).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8(output.stderr)?.lines().count(), 1);
    Ok(())
}

#[test]
fn test_output_dir_flag() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let out = temp_dir.path().join("icons");

    let output = bin()
        .args(["-W", "2", "-H", "2", "-o"])
        .arg(&out)
        .output()?;

    assert!(output.status.success());
    assert_eq!(count_svgs(&out)?, 4);
    Ok(())
}

#[test]
fn test_dry_run_prints_plan_and_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = bin()
        .current_dir(temp_dir.path())
        .args(["--width", "2", "--height", "1", "--dry-run"])
        .output()?;

    assert!(output.status.success());
    let plan: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(plan["cell_size"], 16);
    assert_eq!(plan["total_size"], 32);
    assert_eq!(plan["files"], serde_json::json!(["grid_1_1.svg", "grid_1_2.svg"]));
    assert_eq!(count_svgs(temp_dir.path())?, 0);
    Ok(())
}

#[test]
fn test_zero_width_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = bin()
        .current_dir(temp_dir.path())
        .args(["--width", "0"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8(output.stderr)?.lines().count(), 1);
    assert_eq!(count_svgs(temp_dir.path())?, 0);
    Ok(())
}

#[test]
fn test_non_integer_flag_is_rejected_by_parser() -> Result<()> {
    let output = bin().args(["--max-size", "big"]).output()?;

    assert!(!output.status.success());
    Ok(())
}

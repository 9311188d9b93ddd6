use anyhow::Result;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/baby1990.html");

fn babynames(args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_babynames"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?)
}

fn write_report(dir: &Path, name: &str, year: &str, rows: &[(u32, &str, &str)]) -> Result<PathBuf> {
    let mut html = format!("<h3 align=\"center\">Popularity in {}</h3>\n<table>\n", year);
    for (rank, boy, girl) in rows {
        html.push_str(&format!(
            "<tr align=\"right\"><td>{}</td><td>{}</td><td>{}</td>\n",
            rank, boy, girl
        ));
    }
    html.push_str("</table>\n");

    let path = dir.join(name);
    std::fs::write(&path, html)?;
    Ok(path)
}

#[test]
fn test_prints_sorted_names_to_stdout() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let report = write_report(
        temp_dir.path(),
        "baby1990.html",
        "1990",
        &[(1, "Michael", "Jessica"), (2, "Christopher", "Ashley"), (3, "Matthew", "Brittany")],
    )?;

    let output = babynames(&[report.to_str().unwrap()])?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "1990\nAshley 2\nBrittany 3\nChristopher 2\nJessica 1\nMatthew 3\nMichael 1\n"
    );
    assert!(!temp_dir.path().join("baby1990.html.summary").exists());
    Ok(())
}

#[test]
fn test_multiple_files_print_in_argument_order() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let later = write_report(temp_dir.path(), "baby2008.html", "2008", &[(1, "Jacob", "Emma")])?;
    let earlier = write_report(temp_dir.path(), "baby1992.html", "1992", &[(1, "Michael", "Ashley")])?;

    let output = babynames(&[later.to_str().unwrap(), earlier.to_str().unwrap()])?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "2008\nEmma 1\nJacob 1\n1992\nAshley 1\nMichael 1\n"
    );
    Ok(())
}

#[test]
fn test_summaryfile_matches_stdout_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("baby1990.html");
    std::fs::copy(FIXTURE, &input)?;
    let input = input.to_str().unwrap();

    let printed = babynames(&[input])?;
    assert!(printed.status.success());

    let summarized = babynames(&["--summaryfile", input])?;
    assert!(summarized.status.success());
    assert!(summarized.stdout.is_empty());

    let summary = std::fs::read(temp_dir.path().join("baby1990.html.summary"))?;
    assert_eq!(summary, printed.stdout);
    Ok(())
}

#[test]
fn test_summaryfile_overwrites_previous_summary() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let report = write_report(temp_dir.path(), "baby2000.html", "2000", &[(1, "Jacob", "Emily")])?;
    let summary_path = temp_dir.path().join("baby2000.html.summary");
    std::fs::write(&summary_path, "stale content that is longer than the new summary\n")?;

    let output = babynames(&["--summaryfile", report.to_str().unwrap()])?;

    assert!(output.status.success());
    assert_eq!(std::fs::read_to_string(&summary_path)?, "2000\nEmily 1\nJacob 1\n");
    Ok(())
}

#[test]
fn test_no_files_prints_usage_and_fails() -> Result<()> {
    let output = babynames(&[])?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Usage"));

    let output = babynames(&["--summaryfile"])?;
    assert!(!output.status.success());
    Ok(())
}

#[test]
fn test_missing_year_aborts_the_run() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let good = write_report(temp_dir.path(), "baby1990.html", "1990", &[(1, "Michael", "Jessica")])?;
    let bad = temp_dir.path().join("notes.html");
    std::fs::write(&bad, "<td>1</td><td>Michael</td><td>Jessica</td>\n")?;
    let never = write_report(temp_dir.path(), "baby1992.html", "1992", &[(1, "Michael", "Ashley")])?;

    let output = babynames(&[
        "--summaryfile",
        good.to_str().unwrap(),
        bad.to_str().unwrap(),
        never.to_str().unwrap(),
    ])?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("notes.html"));
    assert!(temp_dir.path().join("baby1990.html.summary").exists());
    assert!(!temp_dir.path().join("notes.html.summary").exists());
    assert!(!temp_dir.path().join("baby1992.html.summary").exists());
    Ok(())
}

#[test]
fn test_unreadable_file_reports_path() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("baby1880.html");

    let output = babynames(&[missing.to_str().unwrap()])?;

    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("baby1880.html"));
    Ok(())
}

use assert_cmd::Command;
use assert_fs::prelude::*;
use indoc::indoc;
use predicates::prelude::*;

const BINARY: &str = "mutwatch";
type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn file_doesnt_exist() -> TestResult {
    let temp = assert_fs::TempDir::new()?;

    Command::cargo_bin(BINARY)?
        .current_dir(temp.path())
        .args(["compare", "file_which_does_not_exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Unable to read sequence from file_which_does_not_exist.txt",
        ));

    temp.child("mutations.svg").assert(predicate::path::missing());
    Ok(())
}

#[test]
fn compare_mutated_sample() -> TestResult {
    let temp = assert_fs::TempDir::new()?;
    let plot = temp.child("plot.svg");

    let output = Command::cargo_bin(BINARY)?
        .args(["compare", "tests/data/mutated.txt", "--no-display", "-o"])
        .arg(plot.path())
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let report = stdout
        .split_once(" ---\n")
        .map(|(_, report)| report)
        .ok_or("no analysis header")?;

    assert_eq!(
        report,
        indoc! {"
            Mutations detected:
              Position 3: C → G
            Warning! Lengths differ. Reference: 12, Sample: 10
        "}
    );

    plot.assert(predicate::str::contains("C→G"));
    Ok(())
}

#[test]
fn compare_matching_sample() -> TestResult {
    let temp = assert_fs::TempDir::new()?;
    let plot = temp.child("plot.svg");

    Command::cargo_bin(BINARY)?
        .args(["compare", "tests/data/matching.txt", "-o"])
        .arg(plot.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No mutations detected."))
        .stdout(predicate::str::contains("Reference  A T G C T A G C T A A T"));

    plot.assert(predicate::path::exists());
    Ok(())
}

#[test]
fn compare_custom_reference() -> TestResult {
    let temp = assert_fs::TempDir::new()?;
    let sensor = temp.child("sensor_data.txt");
    sensor.write_str("ATGG")?;

    Command::cargo_bin(BINARY)?
        .current_dir(temp.path())
        .args(["compare", "--reference", "atgc", "--no-display"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Position 3: C → G"))
        .stdout(predicate::str::contains("Warning!").not());

    temp.child("mutations.svg").assert(predicate::path::exists());
    Ok(())
}

#[test]
fn compare_invalid_sample() -> TestResult {
    let temp = assert_fs::TempDir::new()?;

    Command::cargo_bin(BINARY)?
        .args(["compare", "tests/data/invalid.txt", "-o"])
        .arg(temp.child("plot.svg").path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid character 'X' at position 5. Only A, T, C, G are allowed.",
        ));

    Ok(())
}

#[test]
fn invalid_reference() -> TestResult {
    Command::cargo_bin(BINARY)?
        .args(["compare", "tests/data/matching.txt", "-r", "ATGN"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid character 'N' at position 3"));

    Ok(())
}

#[test]
fn monitor_rejects_zero_interval() -> TestResult {
    Command::cargo_bin(BINARY)?
        .args(["monitor", "tests/data/matching.txt", "--interval", "0"])
        .assert()
        .failure();

    Ok(())
}

#[test]
fn help_lists_subcommands() -> TestResult {
    Command::cargo_bin(BINARY)?
        .assert()
        .failure()
        .stderr(predicate::str::contains("monitor").and(predicate::str::contains("compare")));

    Ok(())
}

#[cfg(unix)]
#[test]
fn monitor_stops_on_sigint() -> TestResult {
    use assert_cmd::cargo::CommandCargoExt;
    use std::process::Stdio;
    use std::time::{Duration, Instant};

    let temp = assert_fs::TempDir::new()?;
    let plot = temp.child("plot.svg");

    let child = std::process::Command::cargo_bin(BINARY)?
        .args(["monitor", "tests/data/mutated.txt", "--no-display", "-i", "60", "-o"])
        .arg(plot.path())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    // the plot only appears once the handler is installed and the first reading is done
    let started = Instant::now();
    while !plot.path().exists() {
        assert!(started.elapsed() < Duration::from_secs(30), "monitor never wrote a plot");
        std::thread::sleep(Duration::from_millis(50));
    }

    let killed = std::process::Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()?;
    assert!(killed.success());

    let output = child.wait_with_output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout.matches("--- Analysis: ").count(), 1);
    assert!(stdout.contains("Position 3: C → G"));
    assert!(stdout.trim_end().ends_with("Monitoring stopped."));

    Ok(())
}

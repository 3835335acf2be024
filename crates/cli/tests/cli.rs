use assert_cmd::Command;
use predicates::prelude::*;

fn slimsweep() -> Command {
    Command::cargo_bin("slimsweep").unwrap()
}

fn stdout_of(cmd: &mut Command) -> String {
    let assert = cmd.assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn test_cluster_default_grid_size() {
    let stdout = stdout_of(slimsweep().arg("sweep").arg("cluster"));
    assert_eq!(stdout.lines().count(), 51 * 51);
}

#[test]
fn test_cluster_header_on_first_line_only() {
    let stdout = stdout_of(
        slimsweep()
            .arg("sweep")
            .arg("cluster")
            .arg("--homing-steps")
            .arg("2")
            .arg("--res-steps")
            .arg("3"),
    );
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "slimsweep run --homing 0.50 --res 0.000 --header");
    assert!(lines[1..].iter().all(|l| !l.contains("--header")));
    assert_eq!(lines[5], "slimsweep run --homing 0.51 --res 0.002");
}

#[test]
fn test_cluster_writes_output_file() {
    let temp = tempfile::tempdir().unwrap();
    let params = temp.path().join("params.txt");

    slimsweep()
        .arg("sweep")
        .arg("cluster")
        .arg("--homing-steps")
        .arg("2")
        .arg("--res-steps")
        .arg("2")
        .arg("--output")
        .arg(&params)
        .assert()
        .success();

    let text = std::fs::read_to_string(&params).unwrap();
    assert_eq!(text.lines().count(), 4);
}

#[test]
fn test_local_array_script_structure() {
    let stdout = stdout_of(
        slimsweep()
            .arg("sweep")
            .arg("local")
            .arg("--homing-steps")
            .arg("3")
            .arg("--res-steps")
            .arg("3")
            .arg("--jobs")
            .arg("4"),
    );
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines[0], "#!/bin/bash");
    assert_eq!(lines[1], "mkdir -p sweep_data");

    // A barrier after every 4th launched job, one more at the end.
    let wait_positions: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, l)| **l == "wait")
        .map(|(i, _)| i)
        .collect();
    assert_eq!(wait_positions.len(), 3);

    assert_eq!(
        &lines[lines.len() - 4..],
        &[
            "wait",
            "cd sweep_data",
            "cat *.part > large_array.csv",
            "rm *.part"
        ]
    );

    assert!(lines[2].ends_with("> sweep_data/1.part &"));
    assert!(lines[2].contains("--header"));
    assert!(stdout.contains("> sweep_data/9.part &"));
}

#[test]
fn test_local_array_default_grid() {
    let stdout = stdout_of(slimsweep().arg("sweep").arg("local").arg("--jobs").arg("8"));
    let jobs = stdout.lines().filter(|l| l.ends_with(".part &")).count();
    assert_eq!(jobs, 11 * 11);
}

#[cfg(unix)]
mod with_stub_simulator {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    /// Drop an executable stand-in for `slim` into a tempdir.
    fn write_stub(dir: &tempfile::TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("fake_slim");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn test_run_prints_stripped_payload() {
        let temp = tempfile::tempdir().unwrap();
        let stub = write_stub(
            &temp,
            "echo 'initialize() log line'\necho 'OUT:0.5,0.1,0.2'\necho 'ignored'\necho 'OUT:,1000'",
        );

        slimsweep()
            .arg("run")
            .arg("--slim")
            .arg(&stub)
            .assert()
            .success()
            .stdout(predicate::eq("0.5,0.1,0.2,1000\n"))
            .stdout(predicate::str::contains("initialize").not());
    }

    #[test]
    fn test_run_header_flag() {
        let temp = tempfile::tempdir().unwrap();
        let stub = write_stub(&temp, "echo 'OUT:1,2'");

        slimsweep()
            .arg("run")
            .arg("--slim")
            .arg(&stub)
            .arg("--header")
            .assert()
            .success()
            .stdout(predicate::str::starts_with(
                "Drive homing rate,Resistance formation rate,",
            ))
            .stdout(predicate::str::contains("1,2"));
    }

    #[test]
    fn test_run_passes_defines_and_source_last() {
        let temp = tempfile::tempdir().unwrap();
        // The stub reflects its whole argument list back as payload.
        let stub = write_stub(&temp, "echo \"OUT:$*\"");

        slimsweep()
            .arg("run")
            .arg("--slim")
            .arg(&stub)
            .arg("--homing")
            .arg("0.5")
            .arg("--suppression")
            .assert()
            .success()
            .stdout(predicate::str::contains("-d HOMING_SUCCESS_RATE=0.5"))
            .stdout(predicate::str::contains(
                "-d RECESSIVE_FEMALE_STERILE_SUPPRESSION=T",
            ))
            .stdout(predicate::str::ends_with("minimal_gene_drive.slim\n"));
    }

    #[test]
    fn test_run_suppression_defaults_to_false() {
        let temp = tempfile::tempdir().unwrap();
        let stub = write_stub(&temp, "echo \"OUT:$*\"");

        slimsweep()
            .arg("run")
            .arg("--slim")
            .arg(&stub)
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "-d RECESSIVE_FEMALE_STERILE_SUPPRESSION=F",
            ));
    }

    #[test]
    fn test_replicates_prints_running_means() {
        let temp = tempfile::tempdir().unwrap();
        let stub = write_stub(&temp, "echo '#OUTPUT: 0.5'");

        slimsweep()
            .arg("replicates")
            .arg("--slim")
            .arg(&stub)
            .arg("--runs")
            .arg("4")
            .assert()
            .success()
            .stdout(predicate::eq("0.5\n0.5\n0.5\n0.5\n"));
    }

    #[test]
    fn test_replicates_missing_marker_is_fatal() {
        let temp = tempfile::tempdir().unwrap();
        let stub = write_stub(&temp, "echo 'no marker line at all'");

        slimsweep()
            .arg("replicates")
            .arg("--slim")
            .arg(&stub)
            .arg("--runs")
            .arg("3")
            .assert()
            .failure()
            .stderr(predicate::str::contains("#OUTPUT:"));
    }
}

#[test]
fn test_run_missing_executable_fails() {
    slimsweep()
        .arg("run")
        .arg("--slim")
        .arg("definitely-not-a-real-simulator")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to launch"));
}

#[test]
fn test_stats_pretty_values() {
    slimsweep()
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Segregating sites: 3"))
        .stdout(predicate::str::contains("Watterson's theta (θ_W): 0.136364"))
        .stdout(predicate::str::contains("Nucleotide diversity (π): 0.138889"))
        .stdout(predicate::str::contains("Tajima's D: 0.1677"));
}

#[test]
fn test_stats_json_values() {
    slimsweep()
        .arg("stats")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"segregating_sites\": 3"))
        .stdout(predicate::str::contains("\"sequences\": 4"));
}

#[test]
fn test_stats_unknown_format_fails() {
    slimsweep()
        .arg("stats")
        .arg("--format")
        .arg("xml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format"));
}

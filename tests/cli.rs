use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("methanol_check").unwrap()
}

#[test]
fn calc_with_defaults() {
    cmd()
        .arg("calc")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Required Methanol Rate: 9.75 gal/day",
        ))
        .stdout(predicate::str::contains("Rate per MMscf: 9.70 gal/MMscf"));
}

#[test]
fn calc_json() {
    cmd()
        .args(&["calc", "-t", "80", "-u", "1100", "-d", "500", "-g", "3.3", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"success\""))
        .stdout(predicate::str::contains("\"rate\": 32.0"));
}

#[test]
fn calc_no_methanol() {
    cmd()
        .args(&["calc", "-t", "150", "-u", "600", "-d", "590"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No methanol injection required!"));
}

#[test]
fn calc_below_highest_curve() {
    cmd()
        .args(&["calc", "-t", "-40"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("16 gal/MMscf hydrate curve"));
}

#[test]
fn calc_rejects_pressure_order() {
    cmd()
        .args(&["calc", "-u", "400", "-d", "500"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Upstream pressure must be greater than downstream pressure.",
        ));
}

#[test]
fn calc_rejects_out_of_range() {
    cmd()
        .args(&["calc", "-g", "5000"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Gas rate [5000] is out of range"));
}

#[test]
fn calc_pressure_ceiling_with_config() {
    let dir = assert_fs::TempDir::new().unwrap();
    let config = dir.child("config.json");
    config
        .write_str(r#"{"limits": {"downstream_pressure": {"min": 0, "max": 2000}}}"#)
        .unwrap();

    cmd()
        .args(&[
            "calc",
            "--config",
            config.path().to_str().unwrap(),
            "-t",
            "60",
            "-u",
            "1600",
            "-d",
            "1590",
            "--json",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"status\": \"error\""))
        .stdout(predicate::str::contains("1600 psia"));
    dir.close().unwrap();
}

#[test]
fn config_defaults_from_file() {
    let dir = assert_fs::TempDir::new().unwrap();
    let config = dir.child("config.json");
    config
        .write_str(r#"{"defaults": {"gas_rate": 3.3}}"#)
        .unwrap();

    cmd()
        .args(&["calc", "-c", config.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("32.00 gal/day"));

    cmd()
        .args(&["config", "-c", config.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"gas_rate\": 3.3"));
    dir.close().unwrap();
}

#[test]
fn invalid_config_file() {
    let dir = assert_fs::TempDir::new().unwrap();
    let config = dir.child("config.json");
    config.write_str("not json").unwrap();

    cmd()
        .args(&["calc", "-c", config.path().to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid configuration"));
    dir.close().unwrap();
}

#[test]
fn chart_files() {
    let dir = assert_fs::TempDir::new().unwrap();
    let svg = dir.child("chart.svg");
    let csv = dir.child("chart.csv");

    cmd()
        .args(&[
            "chart",
            "--svg",
            svg.path().to_str().unwrap(),
            "--csv",
            csv.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("9.75 gal/day"));

    svg.assert(predicate::str::contains("Permian Hydrate Formation Curves"));
    csv.assert(predicate::str::starts_with(
        "series,temperature_f,pressure_psia",
    ));
    dir.close().unwrap();
}

#[test]
fn chart_to_stdout() {
    cmd()
        .arg("chart")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<svg"))
        .stdout(predicate::str::contains("T2: 32.0"));
}

#[test]
fn chart_failed_calculation_exit_code() {
    cmd()
        .args(&["chart", "-t", "-40"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("<svg"));
}

#[test]
fn curves_listing() {
    cmd()
        .arg("curves")
        .assert()
        .success()
        .stdout(predicate::str::contains("16 gal/MMscf  50 samples"));

    cmd()
        .args(&["curves", "--dosage", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("36.40"));

    cmd()
        .args(&["curves", "--dosage", "3"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No hydrate curve for [3] gal/MMscf"));

    cmd()
        .args(&["curves", "--pressure", "514.7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 gal/MMscf     53.87 F"));
}

// Without a terminal the prompts read no answer, so piped input is ignored
// and every question falls back to its default. Answer parsing is covered by
// the unit tests of `parse_answer_or`.
#[test]
fn interactive_accepts_defaults() {
    cmd()
        .arg("interactive")
        .write_stdin("\n\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("9.75 gal/day"));
}

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn grid(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget-grid").unwrap();
    cmd.env("BUDGET_GRID_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG")
        .env_remove("BUDGET_GRID_FILE");
    cmd
}

fn run(data_dir: &TempDir, args: &[&str]) {
    grid(data_dir).args(args).assert().success();
}

fn seeded() -> TempDir {
    let data_dir = TempDir::new().unwrap();
    run(&data_dir, &["init"]);
    run(&data_dir, &["period", "set", "Jan", "Feb"]);
    run(&data_dir, &["expense", "add", "rent", "-c", "Housing", "-d", "Office rent"]);
    run(&data_dir, &["cell", "pair", "rent", "Jan", "1.000,00", "1.200,00"]);
    data_dir
}

#[test]
fn init_creates_project_file() {
    let data_dir = TempDir::new().unwrap();
    grid(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Initialized project"));

    assert!(data_dir.path().join("projects").join("default.json").exists());
    assert!(data_dir.path().join("config.json").exists());
}

#[test]
fn commands_before_init_point_to_init() {
    let data_dir = TempDir::new().unwrap();
    grid(&data_dir)
        .arg("info")
        .assert()
        .failure()
        .stderr(contains("budget-grid init"));
}

#[test]
fn report_shows_formatted_amounts_and_totals() {
    let data_dir = seeded();

    grid(&data_dir)
        .args(["report", "predicted", "--no-color"])
        .assert()
        .success()
        .stdout(contains("Predicted"))
        .stdout(contains("Housing"))
        .stdout(contains("R$ 1.000,00"))
        .stdout(contains("Total"));

    grid(&data_dir)
        .args(["report", "rearranged", "--no-color"])
        .assert()
        .success()
        .stdout(contains("200,00 %"));
}

#[test]
fn report_csv_writes_full_table() {
    let data_dir = seeded();
    let csv_path = data_dir.path().join("executed.csv");

    grid(&data_dir)
        .args(["report", "executed", "--csv"])
        .arg(&csv_path)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert!(csv.starts_with("Category,Description,Jan,Feb,Total"));
    assert!(csv.contains("R$ 1.200,00"));
}

#[test]
fn document_export_round_trips_through_import() {
    let data_dir = seeded();
    let document = data_dir.path().join("report.txt");

    grid(&data_dir)
        .args(["export", "document"])
        .arg(&document)
        .assert()
        .success()
        .stdout(contains("exported to"));

    run(&data_dir, &["clear", "--yes"]);
    grid(&data_dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(contains("No expenses found."));

    grid(&data_dir)
        .arg("import")
        .arg(&document)
        .assert()
        .success()
        .stdout(contains("Imported 1 expenses x 2 periods"));

    grid(&data_dir)
        .args(["cell", "show", "rent", "Jan"])
        .assert()
        .success()
        .stdout(contains("R$ 1.200,00"));
}

#[test]
fn json_export_round_trips_through_import() {
    let data_dir = seeded();
    let export = data_dir.path().join("ledger.json");

    grid(&data_dir)
        .args(["export", "json"])
        .arg(&export)
        .assert()
        .success();

    run(&data_dir, &["expense", "remove", "rent"]);
    grid(&data_dir).arg("import").arg(&export).assert().success();

    grid(&data_dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(contains("rent"));
}

#[test]
fn import_without_token_reports_no_data() {
    let data_dir = seeded();
    let notes = data_dir.path().join("notes.txt");
    std::fs::write(&notes, "quarterly notes, nothing embedded").unwrap();

    grid(&data_dir)
        .arg("import")
        .arg(&notes)
        .assert()
        .success()
        .stdout(contains("No ledger data found"));

    // The existing project is left alone
    grid(&data_dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(contains("rent"));
}

#[test]
fn zero_factor_is_rejected() {
    let data_dir = seeded();
    grid(&data_dir)
        .args(["project", "factor", "0"])
        .assert()
        .failure();
}

#[test]
fn setting_a_missing_cell_fails() {
    let data_dir = seeded();
    grid(&data_dir)
        .args(["cell", "predicted", "travel", "Jan", "10,00"])
        .assert()
        .failure()
        .stderr(contains("travel"));
}

#[test]
fn clear_requires_confirmation() {
    let data_dir = seeded();
    grid(&data_dir)
        .arg("clear")
        .assert()
        .failure()
        .stderr(contains("--yes"));

    grid(&data_dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(contains("rent").and(contains("Housing")));
}

#[test]
fn project_set_updates_info() {
    let data_dir = seeded();
    run(
        &data_dir,
        &["project", "set", "--org", "Acme", "--initial", "50.000,00"],
    );

    grid(&data_dir)
        .arg("info")
        .assert()
        .success()
        .stdout(contains("Acme"))
        .stdout(contains("R$ 50.000,00"))
        .stdout(contains("1 expenses x 2 periods"));
}

#[test]
fn oversized_amounts_do_not_crash() {
    let data_dir = seeded();
    run(
        &data_dir,
        &[
            "project",
            "set",
            "--initial",
            "99999999999999999999",
            "--yield",
            "1",
        ],
    );
    run(
        &data_dir,
        &["cell", "pair", "fuel", "Jan", "99999999999999999999", "0"],
    );
    run(
        &data_dir,
        &["cell", "pair", "tax", "Jan", "99999999999999999999", "0"],
    );

    grid(&data_dir)
        .args(["report", "predicted", "--no-color"])
        .assert()
        .success()
        .stdout(contains("R$ 92.233.720.368.547.758,07"));
}

#[test]
fn period_show_lists_the_column() {
    let data_dir = seeded();
    grid(&data_dir)
        .args(["period", "show", "Jan"])
        .assert()
        .success()
        .stdout(contains("Period Jan"))
        .stdout(contains("rent"))
        .stdout(contains("R$ 1.200,00"));

    grid(&data_dir)
        .args(["period", "show", "Dec"])
        .assert()
        .failure()
        .stderr(contains("Period not found: Dec"));
}

#[test]
fn config_reports_project_status() {
    let data_dir = TempDir::new().unwrap();
    grid(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("(missing)"));

    run(&data_dir, &["init"]);
    grid(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("(ok)"));
}

//! CLI Integration Tests
//!
//! Runs the `paxgrid` binary against workbooks built in temp directories.

#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

use assert_cmd::Command;
use paxgrid::config::GridConfig;
use paxgrid::excel::{load_workbook, save_workbook, Workbook};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const HEADER: &str = "Nro. habitación,Fecha de ingreso,Fecha de egreso,Plazas ocupadas,Tipo documento,Nro. doc.,Apellido y nombre,Edad,Voucher,Servicios,Estado,Paquete,Sede";

const WORKBOOK: &str = "Grilla de Pax 2030.xlsx";

fn write_grid(dir: &Path) -> PathBuf {
    let config = GridConfig::default();
    let mut workbook = Workbook::new();

    workbook.add_sheet(&config.ledger_sheet).set(1, 1, "HAB");
    for range in &config.floors {
        let sheet = workbook.add_sheet(&range.floor);
        sheet.set(1, 2, "HAB");
        let mut row = 2;
        for room in range.min_room..=range.max_room {
            sheet.set(row, 2, room as f64);
            row += 2;
        }
    }

    let path = dir.join(WORKBOOK);
    save_workbook(&workbook, &path).unwrap();
    path
}

fn write_csv(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("reservas.csv");
    fs::write(&path, format!("{HEADER}\n{body}")).unwrap();
    path
}

fn backups(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|name| name.starts_with("BACKUP_"))
        .collect();
    names.sort();
    names
}

fn paxgrid() -> Command {
    let mut cmd = Command::cargo_bin("paxgrid").unwrap();
    cmd.env_remove("PAXGRID_WORKBOOK")
        .env_remove("PAXGRID_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND VERSION TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_help() {
    paxgrid()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("paxgrid"))
        .stdout(predicate::str::contains("COMMANDS"));
}

#[test]
fn test_cli_version() {
    paxgrid()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("paxgrid"));
}

#[test]
fn test_import_help() {
    paxgrid()
        .args(["import", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reservation CSV"));
}

#[test]
fn test_clear_help() {
    paxgrid()
        .args(["clear", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BACKUP_LIMPIEZA_"));
}

#[test]
fn test_import_requires_csv_argument() {
    paxgrid().arg("import").assert().failure();
}

// ═══════════════════════════════════════════════════════════════════════════
// IMPORT TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_import_default_workbook_in_current_dir() {
    let temp_dir = TempDir::new().unwrap();
    let workbook = write_grid(temp_dir.path());
    write_csv(
        temp_dir.path(),
        "105,23/05/2030,26/05/2030,2,DNI,30111222,PEREZ JUAN,41,V-1,Desayuno,Confirmada,Plan A,Centro\n\
         105,23/05/2030,26/05/2030,2,DNI,30111333,PEREZ ANA,39,V-1,Desayuno,Confirmada,Plan A,Centro\n\
         230,23/05/2030,25/05/2030,1,PAS,X998877,SMITH JOHN,55,V-2,MEDIA PENSION,Confirmada,Plan B,Norte\n",
    );

    paxgrid()
        .current_dir(temp_dir.path())
        .args(["import", "reservas.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("IMPORT COMPLETED"))
        .stdout(predicate::str::contains("Backup created"));

    let loaded = load_workbook(&workbook).unwrap();
    let log = loaded.sheet("Ingresos 23 D MAYO").unwrap();
    assert_eq!(log.display(2, 7), "PEREZ JUAN");
    assert_eq!(log.display(4, 7), "SMITH JOHN");

    let piso1 = loaded.sheet("PISO 1").unwrap();
    assert_eq!(piso1.display(10, 8), "PEREZ JUAN");
    assert_eq!(piso1.display(11, 8), "PEREZ ANA");
    assert_eq!(piso1.display(280, 9), "3");
    assert_eq!(piso1.display(281, 9), "2");
    assert_eq!(piso1.display(282, 9), "1");

    assert_eq!(backups(temp_dir.path()).len(), 1);
}

#[test]
fn test_import_with_workbook_flag() {
    let temp_dir = TempDir::new().unwrap();
    let workbook = write_grid(temp_dir.path());
    let csv = write_csv(temp_dir.path(), "343,a,b,1,DNI,1,ALONE,30,,,,,\n");

    paxgrid()
        .arg("import")
        .arg(&csv)
        .arg("--workbook")
        .arg(&workbook)
        .assert()
        .success();

    let loaded = load_workbook(&workbook).unwrap();
    assert_eq!(loaded.sheet("PISO 3").unwrap().display(2, 8), "ALONE");
}

#[test]
fn test_import_workbook_from_env() {
    let temp_dir = TempDir::new().unwrap();
    let workbook = write_grid(temp_dir.path());
    let csv = write_csv(temp_dir.path(), "222,a,b,1,DNI,1,ENV GUEST,30,,,,,\n");

    paxgrid()
        .env("PAXGRID_WORKBOOK", &workbook)
        .arg("import")
        .arg(&csv)
        .assert()
        .success();

    let loaded = load_workbook(&workbook).unwrap();
    assert_eq!(loaded.sheet("PISO 2").unwrap().display(2, 8), "ENV GUEST");
}

#[test]
fn test_import_unassigned_room_warns() {
    let temp_dir = TempDir::new().unwrap();
    let workbook = write_grid(temp_dir.path());
    let csv = write_csv(
        temp_dir.path(),
        "999,a,b,1,DNI,1,NOBODY,1,,,,,\n101,a,b,1,DNI,2,SOMEONE,2,,,,,\n",
    );

    paxgrid()
        .args(["import", "--workbook"])
        .arg(&workbook)
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Room '999' has no floor assigned"));

    let loaded = load_workbook(&workbook).unwrap();
    let log = loaded.sheet("Ingresos 23 D MAYO").unwrap();
    assert_eq!(log.display(2, 1), "101");
    assert!(log.is_empty_at(3, 1));
}

#[test]
fn test_import_missing_columns_fails_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    let workbook = write_grid(temp_dir.path());
    let original = fs::read(&workbook).unwrap();
    let csv = temp_dir.path().join("reservas.csv");
    fs::write(&csv, "Nro. habitación,Edad\n101,30\n").unwrap();

    paxgrid()
        .arg("import")
        .arg(&csv)
        .arg("--workbook")
        .arg(&workbook)
        .assert()
        .failure()
        .stdout(predicate::str::contains("missing required columns"))
        .stdout(predicate::str::contains("Voucher"));

    assert_eq!(fs::read(&workbook).unwrap(), original);
    assert!(backups(temp_dir.path()).is_empty());
}

#[test]
fn test_import_missing_sheet_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(WORKBOOK);
    let mut workbook = Workbook::new();
    workbook.add_sheet("Ingresos 23 D MAYO");
    workbook.add_sheet("PISO 1");
    save_workbook(&workbook, &path).unwrap();
    let csv = write_csv(temp_dir.path(), "101,a,b,1,DNI,1,X,1,,,,,\n");

    paxgrid()
        .arg("import")
        .arg(&csv)
        .arg("--workbook")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Sheet 'PISO 2' does not exist"));
}

#[test]
fn test_import_missing_workbook_fails() {
    let temp_dir = TempDir::new().unwrap();
    let csv = write_csv(temp_dir.path(), "101,a,b,1,DNI,1,X,1,,,,,\n");

    paxgrid()
        .current_dir(temp_dir.path())
        .arg("import")
        .arg(&csv)
        .assert()
        .failure()
        .stdout(predicate::str::contains("File not found"));
}

#[test]
fn test_import_with_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.xlsx");
    let mut workbook = Workbook::new();
    workbook.add_sheet("LOG");
    workbook.add_sheet("ALA UNICA").set(2, 2, "7");
    save_workbook(&workbook, &path).unwrap();

    let config = temp_dir.path().join("paxgrid.yaml");
    fs::write(
        &config,
        format!(
            "workbook: {}\nledger_sheet: LOG\nfloors:\n  - floor: ALA UNICA\n    min_room: 1\n    max_room: 9\nsummary:\n  sheet: ALA UNICA\n  row: 40\n  column: 8\n",
            path.display()
        ),
    )
    .unwrap();
    let csv = write_csv(temp_dir.path(), "7,a,b,1,DNI,1,SOLO,1,,ALL INCLUSIVE,,,\n");

    paxgrid()
        .arg("import")
        .arg(&csv)
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    let loaded = load_workbook(&path).unwrap();
    let wing = loaded.sheet("ALA UNICA").unwrap();
    assert_eq!(wing.display(2, 8), "SOLO");
    assert_eq!(wing.display(44, 9), "1");
    assert_eq!(loaded.sheet("LOG").unwrap().display(2, 1), "7");
}

#[test]
fn test_import_rejects_summary_anchor_outside_sheet() {
    let temp_dir = TempDir::new().unwrap();
    let workbook = write_grid(temp_dir.path());
    let original = fs::read(&workbook).unwrap();
    let config = temp_dir.path().join("paxgrid.yaml");
    fs::write(&config, "summary:\n  row: 0\n").unwrap();
    let csv = write_csv(temp_dir.path(), "101,a,b,1,DNI,1,X,1,,,,,\n");

    paxgrid()
        .arg("import")
        .arg(&csv)
        .arg("--workbook")
        .arg(&workbook)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Invalid configuration"));

    assert_eq!(fs::read(&workbook).unwrap(), original);
}

// ═══════════════════════════════════════════════════════════════════════════
// CLEAR TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_clear_after_import() {
    let temp_dir = TempDir::new().unwrap();
    let workbook = write_grid(temp_dir.path());
    let csv = write_csv(
        temp_dir.path(),
        "101,a,b,1,DNI,1,UNO,1,,,,,\n222,a,b,1,DNI,2,DOS,2,,,,,\n",
    );

    paxgrid()
        .arg("import")
        .arg(&csv)
        .arg("--workbook")
        .arg(&workbook)
        .assert()
        .success();
    assert_eq!(backups(temp_dir.path()).len(), 1);

    paxgrid()
        .arg("clear")
        .arg("--workbook")
        .arg(&workbook)
        .assert()
        .success()
        .stdout(predicate::str::contains("CLEANUP COMPLETED"))
        .stdout(predicate::str::contains("Deleted"));

    let loaded = load_workbook(&workbook).unwrap();
    let log = loaded.sheet("Ingresos 23 D MAYO").unwrap();
    assert_eq!(log.display(1, 1), "HAB");
    assert!(log.is_empty_at(2, 1));
    assert!(log.is_empty_at(3, 7));

    let piso1 = loaded.sheet("PISO 1").unwrap();
    assert!(piso1.is_empty_at(2, 8));
    assert_eq!(piso1.display(2, 2), "101");
    assert_eq!(piso1.display(1, 2), "HAB");

    assert!(backups(temp_dir.path()).is_empty());
}

#[test]
fn test_clear_skips_missing_sheet() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(WORKBOOK);
    let mut workbook = Workbook::new();
    workbook.add_sheet("PISO 1").set(5, 8, "LEFTOVER");
    save_workbook(&workbook, &path).unwrap();

    paxgrid()
        .current_dir(temp_dir.path())
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sheet 'PISO 2' does not exist; skipped"));

    let loaded = load_workbook(&path).unwrap();
    assert!(loaded.sheet("PISO 1").unwrap().is_empty_at(5, 8));
}

#[test]
fn test_clear_missing_workbook_fails() {
    let temp_dir = TempDir::new().unwrap();

    paxgrid()
        .current_dir(temp_dir.path())
        .arg("clear")
        .assert()
        .failure()
        .stdout(predicate::str::contains("File not found"));
}

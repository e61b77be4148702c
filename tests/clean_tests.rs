use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use vibestats::core::CleanLogic;
use vibestats::core::clean::ColumnKind;
use vibestats::errors::AppError;
use vibestats::models::{CleanStats, DataTable};
use vibestats::utils::fs_utils::confirm_overwrite;

mod common;
use common::{csvclean, temp_out, write_temp};

const DIRTY: &str = "name,age,city\nAnn,30,Rome\nAnn,30,Rome\nBob,,Milan\n,40,\n";

fn table(headers: &[&str], rows: &[&[&str]]) -> DataTable {
    let mut t = DataTable::new(headers.iter().map(|h| h.to_string()).collect());
    for r in rows {
        t.add_row(r.iter().map(|c| c.to_string()).collect());
    }
    t
}

#[test]
fn test_dedup_keeps_first_occurrence() {
    let t = table(
        &["a", "b"],
        &[&["1", "x"], &["2", "y"], &["1", "x"], &["1", "z"]],
    );

    let deduped = CleanLogic::dedup(&t);
    assert_eq!(
        deduped.rows,
        vec![
            vec!["1".to_string(), "x".to_string()],
            vec!["2".to_string(), "y".to_string()],
            vec!["1".to_string(), "z".to_string()],
        ]
    );
}

#[test]
fn test_classify_columns() {
    assert_eq!(
        CleanLogic::classify(["1", "", "2.5"].into_iter()),
        ColumnKind::Numeric(1.75)
    );
    assert_eq!(
        CleanLogic::classify(["1", "two"].into_iter()),
        ColumnKind::Text
    );
    assert_eq!(CleanLogic::classify(["", ""].into_iter()), ColumnKind::Empty);
}

#[test]
fn test_clean_fills_text_and_numeric_cells() {
    let t = table(
        &["name", "age", "notes"],
        &[
            &["Ann", "30", ""],
            &["Ann", "30", ""],
            &["Bob", "", ""],
            &["", "40", ""],
        ],
    );

    let (cleaned, stats) = CleanLogic::clean(&t, "unknown");

    assert_eq!(
        stats,
        CleanStats {
            rows_read: 4,
            duplicates_removed: 1,
            cells_filled: 2,
        }
    );
    assert_eq!(cleaned.rows.len(), 3);
    assert_eq!(cleaned.rows[1][1], "35.0");
    assert_eq!(cleaned.rows[2][0], "unknown");
    // all-empty column has nothing to fill with
    assert!(cleaned.column(2).all(str::is_empty));
}

#[test]
fn test_cli_writes_cleaned_file() {
    let input = write_temp("clean_cli_input", "csv", DIRTY);
    let output = temp_out("clean_cli_output", "csv");

    csvclean("clean_cli")
        .args([input.as_str(), "--output", &output])
        .assert()
        .success()
        .stdout(contains("Loaded 4 rows"))
        .stdout(contains("1 duplicate rows removed"))
        .stdout(contains("3 empty cells filled"));

    let content = fs::read_to_string(&output).expect("read cleaned csv");
    assert_eq!(
        content,
        "name,age,city\nAnn,30,Rome\nBob,35.0,Milan\nunknown,40,unknown\n"
    );
}

#[test]
fn test_cli_custom_fill_text() {
    let input = write_temp("clean_cli_fill_input", "csv", DIRTY);
    let output = temp_out("clean_cli_fill_output", "csv");

    csvclean("clean_cli_fill")
        .args([input.as_str(), "-o", &output, "--fill", "n/a"])
        .assert()
        .success();

    let content = fs::read_to_string(&output).expect("read cleaned csv");
    assert!(content.contains("n/a,40,n/a"));
    assert!(!content.contains("unknown"));
}

#[test]
fn test_cli_refuses_to_overwrite_without_force() {
    let input = write_temp("clean_cli_guard_input", "csv", DIRTY);
    let output = write_temp("clean_cli_guard_output", "csv", "keep me\n");

    csvclean("clean_cli_guard")
        .args([input.as_str(), "--output", &output])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("already exists"))
        .stderr(contains("Cleaning cancelled"));

    assert_eq!(fs::read_to_string(&output).expect("read"), "keep me\n");

    csvclean("clean_cli_guard")
        .args([input.as_str(), "--output", &output, "--force"])
        .assert()
        .success()
        .stdout(contains("Cleaned data written"));

    assert!(fs::read_to_string(&output).expect("read").starts_with("name,age,city"));
}

#[test]
fn test_cli_missing_input() {
    let output = temp_out("clean_cli_missing_output", "csv");

    csvclean("clean_cli_missing")
        .args(["/definitely/not/here/data.csv", "--output", &output])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("not found"));

    assert!(!Path::new(&output).exists());
}

#[test]
fn test_cli_missing_input_fails_before_overwrite_prompt() {
    let output = write_temp("clean_cli_prompt_order_output", "csv", "keep me\n");

    csvclean("clean_cli_prompt_order")
        .args(["/definitely/not/here/data.csv", "--output", &output])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Input file not found"))
        .stderr(contains("already exists").not())
        .stdout(contains("[y/N]").not());

    assert_eq!(fs::read_to_string(&output).expect("read"), "keep me\n");
}

#[test]
fn test_cli_ragged_input_is_padded() {
    let input = write_temp("clean_cli_ragged_input", "csv", "a,b,c\n1,x\n2,y,z,extra\n");
    let output = temp_out("clean_cli_ragged_output", "csv");

    csvclean("clean_cli_ragged")
        .args([input.as_str(), "--output", &output])
        .assert()
        .success();

    let content = fs::read_to_string(&output).expect("read cleaned csv");
    assert_eq!(content, "a,b,c\n1,x,unknown\n2,y,z\n");
}

#[test]
fn test_confirm_overwrite_answers() {
    let existing = write_temp("confirm_overwrite_existing", "csv", "x\n");
    let missing = temp_out("confirm_overwrite_missing", "csv");

    // nothing to ask about
    confirm_overwrite(Path::new(&missing), false, &mut Cursor::new("")).expect("missing file");
    confirm_overwrite(Path::new(&existing), true, &mut Cursor::new("")).expect("forced");

    confirm_overwrite(Path::new(&existing), false, &mut Cursor::new("y\n")).expect("y");
    confirm_overwrite(Path::new(&existing), false, &mut Cursor::new("YES\n")).expect("YES");

    for answer in ["", "n\n", "nope\n"] {
        let err = confirm_overwrite(Path::new(&existing), false, &mut Cursor::new(answer))
            .unwrap_err();
        assert!(matches!(err, AppError::Cancelled(_)));
    }
}

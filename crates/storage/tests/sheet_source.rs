use std::io::Write;

use flashcards_core::model::{CardKind, Difficulty};
use storage::{DeckSource, LoadError, SpreadsheetSource};

fn write_deck(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create deck file");
    file.write_all(contents.as_bytes()).expect("write deck file");
    path
}

#[test]
fn loads_csv_file_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_deck(
        &dir,
        "flashcards.csv",
        "Chapter,Type,Difficulty,Question,Answer\n\
         1,Concept,Easy,What is X?,X is Y\n\
         2,Derivation,Advanced,Derive Z,Z=...\n\
         1,Concept,Intermediate,What is W?,W is V\n",
    );

    let deck = SpreadsheetSource::new(&path).load().expect("load deck");

    assert_eq!(deck.len(), 3);
    let chapters: Vec<String> = deck.chapters().iter().map(ToString::to_string).collect();
    assert_eq!(chapters, vec!["1", "2"]);
    assert_eq!(deck.cards()[1].kind(), CardKind::Derivation);
}

#[test]
fn loads_tab_separated_export() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_deck(
        &dir,
        "flashcards.tsv",
        "Chapter\tType\tDifficulty\tQuestion\tAnswer\n\
         7\tConcept\tAdvanced\tWhy, though?\tBecause, that's why\n",
    );

    let deck = SpreadsheetSource::new(&path).load().expect("load deck");

    assert_eq!(deck.len(), 1);
    let card = &deck.cards()[0];
    assert_eq!(card.difficulty(), Difficulty::Advanced);
    assert_eq!(card.question(), "Why, though?");
}

#[test]
fn missing_file_is_a_load_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nope.csv");

    let err = SpreadsheetSource::new(&path).load().unwrap_err();

    assert!(matches!(err, LoadError::Missing { .. }), "{err:?}");
    assert!(err.to_string().contains("nope.csv"));
}

#[test]
fn directory_is_unreadable() {
    let dir = tempfile::tempdir().expect("tempdir");

    let err = SpreadsheetSource::new(dir.path()).load().unwrap_err();

    match err {
        LoadError::Unreadable { path, .. } => assert_eq!(path, dir.path()),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn directory_with_workbook_extension_is_unreadable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("flashcards.xlsx");
    std::fs::create_dir(&path).expect("create dir");

    let err = SpreadsheetSource::new(&path).load().unwrap_err();

    assert!(matches!(err, LoadError::Unreadable { .. }), "{err:?}");
}

#[test]
fn loads_xlsx_workbook_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("flashcards.xlsx");

    let mut book = rust_xlsxwriter::Workbook::new();
    let sheet = book.add_worksheet();
    for (col, header) in ["Chapter", "Type", "Difficulty", "Question", "Answer"]
        .into_iter()
        .enumerate()
    {
        let col = u16::try_from(col).expect("column index");
        sheet.write_string(0, col, header).expect("write header");
    }
    let rows = [
        (1.0, "Concept", "Easy", "What is X?", "X is Y"),
        (2.0, "Derivation", "Advanced", "Derive Z", "Z=..."),
        (1.0, "Concept", "Intermediate", "What is W?", "W is V"),
    ];
    for (row, (chapter, kind, difficulty, question, answer)) in (1u32..).zip(rows) {
        sheet.write_number(row, 0, chapter).expect("write chapter");
        sheet.write_string(row, 1, kind).expect("write type");
        sheet.write_string(row, 2, difficulty).expect("write difficulty");
        sheet.write_string(row, 3, question).expect("write question");
        sheet.write_string(row, 4, answer).expect("write answer");
    }
    book.save(&path).expect("save workbook");

    let deck = SpreadsheetSource::new(&path).load().expect("load deck");

    assert_eq!(deck.len(), 3);
    let chapters: Vec<String> = deck.chapters().iter().map(ToString::to_string).collect();
    assert_eq!(chapters, vec!["1", "2"]);
    assert_eq!(deck.cards()[1].difficulty(), Difficulty::Advanced);
    assert_eq!(deck.cards()[2].question(), "What is W?");
}

#[test]
fn schema_without_answer_column_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_deck(
        &dir,
        "flashcards.csv",
        "Chapter,Type,Difficulty,Question\n1,Concept,Easy,Q\n",
    );

    let err = SpreadsheetSource::new(&path).load().unwrap_err();

    match err {
        LoadError::MissingColumns { columns } => assert_eq!(columns, vec!["Answer"]),
        other => panic!("unexpected error: {other:?}"),
    }
}

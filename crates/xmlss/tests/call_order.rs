//! Tests for call-order enforcement through the public generator API

use xmlss::prelude::*;

fn started() -> DocumentGenerator<Vec<u8>> {
    let mut doc = DocumentGenerator::new(Vec::new());
    doc.start_document().unwrap();
    doc
}

/// Test every pair of states against the transition graph
#[test]
fn test_transition_graph() {
    use GeneratorState::*;

    let edges = [
        (Initialization, CleanDocument),
        (CleanDocument, WritingSheet),
        (CleanDocument, Done),
        (WritingSheet, WritingColumns),
        (WritingSheet, WritingSheetRows),
        (WritingColumns, WritingSheet),
        (WritingSheetRows, WritingRow),
        (WritingSheetRows, CleanDocument),
        (WritingRow, WritingSheetRows),
        (WritingRow, WritingCell),
        (WritingCell, WritingRow),
    ];

    for from in GeneratorState::ALL {
        for to in GeneratorState::ALL {
            let result = from.transition(to);
            if edges.contains(&(from, to)) {
                assert_eq!(result.unwrap(), to, "{} -> {} should succeed", from, to);
            } else {
                let err = result.unwrap_err();
                assert!(err.is_invalid_transition(), "{} -> {} should fail", from, to);
            }
        }
    }
}

type Operation = fn(&mut DocumentGenerator<Vec<u8>>) -> Result<()>;

/// Generator resting in `state`, reached through the public API
fn positioned(state: GeneratorState) -> DocumentGenerator<Vec<u8>> {
    use GeneratorState::*;

    let mut doc = DocumentGenerator::new(Vec::new());
    if state == Initialization {
        return doc;
    }
    doc.start_document().unwrap();
    match state {
        CleanDocument => {}
        Done => doc.close().unwrap(),
        _ => {
            doc.start_sheet("S", false).unwrap();
            match state {
                WritingSheet => {}
                WritingColumns => doc.start_columns().unwrap(),
                WritingRow => doc.start_row(&RowOptions::new()).unwrap(),
                WritingSheetRows => {
                    doc.start_row(&RowOptions::new()).unwrap();
                    doc.close_row().unwrap();
                }
                other => panic!("{} is not a resting state", other),
            }
        }
    }
    assert_eq!(doc.state(), state);
    doc
}

/// Test every public operation from every state a caller can stop in
///
/// `WritingCell` is left out: no call returns with the generator there.
#[test]
fn test_operations_by_state() {
    use GeneratorState::*;

    let operations: [(&str, Operation, &[GeneratorState]); 13] = [
        (
            "create_style",
            |doc| doc.create_style(None, None).map(|_| ()),
            &[Initialization],
        ),
        ("start_document", |doc| doc.start_document(), &[Initialization]),
        ("start_sheet", |doc| doc.start_sheet("S", false), &[CleanDocument]),
        ("start_columns", |doc| doc.start_columns(), &[WritingSheet]),
        (
            "column",
            |doc| doc.column(&ColumnOptions::new()),
            &[WritingColumns],
        ),
        ("close_columns", |doc| doc.close_columns(), &[WritingColumns]),
        (
            "start_row",
            |doc| doc.start_row(&RowOptions::new()),
            &[WritingSheet, WritingSheetRows],
        ),
        ("write_cell", |doc| doc.write_cell(None, "x"), &[WritingRow]),
        ("write_empty_cell", |doc| doc.write_empty_cell(None), &[WritingRow]),
        ("close_row", |doc| doc.close_row(), &[WritingRow]),
        (
            "write_empty_rows",
            |doc| doc.write_empty_rows(Some(1), &RowOptions::new()),
            &[WritingSheet, WritingSheetRows],
        ),
        (
            "close_sheet",
            |doc| doc.close_sheet(),
            &[WritingSheet, WritingSheetRows],
        ),
        ("close", |doc| doc.close(), &[CleanDocument, Done]),
    ];

    let states = [
        Initialization,
        CleanDocument,
        WritingSheet,
        WritingColumns,
        WritingSheetRows,
        WritingRow,
        Done,
    ];

    for state in states {
        for (name, operation, allowed) in &operations {
            let mut doc = positioned(state);
            let result = operation(&mut doc);
            if allowed.contains(&state) {
                assert!(result.is_ok(), "{} from {} should succeed", name, state);
            } else {
                let err = result.unwrap_err();
                assert!(
                    err.is_invalid_transition(),
                    "{} from {} should be rejected by the call order: {}",
                    name,
                    state,
                    err
                );
                assert_eq!(doc.state(), state, "{} from {} moved the state", name, state);
            }
        }
    }
}

/// Test that the error message names both states and the legal next ones
#[test]
fn test_error_message() {
    let mut doc = started();
    let err = doc.write_cell(None, "x").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid transition from CleanDocument to WritingCell \
         (allowed next states: WritingSheet, Done)"
    );

    doc.close().unwrap();
    let err = doc.start_sheet("S", false).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid transition from Done to WritingSheet (allowed next states: none)"
    );
}

/// Test that a rejected call leaves the generator where it was
#[test]
fn test_failed_call_keeps_state() {
    let mut doc = started();
    doc.start_sheet("S", false).unwrap();
    doc.start_row(&RowOptions::new()).unwrap();

    assert!(doc.close_sheet().is_err());
    assert_eq!(doc.state(), GeneratorState::WritingRow);
    assert!(doc.start_row(&RowOptions::new()).is_err());
    assert_eq!(doc.state(), GeneratorState::WritingRow);
}

/// Test that styles can only be created before the document starts
#[test]
fn test_style_creation_window() {
    let mut doc = DocumentGenerator::new(Vec::new());
    assert!(doc.create_style(None, None).is_ok());
    doc.start_document().unwrap();
    let err = doc.create_style(None, None).unwrap_err();
    assert!(err.is_invalid_transition());
}

/// Test that the document cannot be started twice
#[test]
fn test_start_document_twice() {
    let mut doc = started();
    assert!(doc.start_document().unwrap_err().is_invalid_transition());
}

/// Test that columns must come before rows and inside their section
#[test]
fn test_column_section_order() {
    let mut doc = started();
    doc.start_sheet("S", false).unwrap();
    doc.start_columns().unwrap();
    assert!(doc.start_row(&RowOptions::new()).is_err());
    assert!(doc.close_sheet().is_err());
    doc.close_columns().unwrap();
    assert_eq!(doc.state(), GeneratorState::WritingSheet);
    doc.start_row(&RowOptions::new()).unwrap();
    doc.close_row().unwrap();
    assert!(doc.start_columns().is_err());
}

/// Test the overlap rule for explicitly indexed columns
#[test]
fn test_column_overlap() {
    let mut doc = started();
    doc.start_sheet("S", false).unwrap();
    doc.start_columns().unwrap();
    doc.column(&ColumnOptions::at(2)).unwrap();
    let err = doc.column(&ColumnOptions::at(2).with_span(4)).unwrap_err();
    assert!(err.is_validation());
}

/// Test closing rules at the end of a document
#[test]
fn test_close() {
    let mut doc = started();
    doc.start_sheet("S", false).unwrap();
    assert!(doc.close().is_err());
    doc.close_sheet().unwrap();

    doc.close().unwrap();
    assert_eq!(doc.state(), GeneratorState::Done);
    // second close is a no-op
    doc.close().unwrap();

    assert!(doc.write_cell(None, 1.0).unwrap_err().is_invalid_transition());
    assert!(doc.write_empty_cell(None).unwrap_err().is_invalid_transition());
    assert!(doc.close_row().unwrap_err().is_invalid_transition());
}

/// Test that a multi-byte output encoding is rejected up front
#[test]
fn test_multi_byte_encoding() {
    let options = GeneratorOptions::default().with_encoding(encoding_rs::UTF_8);
    let err = DocumentGenerator::with_options(Vec::new(), options).unwrap_err();
    assert!(err.is_validation());
}

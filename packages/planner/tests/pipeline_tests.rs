//! Pipeline tests against a full API-shaped snapshot, applied with the
//! in-memory executor

use docbatch_planner::{
    BatchError, BatchExecutor, CellRef, CellWrite, CellWriteBatch, EditOperation, ExecutorError,
    Pipeline, PlanError, PrimitiveOp, Snapshot, Span, TargetRequest, TextExecutor,
};

const REPORT: &str = include_str!("../../document/tests/fixtures/report.json");

fn snapshot() -> Snapshot {
    Snapshot::from_json(REPORT).unwrap()
}

fn apply(requests: &[TargetRequest]) -> String {
    let snapshot = snapshot();
    let pipeline = Pipeline::new(&snapshot).unwrap();
    let mut executor = TextExecutor::new(&snapshot.render_text());
    pipeline.submit(&mut executor, requests).unwrap();
    executor.into_text()
}

fn replace_cell(row: usize, column: usize, text: &str) -> TargetRequest {
    TargetRequest::cell(CellRef::new(32, row, column), EditOperation::Replace(text.to_string()))
}

/// Records every batch it is handed
#[derive(Default)]
struct Recorder {
    batches: Vec<Vec<PrimitiveOp>>,
}

impl BatchExecutor for Recorder {
    fn execute(&mut self, ops: &[PrimitiveOp]) -> Result<(), ExecutorError> {
        self.batches.push(ops.to_vec());
        Ok(())
    }
}

struct Rejecting;

impl BatchExecutor for Rejecting {
    fn execute(&mut self, _ops: &[PrimitiveOp]) -> Result<(), ExecutorError> {
        Err(ExecutorError::new(
            "Invalid requests[0].insertText: Index 99 must be less than the end index",
        ))
    }
}

#[test]
fn test_fixture_renders_at_offsets() {
    assert_eq!(
        snapshot().render_text(),
        " Quarterly report\nSummary below\n   Region\n Amount\n  East\n \n  West\n \nNotes\n"
    );
}

#[test]
fn test_cell_writes_land_in_their_cells() {
    let text = apply(&[
        replace_cell(0, 0, "Area"),
        replace_cell(1, 1, "120"),
        replace_cell(2, 1, "95"),
    ]);
    assert_eq!(
        text,
        " Quarterly report\nSummary below\n   Area\n Amount\n  East\n 120\n  West\n 95\nNotes\n"
    );
}

#[test]
fn test_result_independent_of_request_order() {
    let requests = vec![
        replace_cell(0, 0, "Area"),
        replace_cell(0, 1, "Total amount"),
        replace_cell(1, 1, "120"),
        replace_cell(2, 0, ""),
        TargetRequest::range(
            Span::new(1, 18).unwrap(),
            EditOperation::Replace("Annual report".into()),
        ),
        TargetRequest::append("\nAppendix"),
    ];
    let expected = apply(&requests);

    let mut reversed = requests.clone();
    reversed.reverse();
    assert_eq!(apply(&reversed), expected);

    for shift in 1..requests.len() {
        let mut rotated = requests.clone();
        rotated.rotate_left(shift);
        assert_eq!(apply(&rotated), expected, "rotation {}", shift);
    }

    assert_eq!(
        expected,
        " Annual report\nSummary below\n   Area\n Total amount\n  East\n 120\n  \n \nNotes\nAppendix\n"
    );
}

#[test]
fn test_delete_keeps_paragraph_terminator() {
    let text = apply(&[TargetRequest::range(
        Span::new(18, 32).unwrap(),
        EditOperation::Delete,
    )]);
    assert_eq!(
        text,
        " Quarterly report\n\n   Region\n Amount\n  East\n \n  West\n \nNotes\n"
    );
}

#[test]
fn test_bulk_write_insert_mode() {
    let pipeline = Pipeline::new(&snapshot()).unwrap();
    let batch = CellWriteBatch {
        table_start_index: 32,
        cells: vec![
            CellWrite {
                row: 0,
                column: 0,
                text: "Sales ".into(),
            },
            CellWrite {
                row: 2,
                column: 0,
                text: "North".into(),
            },
        ],
        replace_existing: Some(false),
    };
    let plan = pipeline.write_cells(&batch, true).unwrap();
    assert_eq!(
        plan.ops,
        vec![
            PrimitiveOp::InsertAt {
                position: 61,
                text: "North".into()
            },
            PrimitiveOp::InsertAt {
                position: 35,
                text: "Sales ".into()
            },
        ]
    );
}

#[test]
fn test_missing_cell_submits_nothing() {
    let pipeline = Pipeline::new(&snapshot()).unwrap();
    let mut recorder = Recorder::default();
    let result = pipeline.submit(
        &mut recorder,
        &[replace_cell(0, 0, "Area"), replace_cell(3, 0, "overflow")],
    );
    assert!(matches!(result, Err(BatchError::Resolve(_))));
    assert!(recorder.batches.is_empty());
}

#[test]
fn test_overlapping_requests_rejected() {
    let pipeline = Pipeline::new(&snapshot()).unwrap();
    let result = pipeline.plan(&[
        replace_cell(0, 0, "Area"),
        TargetRequest::range(Span::new(40, 45).unwrap(), EditOperation::Delete),
    ]);
    match result {
        Err(BatchError::Plan(PlanError::Overlap(a, b))) => {
            assert_eq!(a, Span::new(35, 42).unwrap());
            assert_eq!(b, Span::new(40, 45).unwrap());
        }
        other => panic!("Expected overlap, got {:?}", other),
    }
}

#[test]
fn test_two_writes_to_one_cell_rejected() {
    let pipeline = Pipeline::new(&snapshot()).unwrap();
    let result = pipeline.plan(&[replace_cell(1, 0, "a"), replace_cell(1, 0, "b")]);
    assert!(matches!(
        result,
        Err(BatchError::Plan(PlanError::DuplicateStart(52)))
    ));
}

#[test]
fn test_whole_batch_submitted_once() {
    let pipeline = Pipeline::new(&snapshot()).unwrap();
    let mut recorder = Recorder::default();
    let plan = pipeline
        .submit(&mut recorder, &[replace_cell(0, 1, "x"), replace_cell(1, 0, "y")])
        .unwrap();
    assert_eq!(recorder.batches, vec![plan.ops.clone()]);
    assert_eq!(plan.to_requests().len(), 4);
}

#[test]
fn test_executor_error_passed_through() {
    let pipeline = Pipeline::new(&snapshot()).unwrap();
    let err = pipeline
        .submit(&mut Rejecting, &[replace_cell(0, 0, "Area")])
        .unwrap_err();
    match err {
        BatchError::ExternalApi(message) => assert_eq!(
            message,
            "Invalid requests[0].insertText: Index 99 must be less than the end index"
        ),
        other => panic!("Expected external API error, got {:?}", other),
    }
}

use super::common::*;
use crate::screening::batch::{read_submissions, score_batch, BatchError};
use crate::screening::intake::IntakeError;

const SAMPLE: &str = "\
submission_id,q1,q2,q13,q16,q99
alpha,3,2,,,
beta,,,3,3,1
gamma,,,,,
";

#[test]
fn reads_rows_and_treats_blanks_as_unanswered() {
    let submissions = read_submissions(SAMPLE.as_bytes(), &intake()).expect("valid csv");

    assert_eq!(submissions.len(), 3);
    assert_eq!(submissions[0].submission_id, "alpha");
    assert_eq!(submissions[0].answers, answers(&[(1, 3), (2, 2)]));
    assert_eq!(submissions[1].answers, answers(&[(13, 3), (16, 3)]));
    assert!(submissions[2].answers.is_empty());
}

#[test]
fn scores_each_row_and_summarises() {
    let submissions = read_submissions(SAMPLE.as_bytes(), &intake()).expect("valid csv");

    let report = score_batch(&engine(), &submissions);

    assert_eq!(report.submissions.len(), 3);
    assert_eq!(report.submissions[1].submission_id, "beta");
    assert_close(report.submissions[0].result.total_score, 9.257081740275565);
    assert_close(report.submissions[1].result.total_score, 2.6138285914867083);
    assert_eq!(report.submissions[2].result.total_score, 0.0);
    assert_eq!(report.summary.count, 3);
    assert_close(
        report.summary.average.total_score,
        (9.257081740275565 + 2.6138285914867083) / 3.0,
    );
}

#[test]
fn header_must_lead_with_submission_id() {
    let err = read_submissions("q1,q2\n3,3\n".as_bytes(), &intake()).expect_err("bad header");
    assert!(matches!(err, BatchError::MissingIdColumn));
}

#[test]
fn rejects_unrecognised_columns() {
    let err = read_submissions("submission_id,cough\na,3\n".as_bytes(), &intake())
        .expect_err("bad column");
    assert!(matches!(err, BatchError::InvalidColumn(ref column) if column == "cough"));
}

#[test]
fn reports_row_of_non_numeric_cell() {
    let csv = "submission_id,q1\na,3\nb,yes\n";
    let err = read_submissions(csv.as_bytes(), &intake()).expect_err("non numeric");
    match err {
        BatchError::InvalidCell { row, column, raw } => {
            assert_eq!(row, 2);
            assert_eq!(column, "q1");
            assert_eq!(raw, "yes");
        }
        other => panic!("expected invalid cell, got {other:?}"),
    }
}

#[test]
fn reports_row_of_out_of_range_answer() {
    let csv = "submission_id,q5\na,7\n";
    let err = read_submissions(csv.as_bytes(), &intake()).expect_err("out of range");
    match err {
        BatchError::Intake {
            row,
            source: IntakeError::OutOfRange { value, .. },
        } => {
            assert_eq!(row, 1);
            assert_eq!(value, 7);
        }
        other => panic!("expected intake failure, got {other:?}"),
    }
}

#[test]
fn rejects_header_that_repeats_a_question() {
    let err = read_submissions("submission_id,q1,q1\na,3,0\n".as_bytes(), &intake())
        .expect_err("q1 appears twice");
    assert!(matches!(err, BatchError::DuplicateColumn(ref column) if column == "q1"));

    let err = read_submissions("submission_id,q2,Q2\na,3,0\n".as_bytes(), &intake())
        .expect_err("case does not make a new question");
    assert!(matches!(err, BatchError::DuplicateColumn(ref column) if column == "Q2"));
}

//! Integration tests driving the parser API over realistic user files

use sansuf::model::{
    ComplexRange, DetectorType, FitFunction, Key, MaskBlock, RangeEntry, SimpleRange,
    StepType, TransFitEntry, Value,
};
use sansuf::{parse_content, parse_line, ParseError};

const SANS2D_USER_FILE: &str = r#"! SANS2D reduction user file
SANS2D

MASKFILE=MaskSANS2DOptions.091A
SET SCALES 0.074 1.0 1.0 1.0 1.0
SET CENTRE 155.45 -169.6
DET/REAR
GRAVITY/ON
L/WAV 1.75 16.5 0.125/LIN
L/Q 0.001,0.001,0.0126,0.08,0.2/LOG
L/QXY 0 0.05 0.001/LIN
L/PHI/NOMIRROR 0 90
BACK/MON/TIMES 85000 98000
MON/DIRECT=DIRECTM1_15785_12m_31Oct12_v12.dat
MON/TRANS/SPECTRUM=1/INTERPOLATE
FIT/TRANS/LOG 1.75 16.5
MASK/CLEAR
MASK/CLEAR/TIME
MASK/REAR H0>H5+V0>V10
MASK S42
TRANS/TRANSPEC=4/SHIFT=-70
QRESOL/ON
QRESOL/DELTAR=11
TUBECALIBFILE=TUBE_SANS2D_BOTH_31681_25Sept15.nxs
SAMPLE/OFFSET 53
PRINT Reduction settings loaded
"#;

#[test]
fn test_full_user_file_parses_clean() {
    let settings = parse_content(SANS2D_USER_FILE);
    assert!(
        settings.is_clean(),
        "unexpected errors: {:?}",
        settings.errors
    );

    // 21 one-setting lines, plus two settings each from FIT/TRANS/LOG and
    // TRANS/TRANSPEC=4/SHIFT=-70; SANS2D, comments, and blanks emit none.
    assert_eq!(settings.records.len(), 25);
}

#[test]
fn test_full_user_file_representative_values() {
    let settings = parse_content(SANS2D_USER_FILE);

    let q = &settings.get_all(Key::LimitsQ)[0].value;
    assert_eq!(
        *q,
        Value::ComplexRange(ComplexRange {
            start: 0.001,
            step1: 0.001,
            mid: 0.0126,
            step2: 0.08,
            stop: 0.2,
            step_type: StepType::Log,
        })
    );

    let wav = &settings.get_all(Key::LimitsWavelength)[0].value;
    assert_eq!(
        *wav,
        Value::SimpleRange(SimpleRange {
            start: 1.75,
            stop: 16.5,
            step: Some(0.125),
            step_type: Some(StepType::Lin),
        })
    );

    let block = &settings.get_all(Key::MaskBlock)[0].value;
    assert_eq!(
        *block,
        Value::Block(MaskBlock {
            horizontal1: 0.0,
            horizontal2: 5.0,
            vertical1: 0.0,
            vertical2: 10.0,
            detector: DetectorType::Lab,
        })
    );

    // The direct file keeps its mixed casing.
    match &settings.get_all(Key::MonDirect)[0].value {
        Value::MonitorFile(entry) => {
            assert_eq!(entry.file_path, "DIRECTM1_15785_12m_31Oct12_v12.dat");
            assert_eq!(entry.detector, DetectorType::Lab);
        }
        other => panic!("Expected MonitorFile, got {:?}", other),
    }
}

#[test]
fn test_fit_line_sets_sample_and_can() {
    let settings = parse_content(SANS2D_USER_FILE);
    let expected = Value::TransFit(TransFitEntry {
        function: FitFunction::Log,
        start: Some(1.75),
        stop: Some(16.5),
    });
    assert_eq!(settings.get_all(Key::FitSample)[0].value, expected);
    assert_eq!(settings.get_all(Key::FitCan)[0].value, expected);
}

#[test]
fn test_trans_shift_line_sets_two_keys() {
    let settings = parse_content(SANS2D_USER_FILE);
    assert_eq!(settings.get_all(Key::TransSpectrum)[0].value, Value::Int(4));
    assert_eq!(
        settings.get_all(Key::TransSpectrumShift)[0].value,
        Value::Float(-70.0)
    );
}

#[test]
fn test_malformed_lines_are_isolated() {
    let content = "GRAVITY/ON\nL/Q 0.1,0.01\nMASK H0>H5+V10\nSAMPLE/OFFSET 120\n";
    let settings = parse_content(content);

    assert_eq!(settings.records.len(), 2);
    assert_eq!(settings.errors.len(), 2);

    assert!(matches!(
        settings.errors[0].error,
        ParseError::Arity {
            expected: 5,
            actual: 2
        }
    ));
    assert!(matches!(
        settings.errors[1].error,
        ParseError::UnknownSubcommand {
            command: "MASK",
            ..
        }
    ));
    // The raw line text survives for the error report.
    assert_eq!(settings.errors[1].raw_line, "MASK H0>H5+V10");
}

#[test]
fn test_case_insensitive_keywords_identical_settings() {
    let lower = parse_line("back/mon/times 1000 2000").unwrap();
    let upper = parse_line("BACK/MON/TIMES 1000 2000").unwrap();
    assert_eq!(lower, upper);
}

#[test]
fn test_mask_file_case_preserved_through_file_parse() {
    let settings = parse_content("TRANS/MASK=MyMask.xml\n");
    assert_eq!(
        settings.get_all(Key::TransMask)[0].value,
        Value::TextList(vec!["MyMask.xml".to_string()])
    );
}

#[test]
fn test_rescale_fit_optional_bounds_stay_open() {
    let settings = parse_line("DET/RESCALE/FIT").unwrap();
    assert_eq!(
        settings[&Key::DetRescaleFit],
        Value::Range(RangeEntry {
            start: None,
            stop: None
        })
    );
}

#[test]
fn test_unknown_command_reports_whole_line() {
    match parse_line("BOGUS/THING 1 2") {
        Err(ParseError::UnknownCommand { line }) => assert_eq!(line, "BOGUS/THING 1 2"),
        other => panic!("Expected UnknownCommand, got {:?}", other),
    }
}

#[test]
fn test_comment_and_blank_lines_produce_nothing() {
    assert!(parse_line("").unwrap().is_empty());
    assert!(parse_line("! a comment").unwrap().is_empty());

    let settings = parse_content("! only a comment\n\n");
    assert!(settings.records.is_empty());
    assert!(settings.is_clean());
}

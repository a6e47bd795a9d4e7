use loglook_core::{FileSource, LogSource, write_report};
use loglook_parser::PatternParser;
use std::io::Write;

#[test]
fn test_report_over_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "[2024-01-02 10:00:00] ERROR: disk full\nno brackets here\n\n"
    )
    .unwrap();
    file.flush().unwrap();

    let source = FileSource::open(file.path()).unwrap();
    let parser = PatternParser::new();
    let mut out = Vec::new();
    write_report(&source, &parser, &mut out).unwrap();
    source.close().unwrap();

    let report = String::from_utf8(out).unwrap();
    let expected = "Log Entry: [2024-01-02 10:00:00] ERROR: disk full\n\
                    Date: 2024-01-02 10:00:00, Level: ERROR\n\
                    \n\
                    -----------\n\
                    Log Entry: no brackets here\n\
                    Date: , Level: \n\
                    \n\
                    -----------\n\
                    Log Entry: \n\
                    Date: , Level: \n\
                    \n\
                    -----------\n";
    assert_eq!(report, expected);
}

#[test]
fn test_block_count_matches_line_count() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "INFO: starting up\n\n[2024-03-04 05:06:07] shutdown\nplain\n"
    )
    .unwrap();
    file.flush().unwrap();

    let source = FileSource::open(file.path()).unwrap();
    let mut out = Vec::new();
    write_report(&source, &PatternParser::new(), &mut out).unwrap();

    let report = String::from_utf8(out).unwrap();
    assert_eq!(report.matches("-----------\n").count(), 4);
    assert_eq!(report.matches("Log Entry: ").count(), 4);
}

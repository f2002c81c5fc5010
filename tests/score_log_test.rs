//! Score log persistence

use std::fs;
use std::path::PathBuf;

use block_blast::score_log::ScoreLog;

fn temp_log(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "block-blast-{}-{}.txt",
        name,
        std::process::id()
    ));
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn test_missing_file_is_empty_log() {
    let path = temp_log("missing");
    let log = ScoreLog::new(&path);
    assert_eq!(log.read_all().unwrap(), Vec::<u32>::new());
    assert_eq!(log.best().unwrap(), None);
}

#[test]
fn test_append_and_read_back_in_order() {
    let path = temp_log("append");
    let log = ScoreLog::new(&path);

    for score in [12, 340, 7] {
        log.append(score).unwrap();
    }
    assert_eq!(log.read_all().unwrap(), vec![12, 340, 7]);
    assert_eq!(log.best().unwrap(), Some(340));

    let _ = fs::remove_file(&path);
}

#[test]
fn test_malformed_lines_are_skipped() {
    let path = temp_log("malformed");
    fs::write(&path, "10\nnot a score\n\n  25  \n-3\n").unwrap();

    let log = ScoreLog::new(&path);
    assert_eq!(log.read_all().unwrap(), vec![10, 25]);

    log.append(5).unwrap();
    assert_eq!(log.read_all().unwrap(), vec![10, 25, 5]);
    assert_eq!(log.best().unwrap(), Some(25));

    let _ = fs::remove_file(&path);
}

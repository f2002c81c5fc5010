//! Drives the line-oriented runner with scripted input

use std::fs;
use std::io::Cursor;

use block_blast::config::GameConfig;
use block_blast::core::Generator;
use block_blast::runner::Runner;
use block_blast::score_log::ScoreLog;

fn config(json: bool) -> GameConfig {
    GameConfig {
        grid_size: 8,
        seed: 4242,
        generator: Generator::Catalog,
        score_log_path: None,
        json,
        ..GameConfig::default()
    }
}

fn run(json: bool, script: &str) -> (Runner, String) {
    let mut runner = Runner::new(&config(json));
    let mut out = Vec::new();
    runner.run(Cursor::new(script), &mut out).unwrap();
    (runner, String::from_utf8(out).unwrap())
}

#[test]
fn test_text_mode_reports_errors_and_stops_at_quit() {
    let (runner, out) = run(
        false,
        "help\nplace 9 0 0\nbogus\n\nplace 0 0 0\nquit\nplace 0 4 4\n",
    );

    assert!(out.contains("commands: place"));
    assert!(out.contains("error: piece index 9 out of range (3 pending)"));
    assert!(out.contains("error: unknown command: bogus"));
    // Commands after quit are not read.
    assert_eq!(runner.session().placements(), 1);
    assert!(out.contains(&format!("score: {}", runner.session().current_score())));
}

#[test]
fn test_text_mode_shows_rejection() {
    let (runner, out) = run(false, "place 0 -1 0\n");
    assert!(out.contains("rejected: piece does not fit at the requested origin"));
    assert_eq!(runner.session().placements(), 0);
    assert!(!runner.session().is_over());
}

#[test]
fn test_json_mode_emits_one_message_per_line() {
    let (runner, out) = run(true, "place 0 0 0\nplace 5 0 0\nrestart\n");

    let messages: Vec<serde_json::Value> = out
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(messages.len(), 4);

    assert_eq!(messages[0]["type"], "observation");
    assert_eq!(messages[0]["board"]["size"], 8);
    assert!(messages[0].get("last_outcome").is_none());

    assert_eq!(messages[1]["last_outcome"]["accepted"], true);
    assert_eq!(messages[1]["placements"], 1);

    assert_eq!(messages[2]["type"], "error");
    assert_eq!(messages[2]["code"], "index_out_of_range");

    assert_eq!(messages[3]["episode_id"], 1);
    assert_eq!(messages[3]["score"], 0);

    let seqs: Vec<u64> = messages.iter().map(|m| m["seq"].as_u64().unwrap()).collect();
    assert_eq!(seqs, vec![1, 2, 3, 4]);
    assert_eq!(runner.session().episode_id(), 1);
}

#[test]
fn test_finished_game_is_recorded_once() {
    let path = std::env::temp_dir().join(format!(
        "block-blast-runner-{}.txt",
        std::process::id()
    ));
    let _ = fs::remove_file(&path);

    // Only a single-cell piece fits on a 1x1 board, so the game ends as soon
    // as the pending pieces run out of singles.
    let config = GameConfig {
        grid_size: 1,
        score_log_path: Some(path.clone()),
        ..config(false)
    };
    let script = "place 0 0 0\nplace 1 0 0\nplace 2 0 0\n".repeat(20);

    let mut runner = Runner::new(&config);
    let mut out = Vec::new();
    runner.run(Cursor::new(script), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(runner.session().is_over());
    let score = runner.session().current_score();
    assert_eq!(out.matches("game over, final score:").count(), 1);
    assert!(out.contains(&format!("game over, final score: {}", score)));
    assert!(out.contains(&format!("best score: {}", score)));
    // Places sent after the game ended are refused, not recorded again.
    assert!(out.contains("error: session is over"));

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().collect::<Vec<_>>(), vec![score.to_string()]);
    assert_eq!(ScoreLog::new(&path).best().unwrap(), Some(score));

    let _ = fs::remove_file(&path);
}

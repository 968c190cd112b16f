use super::*;
use std::fs;
use std::io::BufWriter;

#[test]
fn can_write_history_with_header() {
    let history = vec![HistoryEntry { step: 0, best_distance: 12.5 }, HistoryEntry { step: 1, best_distance: 10. }];

    let mut buffer = vec![];
    write_history(&mut buffer, GA_INDEX_LABEL, &history).unwrap();

    let content = String::from_utf8(buffer).unwrap();
    assert_eq!(content.lines().collect::<Vec<_>>(), vec!["Generation,BestDistance", "0,12.5", "1,10"]);
}

#[test]
fn can_write_history_into_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.csv");

    let file = fs::File::create(&path).unwrap();
    write_history(BufWriter::new(file), ACO_INDEX_LABEL, &[HistoryEntry { step: 0, best_distance: 44.25 }]).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "Iteration,BestDistance\n0,44.25\n");
}

#[test]
fn can_write_json_result() {
    let tour = Tour::try_new(vec![0, 1, 2, 3, 4], 5).unwrap();
    let summary = create_engine_summary("ga", 5, 10, Some(&tour), 44.14);

    let mut buffer = vec![];
    write_result(&mut buffer, &summary).unwrap();

    let json: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    assert_eq!(json["algorithm"], "ga");
    assert_eq!(json["cities"], 5);
    assert_eq!(json["steps"], 10);
    assert_eq!(json["best_tour"].as_array().unwrap().len(), 5);
}

use super::*;
use std::sync::{Arc, Mutex};

#[test]
fn can_append_history_per_processed_step_only() {
    let mut telemetry = Telemetry::new(TelemetryMode::None);

    telemetry.on_step(0, 10., true);
    telemetry.on_step(1, 10., false);
    telemetry.on_stagnation(2, 10.);

    assert_eq!(telemetry.history().len(), 2);
    assert_eq!(telemetry.history()[0], HistoryEntry { step: 0, best_distance: 10. });
    assert_eq!(telemetry.history()[1], HistoryEntry { step: 1, best_distance: 10. });
}

#[test]
fn can_write_improvements_and_periodic_state_through_logger() {
    let messages: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(vec![]));
    let captured = messages.clone();
    let logger: InfoLogger = Arc::new(move |msg: &str| captured.lock().unwrap().push(msg.to_string()));

    let mut telemetry = Telemetry::new(TelemetryMode::OnlyLogging { logger, log_best: 100 });

    telemetry.on_step(0, 20., false);
    telemetry.on_step(1, 20., false);
    telemetry.on_step(2, 15., true);

    assert_eq!(messages.lock().unwrap().len(), 2);
}

#[test]
fn can_track_stagnation() {
    let mut stagnation = Stagnation::new(2);

    assert!(!stagnation.is_exceeded());

    stagnation.observe(false);
    assert!(!stagnation.is_exceeded());

    stagnation.observe(false);
    assert!(stagnation.is_exceeded());

    stagnation.observe(true);
    assert!(!stagnation.is_exceeded());
}

#[test]
fn can_handle_zero_patience() {
    let stagnation = Stagnation::new(0);

    assert!(stagnation.is_exceeded());
}

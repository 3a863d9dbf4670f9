//! Integration test: dashboard session end-to-end
//!
//! Upload data, apply a configuration, run the simulated training, then
//! rank features and shape the chart series exactly as the front end does.

use anomaly_insight::prelude::*;
use anomaly_insight::report::{ChartPoint, ConfusionCell};
use std::time::Duration;

const TRAIN_CSV: &[u8] = b"user,operation,table,ip_address,status,hour,day_of_week,label\n\
alice,SELECT,accounts,10.0.0.4,ok,9,1,0\n\
bob,DELETE,audit_log,10.0.0.9,denied,2,6,1\n\
carol,UPDATE,accounts,10.0.0.7,ok,14,3,0\n";

#[tokio::test]
async fn test_dashboard_session() {
    let mut state = DashboardState::new();

    // Upload
    let dataset = Dataset::from_csv_bytes("train", TRAIN_CSV).unwrap();
    assert_eq!(dataset.n_rows(), 3);
    state.set_dataset(DatasetRole::Train, dataset);

    // Configure and train
    let config = TrainingConfig::new()
        .with_algorithm(Algorithm::GradientBoosting)
        .with_feature_engineering(true);
    state.apply_config(config.clone());

    let simulator = TrainingSimulator::new()
        .with_delay(Duration::ZERO)
        .with_seed(1234);
    let result = simulator.train(state.config()).await.unwrap();
    state.record_result(result);

    // Render
    let result = state.last_result().unwrap();
    let metrics = MetricSet {
        accuracy: result.accuracy,
        precision: result.precision,
        recall: result.recall,
        f1_score: result.f1_score,
    };
    metrics.validate().unwrap();

    let bars: Vec<ChartPoint> = metric_bars(&metrics);
    assert_eq!(bars.len(), 4);

    let cells: Vec<ConfusionCell> = confusion_breakdown(&result.confusion_matrix);
    let total: u64 = cells.iter().map(|c| c.count).sum();
    assert_eq!(total, 200);

    let ranked = rank_features(&result.feature_importance, SortMode::ByImportance);
    assert!(ranked.len() <= 10);
    assert!(ranked[0].importance >= ranked[ranked.len() - 1].importance);
}

#[tokio::test]
async fn test_derived_and_simulated_metrics_agree_on_recall() {
    // The synthesized matrix is built from floored counts, so metrics
    // derived back from it match the simulated recall to 1/50 and the
    // simulated accuracy's normal-class part to 1/150.
    let simulator = TrainingSimulator::new()
        .with_delay(Duration::ZERO)
        .with_seed(99);
    let result = simulator.train(&TrainingConfig::default()).await.unwrap();

    let derived = result.confusion_matrix.metrics().unwrap();
    assert!((derived.recall - result.recall).abs() <= 1.0 / 50.0);
    assert!(derived.accuracy <= result.accuracy + 1.0 / 200.0);
}

#[test]
fn test_comparison_view_uses_the_reference_catalog() {
    let models = reference_models();
    let rows = radar_rows(&models);

    assert_eq!(rows.len(), 5);
    for row in &rows {
        assert_eq!(row.values.len(), models.len());
        for (_, value) in &row.values {
            assert!((0.0..=100.0).contains(value));
        }
    }
}

#[test]
fn test_history_chart_data() {
    let history = training_history();
    assert_eq!(history.first().unwrap().epoch, 1);
    assert_eq!(history.last().unwrap().epoch, 8);
    assert!(history.last().unwrap().accuracy > history.first().unwrap().accuracy);
}

#[test]
fn test_analysis_prompt_for_flagged_row() {
    use chrono::Utc;

    let event = AnomalyEvent {
        user: "bob".to_string(),
        operation: "DELETE".to_string(),
        table: Some("audit_log".to_string()),
        timestamp: Utc::now(),
        severity: Severity::High,
    };

    let body = AnalysisPrompt::for_event(&event).to_default_request_body();
    let user_message = body["messages"][1]["content"].as_str().unwrap();
    assert!(user_message.contains("bob"));
    assert!(user_message.contains("DELETE"));
}

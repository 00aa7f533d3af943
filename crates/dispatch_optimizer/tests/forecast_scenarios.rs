use dispatch_network::records::DemandNodeId;
use dispatch_optimizer::{
    error::FitError,
    planner::LogisticsPlanner,
    solver::{allocation_config::AllocationConfig, allocation_result::AllocationStatus},
};

mod setup;

#[test]
fn test_single_point_history_is_skipped() {
    let network = setup::scenario_network(vec![
        setup::stored(1, setup::CUSTOMER_A, 100.0),
        setup::stored(1, setup::CUSTOMER_B, 20.0),
        setup::stored(2, setup::CUSTOMER_B, 25.0),
        setup::stored(3, setup::CUSTOMER_B, 30.0),
    ]);
    let planner = LogisticsPlanner::new(network, AllocationConfig::default());

    let report = planner.forecast_report(4);

    assert_eq!(report.predictions.len(), 1);
    assert_eq!(
        report.predictions[0].demand_node_id,
        DemandNodeId::new(setup::CUSTOMER_B)
    );
    assert_eq!(report.predictions[0].predicted_demand, 35.0);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(
        report.skipped[0].reason,
        FitError::InsufficientObservations { count: 1 }
    );
}

#[test]
fn test_exact_lines_are_extrapolated() {
    // a = -3.5, b = 80 for customer A; a = 0.25, b = 7 for customer B
    let history = (1..=6)
        .flat_map(|period| {
            let t = f64::from(period);
            [
                setup::stored(period, setup::CUSTOMER_A, -3.5 * t + 80.0),
                setup::stored(period, setup::CUSTOMER_B, 0.25 * t + 7.0),
            ]
        })
        .collect();
    let planner = LogisticsPlanner::new(setup::scenario_network(history), AllocationConfig::default());

    let predictions = planner.forecast_next_period(10);
    assert!((predictions[0].predicted_demand - 45.0).abs() < 1e-9);
    assert!((predictions[1].predicted_demand - 9.5).abs() < 1e-9);

    // Customer A's line crosses zero before period 30
    let predictions = planner.forecast_next_period(30);
    assert_eq!(predictions[0].predicted_demand, 0.0);
    assert!((predictions[1].predicted_demand - 14.5).abs() < 1e-9);
}

#[test]
fn test_empty_history_forecasts_nothing() {
    let planner = LogisticsPlanner::new(setup::scenario_network(vec![]), AllocationConfig::default());

    assert!(planner.forecast_next_period(31).is_empty());
    assert_eq!(planner.next_period(), None);

    let result = planner.optimize_allocation(&[]);
    assert_eq!(result.status(), AllocationStatus::Error);
}

#[test]
fn test_forecast_feeds_allocation() {
    let history = (1..=30)
        .flat_map(|period| {
            [
                setup::stored(period, setup::CUSTOMER_A, 20.0 + f64::from(period)),
                setup::stored(period, setup::CUSTOMER_B, 10.0),
            ]
        })
        .collect();
    let planner = LogisticsPlanner::new(setup::scenario_network(history), AllocationConfig::default());

    let period = planner.next_period().unwrap();
    assert_eq!(period, 31);

    let predictions = planner.forecast_next_period(period);
    assert_eq!(predictions[0].predicted_demand, 51.0);
    assert_eq!(predictions[1].predicted_demand, 10.0);

    let result = planner.optimize_allocation(&predictions);
    assert_eq!(result.status(), AllocationStatus::Optimal);
    assert!((result.total_units() - 61.0).abs() < 1e-6);
}

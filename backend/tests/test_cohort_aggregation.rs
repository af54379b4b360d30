//! Cohort-level aggregation: the reference 5000-patient scenario,
//! survival curve shape, and run-to-run reproducibility.

use cohort_simulator_core_rs::{
    Cohort, CohortSummary, OutcomeError, SimulationConfig, SurvivalCurve, TransitionModel,
};
use proptest::prelude::*;

fn reference_model() -> TransitionModel {
    TransitionModel::from_counts(&[
        [1251.0, 350.0, 116.0, 17.0],
        [0.0, 731.0, 512.0, 15.0],
        [0.0, 0.0, 1312.0, 437.0],
    ])
    .unwrap()
}

fn run_reference_cohort() -> (CohortSummary, Vec<f64>, Vec<f64>) {
    let mut cohort = Cohort::new(SimulationConfig::default(), reference_model()).unwrap();
    let summary = cohort.simulate().unwrap();
    let survival = cohort.outcomes().survival_times().to_vec();
    let aids = cohort.outcomes().times_to_aids().to_vec();
    (summary, survival, aids)
}

#[test]
fn test_reference_cohort_curve_shape() {
    let (summary, survival, _) = run_reference_cohort();
    let curve = &summary.survival_curve;

    assert_eq!(curve.initial_population(), 5000);
    assert_eq!(curve.points()[0].time, 0.0);

    // Non-increasing population, non-decreasing time.
    for pair in curve.points().windows(2) {
        assert!(pair[1].population <= pair[0].population);
        assert!(pair[1].time >= pair[0].time);
    }

    // The plateau equals the initial population minus recorded deaths.
    assert_eq!(curve.final_population(), 5000 - survival.len());
    assert_eq!(summary.num_deaths, survival.len());

    // Deaths all happened strictly inside the horizon.
    assert!(survival.iter().all(|&t| t > 0.0 && t < 100.0));
}

#[test]
fn test_means_are_arithmetic_means() {
    let (summary, survival, aids) = run_reference_cohort();

    let mean_survival = survival.iter().sum::<f64>() / survival.len() as f64;
    let mean_aids = aids.iter().sum::<f64>() / aids.len() as f64;

    assert_eq!(summary.mean_survival_time, mean_survival);
    assert_eq!(summary.mean_time_to_aids, mean_aids);

    // Sanity: with the reference model, mean survival sits well inside
    // the horizon and AIDS onset precedes death on average.
    assert!(summary.mean_survival_time > 1.0);
    assert!(summary.mean_survival_time < 100.0);
    assert!(summary.mean_time_to_aids < summary.mean_survival_time);
}

#[test]
fn test_cohort_run_is_reproducible() {
    let (summary1, survival1, aids1) = run_reference_cohort();
    let (summary2, survival2, aids2) = run_reference_cohort();

    assert_eq!(survival1, survival2);
    assert_eq!(aids1, aids2);
    assert_eq!(summary1.mean_survival_time, summary2.mean_survival_time);
    assert_eq!(summary1.mean_time_to_aids, summary2.mean_time_to_aids);
    assert_eq!(summary1.num_deaths, summary2.num_deaths);
    assert_eq!(summary1.num_aids_cases, summary2.num_aids_cases);
}

#[test]
fn test_zero_horizon_has_no_outcomes() {
    let config = SimulationConfig {
        population_size: 100,
        horizon: 0,
        cohort_id: 1,
    };
    let mut cohort = Cohort::new(config, reference_model()).unwrap();
    assert_eq!(cohort.simulate().unwrap_err(), OutcomeError::NoSurvivalTimes);
}

#[test]
fn test_empty_population_rejected_at_construction() {
    let config = SimulationConfig {
        population_size: 0,
        horizon: 100,
        cohort_id: 1,
    };
    assert!(Cohort::new(config, reference_model()).is_err());
}

proptest! {
    /// The survival curve is non-increasing for arbitrary death times.
    #[test]
    fn prop_curve_non_increasing(
        times in prop::collection::vec(0.5f64..100.0, 1..200),
        extra in 0usize..50,
    ) {
        let initial = times.len() + extra;
        let curve = SurvivalCurve::from_survival_times(initial, &times);

        prop_assert_eq!(curve.initial_population(), initial);
        prop_assert_eq!(curve.final_population(), extra);
        for pair in curve.points().windows(2) {
            prop_assert!(pair[1].population <= pair[0].population);
            prop_assert!(pair[1].time >= pair[0].time);
        }
    }
}

//! Cohort-level outcome collection and aggregation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::patient::Patient;

/// Errors from finalizing cohort outcomes
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OutcomeError {
    #[error("no survival times recorded; mean survival is undefined")]
    NoSurvivalTimes,

    #[error("no AIDS onset times recorded; mean time to AIDS is undefined")]
    NoEventTimes,
}

/// One step of the survival curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Elapsed time in years
    pub time: f64,

    /// Number of patients still alive at this time
    pub population: usize,
}

/// Step function of living population size over time.
///
/// Starts at the initial population at time 0 and decrements by one at
/// each recorded death time in ascending order, so it is non-increasing
/// by construction. Suitable for plotting or serialization; the core
/// renders nothing itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurvivalCurve {
    points: Vec<CurvePoint>,
}

impl SurvivalCurve {
    /// Build the curve from recorded death times.
    ///
    /// `survival_times` need not be sorted; a sorted copy is used so each
    /// decrement pairs with its death time. Order among equal times is
    /// immaterial.
    pub fn from_survival_times(initial_population: usize, survival_times: &[f64]) -> Self {
        let mut times = survival_times.to_vec();
        times.sort_by(|a, b| a.total_cmp(b));

        let mut points = Vec::with_capacity(times.len() + 1);
        points.push(CurvePoint {
            time: 0.0,
            population: initial_population,
        });

        let mut alive = initial_population;
        for time in times {
            alive = alive.saturating_sub(1);
            points.push(CurvePoint {
                time,
                population: alive,
            });
        }

        Self { points }
    }

    /// The `(time, population)` step pairs, in ascending time order
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Population at time 0
    pub fn initial_population(&self) -> usize {
        self.points.first().map_or(0, |p| p.population)
    }

    /// Population after the last recorded death
    pub fn final_population(&self) -> usize {
        self.points.last().map_or(0, |p| p.population)
    }

    /// Number of patients still alive at elapsed time `time`
    pub fn population_at(&self, time: f64) -> usize {
        self.points
            .iter()
            .take_while(|p| p.time <= time)
            .last()
            .map_or(0, |p| p.population)
    }
}

/// Aggregate results of one cohort run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohortSummary {
    /// Arithmetic mean of recorded survival times (years)
    pub mean_survival_time: f64,

    /// Arithmetic mean of recorded times to AIDS onset (years)
    pub mean_time_to_aids: f64,

    /// Number of patients who died within the horizon
    pub num_deaths: usize,

    /// Number of patients who developed AIDS within the horizon
    pub num_aids_cases: usize,

    /// Living population over time
    pub survival_curve: SurvivalCurve,
}

/// Collects per-patient outcomes into cohort-level statistics.
///
/// Built incrementally as patients complete, finalized by one aggregation
/// pass. Insertion order does not affect the summary statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CohortOutcomes {
    /// Survival times of patients who died within the horizon
    survival_times: Vec<f64>,

    /// Times to first AIDS onset of patients who developed AIDS
    times_to_aids: Vec<f64>,
}

impl CohortOutcomes {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcomes of one completed patient.
    ///
    /// Patients still alive at the horizon contribute no survival time;
    /// patients who never developed AIDS contribute no event time.
    pub fn record(&mut self, patient: &Patient) {
        if let Some(t) = patient.monitor().survival_time() {
            self.survival_times.push(t);
        }
        if let Some(t) = patient.monitor().time_to_aids() {
            self.times_to_aids.push(t);
        }
    }

    /// Recorded survival times, in insertion order
    pub fn survival_times(&self) -> &[f64] {
        &self.survival_times
    }

    /// Recorded times to AIDS onset, in insertion order
    pub fn times_to_aids(&self) -> &[f64] {
        &self.times_to_aids
    }

    /// Aggregate into a [`CohortSummary`].
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError`] if no survival times or no AIDS onset
    /// times were recorded; the means are undefined in either case.
    pub fn finalize(&self, initial_population: usize) -> Result<CohortSummary, OutcomeError> {
        if self.survival_times.is_empty() {
            return Err(OutcomeError::NoSurvivalTimes);
        }
        if self.times_to_aids.is_empty() {
            return Err(OutcomeError::NoEventTimes);
        }

        let mean_survival_time =
            self.survival_times.iter().sum::<f64>() / self.survival_times.len() as f64;
        let mean_time_to_aids =
            self.times_to_aids.iter().sum::<f64>() / self.times_to_aids.len() as f64;

        Ok(CohortSummary {
            mean_survival_time,
            mean_time_to_aids,
            num_deaths: self.survival_times.len(),
            num_aids_cases: self.times_to_aids.len(),
            survival_curve: SurvivalCurve::from_survival_times(
                initial_population,
                &self.survival_times,
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_starts_at_initial_population() {
        let curve = SurvivalCurve::from_survival_times(5, &[1.5, 0.5, 2.5]);
        assert_eq!(curve.initial_population(), 5);
        assert_eq!(curve.points()[0].time, 0.0);
    }

    #[test]
    fn curve_decrements_in_time_order() {
        let curve = SurvivalCurve::from_survival_times(3, &[2.5, 0.5, 1.5]);
        let points = curve.points();

        assert_eq!(points.len(), 4);
        assert_eq!(points[1], CurvePoint { time: 0.5, population: 2 });
        assert_eq!(points[2], CurvePoint { time: 1.5, population: 1 });
        assert_eq!(points[3], CurvePoint { time: 2.5, population: 0 });
    }

    #[test]
    fn curve_is_non_increasing() {
        let times: Vec<f64> = (0..50).map(|i| (i % 7) as f64 + 0.5).collect();
        let curve = SurvivalCurve::from_survival_times(100, &times);

        for pair in curve.points().windows(2) {
            assert!(pair[1].population <= pair[0].population);
            assert!(pair[1].time >= pair[0].time);
        }
        assert_eq!(curve.final_population(), 100 - times.len());
    }

    #[test]
    fn population_at_steps_down_at_death_times() {
        let curve = SurvivalCurve::from_survival_times(2, &[0.5, 3.5]);
        assert_eq!(curve.population_at(0.0), 2);
        assert_eq!(curve.population_at(0.5), 1);
        assert_eq!(curve.population_at(3.0), 1);
        assert_eq!(curve.population_at(3.5), 0);
        assert_eq!(curve.population_at(100.0), 0);
    }

    #[test]
    fn finalize_computes_arithmetic_means() {
        let mut outcomes = CohortOutcomes::new();
        // Bypass record() to exercise finalize arithmetic directly.
        outcomes.survival_times = vec![1.5, 2.5, 5.0];
        outcomes.times_to_aids = vec![0.5, 1.5];

        let summary = outcomes.finalize(3).unwrap();
        assert!((summary.mean_survival_time - 3.0).abs() < 1e-12);
        assert!((summary.mean_time_to_aids - 1.0).abs() < 1e-12);
        assert_eq!(summary.num_deaths, 3);
        assert_eq!(summary.num_aids_cases, 2);
    }

    #[test]
    fn finalize_empty_survival_times_fails() {
        let outcomes = CohortOutcomes::new();
        assert_eq!(
            outcomes.finalize(10).unwrap_err(),
            OutcomeError::NoSurvivalTimes
        );
    }

    #[test]
    fn finalize_empty_event_times_fails() {
        let mut outcomes = CohortOutcomes::new();
        outcomes.survival_times = vec![1.5];
        assert_eq!(outcomes.finalize(10).unwrap_err(), OutcomeError::NoEventTimes);
    }
}

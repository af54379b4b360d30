//! Thin driver wiring the reference HIV model to the core engine.
//!
//! Simulates one patient and the full default cohort, printing outcomes
//! as JSON. All modeling happens in `cohort-simulator-core-rs`; this
//! binary only supplies constants and formats output.

use std::process::ExitCode;

use cohort_simulator_core_rs::{
    Cohort, Patient, SimulationConfig, TransitionModel, NUM_STATES,
};

/// Observed HIV transition counts between health states, one row per
/// non-absorbing state (CD4 200-500, CD4 <200, AIDS). The absorbing row
/// is implied.
const TRANS_MATRIX: [[f64; NUM_STATES]; 3] = [
    [1251.0, 350.0, 116.0, 17.0],
    [0.0, 731.0, 512.0, 15.0],
    [0.0, 0.0, 1312.0, 437.0],
];

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = SimulationConfig::default();
    let model = TransitionModel::from_counts(&TRANS_MATRIX)?;

    // Single-patient run, as in the original worked example.
    let mut patient = Patient::new(1);
    patient.simulate(&model, config.horizon);
    println!(
        "Patient {}: survival time (years): {:?}, time to AIDS (years): {:?}",
        patient.id(),
        patient.monitor().survival_time(),
        patient.monitor().time_to_aids(),
    );

    // Full cohort run.
    let mut cohort = Cohort::new(config, model)?;
    let summary = cohort.simulate()?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

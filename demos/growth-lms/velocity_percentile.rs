//! Weight Velocity Percentile Example
//!
//! Evaluates the one-month weight gain of a girl between 6 and 7 months
//! (7.00 kg -> 7.30 kg), prints the summary, the reference lines at the
//! usual chart percentiles, and a coarse view of the cumulative curve.

use growth_lms::prelude::*;

fn main() -> Result<(), GrowthError> {
    println!("{}", "=".repeat(60));
    println!("Weight Velocity Percentile");
    println!("{}", "=".repeat(60));

    let engine = Growth::<f64>::new()
        .return_curve()
        .curve_resolution(15)
        .build()?;

    let request = MeasurementRequest::weight_velocity(Female, 7, 7.00, 7.30);
    let result = engine.evaluate(&request)?;
    println!("{}", result);

    println!("Reference lines (end month 7, girls):");
    for p in [3.0, 15.0, 50.0, 85.0, 97.0] {
        let gain = engine.value_at_percentile(WeightVelocity, Female, 7, p)?;
        println!("  P{:<4} {:>8.0} g", p, gain);
    }
    println!();

    if let Some(curve) = &result.curve {
        println!("{:>10} {:>12}", "Gain (g)", "Cumulative %");
        println!("{:-<23}", "");
        for (gain, pct) in curve.points() {
            println!("{:>10.0} {:>12.2}", gain, pct);
        }
    }

    Ok(())
}

//! Prints raw and trimmed parallel curves for a few sample polylines.
//!
//! Usage:
//! ```text
//! cargo run --example offset
//! RUST_LOG=parallel_curve=trace cargo run --example offset
//! ```

use parallel_curve::{ParallelCurve2D, Point2, Result, Side};

/// Offset distance used for every sample.
const DISTANCE: f64 = 2.0;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for parallel_curve.
    // Override with RUST_LOG env var (e.g. RUST_LOG=parallel_curve=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("parallel_curve=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let samples: [(&str, Vec<Point2>); 3] = [
        (
            "L-shape",
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(10.0, 10.0),
            ],
        ),
        (
            "U-turn",
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(10.0, 10.0),
                Point2::new(0.0, 10.0),
            ],
        ),
        (
            "zigzag",
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(4.0, 3.0),
                Point2::new(8.0, 0.0),
                Point2::new(12.0, 3.0),
            ],
        ),
    ];

    for (name, points) in samples {
        for side in [Side::Left, Side::Right] {
            let op = ParallelCurve2D::new(points.clone(), DISTANCE, side);
            let raw = op.raw_offset()?;
            let resolved = op.execute()?;
            println!("{name} ({side:?}, d = {DISTANCE})");
            println!("  raw:      {}", format_points(&raw));
            println!("  resolved: {}", format_points(&resolved));
        }
    }

    Ok(())
}

fn format_points(points: &[Point2]) -> String {
    points
        .iter()
        .map(|p| format!("({:.3}, {:.3})", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

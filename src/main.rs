//! Prints the paint needed for a sample room.

use paint_models::models::finishes::paint::required_amount_of_paint;
use paint_models::support::geometry::Surface;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so stdout carries only the result. Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let walls = [
        Surface::from_metres(10.0, 10.0),
        Surface::from_metres(10.0, 10.0),
        Surface::from_metres(20.0, 50.0),
        Surface::from_metres(10.0, 10.0),
        Surface::from_metres(10.0, 10.0),
        Surface::from_metres(10.0, 10.0),
    ];
    let unpaintable = [
        Surface::from_metres(10.0, 50.0),
        Surface::from_metres(10.0, 50.0),
    ];
    let coats: u32 = 3;

    info!(
        walls = walls.len(),
        unpaintable = unpaintable.len(),
        coats,
        "estimating paint for sample room"
    );

    println!("{}", required_amount_of_paint(&walls, &unpaintable, coats));
}

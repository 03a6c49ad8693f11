/*

    Report how large each object of a scene appears on screen.

    @date: Oct, 2025
    @author: Bartu

*/

use std::{env, time::Instant};
use tracing::{info, warn, error};

use screen_sizer::json_parser::parse_scene_json;

fn main() -> Result<(), Box<dyn std::error::Error>> {

    // Logging on console
    tracing_subscriber::fmt::init();

    // Parse args
    let args: Vec<String> = env::args().collect();
    let json_path: &str = if args.len() == 1 {
        warn!("No arguments were provided, setting default scene path...");
        "./inputs/scene.json"
    } else if args.len() == 2 {
        &args[1]
    } else {
        error!("Usage: {} <filename>.json", args[0]);
        std::process::exit(1);
    };

    // Parse JSON
    info!("Loading scene from {}...", json_path);
    let scene = parse_scene_json(json_path).map_err(|e| {
        error!("Failed to load scene: {}", e);
        e
    })?;

    let start = Instant::now();
    let reports = scene.measure_all();
    info!("Measured {} objects in {:?}", reports.len(), start.elapsed());

    for report in reports.iter() {
        let bb = &report.pixel_box;
        info!(
            "{:<16} {:<6} sub-pixel: {:<5} box: ({:.1}, {:.1}) - ({:.1}, {:.1}) {:.1}x{:.1} px",
            report.name, report.size, report.sub_pixel,
            bb.min.x, bb.min.y, bb.max.x, bb.max.y, bb.width(), bb.height(),
        );
    }
    info!("Finished execution.");
    Ok(())
}

use mask_tools::config::load_stats_config;
use mask_tools::image::io::{load_mask_u8, write_json_file};
use mask_tools::StatsCollector;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_stats_config(Path::new(&config_path))?;

    let src = load_mask_u8(&config.input)?;
    let params = config.stats.to_params()?;
    let mut collector = StatsCollector::new(params).map_err(|e| e.to_string())?;
    let stats = collector.collect(src.as_view());

    match &config.output {
        Some(path) => {
            write_json_file(path, &stats)?;
            println!(
                "Saved {} labels ({} foreground) to {}",
                stats.num_labels,
                stats.num_labels - 1,
                path.display()
            );
        }
        None => {
            let json = serde_json::to_string_pretty(&stats)
                .map_err(|e| format!("Failed to serialize stats: {e}"))?;
            println!("{json}");
        }
    }
    Ok(())
}

fn usage() -> String {
    "Usage: ccl_stats <config.json>".to_string()
}

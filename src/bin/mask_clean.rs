use mask_tools::config::load_clean_config;
use mask_tools::image::io::{load_mask_u8, save_mask_u8};
use mask_tools::MaskCleaner;
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
    let config = load_clean_config(Path::new(&config_path))?;

    let src = load_mask_u8(&config.input)?;
    let params = config.clean.to_params(8)?;
    let mut cleaner = MaskCleaner::new(params).map_err(|e| e.to_string())?;
    let cleaned = cleaner.process_to_buf(src.as_view());

    save_mask_u8(&cleaned, &config.output)?;
    println!(
        "Cleaned {} ({}x{}) -> {}",
        config.input.display(),
        cleaned.width(),
        cleaned.height(),
        config.output.display()
    );
    Ok(())
}

fn usage() -> String {
    "Usage: mask_clean <config.json>".to_string()
}

//! Droplet field CLI - animate a droplet scene in a window.

use std::fs;
use std::path::PathBuf;

use droplet_field::{
    render::{FrameDriver, run_windowed},
    schema::SceneConfig,
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "--help" {
        eprintln!("Usage: {} [config.json]", args[0]);
        eprintln!();
        eprintln!("Animate a droplet scene in a window.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to scene configuration file (optional)");
        eprintln!();
        eprintln!("Pass --example to print the default configuration as JSON.");
        std::process::exit(1);
    }

    if args.len() > 1 && args[1] == "--example" {
        print_example_config();
        return;
    }

    // Load configuration, or fall back to the built-in scene
    let config: SceneConfig = if args.len() > 1 {
        let config_path = PathBuf::from(&args[1]);
        let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
            eprintln!("Error reading config file: {}", e);
            std::process::exit(1);
        });
        serde_json::from_str(&config_str).unwrap_or_else(|e| {
            eprintln!("Error parsing config: {}", e);
            std::process::exit(1);
        })
    } else {
        SceneConfig::default()
    };

    println!("Droplet Field");
    println!("=============");
    println!("Canvas: {}x{}", config.width, config.height);
    println!("Droplets: {}", config.droplets.len());
    println!("Threshold: {}", config.threshold);
    println!("Frame rate: {} fps", config.frame_rate);

    let driver = FrameDriver::new(&config).unwrap_or_else(|e| {
        eprintln!("Error building scene: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = run_windowed(driver, "Droplet Field") {
        eprintln!("Error opening window: {}", e);
        std::process::exit(1);
    }
}

fn print_example_config() {
    let config = SceneConfig::default();

    println!("Example configuration (config.json):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
}

//! Generate a default calculator configuration file
//!
//! Creates a JSON config with all default parameters, or the legacy
//! propagate policy with `--legacy`

use std::{env, path::Path, process};

use visual_performance::CalculatorConfig;

fn main() {
    let args: Vec<String> = env::args().collect();

    let legacy = args.iter().any(|arg| arg == "--legacy");
    let output_arg = args.iter().skip(1).find(|arg| !arg.starts_with("--"));

    let output_path = match output_arg {
        Some(path) => Path::new(path),
        None => {
            eprintln!("Usage: {} [--legacy] <output_config.json>", args[0]);
            eprintln!();
            eprintln!("Example:");
            eprintln!("  {} studies/office/rvp.json", args[0]);
            process::exit(1);
        }
    };

    // Create parent directory if needed
    if let Some(parent) = output_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            process::exit(1);
        }
    }

    let config = if legacy {
        CalculatorConfig::legacy_propagate()
    } else {
        CalculatorConfig::default()
    };

    match config.to_json_file(output_path) {
        Ok(_) => {
            eprintln!("Configuration saved to {}", output_path.display());
            eprintln!();
            eprintln!("Config summary:");
            eprintln!("  Domain policy: {:?}", config.domain_policy);
            eprintln!(
                "  Observer ages: {:.0}-{:.0} years ({})",
                config.observer.min_age,
                config.observer.max_age,
                if config.observer.enforce { "enforced" } else { "warn only" }
            );
        }
        Err(e) => {
            eprintln!("Error saving config: {}", e);
            process::exit(1);
        }
    }
}

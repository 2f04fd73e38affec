//! Command-line interface for visual_performance
//!
//! Evaluates the RVP model for one set of task conditions

use std::{env, path::Path, process};

use visual_performance::{CalculatorConfig, RvpResult, TaskConditions, VisualPerformanceCalculator};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("visual_performance=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let mut config_path = None;
    let mut values = Vec::new();

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --config requires a file path");
                    process::exit(1);
                }
                config_path = Some(args[i + 1].clone());
                i += 1;
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => match arg.parse::<f64>() {
                Ok(value) => values.push(value),
                Err(_) => {
                    eprintln!("Error: '{}' is not a number", arg);
                    process::exit(1);
                }
            },
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let conditions = match values.as_slice() {
        [age, contrast, size, luminance] => TaskConditions::new(*age, *contrast, *size, *luminance),
        _ => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    let config = match config_path {
        Some(path) => match CalculatorConfig::from_json_file(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config file: {}", e);
                process::exit(1);
            }
        },
        None => CalculatorConfig::default(),
    };

    let calculator = match VisualPerformanceCalculator::with_config(config) {
        Ok(calculator) => calculator,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            process::exit(1);
        }
    };

    match calculator.calculate(&conditions) {
        Ok(result) => print_result(&result),
        Err(error) => {
            eprintln!("Calculation failed: {}", error);
            if error.is_domain_error() {
                eprintln!("Suggestion: {}", error.user_message());
            }
            process::exit(1);
        }
    }
}

fn print_help(program_name: &str) {
    eprintln!(
        "Usage: {} [OPTIONS] <age> <contrast> <target_size> <background_luminance>",
        program_name
    );
    eprintln!();
    eprintln!("Compute Relative Visual Performance for a visual task.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  age                   Observer age (years)");
    eprintln!("  contrast              Target luminance contrast (Weber, magnitude)");
    eprintln!("  target_size           Target solid angle (µsr)");
    eprintln!("  background_luminance  Background luminance (cd/m²)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config FILE    Load calculator configuration from JSON");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} 40 0.5 100 100", program_name);
    eprintln!("  {} --config legacy.json 40 0.5 100 0", program_name);
}

fn print_result(result: &RvpResult) {
    // JSON to stdout for programmatic use
    match serde_json::to_string_pretty(result) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing result: {}", e),
    }

    // Summary to stderr for human reading
    eprintln!();
    eprintln!("Visual Performance Summary:");
    eprintln!("  Pupil radius:        {:.3} mm", result.pupil_radius);
    eprintln!("  Retinal illuminance: {:.1} Td", result.retinal_illuminance);
    eprintln!("  Threshold contrast:  {:.5}", result.threshold_contrast);
    eprintln!("  Visibility level:    {:.1}", result.visibility_level);
    eprintln!("  Reaction time:       {:.1} ms", result.reaction_time);
    eprintln!("  RVP:                 {:.3}", result.relative_visual_performance);

    if !result.is_finite() {
        eprintln!("  Warning: result contains undefined values; inputs are outside the model domain.");
    }
}

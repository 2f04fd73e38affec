//! Batch CLI for visual_performance with JSON configuration
//!
//! Evaluates every task in a JSON array of task conditions

use std::{env, fs, path::Path, process};

use serde_json::{json, Value};
use visual_performance::{CalculatorConfig, TaskConditions, VisualPerformanceCalculator};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("visual_performance=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        print_help(&args[0]);
        process::exit(1);
    }

    let config_path = Path::new(&args[1]);
    let tasks_path = Path::new(&args[2]);

    // Load configuration
    let config = match CalculatorConfig::from_json_file(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config file: {}", e);
            process::exit(1);
        }
    };

    eprintln!("Loaded configuration from {}", config_path.display());
    eprintln!("Domain policy: {:?}", config.domain_policy);
    eprintln!();

    let tasks = match load_tasks(tasks_path) {
        Ok(tasks) => tasks,
        Err(e) => {
            eprintln!("Error reading tasks: {}", e);
            process::exit(1);
        }
    };

    if tasks.is_empty() {
        eprintln!("No tasks found in {}", tasks_path.display());
        process::exit(1);
    }

    let calculator = match VisualPerformanceCalculator::with_config(config) {
        Ok(calculator) => calculator,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            process::exit(1);
        }
    };

    let mut success_count = 0;
    let mut error_count = 0;
    let mut output = Vec::with_capacity(tasks.len());

    for (i, (conditions, outcome)) in tasks
        .iter()
        .zip(calculator.calculate_batch(&tasks))
        .enumerate()
    {
        match outcome {
            Ok(result) => {
                success_count += 1;
                if env::var("VERBOSE").is_ok() {
                    eprintln!(
                        "[{}/{}] RVP {:.3}, reaction time {:.1} ms",
                        i + 1,
                        tasks.len(),
                        result.relative_visual_performance,
                        result.reaction_time
                    );
                }
                output.push(json!({ "conditions": conditions, "result": result }));
            }
            Err(error) => {
                eprintln!("[{}/{}] ✗ {}", i + 1, tasks.len(), error);
                error_count += 1;
                output.push(json!({ "conditions": conditions, "error": error.to_string() }));
            }
        }
    }

    match serde_json::to_string_pretty(&Value::Array(output)) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing results: {}", e);
            process::exit(1);
        }
    }

    eprintln!();
    eprintln!("Batch evaluation complete:");
    eprintln!("  Success: {}", success_count);
    eprintln!("  Errors: {}", error_count);

    if error_count > 0 {
        process::exit(1);
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} <config.json> <tasks.json>", program_name);
    eprintln!();
    eprintln!("Evaluate Relative Visual Performance for a list of tasks.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  config.json    Calculator configuration");
    eprintln!("  tasks.json     JSON array of {{ageOfObserver, luminanceContrast, targetSize, backgroundLuminance}}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  VERBOSE=1      Print a summary line for each task");
    eprintln!("  RUST_LOG       Log filter (default: visual_performance=info)");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} rvp.json tasks.json", program_name);
    eprintln!("  VERBOSE=1 {} rvp.json tasks.json", program_name);
}

fn load_tasks(path: &Path) -> visual_performance::Result<Vec<TaskConditions>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

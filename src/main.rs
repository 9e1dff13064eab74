use anyhow::{Context, Result};
use clap::Parser;
use ktf::config::Config;
use ktf::status::{banner, format_message, restart_notice, Status};
use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(
    name = "ktf",
    version,
    about = "Kyakuhon Text Formatter — format plain-text screenplays into .docx"
)]
struct Cli {
    /// Script file(s) to convert (default: prompt for paths interactively)
    inputs: Vec<PathBuf>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the formatted script with colored categories
    #[arg(long)]
    preview: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn load_config(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read config {}", path.display()))?;
    let config: Config = serde_json::from_str(&text)
        .with_context(|| format!("invalid config JSON in {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(config)
}

fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    let defaults = ["ktf.config.json", "config/ktf.config.json"];
    for p in &defaults {
        let path = Path::new(p);
        if path.is_file() {
            log::debug!("using config {}", path.display());
            return load_config(path);
        }
    }
    Ok(Config::default())
}

/// Converts one file and reports the outcome. Returns whether it succeeded.
fn process_file(path: &Path, config: &Config, preview: bool) -> bool {
    let result = ktf::read_script(path).and_then(|lines| {
        if preview {
            for line in &lines {
                println!("{}", ktf::preview::format_line(line));
            }
        }
        println!(
            "{}",
            format_message("Generating .docx file. Please wait...", Status::Processing)
        );
        ktf::write_document(&lines, path, config)
    });

    match result {
        Ok(target) => {
            println!(
                "{}",
                format_message(
                    &format!(".docx file generated at:\n{}", target.display()),
                    Status::Success
                )
            );
            true
        }
        Err(e) => {
            log::debug!("conversion of {} failed: {:?}", path.display(), e);
            println!("{}", format_message(&e.to_string(), Status::Failure));
            false
        }
    }
}

fn run_interactive(config: &Config, preview: bool) {
    println!("{}", banner());
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!(
            "{}",
            format_message(
                "Drag and drop the source text file and Enter.",
                Status::Message
            )
        );
        let raw = match lines.next() {
            Some(Ok(raw)) => raw,
            Some(Err(e)) => die(&format!("cannot read input: {}", e)),
            None => break,
        };
        let path = ktf::clean_input_path(&raw);
        if path.as_os_str().is_empty() {
            println!("{}", format_message("No path given.", Status::Caution));
            continue;
        }
        process_file(&path, config, preview);
        println!("{}", restart_notice());
        println!("{}", format_message("(Exit: Ctrl + C)", Status::Message));
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = resolve_config(cli.config.as_deref()).unwrap_or_else(|e| die(&format!("{:#}", e)));

    if cli.inputs.is_empty() {
        run_interactive(&config, cli.preview);
        return;
    }

    let mut failed = 0;
    for path in &cli.inputs {
        if !process_file(path, &config, cli.preview) {
            failed += 1;
        }
    }
    if failed > 0 {
        eprintln!("{} of {} file(s) failed", failed, cli.inputs.len());
        process::exit(1);
    }
}

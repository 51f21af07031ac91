use clap::{ArgGroup, Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use vf_app::{
    AppError, AppResult, ConfigSource, RunProgressEvent, RunRequest, RunStage, RunTimingSummary,
    project_service, run_service,
};
use vf_sim::DerivedCoefficients;

#[derive(Parser)]
#[command(name = "vf-cli")]
#[command(about = "vflight CLI - delayed-feedback pitch simulation for rotor-driven bodies", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation and write a text report
    #[command(group(ArgGroup::new("source").required(true).args(["config", "preset"])))]
    Run {
        /// Path to a YAML or JSON run configuration
        config: Option<PathBuf>,
        /// Built-in configuration name (pidlag, gyroeffect, rigid_body)
        #[arg(long)]
        preset: Option<String>,
        /// Directory the report is written to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Validate a run configuration file
    Validate {
        /// Path to a YAML or JSON run configuration
        config: PathBuf,
    },
    /// Print or save a built-in configuration
    Preset {
        /// Preset name
        name: String,
        /// Output file (YAML, or JSON by extension); stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List built-in configurations
    Presets,
    /// Print the derived lag-law coefficients as JSON
    #[command(group(ArgGroup::new("source").required(true).args(["config", "preset"])))]
    Coefficients {
        /// Path to a YAML or JSON run configuration
        config: Option<PathBuf>,
        /// Built-in configuration name
        #[arg(long)]
        preset: Option<String>,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            preset,
            out_dir,
        } => cmd_run(source(config.as_deref(), preset.as_deref())?, out_dir),
        Commands::Validate { config } => cmd_validate(&config),
        Commands::Preset { name, output } => cmd_preset(&name, output.as_deref()),
        Commands::Presets => cmd_presets(),
        Commands::Coefficients { config, preset } => {
            cmd_coefficients(source(config.as_deref(), preset.as_deref())?)
        }
    }
}

fn source<'a>(config: Option<&'a Path>, preset: Option<&'a str>) -> AppResult<ConfigSource<'a>> {
    match (config, preset) {
        (Some(path), None) => Ok(ConfigSource::File(path)),
        (None, Some(name)) => Ok(ConfigSource::Preset(name)),
        _ => Err(AppError::InvalidInput(
            "give either a config path or --preset".to_string(),
        )),
    }
}

fn cmd_run(source: ConfigSource<'_>, out_dir: PathBuf) -> AppResult<()> {
    match source {
        ConfigSource::File(path) => println!("Running simulation from: {}", path.display()),
        ConfigSource::Preset(name) => println!("Running preset: {}", name),
    }
    tracing::debug!(out_dir = %out_dir.display(), "report directory");

    let request = RunRequest {
        source,
        out_dir,
        stamp: None,
    };

    let mut last_emit = Instant::now();
    let mut last_fraction = -1.0f64;
    let mut last_stage = None;
    let response = run_service::execute_run_with_progress(
        &request,
        Some(&mut |event| {
            let fraction = event.step.map(|s| s.fraction_complete).unwrap_or(-1.0);
            let emit_now = last_stage != Some(event.stage)
                || (fraction >= 0.0 && (fraction - last_fraction).abs() >= 0.005)
                || last_emit.elapsed().as_millis() >= 100;
            if emit_now {
                render_cli_progress(&event);
                if fraction >= 0.0 {
                    last_fraction = fraction;
                }
                last_stage = Some(event.stage);
                last_emit = Instant::now();
            }
        }),
    )?;
    clear_progress_line();

    println!("✓ Simulation completed: {}", response.config_name);
    println!("  Report: {}", response.report_path.display());
    match response.stability.first_non_finite {
        Some(index) => println!("  ⚠ Trajectory became non-finite at No.{}", index),
        None => println!(
            "  Peak |theta|: {:.6}  final |theta|: {:.6e}",
            response.stability.peak_abs_theta, response.stability.final_abs_theta
        ),
    }

    print_timing_summary(&response.timing);
    Ok(())
}

fn cmd_validate(config: &Path) -> AppResult<()> {
    println!("Validating config: {}", config.display());
    let file = project_service::load_config(config)?;
    project_service::validate_config(&file)?;
    let sim = &file.simulation;
    println!(
        "✓ Config is valid: {} ({} model, T={}, tau={})",
        file.name,
        sim.model.label(),
        sim.total_steps,
        sim.lag_steps
    );
    println!(
        "  Lag: {:.3}s  span: {:.3}s  initial pitch: {:.2}°",
        vf_core::secs(sim.lag_duration()),
        vf_core::secs(sim.duration()),
        vf_core::degrees(sim.init_theta())
    );
    Ok(())
}

fn cmd_preset(name: &str, output: Option<&Path>) -> AppResult<()> {
    let file = project_service::resolve_preset(name)?;
    match output {
        Some(path) => {
            project_service::save_config(path, &file)?;
            println!("✓ Wrote preset '{}' to {}", name, path.display());
        }
        None => {
            let yaml =
                serde_yaml::to_string(&file).map_err(|e| AppError::InvalidInput(e.to_string()))?;
            print!("{}", yaml);
        }
    }
    Ok(())
}

fn cmd_presets() -> AppResult<()> {
    println!("Built-in configurations:");
    for preset in project_service::list_presets() {
        println!(
            "  {} - {} model, T={}, tau={}",
            preset.name, preset.model, preset.total_steps, preset.lag_steps
        );
        if let Some(description) = &preset.description {
            println!("      {}", description);
        }
    }
    Ok(())
}

fn cmd_coefficients(source: ConfigSource<'_>) -> AppResult<()> {
    let file = source.resolve()?;
    let coefficients: DerivedCoefficients = run_service::derive_coefficients(&file)?;
    let json = serde_json::to_string_pretty(&coefficients)
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

fn clear_progress_line() {
    print!("\r{}\r", " ".repeat(120));
    let _ = io::stdout().flush();
}

fn render_cli_progress(event: &RunProgressEvent) {
    match (event.stage, event.step) {
        (RunStage::Simulating, Some(s)) => {
            let width = 28usize;
            let filled = ((s.fraction_complete * width as f64).round() as usize).min(width);
            let bar = format!(
                "{}{}",
                "#".repeat(filled),
                "-".repeat(width.saturating_sub(filled))
            );
            print!(
                "\r[{}] {:>6.2}%  phase={}  t={:.3}s  step={}/{}  elapsed={:.1}s",
                bar,
                s.fraction_complete * 100.0,
                event.stage.label(),
                s.sim_time_s,
                s.step,
                s.total_steps,
                event.elapsed_wall_s
            );
            let _ = io::stdout().flush();
        }
        _ => {
            let spinner = ['|', '/', '-', '\\'];
            let spin_idx = ((event.elapsed_wall_s * 10.0) as usize) % spinner.len();
            let mut line = format!(
                "\r{} {}  elapsed={:.2}s",
                spinner[spin_idx],
                event.stage.label(),
                event.elapsed_wall_s
            );
            if let Some(msg) = &event.message {
                line.push_str(&format!("  {}", msg));
            }
            print!("{}", line);
            let _ = io::stdout().flush();
        }
    }
}

fn print_timing_summary(timing: &RunTimingSummary) {
    let total = timing.total_time_s.max(1.0e-12);
    let load_pct = 100.0 * timing.load_time_s / total;
    let simulate_pct = 100.0 * timing.simulate_time_s / total;
    let report_pct = 100.0 * timing.report_time_s / total;

    println!("\nTiming summary:");
    println!("  Load:     {:.3}s ({:.1}%)", timing.load_time_s, load_pct);
    println!(
        "  Simulate: {:.3}s ({:.1}%)",
        timing.simulate_time_s, simulate_pct
    );
    println!("  Report:   {:.3}s ({:.1}%)", timing.report_time_s, report_pct);
    println!("  Total:    {:.3}s", timing.total_time_s);
    println!("  Steps:    {}", timing.steps);
}

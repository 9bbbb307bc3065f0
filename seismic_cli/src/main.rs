//! # Sismica CLI Application
//!
//! Terminal front end for the seismic design parameter engine.
//!
//! ## Usage
//!
//! ```text
//! seismic_cli [request.json | project.seis] [--strict] [--kn] [--save <project.seis>]
//! ```
//!
//! Without a file the building is entered interactively, with the Quito
//! reference example as defaults.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use seismic_core::calculations::SeismicResult;
use seismic_core::file_io::{load_form, load_project_with_lock_check, save_project, FileLock, PROJECT_EXTENSION};
use seismic_core::form::validate_floor_count;
use seismic_core::site::CodeParsing;
use seismic_core::units::{ForceUnit, Tonnes};
use seismic_core::{calculate_form, CalcError, CalcResult, Project, SeismicForm};

/// Parsed command line
#[derive(Debug, Default)]
struct Options {
    input: Option<PathBuf>,
    strict: bool,
    kilonewtons: bool,
    save: Option<PathBuf>,
}

fn parse_args() -> Result<Options, String> {
    let mut options = Options::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--strict" => options.strict = true,
            "--kn" => options.kilonewtons = true,
            "--save" => {
                let path = args.next().ok_or("--save needs a file path")?;
                options.save = Some(PathBuf::from(path));
            }
            "-h" | "--help" => return Err(usage()),
            flag if flag.starts_with("--") => return Err(format!("Unknown option: {}\n{}", flag, usage())),
            path => options.input = Some(PathBuf::from(path)),
        }
    }
    Ok(options)
}

fn usage() -> String {
    "Usage: seismic_cli [request.json | project.seis] [--strict] [--kn] [--save <project.seis>]".to_string()
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt).and_then(|s| s.parse().ok()).unwrap_or(default)
}

fn prompt_str(prompt: &str, default: &str) -> String {
    prompt_line(prompt).unwrap_or_else(|| default.to_string())
}

/// Parse a typed floor count, rejecting fractions and out-of-range values
/// before anything is allocated or prompted per floor.
fn parse_floor_count(text: &str) -> CalcResult<usize> {
    let text = text.trim();
    let floor_count: usize = text
        .parse()
        .map_err(|_| CalcError::invalid_input("floor_count", text, "Number of floors must be a whole number"))?;
    validate_floor_count(floor_count)?;
    Ok(floor_count)
}

fn prompt_form() -> CalcResult<SeismicForm> {
    let example = SeismicForm::quito_example();

    let zone = prompt_str(&format!("Seismic zone (I-VI) [{}]: ", example.zone), &example.zone);
    let soil = prompt_str(&format!("Soil class (A-E) [{}]: ", example.soil), &example.soil);
    let region = prompt_str(&format!("Region [{}]: ", example.region), &example.region);
    let system = prompt_str(&format!("Structural system [{}]: ", example.system), &example.system);

    let floor_count = match prompt_line(&format!("Number of floors [{}]: ", example.floor_count)) {
        Some(text) => parse_floor_count(&text)?,
        None => example.floor_count,
    };

    let mut heights_m = Vec::with_capacity(floor_count);
    let mut weights_t = Vec::with_capacity(floor_count);
    for level in 1..=floor_count {
        heights_m.push(prompt_f64(&format!("  Floor {} story height (m) [3.0]: ", level), 3.0));
        weights_t.push(prompt_f64(&format!("  Floor {} seismic weight (t) [96.0]: ", level), 96.0));
    }

    Ok(SeismicForm {
        label: "CLI".to_string(),
        zone,
        soil,
        region,
        floor_count,
        heights_m,
        weights_t,
        system,
        r_factor: prompt_f64(&format!("R factor [{}]: ", example.r_factor), example.r_factor),
        importance_factor: prompt_f64(
            &format!("Importance factor I [{}]: ", example.importance_factor),
            example.importance_factor,
        ),
        phi_p: prompt_f64(&format!("Plan irregularity φP [{}]: ", example.phi_p), example.phi_p),
        phi_e: prompt_f64(&format!("Elevation irregularity φE [{}]: ", example.phi_e), example.phi_e),
    })
}

fn is_project_file(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == PROJECT_EXTENSION)
}

fn main() {
    println!("Sismica CLI - NEC-15 Seismic Design Parameters");
    println!("==============================================");
    println!();

    let options = match parse_args() {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&options) {
        report_error(&e);
        std::process::exit(1);
    }
}

fn run(options: &Options) -> CalcResult<()> {
    let mode = if options.strict {
        CodeParsing::Strict
    } else {
        CodeParsing::Lenient
    };

    match &options.input {
        Some(path) if is_project_file(path) => run_project(path, options, mode),
        Some(path) => {
            let form = load_form(path)?;
            run_form(form, options, mode)
        }
        None => run_form(prompt_form()?, options, mode),
    }
}

fn run_form(form: SeismicForm, options: &Options, mode: CodeParsing) -> CalcResult<()> {
    let unit = if options.kilonewtons {
        ForceUnit::Kilonewtons
    } else {
        ForceUnit::Tonnes
    };

    let result = calculate_form(&form, mode)?;
    print_result(&result, unit);

    println!();
    println!("JSON Output (for LLM/API use):");
    if let Ok(json) = serde_json::to_string_pretty(&result) {
        println!("{}", json);
    }

    if let Some(path) = &options.save {
        let mut project = Project::new("", "", "");
        project.settings.code_parsing = mode;
        project.settings.force_unit = unit;
        project.add_item(form);

        let lock = FileLock::acquire(path, user_id())?;
        save_project(&project, path)?;
        drop(lock);
        println!();
        println!("Saved project to {}", path.display());
    }
    Ok(())
}

fn run_project(path: &Path, options: &Options, mode: CodeParsing) -> CalcResult<()> {
    let (mut project, lock) = load_project_with_lock_check(path)?;
    if let Some(info) = lock {
        println!("Note: {} is open by {} on {} (read-only)", path.display(), info.user_id, info.machine);
        println!();
    }
    if options.strict {
        project.settings.code_parsing = mode;
    }
    let unit = if options.kilonewtons {
        ForceUnit::Kilonewtons
    } else {
        project.settings.force_unit
    };

    println!(
        "Project {} ({}), {} analyses, code {}",
        project.meta.job_id,
        project.meta.client,
        project.item_count(),
        project.settings.code
    );

    for (id, outcome) in project.run_all() {
        println!();
        println!("--- {} ---", id);
        match outcome {
            Ok(result) => print_result(&result, unit),
            Err(e) => report_error(&e),
        }
    }
    Ok(())
}

fn user_id() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string())
}

fn print_result(result: &SeismicResult, unit: ForceUnit) {
    let sym = unit.symbol();
    let force = |t: f64| unit.from_tonnes(Tonnes(t));
    let input = &result.input;
    let sp = &result.spectrum_parameters;
    let bs = &result.base_shear;

    println!("═══════════════════════════════════════");
    println!("  SEISMIC ANALYSIS: {}", result.label);
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Site:     {}, {}, {}", input.site.zone, input.site.soil, input.site.region);
    println!("  System:   {}", input.system);
    println!(
        "  Building: {} floors, hn = {:.2} m, W = {:.2} {}",
        input.floor_count,
        input.total_height_m,
        force(input.total_weight_t),
        sym
    );
    println!(
        "  Factors:  R = {}, I = {}, φP = {}, φE = {}",
        input.factors.r_factor, input.factors.importance_factor, input.factors.phi_p, input.factors.phi_e
    );
    println!();
    println!("Spectrum:");
    println!(
        "  Z = {:.2}  Fa = {:.2}  Fd = {:.2}  Fs = {:.2}  η = {:.2}  r = {:.1}",
        sp.z, sp.fa, sp.fd, sp.fs, sp.eta, sp.r
    );
    println!("  T0 = {:.4} s  Tc = {:.4} s  Sa,max = {:.4} g", sp.t0_s, sp.tc_s, sp.plateau_sa());
    println!();
    println!("Base Shear:");
    println!("  T1       = {:.4} s (limit 1.3·T1 = {:.4} s)", result.period.t1_s, result.period.t1_limit_s);
    println!("  Sa(T1)   = {:.4} g", bs.sa_t1);
    println!("  f        = {:.4}", bs.reduction_factor);
    println!("  C_min    = {:.4}", bs.c_min);
    println!("  C        = {:.4}", bs.c);
    println!("  V        = {:.2} {} ({:.2}% of W)", force(bs.base_shear_t), sym, bs.shear_weight_percent);
    println!("  Minimum:  {} {}", result.minimum_check_message(), status_icon(result.passes_minimum()));
    println!();
    println!("Force Distribution (k = {:.3}):", result.distribution.k);
    println!(
        "  {:>5} {:>8} {:>10} {:>12} {:>10} {:>7}",
        "Level",
        "Hi (m)",
        format!("Wi ({})", sym),
        "Wi·Hi^k",
        format!("Fi ({})", sym),
        "%V"
    );
    for level in result.distribution.levels.iter().rev() {
        println!(
            "  {:>5} {:>8.2} {:>10.2} {:>12.2} {:>10.3} {:>6.1}%",
            level.level,
            level.height_m,
            force(level.weight_t),
            level.weight_height_product,
            force(level.force_t),
            level.percent_of_base_shear
        );
    }
    let total_percent: f64 = result.distribution.levels.iter().map(|l| l.percent_of_base_shear).sum();
    println!(
        "  {:>5} {:>8} {:>10.2} {:>12} {:>10.3} {:>6.1}%",
        "TOTAL",
        "",
        force(input.total_weight_t),
        "",
        force(result.distribution.total_force_t()),
        total_percent
    );

    if !result.code_fallbacks.is_empty() {
        println!();
        println!("Warnings:");
        for fallback in &result.code_fallbacks {
            println!("  - {}", fallback);
        }
    }
}

fn report_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[C_min]" }
}

use std::fs;
use std::path::Path;

use clap::Parser;

use filelint::cli::{CheckArgs, Cli, ColorChoice, Commands, InitArgs};
use filelint::config::{Config, ConfigLoader, EnvOverrides, FileConfigLoader};
use filelint::engine::{CheckEngine, RunReport};
use filelint::output::{
    ColorMode, GithubFormatter, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use filelint::resolver::PathResolver;
use filelint::{EXIT_CONFIG_ERROR, EXIT_FINDINGS, EXIT_SUCCESS, FilelintError};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> filelint::Result<i32> {
    // 1. Load configuration
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Apply hosting-environment inputs, then CLI argument overrides
    EnvOverrides::from_env().apply(&mut config);
    apply_cli_overrides(&mut config, args);

    if config.files.patterns.is_empty() {
        return Err(FilelintError::Config(
            "no file patterns given; pass patterns on the command line or set [files].patterns"
                .to_string(),
        ));
    }

    // 3. Resolve patterns to a deduplicated path set
    let resolver = PathResolver::new(&config.files.patterns, &config.files.exclude)?;
    let paths = resolver.resolve(Path::new("."));

    // 4. Run every enabled check over every file
    let engine = CheckEngine::new(&config.checks);
    let report = engine.run(&paths, cli.quiet);

    // 5. Format output
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(args.format, &report, color_mode, cli.verbose)?;

    // 6. Write output
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 7. Exit code is the aggregated run outcome
    if report.outcome().is_error() {
        Ok(EXIT_FINDINGS)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn load_config(path: Option<&Path>, no_config: bool) -> filelint::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }
    let loader = FileConfigLoader;
    match path {
        Some(p) => loader.load_from_path(p),
        None => loader.load(),
    }
}

fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if !args.patterns.is_empty() {
        config.files.patterns.clone_from(&args.patterns);
    }
    config.files.exclude.extend(args.exclude.iter().cloned());

    if args.no_encoding {
        config.checks.encoding = false;
    }
    if args.no_trailing_newline {
        config.checks.trailing_newline = false;
    }
    if args.no_trailing_whitespace {
        config.checks.trailing_whitespace = false;
    }
}

fn format_output(
    format: OutputFormat,
    report: &RunReport,
    color_mode: ColorMode,
    verbose: u8,
) -> filelint::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
        OutputFormat::Github => GithubFormatter.format(report),
    }
}

fn write_output(path: Option<&Path>, content: &str, quiet: bool) -> filelint::Result<()> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            Ok(())
        }
        None => {
            if !quiet {
                print!("{content}");
            }
            Ok(())
        }
    }
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> filelint::Result<()> {
    if args.output.exists() && !args.force {
        return Err(FilelintError::Config(format!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        )));
    }
    fs::write(&args.output, Config::TEMPLATE)?;
    println!("Created {}", args.output.display());
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

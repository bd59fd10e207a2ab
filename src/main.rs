use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tmuxfix::{
    find_config_file, generate_init_file, load_config, merge_fix_options, run,
    should_use_colors, CliFixOptions, Colors, Config, OutputContext, OutputMode, TmuxfixToml,
};

const EXIT_USAGE: u8 = 2;

#[derive(Parser)]
#[command(name = "tmuxfix")]
#[command(
    version,
    about = "Combine deprecated tmux -fg/-bg/-attr options into -style options"
)]
struct Cli {
    /// Existing tmux config to convert
    old_conf_path: Option<PathBuf>,

    /// Where to write the converted config [default: new.conf.tmux]
    new_conf_path: Option<PathBuf>,

    /// Check only (no output written), exit 1 if legacy options are found
    #[arg(short, long)]
    check: bool,

    /// Show changes in diff format
    #[arg(short, long)]
    diff: bool,

    /// Output only the destination path
    #[arg(short, long)]
    quiet: bool,

    /// List every consolidated option family
    #[arg(short, long)]
    verbose: bool,

    /// Always use colors
    #[arg(long, conflicts_with = "no_color")]
    color: bool,

    /// Never use colors
    #[arg(long)]
    no_color: bool,

    /// Generate a template tmuxfix.toml configuration file
    #[arg(long)]
    init: bool,

    /// Specify config file path (overrides auto-discovery)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let use_colors = should_use_colors(cli.color, cli.no_color);
    let colors = Colors::new(use_colors);

    if cli.init {
        return handle_init(&colors);
    }

    let Some(source) = cli.old_conf_path.as_deref() else {
        print_usage();
        return ExitCode::from(EXIT_USAGE);
    };

    let toml_config = load_configuration(&cli.config, cli.quiet, &colors);

    let cli_options = build_cli_options(&cli);
    let options = merge_fix_options(&cli_options, toml_config.as_ref().map(|c| &c.fix));

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if options.diff {
        OutputMode::Diff
    } else {
        OutputMode::Normal
    };

    let config = Config { check_only: cli.check };
    let ctx = OutputContext::new(output_mode, use_colors, options.verbose);

    convert(source, &options.output, &config, &ctx)
}

fn convert(source: &Path, destination: &Path, config: &Config, ctx: &OutputContext) -> ExitCode {
    match run(source, destination, config, ctx) {
        Ok(result) => {
            if config.check_only && result.has_legacy_options() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("{}Error:{} {e}", ctx.colors.error, ctx.colors.reset());
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!("Usage:");
    println!("  tmuxfix <old-conf-path> [new-conf-path]");
}

fn handle_init(colors: &Colors) -> ExitCode {
    match generate_init_file() {
        Ok(path) => {
            println!("Created {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}Error:{} {e}", colors.error, colors.reset());
            ExitCode::from(1)
        }
    }
}

fn load_configuration(
    explicit_path: &Option<PathBuf>,
    quiet: bool,
    colors: &Colors,
) -> Option<TmuxfixToml> {
    let config_path = explicit_path.clone().or_else(|| {
        std::env::current_dir()
            .ok()
            .and_then(|d| find_config_file(&d))
    });

    config_path.and_then(|p| match load_config(&p) {
        Ok(config) => {
            if !quiet {
                eprintln!("Using config: {}", p.display());
            }
            Some(config)
        }
        Err(e) => {
            eprintln!(
                "{}Warning:{} Failed to load {}: {}",
                colors.warning,
                colors.reset(),
                p.display(),
                e
            );
            None
        }
    })
}

fn build_cli_options(cli: &Cli) -> CliFixOptions {
    // Boolean flags in clap default to false, so false means "not set"
    // and leaves the config file value in effect.
    CliFixOptions {
        output: cli.new_conf_path.clone(),
        diff: cli.diff.then_some(true),
        verbose: cli.verbose.then_some(true),
    }
}

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use fontcustom::{
    generate_config_file_in, prepare, print_advisories, print_prepared, print_project,
    resolve_project, should_use_colors, FontForge, JsonManifest, OptionLayer, Overrides,
    PathSpec, Reporter, TemplateResolver,
};

#[derive(Parser)]
#[command(name = "fontcustom")]
#[command(version, about = "Collect and check the options for an icon font build")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the resolved options and paths without touching anything
    Show(BuildArgs),

    /// Check for fontforge, resolve everything and record it in the manifest
    Prepare(BuildArgs),

    /// Generate a template fontcustom.yml
    Config {
        /// Directory to write fontcustom.yml into (default: current directory)
        dir: Option<PathBuf>,
    },
}

#[derive(Args)]
struct BuildArgs {
    /// Directory containing vectors (overrides `input` in fontcustom.yml)
    input: Option<String>,

    /// Config file, or directory containing fontcustom.yml
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory all relative paths are resolved against (default: current directory)
    #[arg(long, value_name = "DIR")]
    project_root: Option<PathBuf>,

    /// Output directory for every generated file
    #[arg(short, long, value_name = "DIR")]
    output: Option<String>,

    /// Name of the generated font
    #[arg(short = 'n', long, value_name = "NAME")]
    font_name: Option<String>,

    /// Prefix for generated CSS classes
    #[arg(long, value_name = "PREFIX")]
    css_prefix: Option<String>,

    /// Template shorthand or custom template file name (repeatable)
    #[arg(short, long = "templates", value_name = "TEMPLATE")]
    templates: Vec<String>,

    /// Don't append a content hash to font file names
    #[arg(long)]
    no_hash: bool,

    /// Font path used by preprocessor templates
    #[arg(long, value_name = "PATH")]
    preprocessor_path: Option<String>,

    /// Print extra detail, including every vector found
    #[arg(long)]
    debug: bool,

    /// Only print errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let use_colors = should_use_colors(cli.no_color);

    match cli.command {
        Command::Config { dir } => handle_config(dir, use_colors),
        Command::Show(args) => handle_show(&args, use_colors),
        Command::Prepare(args) => handle_prepare(&args, use_colors),
    }
}

fn handle_config(dir: Option<PathBuf>, use_colors: bool) -> ExitCode {
    let reporter = Reporter::new(use_colors, false, false);
    match generate_config_file_in(dir.as_deref()) {
        Ok(path) => {
            println!("Created {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            reporter.error(&e.to_string());
            ExitCode::from(1)
        }
    }
}

fn handle_show(args: &BuildArgs, use_colors: bool) -> ExitCode {
    let reporter = Reporter::new(use_colors, args.quiet, args.debug);
    let overrides = match build_overrides(args) {
        Ok(overrides) => overrides,
        Err(e) => {
            reporter.error(&e);
            return ExitCode::from(1);
        }
    };

    match resolve_project(&overrides, &TemplateResolver::default()) {
        Ok(project) => {
            let reporter = Reporter {
                quiet: project.options.quiet,
                verbose: project.options.debug,
                ..reporter
            };
            print_advisories(&project, &reporter);
            print_project(&project, &reporter);
            ExitCode::SUCCESS
        }
        Err(e) => {
            reporter.error(&e.with_sources());
            ExitCode::from(1)
        }
    }
}

fn handle_prepare(args: &BuildArgs, use_colors: bool) -> ExitCode {
    let reporter = Reporter::new(use_colors, args.quiet, args.debug);
    let overrides = match build_overrides(args) {
        Ok(overrides) => overrides,
        Err(e) => {
            reporter.error(&e);
            return ExitCode::from(1);
        }
    };

    match prepare(
        &overrides,
        &TemplateResolver::default(),
        &FontForge,
        &JsonManifest,
    ) {
        Ok(prepared) => {
            let reporter = Reporter {
                quiet: prepared.project.options.quiet,
                verbose: prepared.project.options.debug,
                ..reporter
            };
            print_advisories(&prepared.project, &reporter);
            print_prepared(&prepared, &reporter);
            ExitCode::SUCCESS
        }
        Err(e) => {
            reporter.error(&e.with_sources());
            ExitCode::from(1)
        }
    }
}

fn build_overrides(args: &BuildArgs) -> Result<Overrides, String> {
    let cwd = std::env::current_dir()
        .map_err(|e| format!("couldn't determine the current directory: {e}"))?;
    let project_root = args
        .project_root
        .as_ref()
        .map_or_else(|| cwd.clone(), |root| cwd.join(root));

    // Only set options that were explicitly provided on CLI.
    // Boolean flags in clap are always present (default false), so we
    // treat false as "not set" for proper merging with the config file.
    let options = OptionLayer {
        input: args.input.as_deref().map(PathSpec::from),
        output: args.output.as_deref().map(PathSpec::from),
        font_name: args.font_name.clone(),
        css_prefix: args.css_prefix.clone(),
        templates: (!args.templates.is_empty()).then(|| args.templates.clone()),
        hash: args.no_hash.then_some(false),
        preprocessor_path: args.preprocessor_path.clone(),
        debug: args.debug.then_some(true),
        quiet: args.quiet.then_some(true),
    };

    Ok(Overrides {
        project_root,
        config: args.config.clone(),
        options,
    })
}

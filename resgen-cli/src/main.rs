use clap::{Parser, Subcommand};
use resgen_cli::batch::{BatchOptions, run_batch_command};
use resgen_cli::check::run_check_command;
use resgen_cli::config::{TranspileFlags, load_config, resolve_transpile};
use resgen_cli::logging::init_logging;
use resgen_cli::transpile::run_transpile_command;
use resgen_cli::view::run_view_command;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a resource module from a properties file.
    Transpile {
        /// The properties file to read
        #[arg(short, long)]
        input: Option<String>,
        /// The module to write (.ts, .js, .mjs, .cjs or .json)
        #[arg(short, long)]
        output: Option<String>,
        /// Name of the generated object
        #[arg(long)]
        object_name: Option<String>,
        /// Comment placed at the top of the generated file
        #[arg(long)]
        header: Option<String>,
        /// Do not append `export default <object>;`
        #[arg(long)]
        no_export: bool,
        /// Fail on non-blank lines without `=`
        #[arg(long)]
        strict: bool,
        /// Create missing parent directories of the output
        #[arg(long)]
        create_dirs: bool,
        /// Configuration file (defaults to ./resgen.toml when present)
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Generate one module per locale file matched by a glob pattern.
    Batch {
        /// Glob pattern, e.g. 'res/Cres_*.properties'
        #[arg(short, long)]
        input: String,
        /// Directory receiving res_<lang>.<ext> files
        #[arg(long)]
        out_dir: String,
        /// Extension of the generated files
        #[arg(long, default_value = "ts")]
        extension: String,
        /// Only process these languages (repeatable)
        #[arg(long = "lang")]
        languages: Vec<String>,
        /// Fail on non-blank lines without `=`
        #[arg(long)]
        strict: bool,
        /// Create the output directory if missing
        #[arg(long)]
        create_dirs: bool,
        /// Configuration file supplying object name, header and export settings
        #[arg(short, long)]
        config: Option<String>,
    },

    /// View the entries of a properties file.
    View {
        /// The properties file to view
        #[arg(short, long)]
        input: String,
        /// Display full value without truncation
        #[arg(long)]
        full: bool,
        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report duplicate keys, invalid identifiers and other suspicious lines.
    Check {
        /// The properties file to check
        #[arg(short, long)]
        input: String,
        /// Print diagnostics as JSON
        #[arg(long)]
        json: bool,
    },
}

fn fail(message: String) -> ! {
    tracing::error!("{}", message);
    std::process::exit(1);
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.commands {
        Commands::Transpile {
            input,
            output,
            object_name,
            header,
            no_export,
            strict,
            create_dirs,
            config,
        } => {
            let config = load_config(config.as_deref()).unwrap_or_else(|e| fail(e));
            let flags = TranspileFlags {
                input,
                output,
                object_name,
                header,
                no_export,
                strict,
                create_dirs,
            };
            if let Err(e) = run_transpile_command(&flags, &config) {
                fail(format!("Error when generating resources: {}", e));
            }
        }
        Commands::Batch {
            input,
            out_dir,
            extension,
            languages,
            strict,
            create_dirs,
            config,
        } => {
            let config = load_config(config.as_deref()).unwrap_or_else(|e| fail(e));
            let flags = TranspileFlags {
                strict,
                create_dirs,
                ..Default::default()
            };
            let options = BatchOptions {
                out_dir,
                extension: extension.trim_start_matches('.').to_string(),
                languages,
                transpile: resolve_transpile(&flags, &config).options,
            };
            if let Err(e) = run_batch_command(&input, &options) {
                fail(format!("Error when generating resources: {}", e));
            }
        }
        Commands::View { input, full, json } => {
            if let Err(e) = run_view_command(&input, full, json) {
                fail(e);
            }
        }
        Commands::Check { input, json } => match run_check_command(&input, json) {
            Ok(diagnostics) if !diagnostics.is_empty() => std::process::exit(1),
            Ok(_) => {}
            Err(e) => fail(e),
        },
    }
}

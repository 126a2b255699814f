//! API Schema CLI
//!
//! Command-line interface for inferring endpoint schemas from JSON samples.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use api_schema::{
    infer, load_sample, load_sample_auto, render_tree, EndpointDraft, EndpointError, FieldInput,
    HttpMethod, Kind, SchemaTarget,
};

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "API_SCHEMA_LOG";

#[derive(Parser)]
#[command(name = "api-schema")]
#[command(about = "Infer API endpoint schemas from sample JSON payloads")]
#[command(version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(long, short, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Infer a schema from a sample JSON object
    Infer {
        /// Sample file (stdin if omitted or "-")
        sample: Option<String>,

        /// Wrap output as the endpoint's request schema
        #[arg(long, conflicts_with = "response")]
        request: bool,

        /// Wrap output as the endpoint's response schema
        #[arg(long, conflicts_with = "request")]
        response: bool,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Print an indented field tree instead of JSON
        #[arg(long, conflicts_with_all = ["request", "response", "pretty"])]
        tree: bool,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Build an endpoint from samples and manual fields
    Endpoint {
        /// Endpoint path (e.g., /users/{id})
        #[arg(long)]
        path: String,

        /// HTTP method
        #[arg(long, short, default_value = "GET")]
        method: String,

        /// Endpoint description
        #[arg(long, default_value = "")]
        description: String,

        /// Sample file for the request schema
        #[arg(long)]
        request_sample: Option<PathBuf>,

        /// Sample file for the response schema
        #[arg(long)]
        response_sample: Option<PathBuf>,

        /// Manual field: target:name:kind[:bound[:enum,values]]
        /// (bound is maxLength for strings, maxItems for arrays)
        #[arg(long = "field", value_name = "SPEC")]
        fields: Vec<String>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    let result = match cli.command {
        Commands::Infer {
            sample,
            request,
            response,
            pretty,
            tree,
            output,
        } => run_infer(InferArgs {
            sample,
            target: if request || response {
                Some(SchemaTarget::from_request_flag(request))
            } else {
                None
            },
            pretty,
            tree,
            output,
        }),

        Commands::Endpoint {
            path,
            method,
            description,
            request_sample,
            response_sample,
            fields,
            pretty,
            output,
        } => run_endpoint(EndpointArgs {
            path,
            method,
            description,
            request_sample,
            response_sample,
            fields,
            pretty,
            output,
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

fn init_tracing(quiet: bool, verbose: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    // A subscriber may already be installed when embedded; logging is best effort.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

struct InferArgs {
    sample: Option<String>,
    target: Option<SchemaTarget>,
    pretty: bool,
    tree: bool,
    output: Option<PathBuf>,
}

fn run_infer(args: InferArgs) -> Result<(), u8> {
    let InferArgs {
        sample,
        target,
        pretty,
        tree,
        output,
    } = args;

    let text = load_sample_auto(sample.as_deref()).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let schema = infer(&text).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let rendered = if tree {
        render_tree(&schema)
    } else {
        match target {
            Some(target) => {
                let mut wrapped = serde_json::Map::new();
                let value = serde_json::to_value(&schema).map_err(|e| {
                    eprintln!("Error serializing output: {}", e);
                    2u8
                })?;
                wrapped.insert(target.slot_key().to_string(), value);
                to_json(&wrapped, pretty)?
            }
            None => to_json(&schema, pretty)?,
        }
    };

    write_output(output.as_deref(), &rendered)
}

struct EndpointArgs {
    path: String,
    method: String,
    description: String,
    request_sample: Option<PathBuf>,
    response_sample: Option<PathBuf>,
    fields: Vec<String>,
    pretty: bool,
    output: Option<PathBuf>,
}

fn run_endpoint(args: EndpointArgs) -> Result<(), u8> {
    let EndpointArgs {
        path,
        method,
        description,
        request_sample,
        response_sample,
        fields,
        pretty,
        output,
    } = args;

    let method = HttpMethod::parse(&method).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;
    if path.trim().is_empty() {
        let e = EndpointError::EmptyPath;
        eprintln!("Error: {}", e);
        return Err(e.exit_code() as u8);
    }

    let mut endpoint = EndpointDraft::new(method, path).description(description);

    let samples = [
        (SchemaTarget::Request, request_sample),
        (SchemaTarget::Response, response_sample),
    ];
    for (target, sample) in samples {
        let Some(sample) = sample else { continue };
        let text = load_sample(&sample).map_err(|e| {
            eprintln!("Error: {}", e);
            e.exit_code() as u8
        })?;
        endpoint.import_sample(target, &text).map_err(|e| {
            eprintln!("Error in {}: {}", sample.display(), e);
            e.exit_code() as u8
        })?;
    }

    for spec in &fields {
        let (target, input) = parse_field_spec(spec).map_err(|msg| {
            eprintln!("Error: invalid field \"{}\": {}", spec, msg);
            2u8
        })?;
        let entry = input.parse().map_err(|e| {
            eprintln!("Error: invalid field \"{}\": {}", spec, e);
            e.exit_code() as u8
        })?;
        endpoint.add_field(target, &entry).map_err(|e| {
            eprintln!("Error: invalid field \"{}\": {}", spec, e);
            e.exit_code() as u8
        })?;
    }

    let rendered = to_json(&endpoint, pretty)?;
    write_output(output.as_deref(), &rendered)
}

/// Split `target:name:kind[:bound[:enum,values]]` into form values.
fn parse_field_spec(spec: &str) -> Result<(SchemaTarget, FieldInput), String> {
    let mut parts = spec.splitn(5, ':');
    let target = parts.next().unwrap_or_default();
    let target = SchemaTarget::parse(target)
        .ok_or_else(|| format!("unknown target \"{}\": expected request or response", target))?;
    let name = parts.next().ok_or("missing field name")?;
    let kind = parts.next().ok_or("missing field type")?;
    let bound = parts.next().unwrap_or_default();
    let enum_values = parts.next().unwrap_or_default();

    let mut input = FieldInput {
        name: name.to_string(),
        kind: kind.to_string(),
        enum_values: enum_values.to_string(),
        ..FieldInput::default()
    };
    if Kind::parse(kind) == Some(Kind::Array) {
        input.max_items = bound.to_string();
    } else {
        input.max_length = bound.to_string();
    }
    Ok((target, input))
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, u8> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| {
        eprintln!("Error serializing output: {}", e);
        2u8
    })
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), u8> {
    match output {
        Some(path) => {
            std::fs::write(path, content).map_err(|e| {
                eprintln!("Error writing to {}: {}", path.display(), e);
                3u8
            })?;
        }
        None => {
            if content.ends_with('\n') {
                print!("{}", content);
            } else {
                println!("{}", content);
            }
        }
    }
    Ok(())
}

//! gantry: typed decoding for captured Gantry REST payloads.
//!
//! Reads a JSON payload (file or stdin), applies the generated conversion
//! metadata for a named contract type, and prints the decoded payload.
//! Lenient by default: bad fields stay raw and are reported on stderr.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use gantry_core::MetaRegistry;

/// Exit codes: 0 clean, 1 conversion failure, 2 usage or input error.
const EXIT_CONVERSION: i32 = 1;
const EXIT_USAGE: i32 = 2;

#[derive(Parser)]
#[command(
    name = "gantry",
    version,
    about = "Typed decoding for captured Gantry REST payloads"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a JSON payload as a registered contract type
    Decode {
        /// Contract type name, e.g. ConnectionData
        #[arg(long = "type", value_name = "TYPE")]
        type_name: String,
        /// Payload file; stdin when omitted
        file: Option<PathBuf>,
        /// Abort on the first conversion failure instead of degrading
        #[arg(long)]
        strict: bool,
        /// Treat the top level as a list of TYPE
        #[arg(long)]
        collection: bool,
        /// Pretty-print the decoded payload
        #[arg(long)]
        pretty: bool,
    },
    /// List registered contract types and their converted fields
    Types,
    /// List registered enums, show one's member table, or describe a value
    Enums {
        /// Enum name, e.g. InheritLevel; all enums are listed when omitted
        name: Option<String>,
        /// Numeric value to describe; flag combinations decompose
        #[arg(long)]
        value: Option<i64>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let registry = match gantry_contracts::standard_registry() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(EXIT_USAGE);
        }
    };

    let code = match cli.command {
        Commands::Decode {
            type_name,
            file,
            strict,
            collection,
            pretty,
        } => cmd_decode(&registry, &type_name, file.as_deref(), strict, collection, pretty),
        Commands::Types => cmd_types(&registry),
        Commands::Enums { name, value } => cmd_enums(&registry, name.as_deref(), value),
    };
    process::exit(code);
}

fn read_payload(file: Option<&Path>) -> io::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn cmd_decode(
    registry: &MetaRegistry,
    type_name: &str,
    file: Option<&Path>,
    strict: bool,
    collection: bool,
    pretty: bool,
) -> i32 {
    if registry.type_meta(type_name).is_none() {
        eprintln!("error: unknown contract type '{type_name}' (see `gantry types`)");
        return EXIT_USAGE;
    }

    let raw = match read_payload(file) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("error: cannot read payload: {e}");
            return EXIT_USAGE;
        }
    };
    let mut payload: serde_json::Value = match serde_json::from_str(&raw) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("error: payload is not valid JSON: {e}");
            return EXIT_USAGE;
        }
    };

    let report = if strict {
        let result = if collection {
            registry.decode_collection_as_strict(&mut payload, type_name)
        } else {
            registry.decode_as_strict(&mut payload, type_name)
        };
        match result {
            Ok(report) => report,
            Err(e) => {
                eprintln!("error: {e}");
                return EXIT_CONVERSION;
            }
        }
    } else if collection {
        registry.decode_collection_as(&mut payload, type_name)
    } else {
        registry.decode_as(&mut payload, type_name)
    };

    for err in &report.errors {
        eprintln!("warning: {err}");
    }
    for mismatch in &report.mismatches {
        eprintln!("warning: {mismatch}");
    }

    let rendered = if pretty {
        serde_json::to_string_pretty(&payload)
    } else {
        serde_json::to_string(&payload)
    };
    match rendered {
        Ok(out) => {
            println!("{out}");
            0
        }
        Err(e) => {
            eprintln!("error: cannot render decoded payload: {e}");
            EXIT_USAGE
        }
    }
}

fn cmd_types(registry: &MetaRegistry) -> i32 {
    for name in registry.type_names() {
        println!("{name}");
        if let Some(meta) = registry.type_meta(name) {
            for (field, rule) in meta.fields() {
                println!("  {field}: {}", rule.describe());
            }
        }
    }
    0
}

fn cmd_enums(registry: &MetaRegistry, name: Option<&str>, value: Option<i64>) -> i32 {
    let Some(name) = name else {
        if value.is_some() {
            eprintln!("error: --value requires an enum name");
            return EXIT_USAGE;
        }
        for name in registry.enum_names() {
            println!("{name}");
        }
        return 0;
    };
    let Some(meta) = registry.enum_meta(name) else {
        eprintln!("error: unknown enum '{name}'");
        return EXIT_USAGE;
    };
    match value {
        Some(v) => {
            println!("{}", meta.describe(v));
            0
        }
        None => {
            for (member, v) in meta.members() {
                println!("{member} = {v}");
            }
            0
        }
    }
}

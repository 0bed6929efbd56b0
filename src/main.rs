mod cli;

use clap::Parser;
use filekit::{FileNode, Result};
use regex::Regex;
use tracing_subscriber::EnvFilter;

fn run() -> Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::List(cmd) => {
            let recursive = !cmd.no_recursive;
            if cmd.flat || cmd.skip.is_some() {
                let listing = match &cmd.skip {
                    Some(pattern) => {
                        let skip = Regex::new(pattern)?;
                        filekit::list_files_with_path_filtered(&cmd.path, recursive, "", &skip)
                    }
                    None => filekit::list_files_with_path(&cmd.path, recursive),
                };
                match cmd.format {
                    cli::ListFormat::Text => {
                        for path in &listing {
                            println!("{path}");
                        }
                    }
                    cli::ListFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&listing)?);
                    }
                }
            } else {
                let nodes = filekit::list_files(&cmd.path, recursive);
                match cmd.format {
                    cli::ListFormat::Text => print_tree(&nodes, 0),
                    cli::ListFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&nodes)?);
                    }
                }
            }
            Ok(())
        }
        cli::Commands::Fill(cmd) => {
            let pairs = parse_replacements(&cmd.set)?;
            let borrowed = pairs
                .iter()
                .map(|(placeholder, value)| (placeholder.as_str(), value.as_str()))
                .collect::<Vec<_>>();
            let filled = filekit::fill_template(&cmd.template, &borrowed)?;
            print!("{filled}");
            Ok(())
        }
    }
}

fn print_tree(nodes: &[FileNode], depth: usize) {
    for node in nodes {
        println!("{}{}", "  ".repeat(depth), node.name());
        if let FileNode::Directory { children, .. } = node {
            print_tree(children, depth + 1);
        }
    }
}

fn parse_replacements(pairs: &[String]) -> Result<Vec<(String, String)>> {
    pairs
        .iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(placeholder, value)| (placeholder.to_string(), value.to_string()))
                .ok_or_else(|| filekit::FilekitError::InvalidReplacement(pair.clone()))
        })
        .collect()
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("filekit={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

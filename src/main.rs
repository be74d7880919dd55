//! Dirgate - Entry Point
//!
//! Wires configuration, logging, and the two services together, then
//! drives a single operation against the served tree in place of the
//! external transport.

use log::info;
use std::env;
use std::io::Write;
use std::process;
use std::sync::Arc;

use dirgate::access::RuleEvaluator;
use dirgate::config::ServerConfig;
use dirgate::error::ServerError;
use dirgate::packing::KeySigner;
use dirgate::{ContentService, LocalStorage, MetadataService};

const USAGE: &str = "usage: dirgate stat <path> | list <pattern> [requester] | get <reference>";

fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), ServerError> {
    let config = ServerConfig::load()?;
    info!("Serving {} as {}", config.server_root, config.principal);

    let signer = KeySigner::from_seed_file(&config.signing_key_file)?;
    let storage = Arc::new(LocalStorage::new(config.server_root_path()));
    let metadata = MetadataService::new(
        config.principal.clone(),
        Arc::clone(&storage),
        RuleEvaluator,
        signer,
    );
    let content = ContentService::new(storage);

    match args {
        [cmd, name] if cmd == "stat" => {
            let entry = metadata.lookup(name)?;
            println!("{entry:#?}");
        }
        [cmd, pattern] if cmd == "list" => {
            for entry in metadata.list(None, pattern)? {
                println!("{}", entry.name);
            }
        }
        [cmd, pattern, requester] if cmd == "list" => {
            for entry in metadata.list(Some(requester), pattern)? {
                println!("{}", entry.name);
            }
        }
        [cmd, reference] if cmd == "get" => {
            let result = content.fetch(reference)?;
            std::io::stdout().write_all(&result.data)?;
        }
        _ => {
            eprintln!("{USAGE}");
            process::exit(2);
        }
    }

    Ok(())
}

//! Bill server entry point.
//!
//! No argument parsing: configuration is read from `legis.toml` in the
//! current directory when present, defaults otherwise. The server seeds
//! its in-memory store with the startup bill and then serves the
//! retrieval API until the process is stopped.
//!
//! Exit codes:
//! - 0: never reached while serving
//! - 1: startup error (config unreadable, seeding or bind failure)

use std::env;
use std::process;
use std::thread;

use legis_base::pal::http::HttpServerConfig;
use legis_base::tracing::init_tracing;
use legis_base::{FilePath, PalHandle, RealPal};
use legis_engine::store::{MemStore, StoreHandle};
use legis_engine::{ApiService, Config, load_config, seed_store};

fn main() {
    init_tracing().unwrap();

    let current_dir = env::current_dir().unwrap_or_else(|e| {
        eprintln!("Error: Failed to get current directory: {}", e);
        process::exit(1);
    });

    let pal = PalHandle::new(RealPal::new(current_dir));

    let config_path = FilePath::from("legis.toml");
    let config = match pal.file_exists(&config_path) {
        Ok(true) => match load_config(&pal, &config_path) {
            Ok(config) => {
                println!("Configuration loaded: {}", config.title);
                config
            }
            Err(e) => {
                eprintln!("Error: Failed to load config from legis.toml: {}", e);
                process::exit(1);
            }
        },
        Ok(false) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to check for legis.toml: {}", e);
            process::exit(1);
        }
    };

    let store = StoreHandle::new(MemStore::new());
    let bill = match seed_store(&store) {
        Ok(bill) => bill,
        Err(e) => {
            eprintln!("Error: Failed to seed bill store: {}", e);
            process::exit(1);
        }
    };
    println!("Seeded bill: {}", bill.title());

    let service = ApiService::new(store);
    let server_config = HttpServerConfig::new(config.host.clone())
        .with_port(config.port)
        .with_server_name(config.title.clone());

    let handle = match pal.start_http_server(Box::new(service), server_config) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Error: Failed to start HTTP server: {}", e);
            process::exit(1);
        }
    };

    println!("Listening on http://{}", handle.address(&config.host));

    // The handle must stay alive; dropping it shuts the server down.
    loop {
        thread::park();
    }
}

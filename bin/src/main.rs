mod build_pages;
mod config;

use std::{path::PathBuf, process::exit, time::Instant};

use log::error;
use persistance::fs::{config::read_config_from, utils::get_config_location};
use www::server;

#[tokio::main]
async fn main() {
    pretty_env_logger::init();
    let args = std::env::args().skip(1).collect::<Vec<String>>();
    let mut build_all = false;
    for arg in args.iter() {
        match arg.as_str() {
            "-v" | "--version" => return print_version(),
            "-h" | "--help" => return print_help(),
            "-b" | "--build" => build_all = true,
            "-i" | "--init" => {
                let (_, config_file) = get_config_location();
                if let Err(e) = config::install(&config_file) {
                    error!("{}", e);
                    exit(1);
                }
                println!("Config written to {:?}", config_file);
                return;
            }
            _ => {
                if arg.starts_with('-') {
                    eprintln!("unknown option: {}", arg);
                    exit(1);
                }
            }
        }
    }
    let (_, config_file) = get_config_location();
    let config = match read_config_from(&config_file) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            eprintln!("Run `baolog --init` to create a config.");
            exit(1);
        }
    };
    if build_all {
        let now = Instant::now();
        let out_dir = PathBuf::from("./public");
        if let Err(e) = build_pages::build(&config, &out_dir).await {
            error!("could not write static pages: {}", e);
            exit(1);
        }
        println!("Built static pages in: {}ms", now.elapsed().as_millis());
    } else if let Err(e) = server(config).await {
        error!("{}", e);
        exit(1);
    }
}

fn print_version() {
    println!("baolog v{}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        "\nConfig file found at \x1b[38;5;47m{:#?}\x1b[0m\n",
        get_config_location().1
    );
    print!(
        "Usage: baolog [options]
        Options:
        -i, --init                   Write a default config and options file
        -b, --build                  Render the home and sponsor pages to ./public
        -v, --version                Print version.
        -h, --help                   Show this message.

        Set BAOLOG_CONFIG to use a config file outside the default location.
        Set RUST_LOG=info to see request logs.
        ",
    );
}

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use shared::domain::Route;
use tracing_subscriber::EnvFilter;

mod config;
mod driver;
mod output;
mod views;

use config::{apply_args, load_settings, DEFAULT_CONFIG_PATH};
use driver::{run_script, App};
use output::{format_failure, format_transcript};

#[derive(Parser, Debug)]
#[command(name = "desktop", version, about = "Layered screen demo")]
struct Args {
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[arg(long, help = "Route to start on (view1 or view2)")]
    initial_route: Option<Route>,
    #[arg(long, help = "Button clicks performed on the first screen")]
    clicks: Option<usize>,
    #[arg(long, help = "Output machine-readable JSON")]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(&args.config)?;
    apply_args(&mut settings, args.initial_route, args.clicks);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .with_writer(std::io::stderr)
        .init();

    let app = App::new(&settings);
    match run_script(&app, settings.clicks) {
        Ok(transcript) => println!("{}", format_transcript(args.json, &transcript)?),
        Err(err) => {
            if args.json {
                println!("{}", format_failure(&err)?);
            }
            return Err(err.into());
        }
    }

    Ok(())
}

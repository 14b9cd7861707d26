use clap::Parser;
use log::{error, info};

use invest::cli::{Cli, Command, run_projection};

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

#[tokio::main]
async fn main() {
    init_logger();
    let cli = Cli::parse();

    match cli.command {
        Command::Serve { host, port } => {
            info!("starting investment API on {host}:{port}");
            if let Err(e) = invest::api::run_http_server(&host, port).await {
                error!("Server error: {e}");
                std::process::exit(1);
            }
        }
        Command::Project { args, format } => match run_projection(args, format) {
            Ok(output) => print!("{output}"),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(e.exit_code());
            }
        },
    }
}

use clap::Parser;
use dotenvy::dotenv;
use homologa::cli::{Cli, run};
use homologa::logging;

#[tokio::main]
async fn main() {
    dotenv().ok();
    logging::init_tracing();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        // Only the top-level message reaches the user.
        eprintln!("{err}");
        std::process::exit(1);
    }
}

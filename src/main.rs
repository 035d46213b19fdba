use clap::Parser;

mod cfg;
mod cli;
mod notify;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    let args = cli::Args::parse();
    if let Err(err) = cli::run(args).await {
        log::error!("{err}");
        std::process::exit(1);
    }
}

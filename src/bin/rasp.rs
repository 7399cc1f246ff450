use rea_rasp_scraper::rasp::{
    errors::RaspError,
    models::{Args, Config},
    run_tool::run,
    transport::Origin,
};

use clap::Parser;
use log::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), RaspError> {
    let args = Args::parse();

    /* Setup logging, stdout is kept for the JSON result */
    env_logger::builder()
        .target(env_logger::Target::Stderr)
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let config = Config::load(&args.config_json_path)?;
    info!(
        "Read config from {}, talking to {}",
        args.config_json_path.display(),
        config.base_url
    );
    let origin = Origin::from_config(&config)?;

    let output = run(&origin, &args.command).await?;
    println!("{}", output);
    Ok(())
}

use clap::Parser;
use zeroinstall_model::cli::{self, Cli};
use zeroinstall_model::config::{self, Config};
use zeroinstall_model::logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&config::config_path())?;
    let _guard = logging::init(&config.logging)?;

    let output = cli::run(cli.command, &config)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

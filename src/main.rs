use anyhow::Context;
use clap::Parser;
use facility_locator::core::ConfigProvider;
use facility_locator::utils::{logger, validation::Validate};
use facility_locator::{
    app, CliConfig, HttpFacilitySource, LocatorApp, TerminalDocument, TerminalMap, TomlConfig,
};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting facility-locator");
    tracing::debug!("CLI config: {:?}", cli);

    let config: Box<dyn ConfigProvider> = match &cli.config {
        Some(path) => {
            let mut toml_config = TomlConfig::from_file(path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            toml_config.apply_cli_overrides(&cli);
            exit_on_invalid(&toml_config);
            Box::new(toml_config)
        }
        None => {
            exit_on_invalid(&cli);
            Box::new(cli.clone())
        }
    };

    let source = HttpFacilitySource::from_config(config.as_ref())
        .context("creating HTTP client")?;
    tracing::info!("Facilities endpoint: {}", source.endpoint());

    let mut locator = LocatorApp::new(
        source,
        TerminalMap::new(std::io::stdout()),
        TerminalDocument::new(std::io::stdout()),
        config.map_settings(),
        config.view_settings(),
    )
    .with_filter(config.initial_filter());

    locator.reload().await;

    if cli.interactive {
        println!("{}", app::session::HELP);
        let stdin = BufReader::new(tokio::io::stdin());
        app::run_session(&mut locator, stdin, &mut std::io::stdout()).await?;
    }

    Ok(())
}

fn exit_on_invalid(config: &impl Validate) {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

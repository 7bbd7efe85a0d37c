use clap::Parser;
use colored::*;

mod cli;
mod ui;

use askcmd::ai::context::ShellContext;
use askcmd::{logging, CommandGenerator, Config, Result};
use cli::Cli;
use ui::create_spinner;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init_logging(if cli.debug { "debug" } else { "warn" });

    if let Err(e) = run(&cli).await {
        let kind = e.kind();
        eprintln!("{} {}", kind.prefix().red().bold(), e);
        std::process::exit(kind.exit_code());
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let mut config = Config::load()?;

    // CLI 옵션이 설정 파일/환경 변수보다 우선
    if let Some(provider) = &cli.provider {
        config.provider = provider.clone();
    }
    if let Some(model) = &cli.model {
        config.override_model(model)?;
    }

    let generator = CommandGenerator::from_config(&config)?;

    let prompt = cli.prompt_text();
    let context = cli
        .context
        .clone()
        .unwrap_or_else(|| ShellContext::detect().to_string());

    if cli.show_payload {
        println!("{}", generator.provider().build_payload(&prompt, &context)?);
        return Ok(());
    }

    let spinner = create_spinner(&format!(
        "Generating command with {}...",
        generator.provider().name()
    ));
    let result = generator.generate(&prompt, &context).await;
    spinner.finish_and_clear();

    println!("{}", result?);
    Ok(())
}

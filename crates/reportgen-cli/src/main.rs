use clap::Parser;
use eyre::{Result, WrapErr};
use tracing::{error, info};

use reportgen::cli::{Cli, CloudArgs, Command, LocalArgs};
use reportgen::config::Settings;
use reportgen::logging;
use reportgen::pipeline::cloud::{CloudRun, run_cloud};
use reportgen::pipeline::local::{LocalRun, run_local};
use reportgen_core::models::prompt::{DEFAULT_GUIDE_TOPIC, DEFAULT_REPORT_TOPIC};
use reportgen_core::output_names;
use reportgen_export::pdf::WeasyPrintRenderer;
use reportgen_google::GoogleClient;
use reportgen_google::auth::ServiceAccountKey;
use reportgen_openai::{OpenAiClient, OpenAiConfig};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init(cli.json_logs);

    let settings = Settings::from_env()
        .inspect_err(|e| error!(error = %e, "environment is not configured"))?;

    let service_account = settings
        .load_service_account()
        .inspect_err(|e| error!(error = %e, "service account key is unusable"))?;

    let openai = OpenAiClient::new(openai_config(&settings));

    match cli.command.unwrap_or(Command::Local(LocalArgs::default())) {
        Command::Local(args) => local(&settings, &openai, args),
        Command::Cloud(args) => cloud(&settings, &service_account, &openai, args),
    }
}

fn openai_config(settings: &Settings) -> OpenAiConfig {
    let mut config = OpenAiConfig::new(settings.openai_api_key.clone());
    if let Some(base_url) = &settings.openai_base_url {
        config.base_url = base_url.clone();
    }
    if let Some(model) = &settings.text_model {
        config.text_model = model.clone();
    }
    if let Some(model) = &settings.image_model {
        config.image_model = model.clone();
    }
    config
}

fn local(settings: &Settings, openai: &OpenAiClient, args: LocalArgs) -> Result<()> {
    let mut paths = settings.paths.clone();
    if let Some(template) = args.template {
        paths.template = template;
    }
    if let Some(output_dir) = args.output_dir {
        paths.save_folder = output_dir;
    }

    let renderer = match &settings.weasyprint_bin {
        Some(bin) => WeasyPrintRenderer::new(bin),
        None => WeasyPrintRenderer::default(),
    };

    let topic = args.prompt.as_deref().unwrap_or(DEFAULT_REPORT_TOPIC);
    let run = LocalRun {
        topic,
        image_prompt: args.image_prompt.as_deref(),
        paths: &paths,
        at: output_names::now(),
    };

    info!(topic, "starting local report pipeline");
    run_local(openai, openai, &renderer, &run);
    Ok(())
}

fn cloud(
    settings: &Settings,
    service_account: &ServiceAccountKey,
    openai: &OpenAiClient,
    args: CloudArgs,
) -> Result<()> {
    let google = GoogleClient::connect(service_account)
        .inspect_err(|e| error!(error = %e, "Google API authentication failed"))
        .wrap_err("authenticating with the Google APIs")?;

    let topic = args.prompt.as_deref().unwrap_or(DEFAULT_GUIDE_TOPIC);
    let run = CloudRun {
        topic,
        doc_id: &settings.document_id,
        export_dir: &settings.paths.export_dir,
        cleanup: args.cleanup,
    };

    info!(topic, doc_id = %settings.document_id, "starting document pipeline");
    run_cloud(openai, &google, &google, &run);
    Ok(())
}

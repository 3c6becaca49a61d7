use std::{fs, process, sync::Arc};

use stima::{
    application::{error::AppError, research::ResearchService},
    config,
    domain::report,
    infra::{
        error::InfraError,
        http::{HttpState, build_router},
        telemetry,
        upstream::MessagesClient,
    },
};
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| AppError::unexpected(format!("failed to load configuration: {err}")))?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Serve(Box::<config::ServeArgs>::default()));

    match command {
        config::Command::Serve(_) => run_serve(settings).await,
        config::Command::Format(args) => run_format(&args),
    }
}

async fn run_serve(settings: config::Settings) -> Result<(), AppError> {
    telemetry::init(&settings.logging).map_err(AppError::from)?;

    let client = MessagesClient::new(&settings.upstream)
        .map_err(|err| AppError::from(InfraError::configuration(err.to_string())))?;
    let research = Arc::new(ResearchService::new(Arc::new(client)));

    let router = build_router(HttpState { research });

    let listener = tokio::net::TcpListener::bind(settings.server.addr)
        .await
        .map_err(|err| AppError::unexpected(format!("failed to bind listener: {err}")))?;

    info!(
        target = "stima::serve",
        addr = %settings.server.addr,
        model = %settings.upstream.model,
        "Console listening"
    );

    axum::serve(listener, router.into_make_service())
        .await
        .map_err(|err| AppError::unexpected(format!("server error: {err}")))?;

    Ok(())
}

/// Render a raw report file to markup on stdout, bypassing the upstream.
fn run_format(args: &config::FormatArgs) -> Result<(), AppError> {
    let raw = fs::read_to_string(&args.file).map_err(|err| {
        AppError::unexpected(format!("failed to read `{}`: {err}", args.file.display()))
    })?;
    println!("{}", report::format(&raw));
    Ok(())
}

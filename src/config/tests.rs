use clap::Parser;

use super::*;

#[test]
fn defaults_resolve_to_local_console() {
    let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");

    assert_eq!(settings.server.addr.to_string(), "127.0.0.1:8081");
    assert_eq!(settings.logging.level, LevelFilter::INFO);
    assert!(matches!(settings.logging.format, LogFormat::Compact));
    assert_eq!(settings.upstream.base_url, DEFAULT_UPSTREAM_BASE_URL);
    assert_eq!(settings.upstream.model, DEFAULT_UPSTREAM_MODEL);
    assert_eq!(settings.upstream.max_tokens, DEFAULT_UPSTREAM_MAX_TOKENS);
    assert_eq!(settings.upstream.timeout.as_secs(), DEFAULT_UPSTREAM_TIMEOUT_SECS);
}

#[test]
fn cli_overrides_take_highest_precedence() {
    let mut raw = RawSettings::default();
    raw.server.port = Some(4000);
    raw.logging.level = Some("info".to_string());

    let overrides = ServeOverrides {
        server_port: Some(4321),
        log_level: Some("debug".to_string()),
        upstream_model: Some("claude-test".to_string()),
        ..Default::default()
    };

    raw.apply_serve_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.server.addr.port(), 4321);
    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
    assert_eq!(settings.upstream.model, "claude-test");
}

#[test]
fn cli_json_logging_enforces_format() {
    let mut raw = RawSettings::default();
    let overrides = ServeOverrides {
        log_json: Some(true),
        ..Default::default()
    };

    raw.apply_serve_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert!(matches!(settings.logging.format, LogFormat::Json));
}

#[test]
fn upstream_base_url_drops_trailing_slash() {
    let mut raw = RawSettings::default();
    raw.upstream.base_url = Some("https://gateway.example/".to_string());

    let settings = Settings::from_raw(raw).expect("valid settings");
    assert_eq!(settings.upstream.base_url, "https://gateway.example");
}

#[test]
fn zero_port_is_rejected() {
    let mut raw = RawSettings::default();
    raw.server.port = Some(0);

    let err = Settings::from_raw(raw).expect_err("invalid port");
    assert!(matches!(err, LoadError::Invalid { key: "server.port", .. }));
}

#[test]
fn out_of_range_temperature_is_rejected() {
    let mut raw = RawSettings::default();
    raw.upstream.temperature = Some(1.5);

    let err = Settings::from_raw(raw).expect_err("invalid temperature");
    assert!(matches!(
        err,
        LoadError::Invalid { key: "upstream.temperature", .. }
    ));
}

#[test]
fn default_to_serve_command() {
    let args = CliArgs::parse_from(["stima"]);
    let command = args
        .command
        .unwrap_or(Command::Serve(Box::<ServeArgs>::default()));
    assert!(matches!(command, Command::Serve(_)));
}

#[test]
fn parse_serve_overrides() {
    let args = CliArgs::parse_from([
        "stima",
        "serve",
        "--server-host",
        "0.0.0.0",
        "--upstream-base-url",
        "https://gateway.example",
        "--upstream-timeout-seconds",
        "30",
    ]);

    match args.command.expect("serve command") {
        Command::Serve(serve) => {
            assert_eq!(serve.overrides.server_host.as_deref(), Some("0.0.0.0"));
            assert_eq!(
                serve.overrides.upstream_base_url.as_deref(),
                Some("https://gateway.example")
            );
            assert_eq!(serve.overrides.upstream_timeout_seconds, Some(30));
        }
        _ => panic!("wrong command parsed"),
    }
}

#[test]
fn parse_format_arguments() {
    let args = CliArgs::parse_from(["stima", "format", "/tmp/report.txt"]);

    match args.command.expect("format command") {
        Command::Format(format) => {
            assert_eq!(format.file, std::path::Path::new("/tmp/report.txt"));
        }
        _ => panic!("wrong command parsed"),
    }
}

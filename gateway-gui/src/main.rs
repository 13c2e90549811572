#![windows_subsystem = "windows"]

use std::{error::Error, io::Write, process, sync::Arc};

use iced::{Settings, Size};
use tracing::error;

use dash_gateway_gui::{
    app::{
        config::{Config, ConfigError},
        App,
    },
    args::{parse_args, usage, Arg},
    dir::GatewayDirectory,
    logger::{parse_log_level, setup_logger},
    services::gateway::GatewayClient,
    VERSION,
};
use gateway_ui::component::text;

const DEFAULT_GATEWAY_URL: &str = "http://127.0.0.1:8000/";

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect())?;
    let datadir = match args.as_slice() {
        [] => GatewayDirectory::new_default()?,
        [Arg::DatadirPath(datadir)] => datadir.clone(),
        [Arg::Version] => {
            eprintln!("{}", VERSION);
            process::exit(0);
        }
        [Arg::Help] => {
            eprintln!("{}", usage("dash-gateway", VERSION));
            process::exit(0);
        }
        _ => {
            return Err("Unknown args combination".into());
        }
    };

    datadir.init()?;
    let config = match Config::from_file(&datadir.config_file()) {
        Ok(config) => config,
        Err(ConfigError::NotFound) => {
            let config = Config::new(DEFAULT_GATEWAY_URL.to_string());
            config.to_file(&datadir.config_file())?;
            eprintln!(
                "Wrote a default configuration to {}",
                datadir.config_file().display()
            );
            config
        }
        Err(e) => return Err(e.into()),
    };

    let log_level = match parse_log_level()? {
        Some(level) => level,
        None => config.log_level()?,
    };
    setup_logger(log_level, &datadir)?;
    setup_panic_hook();

    let backend = Arc::new(GatewayClient::new(config.gateway_url()?));

    let settings = Settings {
        id: Some("DashGateway".to_string()),
        default_text_size: text::P1_SIZE.into(),
        ..Default::default()
    };

    let window_settings = iced::window::Settings {
        size: Size::new(900.0, 700.0),
        min_size: Some(Size::new(500.0, 500.0)),
        ..Default::default()
    };

    if let Err(e) = iced::application(App::title, App::update, App::view)
        .theme(|_| iced::Theme::Dark)
        .subscription(App::subscription)
        .settings(settings)
        .window(window_settings)
        .run_with(move || App::new(config, backend))
    {
        log::error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        let _ = std::io::stdout().flush();
        std::process::exit(1);
    }));
}

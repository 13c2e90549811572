use std::{error::Error, fmt::Display, path::PathBuf};

use crate::dir::GatewayDirectory;

/// Parsed command-line argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    DatadirPath(GatewayDirectory),
    Version,
    Help,
}

pub fn usage(app_name: &str, version: impl Display) -> String {
    format!(
        r#"
{app_name} {version}

Usage: {app_name} [OPTIONS]

Options:
    --datadir <PATH>    Path of the gateway client datadir
    -v, --version       Display {app_name} version
    -h, --help          Print help
        "#
    )
}

/// Parse command-line arguments, `args[0]` being the program name.
pub fn parse_args(args: Vec<String>) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();
    let mut iter = args.into_iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => res.push(Arg::Version),
            "--help" | "-h" => res.push(Arg::Help),
            "--datadir" => {
                if let Some(a) = iter.next() {
                    res.push(Arg::DatadirPath(GatewayDirectory::new(PathBuf::from(a))));
                } else {
                    return Err("missing arg to --datadir".into());
                }
            }
            unknown => return Err(format!("Unknown argument '{}'", unknown).into()),
        }
    }

    Ok(res)
}

// SPDX-License-Identifier: MPL-2.0
use showcase_clock::app::{self, paths, Flags};
use showcase_clock::error::Result;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
ShowcaseClock - digital/analog clock with a mini calendar

USAGE:
  showcase_clock [OPTIONS]

OPTIONS:
  -h, --help                 Print this help and exit
  --lang <ID>                UI language (e.g. en-US, fr)
  --config-dir <PATH>        Directory holding settings.toml
  --mode <digital|analog>    Initial clock mode
  --theme <NAME>             light, dark, blue, green or system

ENVIRONMENT:
  SHOWCASE_CLOCK_CONFIG_DIR  Config directory, overridden by --config-dir
  RUST_LOG                   Log filter (default: info)
";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    paths::init_cli_override(flags.config_dir.clone());

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags> {
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        mode: args.opt_value_from_str("--mode")?,
        theme: args.opt_value_from_str("--theme")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(flags)
}

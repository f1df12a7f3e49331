// SPDX-License-Identifier: MPL-2.0
use env_logger::{Builder, Target};
use iced_carousel::app::{self, paths, Flags};
use log::LevelFilter;

const HELP: &str = "\
Iced Carousel

USAGE:
  iced_carousel [OPTIONS] [SOURCE]

ARGS:
  [SOURCE]              Image directory, or JSON manifest path or URL

OPTIONS:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  --fallback <IMAGE>    Image shown when no slide loads
  --no-autoplay         Do not advance slides automatically
  -h, --help            Print this help
";

fn init_logger() {
    Builder::new()
        .target(Target::Stderr)
        .filter_level(LevelFilter::Warn)
        .filter_module("iced_carousel", LevelFilter::Info)
        .init();
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        fallback: args.opt_value_from_str("--fallback")?,
        no_autoplay: args.contains("--no-autoplay"),
        source: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };
    Ok(flags)
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}

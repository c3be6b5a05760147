use anyhow::{Context, Result};
use clap::{App as Cli, Arg};
use page_navigator::{app::App, config::Config, ui::Theme};

fn main() -> Result<()> {
    let matches = Cli::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Sets a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("theme")
                .short("t")
                .long("theme")
                .value_name("NAME")
                .help("Overrides the configured theme for this session")
                .possible_values(&Theme::available_themes())
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config
        .load(matches.value_of("config"))
        .context("Failed to load configuration")?;
    if let Some(theme) = matches.value_of("theme") {
        config.theme_name = Theme::resolve(theme)?.name.to_string();
    }

    App::start(config).context("Application exited with an error")?;
    Ok(())
}

use clap::Parser;
use directories::ProjectDirs;
use rolodex::api::{CmdMessage, RolodexApi};
use rolodex::config::RolodexConfig;
use rolodex::error::Result;
use rolodex::store::fs::FileStore;
use std::io;
use std::path::PathBuf;
use tracing::{debug, warn};

mod cli;
use cli::args::Cli;
use cli::logging::init_logging;
use cli::menu::Session;
use cli::print::print_messages;

const HOME_ENV: &str = "ROLODEX_HOME";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let home = resolve_home();
    let mut startup = Vec::new();
    let config = match RolodexConfig::load(&home) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "config unreadable, using defaults");
            startup.push(CmdMessage::warning(format!(
                "Ignoring unreadable config in {}: {}",
                home.display(),
                e
            )));
            RolodexConfig::default()
        }
    };

    let color = config.color && std::env::var_os("NO_COLOR").is_none();
    colored::control::set_override(color);

    let data_path = cli.file.unwrap_or_else(|| config.data_path(&home));
    debug!(home = %home.display(), store = %data_path.display(), "starting");

    let (api, opened) = RolodexApi::open(FileStore::new(data_path));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_messages(&mut out, &startup)?;

    let mut session = Session::new(api, stdin.lock(), out);
    session.report(&opened)?;
    session.run()?;
    Ok(())
}

fn resolve_home() -> PathBuf {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return PathBuf::from(home);
    }
    ProjectDirs::from("com", "rolodex", "rolodex")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

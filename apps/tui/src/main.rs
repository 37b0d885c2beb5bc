use clap::Parser;
use color_eyre::Result;
use grand_strategy_tui::app::App;
use grand_strategy_tui::cli::CliArgs;
use grand_strategy_tui::config::init_app_config;
use grand_strategy_tui::logging::init_logging;
use grand_strategy_tui::{event, terminal};

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = init_app_config()?;
    let _logger = init_logging(&config)?;

    let mut app = App::new(&config);

    // Piped output or an explicit flag gets the plain export
    if args.headless || !is_terminal() {
        return event::run_headless(&app, args.json);
    }

    let mut terminal = terminal::setup()?;
    let result = event::run(&mut terminal, &mut app);
    terminal::cleanup(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}

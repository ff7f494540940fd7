// dsplay: Data Structures Playground

use std::fs;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use simplelog::{ConfigBuilder, WriteLogger};

use dsplay::config::{self, CliOverrides};
use dsplay::playground::Playground;
use dsplay::presentation::render_plain;
use dsplay::script::run_script;
use dsplay::structure::StructureKind;
use dsplay::ui::App;

#[derive(Parser)]
#[command(
    name = "dsplay",
    version,
    about = "Animate stacks, queues and linked lists in the terminal"
)]
struct Args {
    /// Structure to start with (stack, queue, linked-list)
    #[arg(short, long)]
    structure: Option<StructureKind>,

    /// Path to config file (default: <config dir>/dsplay/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the log (default: dsplay.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Replay a script of intents without the TUI and print the result
    #[arg(long)]
    script: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Config errors are reported but never stop the playground
    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: {}; using defaults", e);
            config::PlaygroundConfig::default()
        }
    };

    let settings = config::resolve(
        &file_config,
        &CliOverrides {
            structure: args.structure,
            log_file: args.log_file.clone(),
            verbosity: args.verbose,
        },
    );

    // The TUI owns the terminal, so logs go to a file
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    match config::open_log_file(&settings.log_file) {
        Ok(log_file) => {
            let _ = WriteLogger::init(settings.log_level, log_config, log_file);
        }
        Err(e) => eprintln!("Warning: {}; logging disabled", e),
    }

    log::info!("dsplay starting with {}", settings.structure);
    log::debug!("Settings: {:?}", settings);

    let mut playground = Playground::new(settings.structure);

    if let Some(script_path) = &args.script {
        let source = fs::read_to_string(script_path)?;
        if let Err(e) = run_script(&mut playground, &source) {
            eprintln!("Script error in {}: {}", script_path.display(), e);
            std::process::exit(1);
        }
        print!("{}", render_plain(&playground.snapshot()));
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(playground, &settings);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("TUI error: {:?}", err);
        eprintln!("Error: {:?}", err);
    }

    log::info!("dsplay exiting");
    Ok(())
}

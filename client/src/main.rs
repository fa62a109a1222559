mod colors;
mod config;
mod terminal;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use tictactoe_common::render::run;
use tictactoe_common::{GameFlowController, RandomAgent, SessionRng, log, logger};

use terminal::{StdinInput, TerminalRenderer};
use ui::TicTacToeApp;

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    /// YAML config file. Defaults to tictactoe_config.yaml next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the computer player. Overrides the config file.
    #[arg(long)]
    seed: Option<u64>,

    /// Play in the terminal instead of opening a window.
    #[arg(long)]
    headless: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = config::get_config_manager(args.config).get_config()?;

    let rng = match args.seed.or(config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed: {}", rng.seed());

    let mut controller = GameFlowController::new(config.layout.clone(), RandomAgent::new(rng));

    if args.headless {
        let stdin = std::io::stdin();
        let mut input = StdinInput::new(stdin.lock(), config.layout);
        let mut renderer = TerminalRenderer::new(std::io::stdout());
        run(&mut controller, &mut input, &mut renderer)?;
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width as f32, config.window.height as f32])
            .with_resizable(false)
            .with_title("Tic Tac Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(|_cc| Ok(Box::new(TicTacToeApp::new(controller)))),
    )?;

    Ok(())
}

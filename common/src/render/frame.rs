use crate::board::{BOARD_SIZE, Cell, Mark};
use crate::controller::{Flow, GameFlowController, Outcome, Screen};
use crate::error::GameError;
use crate::log;

use super::{
    BACK_LABEL, InputSource, MAIN_MENU_LABEL, ONE_PLAYER_LABEL, PLAY_FIRST_LABEL,
    PLAY_SECOND_LABEL, RESTART_LABEL, Renderer, TWO_PLAYERS_LABEL,
};

/// Issues the draw commands for the controller's current screen. Reads state only,
/// so calling it repeatedly produces the same frame.
pub fn render_frame<R: Renderer + ?Sized>(controller: &GameFlowController, renderer: &mut R) {
    let layout = controller.layout();
    renderer.clear();

    match controller.screen() {
        Screen::MainMenu => {
            renderer.draw_button(layout.two_player_region, TWO_PLAYERS_LABEL);
            renderer.draw_button(layout.one_player_region, ONE_PLAYER_LABEL);
        }
        Screen::OnePlayerMenu => {
            renderer.draw_button(layout.play_first_region, PLAY_FIRST_LABEL);
            renderer.draw_button(layout.play_second_region, PLAY_SECOND_LABEL);
            renderer.draw_button(layout.back_region, BACK_LABEL);
        }
        Screen::Playing => draw_board(controller, renderer),
        Screen::GameOver => {
            draw_board(controller, renderer);
            if let Some(Outcome::Winner(mark, line)) = controller.outcome() {
                renderer.draw_winning_line(line, mark);
            }
            if let Some(text) = status_text(controller) {
                renderer.draw_status(&text);
            }
            renderer.draw_button(layout.menu_region, MAIN_MENU_LABEL);
            renderer.draw_button(layout.restart_region, RESTART_LABEL);
        }
    }

    renderer.present();
}

fn draw_board<R: Renderer + ?Sized>(controller: &GameFlowController, renderer: &mut R) {
    renderer.draw_grid_lines();
    let board = controller.board();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            match board.cell(row, col) {
                Some(Cell::X) => renderer.draw_mark(row, col, Mark::X),
                Some(Cell::O) => renderer.draw_mark(row, col, Mark::O),
                _ => {}
            }
        }
    }
}

pub fn status_text(controller: &GameFlowController) -> Option<String> {
    match controller.outcome()? {
        Outcome::Winner(mark, _) => Some(format!("{} wins", mark)),
        Outcome::Draw => Some("Draw".to_string()),
    }
}

/// Polls `input` until it quits or runs dry, redrawing after every event.
/// Only a broken session (`NoLegalMove`) is returned as an error.
pub fn run<I, R>(
    controller: &mut GameFlowController,
    input: &mut I,
    renderer: &mut R,
) -> Result<(), GameError>
where
    I: InputSource + ?Sized,
    R: Renderer + ?Sized,
{
    render_frame(controller, renderer);

    while let Some(event) = input.poll_event() {
        if controller.handle_event(event)? == Flow::Quit {
            log!("Shutting down");
            return Ok(());
        }
        render_frame(controller, renderer);
    }

    log!("Input closed, shutting down");
    Ok(())
}

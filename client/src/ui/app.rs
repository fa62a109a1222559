use eframe::egui;
use tictactoe_common::log;
use tictactoe_common::render::{EventQueue, InputSource, render_frame};
use tictactoe_common::{Flow, GameFlowController, UiEvent};

use super::EguiRenderer;

pub struct TicTacToeApp {
    controller: GameFlowController,
    events: EventQueue,
    origin: egui::Pos2,
    closing: bool,
}

impl TicTacToeApp {
    pub fn new(controller: GameFlowController) -> Self {
        Self {
            controller,
            events: EventQueue::default(),
            origin: egui::Pos2::ZERO,
            closing: false,
        }
    }

    fn collect_events(&mut self, ctx: &egui::Context) {
        let origin = self.origin;
        ctx.input(|i| {
            for event in &i.events {
                if let egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed: true,
                    ..
                } = event
                {
                    self.events.push(pointer_down(*pos, origin));
                }
            }
            if i.viewport().close_requested() {
                self.events.push(UiEvent::Quit);
            }
        });
    }

    fn process_events(&mut self, ctx: &egui::Context) {
        while let Some(event) = self.events.poll_event() {
            match self.controller.handle_event(event) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => {
                    self.close(ctx);
                    return;
                }
                Err(err) => {
                    log!("Game session aborted: {}", err);
                    self.close(ctx);
                    return;
                }
            }
        }
    }

    fn close(&mut self, ctx: &egui::Context) {
        self.closing = true;
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}

fn pointer_down(pos: egui::Pos2, origin: egui::Pos2) -> UiEvent {
    let local = pos - origin;
    UiEvent::PointerDown {
        x: local.x.floor() as i32,
        y: local.y.floor() as i32,
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.closing {
            self.collect_events(ctx);
            self.process_events(ctx);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let window = ui.max_rect();
                self.origin = window.min;
                let mut renderer = EguiRenderer::new(ui.painter(), window, self.controller.layout());
                render_frame(&self.controller, &mut renderer);
            });
    }
}

//! Main application for the tic-tac-toe GUI

use std::time::Instant;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, TopBottomPanel, Vec2};
use tracing::{debug, info};

use super::board_view::BoardView;
use super::theme::*;
use crate::config::Config;
use crate::session::{GameMode, GameSession};
use crate::Mark;

/// Which screen is showing
enum Screen {
    MainMenu,
    Playing(GameSession),
}

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    screen: Screen,
    board_view: BoardView,
    config: Config,
    show_debug: bool,
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        Self {
            screen: Screen::MainMenu,
            board_view: BoardView::default(),
            config,
            show_debug: false,
        }
    }

    fn start(&mut self, mode: GameMode) {
        info!(mode = mode.label(), "mode selected");
        self.screen = Screen::Playing(GameSession::new(mode, self.config, Instant::now()));
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("Main Menu").clicked() {
                        self.screen = Screen::MainMenu;
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Search Stats (D)");
                });

                if let Screen::Playing(session) = &self.screen {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(session.mode().label());
                    });
                }
            });
        });
    }

    fn render_main_menu(&mut self, ctx: &Context) {
        let mut choice = None;
        let mut exit = false;

        CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(60.0);
                    ui.label(RichText::new("Tic Tac Toe").size(32.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(40.0);

                    let size = Vec2::from(MENU_BUTTON_SIZE);
                    for mode in [GameMode::PlayerVsPlayer, GameMode::PlayerVsComputer] {
                        if ui
                            .add_sized(size, egui::Button::new(RichText::new(mode.label()).size(16.0)))
                            .clicked()
                        {
                            choice = Some(mode);
                        }
                        ui.add_space(12.0);
                    }
                    if ui
                        .add_sized(size, egui::Button::new(RichText::new("Exit").size(16.0)))
                        .clicked()
                    {
                        exit = true;
                    }
                });
            });

        if let Some(mode) = choice {
            self.start(mode);
        }
        if exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
    }

    fn render_game(&mut self, ctx: &Context) {
        let Screen::Playing(session) = &mut self.screen else {
            return;
        };
        let mut back_to_menu = false;

        TopBottomPanel::bottom("game_controls")
            .frame(Frame::new().fill(PANEL_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                Self::card_frame().show(ui, |ui| {
                    ui.horizontal(|ui| {
                        for mark in [Mark::X, Mark::O] {
                            let wins = session.scores().wins(mark);
                            ui.label(
                                RichText::new(format!("Player {mark}: {wins}"))
                                    .size(14.0)
                                    .color(mark_color(mark)),
                            );
                            ui.add_space(12.0);
                        }
                        ui.label(
                            RichText::new(format!("Draws: {}", session.scores().draws))
                                .size(12.0)
                                .color(TEXT_SECONDARY),
                        );
                    });
                });

                ui.add_space(6.0);
                let status_color = if session.is_computer_pending() {
                    STATUS_THINKING
                } else {
                    TEXT_PRIMARY
                };
                ui.label(RichText::new(session.status_line()).size(16.0).strong().color(status_color));

                if let Some(msg) = &session.message {
                    ui.label(RichText::new(msg).size(11.0).color(STATUS_MESSAGE));
                }

                if self.show_debug {
                    Self::render_debug(ui, session);
                }

                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    if ui.button("Reset").clicked() {
                        debug!("board reset");
                        session.reset(Instant::now());
                    }
                    if ui.button("Main Menu").clicked() {
                        back_to_menu = true;
                    }
                });
            });

        CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                let accept_input = !session.outcome().is_terminal() && !session.is_computer_turn();
                let clicked = self.board_view.show(
                    ui,
                    session.board(),
                    session.last_move(),
                    session.winning_line(),
                    accept_input,
                );

                if let Some(index) = clicked {
                    if let Err(err) = session.click(index, Instant::now()) {
                        session.message = Some(err.to_string());
                    }
                }
            });

        if back_to_menu {
            self.screen = Screen::MainMenu;
        }
    }

    fn render_debug(ui: &mut egui::Ui, session: &GameSession) {
        let Some(result) = session.last_ai_result() else {
            ui.label(RichText::new("No search yet").size(10.0).color(TEXT_MUTED));
            return;
        };
        ui.label(
            RichText::new(format!(
                "Score {} | {} nodes | depth {} | {}ms",
                result.score, result.nodes, result.depth, result.time_ms
            ))
            .size(10.0)
            .color(TEXT_MUTED),
        );
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (toggle_debug, reset) =
            ctx.input(|i| (i.key_pressed(egui::Key::D), i.key_pressed(egui::Key::N)));

        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
        if reset {
            if let Screen::Playing(session) = &mut self.screen {
                session.reset(Instant::now());
            }
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Fire a due computer move before drawing
        if let Screen::Playing(session) = &mut self.screen {
            let now = Instant::now();
            session.tick(now);
            if let Some(wait) = session.time_until_computer(now) {
                ctx.request_repaint_after(wait);
            }
        }

        self.render_menu_bar(ctx);
        if matches!(self.screen, Screen::MainMenu) {
            self.render_main_menu(ctx);
        } else {
            self.render_game(ctx);
        }
    }
}

//! Main application for the desktop board

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::game_state::{GameMode, Session};
use super::theme::*;
use crate::board::Player;
use crate::engine::IllegalMovePolicy;

/// Main Renju application
pub struct RenjuApp {
    session: Session,
    board_view: BoardView,
    policy: IllegalMovePolicy,
}

impl RenjuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, policy: IllegalMovePolicy) -> Self {
        Self {
            session: Session::new(GameMode::default(), policy),
            board_view: BoardView::default(),
            policy,
        }
    }

    fn new_game(&mut self, mode: GameMode) {
        self.session = Session::new(mode, self.policy);
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (vs Solver - First)").clicked() {
                        self.new_game(GameMode::VsSolver { human: Player::First });
                        ui.close_menu();
                    }
                    if ui.button("New Game (vs Solver - Second)").clicked() {
                        self.new_game(GameMode::VsSolver { human: Player::Second });
                        ui.close_menu();
                    }
                    if ui.button("New Game (Hotseat)").clicked() {
                        self.new_game(GameMode::Hotseat);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.session.undo();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.session.mode {
                        GameMode::VsSolver { human } => format!("vs Solver - You: {human}"),
                        GameMode::Hotseat => "Hotseat".to_string(),
                    };
                    let policy_text = match self.policy {
                        IllegalMovePolicy::RejectIllegal => "illegal moves refused",
                        IllegalMovePolicy::LoseOnIllegal => "illegal moves lose",
                    };
                    ui.label(format!("{mode_text} | {policy_text}"));
                });
            });
        });
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_FILL))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("RENJU").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if let Some(msg) = &self.session.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_FILL)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        let renju = &self.session.renju;
        Self::card_frame().show(ui, |ui| {
            let (stone, accent) = match renju.putter() {
                Player::First => (FIRST_STONE, FIRST_STONE_HIGHLIGHT),
                Player::Second => (SECOND_STONE, SECOND_STONE_SHADOW),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, stone);
                ui.painter().circle_stroke(rect.center(), 20.0, egui::Stroke::new(2.0, accent));
                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(renju.putter().to_string().to_uppercase())
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    let color = if renju.finished() { WIN_HIGHLIGHT } else { STATUS_OK };
                    ui.label(RichText::new(self.session.status()).size(12.0).color(color));
                });
            });

            ui.add_space(8.0);
            ui.label(RichText::new(format!("Turn {}", renju.turn())).size(11.0).color(TEXT_SECONDARY));
            ui.label(
                RichText::new(format!("{:.1}s", self.session.move_timer.elapsed().as_secs_f32()))
                    .size(11.0)
                    .color(TEXT_MUTED),
            );
            if let Some(last) = self.session.move_timer.last_move_duration {
                ui.label(
                    RichText::new(format!("Last move {:.1}s", last.as_secs_f32()))
                        .size(11.0)
                        .color(TEXT_MUTED),
                );
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Undo (U)").clicked() {
                    self.session.undo();
                }
                if ui.button("Hint (H)").clicked() {
                    self.session.request_suggestion();
                }
                if ui.button("New (N)").clicked() {
                    self.session.reset();
                }
            });
        });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(STATUS_WARN));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let accept_input = self.session.is_human_turn();
            let clicked = self.board_view.show(
                ui,
                &self.session.renju,
                self.session.suggested_move,
                accept_input,
            );

            if let Some(pos) = clicked {
                if let Err(msg) = self.session.try_place_stone(pos) {
                    self.session.message = Some(msg);
                }
            }
        });
    }

    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::H) {
                self.session.request_suggestion();
            }
            if i.key_pressed(egui::Key::U) {
                self.session.undo();
            }
            if i.key_pressed(egui::Key::N) {
                self.session.reset();
            }
        });
    }
}

impl eframe::App for RenjuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.session.play_solver_turn();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep the move timer ticking.
        if !self.session.renju.finished() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

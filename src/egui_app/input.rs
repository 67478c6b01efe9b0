use eframe::egui;

/// Key presses relevant to the experiment, captured once per frame.
#[derive(Clone, Copy, Debug, Default)]
pub(super) struct InputSnapshot {
    pub arrow_up: bool,
    pub arrow_down: bool,
    pub arrow_left: bool,
    pub arrow_right: bool,
    pub save: bool,
    pub quit: bool,
}

impl InputSnapshot {
    pub(super) fn capture(ctx: &egui::Context) -> Self {
        ctx.input(|i| Self {
            arrow_up: i.key_pressed(egui::Key::ArrowUp),
            arrow_down: i.key_pressed(egui::Key::ArrowDown),
            arrow_left: i.key_pressed(egui::Key::ArrowLeft),
            arrow_right: i.key_pressed(egui::Key::ArrowRight),
            save: i.key_pressed(egui::Key::S),
            quit: i.key_pressed(egui::Key::Q),
        })
    }
}

use egui::Color32;
pub const COLOR_TINT: Color32 = Color32::from_rgb(240, 100, 156);
pub const COLOR_TINT_ACTIVE: Color32 = Color32::from_rgb(131, 100, 144);
pub const SWATCH_STROKE: Color32 = Color32::from_gray(48);

pub fn init_styles(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.text_styles.insert(
        egui::TextStyle::Name("Subheading".into()),
        egui::FontId::new(12.0, egui::FontFamily::Proportional),
    );

    ctx.set_style(style);
}

pub trait RichTextExt {
    fn subheading(self) -> Self;
}

impl RichTextExt for egui::RichText {
    fn subheading(self) -> Self {
        self.text_style(egui::TextStyle::Name("Subheading".into()))
            .strong()
    }
}

// Extension trait for Ui to add convenient margin methods
pub trait UiMarginExt {
    fn subheading_with_margin(&mut self, text: &str);
}

impl UiMarginExt for egui::Ui {
    fn subheading_with_margin(&mut self, text: &str) {
        egui::Frame::NONE
            .inner_margin(egui::Margin {
                left: 0,
                right: 0,
                top: 6,
                bottom: 4,
            })
            .show(self, |ui| {
                ui.label(egui::RichText::new(text).subheading());
            });
    }
}

/// Tinted look for the primary action button of a scope.
pub fn apply_primary_button_style(ui: &mut egui::Ui) {
    ui.style_mut().spacing.button_padding = egui::vec2(10.0, 4.0);
    let style = &mut ui.style_mut();

    // Inactive state
    style.visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, Color32::WHITE);
    style.visuals.widgets.inactive.weak_bg_fill = COLOR_TINT;

    // Hovered state
    style.visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, COLOR_TINT_ACTIVE);
    style.visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, Color32::WHITE);
    style.visuals.widgets.hovered.weak_bg_fill = COLOR_TINT;

    // Active state
    style.visuals.widgets.active.bg_stroke = egui::Stroke::new(1.0, COLOR_TINT_ACTIVE);
    style.visuals.widgets.active.fg_stroke = egui::Stroke::new(1.0, Color32::WHITE);
    style.visuals.widgets.active.weak_bg_fill = COLOR_TINT;
}

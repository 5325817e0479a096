use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

/// Shared color palette for the dark workspace theme.
#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent_blue: Color32,
    pub accent_indigo: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub destructive: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(12, 13, 16),
        bg_secondary: Color32::from_rgb(24, 26, 30),
        bg_tertiary: Color32::from_rgb(38, 41, 47),
        panel_outline: Color32::from_rgb(46, 50, 58),
        text_primary: Color32::from_rgb(200, 205, 214),
        text_muted: Color32::from_rgb(138, 144, 155),
        accent_blue: Color32::from_rgb(100, 160, 245),
        accent_indigo: Color32::from_rgb(148, 140, 245),
        success: Color32::from_rgb(102, 176, 136),
        warning: Color32::from_rgb(200, 148, 80),
        destructive: Color32::from_rgb(205, 92, 92),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.hyperlink_color = palette.accent_blue;
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.error_fg_color = palette.destructive;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.bg_fill = palette.bg_tertiary;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent_blue);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_widget_style(&mut visuals.widgets.inactive, palette);
    set_widget_style(&mut visuals.widgets.hovered, palette);
    set_widget_style(&mut visuals.widgets.active, palette);
    set_widget_style(&mut visuals.widgets.open, palette);
    visuals.window_corner_radius = CornerRadius::same(4);
    visuals.menu_corner_radius = CornerRadius::same(4);
    visuals.popup_shadow = Shadow::NONE;
    visuals.button_frame = true;
}

fn set_widget_style(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(4);
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.bg_secondary;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

pub fn outer_border() -> Stroke {
    let palette = palette();
    Stroke::new(1.0, palette.panel_outline)
}

pub fn card_fill() -> Color32 {
    palette().bg_secondary
}

pub fn row_fill() -> Color32 {
    palette().bg_tertiary
}

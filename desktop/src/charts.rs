use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke};

const HEIGHT: f32 = 180.0;
const AXIS: Color32 = Color32::from_gray(120);

/// Vertical bars scaled against `max`, one label under each.
pub fn bars(ui: &mut egui::Ui, values: &[f64], labels: &[String], max: f64, color: Color32) {
    let Some((rect, painter)) = canvas(ui, values) else {
        return;
    };
    let slot = rect.width() / values.len() as f32;
    for (i, value) in values.iter().enumerate() {
        let x = rect.left() + slot * i as f32;
        let top = y_for(rect, *value, max);
        let bar = Rect::from_min_max(
            Pos2::new(x + slot * 0.15, top),
            Pos2::new(x + slot * 0.85, rect.bottom()),
        );
        painter.rect_filled(bar, 2.0, color);
        painter.text(
            Pos2::new(x + slot / 2.0, top - 2.0),
            Align2::CENTER_BOTTOM,
            format!("{}", value.round()),
            FontId::proportional(11.0),
            ui.visuals().text_color(),
        );
        if let Some(label) = labels.get(i) {
            painter.text(
                Pos2::new(x + slot / 2.0, rect.bottom() + 2.0),
                Align2::CENTER_TOP,
                label,
                FontId::proportional(10.0),
                AXIS,
            );
        }
    }
}

/// A polyline through `values`, scaled against `max`.
pub fn line(ui: &mut egui::Ui, values: &[f64], max: f64, color: Color32) {
    let Some((rect, painter)) = canvas(ui, values) else {
        return;
    };
    let step = if values.len() > 1 {
        rect.width() / (values.len() - 1) as f32
    } else {
        0.0
    };
    let points: Vec<Pos2> = values
        .iter()
        .enumerate()
        .map(|(i, v)| Pos2::new(rect.left() + step * i as f32, y_for(rect, *v, max)))
        .collect();
    for pair in points.windows(2) {
        painter.line_segment([pair[0], pair[1]], Stroke::new(2.0, color));
    }
    for (point, value) in points.iter().zip(values) {
        painter.circle_filled(*point, 3.0, color);
        painter.text(
            *point - egui::vec2(0.0, 4.0),
            Align2::CENTER_BOTTOM,
            format!("{}", value.round()),
            FontId::proportional(11.0),
            ui.visuals().text_color(),
        );
    }
}

fn canvas(ui: &mut egui::Ui, values: &[f64]) -> Option<(Rect, egui::Painter)> {
    if values.is_empty() {
        return None;
    }
    let width = ui.available_width();
    let (outer, _) = ui.allocate_exact_size(egui::vec2(width, HEIGHT + 32.0), Sense::hover());
    let rect = Rect::from_min_max(
        outer.min + egui::vec2(8.0, 16.0),
        outer.max - egui::vec2(8.0, 16.0),
    );
    let painter = ui.painter_at(outer);
    painter.line_segment([rect.left_bottom(), rect.right_bottom()], Stroke::new(1.0, AXIS));
    Some((rect, painter))
}

fn y_for(rect: Rect, value: f64, max: f64) -> f32 {
    let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    rect.bottom() - rect.height() * ratio as f32
}

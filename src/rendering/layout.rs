/// Page geometry: physical measurements to pixels, and the box grid

use crate::SheetConfig;

pub const CM_PER_INCH: f64 = 2.54;

/// Convert a physical length to whole device pixels (truncating).
pub fn cm_to_px(cm: f64, dpi: u32) -> u32 {
    (cm * dpi as f64 / CM_PER_INCH).max(0.0) as u32
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Left,
    Right,
}

/// A single dashed cut-out cell
#[derive(Debug, Clone, PartialEq)]
pub struct LabelBox {
    pub rect: Rect,
    pub column: Column,
    /// Only the last row draws its bottom edge; the others share it with the
    /// top edge of the row below.
    pub closed_bottom: bool,
}

/// Lay out `config.rows` rows of a left and a right box, row major.
pub fn box_grid(config: &SheetConfig) -> Vec<LabelBox> {
    let dpi = config.page.dpi;
    let margin = config.margin_cm;
    let rows = config.rows.max(1);
    let row_h = (config.page.height_cm() - 2.0 * margin) / rows as f64;

    let left_x = margin;
    let right_x = config.page.width_cm() - margin - config.right_column_offset_cm;

    let px_rect = |x0: f64, y0: f64, x1: f64, y1: f64| {
        let (x, y) = (cm_to_px(x0, dpi), cm_to_px(y0, dpi));
        Rect {
            x,
            y,
            width: cm_to_px(x1, dpi).saturating_sub(x),
            height: cm_to_px(y1, dpi).saturating_sub(y),
        }
    };

    let mut boxes = Vec::with_capacity(rows as usize * 2);
    for i in 0..rows {
        let top = margin + i as f64 * row_h;
        let bottom = top + row_h;
        let closed_bottom = i == rows - 1;

        for (column, x0) in [(Column::Left, left_x), (Column::Right, right_x)] {
            boxes.push(LabelBox {
                rect: px_rect(x0, top, x0 + config.box_width_cm, bottom),
                column,
                closed_bottom,
            });
        }
    }
    boxes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cm_to_px_truncates() {
        assert_eq!(cm_to_px(10.0, 300), 1181);
        assert_eq!(cm_to_px(1.5, 300), 177);
        assert_eq!(cm_to_px(0.0, 300), 0);
    }

    #[test]
    fn grid_has_two_columns_of_twelve() {
        let boxes = box_grid(&SheetConfig::default());
        assert_eq!(boxes.len(), 24);
        assert_eq!(boxes.iter().filter(|b| b.column == Column::Left).count(), 12);
        assert_eq!(boxes[0].column, Column::Left);
        assert_eq!(boxes[1].column, Column::Right);
    }

    #[test]
    fn only_last_row_is_closed() {
        let boxes = box_grid(&SheetConfig::default());
        let (others, last_row) = boxes.split_at(22);
        assert!(others.iter().all(|b| !b.closed_bottom));
        assert!(last_row.iter().all(|b| b.closed_bottom));
    }

    #[test]
    fn columns_sit_inside_the_margins() {
        let cfg = SheetConfig::default();
        let boxes = box_grid(&cfg);
        let margin = cm_to_px(cfg.margin_cm, cfg.page.dpi);
        let left = &boxes[0].rect;
        let right = &boxes[1].rect;
        assert_eq!(left.x, margin);
        assert_eq!(right.x, cm_to_px(13.59, 300));
        assert!(right.right() < cfg.page.width_px());
        assert!(left.right() < right.x);
        assert_eq!(left.width, right.width);
    }

    #[test]
    fn rows_stack_without_gaps() {
        let cfg = SheetConfig::default();
        let boxes = box_grid(&cfg);
        for row in 1..cfg.rows as usize {
            let above = &boxes[2 * (row - 1)].rect;
            let below = &boxes[2 * row].rect;
            assert!(below.y.abs_diff(above.bottom()) <= 1);
        }
        let last = &boxes[23].rect;
        let bottom_margin = cfg.page.height_px() - last.bottom();
        assert!(bottom_margin >= cm_to_px(cfg.margin_cm, 300));
    }
}

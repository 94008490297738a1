//! Paint command set and the display list of a label sheet

use crate::rendering::layout::{box_grid, LabelBox};
use crate::SheetConfig;

const INK: [u8; 4] = [0, 0, 0, 255];

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Large label rotated a quarter turn and centered on the page
    Watermark {
        text: String,
        em_px: f32,
        pad: u32,
    },
    DashedLine {
        from: (f32, f32),
        to: (f32, f32),
        dash: f32,
        gap: f32,
        width: f32,
        rgba: [u8; 4],
    },
    /// Single line of text anchored at its middle
    Text {
        text: String,
        center: (f32, f32),
        em_px: f32,
        rgba: [u8; 4],
    },
}

/// Outline and caption commands for one box. Sides run top, right, bottom,
/// left; the bottom side is left out unless the box closes the grid.
pub fn box_commands(
    b: &LabelBox,
    label: &str,
    em_px: f32,
    config: &SheetConfig,
) -> Vec<PaintCommand> {
    let (x1, y1) = (b.rect.x as f32, b.rect.y as f32);
    let (x2, y2) = (b.rect.right() as f32, b.rect.bottom() as f32);

    let mut sides = vec![((x1, y1), (x2, y1)), ((x2, y1), (x2, y2))];
    if b.closed_bottom {
        sides.push(((x2, y2), (x1, y2)));
    }
    sides.push(((x1, y2), (x1, y1)));

    let mut cmds: Vec<PaintCommand> = sides
        .into_iter()
        .map(|(from, to)| PaintCommand::DashedLine {
            from,
            to,
            dash: config.dash_px,
            gap: config.gap_px,
            width: config.stroke_px,
            rgba: INK,
        })
        .collect();
    cmds.push(PaintCommand::Text {
        text: label.to_string(),
        center: b.rect.center(),
        em_px,
        rgba: INK,
    });
    cmds
}

/// Everything drawn on a sheet after the white background: the watermark
/// first, then every box of the grid.
pub fn display_list(label: &str, font_size: u32, config: &SheetConfig) -> Vec<PaintCommand> {
    let mut cmds = vec![PaintCommand::Watermark {
        text: label.to_string(),
        em_px: config.watermark_em_px,
        pad: config.watermark_pad_px,
    }];
    for b in box_grid(config) {
        cmds.extend(box_commands(&b, label, font_size as f32, config));
    }
    cmds
}

/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct with per-frame metrics
 * and draws them as a small text panel in the top-left corner.
 *
 * Includes metrics for:
 * - FPS (frames per second)
 * - Frame time
 * - Frames run by the background since it was mounted
 * - Edges and particles drawn in the last frame
 */

use nannou::prelude::*;
use std::time::Duration;

use crate::field::FrameStats;

#[derive(Debug, Default, Clone)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub frames: u64,
    pub last_frame: FrameStats,
    pub mounted: bool,
}

impl DebugInfo {
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Mounted: {}", if self.mounted { "yes" } else { "no" }),
            format!("Frames: {}", self.frames),
            format!("Particles: {}", self.last_frame.particles),
            format!("Edges: {}", self.last_frame.edges),
        ]
    }
}

// Draw debug information on the screen
pub fn draw_debug_info(draw: &Draw, debug_info: &DebugInfo, window_rect: Rect) {
    let lines = debug_info.lines();

    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 200.0;
    let panel_height = line_height * lines.len() as f32 + margin;
    let panel_x = window_rect.left() + panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    for (i, text) in lines.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // nannou centers text on its position, so shift it right of the margin
        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(WHITE)
            .font_size(14);
    }
}

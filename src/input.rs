/*
 * Input Module
 *
 * This module forwards window events to the mounted background.
 * nannou reports positions in centered, y-up window coordinates; the
 * field works in surface coordinates, so positions are converted here.
 *
 * Keys:
 * - Space: mount / unmount the background
 * - D: toggle the debug overlay
 */

use nannou::prelude::*;

use crate::app::{self, Model};
use crate::host::HostEvent;
use crate::surface::SurfaceSize;

// Window point -> surface point for the current window rectangle
pub fn to_surface_space(pos: Point2, window_rect: Rect) -> Vec2 {
    SurfaceSize::new(window_rect.w(), window_rect.h()).from_window(pos)
}

// Mouse moved event handler
pub fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    let position = to_surface_space(pos, app.window_rect());
    if let Some(background) = model.background.as_mut() {
        background.dispatch(&model.hub, HostEvent::PointerMoved(position));
    }
}

// Window resized event handler
pub fn resized(_app: &App, model: &mut Model, size: Vec2) {
    let size = SurfaceSize::new(size.x, size.y);
    if let Some(background) = model.background.as_mut() {
        background.dispatch(&model.hub, HostEvent::Resized(size));
    }
}

// Key pressed event handler
pub fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Space => app::toggle_background(app, model),
        Key::D => model.show_debug = !model.show_debug,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_center_maps_to_surface_center() {
        let rect = Rect::from_w_h(800.0, 600.0);
        assert_eq!(to_surface_space(pt2(0.0, 0.0), rect), vec2(400.0, 300.0));
    }

    #[test]
    fn top_left_corner_maps_to_origin() {
        let rect = Rect::from_w_h(800.0, 600.0);
        assert_eq!(to_surface_space(pt2(-400.0, 300.0), rect), vec2(0.0, 0.0));
    }
}

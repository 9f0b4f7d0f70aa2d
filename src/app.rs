/*
 * Application Module
 *
 * This module hosts the particle background in a nannou window. The
 * window plays the role of the page: its inner size is the viewport,
 * mouse movement is the pointer and nannou's update/view cycle is the
 * display refresh. Each update takes the pending frame request from the
 * event hub and lets the background record the frame into a draw list;
 * view then replays that list.
 */

use nannou::prelude::*;
use rand::rngs::ThreadRng;

use crate::background::ParticleBackground;
use crate::debug::DebugInfo;
use crate::host::EventHub;
use crate::input::{key_pressed, mouse_moved, resized};
use crate::params::FieldParams;
use crate::renderer::view;
use crate::surface::{DrawList, SurfaceSize};

pub const WINDOW_TITLE: &str = "Particle Background";
pub const DEFAULT_WINDOW_SIZE: (u32, u32) = (1280, 800);

// Main model for the application
pub struct Model {
    pub window: WindowId,
    pub hub: EventHub,
    pub background: Option<ParticleBackground>,
    pub draw_list: DrawList,
    pub params: FieldParams,
    pub debug_info: DebugInfo,
    pub show_debug: bool,
    rng: ThreadRng,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let (width, height) = DEFAULT_WINDOW_SIZE;

    let window = app
        .new_window()
        .title(WINDOW_TITLE)
        .size(width, height)
        .view(view)
        .mouse_moved(mouse_moved)
        .resized(resized)
        .key_pressed(key_pressed)
        .build()
        .expect("failed to create the main window");

    let mut model = Model {
        window,
        hub: EventHub::new(),
        background: None,
        draw_list: DrawList::new(),
        params: FieldParams::default(),
        debug_info: DebugInfo::default(),
        show_debug: false,
        rng: rand::thread_rng(),
    };
    mount_background(app, &mut model);
    model
}

// Current inner size of the window, if it is still open
pub fn viewport(app: &App, window: WindowId) -> Option<SurfaceSize> {
    app.window(window).map(|w| {
        let (width, height) = w.inner_size_points();
        SurfaceSize::new(width, height)
    })
}

fn mount_background(app: &App, model: &mut Model) {
    let viewport = viewport(app, model.window);
    // A failed mount leaves an empty window; nothing is retried
    let params = model.params.clone();
    model.background = match ParticleBackground::mount(&mut model.hub, viewport, params, &mut model.rng) {
        Ok(background) => Some(background),
        Err(err) => {
            tracing::warn!(error = %err, "particle background not mounted");
            None
        }
    };
    model.debug_info.mounted = model.background.is_some();
}

// Mount the background if it is absent, unmount it otherwise
pub fn toggle_background(app: &App, model: &mut Model) {
    match model.background.take() {
        Some(background) => {
            background.unmount(&mut model.hub);
            model.draw_list.reset();
            model.debug_info.mounted = false;
        }
        None => mount_background(app, model),
    }
}

// Update the model once per display refresh
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let Some(background) = model.background.as_mut() else {
        return;
    };
    if let Some(stats) = background.pump(&mut model.hub, &mut model.draw_list) {
        model.debug_info.last_frame = stats;
        model.debug_info.frames = background.frames();
    }
}

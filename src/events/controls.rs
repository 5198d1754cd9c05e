//! Playback controls: the file picker and the Play/Stop button.
//!
//! Transitions are transactional: the phase machine, the turntable, and the
//! button label only change after the audio side effect succeeded, so a
//! failed start or stop leaves everything exactly as it was.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use crate::audio::{self, AudioDeck};
use crate::constants::PLATTER_RAD_PER_SEC;
use crate::core::{Phase, PlayerError, Transport, Turntable};
use crate::dom;
use crate::notify;

pub const FILE_INPUT_ID: &str = "audio-file";
pub const PLAY_BUTTON_ID: &str = "play-pause";
pub const LABEL_PLAY: &str = "Play";
pub const LABEL_STOP: &str = "Stop";

#[derive(Clone)]
pub struct ControlsWiring {
    pub document: web::Document,
    pub transport: Rc<RefCell<Transport>>,
    pub turntable: Rc<RefCell<Turntable>>,
    pub deck: Rc<RefCell<AudioDeck>>,
}

pub fn wire_controls(w: ControlsWiring) {
    wire_file_input(&w);
    wire_play_button(&w);
}

fn halt_turntable(turntable: &Rc<RefCell<Turntable>>) {
    let mut t = turntable.borrow_mut();
    t.set_playing(false);
    t.set_velocity(0.0);
}

fn wire_file_input(w: &ControlsWiring) {
    let w = w.clone();
    let document = w.document.clone();
    dom::add_change_listener(&document, FILE_INPUT_ID, move |ev: web::Event| {
        let Some(file) = dom::selected_file(&ev) else {
            return;
        };
        // The token makes a slow decode that loses the race harmless: only
        // the newest request may apply its result.
        let token = w.transport.borrow_mut().begin_load();
        let ctx = match w.deck.borrow_mut().context() {
            Ok(ctx) => ctx,
            Err(e) => {
                notify::report(&e);
                return;
            }
        };
        let w = w.clone();
        spawn_local(async move {
            match audio::decode_file(&ctx, file).await {
                Ok(buffer) => {
                    if !w.transport.borrow_mut().finish_load(token) {
                        log::info!("[controls] discarding stale decode result");
                        return;
                    }
                    w.deck.borrow_mut().adopt_buffer(buffer);
                    halt_turntable(&w.turntable);
                    dom::set_text(&w.document, PLAY_BUTTON_ID, LABEL_PLAY);
                    log::info!("[controls] audio file loaded");
                }
                Err(e) => notify::report(&e),
            }
        });
    });
}

fn wire_play_button(w: &ControlsWiring) {
    let w = w.clone();
    let document = w.document.clone();
    dom::add_click_listener(&document, PLAY_BUTTON_ID, move || {
        let phase = w.transport.borrow().phase();
        match phase {
            Phase::Idle => {
                notify::report(&PlayerError::Playback("no audio file selected".into()));
            }
            Phase::Loaded => match w.deck.borrow_mut().start() {
                Ok(()) => {
                    w.transport.borrow_mut().commit_start();
                    {
                        let mut t = w.turntable.borrow_mut();
                        t.set_velocity(PLATTER_RAD_PER_SEC);
                        t.set_playing(true);
                    }
                    dom::set_text(&w.document, PLAY_BUTTON_ID, LABEL_STOP);
                    log::info!("[controls] playback started");
                }
                Err(e) => notify::report(&e),
            },
            Phase::Playing => match w.deck.borrow_mut().stop() {
                Ok(()) => {
                    w.transport.borrow_mut().commit_stop();
                    halt_turntable(&w.turntable);
                    dom::set_text(&w.document, PLAY_BUTTON_ID, LABEL_PLAY);
                    log::info!("[controls] playback stopped");
                }
                Err(e) => notify::report(&e),
            },
        }
    });
}

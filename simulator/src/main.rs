//! Modern analog watch face simulator for desktop.
//!
//! Runs the face against the embedded-graphics scene and shows it in an
//! embedded-graphics-simulator window.
//!
//! # Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | Left | swipe left (rotate the carousel) |
//! | Right / Up / Down | other swipes (ignored by the face) |
//! | B | toggle Bluetooth connection |
//! | N / M | add a notification / clear notifications |
//! | C | toggle charger |
//! | + / - | battery up / down |
//! | S | add steps |
//! | H | cycle heart-rate sensor state |
//! | T | toggle 12/24-hour display |
//! | F | toggle fast-forward |

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]

mod clock;
mod timing;

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{info, warn};
use modern_analog_face::assets::StaticAssets;
use modern_analog_face::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use modern_analog_face::scene::FACE_CAPACITY;
use modern_analog_face::sources::HeartRateState;
use modern_analog_face::{FaceOptions, Scene, SourceSnapshot, TouchEvent, WatchFace};

use crate::clock::{START, SimClock};
use crate::timing::FRAME_TIME;

const BATTERY_STEP: u8 = 5;
const STEPS_STEP: u32 = 250;
const SIMULATED_HEART_RATE: u8 = 72;

fn main() {
    env_logger::init();
    info!("Starting modern analog simulator");
    info!("Keys: Left=swipe  B=BLE  N/M=notifications  C=charger  +/-=battery  S=steps  H=heart  T=12/24h  F=fast");

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Modern Analog Sim", &output_settings);

    let assets = StaticAssets::complete();
    if !WatchFace::is_available(&assets) {
        warn!("face assets missing");
        return;
    }

    let mut clock = SimClock::new(START);
    let mut sources = SourceSnapshot {
        battery_percent: 80,
        step_count: 4_200,
        heart_rate: SIMULATED_HEART_RATE,
        ..SourceSnapshot::new(clock.now())
    };

    let mut scene: Scene<FACE_CAPACITY> = Scene::new();
    let mut face = WatchFace::new(&mut scene, &sources, &assets, FaceOptions::default());

    loop {
        let frame_start = Instant::now();

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => {
                    face.teardown(&mut scene);
                    info!("Simulator exiting");
                    return;
                }
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    let gesture = match keycode {
                        Keycode::Left => TouchEvent::SwipeLeft,
                        Keycode::Right => TouchEvent::SwipeRight,
                        Keycode::Up => TouchEvent::SwipeUp,
                        Keycode::Down => TouchEvent::SwipeDown,
                        _ => {
                            apply_key(keycode, &mut sources, &mut clock);
                            continue;
                        }
                    };
                    let handled = face.on_touch_event(&mut scene, &sources, gesture);
                    info!("{gesture:?}: {}", if handled { "handled" } else { "ignored" });
                }
                _ => {}
            }
        }

        sources.time = clock.tick();
        face.refresh(&mut scene, &sources);

        if scene.take_dirty()
            && let Err(e) = scene.draw(&mut display)
        {
            log::error!("Draw error: {:?}", e);
        }
        window.update(&display);

        let elapsed = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }
}

/// Apply a data-source key to the snapshot.
fn apply_key(
    keycode: Keycode,
    sources: &mut SourceSnapshot,
    clock: &mut SimClock,
) {
    match keycode {
        Keycode::B => sources.ble_connected = !sources.ble_connected,
        Keycode::N => sources.notification_count += 1,
        Keycode::M => sources.notification_count = 0,
        Keycode::C => sources.charging = !sources.charging,
        Keycode::Equals | Keycode::Plus | Keycode::KpPlus => {
            sources.battery_percent = sources.battery_percent.saturating_add(BATTERY_STEP).min(100);
        }
        Keycode::Minus | Keycode::KpMinus => {
            sources.battery_percent = sources.battery_percent.saturating_sub(BATTERY_STEP);
        }
        Keycode::S => sources.step_count += STEPS_STEP,
        Keycode::H => sources.heart_rate_state = next_heart_rate_state(sources.heart_rate_state),
        Keycode::T => sources.clock_type = sources.clock_type.toggle(),
        Keycode::F => {
            clock.toggle_fast_forward();
            info!("fast-forward: {}", if clock.is_fast_forward() { "on" } else { "off" });
        }
        _ => {}
    }
}

const fn next_heart_rate_state(state: HeartRateState) -> HeartRateState {
    match state {
        HeartRateState::Stopped => HeartRateState::NotEnoughData,
        HeartRateState::NotEnoughData => HeartRateState::Running,
        HeartRateState::Running => HeartRateState::NoTouch,
        HeartRateState::NoTouch => HeartRateState::Stopped,
    }
}

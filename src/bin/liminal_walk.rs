//! Liminal Walk - First-Person Map Walker
//!
//! Run with: `cargo run --bin liminal-walk [map.json]`
//!
//! Controls:
//! - Click: Capture the cursor (mouse-look active)
//! - Mouse: Look around
//! - WASD / Arrows: Move
//! - ESC: Release the cursor
//!
//! Pass `--dump-volumes` to print the extracted wall collision volumes as
//! JSON and exit without opening a window.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, DeviceId, ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode as WinitKey, PhysicalKey};
use winit::window::{CursorGrabMode, Window, WindowAttributes, WindowId};

use liminal_engine::input::{InputState, KeyCode};
use liminal_engine::scene::{MapLoader, load_map_file};
use liminal_engine::session::WalkSession;
use liminal_engine::collision::extract_wall_volumes;

const DEFAULT_MAP: &str = "demos/demo_map.json";

/// Map winit physical keys onto the engine's generic key codes.
fn translate_key(key: WinitKey) -> KeyCode {
    match key {
        WinitKey::KeyW => KeyCode::W,
        WinitKey::KeyA => KeyCode::A,
        WinitKey::KeyS => KeyCode::S,
        WinitKey::KeyD => KeyCode::D,
        WinitKey::ArrowUp => KeyCode::ArrowUp,
        WinitKey::ArrowDown => KeyCode::ArrowDown,
        WinitKey::ArrowLeft => KeyCode::ArrowLeft,
        WinitKey::ArrowRight => KeyCode::ArrowRight,
        WinitKey::Escape => KeyCode::Escape,
        _ => KeyCode::Unknown,
    }
}

struct WalkApp {
    window: Option<Arc<Window>>,
    session: WalkSession,
    input: InputState,
    loader: Option<MapLoader>,
    map_path: PathBuf,
    frame_count: u64,
}

impl WalkApp {
    fn new(map_path: PathBuf) -> Self {
        Self {
            window: None,
            session: WalkSession::new(),
            input: InputState::new(),
            loader: None,
            map_path,
            frame_count: 0,
        }
    }

    fn capture_cursor(&mut self) {
        if let Some(window) = &self.window {
            if window.set_cursor_grab(CursorGrabMode::Locked).is_err() {
                let _ = window.set_cursor_grab(CursorGrabMode::Confined);
            }
            window.set_cursor_visible(false);
        }
        self.input.pointer.set_captured(true);
    }

    fn release_cursor(&mut self) {
        if let Some(window) = &self.window {
            let _ = window.set_cursor_grab(CursorGrabMode::None);
            window.set_cursor_visible(true);
        }
        self.input.pointer.set_captured(false);
    }

    fn poll_loader(&mut self) {
        let Some(loader) = &mut self.loader else {
            return;
        };
        match loader.poll() {
            Some(Ok(scene)) => {
                self.session.complete_loading(&scene);
                self.loader = None;
            }
            Some(Err(error)) => {
                self.session.fail_loading(error);
                self.loader = None;
            }
            None => {}
        }
    }

    fn step_frame(&mut self) {
        self.poll_loader();

        let (dx, dy) = self.input.pointer.consume_delta();
        self.session.apply_look(dx, dy);
        self.session.frame(&self.input.keyboard);

        self.frame_count += 1;
        if self.frame_count % 120 == 0 {
            let pos = self.session.position();
            let o = self.session.orientation();
            log::debug!(
                "[Walk] pos ({:.2}, {:.2}, {:.2}) yaw {:.2} pitch {:.2}",
                pos.x,
                pos.y,
                pos.z,
                o.yaw,
                o.pitch
            );
        }
    }
}

impl ApplicationHandler for WalkApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = WindowAttributes::default()
                .with_title("Liminal Walk [Click: capture, ESC: release]")
                .with_inner_size(PhysicalSize::new(1280, 720));
            let window = Arc::new(event_loop.create_window(attrs).unwrap());
            self.window = Some(window);

            self.session.begin_loading();
            self.loader = Some(MapLoader::spawn(&self.map_path));
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    let pressed = event.state == ElementState::Pressed;
                    let key = translate_key(key);
                    if key == KeyCode::Escape && pressed {
                        self.release_cursor();
                        return;
                    }
                    self.input.keyboard.handle_key(key, pressed);
                }
            }
            WindowEvent::MouseInput { state, .. } => {
                if state == ElementState::Pressed && !self.input.pointer.is_captured() {
                    self.capture_cursor();
                }
            }
            WindowEvent::Focused(false) => {
                // Alt-tab releases capture; stale keys would keep the player
                // walking forever
                self.release_cursor();
                self.input.keyboard.reset();
            }
            WindowEvent::RedrawRequested => {
                self.step_frame();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn device_event(&mut self, _: &ActiveEventLoop, _: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.input
                .pointer
                .accumulate_delta(delta.0 as f32, delta.1 as f32);
        }
    }
}

fn dump_volumes(map_path: &Path) -> i32 {
    match load_map_file(map_path) {
        Ok(scene) => {
            let volumes = extract_wall_volumes(&scene);
            match serde_json::to_string_pretty(&volumes) {
                Ok(json) => {
                    println!("{}", json);
                    0
                }
                Err(e) => {
                    eprintln!("failed to serialize volumes: {}", e);
                    1
                }
            }
        }
        Err(e) => {
            eprintln!("failed to load {}: {}", map_path.display(), e);
            1
        }
    }
}

fn main() {
    env_logger::init();

    let mut map_path = PathBuf::from(DEFAULT_MAP);
    let mut dump = false;
    for arg in std::env::args().skip(1) {
        if arg == "--dump-volumes" {
            dump = true;
        } else {
            map_path = PathBuf::from(arg);
        }
    }

    if dump {
        std::process::exit(dump_volumes(&map_path));
    }

    println!("=== Liminal Walk ===");
    println!("Map: {}", map_path.display());
    println!("Click: capture cursor, WASD/Arrows: move, ESC: release, close window to exit");
    println!();

    let event_loop = EventLoop::new().unwrap();
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = WalkApp::new(map_path);
    event_loop.run_app(&mut app).unwrap();
}

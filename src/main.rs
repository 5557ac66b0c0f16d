use macroquad::prelude::*;

use alchemy_station::{window_conf, App};

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize logging
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    // Set panic hook for native builds to capture crash info
    #[cfg(not(target_arch = "wasm32"))]
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC: {}", panic_info);
        if let Some(location) = panic_info.location() {
            eprintln!("  at {}:{}:{}", location.file(), location.line(), location.column());
        }
    }));

    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let seed = (macroquad::miniquad::date::now() * 1000.0) as u64;
    let mut app = App::new(seed);

    loop {
        app.run_frame();
        next_frame().await;
    }
}

use macroquad::prelude::*;

mod config;
mod game;
mod ui;

fn window_conf() -> Conf {
    Conf {
        window_title: "Snake Chase".to_owned(),
        window_width: 1280,
        window_height: 720,
        ..Default::default()
    }
}

fn main() {
    macroquad::Window::from_config(window_conf(), game::r#loop::run());
}

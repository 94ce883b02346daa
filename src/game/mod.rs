pub mod collision;
pub mod draw;
pub mod food;
pub mod r#loop;
pub mod snake;
pub mod state;

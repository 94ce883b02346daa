use macroquad::prelude::*;

/// Start screen: title plus a START button. Draws one frame and returns
/// true the frame the button is clicked.
pub fn start_screen() -> bool {
    clear_background(Color::from_rgba(10, 12, 18, 255));
    let w = screen_width();
    let h = screen_height();

    let title = "SNAKE CHASE";
    let title_size = 56.0;
    let tw = measure_text(title, None, title_size as u16, 1.0).width;
    draw_text(title, (w - tw) * 0.5, h * 0.35, title_size, WHITE);
    draw_text(
        "Follow the pointer. Eat red, yellow and rainbow food. Avoid green.",
        w * 0.5 - 310.0,
        h * 0.35 + 40.0,
        20.0,
        Color::from_rgba(255, 255, 255, 180),
    );

    let btn_w = 180.0;
    let btn_h = 56.0;
    button_hit((w - btn_w) * 0.5, h * 0.5, btn_w, btn_h, "START")
}

fn button_hit(x: f32, y: f32, w: f32, h: f32, label: &str) -> bool {
    let hovered = {
        let (mx, my) = mouse_position();
        mx >= x && mx <= x + w && my >= y && my <= y + h
    };
    let pressed = hovered && is_mouse_button_pressed(MouseButton::Left);
    let col = if hovered {
        Color::from_rgba(90, 210, 255, 70)
    } else {
        Color::from_rgba(0, 0, 0, 60)
    };
    draw_rectangle(x, y, w, h, col);
    draw_rectangle_lines(x, y, w, h, 2.0, Color::from_rgba(255, 255, 255, 50));
    let lw = measure_text(label, None, 28, 1.0).width;
    draw_text(label, x + (w - lw) * 0.5, y + h * 0.65, 28.0, WHITE);
    pressed
}

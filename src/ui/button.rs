use macroquad::prelude::*;

use crate::application::Control;

/// Button UI component with hover and click detection
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    control: Control,
    enabled: bool,
    color: Color,
    hover_color: Color,
    disabled_color: Color,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, control: Control) -> Self {
        Self {
            x,
            y,
            width,
            height,
            control,
            enabled: true,
            color: Color::from_rgba(70, 130, 180, 255),
            hover_color: Color::from_rgba(100, 149, 237, 255),
            disabled_color: Color::from_rgba(160, 160, 160, 255),
        }
    }

    /// Builder-style enable/disable
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub const fn control(&self) -> Control {
        self.control
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Check if mouse is hovering over button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Draw button; disabled buttons are greyed out and ignore hover
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if !self.enabled {
            self.disabled_color
        } else if self.is_hovered(mouse_pos) {
            self.hover_color
        } else {
            self.color
        };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        let label = self.control.label();
        let text_size = measure_text(label, None, 20, 1.0);
        draw_text(
            label,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.enabled && self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}

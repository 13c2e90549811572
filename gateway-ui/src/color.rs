use iced::Color;

pub const WHITE: Color = iced::Color::WHITE;
pub const GREY_2: Color = Color::from_rgb(
    0xCC as f32 / 255.0,
    0xCC as f32 / 255.0,
    0xCC as f32 / 255.0,
);
pub const GREEN: Color = Color::from_rgb(
    0x00 as f32 / 255.0,
    0xFF as f32 / 255.0,
    0x66 as f32 / 255.0,
);
pub const RED: Color = Color::from_rgb(
    0xE2 as f32 / 255.0,
    0x4E as f32 / 255.0,
    0x1B as f32 / 255.0,
);
pub const ORANGE: Color = Color::from_rgb(
    0xFF as f32 / 255.0,
    0xa7 as f32 / 255.0,
    0x0 as f32 / 255.0,
);
pub const BLUE: Color = Color::from_rgb(
    0x00 as f32 / 255.0,
    0x8D as f32 / 255.0,
    0xE2 as f32 / 255.0,
);

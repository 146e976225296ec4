pub use druid::theme::*;
use druid::{Color, Env, FontDescriptor, FontFamily, FontWeight, Insets, Key};

use crate::data::AppState;

pub fn grid(m: f64) -> f64 {
    GRID * m
}

pub const GRID: f64 = 8.0;

pub const WHITE: Color = Color::WHITE;
pub const BLACK: Color = Color::BLACK;
pub const SLATE_950: Color = Color::rgb8(0x02, 0x06, 0x17);
pub const SLATE_900: Color = Color::rgb8(0x0f, 0x17, 0x2a);
pub const SLATE_800: Color = Color::rgb8(0x1e, 0x29, 0x3b);
pub const SLATE_700: Color = Color::rgb8(0x33, 0x41, 0x55);
pub const SLATE_500: Color = Color::rgb8(0x64, 0x74, 0x8b);
pub const SLATE_400: Color = Color::rgb8(0x94, 0xa3, 0xb8);
pub const SLATE_300: Color = Color::rgb8(0xcb, 0xd5, 0xe1);
pub const INDIGO: Color = Color::rgb8(0x4f, 0x46, 0xe5);
pub const INDIGO_LIGHT: Color = Color::rgb8(0x81, 0x8c, 0xf8);
pub const AMBER: Color = Color::rgb8(0xf5, 0x9e, 0x0b);

pub const UI_FONT_MEDIUM: Key<FontDescriptor> = Key::new("app.ui-font-medium");
pub const TEXT_SIZE_SMALL: Key<f64> = Key::new("app.text-size-small");

pub const ICON_COLOR: Key<Color> = Key::new("app.icon-color");

pub const LINK_HOT_COLOR: Key<Color> = Key::new("app.link-hot-color");
pub const LINK_ACTIVE_COLOR: Key<Color> = Key::new("app.link-active-color");
pub const LINK_COLD_COLOR: Key<Color> = Key::new("app.link-cold-color");

pub fn setup(env: &mut Env, _state: &AppState) {
    env.set(WINDOW_BACKGROUND_COLOR, SLATE_950);
    env.set(TEXT_COLOR, SLATE_300);
    env.set(ICON_COLOR, SLATE_400);
    env.set(PLACEHOLDER_COLOR, SLATE_500);
    env.set(PRIMARY_LIGHT, INDIGO_LIGHT);
    env.set(PRIMARY_DARK, INDIGO);

    env.set(BACKGROUND_LIGHT, SLATE_900);
    env.set(BACKGROUND_DARK, SLATE_950);
    env.set(FOREGROUND_LIGHT, SLATE_300);
    env.set(FOREGROUND_DARK, WHITE);

    env.set(BUTTON_DARK, SLATE_800);
    env.set(BUTTON_LIGHT, SLATE_700);
    env.set(BUTTON_BORDER_RADIUS, 4.0);
    env.set(BUTTON_BORDER_WIDTH, 1.0);

    env.set(BORDER_DARK, SLATE_800);
    env.set(BORDER_LIGHT, SLATE_700);

    env.set(CURSOR_COLOR, WHITE);

    env.set(
        UI_FONT,
        FontDescriptor::new(FontFamily::SYSTEM_UI).with_size(14.0),
    );
    env.set(
        UI_FONT_MEDIUM,
        FontDescriptor::new(FontFamily::SYSTEM_UI)
            .with_size(14.0)
            .with_weight(FontWeight::MEDIUM),
    );
    env.set(TEXT_SIZE_SMALL, 12.0);
    env.set(TEXT_SIZE_NORMAL, 14.0);
    env.set(TEXT_SIZE_LARGE, 18.0);

    env.set(BASIC_WIDGET_HEIGHT, grid(3.0));
    env.set(WIDE_WIDGET_WIDTH, grid(12.0));
    env.set(BORDERED_WIDGET_HEIGHT, grid(4.0));

    env.set(TEXTBOX_BORDER_RADIUS, 4.0);
    env.set(TEXTBOX_BORDER_WIDTH, 1.0);
    env.set(
        TEXTBOX_INSETS,
        Insets::new(grid(1.5), grid(1.0), grid(1.5), grid(1.0)),
    );

    env.set(SCROLLBAR_COLOR, SLATE_500);
    env.set(SCROLLBAR_BORDER_COLOR, SLATE_700);
    env.set(SCROLLBAR_MAX_OPACITY, 0.7);
    env.set(SCROLLBAR_FADE_DELAY, 1500u64);
    env.set(SCROLLBAR_WIDTH, 8.0);
    env.set(SCROLLBAR_PAD, 2.0);
    env.set(SCROLLBAR_RADIUS, 5.0);
    env.set(SCROLLBAR_EDGE_WIDTH, 1.0);

    env.set(WIDGET_PADDING_VERTICAL, grid(1.0));
    env.set(WIDGET_PADDING_HORIZONTAL, grid(1.0));
    env.set(WIDGET_CONTROL_COMPONENT_PADDING, grid(1.0));

    env.set(LINK_HOT_COLOR, Color::rgba(1.0, 1.0, 1.0, 0.08));
    env.set(LINK_ACTIVE_COLOR, Color::rgba(1.0, 1.0, 1.0, 0.05));
    env.set(LINK_COLD_COLOR, Color::rgba(1.0, 1.0, 1.0, 0.0));
}

use glam::{Vec2, vec2};
use macroquad::prelude::*;

use common::{GameConfig, Snapshot, rect::Rect};

const HUD_INSET: f32 = 100.0; // Horizontal distance of each label's centre from its edge.
const TEXT_MARGIN: f32 = 10.0;
const MIN_FONT_SIZE: u16 = 8;

#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub font_size: u16,
    pub color: Color,
    pub background: Option<Color>,
    pub max_width: f32,
}

impl TextStyle {
    pub fn instruction(screen_width: f32) -> Self {
        Self {
            font_size: 26,
            color: WHITE,
            background: None,
            max_width: screen_width - 2.0 * TEXT_MARGIN,
        }
    }

    pub fn button() -> Self {
        Self {
            font_size: 26,
            color: WHITE,
            background: Some(BLACK),
            max_width: f32::INFINITY,
        }
    }

    pub fn hud() -> Self {
        Self {
            font_size: 34,
            color: WHITE,
            background: Some(BLACK),
            max_width: f32::INFINITY,
        }
    }

    pub fn banner(screen_width: f32) -> Self {
        Self {
            font_size: 40,
            color: WHITE,
            background: Some(BLACK),
            max_width: screen_width - 2.0 * TEXT_MARGIN,
        }
    }
}

/// Largest size up to `font_size` at which `text` fits in `max_width`.
fn fit_font_size(text: &str, font_size: u16, max_width: f32) -> u16 {
    let mut size = font_size;
    while size > MIN_FONT_SIZE && measure_text(text, None, size, 1.0).width > max_width {
        size -= 1;
    }
    size
}

pub fn draw_centered_text(text: &str, centre: Vec2, style: TextStyle) {
    let font_size = fit_font_size(text, style.font_size, style.max_width);
    let dims = measure_text(text, None, font_size, 1.0);
    let x = centre.x - dims.width / 2.0;
    let top = centre.y - dims.height / 2.0;

    if let Some(background) = style.background {
        draw_rectangle(x, top, dims.width, dims.height, background);
    }
    draw_text(text, x, top + dims.offset_y, font_size as f32, style.color);
}

fn fill(rect: &Rect, color: Color) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
}

pub fn finish_color(enabled: bool) -> Color {
    if enabled { GREEN } else { BLUE }
}

/// Centres of the time label (left) and the score label (right).
pub fn hud_positions(config: &GameConfig) -> (Vec2, Vec2) {
    let y = config.header_height / 2.0;
    (vec2(HUD_INSET, y), vec2(config.width() - HUD_INSET, y))
}

pub fn draw_play_field(snapshot: &Snapshot, config: &GameConfig) {
    clear_background(WHITE);

    for wall in snapshot.walls {
        fill(wall, BLACK);
    }

    fill(&snapshot.finish, finish_color(snapshot.finish_enabled));

    for coin in snapshot.coin_rects() {
        let centre = coin.center();
        draw_circle(centre.x, centre.y, coin.w / 2.0, YELLOW);
    }

    fill(&snapshot.player, RED);

    let (time_at, score_at) = hud_positions(config);
    draw_centered_text(&snapshot.score_label(), score_at, TextStyle::hud());
    draw_centered_text(&snapshot.time_label(), time_at, TextStyle::hud());

    if let Some(banner) = snapshot.banner() {
        let centre = vec2(config.width() / 2.0, config.height() / 2.0);
        draw_centered_text(&banner, centre, TextStyle::banner(config.width()));
    }
}

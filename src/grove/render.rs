//! Study Grove rendering: HUD, forest viewport, room, overlays and log.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::ClickableList;

use super::actions::*;
use super::catalog::{self, Category, CURRENCY_ICON};
use super::state::{PlayerState, ALL_CHARACTERS, PET_HUNGER_MAX};
use super::timer::{format_time, TimerState, SECONDS_PER_MINUTE};
use super::world::{View, World, VIEW_H, VIEW_W, WORLD_H, WORLD_W};
use super::{GroveGame, Overlay, BUBBLE_LIFE};

/// World units covered by one forest tile.
const TILE: i32 = 50;

pub fn render(game: &GroveGame, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let (main_area, log_area) = if area.width >= 80 {
        let h_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(area);
        (h_chunks[0], Some(h_chunks[1]))
    } else {
        (area, None)
    };

    let borders = borders_for(main_area.width);
    let controls = build_controls(game);
    let log_h: u16 = if log_area.is_some() { 0 } else { 5 };
    let controls_h = controls.visual_height(main_area.width.saturating_sub(2)) + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),          // HUD
            Constraint::Min(8),             // viewport
            Constraint::Length(controls_h), // controls
            Constraint::Length(log_h),      // log (narrow only)
        ])
        .split(main_area);

    render_hud(game.core.player(), f, chunks[0], borders);
    match game.world.view {
        View::Outside => render_forest(game, f, chunks[1], borders),
        View::Room => render_room(game.core.player(), f, chunks[1], borders),
    }
    if let TimerState::Running {
        remaining_seconds,
        reward,
    } = game.core.timer().state()
    {
        render_study_overlay(game, remaining_seconds, reward, f, chunks[1]);
    }

    let controls_block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Actions ");
    {
        let mut cs = click_state.borrow_mut();
        controls.register_targets(chunks[2], &mut cs, 1, 1);
    }
    f.render_widget(
        Paragraph::new(controls.into_lines()).block(controls_block),
        chunks[2],
    );

    match log_area {
        Some(log_area) => render_log(game, f, log_area, Borders::ALL),
        None => render_log(game, f, chunks[3], Borders::TOP),
    }

    match game.overlay {
        Overlay::CharacterSelect => render_character_select(f, area, click_state),
        Overlay::Shop => render_shop(game.core.player(), f, area, click_state),
        Overlay::None => {}
    }
}

fn borders_for(area_width: u16) -> Borders {
    if is_narrow_layout(area_width) {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

// ── HUD ─────────────────────────────────────────────────────

fn render_hud(player: &PlayerState, f: &mut Frame, area: Rect, borders: Borders) {
    let owned: Vec<&str> = player
        .inventory
        .iter()
        .filter_map(|id| catalog::lookup(id).ok())
        .map(|item| item.glyph)
        .collect();
    let owned_text = if owned.is_empty() {
        "none yet".to_string()
    } else {
        owned.join(" ")
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} {} ", player.character.glyph(), player.character.name()),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {} {} ", CURRENCY_ICON, player.currency),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" 🍖 {} ", player.pet_food),
                Style::default().fg(Color::LightRed),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Items: ", Style::default().fg(Color::DarkGray)),
            Span::raw(owned_text),
            Span::styled(
                format!("   {} min studied", player.total_minutes_studied),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::Green))
        .title(format!(" Study Grove · {} ", player.name));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

// ── Forest ──────────────────────────────────────────────────

fn render_forest(game: &GroveGame, f: &mut Frame, area: Rect, borders: Borders) {
    let world = &game.world;
    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(
            " Forest ({}, {}) · zoom {:.1}x ",
            world.x,
            world.y,
            world.zoom()
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let pet_col = (inner.width / 2).saturating_sub(2);
    let pet_glyph = game.core.player().pet_type.map(|_| '&');
    let lines: Vec<Line> = (0..inner.height)
        .map(|row| {
            let spans: Vec<Span> = (0..inner.width)
                .map(|col| {
                    let center = col == inner.width / 2 && row == inner.height / 2;
                    if center {
                        return Span::styled(
                            "@",
                            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                        );
                    }
                    if let (Some(g), true) = (pet_glyph, row == inner.height / 2 && col == pet_col)
                    {
                        return Span::styled(g.to_string(), Style::default().fg(Color::LightRed));
                    }
                    let (wx, wy) = cell_to_world(world, col, row, inner.width, inner.height);
                    let (ch, color) = tile_glyph(wx, wy);
                    Span::styled(ch.to_string(), Style::default().fg(color))
                })
                .collect();
            Line::from(spans)
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}

/// World coordinate under a viewport cell. The visible span shrinks as zoom grows.
fn cell_to_world(world: &World, col: u16, row: u16, cols: u16, rows: u16) -> (i32, i32) {
    let (off_x, off_y) = world.background_offset();
    let center_x = f64::from(-off_x + VIEW_W / 2);
    let center_y = f64::from(-off_y + VIEW_H / 2);
    let span_x = f64::from(VIEW_W) / world.zoom();
    let span_y = f64::from(VIEW_H) / world.zoom();
    let wx = center_x + (f64::from(col) - f64::from(cols) / 2.0) * span_x / f64::from(cols);
    let wy = center_y + (f64::from(row) - f64::from(rows) / 2.0) * span_y / f64::from(rows);
    (wx.floor() as i32, wy.floor() as i32)
}

fn tile_glyph(wx: i32, wy: i32) -> (char, Color) {
    if wx < 0 || wy < 0 || wx >= WORLD_W || wy >= WORLD_H {
        return ('~', Color::Blue);
    }
    match tile_hash(wx.div_euclid(TILE), wy.div_euclid(TILE)) % 16 {
        0 | 1 => ('♣', Color::Green),
        2 => ('♠', Color::Rgb(40, 110, 40)),
        3 => ('*', Color::Yellow),
        4 | 5 | 6 => (',', Color::Rgb(70, 120, 60)),
        7 => ('.', Color::DarkGray),
        _ => (' ', Color::Reset),
    }
}

fn tile_hash(tx: i32, ty: i32) -> u32 {
    let mut h = (tx as u32).wrapping_mul(374_761_393) ^ (ty as u32).wrapping_mul(668_265_263);
    h = (h ^ (h >> 13)).wrapping_mul(1_274_126_177);
    h ^ (h >> 16)
}

// ── Room ────────────────────────────────────────────────────

fn render_room(player: &PlayerState, f: &mut Frame, area: Rect, borders: Borders) {
    let mut lines = vec![Line::from("")];
    lines.push(Line::from(Span::styled(
        format!("  {} is at home.", player.character.name()),
        Style::default().fg(Color::White),
    )));
    lines.push(Line::from(""));

    if player.inventory.is_empty() {
        lines.push(Line::from(Span::styled(
            "  Your room is empty. Visit the shop!",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        for item in player.inventory.iter().filter_map(|id| catalog::lookup(id).ok()) {
            lines.push(Line::from(format!("  {} {}", item.glyph, item.name)));
        }
    }

    lines.push(Line::from(""));
    match player.pet_type {
        Some(pet) => {
            lines.push(Line::from(vec![
                Span::raw(format!("  {} {}  ", pet.glyph(), pet.name())),
                Span::styled(
                    heart_gauge(player.pet_hunger),
                    Style::default().fg(Color::LightRed),
                ),
            ]));
            if player.pet_is_full() {
                lines.push(Line::from(Span::styled(
                    "  Happy and full.",
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
        None => lines.push(Line::from(Span::styled(
            "  No pet yet.",
            Style::default().fg(Color::DarkGray),
        ))),
    }

    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::Rgb(180, 130, 80)))
        .title(" Your Room ");
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn heart_gauge(hunger: u8) -> String {
    let full = hunger.min(PET_HUNGER_MAX);
    let mut s = "♥".repeat(full as usize);
    s.push_str(&"♡".repeat((PET_HUNGER_MAX - full) as usize));
    s
}

// ── Study overlay ───────────────────────────────────────────

fn render_study_overlay(
    game: &GroveGame,
    remaining_seconds: u64,
    reward: u32,
    f: &mut Frame,
    area: Rect,
) {
    let popup = centered(area, 36, 10);
    f.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Studying ");
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let total = u64::from(reward) * SECONDS_PER_MINUTE;
    let done = total.saturating_sub(remaining_seconds);
    let bar_w = inner.width.saturating_sub(4) as u64;
    let filled = if total == 0 { 0 } else { done * bar_w / total };

    let mut lines: Vec<Line> = (1..=BUBBLE_LIFE)
        .map(|life| {
            Line::from(Span::styled(
                bubble_row(game, life, inner.width),
                Style::default().fg(Color::Yellow),
            ))
        })
        .collect();
    lines.push(Line::from(Span::styled(
        format_time(remaining_seconds),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        format!(
            "{}{}",
            "█".repeat(filled as usize),
            "░".repeat((bar_w - filled) as usize)
        ),
        Style::default().fg(Color::Green),
    )));
    lines.push(Line::from(Span::styled(
        format!("Reward: {} {}", reward, CURRENCY_ICON),
        Style::default().fg(Color::DarkGray),
    )));
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// One row of rising bubbles. Bubbles with `life` spent rise to the top row.
fn bubble_row(game: &GroveGame, life: u32, width: u16) -> String {
    let mut cols: Vec<u16> = game
        .bubbles
        .iter()
        .filter(|b| b.life == life)
        .map(|b| width.saturating_sub(2) * b.left_pct / 100)
        .collect();
    cols.sort_unstable();

    let mut row = String::new();
    let mut cursor = 0u16;
    for col in cols {
        if col < cursor {
            continue;
        }
        row.push_str(&" ".repeat((col - cursor) as usize));
        row.push_str(CURRENCY_ICON);
        cursor = col + 2;
    }
    row.push_str(&" ".repeat(width.saturating_sub(cursor) as usize));
    row
}

// ── Controls ────────────────────────────────────────────────

fn build_controls(game: &GroveGame) -> ClickableList<'static> {
    let studying = game.core.is_studying();
    let player = game.core.player();
    let dim = Style::default().fg(Color::DarkGray);
    let live = |enabled: bool, color: Color| {
        if enabled {
            Style::default().fg(color)
        } else {
            dim
        }
    };

    let mut cl = ClickableList::new();
    cl.push(Line::from(vec![
        Span::styled(" Minutes: ", dim),
        Span::styled(
            format!("{}_", game.minutes_input),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ]));
    let start_label = match game.core.timer().remaining_seconds() {
        Some(remaining) => format!(" [T] Studying… {}", format_time(remaining)),
        None => " [T] Start studying".to_string(),
    };
    cl.push_clickable(
        Line::from(Span::styled(start_label, live(!studying, Color::Yellow))),
        START_STUDY,
    );
    cl.push_clickable(
        Line::from(Span::styled("  ▲  5 more minutes", Style::default().fg(Color::White))),
        MINUTES_UP,
    );
    cl.push_clickable(
        Line::from(Span::styled("  ▼  5 fewer minutes", Style::default().fg(Color::White))),
        MINUTES_DOWN,
    );
    cl.push_clickable(
        Line::from(Span::styled(" [B] Shop", live(!studying, Color::Cyan))),
        OPEN_SHOP,
    );
    let view_label = match game.world.view {
        View::Outside => " [R] Go inside",
        View::Room => " [R] Go outside",
    };
    cl.push_clickable(
        Line::from(Span::styled(view_label, live(!studying, Color::Cyan))),
        TOGGLE_VIEW,
    );

    let feed_label = match player.pet_type {
        Some(pet) => format!(
            " [F] Feed {} {}  {}",
            pet.glyph(),
            pet.name(),
            heart_gauge(player.pet_hunger)
        ),
        None => " [F] Feed pet".to_string(),
    };
    cl.push_clickable(
        Line::from(Span::styled(
            feed_label,
            live(feed_enabled(player, studying), Color::LightRed),
        )),
        FEED_PET,
    );
    cl.push_clickable(Line::from(" [+] Zoom in"), ZOOM_IN);
    cl.push_clickable(Line::from(" [-] Zoom out"), ZOOM_OUT);
    cl.push(Line::from(Span::styled(" WASD / arrows to walk", dim)));
    cl
}

/// Feeding needs a pet and a snack, and waits for the session to end.
fn feed_enabled(player: &PlayerState, studying: bool) -> bool {
    !studying && player.pet_type.is_some() && player.pet_food > 0
}

// ── Shop overlay ────────────────────────────────────────────

fn render_shop(
    player: &PlayerState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cl = ClickableList::new();
    cl.push(Line::from(Span::styled(
        format!(" You have {} {}", player.currency, CURRENCY_ICON),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )));
    cl.push(Line::from(""));

    for (i, item) in catalog::list_all().iter().enumerate() {
        let owned = catalog::is_owned(item, player);
        let affordable = u64::from(item.price) <= player.currency;
        let status = if owned {
            "Owned".to_string()
        } else if item.category == Category::Food && player.pet_food > 0 {
            format!("Buy (have {})", player.pet_food)
        } else {
            "Buy".to_string()
        };
        let style = if owned {
            Style::default().fg(Color::DarkGray)
        } else if affordable {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Red)
        };
        let label = format!(
            " [{}] {} {:<14} {:>3} {}  {}",
            i + 1,
            item.glyph,
            item.name,
            item.price,
            CURRENCY_ICON,
            status
        );
        cl.push_clickable(Line::from(Span::styled(label, style)), BUY_ITEM_BASE + i as u16);
    }

    cl.push(Line::from(""));
    cl.push_clickable(
        Line::from(Span::styled(" [Q] Close", Style::default().fg(Color::Cyan))),
        CLOSE_SHOP,
    );

    let height = cl.len() as u16 + 2;
    let popup = centered(area, 52, height);
    f.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Shop ");
    {
        let mut cs = click_state.borrow_mut();
        cl.register_targets(popup, &mut cs, 1, 1);
    }
    f.render_widget(Paragraph::new(cl.into_lines()).block(block), popup);
}

// ── Character select overlay ────────────────────────────────

fn render_character_select(f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let mut cl = ClickableList::new();
    cl.push(Line::from(Span::styled(
        " Who is studying today?",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )));
    cl.push(Line::from(""));
    for (i, character) in ALL_CHARACTERS.iter().enumerate() {
        cl.push_clickable(
            Line::from(format!(" [{}] {} {}", i + 1, character.glyph(), character.name())),
            SELECT_CHARACTER_BASE + i as u16,
        );
    }

    let height = cl.len() as u16 + 2;
    let popup = centered(area, 34, height);
    f.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(" Choose your character ");
    {
        let mut cs = click_state.borrow_mut();
        cl.register_targets(popup, &mut cs, 1, 1);
    }
    f.render_widget(Paragraph::new(cl.into_lines()).block(block), popup);
}

// ── Log ─────────────────────────────────────────────────────

fn render_log(game: &GroveGame, f: &mut Frame, area: Rect, borders: Borders) {
    if area.height == 0 {
        return;
    }
    let max_lines = area.height.saturating_sub(2) as usize;
    let start = game.log.len().saturating_sub(max_lines);
    let lines: Vec<Line> = game.log[start..]
        .iter()
        .map(|entry| {
            let style = if entry.is_important {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(format!(" > {}", entry.text), style))
        })
        .collect();

    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Log ");
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

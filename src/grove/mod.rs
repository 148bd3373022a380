//! Study Grove: study to earn mushrooms, decorate your room and keep a pet fed.

pub mod actions;
pub mod catalog;
pub mod core;
pub mod error;
pub mod logic;
pub mod render;
pub mod state;
pub mod timer;
pub mod world;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent, KEY_BACKSPACE, KEY_ENTER};
use crate::time::StudyClock;

use self::core::{Grove, Intent, Notification};
use actions::*;
use catalog::{Category, CATALOG, CURRENCY_ICON};
use error::Rejection;
use state::ALL_CHARACTERS;
use timer::{format_time, parse_minutes};
use world::{Heading, View, World};

const DEFAULT_MINUTES: &str = "25";
const MINUTES_MAX_DIGITS: usize = 4;
const MINUTES_STEP: i64 = 5;
/// Seconds a reward bubble stays on screen.
const BUBBLE_LIFE: u32 = 3;
const LOG_CAP: usize = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlay {
    CharacterSelect,
    None,
    Shop,
}

#[derive(Clone, Debug)]
pub struct LogEntry {
    pub text: String,
    pub is_important: bool,
}

/// A 🍄 rising in the study overlay, one per elapsed second.
#[derive(Clone, Debug)]
pub struct Bubble {
    /// Horizontal position as a percentage of the overlay width (10..90).
    pub left_pct: u16,
    pub life: u32,
}

pub struct GroveGame {
    pub core: Grove,
    pub world: World,
    pub overlay: Overlay,
    pub minutes_input: String,
    pub log: Vec<LogEntry>,
    pub bubbles: Vec<Bubble>,
    clock: StudyClock,
    rng_state: u64,
}

impl GroveGame {
    pub fn new() -> Self {
        Self {
            core: Grove::new(),
            world: World::new(),
            overlay: Overlay::CharacterSelect,
            minutes_input: DEFAULT_MINUTES.to_string(),
            log: vec![LogEntry {
                text: "Welcome to the grove! Pick a character to begin.".into(),
                is_important: false,
            }],
            bubbles: Vec::new(),
            clock: StudyClock::new(),
            rng_state: 0x5EED_1EAF,
        }
    }

    pub fn add_log(&mut self, text: &str, is_important: bool) {
        self.log.push(LogEntry {
            text: text.to_string(),
            is_important,
        });
        if self.log.len() > LOG_CAP {
            self.log.remove(0);
        }
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match self.overlay {
            Overlay::CharacterSelect => self.handle_character_select(event),
            Overlay::Shop => self.handle_shop(event),
            Overlay::None => match event {
                InputEvent::Key(c) => self.handle_key(*c),
                InputEvent::Click(id) => self.handle_click(*id),
            },
        }
    }

    fn handle_character_select(&mut self, event: &InputEvent) -> bool {
        let index = match event {
            InputEvent::Key(c @ '1'..='4') => (*c as u8 - b'1') as usize,
            InputEvent::Click(id)
                if (SELECT_CHARACTER_BASE..SELECT_CHARACTER_BASE + 4).contains(id) =>
            {
                (id - SELECT_CHARACTER_BASE) as usize
            }
            _ => return false,
        };
        let Some(character) = ALL_CHARACTERS.get(index) else {
            return false;
        };
        let notes = self
            .core
            .dispatch(Intent::SelectCharacter(character.id().to_string()));
        let accepted = matches!(notes.as_slice(), [Notification::StateChanged(_)]);
        self.apply(notes);
        if accepted {
            self.overlay = Overlay::None;
            self.add_log(
                &format!("You are playing as {} {}.", character.glyph(), character.name()),
                false,
            );
        }
        true
    }

    fn handle_shop(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key('q') | InputEvent::Key('b') | InputEvent::Click(CLOSE_SHOP) => {
                self.overlay = Overlay::None;
                true
            }
            InputEvent::Key(c @ '1'..='7') => {
                self.buy((*c as u8 - b'1') as usize);
                true
            }
            InputEvent::Click(id)
                if (BUY_ITEM_BASE..BUY_ITEM_BASE + CATALOG.len() as u16).contains(id) =>
            {
                self.buy((id - BUY_ITEM_BASE) as usize);
                true
            }
            _ => false,
        }
    }

    fn handle_key(&mut self, key: char) -> bool {
        match key {
            'w' => self.walk(Heading::Up),
            's' => self.walk(Heading::Down),
            'a' => self.walk(Heading::Left),
            'd' => self.walk(Heading::Right),
            '0'..='9' => {
                if self.minutes_input.len() < MINUTES_MAX_DIGITS {
                    self.minutes_input.push(key);
                }
                true
            }
            KEY_BACKSPACE => {
                self.minutes_input.pop();
                true
            }
            't' | KEY_ENTER => {
                self.start_study();
                true
            }
            'b' => {
                self.open_shop();
                true
            }
            'r' => {
                self.toggle_view();
                true
            }
            'f' => {
                self.feed_pet();
                true
            }
            '+' | '=' => {
                self.world.zoom_in();
                true
            }
            '-' => {
                self.world.zoom_out();
                true
            }
            _ => false,
        }
    }

    fn handle_click(&mut self, action_id: u16) -> bool {
        match action_id {
            START_STUDY => self.start_study(),
            MINUTES_UP => self.nudge_minutes(MINUTES_STEP),
            MINUTES_DOWN => self.nudge_minutes(-MINUTES_STEP),
            OPEN_SHOP => self.open_shop(),
            TOGGLE_VIEW => {
                self.toggle_view();
            }
            FEED_PET => self.feed_pet(),
            ZOOM_IN => self.world.zoom_in(),
            ZOOM_OUT => self.world.zoom_out(),
            _ => return false,
        }
        true
    }

    // ── Intents ─────────────────────────────────────────────────

    fn walk(&mut self, heading: Heading) -> bool {
        if self.core.is_studying() {
            return false;
        }
        self.world.step(heading)
    }

    fn nudge_minutes(&mut self, delta: i64) {
        let current = parse_minutes(&self.minutes_input).unwrap_or(0);
        let next = (current + delta).clamp(MINUTES_STEP, 9_995);
        self.minutes_input = next.to_string();
    }

    fn start_study(&mut self) {
        let notes = match parse_minutes(&self.minutes_input) {
            Ok(minutes) => self.core.dispatch(Intent::StartStudySession(minutes)),
            // A running session outranks a malformed field.
            Err(_) if self.core.is_studying() => vec![Notification::OperationRejected(
                Rejection::SessionAlreadyActive,
            )],
            Err(rejection) => vec![Notification::OperationRejected(rejection)],
        };
        self.apply(notes);
    }

    fn open_shop(&mut self) {
        if self.core.is_studying() {
            self.add_log("Stay focused! The shop opens after your session.", false);
            return;
        }
        self.overlay = Overlay::Shop;
    }

    fn toggle_view(&mut self) -> bool {
        if self.core.is_studying() {
            self.add_log("You can't leave while studying.", false);
            return false;
        }
        match self.world.toggle_view() {
            View::Room => self.add_log("You head into your room.", false),
            View::Outside => self.add_log("You step back outside.", false),
        }
        true
    }

    fn feed_pet(&mut self) {
        if self.core.is_studying() {
            self.add_log("Your pet can wait until the session ends.", false);
            return;
        }
        let had_pet = self.core.player().pet_type;
        let notes = self.core.dispatch(Intent::FeedPet);
        let fed = matches!(notes.as_slice(), [Notification::StateChanged(_)]);
        self.apply(notes);
        if let (true, Some(pet)) = (fed, had_pet) {
            self.add_log(&format!("{} Munch munch!", pet.glyph()), false);
        }
    }

    fn buy(&mut self, index: usize) {
        let Some(item) = CATALOG.get(index) else {
            return;
        };
        // The shop shows owned entries as disabled; the current pet included.
        if catalog::is_owned(item, self.core.player()) {
            self.apply(vec![Notification::OperationRejected(
                Rejection::AlreadyOwned(item.name),
            )]);
            return;
        }
        let notes = self.core.dispatch(Intent::BuyItem(item.id.to_string()));
        let bought = matches!(notes.as_slice(), [Notification::StateChanged(_)]);
        self.apply(notes);
        if bought {
            let text = match item.category {
                Category::Pet => format!("{} {} joined you!", item.glyph, item.name),
                Category::Food => format!("{} Bought a {}.", item.glyph, item.name),
                Category::Decor => format!("{} {} added to your room.", item.glyph, item.name),
            };
            self.add_log(&text, true);
        }
    }

    // ── Clock ───────────────────────────────────────────────────

    /// Feed a `performance.now()` timestamp; sends one tick per elapsed second.
    pub fn advance(&mut self, now_ms: f64) {
        if !self.clock.is_running() {
            return;
        }
        let seconds = self.clock.update(now_ms);
        self.tick(seconds);
    }

    /// Advance the running session by `seconds` ticks.
    pub fn tick(&mut self, seconds: u32) {
        for _ in 0..seconds {
            if !self.core.is_studying() {
                break;
            }
            for b in &mut self.bubbles {
                b.life = b.life.saturating_sub(1);
            }
            self.bubbles.retain(|b| b.life > 0);
            let notes = self.core.dispatch(Intent::RequestTick);
            self.apply(notes);
        }
    }

    fn apply(&mut self, notes: Vec<Notification>) {
        for note in notes {
            match note {
                Notification::StateChanged(snapshot) => {
                    if let Ok(json) = serde_json::to_string(&snapshot) {
                        log::debug!("state: {}", json);
                    }
                }
                Notification::SessionStarted {
                    remaining_seconds,
                    reward,
                } => {
                    self.clock.restart();
                    self.bubbles.clear();
                    self.add_log(
                        &format!(
                            "Study session started: {} for {} {}.",
                            format_time(remaining_seconds),
                            reward,
                            CURRENCY_ICON
                        ),
                        false,
                    );
                }
                Notification::SessionProgress { .. } => self.spawn_bubble(),
                Notification::SessionCompleted { reward } => {
                    self.clock.stop();
                    self.bubbles.clear();
                    self.add_log(
                        &format!("Nice work! You earned {} {}.", reward, CURRENCY_ICON),
                        true,
                    );
                }
                Notification::OperationRejected(rejection) => {
                    self.add_log(&rejection.to_string(), false);
                }
            }
        }
    }

    fn spawn_bubble(&mut self) {
        self.rng_state = self
            .rng_state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let left_pct = 10 + ((self.rng_state >> 33) % 81) as u16;
        self.bubbles.push(Bubble {
            left_pct,
            life: BUBBLE_LIFE,
        });
    }

    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(self, f, area, click_state);
    }
}

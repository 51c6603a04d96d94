// Starts every page behaviour against the portfolio page's element ids.
// Behaviours whose elements are missing are skipped.

use crate::contact::ContactForm;
use crate::counter::Counters;
use crate::cursor::CursorGlow;
use crate::nav::{ActiveNav, BurgerMenu};
use crate::reveal::{RevealOnScroll, SkillBars};
use crate::run_loop::Background;
use crate::scroll::ScrollEffects;
use crate::typing::TypingEffect;
use wasm_bindgen::prelude::*;

pub const CANVAS_ID: &str = "bgCanvas";
pub const CURSOR_GLOW_ID: &str = "cursorGlow";
pub const TYPED_TEXT_ID: &str = "typedText";
pub const HEADER_ID: &str = "header";
pub const BURGER_ID: &str = "burger";
pub const NAV_LIST_ID: &str = "navLinks";
pub const SCROLL_TOP_ID: &str = "scrollTop";
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const CONTACT_STATUS_ID: &str = "cfStatus";

/// Handle over all running behaviours. Dropping it, or calling `stop`,
/// detaches them all.
#[wasm_bindgen]
pub struct Page {
    background: Option<Background>,
    cursor: Option<CursorGlow>,
    typing: Option<TypingEffect>,
    scroll: Option<ScrollEffects>,
    burger: Option<BurgerMenu>,
    active_nav: Option<ActiveNav>,
    reveal: Option<RevealOnScroll>,
    skill_bars: Option<SkillBars>,
    counters: Option<Counters>,
    contact: Option<ContactForm>,
}

#[wasm_bindgen]
impl Page {
    pub fn start() -> Result<Page, JsValue> {
        let page = Page {
            background: Background::start(CANVAS_ID)?,
            cursor: CursorGlow::start(CURSOR_GLOW_ID)?,
            typing: TypingEffect::start(TYPED_TEXT_ID)?,
            scroll: ScrollEffects::start(HEADER_ID, SCROLL_TOP_ID)?,
            burger: BurgerMenu::start(BURGER_ID, NAV_LIST_ID)?,
            active_nav: ActiveNav::start()?,
            reveal: RevealOnScroll::start()?,
            skill_bars: SkillBars::start()?,
            counters: Counters::start()?,
            contact: ContactForm::start(CONTACT_FORM_ID, CONTACT_STATUS_ID)?,
        };
        log::info!("page started with {} behaviours", page.running());
        Ok(page)
    }

    /// Number of behaviours that found their elements and are still running.
    pub fn running(&self) -> usize {
        [
            self.background.as_ref().map_or(false, Background::is_running),
            self.cursor.as_ref().map_or(false, CursorGlow::is_running),
            self.typing.as_ref().map_or(false, TypingEffect::is_running),
            self.scroll.as_ref().map_or(false, ScrollEffects::is_running),
            self.burger.as_ref().map_or(false, BurgerMenu::is_running),
            self.active_nav.as_ref().map_or(false, ActiveNav::is_running),
            self.reveal.as_ref().map_or(false, RevealOnScroll::is_running),
            self.skill_bars.as_ref().map_or(false, SkillBars::is_running),
            self.counters.as_ref().map_or(false, Counters::is_running),
            self.contact.as_ref().map_or(false, ContactForm::is_running),
        ]
        .iter()
        .filter(|running| **running)
        .count()
    }

    pub fn stop(&mut self) {
        self.background.take();
        self.cursor.take();
        self.typing.take();
        self.scroll.take();
        self.burger.take();
        self.active_nav.take();
        self.reveal.take();
        self.skill_bars.take();
        self.counters.take();
        self.contact.take();
    }
}

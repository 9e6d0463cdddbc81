//! Scroll-sync model.
//!
//! The browser script in `assets/toc.js` keeps the TOC in step with the reader's
//! scroll position. This module is the same controller as a pure state machine:
//! a step takes the current [`ActiveHeading`], one [`Trigger`] and a read-only
//! [`Viewport`], and returns the next state plus the DOM [`Effect`]s the script
//! performs. Nothing here runs during a build; it pins down the behavior the
//! script implements.

use crate::outline::HeadingRecord;

/// Pixels below the top of the viewport at which a heading counts as reached
pub const DEFAULT_SCROLL_OFFSET: u32 = 100;

/// Identifier of the heading currently in view, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveHeading(Option<String>);

impl ActiveHeading {
    pub fn new(id: impl Into<String>) -> Self {
        Self(Some(id.into()))
    }

    pub fn id(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is(&self, id: &str) -> bool {
        self.id() == Some(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    Load,
    Scroll,
    /// Click on a TOC link; `href` is the link's `#fragment`
    TocClick { href: String },
}

/// What the controller may ask of the page.
pub trait Viewport {
    /// Current vertical scroll position
    fn scroll_y(&self) -> f64;
    /// Top offset of the element with this id, or `None` if there is none
    fn offset_top(&self, id: &str) -> Option<f64>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Remove the active mark from the TOC entry for this id
    Deactivate(String),
    /// Mark the TOC entry for this id active
    Activate(String),
    /// Smooth-scroll so the element's top meets the viewport top
    ScrollTo { id: String, top: f64 },
}

/// Controller over the headings of one page.
#[derive(Debug, Clone)]
pub struct ScrollSync {
    ids: Vec<String>,
    offset: f64,
}

impl ScrollSync {
    pub fn new(records: &[HeadingRecord], offset: u32) -> Self {
        Self {
            ids: records.iter().map(|r| r.identifier.clone()).collect(),
            offset: f64::from(offset),
        }
    }

    pub fn step(
        &self,
        state: &ActiveHeading,
        trigger: &Trigger,
        viewport: &impl Viewport,
    ) -> (ActiveHeading, Vec<Effect>) {
        match trigger {
            Trigger::Load | Trigger::Scroll => self.on_scroll(state, viewport),
            Trigger::TocClick { href } => (state.clone(), self.on_click(href, viewport)),
        }
    }

    /// Heading whose top is the furthest down while still above the threshold.
    /// Ties go to the later heading.
    pub fn candidate(&self, viewport: &impl Viewport) -> ActiveHeading {
        let threshold = viewport.scroll_y() + self.offset;
        let mut best: Option<(&str, f64)> = None;

        for id in &self.ids {
            let Some(top) = viewport.offset_top(id) else {
                continue;
            };
            if top > threshold {
                continue;
            }
            if best.map_or(true, |(_, best_top)| top >= best_top) {
                best = Some((id.as_str(), top));
            }
        }

        ActiveHeading(best.map(|(id, _)| id.to_string()))
    }

    fn on_scroll(
        &self,
        state: &ActiveHeading,
        viewport: &impl Viewport,
    ) -> (ActiveHeading, Vec<Effect>) {
        let next = self.candidate(viewport);
        if next == *state {
            return (next, Vec::new());
        }

        let mut effects = Vec::new();
        if let Some(previous) = state.id() {
            effects.push(Effect::Deactivate(previous.to_string()));
        }
        if let Some(current) = next.id() {
            effects.push(Effect::Activate(current.to_string()));
        }
        (next, effects)
    }

    fn on_click(&self, href: &str, viewport: &impl Viewport) -> Vec<Effect> {
        let id = href.strip_prefix('#').unwrap_or(href);
        match viewport.offset_top(id) {
            Some(top) => vec![Effect::ScrollTo {
                id: id.to_string(),
                top,
            }],
            None => Vec::new(),
        }
    }
}

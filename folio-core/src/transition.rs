//! Page transition state machine.
//!
//! A navigation is an explicit, ordered list of [`TransitionStep`]s. The web
//! layer executes them one at a time and reports each to the
//! [`Transitioner`] before running it. Starting a new navigation hands out a
//! fresh [`Ticket`]; steps presented with an older ticket are refused, so the
//! most recent request always wins and a superseded sequence stops touching
//! the page.

use crate::config::SiteConfig;
use crate::layout::{Overflow, body_overflow};
use crate::page::Page;

/// The three inline properties a transition animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineStyle {
    pub transition: &'static str,
    pub opacity: &'static str,
    pub transform: &'static str,
}

impl InlineStyle {
    pub const CLEARED: Self = Self {
        transition: "",
        opacity: "",
        transform: "",
    };
    pub const FADE_OUT: Self = Self {
        transition: "all 0.3s ease-out",
        opacity: "0",
        transform: "scale(0.95)",
    };
    pub const HOME_ENTER_FROM: Self = Self {
        transition: "",
        opacity: "0",
        transform: "scale(1.05)",
    };
    pub const HOME_ENTER: Self = Self {
        transition: "all 0.4s cubic-bezier(0.4, 0, 0.2, 1)",
        opacity: "1",
        transform: "scale(1)",
    };
    pub const PAGE_ENTER_FROM: Self = Self {
        transition: "",
        opacity: "0",
        transform: "translateY(30px)",
    };
    pub const PAGE_ENTER: Self = Self {
        transition: "all 0.5s cubic-bezier(0.4, 0, 0.2, 1)",
        opacity: "1",
        transform: "translateY(0)",
    };
}

/// How the target container is put back on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    pub page: Page,
    pub display: &'static str,
    pub from: InlineStyle,
    /// Container background (content pages use their accent).
    pub background: Option<String>,
    /// Document body background (home only).
    pub body_background: Option<String>,
    /// `#backButton` tint inside the container.
    pub back_tint: Option<String>,
    pub body_overflow: Overflow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionStep {
    WaitCursor,
    ResetStyles,
    FadeOutVisible,
    /// Restore the default cursor after this many milliseconds; does not block.
    ScheduleCursorReset(u32),
    Wait(u32),
    HideContentPages,
    Reveal(Reveal),
    /// Await the page's `show()`.
    Show(Page),
    NextFrame,
    FadeIn { page: Page, to: InlineStyle },
    SyncUrl(Page),
    Commit(Page),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Idle(Page),
    FadingOut { from: Page, to: Page },
    Hidden { to: Page },
    FadingIn { to: Page },
}

impl TransitionPhase {
    #[must_use]
    pub const fn target(self) -> Page {
        match self {
            Self::Idle(page)
            | Self::FadingOut { to: page, .. }
            | Self::Hidden { to: page }
            | Self::FadingIn { to: page } => page,
        }
    }

    #[must_use]
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle(_))
    }
}

/// Identifies one navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    pub target: Page,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transitioner {
    phase: TransitionPhase,
    generation: u64,
    current: Page,
    on_screen: Page,
}

impl Default for Transitioner {
    fn default() -> Self {
        Self::new(Page::Home)
    }
}

impl Transitioner {
    #[must_use]
    pub const fn new(initial: Page) -> Self {
        Self {
            phase: TransitionPhase::Idle(initial),
            generation: 0,
            current: initial,
            on_screen: initial,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// The committed page.
    #[must_use]
    pub const fn current(&self) -> Page {
        self.current
    }

    /// Start navigating to `target`.
    ///
    /// Returns `None` when a transition to the same page is already running,
    /// which happens when one history traversal fires both `popstate` and
    /// `hashchange`. Any other in-flight transition is superseded.
    pub fn begin(&mut self, target: Page) -> Option<Ticket> {
        if !self.phase.is_idle() && self.phase.target() == target {
            log::debug!("transition to {target} already running");
            return None;
        }
        if !self.phase.is_idle() {
            log::debug!(
                "superseding transition to {} with {target}",
                self.phase.target()
            );
        }
        self.generation += 1;
        self.phase = TransitionPhase::FadingOut {
            from: self.on_screen,
            to: target,
        };
        Some(Ticket {
            generation: self.generation,
            target,
        })
    }

    #[must_use]
    pub const fn is_current(&self, ticket: Ticket) -> bool {
        ticket.generation == self.generation
    }

    /// Steps that carry the page on screen now to `ticket.target`.
    #[must_use]
    pub fn plan(
        &self,
        ticket: Ticket,
        config: &SiteConfig,
        viewport_width: f64,
    ) -> Vec<TransitionStep> {
        let target = ticket.target;
        let leaving_content = self.on_screen.is_content();

        let mut steps = vec![TransitionStep::WaitCursor, TransitionStep::ResetStyles];
        if leaving_content {
            steps.push(TransitionStep::FadeOutVisible);
        }
        steps.push(TransitionStep::ScheduleCursorReset(
            config.timing.cursor_reset_ms,
        ));
        steps.push(TransitionStep::Wait(config.timing.fade_out_ms));
        steps.push(TransitionStep::HideContentPages);
        steps.push(TransitionStep::Reveal(reveal_for(
            target,
            config,
            viewport_width,
        )));
        if target.is_content() {
            steps.push(TransitionStep::Show(target));
        }
        steps.push(TransitionStep::NextFrame);
        steps.push(TransitionStep::FadeIn {
            page: target,
            to: if target.is_content() {
                InlineStyle::PAGE_ENTER
            } else {
                InlineStyle::HOME_ENTER
            },
        });
        steps.push(TransitionStep::SyncUrl(target));
        steps.push(TransitionStep::Commit(target));
        steps
    }

    /// Record that `step` is about to run for `ticket`.
    ///
    /// Returns `false` when the ticket has been superseded; the caller must
    /// stop executing that sequence.
    pub fn record(&mut self, ticket: Ticket, step: &TransitionStep) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        let to = ticket.target;
        match step {
            TransitionStep::HideContentPages => {
                self.phase = TransitionPhase::Hidden { to };
            }
            TransitionStep::Reveal(reveal) => {
                self.on_screen = reveal.page;
            }
            TransitionStep::FadeIn { .. } => {
                self.phase = TransitionPhase::FadingIn { to };
            }
            TransitionStep::Commit(page) => {
                self.current = *page;
                self.phase = TransitionPhase::Idle(*page);
            }
            _ => {}
        }
        true
    }
}

fn reveal_for(page: Page, config: &SiteConfig, viewport_width: f64) -> Reveal {
    let body_overflow = body_overflow(page, viewport_width, config.mobile_breakpoint_px);
    if page.is_content() {
        Reveal {
            page,
            display: "flex",
            from: InlineStyle::PAGE_ENTER_FROM,
            background: config.accent(page).map(str::to_string),
            body_background: None,
            back_tint: config.back_button_tint(page),
            body_overflow,
        }
    } else {
        Reveal {
            page,
            display: "block",
            from: InlineStyle::HOME_ENTER_FROM,
            background: None,
            body_background: Some(config.home_background.clone()),
            back_tint: None,
            body_overflow,
        }
    }
}

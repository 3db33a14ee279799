//! Gallery navigation state machine.
//!
//! All interactive state on the page lives in one value, [`Session`], and
//! changes only through [`dispatch`] — an intent in, a new session out.
//! No callback mutates a field directly; the renderer and the client runtime
//! both derive what to show from the session value. This keeps the state
//! machine independently testable and makes illegal transitions no-ops
//! instead of crashes.
//!
//! ## States
//!
//! Two orthogonal axes:
//!
//! ```text
//! mode:      Gallery ──open_folder──▶ Folder(id)
//!                ◀──close_folder──
//!
//! lightbox:  Closed ──open──▶ Open { context, len, index }
//!                  ◀──close──
//! ```
//!
//! Folders never nest: `OpenFolder` is only honored in gallery mode. The
//! lightbox overlays either mode without disturbing it, and navigation wraps
//! modulo the context length. A lightbox is always opened against the list
//! the user is looking at (the gallery view list or an open folder's items),
//! never the raw catalog — that is what keeps its indices aligned with the
//! screen. [`Lightbox::len`] is a `NonZeroUsize`: opening a lightbox over an
//! empty list is unrepresentable rather than undefined.
//!
//! Filter intents ([`Intent::SelectCategory`] and friends) update only the
//! view state, so closing a folder restores exactly the view list that was
//! on screen before it opened.

use crate::catalog::MediaKind;
use crate::view::{CategoryFilter, SortOrder, ViewState};
use std::num::NonZeroUsize;

/// Which list the gallery area is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GalleryMode {
    #[default]
    Gallery,
    /// Folder detail view for the folder with this id.
    Folder(String),
}

/// The list a lightbox session was opened against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxContext {
    /// The gallery view list (as filtered/sorted at open time).
    Gallery,
    /// An open folder's item list.
    Folder(String),
}

/// An active lightbox session. Created on open, dropped on close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lightbox {
    pub context: LightboxContext,
    /// Length of the context list at open time. Non-zero by construction.
    pub len: NonZeroUsize,
    /// Current position, always `< len`.
    pub index: usize,
}

/// Lightbox navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// The complete interactive state of the page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub view: ViewState,
    pub mode: GalleryMode,
    pub lightbox: Option<Lightbox>,
}

/// A user action, as fed to [`dispatch`].
#[derive(Debug, Clone)]
pub enum Intent {
    /// Select a category. Re-selecting the active category (other than
    /// `All`) toggles back to `All`.
    SelectCategory(CategoryFilter),
    /// Select a media type. Re-selecting the active type clears the filter.
    ToggleMediaType(MediaKind),
    SetSort(SortOrder),
    OpenFolder(String),
    CloseFolder,
    OpenLightbox {
        context: LightboxContext,
        len: NonZeroUsize,
        index: usize,
    },
    CloseLightbox,
    NavigateLightbox(Direction),
}

/// Pure reducer: current session + intent → next session.
///
/// Invalid intents for the current state (closing an unopened folder,
/// navigating a closed lightbox, opening a folder from inside another) are
/// no-ops returning the session unchanged.
pub fn dispatch(session: &Session, intent: Intent) -> Session {
    let mut next = session.clone();

    match intent {
        Intent::SelectCategory(filter) => {
            next.view.category = if filter == session.view.category && filter != CategoryFilter::All
            {
                CategoryFilter::All
            } else {
                filter
            };
        }
        Intent::ToggleMediaType(kind) => {
            next.view.media_type = if session.view.media_type == Some(kind) {
                None
            } else {
                Some(kind)
            };
        }
        Intent::SetSort(order) => {
            next.view.sort = order;
        }
        Intent::OpenFolder(id) => {
            if session.mode == GalleryMode::Gallery {
                next.mode = GalleryMode::Folder(id);
            }
        }
        Intent::CloseFolder => {
            if matches!(session.mode, GalleryMode::Folder(_)) {
                next.mode = GalleryMode::Gallery;
            }
        }
        Intent::OpenLightbox { context, len, index } => {
            next.lightbox = Some(Lightbox {
                context,
                len,
                index: index % len.get(),
            });
        }
        Intent::CloseLightbox => {
            next.lightbox = None;
        }
        Intent::NavigateLightbox(direction) => {
            if let Some(lightbox) = &mut next.lightbox {
                lightbox.index = step(lightbox.index, direction, lightbox.len);
            }
        }
    }

    next
}

/// Wrap-around step: `(index ± 1) mod len`.
pub fn step(index: usize, direction: Direction, len: NonZeroUsize) -> usize {
    let len = len.get();
    match direction {
        Direction::Next => (index + 1) % len,
        Direction::Prev => (index + len - 1) % len,
    }
}

// ============================================================================
// Folder cover rotation
// ============================================================================

/// Rotation period for folder cover images.
pub const ROTATE_PERIOD_MS: u64 = 3000;
/// Delay before the cross-fade transition classes are applied.
pub const SLIDE_TRIGGER_MS: u64 = 50;
/// Delay until the swap is finalized (600ms transition + trigger buffer).
pub const SLIDE_SETTLE_MS: u64 = 650;

/// Cover rotation state for one folder card.
///
/// Each displayed folder with more than one cover source owns a deck; a
/// periodic timer advances it in source order, wrapping at the end. The
/// advance is two-phase, mirroring the cross-fade: [`RotationDeck::begin`]
/// picks the incoming source (the outgoing one is still "current" while the
/// transition runs), and [`RotationDeck::settle`] commits the swap.
///
/// Decks are owned by the rendering pass that created them. Re-rendering the
/// gallery builds a fresh set and drops the old one wholesale, so a stale
/// deck (the leaked-timer bug this design exists to prevent) cannot outlive
/// its card.
#[derive(Debug, Clone)]
pub struct RotationDeck {
    sources: Vec<String>,
    current: usize,
    pending: Option<usize>,
}

impl RotationDeck {
    /// Build a deck over a folder's cover sources. Returns `None` for fewer
    /// than two sources — a single cover never rotates.
    pub fn new(sources: Vec<String>) -> Option<Self> {
        if sources.len() < 2 {
            return None;
        }
        Some(Self {
            sources,
            current: 0,
            pending: None,
        })
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// The source currently shown.
    pub fn current(&self) -> &str {
        &self.sources[self.current]
    }

    /// Phase one: choose the incoming source (next in array order, wrapping)
    /// and return it. The current source is unchanged until [`settle`].
    /// Calling `begin` again before settling returns the same pending source.
    ///
    /// [`settle`]: RotationDeck::settle
    pub fn begin(&mut self) -> &str {
        let next = self.pending.unwrap_or((self.current + 1) % self.sources.len());
        self.pending = Some(next);
        &self.sources[next]
    }

    /// Phase two: commit the pending swap. No-op if no swap was begun.
    pub fn settle(&mut self) {
        if let Some(next) = self.pending.take() {
            self.current = next;
        }
    }

    /// Full tick: begin and settle in one step. Returns the new current.
    pub fn tick(&mut self) -> &str {
        self.begin();
        self.settle();
        self.current()
    }
}

//! Incremental annotation lifecycle for inline grammar checking.
//!
//! The engine is host-agnostic. A host (a browser content script, a test
//! double) reports DOM events through [`HostEvent`] and implements
//! [`FieldHost`] for reading and editing fields and [`OverlaySurface`] for
//! mounting the floating badge and suggestion panel.
//!
//! Control flow:
//!
//! ```text
//! HostEvent -> classifier -> DebounceScheduler -> CheckOrchestrator
//!           -> MatchStore -> badge -> (click) -> panel -> (accept) -> MatchStore
//! ```
//!
//! The engine is single-threaded. Checks run as tokio tasks and report back
//! over a channel that [`Engine::tick`] drains, so it must be driven from
//! inside a tokio runtime.

pub mod classifier;
pub mod engine;
pub mod geometry;
pub mod host;
pub mod overlay;
pub mod render;
pub mod scheduler;
pub mod store;

pub use classifier::is_checkable;
pub use engine::{Engine, HostEvent, TickStats};
pub use host::{FieldHost, Host, HostError, OverlaySurface, replace_chars};
pub use overlay::{BadgeStatus, BadgeView, OverlayManager, PanelAction, PanelView};
pub use scheduler::{DebounceScheduler, FOCUS_GRACE};
pub use store::{MatchRecord, MatchStore};

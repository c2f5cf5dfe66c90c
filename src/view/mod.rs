//! View State
//!
//! Host-independent state machines for every screen. Each network effect is
//! split into `begin_*` (issue a ticket, describe the request), the async
//! call the host performs, and `finish_*` (apply the result if the ticket is
//! still current). The Leptos front-end keeps these behind signals; the
//! terminal front-end drives them through [`crate::driver`].

pub mod detail;
pub mod form;
pub mod lifecycle;
pub mod list;
pub mod nav;
pub mod notice;

pub use detail::{DetailState, DetailView};
pub use form::{
    Draft, FieldErrors, FieldUpdate, FormError, FormView, NoPreviews, Preview, PreviewUrls,
    SubmitOutcome,
};
pub use lifecycle::{Lifecycle, RequestSlot, Ticket};
pub use list::{ConfirmDialog, DeleteOutcome, ListDisplay, ListView, PostCard};
pub use nav::{NavBar, NavLink, NAV_LINKS};
pub use notice::{Notice, NoticeKind, TOAST_TIMEOUT_MS};

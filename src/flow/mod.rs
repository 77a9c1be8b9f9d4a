//! Framework-independent presentation flow.
//!
//! Splash visibility, carousel navigation and the static page content
//! table. Nothing in here knows about the terminal; the [`session`]
//! controller consumes an event stream and hands immutable snapshots to
//! whatever renders them.

pub mod gesture;
pub mod mvi;
pub mod pager;
pub mod pages;
pub mod session;
pub mod splash;

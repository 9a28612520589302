//! Desktop window manager runtime: window registry, pointer gestures, reducer, and the Leptos shell.
//!
//! The pure layers ([`window_manager`], [`gesture`], [`geometry`], [`reducer`]) carry no browser
//! dependencies and are exercised natively by the test suite. [`components`] and [`host`] wire
//! them into the DOM.

pub mod apps;
pub mod assistant;
pub mod clock;
pub mod components;
pub mod config;
pub mod geometry;
pub mod gesture;
pub mod host;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::WindowManagerConfig;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use window_manager::{WindowManagerError, WindowRegistry};

//! Shared UI primitive library for the desktop shell and hosted apps.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the
//! stable `data-ui-*` DOM contract consumed by the shell stylesheet.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Button, ButtonSize, ButtonVariant, DesktopBackdrop, DesktopIconButton, DesktopIconGrid,
    DesktopRoot, DesktopWindowLayer, Dock, DockButton, EmptyState, IconButton, LayoutGap, Panel,
    ResizeHandle, SnapPreview, Stack, StatusBar, StatusBarSection, TextArea, TextField, ToolBar,
    WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

/// Convenience imports for app crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Button, ButtonSize, ButtonVariant, EmptyState, Icon, IconButton, IconName, IconSize,
        LayoutGap, Panel, Stack, TextArea, TextField, ToolBar,
    };
}

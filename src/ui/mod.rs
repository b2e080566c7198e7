//! Text presentation of the directory.
//!
//! ```text
//! DirectoryState → DirectoryViewModel → render_list → String
//! Employee       → EmployeeDetail     → render_detail → String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready list and detail models
//! - [`renderer`]: Plain or colored text layout
//! - [`theme`]: Light and dark palettes and ANSI sequences

pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_detail, render_list};
pub use theme::{Theme, ThemeColors};
pub use viewmodel::{
    DetailSection, DirectoryViewModel, EmployeeDetail, EmployeeRow, EmptyState, HeaderInfo,
    InfoRow, Notice, SearchBarInfo,
};

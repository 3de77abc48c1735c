//! Sitenav UI
//!
//! Browser bindings for [`sitenav_core`].
//!
//! # Components
//!
//! - [`SectionNavigator`] - Drives the page's content panels from a [`NavConfig`]
//!
//! # Building blocks
//!
//! - [`DomView`] - [`SectionView`](sitenav_core::SectionView) over the live document
//! - [`start`] / [`bind_triggers`] - Navigator setup and click wiring
//!
//! # Example
//!
//! ```ignore
//! use leptos::prelude::*;
//! use sitenav_core::NavConfig;
//! use sitenav_ui::SectionNavigator;
//!
//! #[component]
//! fn App() -> impl IntoView {
//!     view! { <SectionNavigator config=NavConfig::default() /> }
//! }
//! ```
//!
//! [`NavConfig`]: sitenav_core::NavConfig

pub mod binding;
pub mod component;
pub mod dom;

pub use binding::{SharedNavigator, bind_triggers, start};
pub use component::SectionNavigator;
pub use dom::{DomView, FADE_CLASS, FADE_CSS};

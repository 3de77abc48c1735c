//! Sitenav Core Library
//!
//! Tab-like section navigation for static documentation pages: one content
//! panel visible at a time, one navigation menu per group, all addressed by
//! deterministic element ids.
//!
//! # Example
//!
//! ```
//! use sitenav_core::{HeadlessView, IdScheme, NavConfig, Navigator, Selection};
//!
//! let view = HeadlessView::site(&IdScheme::default(), "home", &[("home", 1), ("tut", 3)]);
//! let mut nav = Navigator::new(&NavConfig::default(), view).unwrap();
//! nav.initialize();
//!
//! nav.activate_group("tut");
//! nav.activate_section("tut", 2);
//! assert_eq!(nav.active(), &Selection::new("tut", 2));
//! assert_eq!(nav.view().visible(), vec!["tut-2", "tut-nav"]);
//! ```

pub mod config;
pub mod error;
pub mod headless;
pub mod ids;
pub mod navigator;
pub mod registry;
pub mod trigger;
pub mod view;

pub use config::{GroupConfig, NavConfig};
pub use error::{NavError, Result};
pub use headless::HeadlessView;
pub use ids::{IdScheme, join_affixed};
pub use navigator::{Navigator, Selection};
pub use registry::SectionRegistry;
pub use trigger::NavTrigger;
pub use view::SectionView;

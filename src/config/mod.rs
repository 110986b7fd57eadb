//! Dependency configuration and engine settings.
//!
//! - Schema definitions in [`schema`]
//! - Raw meta access and normalization in [`meta`]
//! - Engine-wide settings in [`settings`]
//!
//! # Example
//!
//! ```
//! use cartgate::config::{parse_kind, parse_relationship, DependencyKind, Relationship};
//! use serde_json::json;
//!
//! // Legacy numeric-string codes and unknown values both normalize.
//! assert_eq!(parse_kind(Some(&json!("1"))), DependencyKind::Ownership);
//! assert_eq!(parse_kind(Some(&json!(99))), DependencyKind::Either);
//! assert_eq!(parse_relationship(Some(&json!("and"))), Relationship::All);
//! ```

pub mod meta;
pub mod schema;
pub mod settings;

pub use meta::{
    load_dependency_config, parse_id_list, parse_kind, parse_notice, parse_relationship,
    parse_selection_mode, MetaStore, DEPENDENCY_TYPE_KEY, NOTICE_KEY, RELATIONSHIP_KEY,
    SELECTION_TYPE_KEY, TIED_CATEGORIES_KEY, TIED_PRODUCTS_KEY,
};
pub use schema::{DependencyConfig, DependencyKind, Relationship, SelectionMode};
pub use settings::{EngineSettings, TitleStyle};

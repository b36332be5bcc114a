//! # patricia-rs
//!
//! A PATRICIA tree (compressed radix tree) mapping string keys to values,
//! with a dynamic lookup mode that captures named parameters the way HTTP
//! routers capture `/users/:id`.
//!
//! ## Example
//!
//! ```rust
//! use patricia_rs::Tree;
//!
//! let mut tree: Tree<u64> = Tree::new();
//! tree.insert("romane", 1);
//! tree.insert("romanus", 2);
//!
//! assert_eq!(tree.get("romanus").and_then(|n| n.value()), Some(&2));
//! assert_eq!(tree.get("roman").and_then(|n| n.value()), None);
//! ```
//!
//! ## Named parameters
//!
//! ```rust
//! use patricia_rs::Tree;
//!
//! let mut routes = Tree::new();
//! routes.insert("/users/:id/posts/:post", "show_post");
//!
//! let m = routes.get_dynamic("/users/42/posts/7", ':', '/').unwrap();
//! assert_eq!(m.value(), Some(&"show_post"));
//! assert_eq!(m.params.get("id"), Some("42"));
//! assert_eq!(m.params.get("post"), Some("7"));
//! ```

#![deny(unsafe_code)]

pub mod config;
mod debug;
pub mod edge;
pub mod error;
pub mod matcher;
pub mod node;
pub mod sort;
pub mod sync;
pub mod tree;

pub use config::Config;
pub use edge::Edge;
pub use error::{Error, Result};
pub use matcher::{Params, Pattern};
pub use node::Node;
pub use sort::SortingTechnique;
pub use sync::SyncTree;
pub use tree::{Iter, Match, Tree};

#[cfg(test)]
mod proptests;

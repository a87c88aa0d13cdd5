//! Closed enumerations with stable integer identities.
//!
//! A host type declares a fixed set of named members once, at definition
//! time; each member carries a small integer id that external records store.
//! This crate provides:
//!
//! - [`Member`]: one immutable (id, name, payload) triple
//! - [`EnumBuilder`]: definition-time accumulation with eager validation
//! - [`EnumRegistry`]: the frozen, read-only member set with the query surface
//! - [`resolve`]/[`FieldInput`]: conversion of arbitrary persistence-boundary
//!   inputs into the canonical stored id
//! - [`Enumerated`]/[`define_enum!`]: the host-type facade
//!
//! ```
//! use ordinal_registry::{Enumerated, define_enum};
//!
//! #[derive(Debug, Default)]
//! struct Role;
//!
//! define_enum! {
//! 	Role {
//! 		member admin;
//! 		member manager;
//! 		member employee;
//! 	}
//! }
//!
//! assert_eq!(Role::admin().id().get(), 1);
//! assert!(Role::is_valid_name("manager"));
//! assert_eq!(Role::find(3).unwrap().name(), &"employee");
//! ```
//!
//! Registries are built during single-threaded startup and immutable from
//! then on, so they are freely shared by concurrent readers.

pub mod builder;
pub mod define;
pub mod error;
pub mod member;
pub mod name;
pub mod registry;
pub mod resolve;

pub use builder::{EnumBuilder, MemberOptions};
pub use define::Enumerated;
pub use error::EnumError;
pub use member::{Member, MemberId};
pub use name::MemberName;
pub use registry::EnumRegistry;
pub use resolve::{FieldInput, resolve};

//! `bv-light`: point light sources and the light field they superpose into.
//!
//! # Crate layout
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`source`] | `LightSource`: one signed point emitter               |
//! | [`field`]  | `LightField`: intensity and steering-gradient queries |
//!
//! Both types are read-only during a tick: vehicles query the field while
//! evolving and nothing mutates it until the next world is built.

pub mod field;
pub mod source;


pub use field::LightField;
pub use source::{LightSource, NEAR_FIELD_RADIUS_SQ};

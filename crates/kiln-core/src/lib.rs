//! Core types for the Kiln engine.
//!
//! This crate provides the foundational types shared by the frame-command
//! crates:
//! - Colors and screen-space rectangles
//! - Opaque handles into external resource stores (meshes, textures,
//!   transforms, skeletons)

pub mod handle;
pub mod types;

pub use handle::{MeshHandle, SkeletonId, SkinHandle, TextureId, TransformId};
pub use types::{Color, Rect};

//! Per-frame render command stream for the Kiln engine.
//!
//! Gameplay, UI, and debug-draw code append typed records to a
//! [`PushBuffer`] during the update phase; at the end of the frame the
//! renderer walks the buffer once, in emission order, through a
//! [`CommandSink`], then the buffer is reset for the next frame. Producers
//! and the renderer share only the record types, never each other's
//! internals.
//!
//! # Core Types
//!
//! - [`PushBuffer`]: append-only command stream with a fixed byte budget
//! - [`FrameCommand`]: closed sum type of record kinds
//! - [`CommandSink`]: renderer-facing dispatch trait, one method per kind
//!
//! # Usage
//!
//! ```
//! use glam::Vec2;
//! use kiln_command::{push_text, PushBuffer};
//! use kiln_core::{Color, MeshHandle, TransformId};
//!
//! let mut buffer = PushBuffer::with_max_bytes(64 * 1024);
//!
//! // Update phase: producers append records.
//! buffer.push_mesh(MeshHandle::new(3), TransformId::new(0), Color::WHITE)?;
//! buffer.push_ui_quad(10.0, 10.0, 110.0, 40.0, Color::BLACK.with_alpha(0.7))?;
//! push_text!(buffer, Vec2::new(16.0, 16.0), Color::WHITE, "fps: {}", 60)?;
//!
//! // Render phase: the renderer scans once, then the buffer is reset.
//! # struct NullSink;
//! # impl kiln_command::CommandSink for NullSink {
//! #     fn ui_quad(&mut self, _: kiln_core::Rect, _: Color) {}
//! #     fn ui_text(&mut self, _: &str, _: Vec2, _: Color) {}
//! #     fn mesh(&mut self, _: MeshHandle, _: TransformId, _: Color) {}
//! #     fn skinned_mesh(
//! #         &mut self,
//! #         _: kiln_core::SkinHandle,
//! #         _: TransformId,
//! #         _: kiln_core::SkeletonId,
//! #         _: Color,
//! #     ) {
//! #     }
//! #     fn blit(&mut self, _: kiln_core::TextureId, _: kiln_core::Rect) {}
//! #     fn axis_gizmo(&mut self, _: glam::Vec3, _: glam::Vec3, _: glam::Vec3, _: glam::Vec3) {}
//! # }
//! # let mut renderer = NullSink;
//! buffer.scan(&mut renderer)?;
//! buffer.reset();
//! # Ok::<(), kiln_command::CommandError>(())
//! ```

pub mod macros;
pub mod push_buffer;
pub mod record;
pub mod sink;

pub use push_buffer::{CommandError, PushBuffer};
pub use record::{CommandKind, FrameCommand, TextSpan};
pub use sink::CommandSink;

//! Renderer-facing dispatch for the command stream.

use glam::{Vec2, Vec3};
use kiln_core::{Color, MeshHandle, Rect, SkeletonId, SkinHandle, TextureId, TransformId};

/// Per-kind handlers invoked by [`PushBuffer::scan`](crate::PushBuffer::scan).
///
/// The scan calls exactly one method per record, in emission order. The set
/// of methods is closed over [`FrameCommand`](crate::FrameCommand); adding a
/// record kind extends this trait, so a backend that forgets to handle it
/// fails to compile instead of silently skipping records.
pub trait CommandSink {
    /// Handle a solid UI rectangle.
    fn ui_quad(&mut self, rect: Rect, color: Color);

    /// Handle a UI text run. `text` borrows from the buffer's arena and is
    /// only valid for the duration of the call.
    fn ui_text(&mut self, text: &str, position: Vec2, color: Color);

    /// Handle a static mesh draw.
    fn mesh(&mut self, mesh: MeshHandle, transform: TransformId, diffuse: Color);

    /// Handle a skinned mesh draw.
    fn skinned_mesh(
        &mut self,
        skin: SkinHandle,
        transform: TransformId,
        skeleton: SkeletonId,
        diffuse: Color,
    );

    /// Handle a textured blit.
    fn blit(&mut self, texture: TextureId, rect: Rect);

    /// Handle a debug axis gizmo.
    fn axis_gizmo(&mut self, origin: Vec3, x_end: Vec3, y_end: Vec3, z_end: Vec3);
}

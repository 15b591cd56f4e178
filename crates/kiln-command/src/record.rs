//! Frame command records.

use glam::{Vec2, Vec3};
use kiln_core::{Color, MeshHandle, Rect, SkeletonId, SkinHandle, TextureId, TransformId};
use std::mem::size_of;

/// Bytes charged per record for its leading kind tag.
pub(crate) const TAG_BYTES: usize = size_of::<u32>();

/// Record kinds, in wire-tag order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum CommandKind {
    /// Solid UI rectangle.
    UiQuad = 0,
    /// UI text run.
    UiText = 1,
    /// Static mesh draw.
    Mesh = 2,
    /// Skinned mesh draw.
    SkinnedMesh = 3,
    /// Textured screen-space blit.
    Blit = 4,
    /// Debug axis gizmo.
    AxisGizmo = 5,
}

impl CommandKind {
    /// Display name for logs and overlays.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::UiQuad => "ui_quad",
            Self::UiText => "ui_text",
            Self::Mesh => "mesh",
            Self::SkinnedMesh => "skinned_mesh",
            Self::Blit => "blit",
            Self::AxisGizmo => "axis_gizmo",
        }
    }
}

/// Range of bytes inside a [`PushBuffer`](crate::PushBuffer) text arena.
///
/// Spans are only meaningful against the buffer that issued them, and only
/// until that buffer is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSpan {
    /// Byte offset into the arena.
    pub offset: u32,
    /// Length in bytes.
    pub len: u32,
}

impl TextSpan {
    /// Build a span from arena byte coordinates, or `None` if either falls
    /// outside the range a span can address.
    pub(crate) fn from_range(offset: usize, len: usize) -> Option<Self> {
        Some(Self {
            offset: u32::try_from(offset).ok()?,
            len: u32::try_from(len).ok()?,
        })
    }
}

/// One record in the per-frame command stream.
///
/// Handles and ids reference external stores (mesh pool, entity/transform
/// storage, texture table) that must stay valid until the renderer consumes
/// the buffer later in the same frame; the stream itself owns nothing but
/// the copied text bytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameCommand {
    /// Solid rectangle in screen-space pixels.
    UiQuad {
        /// Rectangle to fill.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// Text run in screen-space pixels.
    UiText {
        /// Text bytes in the buffer's arena.
        span: TextSpan,
        /// Baseline position in pixels.
        position: Vec2,
        /// Text color.
        color: Color,
    },
    /// Static mesh draw.
    Mesh {
        /// Mesh in the mesh pool.
        mesh: MeshHandle,
        /// Transform in the entity storage.
        transform: TransformId,
        /// Diffuse tint.
        diffuse: Color,
    },
    /// Skinned mesh draw.
    SkinnedMesh {
        /// Skinned mesh in the mesh pool.
        skin: SkinHandle,
        /// Root transform in the entity storage.
        transform: TransformId,
        /// Per-bone transform sequence owned by the entity store.
        skeleton: SkeletonId,
        /// Diffuse tint.
        diffuse: Color,
    },
    /// Textured screen-space blit.
    Blit {
        /// Texture in the texture table.
        texture: TextureId,
        /// Destination rectangle in pixels.
        rect: Rect,
    },
    /// Axis gizmo: an origin and three axis endpoints.
    AxisGizmo {
        /// Gizmo origin.
        origin: Vec3,
        /// End of the X axis line.
        x_end: Vec3,
        /// End of the Y axis line.
        y_end: Vec3,
        /// End of the Z axis line.
        z_end: Vec3,
    },
}

impl FrameCommand {
    /// The kind tag of this record.
    #[must_use]
    pub const fn kind(&self) -> CommandKind {
        match self {
            Self::UiQuad { .. } => CommandKind::UiQuad,
            Self::UiText { .. } => CommandKind::UiText,
            Self::Mesh { .. } => CommandKind::Mesh,
            Self::SkinnedMesh { .. } => CommandKind::SkinnedMesh,
            Self::Blit { .. } => CommandKind::Blit,
            Self::AxisGizmo { .. } => CommandKind::AxisGizmo,
        }
    }

    /// Bytes this record charges against the buffer budget: the kind tag
    /// plus the payload as the renderer consumes it, including text bytes
    /// for text records.
    #[must_use]
    pub fn encoded_size(&self) -> usize {
        let payload = match *self {
            Self::UiQuad { .. } => size_of::<Rect>() + size_of::<Color>(),
            Self::UiText { span, .. } => {
                size_of::<Vec2>() + size_of::<Color>() + span.len as usize
            }
            Self::Mesh { .. } => {
                size_of::<MeshHandle>() + size_of::<TransformId>() + size_of::<Color>()
            }
            Self::SkinnedMesh { .. } => {
                size_of::<SkinHandle>()
                    + size_of::<TransformId>()
                    + size_of::<SkeletonId>()
                    + size_of::<Color>()
            }
            Self::Blit { .. } => size_of::<TextureId>() + size_of::<Rect>(),
            Self::AxisGizmo { .. } => 4 * size_of::<Vec3>(),
        };
        TAG_BYTES + payload
    }
}

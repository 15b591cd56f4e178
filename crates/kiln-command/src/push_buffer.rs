//! Append-only per-frame command buffer.

use std::collections::TryReserveError;
use std::fmt::{self, Write as _};

use glam::{Mat4, Vec2, Vec3};
use kiln_collections::{ArrayError, GrowArray};
use kiln_core::{Color, MeshHandle, Rect, SkeletonId, SkinHandle, TextureId, TransformId};
use thiserror::Error;
use tracing::warn;

use crate::record::{FrameCommand, TextSpan};
use crate::sink::CommandSink;

/// Errors from [`PushBuffer`] operations.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The allocator could not satisfy a growth request. Existing records
    /// are intact and the push can be retried.
    #[error("allocation failed reserving {requested} bytes")]
    Allocation {
        /// Bytes the failed reservation asked for.
        requested: usize,
        /// Underlying reservation error.
        #[source]
        source: TryReserveError,
    },

    /// Appending the record would exceed the buffer's byte budget. Distinct
    /// from [`Allocation`](Self::Allocation): this is a capacity-planning
    /// bug, not memory exhaustion.
    #[error("push buffer out of space: record needs {needed} bytes, {remaining} remaining")]
    OutOfSpace {
        /// Encoded size of the rejected record.
        needed: usize,
        /// Bytes left under the budget.
        remaining: usize,
    },

    /// A text record's span does not lie inside the text arena. The stream
    /// is corrupt; the caller must abandon the frame rather than render
    /// from it.
    #[error("text span at {offset}+{len} overruns text arena of {arena_len} bytes")]
    MalformedText {
        /// Span byte offset.
        offset: usize,
        /// Span byte length.
        len: usize,
        /// Arena length at scan time.
        arena_len: usize,
    },

    /// The text arena outgrew the range a span can address; the record was
    /// rejected at push time and the arena rolled back.
    #[error("text at arena offset {offset} (+{len} bytes) exceeds span range")]
    SpanRange {
        /// Arena byte offset of the rejected text.
        offset: usize,
        /// Length of the rejected text in bytes.
        len: usize,
    },

    /// Formatting into the text arena failed.
    #[error("text formatting failed")]
    Format(#[from] fmt::Error),
}

/// Append-only, per-frame command stream with a fixed byte budget.
///
/// Allocated once at startup; producers append during the update phase, the
/// renderer consumes via [`scan`](Self::scan), and [`reset`](Self::reset)
/// clears it for the next frame. Backing allocations are reused across
/// frames and never shrink.
///
/// The budget counts every record's encoded size (kind tag + payload + text
/// bytes). A record that exactly fills the remaining budget is accepted;
/// one byte more is rejected with [`CommandError::OutOfSpace`].
#[derive(Debug)]
pub struct PushBuffer {
    commands: GrowArray<FrameCommand>,
    /// Text arena; spans in `UiText` records index into this.
    text: String,
    bytes_used: usize,
    max_bytes: usize,
}

impl PushBuffer {
    /// Create a buffer with the given byte budget.
    #[must_use]
    pub const fn with_max_bytes(max_bytes: usize) -> Self {
        Self {
            commands: GrowArray::new(),
            text: String::new(),
            bytes_used: 0,
            max_bytes,
        }
    }

    /// Append a static mesh draw.
    pub fn push_mesh(
        &mut self,
        mesh: MeshHandle,
        transform: TransformId,
        diffuse: Color,
    ) -> Result<(), CommandError> {
        self.append(FrameCommand::Mesh {
            mesh,
            transform,
            diffuse,
        })
    }

    /// Append a skinned mesh draw.
    ///
    /// `skeleton` resolves to a per-bone transform sequence owned by the
    /// entity store; it must stay valid until the buffer is consumed this
    /// frame.
    pub fn push_skinned_mesh(
        &mut self,
        skin: SkinHandle,
        transform: TransformId,
        skeleton: SkeletonId,
        diffuse: Color,
    ) -> Result<(), CommandError> {
        self.append(FrameCommand::SkinnedMesh {
            skin,
            transform,
            skeleton,
            diffuse,
        })
    }

    /// Append a solid UI rectangle from edge coordinates in pixels.
    pub fn push_ui_quad(
        &mut self,
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        color: Color,
    ) -> Result<(), CommandError> {
        self.push_ui_quad_rect(Rect::new(left, top, right, bottom), color)
    }

    /// Append a solid UI rectangle.
    pub fn push_ui_quad_rect(&mut self, rect: Rect, color: Color) -> Result<(), CommandError> {
        self.append(FrameCommand::UiQuad { rect, color })
    }

    /// Append a UI text run. The text is copied into the buffer's arena, so
    /// the caller's string may be dropped immediately.
    pub fn push_ui_text(
        &mut self,
        text: &str,
        position: Vec2,
        color: Color,
    ) -> Result<(), CommandError> {
        let start = self.text.len();
        self.reserve_text(text.len())?;
        self.text.push_str(text);
        self.finish_text(start, position, color)
    }

    /// Format a UI text run directly into the arena, then append it.
    ///
    /// Prefer the [`push_text!`](crate::push_text) macro over calling this
    /// with a hand-built [`fmt::Arguments`].
    pub fn push_ui_text_fmt(
        &mut self,
        position: Vec2,
        color: Color,
        args: fmt::Arguments<'_>,
    ) -> Result<(), CommandError> {
        let start = self.text.len();
        if let Some(literal) = args.as_str() {
            // Constant format strings skip the formatter.
            self.reserve_text(literal.len())?;
            self.text.push_str(literal);
        } else {
            let mut writer = ArenaWriter {
                arena: &mut self.text,
                alloc_error: None,
            };
            if writer.write_fmt(args).is_err() {
                let alloc_error = writer.alloc_error;
                self.text.truncate(start);
                return Err(match alloc_error {
                    Some((requested, source)) => CommandError::Allocation { requested, source },
                    None => CommandError::Format(fmt::Error),
                });
            }
        }
        self.finish_text(start, position, color)
    }

    /// Append a textured blit at `(x, y)` with size `(w, h)` in pixels.
    pub fn push_texture(
        &mut self,
        texture: TextureId,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    ) -> Result<(), CommandError> {
        self.append(FrameCommand::Blit {
            texture,
            rect: Rect::from_pos_size(x, y, w, h),
        })
    }

    /// Append an axis gizmo derived from a transform matrix: the origin is
    /// the transformed zero point, the axis endpoints the transformed unit
    /// basis points.
    pub fn push_debug_matrix(&mut self, matrix: Mat4) -> Result<(), CommandError> {
        self.append(FrameCommand::AxisGizmo {
            origin: matrix.transform_point3(Vec3::ZERO),
            x_end: matrix.transform_point3(Vec3::X),
            y_end: matrix.transform_point3(Vec3::Y),
            z_end: matrix.transform_point3(Vec3::Z),
        })
    }

    /// Append a point marker gizmo: unit-length axes from `position`.
    pub fn push_debug_position(&mut self, position: Vec3) -> Result<(), CommandError> {
        self.append(FrameCommand::AxisGizmo {
            origin: position,
            x_end: position + Vec3::X,
            y_end: position + Vec3::Y,
            z_end: position + Vec3::Z,
        })
    }

    /// Walk every record once, in emission order, dispatching each to the
    /// matching `sink` method.
    ///
    /// Fails with [`CommandError::MalformedText`] if a text record's span
    /// falls outside the arena; that error is fatal for the frame and must
    /// not be ignored.
    pub fn scan<S: CommandSink>(&self, sink: &mut S) -> Result<(), CommandError> {
        for command in &self.commands {
            match *command {
                FrameCommand::UiQuad { rect, color } => sink.ui_quad(rect, color),
                FrameCommand::UiText {
                    span,
                    position,
                    color,
                } => {
                    let text = self.text(span).ok_or(CommandError::MalformedText {
                        offset: span.offset as usize,
                        len: span.len as usize,
                        arena_len: self.text.len(),
                    })?;
                    sink.ui_text(text, position, color);
                }
                FrameCommand::Mesh {
                    mesh,
                    transform,
                    diffuse,
                } => sink.mesh(mesh, transform, diffuse),
                FrameCommand::SkinnedMesh {
                    skin,
                    transform,
                    skeleton,
                    diffuse,
                } => sink.skinned_mesh(skin, transform, skeleton, diffuse),
                FrameCommand::Blit { texture, rect } => sink.blit(texture, rect),
                FrameCommand::AxisGizmo {
                    origin,
                    x_end,
                    y_end,
                    z_end,
                } => sink.axis_gizmo(origin, x_end, y_end, z_end),
            }
        }
        Ok(())
    }

    /// Clear all records and text for the next frame.
    ///
    /// Logical reset only: allocations and the byte budget are unchanged.
    pub fn reset(&mut self) {
        self.commands.clear();
        self.text.clear();
        self.bytes_used = 0;
    }

    /// Resolve a text span against the arena.
    #[must_use]
    pub fn text(&self, span: TextSpan) -> Option<&str> {
        let offset = span.offset as usize;
        self.text.get(offset..offset + span.len as usize)
    }

    /// Records appended so far, in emission order.
    pub fn commands(&self) -> impl Iterator<Item = &FrameCommand> {
        self.commands.iter()
    }

    /// Number of records appended this frame.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no records have been appended this frame.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Bytes charged against the budget so far.
    #[inline]
    #[must_use]
    pub const fn bytes_used(&self) -> usize {
        self.bytes_used
    }

    /// The fixed byte budget.
    #[inline]
    #[must_use]
    pub const fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Bytes still available under the budget.
    #[inline]
    #[must_use]
    pub const fn bytes_remaining(&self) -> usize {
        self.max_bytes - self.bytes_used
    }

    /// Shared append path: budget check, fallible record-storage growth,
    /// then the write.
    fn append(&mut self, command: FrameCommand) -> Result<(), CommandError> {
        let needed = command.encoded_size();
        let remaining = self.bytes_remaining();
        if needed > remaining {
            warn!(
                kind = command.kind().name(),
                needed, remaining, "push buffer out of space, dropping record"
            );
            return Err(CommandError::OutOfSpace { needed, remaining });
        }
        self.commands.push(command).map_err(|err| match err {
            ArrayError::Allocation { requested, source } => CommandError::Allocation {
                requested: requested * std::mem::size_of::<FrameCommand>(),
                source,
            },
            // push() grows one element at a time, so a counted-capacity
            // overflow surfaces as an allocator refusal first.
            ArrayError::CapacityOverflow { requested } => CommandError::OutOfSpace {
                needed: requested.saturating_mul(std::mem::size_of::<FrameCommand>()),
                remaining,
            },
        })?;
        self.bytes_used += needed;
        Ok(())
    }

    /// Fallibly reserve arena room for `additional` text bytes.
    fn reserve_text(&mut self, additional: usize) -> Result<(), CommandError> {
        self.text
            .try_reserve(additional)
            .map_err(|source| CommandError::Allocation {
                requested: additional,
                source,
            })
    }

    /// Build and append the text record for arena bytes `[start..]`,
    /// rolling the arena back if the record is rejected.
    fn finish_text(
        &mut self,
        start: usize,
        position: Vec2,
        color: Color,
    ) -> Result<(), CommandError> {
        let len = self.text.len() - start;
        let Some(span) = TextSpan::from_range(start, len) else {
            self.text.truncate(start);
            return Err(CommandError::SpanRange { offset: start, len });
        };
        let result = self.append(FrameCommand::UiText {
            span,
            position,
            color,
        });
        if result.is_err() {
            self.text.truncate(start);
        }
        result
    }
}

/// Routes formatter output into the text arena with fallible growth, so an
/// allocator refusal mid-format surfaces as an error instead of aborting.
struct ArenaWriter<'a> {
    arena: &'a mut String,
    alloc_error: Option<(usize, TryReserveError)>,
}

impl fmt::Write for ArenaWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if let Err(source) = self.arena.try_reserve(s.len()) {
            self.alloc_error = Some((s.len(), source));
            return Err(fmt::Error);
        }
        self.arena.push_str(s);
        Ok(())
    }
}

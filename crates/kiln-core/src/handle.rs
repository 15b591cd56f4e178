//! Opaque handles into external resource stores.
//!
//! Frame commands reference meshes, textures, transforms, and skeletons by
//! id. The stores that own those resources (mesh pool, texture table,
//! entity/transform storage) live outside this workspace; the ids here are
//! carried opaquely and resolved by the renderer at consumption time.
//!
//! Handles are indices rather than addresses so that records stay valid when
//! the owning store reallocates.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

macro_rules! handle_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
        )]
        #[repr(transparent)]
        pub struct $name(pub u32);

        impl $name {
            /// Create a handle from a raw index.
            #[inline]
            #[must_use]
            pub const fn new(index: u32) -> Self {
                Self(index)
            }

            /// Raw index into the owning store.
            #[inline]
            #[must_use]
            pub const fn index(self) -> u32 {
                self.0
            }
        }
    };
}

handle_type! {
    /// Handle to a static mesh in the mesh pool.
    MeshHandle
}

handle_type! {
    /// Handle to a skinned mesh in the mesh pool.
    SkinHandle
}

handle_type! {
    /// Id of a texture in the texture table.
    TextureId
}

handle_type! {
    /// Index of a transform in the entity/transform storage.
    TransformId
}

handle_type! {
    /// Index of a skeleton (a per-bone transform sequence) owned by the
    /// entity store.
    SkeletonId
}

//! Push-buffer hot path benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::{Vec2, Vec3};
use kiln_command::{CommandSink, PushBuffer};
use kiln_core::{Color, MeshHandle, Rect, SkeletonId, SkinHandle, TextureId, TransformId};

struct NullSink;

impl CommandSink for NullSink {
    fn ui_quad(&mut self, rect: Rect, color: Color) {
        black_box((rect, color));
    }

    fn ui_text(&mut self, text: &str, position: Vec2, color: Color) {
        black_box((text.len(), position, color));
    }

    fn mesh(&mut self, mesh: MeshHandle, transform: TransformId, diffuse: Color) {
        black_box((mesh, transform, diffuse));
    }

    fn skinned_mesh(
        &mut self,
        skin: SkinHandle,
        transform: TransformId,
        skeleton: SkeletonId,
        diffuse: Color,
    ) {
        black_box((skin, transform, skeleton, diffuse));
    }

    fn blit(&mut self, texture: TextureId, rect: Rect) {
        black_box((texture, rect));
    }

    fn axis_gizmo(&mut self, origin: Vec3, x_end: Vec3, y_end: Vec3, z_end: Vec3) {
        black_box((origin, x_end, y_end, z_end));
    }
}

fn bench_push_mesh(c: &mut Criterion) {
    let mut buffer = PushBuffer::with_max_bytes(16 * 1024 * 1024);
    c.bench_function("push_mesh_4096", |b| {
        b.iter(|| {
            for i in 0..4096u32 {
                buffer
                    .push_mesh(
                        MeshHandle::new(black_box(i)),
                        TransformId::new(i),
                        Color::WHITE,
                    )
                    .unwrap();
            }
            buffer.reset();
        });
    });
}

fn bench_scan(c: &mut Criterion) {
    let mut buffer = PushBuffer::with_max_bytes(16 * 1024 * 1024);
    for i in 0..4096u32 {
        buffer
            .push_mesh(MeshHandle::new(i), TransformId::new(i), Color::WHITE)
            .unwrap();
        if i % 16 == 0 {
            buffer.push_debug_position(Vec3::ONE).unwrap();
        }
    }

    c.bench_function("scan_mixed_4352", |b| {
        b.iter(|| {
            let mut sink = NullSink;
            buffer.scan(&mut sink).unwrap();
        });
    });
}

criterion_group!(benches, bench_push_mesh, bench_scan);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pipit::{FrameBuffer, Renderer, ScreenGeometry};
use std::io;

fn bench_render_frame(c: &mut Criterion) {
    let renderer = Renderer::new();
    let mut group = c.benchmark_group("render_frame");

    // Common terminal sizes, from a split pane up to a 4K full-screen window
    let sizes = [(24u16, 80u16), (50, 200), (120, 400)];

    for &(rows, cols) in &sizes {
        let geometry = ScreenGeometry::new(rows, cols).expect("non-zero geometry");
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", cols, rows)),
            &geometry,
            |b, &geometry| {
                b.iter(|| {
                    let frame = renderer.render_frame(black_box(geometry)).unwrap();
                    frame.flush_to(&mut io::sink()).unwrap();
                });
            },
        );
    }

    group.finish();
}

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_append");

    for &fragments in &[100usize, 1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(fragments),
            &fragments,
            |b, &fragments| {
                b.iter(|| {
                    let mut frame = FrameBuffer::new();
                    for _ in 0..fragments {
                        frame.append(black_box("~\r\n")).unwrap();
                    }
                    black_box(frame.len())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_render_frame, bench_append);
criterion_main!(benches);

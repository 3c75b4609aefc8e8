// Copyright 2025 the Bedview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bedview_scene::{
    BoardLocation, BoardSide, CameraFrames, CameraId, CameraSnapshot, FeederSnapshot, Frame,
    HeadSnapshot, Location, MachineSnapshot, NavScene, Placement, hit_test,
};
use bedview_transform::{ViewTransform, WorkspaceBounds};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;

fn machine(boards: usize, placements_per_board: usize, feeders: usize) -> MachineSnapshot {
    let boards = (0..boards)
        .map(|b| BoardLocation {
            location: Location::mm(20.0 + 60.0 * (b % 5) as f64, 20.0 + 60.0 * (b / 5) as f64),
            side: if b % 2 == 0 { BoardSide::Top } else { BoardSide::Bottom },
            placements: (0..placements_per_board)
                .map(|p| Placement {
                    id: format!("R{p}"),
                    side: if p % 3 == 0 { BoardSide::Bottom } else { BoardSide::Top },
                    location: Location::mm((p % 10) as f64 * 4.0, (p / 10) as f64 * 4.0),
                })
                .collect(),
        })
        .collect();
    let feeders = (0..feeders)
        .map(|f| FeederSnapshot {
            name: format!("F{f}"),
            pick_location: (f % 7 != 0).then(|| Location::mm(10.0 + 8.0 * f as f64, 390.0)),
        })
        .collect();
    MachineSnapshot {
        bed: WorkspaceBounds::from_extents(400.0, 400.0).unwrap(),
        boards,
        feeders,
        fixed_cameras: vec![],
        heads: vec![HeadSnapshot {
            cameras: vec![CameraSnapshot {
                id: CameraId(0),
                name: "Top".to_string(),
                location: Location::mm(200.0, 200.0),
                units_per_pixel: Location::mm(0.02, 0.02),
                width: 640,
                height: 480,
            }],
            ..Default::default()
        }],
    }
}

fn bench_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("bedview_scene");

    let mut view = ViewTransform::new(WorkspaceBounds::from_extents(400.0, 400.0).unwrap());
    view.set_viewport_size(1280.0, 720.0);
    let mut frames = CameraFrames::new();
    frames
        .slot(CameraId(0))
        .publish(Frame::new(640, 480, vec![0_u8; 640 * 480 * 4]).unwrap());

    for (boards, placements) in [(4, 50), (20, 200)] {
        let m = machine(boards, placements, 40);
        let scene = NavScene::default();
        group.bench_function(format!("build(boards={boards},placements={placements})"), |b| {
            b.iter(|| scene.build(black_box(&m), &view, &frames, false));
        });
        group.bench_function(format!("hit_test(boards={boards},placements={placements})"), |b| {
            b.iter(|| hit_test(black_box(&m), &view, Point::new(640.0, 360.0), 6.0));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scene);
criterion_main!(benches);

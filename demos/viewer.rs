use ::rand::{rngs::StdRng, Rng, SeedableRng};
use macroquad::prelude::*;
use scatter_triangulation::{Triangulator, Vec2 as Point};

const POINT_COUNT: usize = 24;

fn window_conf() -> Conf {
    Conf {
        window_title: "scatter_triangulation".to_owned(),
        window_width: 640,
        window_height: 640,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let points: Vec<Point> = (0..POINT_COUNT)
        .map(|_| {
            Point::new(
                rng.random_range(160.0..480.0),
                rng.random_range(160.0..480.0),
            )
        })
        .collect();

    let mut triangulator = Triangulator::new();
    triangulator.add_points(points.clone());
    let mut triangles = Vec::new();
    let report = triangulator
        .triangulate_with(|triangle| triangles.push(triangle))
        .unwrap();
    println!(
        "{} triangles ({} degenerate, {} stuck chains)",
        report.triangles, report.degenerate_triangles, report.stuck_chains
    );

    loop {
        clear_background(BLACK);

        for triangle in triangles.iter() {
            for i in 0..3 {
                let j = (i + 1) % 3;
                draw_line(
                    triangle[i].x,
                    triangle[i].y,
                    triangle[j].x,
                    triangle[j].y,
                    1.,
                    WHITE,
                );
            }
        }
        for point in points.iter() {
            draw_circle(point.x, point.y, 3., RED);
        }

        next_frame().await
    }
}

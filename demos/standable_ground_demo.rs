#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
//! Standable ground demo.
//!
//! Builds a small height-field terrain (or loads an OBJ file given on the command
//! line), runs the Show Standable Ground command on it and prints which faces
//! came out standable.
//!
//! Run with: `cargo run --example standable_ground_demo [mesh.obj] [max_degrees]`

use standable_ground::{
    load_obj, Options, Result, Scene, SceneObject, ShowStandableGround, Vec3,
};

/// Generate a grid of quads over a bumpy height field.
fn create_terrain(n: usize, size: f32) -> SceneObject {
    let step = size / n as f32;
    let height = |x: f32, y: f32| 0.6 * (x * 1.3).sin() * (y * 0.9).cos();

    let mut vertices = Vec::with_capacity((n + 1) * (n + 1));
    for j in 0..=n {
        for i in 0..=n {
            let x = i as f32 * step;
            let y = j as f32 * step;
            vertices.push(Vec3::new(x, y, height(x, y)));
        }
    }

    let row = (n + 1) as u32;
    let mut faces = Vec::with_capacity(n * n);
    for j in 0..n as u32 {
        for i in 0..n as u32 {
            let v0 = j * row + i;
            faces.push(vec![v0, v0 + 1, v0 + row + 1, v0 + row]);
        }
    }

    SceneObject::new("Terrain", vertices, faces)
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let object = match args.next() {
        Some(path) => load_obj(&path)?
            .into_iter()
            .next()
            .unwrap_or_else(|| SceneObject::empty(path)),
        None => create_terrain(12, 6.0),
    };
    let max_degrees = args
        .next()
        .and_then(|s| s.parse::<f32>().ok())
        .unwrap_or(45.0);

    let mut scene = Scene::new();
    scene.add_active(object)?;

    let command = ShowStandableGround::new(Options::default().with_max_steepness(max_degrees));
    let report = command.execute(&mut scene)?;

    println!("{} at {max_degrees} degrees:", report.source);
    println!("  standable:     {}", report.standable);
    println!("  non-standable: {}", report.non_standable);
    if report.degenerate > 0 {
        println!("  degenerate:    {}", report.degenerate);
    }

    if let Some(marked) = scene.get(&report.object) {
        let standable: Vec<usize> = marked
            .face_materials()
            .iter()
            .enumerate()
            .filter(|&(_, &slot)| slot == 0)
            .map(|(face, _)| face)
            .collect();
        println!("  standable faces of '{}': {standable:?}", marked.name());
    }

    Ok(())
}

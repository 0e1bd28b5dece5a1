// Copyright 2026 the Quadtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f32::consts::PI;

use glam::{Quat, Vec3};
use quadtext::{Motion, Ray, StyleProperty, TextMesh, Transform, WordBoundaries};

use crate::util::{cell_style, grid_font};

fn text_mesh(text: &str) -> TextMesh {
    let mut mesh = TextMesh::new(Some(grid_font()), text);
    mesh.set_style(cell_style());
    mesh
}

fn ray_at(x: f32, y: f32) -> Ray {
    Ray::new(Vec3::new(x, y, -10.0), Vec3::Z)
}

#[test]
fn pick_word_under_pointer() {
    let mut mesh = text_mesh("Hi Hello");
    mesh.update();

    let click = mesh.pick(&ray_at(4.5, -0.5)).unwrap();
    assert_eq!(click.index, 4);
    assert_eq!(mesh.character_at(click.index), Some('e'));
    assert_eq!(
        mesh.word_at(click.index, &WordBoundaries::default()).as_deref(),
        Some("Hello")
    );
}

#[test]
fn pick_second_row() {
    let mut mesh = text_mesh("Hi\nHello");
    mesh.update();

    let click = mesh.pick(&ray_at(0.5, -1.5)).unwrap();
    assert_eq!(click.index, 3);
    assert_eq!(mesh.pick(&ray_at(2.5, -0.5)), None);
}

#[test]
fn pick_centered_text() {
    let mut mesh = text_mesh("Hello");
    mesh.set(StyleProperty::Alignment(quadtext::Alignment::Center));
    mesh.update();

    assert_eq!(mesh.pick(&ray_at(0.0, -0.5)).map(|c| c.index), Some(2));
    assert_eq!(mesh.pick(&ray_at(-2.4, -0.5)).map(|c| c.index), Some(0));
}

#[test]
fn pick_text_facing_the_other_way() {
    let mut mesh = text_mesh("Hello");
    mesh.set_transform(Transform::new(Vec3::ZERO, Quat::from_rotation_y(PI)));
    mesh.update();

    // Seen from behind the glyph order is mirrored.
    let ray = Ray::new(Vec3::new(-1.5, -0.5, 10.0), Vec3::NEG_Z);
    let click = mesh.pick(&ray).unwrap();
    assert_eq!(click.index, 1);
    assert!(click.point.z.abs() < 1e-4);
}

#[test]
fn pick_moving_text() {
    let mut mesh = text_mesh("Hello");
    mesh.set_motion(Motion::Dynamic);
    mesh.update();

    for step in 0..4 {
        let offset = step as f32 * 3.0;
        mesh.set_transform(Transform::from_translation(Vec3::new(offset, 0.0, 1.0)));
        assert!(!mesh.is_dirty());
        let click = mesh.pick(&ray_at(offset + 0.5, -0.5)).unwrap();
        assert_eq!(click.index, 0);
    }
}

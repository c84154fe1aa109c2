//! Geometry for the dial scene, baked in world space at startup.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::constants::{
    GROUND_HALF_EXTENT, SPHERE_ALBEDO, SPHERE_RADIUS, SPHERE_SLICES, SPHERE_STACKS,
};

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub albedo: [f32; 3],
    // 1.0 selects the procedural checker in the fragment shader
    pub surface: f32,
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 4] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x3, 3 => Float32];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Ground plane plus sphere, concatenated into one vertex/index pair so the
/// renderer draws the whole scene in a single indexed call.
pub fn build_scene() -> (Vec<Vertex>, Vec<u32>) {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    push_ground(&mut vertices, &mut indices);
    push_sphere(&mut vertices, &mut indices);
    (vertices, indices)
}

fn push_ground(vertices: &mut Vec<Vertex>, indices: &mut Vec<u32>) {
    let base = vertices.len() as u32;
    let e = GROUND_HALF_EXTENT;
    for (x, z) in [(-e, -e), (e, -e), (e, e), (-e, e)] {
        vertices.push(Vertex {
            position: [x, 0.0, z],
            normal: [0.0, 1.0, 0.0],
            albedo: [1.0, 1.0, 1.0],
            surface: 1.0,
        });
    }
    indices.extend_from_slice(&[base, base + 2, base + 1, base, base + 3, base + 2]);
}

fn push_sphere(vertices: &mut Vec<Vertex>, indices: &mut Vec<u32>) {
    let base = vertices.len() as u32;
    let center = Vec3::new(0.0, SPHERE_RADIUS, 0.0);
    let (stacks, slices) = (SPHERE_STACKS, SPHERE_SLICES);

    for i in 0..=stacks {
        let phi = std::f32::consts::PI * i as f32 / stacks as f32;
        for j in 0..=slices {
            let theta = std::f32::consts::TAU * j as f32 / slices as f32;
            let dir = Vec3::new(
                phi.sin() * theta.cos(),
                phi.cos(),
                phi.sin() * theta.sin(),
            );
            let position = center + dir * SPHERE_RADIUS;
            vertices.push(Vertex {
                position: position.to_array(),
                normal: dir.to_array(),
                albedo: SPHERE_ALBEDO,
                surface: 0.0,
            });
        }
    }

    let ring = slices + 1;
    for i in 0..stacks {
        for j in 0..slices {
            let a = base + i * ring + j;
            let b = a + ring;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }
}

use glam::Vec3;
use std::f32::consts::PI;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("asset is not a readable binary glTF: {0}")]
    Parse(#[from] gltf::Error),
    #[error("asset contains no triangle mesh")]
    NoMesh,
    #[error("mesh primitive has no POSITION attribute")]
    NoPositions,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Indexed triangle list, uploaded as-is.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Unit sphere with `segments` longitude steps and `segments / 2` latitude steps.
    pub fn uv_sphere(segments: u32) -> Self {
        let lon = segments.max(3);
        let lat = (segments / 2).max(2);
        let mut vertices = Vec::with_capacity(((lon + 1) * (lat + 1)) as usize);
        for j in 0..=lat {
            let v = j as f32 / lat as f32;
            let phi = v * PI;
            for i in 0..=lon {
                let u = i as f32 / lon as f32;
                let theta = u * PI * 2.0;
                let n = Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin());
                vertices.push(MeshVertex {
                    position: n.to_array(),
                    normal: n.to_array(),
                });
            }
        }
        let stride = lon + 1;
        let mut indices = Vec::with_capacity((lon * lat * 6) as usize);
        for j in 0..lat {
            for i in 0..lon {
                let a = j * stride + i;
                let b = a + stride;
                // Skip the degenerate triangle at each pole.
                if j != 0 {
                    indices.extend_from_slice(&[a, a + 1, b]);
                }
                if j != lat - 1 {
                    indices.extend_from_slice(&[a + 1, b + 1, b]);
                }
            }
        }
        Self { vertices, indices }
    }

    /// Centre on the origin and scale so the farthest vertex sits at radius 1.
    pub fn fit_unit(&mut self) {
        if self.vertices.is_empty() {
            return;
        }
        let (mut min, mut max) = (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN));
        for v in &self.vertices {
            let p = Vec3::from(v.position);
            min = min.min(p);
            max = max.max(p);
        }
        let centre = (min + max) * 0.5;
        let radius = self
            .vertices
            .iter()
            .map(|v| (Vec3::from(v.position) - centre).length())
            .fold(0.0f32, f32::max);
        let inv = if radius > 1e-6 { 1.0 / radius } else { 1.0 };
        for v in &mut self.vertices {
            v.position = ((Vec3::from(v.position) - centre) * inv).to_array();
        }
    }
}

/// Area-weighted vertex normals for meshes that ship without them.
fn smooth_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut acc = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        if a >= positions.len() || b >= positions.len() || c >= positions.len() {
            continue;
        }
        let (pa, pb, pc) = (
            Vec3::from(positions[a]),
            Vec3::from(positions[b]),
            Vec3::from(positions[c]),
        );
        let n = (pb - pa).cross(pc - pa);
        acc[a] += n;
        acc[b] += n;
        acc[c] += n;
    }
    acc.into_iter()
        .map(|n| n.try_normalize().unwrap_or(Vec3::Y).to_array())
        .collect()
}

/// Parse the first mesh of a `.glb` file. All triangle primitives of that
/// mesh are merged; the result is fitted to a unit sphere.
pub fn parse_glb(bytes: &[u8]) -> Result<MeshData, ModelError> {
    let gltf = gltf::Gltf::from_slice(bytes)?;
    let blob = gltf.blob.as_deref();
    let mesh = gltf.meshes().next().ok_or(ModelError::NoMesh)?;

    let mut out = MeshData::default();
    for primitive in mesh.primitives() {
        if primitive.mode() != gltf::mesh::Mode::Triangles {
            continue;
        }
        let reader = primitive.reader(|buffer| match buffer.source() {
            gltf::buffer::Source::Bin => blob,
            gltf::buffer::Source::Uri(_) => None,
        });
        let positions: Vec<[f32; 3]> = reader
            .read_positions()
            .ok_or(ModelError::NoPositions)?
            .collect();
        let indices: Vec<u32> = match reader.read_indices() {
            Some(ix) => ix.into_u32().collect(),
            None => (0..positions.len() as u32).collect(),
        };
        let normals: Vec<[f32; 3]> = match reader.read_normals() {
            Some(n) => n.collect(),
            None => smooth_normals(&positions, &indices),
        };
        let base = out.vertices.len() as u32;
        out.vertices.extend(
            positions
                .iter()
                .zip(normals.iter().chain(std::iter::repeat(&[0.0, 1.0, 0.0])))
                .map(|(p, n)| MeshVertex {
                    position: *p,
                    normal: *n,
                }),
        );
        let n = positions.len();
        for tri in indices.chunks_exact(3) {
            if tri.iter().all(|&i| (i as usize) < n) {
                out.indices.extend(tri.iter().map(|&i| i + base));
            }
        }
    }
    if out.indices.is_empty() {
        return Err(ModelError::NoMesh);
    }
    out.fit_unit();
    Ok(out)
}

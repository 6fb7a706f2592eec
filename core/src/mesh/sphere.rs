//! Parametric UV-sphere generation.
//!
//! The sphere is sampled on a grid of `stacks + 1` rows by `sectors + 1`
//! columns. Row `i` sweeps the stack angle from +90 degrees (north pole) down
//! to -90 degrees (south pole); column `j` sweeps the sector angle from 0 to
//! 360 degrees. The last column duplicates the first one so that texture
//! coordinates can run from `s = 0.0` to `s = 1.0` across the seam.
//!
//! All four generators ([`sphere_positions`], [`sphere_tex_coords`],
//! [`sphere_triangle_indices`], [`sphere_edge_indices`]) address vertices
//! through the same flat index `row * (sectors + 1) + col`, emitted in
//! row-major order.

use std::f32::consts::{FRAC_PI_2, PI};

use crate::error::MeshError;

/// Floats per position sample.
pub const POSITION_COMPONENTS: usize = 3;
/// Floats per texture coordinate sample.
pub const TEX_COORD_COMPONENTS: usize = 2;
/// Indices per triangle in a triangle list.
pub const TRIANGLE_STRIDE: usize = 3;
/// Indices per segment in a line list.
pub const LINE_STRIDE: usize = 2;

/// Validated (sector, stack) subdivision of a UV sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SphereGrid {
    sectors: u32,
    stacks: u32,
}

impl SphereGrid {
    /// Smallest sector count that still encloses a volume.
    pub const MIN_SECTORS: u32 = 3;
    /// Smallest stack count that produces any triangles.
    pub const MIN_STACKS: u32 = 1;

    /// Create a grid, rejecting counts that would produce degenerate geometry.
    pub fn new(sectors: u32, stacks: u32) -> Result<Self, MeshError> {
        if sectors < Self::MIN_SECTORS {
            return Err(MeshError::invalid(format!(
                "sector count must be at least {}, got {sectors}",
                Self::MIN_SECTORS
            )));
        }
        if stacks < Self::MIN_STACKS {
            return Err(MeshError::invalid(format!(
                "stack count must be at least {}, got {stacks}",
                Self::MIN_STACKS
            )));
        }

        let vertices = (u64::from(stacks) + 1) * (u64::from(sectors) + 1);
        if vertices > u64::from(u32::MAX) {
            return Err(MeshError::IndexOverflow { vertices });
        }

        Ok(Self { sectors, stacks })
    }

    /// Number of longitudinal slices.
    pub fn sectors(&self) -> u32 {
        self.sectors
    }

    /// Number of latitudinal rings.
    pub fn stacks(&self) -> u32 {
        self.stacks
    }

    /// Vertices per row, including the duplicated seam column.
    pub fn columns(&self) -> u32 {
        self.sectors + 1
    }

    /// Vertex rows, pole to pole.
    pub fn rows(&self) -> u32 {
        self.stacks + 1
    }

    /// Total number of grid vertices.
    pub fn vertex_count(&self) -> u32 {
        self.rows() * self.columns()
    }

    /// Flat index of the vertex at `(row, col)`.
    #[inline]
    pub fn vertex_index(&self, row: u32, col: u32) -> u32 {
        debug_assert!(row <= self.stacks && col <= self.sectors);
        row * self.columns() + col
    }

    /// Number of triangles in the filled mesh (two per grid quad).
    pub fn triangle_count(&self) -> usize {
        2 * self.quad_count()
    }

    /// Length of the triangle index array.
    pub fn triangle_index_count(&self) -> usize {
        self.triangle_count() * TRIANGLE_STRIDE
    }

    /// Number of within-row segments emitted by [`sphere_edge_indices`].
    pub fn horizontal_edge_count(&self, rings: EdgeRings) -> usize {
        self.ring_count(rings) as usize * self.sectors as usize
    }

    /// Number of within-column segments emitted by [`sphere_edge_indices`].
    pub fn vertical_edge_count(&self) -> usize {
        self.columns() as usize * self.stacks as usize
    }

    /// Length of the edge index array.
    pub fn edge_index_count(&self, rings: EdgeRings) -> usize {
        (self.horizontal_edge_count(rings) + self.vertical_edge_count()) * LINE_STRIDE
    }

    fn quad_count(&self) -> usize {
        self.stacks as usize * self.sectors as usize
    }

    fn ring_count(&self, rings: EdgeRings) -> u32 {
        match rings {
            EdgeRings::OmitLastRing => self.stacks,
            EdgeRings::Closed => self.stacks + 1,
        }
    }
}

/// Radius plus grid: everything [`sphere_positions`] needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereParams {
    radius: f32,
    grid: SphereGrid,
}

impl SphereParams {
    /// Validate radius and counts in one go.
    pub fn new(radius: f32, sectors: u32, stacks: u32) -> Result<Self, MeshError> {
        let grid = SphereGrid::new(sectors, stacks)?;
        Self::with_grid(radius, grid)
    }

    /// Pair an already validated grid with a radius.
    pub fn with_grid(radius: f32, grid: SphereGrid) -> Result<Self, MeshError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(MeshError::invalid(format!(
                "radius must be positive and finite, got {radius}"
            )));
        }
        Ok(Self { radius, grid })
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn grid(&self) -> SphereGrid {
        self.grid
    }
}

/// Which rows receive horizontal wireframe segments.
///
/// Row `stacks` is the south pole: all of its vertices coincide, so its
/// horizontal segments have zero length. [`EdgeRings::OmitLastRing`] skips
/// them and reproduces the classic wireframe index buffer bit for bit.
/// [`EdgeRings::Closed`] emits them too, which makes the buffer symmetric
/// with the north pole row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgeRings {
    /// Horizontal segments for rows `0..stacks`.
    #[default]
    OmitLastRing,
    /// Horizontal segments for rows `0..=stacks`.
    Closed,
}

/// Generate vertex positions in row-major order.
///
/// `stack_angle = pi/2 - i * pi/stacks`, `sector_angle = j * 2pi/sectors`,
/// and each sample is `(r cos(stack) cos(sector), r cos(stack) sin(sector), r sin(stack))`.
/// The seam column reuses the angle of column 0, so the duplicate seam
/// vertices are bit-identical.
pub fn sphere_positions(params: &SphereParams) -> Vec<[f32; 3]> {
    let grid = params.grid;
    let radius = params.radius;
    let sector_step = 2.0 * PI / grid.sectors as f32;
    let stack_step = PI / grid.stacks as f32;

    let mut positions = Vec::with_capacity(grid.vertex_count() as usize);
    for i in 0..=grid.stacks {
        let stack_angle = FRAC_PI_2 - i as f32 * stack_step;
        let xy = radius * stack_angle.cos();
        let z = radius * stack_angle.sin();

        for j in 0..=grid.sectors {
            let sector_angle = (j % grid.sectors) as f32 * sector_step;
            positions.push([xy * sector_angle.cos(), xy * sector_angle.sin(), z]);
        }
    }
    positions
}

/// Generate texture coordinates `(j / sectors, i / stacks)` in row-major order.
///
/// The result lines up with [`sphere_positions`] only when both are called
/// with the same grid.
pub fn sphere_tex_coords(grid: &SphereGrid) -> Vec<[f32; 2]> {
    let mut tex_coords = Vec::with_capacity(grid.vertex_count() as usize);
    for i in 0..=grid.stacks {
        let t = i as f32 / grid.stacks as f32;
        for j in 0..=grid.sectors {
            tex_coords.push([j as f32 / grid.sectors as f32, t]);
        }
    }
    tex_coords
}

/// Generate the triangle-list index buffer.
///
/// Each grid quad becomes `(cur+j, next+j, next+j+1)` and
/// `(cur+j, next+j+1, cur+j+1)`, counter-clockwise when seen from outside.
/// Quads touching a pole contain one zero-area triangle.
pub fn sphere_triangle_indices(grid: &SphereGrid) -> Vec<u32> {
    let mut indices = Vec::with_capacity(grid.triangle_index_count());
    for i in 0..grid.stacks {
        let cur_row = grid.vertex_index(i, 0);
        let next_row = grid.vertex_index(i + 1, 0);

        for j in 0..grid.sectors {
            indices.extend_from_slice(&[cur_row + j, next_row + j, next_row + j + 1]);
            indices.extend_from_slice(&[cur_row + j, next_row + j + 1, cur_row + j + 1]);
        }
    }
    indices
}

/// Generate the line-list index buffer for the wireframe overlay.
///
/// All horizontal segments come first (row by row), then the vertical
/// segments column by column, seam column included.
pub fn sphere_edge_indices(grid: &SphereGrid, rings: EdgeRings) -> Vec<u32> {
    let mut indices = Vec::with_capacity(grid.edge_index_count(rings));

    for i in 0..grid.ring_count(rings) {
        let row = grid.vertex_index(i, 0);
        for j in 0..grid.sectors {
            indices.extend_from_slice(&[row + j, row + j + 1]);
        }
    }

    for j in 0..=grid.sectors {
        for i in 0..grid.stacks {
            indices.extend_from_slice(&[grid.vertex_index(i, j), grid.vertex_index(i + 1, j)]);
        }
    }

    indices
}

/// The four arrays of a sphere, generated from one set of parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereGeometry {
    pub params: SphereParams,
    pub positions: Vec<[f32; 3]>,
    pub tex_coords: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
    pub edge_indices: Vec<u32>,
}

impl SphereGeometry {
    /// Run all four generators over the same grid.
    pub fn generate(params: &SphereParams, rings: EdgeRings) -> Self {
        let grid = params.grid;
        let geometry = Self {
            params: *params,
            positions: sphere_positions(params),
            tex_coords: sphere_tex_coords(&grid),
            indices: sphere_triangle_indices(&grid),
            edge_indices: sphere_edge_indices(&grid, rings),
        };
        log::trace!(
            "generated sphere r={} {}x{}: {} vertices, {} indices, {} edge indices",
            params.radius,
            grid.sectors,
            grid.stacks,
            geometry.positions.len(),
            geometry.indices.len(),
            geometry.edge_indices.len()
        );
        geometry
    }

    /// Validate raw parameters at the call site, then generate.
    pub fn from_raw(radius: f32, sectors: u32, stacks: u32) -> Result<Self, MeshError> {
        let params = SphereParams::new(radius, sectors, stacks)?;
        Ok(Self::generate(&params, EdgeRings::default()))
    }

    pub fn grid(&self) -> SphereGrid {
        self.params.grid
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Positions as a flat `[x, y, z, x, y, z, ...]` slice.
    pub fn position_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Texture coordinates as a flat `[s, t, s, t, ...]` slice.
    pub fn tex_coord_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.tex_coords)
    }
}

//! Small fixed-size vector and matrix types carried by pin constants.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Float2 {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Float3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Float4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// Row-major 4x4 matrix.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Matrix4x4 {
    pub rows: [[f32; 4]; 4],
}

/// Opaque handle into an external resource table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ResourceIndex(pub u32);

impl Float2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl Float3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Float4 {
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl From<[f32; 2]> for Float2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<[f32; 3]> for Float3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<[f32; 4]> for Float4 {
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self { x, y, z, w }
    }
}

impl Matrix4x4 {
    pub fn identity() -> Self {
        let mut rows = [[0.0; 4]; 4];
        for (i, row) in rows.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Self { rows }
    }

    /// All sixteen entries in row-major order.
    pub fn to_array(self) -> [f32; 16] {
        let mut out = [0.0; 16];
        for (slot, value) in out.iter_mut().zip(self.rows.iter().flatten()) {
            *slot = *value;
        }
        out
    }
}

impl From<[f32; 16]> for Matrix4x4 {
    fn from(values: [f32; 16]) -> Self {
        let mut rows = [[0.0; 4]; 4];
        for (i, value) in values.into_iter().enumerate() {
            rows[i / 4][i % 4] = value;
        }
        Self { rows }
    }
}

impl From<u32> for ResourceIndex {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

//! Mesh and model containers.

use std::collections::HashMap;

use crate::triangle::Triangle;

/// A named, ordered list of triangles with a visibility flag.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub name: String,
    pub visible: bool,
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new(name: impl Into<String>, triangles: Vec<Triangle>) -> Self {
        Self {
            name: name.into(),
            visible: true,
            triangles,
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}

/// A model: meshes addressable by name. Iteration order is unspecified.
#[derive(Debug, Clone, Default)]
pub struct Model {
    meshes: HashMap<String, Mesh>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model containing a single anonymous mesh.
    pub fn from_triangles(triangles: Vec<Triangle>) -> Self {
        let mut model = Self::new();
        model.insert(Mesh::new("default", triangles));
        model
    }

    /// Insert a mesh, replacing any mesh with the same name.
    pub fn insert(&mut self, mesh: Mesh) {
        self.meshes.insert(mesh.name.clone(), mesh);
    }

    pub fn get(&self, name: &str) -> Option<&Mesh> {
        self.meshes.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Mesh> {
        self.meshes.get_mut(name)
    }

    pub fn meshes(&self) -> impl Iterator<Item = &Mesh> {
        self.meshes.values()
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.meshes.values().map(Mesh::triangle_count).sum()
    }
}

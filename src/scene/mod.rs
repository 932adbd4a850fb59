//! Scenes: YAML scene documents, their renderer and the built-in animated
//! landscape.

mod document;
mod mini;
mod render;

pub use document::{
    is_scene_file, CanvasSpec, Geometry, Primitive, SceneDocument, ShapeSpec, SCENE_SUFFIX,
};
pub use mini::{Cloud, MiniScene, MiniSceneConfig, MiniScenePalette};
pub use render::SceneRenderer;

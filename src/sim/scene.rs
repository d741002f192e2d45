//! Renderable output
//!
//! Read-only views of the game for whatever draws it. Coordinates are world
//! units with y up; the camera offset is handed over separately and applied by
//! the renderer.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::block::Block;
use super::state::GameState;

/// Everything a renderer or HUD needs from the state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub placed_blocks: Vec<Block>,
    pub moving_block: Option<Block>,
    pub camera_offset_y: f32,
    pub score: u64,
    pub best_score: u64,
    pub current_level: u32,
    pub is_game_over: bool,
}

impl Snapshot {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            placed_blocks: state.placed_blocks.clone(),
            moving_block: state.moving_block,
            camera_offset_y: state.camera_offset_y,
            score: state.score,
            best_score: state.best_score,
            current_level: state.current_level,
            is_game_over: state.is_game_over(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RectKind {
    Placed,
    Moving,
}

/// One rectangle to draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneRect {
    /// Bottom-left corner
    pub min: Vec2,
    pub size: Vec2,
    pub color_index: u32,
    pub kind: RectKind,
}

impl SceneRect {
    pub fn from_block(block: &Block, kind: RectKind) -> Self {
        Self {
            min: Vec2::new(block.left(), block.y),
            size: Vec2::new(block.width, block.height),
            color_index: block.color_index(),
            kind,
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn to_instance(&self) -> RectInstance {
        RectInstance {
            min: self.min.to_array(),
            size: self.size.to_array(),
            color_index: self.color_index,
            moving: u32::from(self.kind == RectKind::Moving),
        }
    }
}

/// GPU instance layout for one rectangle
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct RectInstance {
    pub min: [f32; 2],
    pub size: [f32; 2],
    pub color_index: u32,
    /// 1 for the airborne block
    pub moving: u32,
}

/// Draw list: placed blocks bottom-up, then the moving block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub rects: Vec<SceneRect>,
    pub camera_offset_y: f32,
}

impl Scene {
    pub fn from_state(state: &GameState) -> Self {
        let rects = state
            .placed_blocks
            .iter()
            .map(|b| SceneRect::from_block(b, RectKind::Placed))
            .chain(
                state
                    .moving_block
                    .iter()
                    .map(|b| SceneRect::from_block(b, RectKind::Moving)),
            )
            .collect();
        Self {
            rects,
            camera_offset_y: state.camera_offset_y,
        }
    }

    /// Instance buffer contents for a renderer
    pub fn instances(&self) -> Vec<RectInstance> {
        self.rects.iter().map(SceneRect::to_instance).collect()
    }

    /// Raw bytes of [`Scene::instances`], ready for upload
    pub fn instance_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.instances()).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        let mut s = GameState::new(0);
        s.placed_blocks.push(Block::new(100.0, 40.0, 180.0, 40.0, 0));
        s.placed_blocks.push(Block::new(120.0, 80.0, 140.0, 40.0, 1));
        s.moving_block = Some(Block::new(300.0, 120.0, 140.0, 40.0, 2));
        s.camera_offset_y = 40.0;
        s
    }

    #[test]
    fn test_scene_order_and_geometry() {
        let scene = Scene::from_state(&state());
        assert_eq!(scene.rects.len(), 3);
        assert_eq!(scene.rects[0].kind, RectKind::Placed);
        assert_eq!(scene.rects[0].min, Vec2::new(10.0, 40.0));
        assert_eq!(scene.rects[0].max(), Vec2::new(190.0, 80.0));
        assert_eq!(scene.rects[2].kind, RectKind::Moving);
        assert_eq!(scene.rects[2].color_index, 2);
        assert_eq!(scene.camera_offset_y, 40.0);
    }

    #[test]
    fn test_instance_bytes() {
        let scene = Scene::from_state(&state());
        let instances = scene.instances();
        assert_eq!(instances[2].moving, 1);
        assert_eq!(instances[0].moving, 0);
        assert_eq!(instances[1].min, [50.0, 80.0]);
        assert_eq!(
            scene.instance_bytes().len(),
            3 * std::mem::size_of::<RectInstance>()
        );
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let s = state();
        let snap = Snapshot::from_state(&s);
        assert_eq!(snap.placed_blocks.len(), 2);
        assert_eq!(snap.moving_block.map(|b| b.level), Some(2));
        assert!(!snap.is_game_over);
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"current_level\":0"));
    }
}

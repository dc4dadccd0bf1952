use std::collections::HashMap;

use serde::Deserialize;

/// `[x0, y0, z0, x1, y1, z1]` in block-relative coordinates.
pub type CollisionBox = [f64; 6];

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct BlockCollisionShapes {
    pub blocks: HashMap<String, ShapeRef>,
    pub shapes: HashMap<u32, Vec<CollisionBox>>,
}

/// A single shape for every state, or one shape id per state.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum ShapeRef {
    Uniform(u32),
    PerState(Vec<u32>),
}

impl ShapeRef {
    /// `state_offset` is the state id minus the block's `minStateId`.
    pub fn shape_id(&self, state_offset: usize) -> Option<u32> {
        match self {
            Self::Uniform(id) => Some(*id),
            Self::PerState(ids) => ids.get(state_offset).copied(),
        }
    }
}

impl BlockCollisionShapes {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty() && self.shapes.is_empty()
    }

    pub fn boxes(&self, block_name: &str, state_offset: usize) -> Option<&[CollisionBox]> {
        let shape_id = self.blocks.get(block_name)?.shape_id(state_offset)?;
        self.shapes.get(&shape_id).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod test {
    use super::BlockCollisionShapes;

    #[test]
    fn uniform_and_per_state() {
        let shapes: BlockCollisionShapes = serde_json::from_str(
            r#"{
                "blocks": { "air": 0, "stone": 1, "oak_slab": [2, 2, 3, 3, 1, 1] },
                "shapes": {
                    "0": [],
                    "1": [[0, 0, 0, 1, 1, 1]],
                    "2": [[0, 0.5, 0, 1, 1, 1]],
                    "3": [[0, 0, 0, 1, 0.5, 1]]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(shapes.boxes("air", 0), Some(&[][..]));
        assert_eq!(shapes.boxes("stone", 7), Some(&[[0.0, 0.0, 0.0, 1.0, 1.0, 1.0]][..]));
        assert_eq!(
            shapes.boxes("oak_slab", 2),
            Some(&[[0.0, 0.0, 0.0, 1.0, 0.5, 1.0]][..])
        );
        assert_eq!(shapes.boxes("oak_slab", 6), None);
        assert_eq!(shapes.boxes("dirt", 0), None);
    }
}

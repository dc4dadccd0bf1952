//! Typed records for every data family, deserialized straight from the
//! minecraft-data JSON tables.

mod biome;
mod block;
mod collision;
mod effect;
mod enchantment;
mod entity;
mod food;
mod instrument;
mod item;
mod loot;
mod material;
mod particle;
mod recipe;
mod window;

pub use biome::Biome;
pub use block::{Block, BlockDrop, BlockStateKind, BlockStateProperty, BoundingBox, DropTarget};
pub use collision::{BlockCollisionShapes, CollisionBox, ShapeRef};
pub use effect::{Effect, EffectKind};
pub use enchantment::Enchantment;
pub use entity::Entity;
pub use food::Food;
pub use instrument::Instrument;
pub use item::{Item, Variation};
pub use loot::{BlockItemDrop, BlockLootEntry, EntityItemDrop, EntityLootEntry};
pub use material::{Material, Materials};
pub use particle::Particle;
pub use recipe::{RawRecipes, Recipe, RecipeItem, Shape, ShapedRecipe, ShapelessRecipe};
pub use window::{OpenerKind, Window, WindowOpener, WindowSlot};

/// A record with a numeric id and a name, each unique within its family.
pub trait Record {
    fn id(&self) -> u32;

    fn name(&self) -> &str;
}

macro_rules! impl_record {
    ($($record:ty),* $(,)?) => {
        $(
            impl Record for $record {
                fn id(&self) -> u32 {
                    self.id
                }

                fn name(&self) -> &str {
                    &self.name
                }
            }
        )*
    };
}

impl_record!(Biome, Block, Effect, Enchantment, Entity, Food, Instrument, Item);

fn default_stack_size() -> u32 {
    64
}

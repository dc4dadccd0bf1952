use std::collections::HashMap;

use mcdata_core::{Platform, Version};
use mcdata_registry::{
    Biome, Block, BlockCollisionShapes, BlockLootEntry, Effect, Enchantment, Entity, EntityLootEntry,
    Food, Instrument, Item, Material, Materials, OpenerKind, Particle, Recipe, Window, WindowOpener,
};
use mcdata_versions::DataKey;
use serde_json::Value;

use crate::{
    index::{FloatKey, Index},
    DataError,
};

/// Every table of one dataset, indexed. Built once by
/// [`IndexBuilder`](crate::IndexBuilder) and never mutated afterwards.
#[derive(Debug)]
pub struct IndexedData {
    pub(crate) key: DataKey,
    pub(crate) version: Version,

    pub(crate) blocks: Index<Block>,
    pub(crate) blocks_by_state_id: HashMap<u32, usize>,
    pub(crate) items: Index<Item>,
    pub(crate) foods: Index<Food>,
    pub(crate) foods_by_food_points: HashMap<FloatKey, usize>,
    pub(crate) foods_by_saturation: HashMap<FloatKey, usize>,
    pub(crate) biomes: Index<Biome>,
    pub(crate) entities: Index<Entity>,
    pub(crate) mobs: HashMap<u32, usize>,
    pub(crate) objects: HashMap<u32, usize>,
    pub(crate) entities_by_internal_id: HashMap<u32, usize>,
    pub(crate) effects: Index<Effect>,
    pub(crate) enchantments: Index<Enchantment>,
    pub(crate) instruments: Index<Instrument>,

    pub(crate) particles: Vec<Particle>,
    pub(crate) particles_by_id: HashMap<u32, usize>,
    pub(crate) particles_by_name: HashMap<String, usize>,

    pub(crate) windows: Vec<Window>,
    pub(crate) windows_by_id: HashMap<String, usize>,
    pub(crate) windows_by_name: HashMap<String, usize>,
    pub(crate) windows_by_opener: HashMap<WindowOpener, usize>,

    pub(crate) recipes: HashMap<u32, Vec<Recipe>>,

    pub(crate) block_loot: Vec<BlockLootEntry>,
    pub(crate) block_loot_by_name: HashMap<String, usize>,
    pub(crate) entity_loot: Vec<EntityLootEntry>,
    pub(crate) entity_loot_by_name: HashMap<String, usize>,

    pub(crate) materials: Materials,
    pub(crate) collision_shapes: BlockCollisionShapes,
    pub(crate) language: HashMap<String, String>,
    pub(crate) protocol: Option<Value>,
    pub(crate) protocol_comments: Option<Value>,
    pub(crate) commands: Option<Value>,
}

/// Result of the combined item/block lookups.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemOrBlock<'a> {
    Item(&'a Item),
    Block(&'a Block),
}

impl ItemOrBlock<'_> {
    pub fn id(&self) -> u32 {
        match self {
            Self::Item(item) => item.id,
            Self::Block(block) => block.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Item(item) => &item.name,
            Self::Block(block) => &block.name,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Self::Item(item) => &item.display_name,
            Self::Block(block) => &block.display_name,
        }
    }

    pub fn stack_size(&self) -> u32 {
        match self {
            Self::Item(item) => item.stack_size,
            Self::Block(block) => block.stack_size,
        }
    }
}

impl IndexedData {
    pub fn platform(&self) -> Platform {
        self.key.platform
    }

    /// `"pc"` or `"pe"`.
    pub fn type_name(&self) -> &'static str {
        self.key.platform.name()
    }

    /// Metadata of the dataset's own version, which is not necessarily the
    /// version that was requested.
    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn key(&self) -> &DataKey {
        &self.key
    }

    pub fn blocks(&self) -> &Index<Block> {
        &self.blocks
    }

    pub fn block_by_state_id(&self, state_id: u32) -> Option<&Block> {
        self.blocks.lookup(&self.blocks_by_state_id, &state_id)
    }

    pub fn items(&self) -> &Index<Item> {
        &self.items
    }

    pub fn foods(&self) -> &Index<Food> {
        &self.foods
    }

    /// The last food in file order restoring exactly `food_points`.
    pub fn food_by_food_points(&self, food_points: f64) -> Option<&Food> {
        self.foods
            .lookup(&self.foods_by_food_points, &FloatKey::from(food_points))
    }

    /// The last food in file order with exactly `saturation`.
    pub fn food_by_saturation(&self, saturation: f64) -> Option<&Food> {
        self.foods
            .lookup(&self.foods_by_saturation, &FloatKey::from(saturation))
    }

    pub fn biomes(&self) -> &Index<Biome> {
        &self.biomes
    }

    pub fn entities(&self) -> &Index<Entity> {
        &self.entities
    }

    pub fn mob(&self, id: u32) -> Option<&Entity> {
        self.entities.lookup(&self.mobs, &id)
    }

    pub fn mobs(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|entity| entity.is_mob())
    }

    pub fn object(&self, id: u32) -> Option<&Entity> {
        self.entities.lookup(&self.objects, &id)
    }

    pub fn objects(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|entity| entity.is_object())
    }

    pub fn entity_by_internal_id(&self, internal_id: u32) -> Option<&Entity> {
        self.entities
            .lookup(&self.entities_by_internal_id, &internal_id)
    }

    pub fn effects(&self) -> &Index<Effect> {
        &self.effects
    }

    pub fn enchantments(&self) -> &Index<Enchantment> {
        &self.enchantments
    }

    pub fn instruments(&self) -> &Index<Instrument> {
        &self.instruments
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle(&self, id: u32) -> Option<&Particle> {
        self.particles_by_id.get(&id).map(|&index| &self.particles[index])
    }

    pub fn particle_by_name(&self, name: &str) -> Option<&Particle> {
        self.particles_by_name
            .get(name)
            .map(|&index| &self.particles[index])
    }

    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    pub fn window(&self, id: &str) -> Option<&Window> {
        self.windows_by_id.get(id).map(|&index| &self.windows[index])
    }

    pub fn window_by_name(&self, name: &str) -> Option<&Window> {
        self.windows_by_name
            .get(name)
            .map(|&index| &self.windows[index])
    }

    /// The window that opens when the given item, entity or block is used.
    pub fn window_opened_with(&self, kind: OpenerKind, id: u32) -> Option<&Window> {
        self.windows_by_opener
            .get(&WindowOpener { kind, id })
            .map(|&index| &self.windows[index])
    }

    /// Every recipe producing `result_id`, in file order.
    pub fn recipes(&self, result_id: u32) -> Option<&[Recipe]> {
        self.recipes.get(&result_id).map(Vec::as_slice)
    }

    pub fn all_recipes(&self) -> &HashMap<u32, Vec<Recipe>> {
        &self.recipes
    }

    pub fn block_loot(&self) -> &[BlockLootEntry] {
        &self.block_loot
    }

    pub fn block_loot_by_name(&self, block: &str) -> Option<&BlockLootEntry> {
        self.block_loot_by_name
            .get(block)
            .map(|&index| &self.block_loot[index])
    }

    pub fn entity_loot(&self) -> &[EntityLootEntry] {
        &self.entity_loot
    }

    pub fn entity_loot_by_name(&self, entity: &str) -> Option<&EntityLootEntry> {
        self.entity_loot_by_name
            .get(entity)
            .map(|&index| &self.entity_loot[index])
    }

    pub fn materials(&self) -> &Materials {
        &self.materials
    }

    pub fn material(&self, name: &str) -> Option<&Material> {
        self.materials.get(name)
    }

    /// Dig speed multiplier of `tool_id` on blocks of `material`.
    pub fn tool_multiplier(&self, material: &str, tool_id: u32) -> Option<f64> {
        self.materials.get(material)?.get(&tool_id).copied()
    }

    pub fn collision_shapes(&self) -> &BlockCollisionShapes {
        &self.collision_shapes
    }

    pub fn language(&self) -> &HashMap<String, String> {
        &self.language
    }

    pub fn translate(&self, key: &str) -> Option<&str> {
        self.language.get(key).map(String::as_str)
    }

    pub fn protocol(&self) -> Option<&Value> {
        self.protocol.as_ref()
    }

    pub fn protocol_comments(&self) -> Option<&Value> {
        self.protocol_comments.as_ref()
    }

    pub fn commands(&self) -> Option<&Value> {
        self.commands.as_ref()
    }

    /// Items shadow blocks that share the id.
    pub fn find_item_or_block_by_id(&self, id: u32) -> Result<ItemOrBlock<'_>, DataError> {
        self.items
            .get(id)
            .map(ItemOrBlock::Item)
            .or_else(|| self.blocks.get(id).map(ItemOrBlock::Block))
            .ok_or_else(|| DataError::NotFound(id.to_string()))
    }

    /// Items shadow blocks that share the name.
    pub fn find_item_or_block_by_name(&self, name: &str) -> Result<ItemOrBlock<'_>, DataError> {
        self.items
            .by_name(name)
            .map(ItemOrBlock::Item)
            .or_else(|| self.blocks.by_name(name).map(ItemOrBlock::Block))
            .ok_or_else(|| DataError::NotFound(name.to_string()))
    }
}

use std::{collections::HashMap, time::Instant};

use itertools::Itertools;
use log::{debug, info};
use mcdata_core::{Family, Version};
use mcdata_registry::{
    Block, BlockLootEntry, Entity, EntityLootEntry, Food, Particle, RawRecipes, Recipe, Window,
};
use mcdata_versions::DataKey;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    index::{key_positions, FloatKey, Index},
    DataError, IndexedData, RawDataProvider,
};

/// Builds the [`IndexedData`] of one dataset from its raw tables.
///
/// Families the dataset does not declare come out empty. A declared family
/// that cannot be read or parsed fails the whole build.
pub struct IndexBuilder<'a> {
    provider: &'a dyn RawDataProvider,
    key: &'a DataKey,
}

impl<'a> IndexBuilder<'a> {
    pub fn new(provider: &'a dyn RawDataProvider, key: &'a DataKey) -> Self {
        Self { provider, key }
    }

    /// `catalog_version` describes the dataset when it ships no `version.json`.
    pub fn build(&self, catalog_version: &Version) -> Result<IndexedData, DataError> {
        let started = Instant::now();

        let version = self
            .optional::<Version>(Family::Version)?
            .unwrap_or_else(|| catalog_version.clone());

        let blocks: Index<Block> = Index::new(self.table(Family::Blocks)?);
        let blocks_by_state_id = blocks
            .iter()
            .enumerate()
            .filter_map(|(index, block)| Some((block.state_ids()?, index)))
            .flat_map(|(states, index)| states.map(move |state| (state, index)))
            .collect();

        let foods: Vec<Food> = self.table(Family::Foods)?;
        let foods_by_food_points = key_positions(&foods, |food| Some(FloatKey::from(food.food_points)));
        let foods_by_saturation = key_positions(&foods, |food| Some(FloatKey::from(food.saturation)));

        let entities: Vec<Entity> = self.table(Family::Entities)?;
        let mobs = key_positions(&entities, |entity| entity.is_mob().then_some(entity.id));
        let objects = key_positions(&entities, |entity| entity.is_object().then_some(entity.id));
        let entities_by_internal_id = key_positions(&entities, |entity| entity.internal_id);

        let particles: Vec<Particle> = self.table(Family::Particles)?;
        let particles_by_id = key_positions(&particles, |particle| particle.id);
        let particles_by_name = key_positions(&particles, |particle| particle.name.clone());

        let windows: Vec<Window> = self.table(Family::Windows)?;
        let windows_by_id = key_positions(&windows, |window| Some(window.id.clone()));
        let windows_by_name = key_positions(&windows, |window| Some(window.name.clone()));
        let windows_by_opener = windows
            .iter()
            .enumerate()
            .flat_map(|(index, window)| window.opened_with.iter().map(move |opener| (*opener, index)))
            .collect();

        let block_loot: Vec<BlockLootEntry> = self.table(Family::BlockLoot)?;
        let block_loot_by_name = key_positions(&block_loot, |entry| Some(entry.block.clone()));
        let entity_loot: Vec<EntityLootEntry> = self.table(Family::EntityLoot)?;
        let entity_loot_by_name = key_positions(&entity_loot, |entry| Some(entry.entity.clone()));

        let data = IndexedData {
            key: self.key.clone(),
            version,
            blocks,
            blocks_by_state_id,
            items: Index::new(self.table(Family::Items)?),
            foods: Index::new(foods),
            foods_by_food_points,
            foods_by_saturation,
            biomes: Index::new(self.table(Family::Biomes)?),
            entities: Index::new(entities),
            mobs,
            objects,
            entities_by_internal_id,
            effects: Index::new(self.table(Family::Effects)?),
            enchantments: Index::new(self.table(Family::Enchantments)?),
            instruments: Index::new(self.table(Family::Instruments)?),
            particles,
            particles_by_id,
            particles_by_name,
            windows,
            windows_by_id,
            windows_by_name,
            windows_by_opener,
            recipes: group_recipes(self.table(Family::Recipes)?),
            block_loot,
            block_loot_by_name,
            entity_loot,
            entity_loot_by_name,
            materials: self.table(Family::Materials)?,
            collision_shapes: self.table(Family::BlockCollisionShapes)?,
            language: self.table(Family::Language)?,
            protocol: self.optional(Family::Protocol)?,
            protocol_comments: self.optional(Family::ProtocolComments)?,
            commands: self.optional(Family::Commands)?,
        };

        info!(
            "Indexed {} ({} blocks, {} items) in {}ms",
            self.key,
            data.blocks.len(),
            data.items.len(),
            started.elapsed().as_millis()
        );
        Ok(data)
    }

    /// The parsed table, or its default when the dataset has none.
    fn table<T: DeserializeOwned + Default>(&self, family: Family) -> Result<T, DataError> {
        Ok(self.optional(family)?.unwrap_or_default())
    }

    fn optional<T: DeserializeOwned>(&self, family: Family) -> Result<Option<T>, DataError> {
        if !self.provider.provides(family, self.key) {
            debug!("{} has no {family} table", self.key);
            return Ok(None);
        }
        let raw: Value = self.provider.load_family(family, self.key)?;
        serde_json::from_value(raw)
            .map(Some)
            .map_err(|err| DataError::parse(format!("{family} of {}", self.key), err))
    }
}

/// Groups recipes by the id they produce. A recipe whose result carries no id
/// is filed under the key it was listed with, and dropped if there is none.
fn group_recipes(raw: RawRecipes) -> HashMap<u32, Vec<Recipe>> {
    raw.into_entries()
        .into_iter()
        .filter_map(|(filed_under, recipe)| {
            let id = recipe.result().id.or(filed_under);
            if id.is_none() {
                debug!("Dropping recipe without a result id: {recipe:?}");
            }
            Some((id?, recipe))
        })
        .into_group_map()
}

#[cfg(test)]
mod test {
    use mcdata_core::{Family, Platform, Version};
    use mcdata_registry::{OpenerKind, RawRecipes};
    use mcdata_versions::{DataKey, VersionCatalog};
    use serde_json::json;

    use super::{group_recipes, IndexBuilder};
    use crate::{DataError, MemoryDataProvider};

    fn key() -> DataKey {
        DataKey {
            platform: Platform::Pc,
            version: "1.16.4".to_string(),
        }
    }

    fn provider() -> MemoryDataProvider {
        MemoryDataProvider::new(VersionCatalog::new())
            .with_table(
                key(),
                Family::Foods,
                json!([
                    { "id": 1, "name": "apple", "displayName": "Apple", "foodPoints": 4, "saturation": 2.4 },
                    { "id": 2, "name": "bread", "displayName": "Bread", "foodPoints": 5, "saturation": 6 },
                    { "id": 3, "name": "carrot", "displayName": "Carrot", "foodPoints": 3, "saturation": 3.6 },
                    { "id": 4, "name": "golden_apple", "displayName": "Golden Apple", "foodPoints": 4, "saturation": 9.6 }
                ]),
            )
            .with_table(
                key(),
                Family::Entities,
                json!([
                    { "id": 0, "internalId": 90, "name": "pig", "displayName": "Pig", "type": "mob" },
                    { "id": 1, "name": "boat", "displayName": "Boat", "type": "object" },
                    { "id": 2, "internalId": 50, "name": "creeper", "displayName": "Creeper", "type": "hostile" }
                ]),
            )
            .with_table(
                key(),
                Family::Blocks,
                json!([
                    { "id": 0, "name": "air", "displayName": "Air", "hardness": 0, "minStateId": 0, "maxStateId": 0, "drops": [] },
                    { "id": 1, "name": "grass_block", "displayName": "Grass Block", "hardness": 0.6, "minStateId": 8, "maxStateId": 9, "drops": [] }
                ]),
            )
            .with_table(
                key(),
                Family::Windows,
                json!([
                    {
                        "id": "minecraft:crafting",
                        "name": "Crafting Table",
                        "slots": [{ "name": "result", "index": 0 }, { "name": "grid", "index": 1, "size": 9 }],
                        "openedWith": [{ "type": "block", "id": 183 }]
                    }
                ]),
            )
            .with_table(
                key(),
                Family::Particles,
                json!([{ "id": 0, "name": "ambient_entity_effect" }, { "name": "unnumbered" }, {}]),
            )
            .with_table(key(), Family::Language, json!({ "block.minecraft.stone": "Stone" }))
    }

    #[test]
    fn indexes_every_declared_family() {
        let provider = provider();
        let data = IndexBuilder::new(&provider, &key())
            .build(&Version::named("1.16.4"))
            .unwrap();

        assert_eq!(data.foods().len(), 4);
        // later foods win on shared values
        assert_eq!(data.food_by_food_points(4.0).unwrap().name, "golden_apple");
        assert_eq!(data.food_by_saturation(6.0).unwrap().name, "bread");
        assert!(data.food_by_food_points(20.0).is_none());

        assert_eq!(data.mob(0).unwrap().name, "pig");
        assert!(data.mob(2).is_none());
        assert_eq!(data.object(1).unwrap().name, "boat");
        assert_eq!(data.entity_by_internal_id(50).unwrap().name, "creeper");

        assert_eq!(data.block_by_state_id(9).unwrap().name, "grass_block");
        assert!(data.block_by_state_id(3).is_none());

        assert_eq!(
            data.window_opened_with(OpenerKind::Block, 183).unwrap().id,
            "minecraft:crafting"
        );
        assert_eq!(data.window_by_name("Crafting Table").unwrap().slot_count(), 10);

        assert_eq!(data.particles().len(), 3);
        assert_eq!(data.particle(0).unwrap().name.as_deref(), Some("ambient_entity_effect"));
        assert!(data.particle_by_name("unnumbered").is_some());

        assert_eq!(data.translate("block.minecraft.stone"), Some("Stone"));

        // undeclared families are empty, and the catalog describes the version
        assert!(data.items().is_empty());
        assert!(data.recipes(1).is_none());
        assert!(data.protocol().is_none());
        assert_eq!(data.version().minecraft_version.as_deref(), Some("1.16.4"));
    }

    #[test]
    fn version_table_wins_over_catalog() {
        let provider = MemoryDataProvider::new(VersionCatalog::new()).with_table(
            key(),
            Family::Version,
            json!({ "version": 754, "minecraftVersion": "1.16.4", "majorVersion": "1.16" }),
        );
        let data = IndexBuilder::new(&provider, &key())
            .build(&Version::named("1.16.4"))
            .unwrap();
        assert_eq!(data.version().version, Some(754));
        assert_eq!(data.version().major_version.as_deref(), Some("1.16"));
    }

    #[test]
    fn unparsable_table_fails_the_build() {
        let provider = MemoryDataProvider::new(VersionCatalog::new())
            .with_table(key(), Family::Items, json!({ "not": "a list" }));
        let err = IndexBuilder::new(&provider, &key())
            .build(&Version::named("1.16.4"))
            .unwrap_err();
        assert!(matches!(err, DataError::Parse { .. }), "{err}");
    }

    #[test]
    fn recipes_group_by_result() {
        let raw: RawRecipes = serde_json::from_value(json!({
            "5": [
                { "inShape": [[17]], "result": { "id": 5, "metadata": 0, "count": 4 } },
                { "inShape": [[162]], "result": { "count": 4 } }
            ],
            "280": [
                { "ingredients": [5, 5], "result": { "id": 280, "count": 4 } }
            ],
            "58": [
                { "inShape": [[5, 5], [5, 5]], "result": { "id": 58, "count": 1 } },
                { "ingredients": [264], "result": { "id": 5, "count": 1 } }
            ]
        }))
        .unwrap();
        let recipes = group_recipes(raw);

        let planks = &recipes[&5];
        assert_eq!(planks.len(), 3);
        assert_eq!(planks[0].ingredient_ids(), vec![17]);
        assert_eq!(planks[1].ingredient_ids(), vec![162]);
        assert_eq!(planks[2].ingredient_ids(), vec![264]);
        assert_eq!(recipes[&280].len(), 1);
        assert_eq!(recipes[&58].len(), 1);
    }

    #[test]
    fn flat_recipe_tables() {
        let raw: RawRecipes = serde_json::from_value(json!([
            { "ingredients": [5, 5], "result": 280 },
            { "ingredients": [1], "result": null }
        ]))
        .unwrap();
        let recipes = group_recipes(raw);
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[&280].len(), 1);
    }
}

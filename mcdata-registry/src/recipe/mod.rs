mod read;

use indexmap::IndexMap;
use serde::Deserialize;

/// One item reference inside a recipe. The tables spell it as a bare id (or
/// `null` for an empty slot), as `[id, metadata]`, or as
/// `{ "id": .., "metadata": .., "count": .. }`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RecipeItem {
    pub id: Option<u32>,
    pub metadata: Option<i32>,
    pub count: Option<u32>,
}

impl RecipeItem {
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
    }

    pub fn count(&self) -> u32 {
        self.count.unwrap_or(1)
    }
}

/// Rows of a crafting grid, top to bottom.
pub type Shape = Vec<Vec<RecipeItem>>;

#[derive(Clone, Debug, PartialEq)]
pub enum Recipe {
    Shaped(ShapedRecipe),
    Shapeless(ShapelessRecipe),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShapedRecipe {
    pub result: RecipeItem,
    pub in_shape: Shape,
    /// Items left in the grid after crafting, e.g. empty buckets.
    pub out_shape: Option<Shape>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShapelessRecipe {
    pub result: RecipeItem,
    pub ingredients: Vec<RecipeItem>,
}

impl Recipe {
    pub fn result(&self) -> &RecipeItem {
        match self {
            Self::Shaped(recipe) => &recipe.result,
            Self::Shapeless(recipe) => &recipe.result,
        }
    }

    /// Ids of every non-empty input slot, in reading order. Repeats are kept.
    pub fn ingredient_ids(&self) -> Vec<u32> {
        match self {
            Self::Shaped(recipe) => recipe
                .in_shape
                .iter()
                .flatten()
                .filter_map(|item| item.id)
                .collect(),
            Self::Shapeless(recipe) => recipe.ingredients.iter().filter_map(|item| item.id).collect(),
        }
    }
}

impl ShapedRecipe {
    pub fn width(&self) -> usize {
        self.in_shape.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.in_shape.len()
    }
}

/// The recipe table as shipped: either keyed by the stringified result id
/// (the usual layout) or a flat list.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum RawRecipes {
    Keyed(IndexMap<String, Vec<Recipe>>),
    Flat(Vec<Recipe>),
}

impl Default for RawRecipes {
    fn default() -> Self {
        Self::Keyed(IndexMap::new())
    }
}

impl RawRecipes {
    /// Every recipe in file order, paired with the numeric key it was filed
    /// under when the table is keyed.
    pub fn into_entries(self) -> Vec<(Option<u32>, Recipe)> {
        match self {
            Self::Keyed(map) => map
                .into_iter()
                .flat_map(|(key, recipes)| {
                    let key = key.parse().ok();
                    recipes.into_iter().map(move |recipe| (key, recipe))
                })
                .collect(),
            Self::Flat(recipes) => recipes.into_iter().map(|recipe| (None, recipe)).collect(),
        }
    }
}

use std::fmt::Formatter;

use serde::de::{self, Error, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};

use super::{Recipe, RecipeItem, Shape, ShapedRecipe, ShapelessRecipe};

struct RecipeItemVisitor;

impl<'de> Visitor<'de> for RecipeItemVisitor {
    type Value = RecipeItem;

    fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
        write!(formatter, "an item id, null, [id, metadata] or {{id, metadata, count}}")
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        let id = u32::try_from(v).map_err(|_| E::custom(format!("item id {v} out of range")))?;
        Ok(RecipeItem {
            id: Some(id),
            ..Default::default()
        })
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        match u64::try_from(v) {
            Ok(v) => self.visit_u64(v),
            Err(_) => Err(E::custom(format!("negative item id {v}"))),
        }
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(RecipeItem::default())
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(RecipeItem::default())
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let id = seq.next_element::<Option<u32>>()?.flatten();
        let metadata = seq.next_element::<Option<i32>>()?.flatten();
        if seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(A::Error::invalid_length(3, &"at most [id, metadata]"));
        }
        Ok(RecipeItem {
            id,
            metadata,
            count: None,
        })
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Fields {
            Id,
            Metadata,
            Count,
            #[serde(other)]
            Other,
        }

        let mut id: Option<Option<u32>> = None;
        let mut metadata: Option<Option<i32>> = None;
        let mut count: Option<Option<u32>> = None;
        while let Some(key) = map.next_key()? {
            match key {
                Fields::Id => visit_option(&mut map, &mut id, "id")?,
                Fields::Metadata => visit_option(&mut map, &mut metadata, "metadata")?,
                Fields::Count => visit_option(&mut map, &mut count, "count")?,
                Fields::Other => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(RecipeItem {
            id: id.flatten(),
            metadata: metadata.flatten(),
            count: count.flatten(),
        })
    }
}

impl<'de> Deserialize<'de> for RecipeItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RecipeItemVisitor)
    }
}

impl<'de> Deserialize<'de> for Recipe {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier)]
        enum Fields {
            #[serde(rename = "result")]
            Result,
            #[serde(rename = "inShape")]
            InShape,
            #[serde(rename = "outShape")]
            OutShape,
            #[serde(rename = "ingredients")]
            Ingredients,
            #[serde(other)]
            Other,
        }

        struct RecipeVisitor;
        impl<'de> Visitor<'de> for RecipeVisitor {
            type Value = Recipe;

            fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
                write!(formatter, "a shaped or shapeless recipe")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut result: Option<RecipeItem> = None;
                let mut in_shape: Option<Shape> = None;
                let mut out_shape: Option<Shape> = None;
                let mut ingredients: Option<Vec<RecipeItem>> = None;
                while let Some(key) = map.next_key()? {
                    match key {
                        Fields::Result => visit_option(&mut map, &mut result, "result")?,
                        Fields::InShape => visit_option(&mut map, &mut in_shape, "inShape")?,
                        Fields::OutShape => visit_option(&mut map, &mut out_shape, "outShape")?,
                        Fields::Ingredients => {
                            visit_option(&mut map, &mut ingredients, "ingredients")?
                        }
                        Fields::Other => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }

                let result = result.ok_or_else(|| A::Error::missing_field("result"))?;
                match (in_shape, ingredients) {
                    (Some(in_shape), None) => Ok(Recipe::Shaped(ShapedRecipe {
                        result,
                        in_shape,
                        out_shape,
                    })),
                    (None, Some(ingredients)) => {
                        Ok(Recipe::Shapeless(ShapelessRecipe {
                            result,
                            ingredients,
                        }))
                    }
                    (Some(_), Some(_)) => Err(A::Error::custom(
                        "recipe has both inShape and ingredients",
                    )),
                    (None, None) => Err(A::Error::custom(
                        "recipe needs either inShape or ingredients",
                    )),
                }
            }
        }

        const FIELDS: &[&str] = &["result", "inShape", "outShape", "ingredients"];

        deserializer.deserialize_struct("Recipe", FIELDS, RecipeVisitor)
    }
}

#[inline(always)]
fn visit_option<'de, T: Deserialize<'de>, Map: MapAccess<'de>>(
    map: &mut Map,
    option: &mut Option<T>,
    field: &'static str,
) -> Result<(), Map::Error> {
    match option {
        Some(_) => Err(<Map as MapAccess>::Error::duplicate_field(field)),
        None => {
            *option = Some(map.next_value()?);
            Ok(())
        }
    }
}

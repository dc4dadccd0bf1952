use std::collections::HashMap;

use indexmap::IndexMap;

/// Tool item id to dig speed multiplier.
pub type Material = HashMap<u32, f64>;

/// Material name to its tool table, in file order.
pub type Materials = IndexMap<String, Material>;

use std::fmt;

use serde::{Deserialize, Serialize};

/// One category of records, named the way `dataPaths.json` names it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Family {
    Blocks,
    BlockCollisionShapes,
    BlockLoot,
    Biomes,
    Commands,
    Effects,
    Enchantments,
    Entities,
    EntityLoot,
    Foods,
    Instruments,
    Items,
    Language,
    Materials,
    Particles,
    Protocol,
    ProtocolComments,
    Recipes,
    Version,
    Windows,
}

impl Family {
    pub const ALL: [Family; 20] = [
        Family::Blocks,
        Family::BlockCollisionShapes,
        Family::BlockLoot,
        Family::Biomes,
        Family::Commands,
        Family::Effects,
        Family::Enchantments,
        Family::Entities,
        Family::EntityLoot,
        Family::Foods,
        Family::Instruments,
        Family::Items,
        Family::Language,
        Family::Materials,
        Family::Particles,
        Family::Protocol,
        Family::ProtocolComments,
        Family::Recipes,
        Family::Version,
        Family::Windows,
    ];

    /// Key used in `dataPaths.json` and in error messages.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Blocks => "blocks",
            Self::BlockCollisionShapes => "blockCollisionShapes",
            Self::BlockLoot => "blockLoot",
            Self::Biomes => "biomes",
            Self::Commands => "commands",
            Self::Effects => "effects",
            Self::Enchantments => "enchantments",
            Self::Entities => "entities",
            Self::EntityLoot => "entityLoot",
            Self::Foods => "foods",
            Self::Instruments => "instruments",
            Self::Items => "items",
            Self::Language => "language",
            Self::Materials => "materials",
            Self::Particles => "particles",
            Self::Protocol => "protocol",
            Self::ProtocolComments => "protocolComments",
            Self::Recipes => "recipes",
            Self::Version => "version",
            Self::Windows => "windows",
        }
    }

    /// File stem of the table inside a dataset directory.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Self::ProtocolComments => "protocol_comments",
            other => other.key(),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

//! Tile registry: canonical ordered biome list with derived name and glyph
//! indices.

use hashbrown::HashMap;

use super::{SheetCoord, TileDef};

/// Unique handle for a registered biome: its index in the canonical list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BiomeId(pub u16);

/// Errors from registry construction and lookup.
#[derive(Debug, thiserror::Error)]
pub enum TilesetError {
    /// A biome with this name is already registered.
    #[error("duplicate biome name: {0}")]
    DuplicateName(String),

    /// No biome with this name exists in the registry.
    #[error("unknown biome name: {0}")]
    UnknownName(String),

    /// A biome handle does not resolve against this registry. Grids hold
    /// handles issued by the registry they were generated against, so this
    /// means the generator and the renderer disagree on the tileset.
    #[error("unknown biome id: {0}")]
    UnknownId(u16),
}

/// Stores the ordered biome catalog with O(1) lookup by handle and by name.
///
/// The ordered list is canonical; the name and glyph indices are derived
/// views built at registration time and never mutated afterwards. List order
/// matters only where a caller wants a deterministic legend.
pub struct TileRegistry {
    defs: Vec<TileDef>,
    name_to_id: HashMap<String, BiomeId>,
    glyphs: Vec<char>,
}

impl TileRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            defs: Vec::new(),
            name_to_id: HashMap::new(),
            glyphs: Vec::new(),
        }
    }

    /// The built-in six-biome tileset, in legend order.
    pub fn standard() -> Self {
        let catalog = [
            ("water_deep", '~', false, (0, 0)),
            ("water_shallow", ',', false, (0, 1)),
            ("sand", '.', true, (1, 0)),
            ("plains", '"', true, (1, 1)),
            ("forest", '♣', true, (2, 0)),
            ("mountain", '^', false, (2, 1)),
        ];

        let mut registry = Self::new();
        for (name, glyph, passable, (row, col)) in catalog {
            registry
                .register(TileDef {
                    name: name.to_string(),
                    glyph,
                    passable,
                    sheet_coord: SheetCoord { row, col },
                })
                .expect("standard tileset names are unique");
        }
        registry
    }

    /// Registers a new biome definition, returning its assigned [`BiomeId`].
    ///
    /// # Errors
    ///
    /// Returns [`TilesetError::DuplicateName`] if a biome with the same name
    /// exists.
    pub fn register(&mut self, def: TileDef) -> Result<BiomeId, TilesetError> {
        if self.name_to_id.contains_key(&def.name) {
            return Err(TilesetError::DuplicateName(def.name.clone()));
        }
        let id = BiomeId(self.defs.len() as u16);
        self.name_to_id.insert(def.name.clone(), id);
        self.glyphs.push(def.glyph);
        self.defs.push(def);
        Ok(id)
    }

    /// The canonical ordered list of definitions.
    pub fn defs(&self) -> &[TileDef] {
        &self.defs
    }

    /// Resolves a handle to its definition.
    ///
    /// # Errors
    ///
    /// Returns [`TilesetError::UnknownId`] for a handle this registry never
    /// issued.
    pub fn def(&self, id: BiomeId) -> Result<&TileDef, TilesetError> {
        self.defs
            .get(id.0 as usize)
            .ok_or(TilesetError::UnknownId(id.0))
    }

    /// Looks up a handle by the stable name key.
    pub fn id_of(&self, name: &str) -> Result<BiomeId, TilesetError> {
        self.name_to_id
            .get(name)
            .copied()
            .ok_or_else(|| TilesetError::UnknownName(name.to_string()))
    }

    /// Looks up a definition by the stable name key.
    pub fn lookup(&self, name: &str) -> Result<&TileDef, TilesetError> {
        let id = self.id_of(name)?;
        self.def(id)
    }

    /// Resolves a handle to just its display glyph.
    pub fn glyph(&self, id: BiomeId) -> Result<char, TilesetError> {
        self.glyphs
            .get(id.0 as usize)
            .copied()
            .ok_or(TilesetError::UnknownId(id.0))
    }

    /// Returns the number of registered biomes.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Returns `true` if no biomes are registered.
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Smallest sheet grid `(rows, cols)` covering every registered
    /// coordinate. A sprite sheet must span at least this many tiles.
    pub fn sheet_extent(&self) -> (u32, u32) {
        let mut rows = 0;
        let mut cols = 0;
        for def in &self.defs {
            rows = rows.max(def.sheet_coord.row + 1);
            cols = cols.max(def.sheet_coord.col + 1);
        }
        (rows, cols)
    }
}

impl Default for TileRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_order() {
        let registry = TileRegistry::standard();
        let names: Vec<&str> = registry.defs().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "water_deep",
                "water_shallow",
                "sand",
                "plains",
                "forest",
                "mountain"
            ]
        );
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = TileRegistry::standard();
        let result = registry.register(TileDef {
            name: "sand".to_string(),
            glyph: 's',
            passable: true,
            sheet_coord: SheetCoord { row: 9, col: 9 },
        });
        assert!(matches!(result, Err(TilesetError::DuplicateName(_))));
        assert_eq!(registry.len(), 6, "failed registration must not grow the list");
    }

    #[test]
    fn test_derived_indices_agree_with_canonical_list() {
        let registry = TileRegistry::standard();
        for (index, def) in registry.defs().iter().enumerate() {
            let id = registry.id_of(&def.name).unwrap();
            assert_eq!(id, BiomeId(index as u16));
            assert_eq!(registry.def(id).unwrap().name, def.name);
            assert_eq!(registry.glyph(id).unwrap(), def.glyph);
        }
    }

    #[test]
    fn test_unknown_lookups_error() {
        let registry = TileRegistry::standard();
        assert!(matches!(
            registry.id_of("lava"),
            Err(TilesetError::UnknownName(_))
        ));
        assert!(matches!(
            registry.def(BiomeId(6)),
            Err(TilesetError::UnknownId(6))
        ));
        assert!(matches!(
            registry.glyph(BiomeId(999)),
            Err(TilesetError::UnknownId(999))
        ));
    }

    #[test]
    fn test_standard_sheet_extent() {
        let registry = TileRegistry::standard();
        assert_eq!(registry.sheet_extent(), (3, 2), "six tiles in 3 rows x 2 cols");
    }

    #[test]
    fn test_empty_registry() {
        let registry = TileRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.sheet_extent(), (0, 0));
    }
}

//! Obstacle archetype table
//!
//! Loaded once from comma-separated rows:
//! `id, shape, color, width, height, vertical_offset`.
//! Rows that don't parse are skipped; whatever remains is the catalog.

use std::path::Path;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, RowError};

/// Built-in archetype table
pub const BUILTIN_TABLE: &str = "
1,0,red,40,40,0
2,0,blue,40,40,0
3,0,green,50,50,0
4,0,purple,30,60,0
5,0,orange,60,30,0
";

/// Static template for an obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Archetype {
    pub id: u32,
    /// Shape type for the renderer (0 = rectangle)
    pub shape: i32,
    pub color: String,
    pub width: f32,
    pub height: f32,
    /// Lift above the ground strip
    pub y_offset: f32,
}

/// Immutable, ordered set of archetypes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    archetypes: Vec<Archetype>,
}

impl Catalog {
    /// Parse a table, skipping blank and malformed rows
    pub fn parse(table: &str) -> Self {
        let mut archetypes = Vec::new();
        for (line_no, line) in table.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match parse_row(line) {
                Ok(archetype) => archetypes.push(archetype),
                Err(e) => log::debug!("Skipping archetype row {}: {}", line_no + 1, e),
            }
        }
        Self { archetypes }
    }

    /// The five archetypes the game ships with
    pub fn builtin() -> Self {
        Self::parse(BUILTIN_TABLE)
    }

    /// Read and parse a table file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let table = std::fs::read_to_string(path)?;
        let catalog = Self::parse(&table);
        log::info!("Loaded {} archetypes", catalog.len());
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }

    pub fn archetypes(&self) -> &[Archetype] {
        &self.archetypes
    }

    pub fn by_id(&self, id: u32) -> Option<&Archetype> {
        self.archetypes.iter().find(|a| a.id == id)
    }

    /// Uniformly random archetype
    pub fn random<R: Rng>(&self, rng: &mut R) -> Result<&Archetype, CatalogError> {
        if self.archetypes.is_empty() {
            return Err(CatalogError::Empty);
        }
        let index = rng.random_range(0..self.archetypes.len());
        Ok(&self.archetypes[index])
    }

    /// Stage 1 always uses `stage1_id`; later stages draw uniformly.
    /// Only the later-stage draw consumes randomness.
    pub fn pick_for_stage<R: Rng>(
        &self,
        stage: u32,
        stage1_id: u32,
        rng: &mut R,
    ) -> Result<&Archetype, CatalogError> {
        if stage <= 1 {
            if self.archetypes.is_empty() {
                return Err(CatalogError::Empty);
            }
            self.by_id(stage1_id)
                .ok_or(CatalogError::UnknownArchetype(stage1_id))
        } else {
            self.random(rng)
        }
    }
}

fn parse_row(line: &str) -> Result<Archetype, RowError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < 6 {
        return Err(RowError::TooFewFields(fields.len()));
    }
    Ok(Archetype {
        id: parse_field(fields[0], "id")?,
        shape: parse_field(fields[1], "shape")?,
        color: fields[2].to_string(),
        width: parse_field::<i32>(fields[3], "width")? as f32,
        height: parse_field::<i32>(fields[4], "height")? as f32,
        y_offset: parse_field::<i32>(fields[5], "vertical_offset")? as f32,
    })
}

fn parse_field<T: FromStr>(value: &str, field: &'static str) -> Result<T, RowError> {
    value.parse::<T>().map_err(|_| RowError::NotAnInteger {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_builtin_table() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 5);
        let purple = catalog.by_id(4).unwrap();
        assert_eq!(purple.color, "purple");
        assert_eq!(purple.width, 30.0);
        assert_eq!(purple.height, 60.0);
    }

    #[test]
    fn test_malformed_rows_skipped() {
        let catalog = Catalog::parse(
            "1,0,red,40,40,0\n\
             2,0,blue,40\n\
             3,0,green,wide,50,0\n\
             \n\
             4, 0, purple , 30, 60, 5, extra",
        );
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.archetypes()[0].id, 1);
        let last = &catalog.archetypes()[1];
        assert_eq!(last.id, 4);
        assert_eq!(last.color, "purple");
        assert_eq!(last.y_offset, 5.0);
    }

    #[test]
    fn test_row_errors() {
        assert_eq!(parse_row("1,2,3"), Err(RowError::TooFewFields(3)));
        assert!(matches!(
            parse_row("x,0,red,1,1,0"),
            Err(RowError::NotAnInteger { field: "id", .. })
        ));
    }

    #[test]
    fn test_stage_one_is_fixed() {
        let catalog = Catalog::builtin();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(catalog.pick_for_stage(1, 1, &mut rng).unwrap().id, 1);
        }
    }

    #[test]
    fn test_later_stages_cover_catalog() {
        let catalog = Catalog::builtin();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = [false; 5];
        for _ in 0..200 {
            let id = catalog.pick_for_stage(2, 1, &mut rng).unwrap().id;
            seen[id as usize - 1] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_empty_catalog_fails_safe() {
        let catalog = Catalog::parse("garbage\n1,2");
        let mut rng = Pcg32::seed_from_u64(7);
        assert!(catalog.is_empty());
        assert!(matches!(
            catalog.pick_for_stage(1, 1, &mut rng),
            Err(CatalogError::Empty)
        ));
        assert!(matches!(
            catalog.pick_for_stage(3, 1, &mut rng),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_missing_fixed_archetype() {
        let catalog = Catalog::parse("2,0,blue,40,40,0");
        let mut rng = Pcg32::seed_from_u64(7);
        assert!(matches!(
            catalog.pick_for_stage(1, 1, &mut rng),
            Err(CatalogError::UnknownArchetype(1))
        ));
    }
}

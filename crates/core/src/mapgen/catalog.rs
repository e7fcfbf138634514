//! Hand-authored floor layouts per region.
//!
//! Layouts are ASCII art, one string per row: `#` wall, `.` floor, `S` start, `E` end, `~` river.

use std::collections::BTreeMap;

use crate::types::{RegionId, TileKind};

use super::model::MapGenError;

const RUINED_FIELD_LAYOUTS: [[&str; 7]; 9] = [
    ["#######", "#..#..#", ".......", "S.#.#.E", ".......", "#..#..#", "#######"],
    ["S....##", "#.....#", "#.###.#", "......#", "..#...#", ".##.#.#", "......E"],
    ["E...~..", "....~.~", "..~.~.~", "~.~...~", "~.~....", "~...~.S", "....~.."],
    ["S#####E", "...##..", ".......", "~.....~", "~~~...~", "~~~~~~~", "~~~~~~~"],
    ["~~...~~", ".......", "..###..", "..E#S..", "..###..", ".......", "~~...~~"],
    ["#.....#", "#.##..#", "..S#...", "..~#~..", "...#E..", "#..##.#", "#.....#"],
    ["##....E", "#..#...", ".....#.", "..#....", ".......", ".#..###", "S..####"],
    ["...S...", ".......", ".#...#.", ".#...#.", ".#.~.#.", "...~...", "~~.E.~~"],
    ["~~~~~#S", "~~~..#.", "~~...#.", ".......", ".......", "...#...", "E..####"],
];

const CAVE_LAYOUTS: [[&str; 7]; 2] = [
    ["E...~..", "....~.~", "..~.~.~", "~.~...~", "~.~....", "~...~.S", "....~.."],
    ["S#####E", "...##..", ".......", "~.....~", "~~~...~", "~~~~~~~", "~~~~~~~"],
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    rows: Vec<String>,
}

impl Layout {
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Self {
        Self { rows: rows.iter().map(|row| row.as_ref().to_string()).collect() }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Parses and checks the layout, returning row-major tile kinds.
    pub fn tiles(
        &self,
        region: RegionId,
        layout: usize,
        grid_size: usize,
    ) -> Result<Vec<TileKind>, MapGenError> {
        let wrong_size = MapGenError::WrongSize { region, layout, expected: grid_size };
        if self.rows.len() != grid_size {
            return Err(wrong_size);
        }

        let mut tiles = Vec::with_capacity(grid_size * grid_size);
        for row in &self.rows {
            if row.chars().count() != grid_size {
                return Err(wrong_size);
            }
            for glyph in row.chars() {
                let kind = glyph_kind(glyph)
                    .ok_or(MapGenError::UnknownGlyph { region, layout, glyph })?;
                tiles.push(kind);
            }
        }

        let starts = tiles.iter().filter(|&&kind| kind == TileKind::Start).count();
        if starts != 1 {
            return Err(MapGenError::StartCount { region, layout, found: starts });
        }
        if !tiles.contains(&TileKind::End) {
            return Err(MapGenError::MissingEnd { region, layout });
        }
        Ok(tiles)
    }
}

fn glyph_kind(glyph: char) -> Option<TileKind> {
    match glyph {
        '#' => Some(TileKind::Wall),
        '.' => Some(TileKind::Floor),
        'S' => Some(TileKind::Start),
        'E' => Some(TileKind::End),
        '~' => Some(TileKind::River),
        _ => None,
    }
}

#[derive(Clone, Debug, Default)]
pub struct MapCatalog {
    regions: BTreeMap<RegionId, Vec<Layout>>,
}

impl MapCatalog {
    pub fn build_default() -> Self {
        let mut catalog = Self::default();
        for rows in &RUINED_FIELD_LAYOUTS {
            catalog.add_layout(RegionId::RuinedField, Layout::from_rows(rows));
        }
        for rows in &CAVE_LAYOUTS {
            catalog.add_layout(RegionId::Cave, Layout::from_rows(rows));
        }
        catalog
    }

    pub fn add_layout(&mut self, region: RegionId, layout: Layout) {
        self.regions.entry(region).or_default().push(layout);
    }

    pub fn layouts(&self, region: RegionId) -> &[Layout] {
        self.regions.get(&region).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Checks every layout of `region`.
    pub fn validate_region(&self, region: RegionId, grid_size: usize) -> Result<(), MapGenError> {
        let layouts = self.layouts(region);
        if layouts.is_empty() {
            return Err(MapGenError::NoLayouts(region));
        }
        for (index, layout) in layouts.iter().enumerate() {
            layout.tiles(region, index, grid_size)?;
        }
        Ok(())
    }

    /// Checks every layout of every region that has any.
    pub fn validate(&self, grid_size: usize) -> Result<(), MapGenError> {
        for &region in self.regions.keys() {
            self.validate_region(region, grid_size)?;
        }
        Ok(())
    }
}

/// Candidate image paths for a tile kind in a region.
pub fn tile_image_variants(region: RegionId, kind: TileKind) -> Vec<String> {
    let area = match region {
        RegionId::RuinedField => 1,
        RegionId::Cave => 2,
    };
    let (stem, numbers) = match kind {
        TileKind::Wall => ("Wall", 1..=4),
        TileKind::Floor => ("Floor", 2..=9),
        TileKind::Start => ("Start", 1..=1),
        TileKind::End => ("Exit", 1..=4),
        TileKind::River => ("River", 1..=4),
    };
    numbers.map(|n| format!("images/Area{area}{stem}{n}.png")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_is_valid() {
        let catalog = MapCatalog::build_default();
        assert_eq!(catalog.layouts(RegionId::RuinedField).len(), 9);
        assert_eq!(catalog.layouts(RegionId::Cave).len(), 2);
        catalog.validate(7).expect("built-in layouts should validate");
    }

    #[test]
    fn wrong_grid_size_is_reported() {
        let catalog = MapCatalog::build_default();
        assert_eq!(
            catalog.validate_region(RegionId::Cave, 8),
            Err(MapGenError::WrongSize { region: RegionId::Cave, layout: 0, expected: 8 })
        );
    }

    #[test]
    fn region_without_layouts_is_an_error() {
        let catalog = MapCatalog::default();
        assert_eq!(
            catalog.validate_region(RegionId::Cave, 7),
            Err(MapGenError::NoLayouts(RegionId::Cave))
        );
    }

    #[test]
    fn start_and_end_rules_are_enforced() {
        let two_starts = Layout::from_rows(&["S.", "SE"]);
        assert_eq!(
            two_starts.tiles(RegionId::Cave, 0, 2),
            Err(MapGenError::StartCount { region: RegionId::Cave, layout: 0, found: 2 })
        );
        let no_end = Layout::from_rows(&["S.", ".."]);
        assert_eq!(
            no_end.tiles(RegionId::Cave, 3, 2),
            Err(MapGenError::MissingEnd { region: RegionId::Cave, layout: 3 })
        );
        let bad_glyph = Layout::from_rows(&["S?", ".E"]);
        assert_eq!(
            bad_glyph.tiles(RegionId::Cave, 1, 2),
            Err(MapGenError::UnknownGlyph { region: RegionId::Cave, layout: 1, glyph: '?' })
        );
    }

    #[test]
    fn image_variants_follow_area_naming() {
        let floors = tile_image_variants(RegionId::Cave, TileKind::Floor);
        assert_eq!(floors.len(), 8);
        assert_eq!(floors[0], "images/Area2Floor2.png");
        assert_eq!(
            tile_image_variants(RegionId::RuinedField, TileKind::End)[3],
            "images/Area1Exit4.png"
        );
    }
}

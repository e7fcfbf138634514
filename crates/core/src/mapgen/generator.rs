//! Layout selection and tile classification for a new floor.

use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::ports::{AssetKey, AssetResolver};
use crate::roll::pick_index;
use crate::state::{Grid, Tile};
use crate::types::{Pos, RegionId, TileKind};

use super::catalog::MapCatalog;
use super::model::{GeneratedFloor, MapGenError};

pub struct FloorGenerator {
    catalog: MapCatalog,
    grid_size: usize,
}

impl FloorGenerator {
    pub fn new(catalog: MapCatalog, grid_size: usize) -> Self {
        Self { catalog, grid_size }
    }

    pub fn catalog(&self) -> &MapCatalog {
        &self.catalog
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn generate(
        &self,
        region: RegionId,
        rng: &mut ChaCha8Rng,
        assets: &mut dyn AssetResolver,
    ) -> Result<GeneratedFloor, MapGenError> {
        let layouts = self.catalog.layouts(region);
        if layouts.is_empty() {
            return Err(MapGenError::NoLayouts(region));
        }
        let layout_index = pick_index(rng, layouts.len());
        let kinds = layouts[layout_index].tiles(region, layout_index, self.grid_size)?;

        let mut tiles = Vec::with_capacity(kinds.len());
        let mut floor_cells = Vec::new();
        let mut start_cell = None;
        for (idx, kind) in kinds.into_iter().enumerate() {
            let pos = Pos { y: (idx / self.grid_size) as i32, x: (idx % self.grid_size) as i32 };
            match kind {
                TileKind::Floor => floor_cells.push(pos),
                TileKind::Start => start_cell = Some(pos),
                _ => {}
            }
            let image = assets.resolve_image(AssetKey::Tile(kind), region);
            tiles.push(Tile::new(pos, kind, image));
        }
        let start_cell =
            start_cell.ok_or(MapGenError::StartCount { region, layout: layout_index, found: 0 })?;

        debug!(
            region = region.key(),
            layout = layout_index,
            floor_cells = floor_cells.len(),
            "selected floor layout"
        );
        Ok(GeneratedFloor {
            layout_index,
            grid: Grid::new(self.grid_size, tiles),
            floor_cells,
            start_cell,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapgen::Layout;
    use crate::ports::CatalogAssets;
    use rand_chacha::rand_core::SeedableRng;

    fn single_layout_generator(rows: &[&str]) -> FloorGenerator {
        let mut catalog = MapCatalog::default();
        catalog.add_layout(RegionId::Cave, Layout::from_rows(rows));
        FloorGenerator::new(catalog, rows.len())
    }

    #[test]
    fn floor_cells_are_row_major_and_exclude_start_and_end() {
        let generator = single_layout_generator(&["S.#", "~..", "#.E"]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut assets = CatalogAssets::new(1);
        let floor =
            generator.generate(RegionId::Cave, &mut rng, &mut assets).expect("valid layout");

        assert_eq!(floor.start_cell, Pos { y: 0, x: 0 });
        assert_eq!(
            floor.floor_cells,
            vec![Pos { y: 0, x: 1 }, Pos { y: 1, x: 1 }, Pos { y: 1, x: 2 }, Pos { y: 2, x: 1 }]
        );
        assert_eq!(floor.grid.kind_at(Pos { y: 1, x: 0 }), TileKind::River);
        assert!(!floor.grid.tile(Pos { y: 0, x: 2 }).expect("in bounds").is_reachable());
        assert!(floor.grid.tile(Pos { y: 2, x: 2 }).expect("in bounds").is_reachable());
    }

    #[test]
    fn every_layout_is_eventually_selected() {
        let generator = FloorGenerator::new(MapCatalog::build_default(), 7);
        let mut rng = ChaCha8Rng::seed_from_u64(77);
        let mut assets = CatalogAssets::new(77);
        let mut seen = [false; 9];
        for _ in 0..400 {
            let floor = generator
                .generate(RegionId::RuinedField, &mut rng, &mut assets)
                .expect("default catalog is valid");
            seen[floor.layout_index] = true;
        }
        assert!(seen.iter().all(|&hit| hit), "uniform pick should reach all layouts: {seen:?}");
    }

    #[test]
    fn malformed_layout_fails_generation() {
        let generator = single_layout_generator(&["..", ".E"]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut assets = CatalogAssets::new(1);
        let err = generator.generate(RegionId::Cave, &mut rng, &mut assets).expect_err("no start");
        assert!(matches!(err, MapGenError::StartCount { found: 0, .. }));
    }

    #[test]
    fn empty_region_fails_generation() {
        let generator = FloorGenerator::new(MapCatalog::default(), 7);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut assets = CatalogAssets::new(1);
        let err =
            generator.generate(RegionId::Cave, &mut rng, &mut assets).expect_err("no layouts");
        assert_eq!(err, MapGenError::NoLayouts(RegionId::Cave));
    }
}

//! Floor selection and object scattering split into coherent submodules.

pub mod catalog;
pub mod model;

mod generator;
mod placer;

pub use catalog::{Layout, MapCatalog, tile_image_variants};
pub use generator::FloorGenerator;
pub use model::{GeneratedFloor, MapGenError, Placement};
pub use placer::place_objects;

use rand_chacha::ChaCha8Rng;

use crate::ports::AssetResolver;
use crate::types::RegionId;

/// Generates a floor from the built-in catalog.
pub fn generate_floor(
    region: RegionId,
    grid_size: usize,
    rng: &mut ChaCha8Rng,
    assets: &mut dyn AssetResolver,
) -> Result<GeneratedFloor, MapGenError> {
    FloorGenerator::new(MapCatalog::build_default(), grid_size).generate(region, rng, assets)
}

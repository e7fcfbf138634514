//! Scatters monsters, relic chests, and bonfires over spawnable floor cells.

use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::content::ContentPack;
use crate::roll::pick_index;
use crate::types::{MonsterTier, ObjectKind, Pos};

use super::model::Placement;

/// Samples cells without replacement, kind by kind in the order given. When the pool runs dry
/// the remaining requests are dropped.
pub fn place_objects(
    floor_cells: &[Pos],
    counts: &[(ObjectKind, usize)],
    tier: MonsterTier,
    content: &ContentPack,
    rng: &mut ChaCha8Rng,
) -> Vec<Placement> {
    let mut pool = floor_cells.to_vec();
    let templates = content.monsters_for_tier(tier);
    let mut placements = Vec::new();

    for &(kind, count) in counts {
        for _ in 0..count {
            if pool.is_empty() {
                break;
            }
            if kind == ObjectKind::Monster && templates.is_empty() {
                break;
            }
            let pos = pool.remove(pick_index(rng, pool.len()));
            placements.push(match kind {
                ObjectKind::Monster => {
                    let template = *templates[pick_index(rng, templates.len())];
                    Placement::Monster { pos, template }
                }
                ObjectKind::RelicChest => Placement::RelicChest { pos },
                ObjectKind::Bonfire => Placement::Bonfire { pos },
            });
        }
    }

    let requested: usize = counts.iter().map(|&(_, count)| count).sum();
    debug!(tier = tier.label(), requested, placed = placements.len(), "placed floor objects");
    placements
}

use crate::state::PlayerStats;
use crate::types::{MonsterKind, MonsterTier};

pub mod keys {
    pub const RELIC_WHETSTONE: &str = "relic_whetstone";
    pub const RELIC_IRON_BUCKLER: &str = "relic_iron_buckler";
    pub const RELIC_FEATHER_BOOTS: &str = "relic_feather_boots";
    pub const RELIC_HEART_CHARM: &str = "relic_heart_charm";
    pub const RELIC_BERSERKER_FANG: &str = "relic_berserker_fang";
    pub const RELIC_TORTOISE_SHELL: &str = "relic_tortoise_shell";
    pub const RELIC_QUICKSILVER_VIAL: &str = "relic_quicksilver_vial";
    pub const RELIC_GIANTS_BELT: &str = "relic_giants_belt";
    pub const RELIC_LUCKY_CLOVER: &str = "relic_lucky_clover";
    pub const RELIC_WARLORD_CREST: &str = "relic_warlord_crest";
    pub const RELIC_AEGIS_FRAGMENT: &str = "relic_aegis_fragment";
    pub const RELIC_PHOENIX_FEATHER: &str = "relic_phoenix_feather";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonsterTemplate {
    pub kind: MonsterKind,
    pub name: &'static str,
    pub tier: MonsterTier,
    pub hp: i32,
    pub atk: i32,
    pub def: i32,
    pub spd: i32,
    pub coin: u32,
}

impl MonsterTemplate {
    #[expect(clippy::too_many_arguments)]
    const fn new(
        kind: MonsterKind,
        name: &'static str,
        tier: MonsterTier,
        hp: i32,
        atk: i32,
        def: i32,
        spd: i32,
        coin: u32,
    ) -> Self {
        Self { kind, name, tier, hp, atk, def, spd, coin }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RelicGrade {
    Common,
    Rare,
    Legendary,
}

impl RelicGrade {
    pub fn label(self) -> &'static str {
        match self {
            RelicGrade::Common => "Common",
            RelicGrade::Rare => "Rare",
            RelicGrade::Legendary => "Legendary",
        }
    }
}

/// Permanent stat change applied once when a relic enters the inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelicEffect {
    /// Flat deltas. A max HP gain also heals by the same amount.
    Flat { max_hp: i32, atk: i32, def: i32, spd: i32 },
    /// Adds percentage points to the attack and defense multipliers.
    Multiplier { atk_pct: i32, def_pct: i32 },
    /// Raises max HP, then restores HP to full.
    Rebirth { max_hp: i32 },
}

impl RelicEffect {
    pub fn apply(self, stats: PlayerStats) -> PlayerStats {
        let mut next = stats;
        match self {
            RelicEffect::Flat { max_hp, atk, def, spd } => {
                next.max_hp = (stats.max_hp + max_hp).max(1);
                next.hp = stats.hp + max_hp.max(0);
                next.atk = (stats.atk + atk).max(0);
                next.def = (stats.def + def).max(0);
                next.spd = (stats.spd + spd).max(0);
            }
            RelicEffect::Multiplier { atk_pct, def_pct } => {
                next.atk_pct = (stats.atk_pct + atk_pct).max(0);
                next.def_pct = (stats.def_pct + def_pct).max(0);
            }
            RelicEffect::Rebirth { max_hp } => {
                next.max_hp = (stats.max_hp + max_hp).max(1);
                next.hp = next.max_hp;
            }
        }
        next.hp = next.hp.clamp(0, next.max_hp);
        next
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RelicDef {
    pub key: &'static str,
    pub name: &'static str,
    pub grade: RelicGrade,
    pub description: &'static str,
    pub effect: RelicEffect,
    pub image: &'static str,
}

pub struct ContentPack {
    pub monsters: Vec<MonsterTemplate>,
    pub relics: Vec<RelicDef>,
}

impl ContentPack {
    pub fn build_default() -> Self {
        use MonsterKind::*;
        use MonsterTier::*;

        Self {
            monsters: vec![
                MonsterTemplate::new(Slime, "Slime", Level1, 6, 3, 0, 3, 2),
                MonsterTemplate::new(Bat, "Cave Bat", Level1, 4, 3, 0, 7, 2),
                MonsterTemplate::new(Rat, "Giant Rat", Level1, 5, 4, 0, 5, 3),
                MonsterTemplate::new(Goblin, "Goblin", Level2, 10, 5, 1, 5, 5),
                MonsterTemplate::new(Wolf, "Dire Wolf", Level2, 8, 6, 0, 8, 5),
                MonsterTemplate::new(Skeleton, "Skeleton", Level2, 12, 5, 2, 4, 6),
                MonsterTemplate::new(Orc, "Orc Brute", Level3, 16, 8, 3, 5, 9),
                MonsterTemplate::new(Wraith, "Wraith", Level3, 12, 9, 1, 9, 9),
                MonsterTemplate::new(Harpy, "Harpy", Level3, 14, 8, 2, 8, 8),
                MonsterTemplate::new(Golem, "Stone Golem", Level4, 26, 10, 6, 3, 14),
                MonsterTemplate::new(Drake, "Drake", Level4, 22, 12, 4, 7, 15),
                MonsterTemplate::new(Lich, "Lich", Level4, 18, 13, 3, 9, 16),
            ],
            relics: vec![
                RelicDef {
                    key: keys::RELIC_WHETSTONE,
                    name: "Whetstone",
                    grade: RelicGrade::Common,
                    description: "+2 ATK.",
                    effect: RelicEffect::Flat { max_hp: 0, atk: 2, def: 0, spd: 0 },
                    image: "images/RelicWhetstone.png",
                },
                RelicDef {
                    key: keys::RELIC_IRON_BUCKLER,
                    name: "Iron Buckler",
                    grade: RelicGrade::Common,
                    description: "+1 DEF.",
                    effect: RelicEffect::Flat { max_hp: 0, atk: 0, def: 1, spd: 0 },
                    image: "images/RelicIronBuckler.png",
                },
                RelicDef {
                    key: keys::RELIC_FEATHER_BOOTS,
                    name: "Feather Boots",
                    grade: RelicGrade::Common,
                    description: "+2 SPD.",
                    effect: RelicEffect::Flat { max_hp: 0, atk: 0, def: 0, spd: 2 },
                    image: "images/RelicFeatherBoots.png",
                },
                RelicDef {
                    key: keys::RELIC_HEART_CHARM,
                    name: "Heart Charm",
                    grade: RelicGrade::Common,
                    description: "+5 max HP and heal 5.",
                    effect: RelicEffect::Flat { max_hp: 5, atk: 0, def: 0, spd: 0 },
                    image: "images/RelicHeartCharm.png",
                },
                RelicDef {
                    key: keys::RELIC_BERSERKER_FANG,
                    name: "Berserker Fang",
                    grade: RelicGrade::Rare,
                    description: "+4 ATK, -1 DEF.",
                    effect: RelicEffect::Flat { max_hp: 0, atk: 4, def: -1, spd: 0 },
                    image: "images/RelicBerserkerFang.png",
                },
                RelicDef {
                    key: keys::RELIC_TORTOISE_SHELL,
                    name: "Tortoise Shell",
                    grade: RelicGrade::Rare,
                    description: "+3 DEF, -1 SPD.",
                    effect: RelicEffect::Flat { max_hp: 0, atk: 0, def: 3, spd: -1 },
                    image: "images/RelicTortoiseShell.png",
                },
                RelicDef {
                    key: keys::RELIC_QUICKSILVER_VIAL,
                    name: "Quicksilver Vial",
                    grade: RelicGrade::Rare,
                    description: "+3 SPD, +1 ATK.",
                    effect: RelicEffect::Flat { max_hp: 0, atk: 1, def: 0, spd: 3 },
                    image: "images/RelicQuicksilverVial.png",
                },
                RelicDef {
                    key: keys::RELIC_GIANTS_BELT,
                    name: "Giant's Belt",
                    grade: RelicGrade::Rare,
                    description: "+10 max HP and heal 10.",
                    effect: RelicEffect::Flat { max_hp: 10, atk: 0, def: 0, spd: 0 },
                    image: "images/RelicGiantsBelt.png",
                },
                RelicDef {
                    key: keys::RELIC_LUCKY_CLOVER,
                    name: "Lucky Clover",
                    grade: RelicGrade::Rare,
                    description: "+1 to max HP, ATK, DEF and SPD.",
                    effect: RelicEffect::Flat { max_hp: 1, atk: 1, def: 1, spd: 1 },
                    image: "images/RelicLuckyClover.png",
                },
                RelicDef {
                    key: keys::RELIC_WARLORD_CREST,
                    name: "Warlord Crest",
                    grade: RelicGrade::Legendary,
                    description: "ATK x1.5.",
                    effect: RelicEffect::Multiplier { atk_pct: 50, def_pct: 0 },
                    image: "images/RelicWarlordCrest.png",
                },
                RelicDef {
                    key: keys::RELIC_AEGIS_FRAGMENT,
                    name: "Aegis Fragment",
                    grade: RelicGrade::Legendary,
                    description: "DEF x1.5.",
                    effect: RelicEffect::Multiplier { atk_pct: 0, def_pct: 50 },
                    image: "images/RelicAegisFragment.png",
                },
                RelicDef {
                    key: keys::RELIC_PHOENIX_FEATHER,
                    name: "Phoenix Feather",
                    grade: RelicGrade::Legendary,
                    description: "+15 max HP and restore HP to full.",
                    effect: RelicEffect::Rebirth { max_hp: 15 },
                    image: "images/RelicPhoenixFeather.png",
                },
            ],
        }
    }

    pub fn monsters_for_tier(&self, tier: MonsterTier) -> Vec<&MonsterTemplate> {
        self.monsters.iter().filter(|template| template.tier == tier).collect()
    }

    pub fn relic(&self, key: &str) -> Option<&RelicDef> {
        self.relics.iter().find(|relic| relic.key == key)
    }
}

impl Default for ContentPack {
    fn default() -> Self {
        Self::build_default()
    }
}

pub fn monster_image(kind: MonsterKind) -> &'static str {
    match kind {
        MonsterKind::Slime => "images/Slime.png",
        MonsterKind::Bat => "images/Bat.png",
        MonsterKind::Rat => "images/Rat.png",
        MonsterKind::Goblin => "images/Goblin.png",
        MonsterKind::Wolf => "images/Wolf.png",
        MonsterKind::Skeleton => "images/Skeleton.png",
        MonsterKind::Orc => "images/Orc.png",
        MonsterKind::Wraith => "images/Wraith.png",
        MonsterKind::Harpy => "images/Harpy.png",
        MonsterKind::Golem => "images/Golem.png",
        MonsterKind::Drake => "images/Drake.png",
        MonsterKind::Lich => "images/Lich.png",
    }
}

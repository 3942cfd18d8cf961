use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum Biome {
    #[default]
    Plains,
    Forest,
    Desert,
    SnowyPlains,
    Mountains,
    Swamp,
    Beach,
    River,
    Ocean,
    DeepOcean,
    WarmOcean,
    LukewarmOcean,
    DeepLukewarmOcean,
    ColdOcean,
    DeepColdOcean,
    FrozenOcean,
    DeepFrozenOcean,
}

impl Biome {
    pub const ALL: [Biome; 17] = [
        Biome::Plains,
        Biome::Forest,
        Biome::Desert,
        Biome::SnowyPlains,
        Biome::Mountains,
        Biome::Swamp,
        Biome::Beach,
        Biome::River,
        Biome::Ocean,
        Biome::DeepOcean,
        Biome::WarmOcean,
        Biome::LukewarmOcean,
        Biome::DeepLukewarmOcean,
        Biome::ColdOcean,
        Biome::DeepColdOcean,
        Biome::FrozenOcean,
        Biome::DeepFrozenOcean,
    ];

    /// Identifier used in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            Biome::Plains => "PLAINS",
            Biome::Forest => "FOREST",
            Biome::Desert => "DESERT",
            Biome::SnowyPlains => "SNOWY_PLAINS",
            Biome::Mountains => "MOUNTAINS",
            Biome::Swamp => "SWAMP",
            Biome::Beach => "BEACH",
            Biome::River => "RIVER",
            Biome::Ocean => "OCEAN",
            Biome::DeepOcean => "DEEP_OCEAN",
            Biome::WarmOcean => "WARM_OCEAN",
            Biome::LukewarmOcean => "LUKEWARM_OCEAN",
            Biome::DeepLukewarmOcean => "DEEP_LUKEWARM_OCEAN",
            Biome::ColdOcean => "COLD_OCEAN",
            Biome::DeepColdOcean => "DEEP_COLD_OCEAN",
            Biome::FrozenOcean => "FROZEN_OCEAN",
            Biome::DeepFrozenOcean => "DEEP_FROZEN_OCEAN",
        }
    }

    pub fn from_name(name: &str) -> Option<Biome> {
        Biome::ALL.into_iter().find(|b| b.name() == name)
    }

    pub fn is_ocean(&self) -> bool {
        self.name().ends_with("OCEAN")
    }
}

impl std::fmt::Display for Biome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_roundtrip() {
        for biome in Biome::ALL {
            assert_eq!(Biome::from_name(biome.name()), Some(biome));
        }
        assert_eq!(Biome::from_name("ocean"), None);
    }

    #[test]
    fn test_ocean_family() {
        assert!(Biome::DeepFrozenOcean.is_ocean());
        assert!(!Biome::Beach.is_ocean());
    }
}

//! Build name suggestions

use crate::catalog::BaseItem;
use rand::seq::SliceRandom;
use rand::Rng;

const ADJECTIVES: [&str; 8] = [
    "Shadow", "Ghost", "Viper", "Phoenix", "Crimson", "Apex", "Elite", "Prime",
];

const SUFFIXES: [&str; 6] = [
    "Protocol",
    "Operative",
    "Configuration",
    "Loadout",
    "Arsenal",
    "System",
];

/// Name used when there is no base item to build a name around
pub const UNTITLED_BUILD: &str = "Untitled Build";

/// Suggest a name like "Viper Phantom SMG Protocol"
pub fn generate_build_name<R: Rng + ?Sized>(base_item: Option<&BaseItem>, rng: &mut R) -> String {
    let Some(base) = base_item else {
        return UNTITLED_BUILD.to_string();
    };

    let adjective = ADJECTIVES.choose(rng).copied().unwrap_or("Prime");
    let suffix = SUFFIXES.choose(rng).copied().unwrap_or("Loadout");
    format!("{} {} {}", adjective, base.name, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Rarity, StatMap};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_untitled_without_base() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(generate_build_name(None, &mut rng), UNTITLED_BUILD);
    }

    #[test]
    fn test_name_wraps_base_item() {
        let base = BaseItem {
            id: "phantom-smg".to_string(),
            name: "Phantom SMG".to_string(),
            kind: "smg".to_string(),
            rarity: Rarity::Rare,
            base_stats: StatMap::new(),
            energy_capacity: 100,
            description: String::new(),
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        for _ in 0..20 {
            let name = generate_build_name(Some(&base), &mut rng);
            let words: Vec<&str> = name.split(' ').collect();
            assert_eq!(words.len(), 4, "{}", name);
            assert!(ADJECTIVES.contains(&words[0]));
            assert_eq!(&words[1..3], ["Phantom", "SMG"]);
            assert!(SUFFIXES.contains(&words[3]));
        }
    }
}

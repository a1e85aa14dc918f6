//! Verbs shown next to the loading spinner while a tool call runs.

use rand::seq::SliceRandom;
use rand::Rng;

pub const SPINNER_VERBS: &[&str] = &[
    "Accomplishing",
    "Actioning",
    "Baking",
    "Brewing",
    "Calculating",
    "Churning",
    "Cogitating",
    "Computing",
    "Conjuring",
    "Considering",
    "Cooking",
    "Crafting",
    "Crunching",
    "Deliberating",
    "Determining",
    "Doing",
    "Effecting",
    "Finagling",
    "Forging",
    "Generating",
    "Hatching",
    "Herding",
    "Honking",
    "Hustling",
    "Ideating",
    "Inferring",
    "Manifesting",
    "Marinating",
    "Moseying",
    "Mulling",
    "Musing",
    "Noodling",
    "Percolating",
    "Pondering",
    "Processing",
    "Puttering",
    "Reticulating",
    "Ruminating",
    "Schlepping",
    "Shucking",
    "Simmering",
    "Smooshing",
    "Spinning",
    "Stewing",
    "Synthesizing",
    "Thinking",
    "Transmuting",
    "Vibing",
    "Working",
];

/// Uniformly random verb.
pub fn random_verb() -> &'static str {
    random_verb_with(&mut rand::thread_rng())
}

pub fn random_verb_with<R: Rng>(rng: &mut R) -> &'static str {
    SPINNER_VERBS.choose(rng).copied().unwrap_or("Working")
}

/// Uniformly random verb other than `previous`, so the label visibly changes.
pub fn next_verb<R: Rng>(previous: Option<&str>, rng: &mut R) -> &'static str {
    let Some(skip) = previous.and_then(|p| SPINNER_VERBS.iter().position(|v| *v == p)) else {
        return random_verb_with(rng);
    };
    if SPINNER_VERBS.len() < 2 {
        return SPINNER_VERBS[skip];
    }

    let idx = rng.gen_range(0..SPINNER_VERBS.len() - 1);
    let idx = if idx >= skip { idx + 1 } else { idx };
    SPINNER_VERBS[idx]
}

/// Spinner label for `verb`, e.g. `Pondering…`.
pub fn spinner_label(verb: &str) -> String {
    format!("{}…", verb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_verbs_are_unique_and_capitalized() {
        let unique: HashSet<_> = SPINNER_VERBS.iter().collect();
        assert_eq!(unique.len(), SPINNER_VERBS.len());
        for verb in SPINNER_VERBS {
            assert!(verb.chars().next().unwrap().is_uppercase(), "{}", verb);
            assert!(verb.ends_with("ing"), "{}", verb);
        }
    }

    #[test]
    fn test_random_verb_from_list() {
        for _ in 0..100 {
            assert!(SPINNER_VERBS.contains(&random_verb()));
        }
    }

    #[test]
    fn test_random_verb_with_seeded_rng_is_deterministic() {
        let first: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(7);
            (0..10).map(|_| random_verb_with(&mut rng)).collect()
        };
        let second: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(7);
            (0..10).map(|_| random_verb_with(&mut rng)).collect()
        };
        assert_eq!(first, second);
    }

    #[test]
    fn test_next_verb_never_repeats() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut previous = None;
        for _ in 0..500 {
            let verb = next_verb(previous, &mut rng);
            assert!(SPINNER_VERBS.contains(&verb));
            assert_ne!(Some(verb), previous);
            previous = Some(verb);
        }
    }

    #[test]
    fn test_next_verb_unknown_previous() {
        let mut rng = StdRng::seed_from_u64(1);
        let verb = next_verb(Some("Not a verb"), &mut rng);
        assert!(SPINNER_VERBS.contains(&verb));
    }

    #[test]
    fn test_spinner_label() {
        assert_eq!(spinner_label("Pondering"), "Pondering…");
    }
}

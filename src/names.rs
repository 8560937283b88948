// WHY: Character name suggestions sampled from fixed pools
// Sampling is without replacement so one request never repeats a name

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const COMMON_MALE: &[&str] = &[
    "James", "John", "Robert", "Michael", "William",
    "David", "Richard", "Joseph", "Thomas", "Charles",
];
pub const COMMON_FEMALE: &[&str] = &[
    "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth",
    "Barbara", "Susan", "Jessica", "Sarah", "Karen",
];
pub const RARE_MALE: &[&str] = &[
    "Ansel", "Blaise", "Caius", "Dorian", "Elwood",
    "Fintan", "Gideon", "Ivo", "Leander", "Montague",
];
pub const RARE_FEMALE: &[&str] = &[
    "Aurelia", "Briseis", "Calista", "Delphine", "Elowen",
    "Ferelith", "Galatea", "Isolde", "Junia", "Lysandra",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum Gender {
    #[default]
    Any,
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum Rarity {
    #[default]
    Common,
    Rare,
}

/// Candidate names for a gender/rarity combination
pub fn name_pool(gender: Gender, rarity: Rarity) -> Vec<&'static str> {
    let (male, female) = match rarity {
        Rarity::Common => (COMMON_MALE, COMMON_FEMALE),
        Rarity::Rare => (RARE_MALE, RARE_FEMALE),
    };
    let mut pool = Vec::with_capacity(male.len() + female.len());
    if matches!(gender, Gender::Any | Gender::Male) {
        pool.extend_from_slice(male);
    }
    if matches!(gender, Gender::Any | Gender::Female) {
        pool.extend_from_slice(female);
    }
    pool
}

/// Up to `count` distinct names; fewer when the pool is smaller
pub fn generate_names<R: Rng + ?Sized>(
    gender: Gender,
    rarity: Rarity,
    count: usize,
    rng: &mut R,
) -> Vec<&'static str> {
    let pool = name_pool(gender, rarity);
    pool.choose_multiple(rng, count.min(pool.len())).copied().collect()
}

pub fn generate_names_default(gender: Gender, rarity: Rarity, count: usize) -> Vec<&'static str> {
    generate_names(gender, rarity, count, &mut rand::thread_rng())
}

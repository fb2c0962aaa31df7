use rand::seq::IndexedRandom;

/// Names offered by the "Surprise Me" feature
pub const RANDOM_NAMES: [&str; 20] = [
    "Banana Bob",
    "Pizza Pete",
    "Disco Danny",
    "Muffin Mike",
    "Taco Tom",
    "Waffle Wayne",
    "Pickle Paul",
    "Donut Dave",
    "Cookie Carl",
    "Pretzel Pat",
    "Noodle Nick",
    "Bagel Bill",
    "Cupcake Chris",
    "Pancake Phil",
    "Burrito Ben",
    "Sushi Sam",
    "Cheese Charlie",
    "Bacon Barry",
    "Sandwich Steve",
    "Yogurt Yuki",
];

/// Pick one of [`RANDOM_NAMES`] uniformly
pub fn random_name() -> &'static str {
    RANDOM_NAMES
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(RANDOM_NAMES[0])
}

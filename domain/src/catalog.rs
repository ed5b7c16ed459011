//! Preset choices offered by the front end.
//!
//! Free text is always accepted as well; these lists only seed the prompts
//! shown by `/pets`.

/// Common pet types
pub const PET_TYPES: &[&str] = &[
    "Cat",
    "Dog",
    "Bird",
    "Fish",
    "Hamster",
    "Rabbit",
    "Snake",
    "Lizard",
    "Parrot",
    "Guinea Pig",
];

/// Common pet colors
pub const PET_COLORS: &[&str] = &[
    "Black",
    "White",
    "Brown",
    "Golden",
    "Gray",
    "Orange",
    "Spotted",
    "Striped",
    "Multi-colored",
];

/// Advice shown by `/tips`
pub const NAMING_TIPS: &[&str] = &[
    "Choose a name that's easy to pronounce and remember",
    "Consider a name that matches your pet's personality",
    "Test calling the name out loud a few times",
    "Avoid names that could be confused with commands",
    "Make sure all family members like the name",
];

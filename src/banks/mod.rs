//! Built-in word banks.
//!
//! Two graded vocabularies ship with the engine so a session can start
//! without any external data: short common words for first grade, longer
//! ones (with a few castle-and-crown favorites) for second grade. Hosts
//! with their own curriculum build a [`WordBank`] by hand instead.

use crate::core::WordBank;

/// First-grade vocabulary: three- and four-letter everyday words.
static GRADE_ONE: &[(&str, &str)] = &[
    ("cat", "a small furry pet that says meow"),
    ("dog", "a friendly pet that barks"),
    ("sun", "the bright star in the sky"),
    ("hat", "you wear it on your head"),
    ("run", "to move fast on your feet"),
    ("big", "very large"),
    ("red", "the color of a stop sign"),
    ("box", "a container with four sides"),
    ("cup", "you drink from it"),
    ("pig", "a farm animal that says oink"),
    ("bed", "where you sleep at night"),
    ("map", "a drawing of a place"),
    ("six", "the number after five"),
    ("leg", "you stand on two of these"),
    ("pen", "you write with it"),
    ("wet", "covered in water"),
    ("jam", "sweet fruit spread for bread"),
    ("fox", "a wild animal with a bushy tail"),
    ("jump", "to push off the ground with your feet"),
    ("frog", "a green animal that hops"),
    ("ship", "a big boat"),
    ("star", "a tiny light in the night sky"),
    ("nest", "a bird's home"),
    ("milk", "a white drink from cows"),
];

/// Second-grade vocabulary: longer words, heavier on the kingdom theme.
static GRADE_TWO: &[(&str, &str)] = &[
    ("castle", "a big stone home for kings and queens"),
    ("dragon", "a giant beast that breathes fire"),
    ("knight", "a brave fighter in shining armor"),
    ("crown", "a king wears it on his head"),
    ("sword", "a long sharp blade"),
    ("shield", "it protects you in battle"),
    ("tower", "a very tall part of a castle"),
    ("bridge", "you cross a river on it"),
    ("forest", "a place with many trees"),
    ("wizard", "someone who does magic"),
    ("throne", "a special chair for a king"),
    ("horse", "a large animal knights ride"),
    ("feast", "a very big meal"),
    ("armor", "metal clothes for battle"),
    ("banner", "a flag with a kingdom's colors"),
    ("quest", "a long and brave journey"),
    ("village", "a small town"),
    ("treasure", "gold and jewels"),
    ("garden", "a place where flowers grow"),
    ("candle", "a stick of wax with a flame"),
    ("winter", "the coldest season"),
    ("basket", "you carry things in it"),
    ("mountain", "a very tall hill"),
    ("thunder", "the loud sound in a storm"),
];

/// The built-in first-grade bank.
#[must_use]
pub fn grade_one() -> WordBank {
    WordBank::from_entries(GRADE_ONE)
}

/// The built-in second-grade bank.
#[must_use]
pub fn grade_two() -> WordBank {
    WordBank::from_entries(GRADE_TWO)
}

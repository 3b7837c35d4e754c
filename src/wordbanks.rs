/// Word banks — the vocabulary the numeric encoder draws from.
///
/// SPL sorts its vocabulary by polarity: positive or neutral words spell
/// out non-negative constants, negative words spell out negative ones. The
/// encoder takes these banks as plain injected data, so callers can swap
/// the built-in Shakespearean set for their own via RON.
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BankError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Which side of the vocabulary a number draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    PositiveNeutral,
    Negative,
}

/// One word category (adjectives or nouns), split by polarity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordBank {
    pub positive_neutral: Vec<String>,
    pub negative: Vec<String>,
}

impl WordBank {
    pub fn for_polarity(&self, polarity: Polarity) -> &[String] {
        match polarity {
            Polarity::PositiveNeutral => &self.positive_neutral,
            Polarity::Negative => &self.negative,
        }
    }
}

/// The full vocabulary: one bank of adjectives, one bank of nouns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordBanks {
    pub adjectives: WordBank,
    pub nouns: WordBank,
}

impl Default for WordBanks {
    fn default() -> Self {
        Self::shakespearean()
    }
}

impl WordBanks {
    /// The built-in vocabulary, straight from the SPL word lists.
    pub fn shakespearean() -> Self {
        let to_vec = |words: &[&str]| words.iter().map(|w| w.to_string()).collect();
        Self {
            adjectives: WordBank {
                positive_neutral: to_vec(POSITIVE_NEUTRAL_ADJECTIVES),
                negative: to_vec(NEGATIVE_ADJECTIVES),
            },
            nouns: WordBank {
                positive_neutral: to_vec(POSITIVE_NEUTRAL_NOUNS),
                negative: to_vec(NEGATIVE_NOUNS),
            },
        }
    }

    /// Load word banks from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<WordBanks, BankError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse word banks from a RON string.
    pub fn parse_ron(input: &str) -> Result<WordBanks, BankError> {
        Ok(ron::from_str(input)?)
    }
}

/// Canonical SPL character names. Checking against this list is caller
/// policy — `Play::character` accepts any name.
pub const CHARACTER_NAMES: &[&str] = &[
    "Achilles",
    "Adonis",
    "Ajax",
    "Aphrodite",
    "Apollo",
    "Arthur",
    "Banquo",
    "Beatrice",
    "Benvolio",
    "Brutus",
    "Cassandra",
    "Cassius",
    "Cleopatra",
    "Cordelia",
    "Demetrius",
    "Desdemona",
    "Falstaff",
    "Ferdinand",
    "Goneril",
    "Hamlet",
    "Helen",
    "Hermia",
    "Horatio",
    "Isabella",
    "Juliet",
    "Julius Caesar",
    "King Lear",
    "Lady Macbeth",
    "Lysander",
    "Macbeth",
    "Macduff",
    "Mercutio",
    "Oberon",
    "Ophelia",
    "Othello",
    "Portia",
    "Prospero",
    "Puck",
    "Regan",
    "Romeo",
    "Shylock",
    "Titania",
    "Tybalt",
    "Viola",
];

/// Returns true if `name` appears on the canonical SPL name list.
pub fn is_canonical_name(name: &str) -> bool {
    CHARACTER_NAMES.iter().any(|n| *n == name)
}

const POSITIVE_NEUTRAL_ADJECTIVES: &[&str] = &[
    "big",
    "black",
    "blue",
    "bluest",
    "bottomless",
    "furry",
    "green",
    "hard",
    "huge",
    "large",
    "little",
    "normal",
    "old",
    "purple",
    "red",
    "rural",
    "small",
    "tiny",
    "white",
    "yellow",
    "amazing",
    "beautiful",
    "blossoming",
    "bold",
    "brave",
    "charming",
    "clearest",
    "cunning",
    "cute",
    "delicious",
    "embroidered",
    "fair",
    "fine",
    "gentle",
    "golden",
    "good",
    "handsome",
    "happy",
    "healthy",
    "honest",
    "lovely",
    "loving",
    "mighty",
    "noble",
    "peaceful",
    "pretty",
    "prompt",
    "proud",
    "reddest",
    "rich",
    "smooth",
    "sunny",
    "sweet",
    "sweetest",
    "trustworthy",
    "warm",
];

const NEGATIVE_ADJECTIVES: &[&str] = &[
    "bad",
    "cowardly",
    "cursed",
    "damned",
    "dirty",
    "disgusting",
    "distasteful",
    "dusty",
    "evil",
    "fat-kidneyed",
    "fatherless",
    "fat",
    "foul",
    "hairy",
    "half-witted",
    "horrible",
    "horrid",
    "infected",
    "lying",
    "miserable",
    "misused",
    "oozing",
    "rotten",
    "smelly",
    "snotty",
    "sorry",
    "stinking",
    "stuffed",
    "stupid",
    "vile",
    "villainous",
    "worried",
];

const POSITIVE_NEUTRAL_NOUNS: &[&str] = &[
    "animal",
    "aunt",
    "brother",
    "cat",
    "chihuahua",
    "cousin",
    "cow",
    "daughter",
    "door",
    "face",
    "father",
    "fellow",
    "granddaughter",
    "grandfather",
    "grandmother",
    "grandson",
    "hair",
    "hamster",
    "horse",
    "lamp",
    "lantern",
    "mistletoe",
    "moon",
    "morning",
    "mother",
    "nephew",
    "niece",
    "nose",
    "purse",
    "road",
    "roman",
    "sister",
    "sky",
    "son",
    "squirrel",
    "stone",
    "thing",
    "town",
    "tree",
    "uncle",
    "wind",
    "Heaven",
    "King",
    "Lord",
    "angel",
    "flower",
    "happiness",
    "joy",
    "plum",
    "summer's day",
    "hero",
    "rose",
    "kingdom",
    "pony",
];

const NEGATIVE_NOUNS: &[&str] = &[
    "Hell",
    "Microsoft",
    "bastard",
    "beggar",
    "blister",
    "codpiece",
    "coward",
    "curse",
    "death",
    "devil",
    "draught",
    "famine",
    "flirt-gill",
    "goat",
    "hate",
    "god",
    "hound",
    "leech",
    "lie",
    "pig",
    "plague",
    "starvation",
    "toad",
    "war",
    "wolf",
];

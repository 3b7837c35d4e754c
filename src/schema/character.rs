use serde::{Deserialize, Serialize};

/// Newtype wrapper for character ids. Ids index into the cast of the play
/// that registered the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub usize);

/// A character in an SPL play — a named variable with a flavor description.
///
/// The description appears once in the dramatis personae and is otherwise
/// ignored by the generated program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub description: String,
}

impl Character {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// The dramatis personae of a play: characters in registration order.
///
/// Name uniqueness is not enforced — identity is the `CharacterId` handed
/// out at registration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cast {
    members: Vec<Character>,
}

impl Cast {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Register a character and return its id.
    pub fn register(&mut self, character: Character) -> CharacterId {
        let id = CharacterId(self.members.len());
        self.members.push(character);
        id
    }

    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.members.get(id.0)
    }

    /// The character's name, if the id belongs to this cast.
    pub fn name(&self, id: CharacterId) -> Option<&str> {
        self.get(id).map(|c| c.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

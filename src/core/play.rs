/// Play assembly — acts, scenes, stage commands, and SPL code generation.
///
/// A play owns the cast, the acts, and the one piece of shared mutable
/// state: the stage. Scene bodies are deferred closures that receive an
/// explicit [`SceneContext`] and emit dialogue and stage directions through
/// it; nothing runs until [`Play::render`].
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, trace};

use crate::core::phrase::{render_value, PhraseError};
use crate::core::stage::{Stage, StageError};
use crate::schema::character::{Cast, Character, CharacterId};
use crate::schema::value::Value;
use crate::wordbanks::WordBanks;

#[derive(Debug, Error)]
pub enum PlayError {
    #[error("stage error: {0}")]
    Stage(#[from] StageError),
    #[error("phrase error: {0}")]
    Phrase(#[from] PhraseError),
    #[error("invalid i/o type: {0}")]
    InvalidType(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// What a print/input command moves: character text or a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IoType {
    Text,
    Number,
}

impl FromStr for IoType {
    type Err = PlayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("text") {
            Ok(IoType::Text)
        } else if s.eq_ignore_ascii_case("number") {
            Ok(IoType::Number)
        } else {
            Err(PlayError::InvalidType(s.to_string()))
        }
    }
}

/// Where a play is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    Building,
    Rendering,
    Rendered,
}

/// The handle scene bodies use to talk to their play: the shared stage, the
/// enclosing act's line buffer, the cast, the vocabulary, and the seeded
/// word-choice rng.
pub struct SceneContext<'a> {
    stage: &'a mut Stage,
    lines: &'a mut Vec<String>,
    cast: &'a Cast,
    banks: &'a WordBanks,
    rng: &'a mut StdRng,
}

impl SceneContext<'_> {
    fn name(&self, id: CharacterId) -> Result<&str, PlayError> {
        self.cast
            .name(id)
            .ok_or(PlayError::Phrase(PhraseError::CharacterNotFound(id)))
    }

    fn joined_names(&self, ids: &[CharacterId]) -> Result<String, PlayError> {
        let mut names = Vec::with_capacity(ids.len());
        for &id in ids {
            names.push(self.name(id)?);
        }
        Ok(names.join(" and "))
    }

    /// Commands validate the target's presence first, then stage arity.
    fn speaker(&self, target: CharacterId) -> Result<CharacterId, PlayError> {
        if !self.stage.contains(target) {
            return Err(StageError::CharacterNotOnstage(target).into());
        }
        Ok(self.stage.opposite(target)?)
    }

    /// Call the given characters onto the stage.
    pub fn enter(&mut self, characters: &[CharacterId]) -> Result<(), PlayError> {
        let names = self.joined_names(characters)?;
        self.stage.enter(characters)?;
        self.lines.push(format!("[Enter {}]", names));
        Ok(())
    }

    /// Send characters off the stage. With an empty slice, everyone leaves
    /// (`[Exeunt]`); one character gets a singular `[Exit …]`, several get a
    /// conjunctive `[Exeunt … and …]`. Everyone named must be on stage
    /// before anyone is removed.
    pub fn exit(&mut self, characters: &[CharacterId]) -> Result<(), PlayError> {
        for &id in characters {
            if !self.stage.contains(id) {
                return Err(StageError::CharacterNotOnstage(id).into());
            }
        }
        match characters {
            [] => {
                self.stage.clear();
                self.lines.push("[Exeunt]".to_string());
            }
            [lone] => {
                let line = format!("[Exit {}]", self.name(*lone)?);
                self.stage.exit(*lone)?;
                self.lines.push(line);
            }
            _ => {
                let line = format!("[Exeunt {}]", self.joined_names(characters)?);
                for &id in characters {
                    self.stage.exit(id)?;
                }
                self.lines.push(line);
            }
        }
        Ok(())
    }

    /// Set `target` to `value`, spoken by the opposite character.
    pub fn set(&mut self, target: CharacterId, value: impl Into<Value>) -> Result<(), PlayError> {
        let speaker = self.speaker(target)?;
        let phrase = render_value(&value.into(), self.cast, self.banks, self.rng)?;
        let line = format!("{}: You are {}!", self.name(speaker)?, phrase);
        self.lines.push(line);
        Ok(())
    }

    /// Print `target`'s value as text or a number.
    pub fn print(&mut self, target: CharacterId, io: IoType) -> Result<(), PlayError> {
        let speaker = self.speaker(target)?;
        let phrase = match io {
            IoType::Text => "Speak your mind",
            IoType::Number => "Open your heart",
        };
        let line = format!("{}: {}!", self.name(speaker)?, phrase);
        self.lines.push(line);
        Ok(())
    }

    /// Read input into `target` as text or a number.
    pub fn input(&mut self, target: CharacterId, io: IoType) -> Result<(), PlayError> {
        let speaker = self.speaker(target)?;
        let phrase = match io {
            IoType::Text => "Open your mind",
            IoType::Number => "Listen to your heart",
        };
        let line = format!("{}: {}!", self.name(speaker)?, phrase);
        self.lines.push(line);
        Ok(())
    }

    /// Push `value` onto `target`'s stack.
    pub fn remember(
        &mut self,
        target: CharacterId,
        value: impl Into<Value>,
    ) -> Result<(), PlayError> {
        let speaker = self.speaker(target)?;
        let phrase = render_value(&value.into(), self.cast, self.banks, self.rng)?;
        let line = format!("{}: Remember {}!", self.name(speaker)?, phrase);
        self.lines.push(line);
        Ok(())
    }

    /// Pop `target`'s stack into their value.
    pub fn pop(&mut self, target: CharacterId) -> Result<(), PlayError> {
        let speaker = self.speaker(target)?;
        let line = format!("{}: Recall yourself!", self.name(speaker)?);
        self.lines.push(line);
        Ok(())
    }
}

type SceneBody = Box<dyn Fn(&mut SceneContext<'_>) -> Result<(), PlayError>>;

/// A scene: a numbered, described, deferred body.
pub struct Scene {
    pub name: String,
    pub number: String,
    pub description: String,
    body: SceneBody,
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scene")
            .field("name", &self.name)
            .field("number", &self.number)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// An act: an ordered list of scenes under one header.
#[derive(Debug)]
pub struct Act {
    number: String,
    description: String,
    scenes: Vec<Scene>,
}

impl Act {
    /// `number` is the roman numeral for the header; it is not interpreted.
    /// The description must end with a period.
    pub fn new(number: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            description: description.into(),
            scenes: Vec::new(),
        }
    }

    /// Add a scene. Bodies run in declaration order when the play renders.
    pub fn scene<F>(
        &mut self,
        name: impl Into<String>,
        number: impl Into<String>,
        description: impl Into<String>,
        body: F,
    ) where
        F: Fn(&mut SceneContext<'_>) -> Result<(), PlayError> + 'static,
    {
        self.scenes.push(Scene {
            name: name.into(),
            number: number.into(),
            description: description.into(),
            body: Box::new(body),
        });
    }
}

/// A play script in the Shakespeare Programming Language.
///
/// Build the cast and acts, then [`render`](Play::render) or
/// [`save`](Play::save). The stage is shared across every scene of every
/// act and mutates only while a render pass is running.
#[derive(Debug)]
pub struct Play {
    description: String,
    cast: Cast,
    acts: Vec<Act>,
    stage: Stage,
    banks: WordBanks,
    seed: u64,
    state: RenderState,
    lines: Vec<String>,
}

impl Play {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            cast: Cast::new(),
            acts: Vec::new(),
            stage: Stage::new(),
            banks: WordBanks::default(),
            seed: 0,
            state: RenderState::Building,
            lines: Vec::new(),
        }
    }

    /// Seed for the encoder's word choices. Same seed, same script.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Swap the built-in vocabulary for custom banks.
    pub fn with_banks(mut self, banks: WordBanks) -> Self {
        self.banks = banks;
        self
    }

    /// Create a character and add it to the play.
    ///
    /// This does not put the character on stage — use [`SceneContext::enter`]
    /// from a scene body for that. Names are not checked against the
    /// canonical list; see [`crate::wordbanks::is_canonical_name`] for
    /// callers that want that policy.
    pub fn character(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> CharacterId {
        self.cast.register(Character::new(name, description))
    }

    /// Add an already-built character to the play.
    pub fn add_character(&mut self, character: Character) -> CharacterId {
        self.cast.register(character)
    }

    pub fn cast(&self) -> &Cast {
        &self.cast
    }

    pub fn add_act(&mut self, act: Act) {
        self.acts.push(act);
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    /// The line sequence from the most recent successful render.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Generate SPL code for this play.
    ///
    /// Runs every scene body in declaration order and assembles the script:
    /// title, dramatis personae, then each act's header and scenes. A second
    /// render recomputes the same text — the stage is cleared and the rng
    /// reseeded at the start of every pass. After a failed render the play
    /// is unreliable and should be rebuilt.
    pub fn render(&mut self) -> Result<String, PlayError> {
        self.state = RenderState::Rendering;
        self.stage.clear();
        debug!(
            acts = self.acts.len(),
            characters = self.cast.len(),
            "rendering play"
        );
        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut lines = vec![self.description.clone(), String::new()];
        for character in self.cast.iter() {
            lines.push(format!("{}, {}", character.name, character.description));
        }
        lines.push(String::new());

        for act in &self.acts {
            let mut act_lines = vec![format!("Act {}: {}", act.number, act.description)];
            for scene in &act.scenes {
                trace!(scene = %scene.name, "running scene body");
                act_lines.push(format!("Scene {}: {}", scene.number, scene.description));
                run_scene(
                    scene,
                    &mut self.stage,
                    &mut act_lines,
                    &self.cast,
                    &self.banks,
                    &mut rng,
                )?;
            }
            lines.append(&mut act_lines);
            lines.push(String::new());
        }

        self.lines = lines;
        self.state = RenderState::Rendered;
        Ok(self.lines.join("\n"))
    }

    /// Render and write the script to `path`, every line `\n`-terminated.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<(), PlayError> {
        let mut code = self.render()?;
        code.push('\n');
        std::fs::write(path, code)?;
        Ok(())
    }
}

fn run_scene(
    scene: &Scene,
    stage: &mut Stage,
    lines: &mut Vec<String>,
    cast: &Cast,
    banks: &WordBanks,
    rng: &mut StdRng,
) -> Result<(), PlayError> {
    let mut ctx = SceneContext {
        stage,
        lines,
        cast,
        banks,
        rng,
    };
    (scene.body)(&mut ctx)
}

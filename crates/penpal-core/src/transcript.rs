//! Conversation transcript data model.
//!
//! The transcript is an append-only list of entries, each attributed to a
//! participant and optionally carrying an avatar resource path. Appending
//! returns an opaque [`EntryId`] the caller can use for scroll targeting.

use serde::{Deserialize, Serialize};

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Participant {
    /// The human side of the conversation
    User,
    /// The scripted assistant side
    Assistant,
}

/// Opaque handle to a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(u64);

impl EntryId {
    /// Create an entry ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw value, used by views to index their offset tables.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Author of the entry
    pub participant: Participant,
    /// Message content
    pub content: String,
    /// Optional avatar resource path
    pub avatar: Option<String>,
}

impl Entry {
    /// Create an entry.
    #[must_use]
    pub fn new(participant: Participant, content: impl Into<String>) -> Self {
        Self {
            participant,
            content: content.into(),
            avatar: None,
        }
    }

    /// Set the avatar resource path.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

/// Append-only conversation log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<Entry>,
}

impl Transcript {
    /// Create an empty transcript.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry and return its handle.
    pub fn push(&mut self, entry: Entry) -> EntryId {
        let id = EntryId::new(self.entries.len() as u64);
        self.entries.push(entry);
        id
    }

    /// Look up an entry by handle.
    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.get(id.raw() as usize)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the transcript is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }
}

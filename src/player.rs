//! Player identity for the console game.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Unique identity token for a player.
///
/// Allocated once per `Player::new` call. Equality on `Player` goes through
/// this token, so two players that happen to share a name and marker are
/// still distinct participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(u64);

impl PlayerId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A participant in one game: a display name plus a single-character marker.
///
/// Immutable after construction. Cloning preserves the id, so a clone is the
/// same player identity, not a new one.
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    name: String,
    marker: char,
}

impl Player {
    /// Creates a new player with a fresh identity.
    ///
    /// Inputs are taken as given; degenerate names or markers are the
    /// caller's concern.
    pub fn new(name: impl Into<String>, marker: char) -> Self {
        Self {
            id: PlayerId::next(),
            name: name.into(),
            marker,
        }
    }

    /// Returns the identity token.
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the board marker.
    pub fn marker(&self) -> char {
        self.marker
    }

    /// Formats the player for display: `"<name>: <marker>"`.
    pub fn describe(&self) -> String {
        format!("{}: {}", self.name, self.marker)
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

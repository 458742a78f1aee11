//! Player identification, colors, and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for the four seats, `0..4`, in turn order.
//!
//! ## PlayerMap
//!
//! Fixed per-player storage indexed by `PlayerId`.
//!
//! ## Player
//!
//! A seat together with its four pieces.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::piece::{Piece, PieceId};

/// Number of players at the table.
pub const PLAYER_COUNT: usize = 4;

/// Number of pieces each player owns.
pub const PIECES_PER_PLAYER: usize = 4;

/// Player identifier, `0..4`.
///
/// Turn order follows the index: player 0 moves first, then 1, 2, 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// Create a new player ID.
    ///
    /// # Panics
    ///
    /// Panics if `id >= PLAYER_COUNT`.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!((id as usize) < PLAYER_COUNT, "Player index out of range");
        Self(id)
    }

    /// Get the raw player number.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Get the player index for array access.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player who moves after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % PLAYER_COUNT as u8)
    }

    /// The color this seat plays.
    #[must_use]
    pub const fn color(self) -> PlayerColor {
        PlayerColor::ALL[self.0 as usize]
    }

    /// Iterate over all players in turn order.
    ///
    /// ```
    /// use ludo_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = super::board::OutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (value as usize) < PLAYER_COUNT {
            Ok(Self(value))
        } else {
            Err(super::board::OutOfRange { value, limit: PLAYER_COUNT as u8 })
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color())
    }
}

/// Seat colors, used for rendering only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Red,
    Blue,
    Green,
    Yellow,
}

impl PlayerColor {
    /// Colors in seat order.
    pub const ALL: [PlayerColor; PLAYER_COUNT] = [
        PlayerColor::Red,
        PlayerColor::Blue,
        PlayerColor::Green,
        PlayerColor::Yellow,
    ];

    /// Human-readable color name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PlayerColor::Red => "Red",
            PlayerColor::Blue => "Blue",
            PlayerColor::Green => "Green",
            PlayerColor::Yellow => "Yellow",
        }
    }
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-player data storage with O(1) access.
///
/// Always holds exactly one entry per seat.
///
/// ## Example
///
/// ```
/// use ludo_engine::core::{PlayerId, PlayerMap};
///
/// let mut finished: PlayerMap<u8> = PlayerMap::new(|_| 0);
/// finished[PlayerId::new(2)] += 1;
/// assert_eq!(finished[PlayerId::new(2)], 1);
/// assert_eq!(finished[PlayerId::new(0)], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: std::array::from_fn(|i| factory(PlayerId(i as u8))),
        }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A seat and the pieces it owns.
///
/// Pieces are created once at game start and never added or removed;
/// only their state changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    pieces: [Piece; PIECES_PER_PLAYER],
}

impl Player {
    /// Create a player with all four pieces at home.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            pieces: std::array::from_fn(|i| Piece::at_home(PieceId::new(id, i as u8))),
        }
    }

    /// The seat this player occupies.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// The player's pieces, ordered by piece index.
    #[must_use]
    pub fn pieces(&self) -> &[Piece; PIECES_PER_PLAYER] {
        &self.pieces
    }

    /// Get one of the player's pieces by index.
    #[must_use]
    pub fn piece(&self, index: u8) -> &Piece {
        &self.pieces[index as usize]
    }

    pub(crate) fn piece_mut(&mut self, index: u8) -> &mut Piece {
        &mut self.pieces[index as usize]
    }

    /// Number of pieces that reached the finish.
    #[must_use]
    pub fn finished_count(&self) -> usize {
        self.pieces.iter().filter(|p| p.state().is_finished()).count()
    }

    /// Whether every piece has finished.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.finished_count() == PIECES_PER_PLAYER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p3 = PlayerId::new(3);

        assert_eq!(p0.index(), 0);
        assert_eq!(p3.raw(), 3);
        assert_eq!(format!("{}", p0), "Red");
        assert_eq!(format!("{}", p3), "Yellow");
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(PlayerId::new(0).next(), PlayerId::new(1));
        assert_eq!(PlayerId::new(2).next(), PlayerId::new(3));
        assert_eq!(PlayerId::new(3).next(), PlayerId::new(0));
    }

    #[test]
    fn test_colors() {
        let colors: Vec<_> = PlayerId::all().map(PlayerId::color).collect();
        assert_eq!(
            colors,
            vec![PlayerColor::Red, PlayerColor::Blue, PlayerColor::Green, PlayerColor::Yellow]
        );
        assert_eq!(PlayerColor::Green.name(), "Green");
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32 * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(1)], 10);
        assert_eq!(map[PlayerId::new(3)], 30);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::with_value(0);

        map[PlayerId::new(0)] = 10;
        for (_, value) in map.iter_mut() {
            *value += 1;
        }

        assert_eq!(map[PlayerId::new(0)], 11);
        assert_eq!(map[PlayerId::new(1)], 1);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs[2], (PlayerId::new(2), &2));
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    fn test_new_player_pieces_at_home() {
        let player = Player::new(PlayerId::new(2));

        assert_eq!(player.pieces().len(), 4);
        for (i, piece) in player.pieces().iter().enumerate() {
            assert_eq!(piece.id(), PieceId::new(PlayerId::new(2), i as u8));
            assert!(piece.state().is_home());
        }
        assert_eq!(player.finished_count(), 0);
        assert!(!player.has_won());
    }

    #[test]
    fn test_player_id_serde() {
        assert_eq!(serde_json::to_string(&PlayerId::new(1)).unwrap(), "1");
        assert!(serde_json::from_str::<PlayerId>("4").is_err());
    }

    #[test]
    #[should_panic(expected = "Player index out of range")]
    fn test_player_id_out_of_range() {
        let _ = PlayerId::new(4);
    }
}

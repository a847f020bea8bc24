//! Filter, sort and paginate a scanned record set.
//!
//! Behaviour is defined as a linear scan: keep matching records, stable-sort
//! them ascending by the requested field, then slice the page window. Records
//! are expected in store order (ascending id) so ties keep that order.

use std::cmp::Ordering;

use crate::entities::Player;
use crate::query::params::{PageWindow, PlayerOrder, PlayerQuery};
use crate::query::predicate::PlayerPredicate;

impl PlayerOrder {
    pub fn compare(&self, a: &Player, b: &Player) -> Ordering {
        match self {
            PlayerOrder::Id => a.id().cmp(&b.id()),
            PlayerOrder::Name => a.name().cmp(b.name()),
            PlayerOrder::Experience => a.experience().cmp(&b.experience()),
            PlayerOrder::Level => a.level().cmp(&b.level()),
            PlayerOrder::Birthday => a.birthday().cmp(&b.birthday()),
        }
    }
}

impl PageWindow {
    /// Slice `[offset, offset + limit)`, empty when `offset` is past the end.
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset)
            .take(self.limit)
            .collect()
    }
}

/// Matching records in sort order, before pagination.
pub fn select(
    players: Vec<Player>,
    predicate: &PlayerPredicate,
    order: PlayerOrder,
) -> Vec<Player> {
    let mut matched: Vec<Player> = players
        .into_iter()
        .filter(|player| predicate.matches(player))
        .collect();
    // sort_by is stable
    matched.sort_by(|a, b| order.compare(a, b));
    matched
}

/// The page of records a list request returns.
pub fn list(players: Vec<Player>, query: &PlayerQuery) -> Vec<Player> {
    let predicate = PlayerPredicate::from(&query.filter);
    query.window.apply(select(players, &predicate, query.order))
}

/// Number of matching records, independent of any page window.
pub fn count(players: &[Player], predicate: &PlayerPredicate) -> usize {
    players.iter().filter(|player| predicate.matches(player)).count()
}

//! Output events delivered to the renderer / persistence collaborator

use serde::{Deserialize, Serialize};
use tilebrush_core::{Coordinate, PlacedTile, TileCategory};

/// Something the outside world has to mirror after a brush operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileEvent {
    /// A tile was created or rebuilt at `coord`
    TilePlaced {
        coord: Coordinate,
        category: TileCategory,
        rotation: u8,
        variant: usize,
    },
    /// The tile at `coord` was deleted
    TileRemoved { coord: Coordinate },
    /// Any prop or decoration bound to `coord` must be released.
    /// Only explicit deletes and level clears send this.
    DecorationReleased { coord: Coordinate },
    /// Every tile was dropped
    LevelCleared,
}

impl TileEvent {
    pub fn placed(tile: &PlacedTile) -> Self {
        TileEvent::TilePlaced {
            coord: tile.coord,
            category: tile.category,
            rotation: tile.rotation,
            variant: tile.variant,
        }
    }

    /// The cell this event concerns, if any
    pub fn coord(&self) -> Option<Coordinate> {
        match self {
            TileEvent::TilePlaced { coord, .. }
            | TileEvent::TileRemoved { coord }
            | TileEvent::DecorationReleased { coord } => Some(*coord),
            TileEvent::LevelCleared => None,
        }
    }
}

/// Receives events synchronously, in the order they happen
pub trait EventSink {
    fn emit(&mut self, event: TileEvent);
}

impl EventSink for Vec<TileEvent> {
    fn emit(&mut self, event: TileEvent) {
        self.push(event);
    }
}

impl<F: FnMut(TileEvent)> EventSink for F {
    fn emit(&mut self, event: TileEvent) {
        self(event);
    }
}

/// Sink that drops everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: TileEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placed_from_tile() {
        let mut tile = PlacedTile::new(Coordinate::new(2, 1), TileCategory::OneSide, 3);
        tile.variant = 2;
        assert_eq!(
            TileEvent::placed(&tile),
            TileEvent::TilePlaced {
                coord: Coordinate::new(2, 1),
                category: TileCategory::OneSide,
                rotation: 3,
                variant: 2,
            }
        );
    }

    #[test]
    fn test_event_coord() {
        let c = Coordinate::new(-1, 4);
        assert_eq!(TileEvent::TileRemoved { coord: c }.coord(), Some(c));
        assert_eq!(TileEvent::DecorationReleased { coord: c }.coord(), Some(c));
        assert_eq!(TileEvent::LevelCleared.coord(), None);
    }

    #[test]
    fn test_sinks_forward() {
        fn clear_into<S: EventSink>(mut sink: S) {
            sink.emit(TileEvent::LevelCleared);
        }

        let mut events = Vec::new();
        clear_into(|event: TileEvent| events.push(event));
        clear_into(NullSink);
        assert_eq!(events, vec![TileEvent::LevelCleared]);

        let mut collected: Vec<TileEvent> = Vec::new();
        collected.emit(TileEvent::LevelCleared);
        assert_eq!(collected.len(), 1);
    }

    #[test]
    fn test_event_serializes() {
        let json = serde_json::to_string(&TileEvent::TileRemoved {
            coord: Coordinate::new(1, 2),
        })
        .unwrap();
        assert_eq!(json, r#"{"TileRemoved":{"coord":{"x":1,"z":2}}}"#);
    }
}

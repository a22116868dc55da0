//! Fixed-size tile grid with exclusive per-cell occupancy.

use crate::error::{ErrorSeverity, GameError};

use super::{EntityId, Position};

/// Static terrain of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Floor,
    Wall,
}

impl Tile {
    pub fn is_floor(self) -> bool {
        matches!(self, Tile::Floor)
    }

    /// Console glyph used by renderers.
    pub fn glyph(self) -> char {
        match self {
            Tile::Floor => '.',
            Tile::Wall => '#',
        }
    }
}

/// Invariant violations raised by grid writes.
///
/// These indicate a bug in the caller and are never part of normal play.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    #[error("position {position} is outside the {width}x{height} grid")]
    OutOfBounds {
        position: Position,
        width: u32,
        height: u32,
    },

    #[error("position {position} is not floor")]
    NotFloor { position: Position },

    #[error("position {position} is already occupied by {occupant}")]
    Occupied {
        position: Position,
        occupant: EntityId,
    },

    #[error("entity {entity} is already placed at {existing}")]
    AlreadyPlaced { entity: EntityId, existing: Position },

    #[error("entity {entity} is not at its recorded position {position}")]
    EntityNotAtPosition { entity: EntityId, position: Position },
}

impl GameError for GridError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "GRID_OUT_OF_BOUNDS",
            Self::NotFloor { .. } => "GRID_NOT_FLOOR",
            Self::Occupied { .. } => "GRID_OCCUPIED",
            Self::AlreadyPlaced { .. } => "GRID_ALREADY_PLACED",
            Self::EntityNotAtPosition { .. } => "GRID_ENTITY_NOT_AT_POSITION",
        }
    }
}

/// Two layers over the same `width x height` rectangle: terrain and occupants.
///
/// Invariants:
/// - an entity id appears in at most one cell
/// - only `Floor` cells hold occupants
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
    occupants: Vec<Option<EntityId>>,
}

impl Grid {
    /// Creates an all-floor grid.
    pub fn new(width: u32, height: u32) -> Self {
        let cells = (width * height) as usize;
        Self {
            width,
            height,
            tiles: vec![Tile::Floor; cells],
            occupants: vec![None; cells],
        }
    }

    /// Creates a grid whose outer ring is wall and whose interior is floor.
    pub fn walled(width: u32, height: u32) -> Self {
        let mut grid = Self::new(width, height);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let on_border =
                    x == 0 || y == 0 || x == width as i32 - 1 || y == height as i32 - 1;
                if on_border {
                    grid.tiles[(y as u32 * width + x as u32) as usize] = Tile::Wall;
                }
            }
        }
        grid
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.in_bounds(position)
            .then(|| (position.y as u32 * self.width + position.x as u32) as usize)
    }

    fn index_for_write(&self, position: Position) -> Result<usize, GridError> {
        self.index(position).ok_or(GridError::OutOfBounds {
            position,
            width: self.width,
            height: self.height,
        })
    }

    /// Terrain at `position`; out-of-bounds reads as `Wall`.
    pub fn tile(&self, position: Position) -> Tile {
        self.index(position)
            .map(|index| self.tiles[index])
            .unwrap_or(Tile::Wall)
    }

    /// Replaces the terrain of a cell. A cell that holds an occupant must stay floor.
    pub fn set_tile(&mut self, position: Position, tile: Tile) -> Result<(), GridError> {
        let index = self.index_for_write(position)?;
        if !tile.is_floor() && self.occupants[index].is_some() {
            return Err(GridError::NotFloor { position });
        }
        self.tiles[index] = tile;
        Ok(())
    }

    /// Occupant at `position`; out-of-bounds reads as empty.
    pub fn entity_at(&self, position: Position) -> Option<EntityId> {
        self.index(position).and_then(|index| self.occupants[index])
    }

    /// Finds the cell currently holding `entity`.
    pub fn locate(&self, entity: EntityId) -> Option<Position> {
        let index = self.occupants.iter().position(|cell| *cell == Some(entity))?;
        let index = index as u32;
        Some(Position::new(
            (index % self.width) as i32,
            (index / self.width) as i32,
        ))
    }

    /// In bounds, floor, and unoccupied.
    pub fn can_enter(&self, position: Position) -> bool {
        self.index(position)
            .is_some_and(|index| self.tiles[index].is_floor() && self.occupants[index].is_none())
    }

    /// Writes the occupant layer at `position`.
    ///
    /// Clearing a cell (`None`) is always allowed on floor. Placing an entity
    /// fails on non-floor cells, on occupied cells, and when the entity already
    /// sits somewhere else on the grid.
    pub fn set_entity(
        &mut self,
        position: Position,
        entity: Option<EntityId>,
    ) -> Result<(), GridError> {
        let index = self.index_for_write(position)?;
        if !self.tiles[index].is_floor() {
            return Err(GridError::NotFloor { position });
        }

        if let Some(entity) = entity {
            if let Some(occupant) = self.occupants[index] {
                return Err(GridError::Occupied { position, occupant });
            }
            if let Some(existing) = self.locate(entity) {
                return Err(GridError::AlreadyPlaced { entity, existing });
            }
        }

        self.occupants[index] = entity;
        Ok(())
    }

    /// Relocates `entity` from `from` to `to`.
    ///
    /// All checks run before any write, so a failed move leaves both cells untouched.
    pub fn move_entity(
        &mut self,
        entity: EntityId,
        from: Position,
        to: Position,
    ) -> Result<(), GridError> {
        if self.entity_at(from) != Some(entity) {
            return Err(GridError::EntityNotAtPosition {
                entity,
                position: from,
            });
        }
        let from_index = self.index_for_write(from)?;
        let to_index = self.index_for_write(to)?;
        if from_index == to_index {
            return Ok(());
        }
        if !self.tiles[to_index].is_floor() {
            return Err(GridError::NotFloor { position: to });
        }
        if let Some(occupant) = self.occupants[to_index] {
            return Err(GridError::Occupied {
                position: to,
                occupant,
            });
        }

        self.occupants[to_index] = Some(entity);
        self.occupants[from_index] = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enterable_cell_accepts_placement() {
        let mut grid = Grid::walled(5, 5);
        for y in 0..5 {
            for x in 0..5 {
                let position = Position::new(x, y);
                if grid.can_enter(position) {
                    grid.set_entity(position, Some(EntityId(7))).unwrap();
                    assert_eq!(grid.entity_at(position), Some(EntityId(7)));
                    grid.set_entity(position, None).unwrap();
                }
            }
        }
    }

    #[test]
    fn walled_grid_has_floor_interior() {
        let grid = Grid::walled(5, 5);
        assert_eq!(grid.tile(Position::new(0, 2)), Tile::Wall);
        assert_eq!(grid.tile(Position::new(4, 4)), Tile::Wall);
        assert_eq!(grid.tile(Position::new(2, 2)), Tile::Floor);
        assert_eq!(grid.tile(Position::new(-1, 2)), Tile::Wall);
    }

    #[test]
    fn placing_on_wall_fails() {
        let mut grid = Grid::walled(4, 4);
        let err = grid
            .set_entity(Position::new(0, 0), Some(EntityId(1)))
            .unwrap_err();
        assert!(matches!(err, GridError::NotFloor { .. }));
    }

    #[test]
    fn placing_on_occupied_cell_fails() {
        let mut grid = Grid::new(3, 3);
        grid.set_entity(Position::new(1, 1), Some(EntityId(1))).unwrap();
        let err = grid
            .set_entity(Position::new(1, 1), Some(EntityId(2)))
            .unwrap_err();
        assert!(matches!(err, GridError::Occupied { occupant: EntityId(1), .. }));
    }

    #[test]
    fn entity_cannot_occupy_two_cells() {
        let mut grid = Grid::new(3, 3);
        grid.set_entity(Position::new(0, 0), Some(EntityId(1))).unwrap();
        let err = grid
            .set_entity(Position::new(2, 2), Some(EntityId(1)))
            .unwrap_err();
        assert!(matches!(err, GridError::AlreadyPlaced { .. }));
    }

    #[test]
    fn writes_out_of_bounds_fail() {
        let mut grid = Grid::new(3, 3);
        let err = grid.set_entity(Position::new(3, 0), None).unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { .. }));
    }

    #[test]
    fn move_relocates_entity() {
        let mut grid = Grid::new(3, 3);
        let from = Position::new(0, 0);
        let to = Position::new(1, 0);
        grid.set_entity(from, Some(EntityId(1))).unwrap();

        grid.move_entity(EntityId(1), from, to).unwrap();

        assert_eq!(grid.entity_at(from), None);
        assert_eq!(grid.entity_at(to), Some(EntityId(1)));
    }

    #[test]
    fn failed_move_leaves_occupancy_unchanged() {
        let mut grid = Grid::walled(5, 5);
        let mover = Position::new(1, 1);
        let blocker = Position::new(2, 1);
        grid.set_entity(mover, Some(EntityId(1))).unwrap();
        grid.set_entity(blocker, Some(EntityId(2))).unwrap();

        assert!(grid.move_entity(EntityId(1), mover, blocker).is_err());
        assert!(grid.move_entity(EntityId(1), mover, Position::new(0, 1)).is_err());

        assert_eq!(grid.entity_at(mover), Some(EntityId(1)));
        assert_eq!(grid.entity_at(blocker), Some(EntityId(2)));
        assert_eq!(grid.entity_at(Position::new(0, 1)), None);
    }

    #[test]
    fn move_requires_entity_at_origin() {
        let mut grid = Grid::new(3, 3);
        grid.set_entity(Position::new(0, 0), Some(EntityId(1))).unwrap();
        let err = grid
            .move_entity(EntityId(1), Position::new(1, 1), Position::new(2, 2))
            .unwrap_err();
        assert!(matches!(err, GridError::EntityNotAtPosition { .. }));
    }
}

#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative agent state for the Grid Pursuit simulator.
//!
//! [`Grid`] holds the full state of a single agent on a bounded grid: its
//! position, its facing, the fixed enemy marker it is hunting, and a history
//! of recorded positions. Every position mutation flows through one clamping
//! assignment, so the agent can never leave the playable area no matter what
//! sequence of moves and turns the embedding application drives.
//! [`SteppedGrid`] wraps the base state with a move counter and a distance
//! query for callers that track progress toward the enemy.

use std::collections::HashMap;

use grid_pursuit_core::{Facing, GridError, GridPos, GridSize, StepIndex};

/// Bounded grid occupied by a single agent pursuing a fixed enemy marker.
///
/// The agent starts at the origin facing [`Facing::Up`] with an empty
/// history. The enemy marker keeps the exact coordinates it was constructed
/// with, even when those fall outside the grid.
#[derive(Clone, Debug)]
pub struct Grid {
    size: GridSize,
    position: GridPos,
    facing: Facing,
    enemy: GridPos,
    history: HashMap<StepIndex, GridPos>,
}

impl Grid {
    /// Creates a grid with the agent at the origin and an empty history.
    #[must_use]
    pub fn new(size: GridSize, enemy: GridPos) -> Self {
        Self {
            size,
            position: GridPos::new(0, 0),
            facing: Facing::Up,
            enemy,
            history: HashMap::new(),
        }
    }

    /// Validates raw dimensions and creates the grid in one step.
    pub fn from_dimensions(width: u32, height: u32, enemy: GridPos) -> Result<Self, GridError> {
        Ok(Self::new(GridSize::new(width, height)?, enemy))
    }

    /// Playable dimensions of the grid.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Current agent position, always within grid bounds.
    #[must_use]
    pub const fn position(&self) -> GridPos {
        self.position
    }

    /// Current agent orientation.
    #[must_use]
    pub const fn facing(&self) -> Facing {
        self.facing
    }

    /// Fixed enemy marker supplied at construction, never clamped.
    #[must_use]
    pub const fn enemy(&self) -> GridPos {
        self.enemy
    }

    /// Moves the agent to the requested position, clamping per axis.
    ///
    /// This is the single assignment point for the agent position; every
    /// other mutation routes through it. Returns the stored, possibly
    /// clamped, position.
    pub fn set_position(&mut self, requested: GridPos) -> GridPos {
        self.position = self.size.clamp(requested);
        self.position
    }

    /// Advances the agent one cell in its current facing.
    ///
    /// A move against a boundary clamps silently on the violated axis and
    /// leaves the other axis untouched; it is never an error.
    pub fn move_forward(&mut self) -> GridPos {
        let (dx, dy) = self.facing.unit_step();
        let candidate = self.position.offset_by(dx, dy);
        self.set_position(candidate)
    }

    /// Rotates the agent 90 degrees counter-clockwise.
    pub fn turn_left(&mut self) -> Facing {
        self.facing = self.facing.turned_left();
        self.facing
    }

    /// Rotates the agent 90 degrees clockwise.
    pub fn turn_right(&mut self) -> Facing {
        self.facing = self.facing.turned_right();
        self.facing
    }

    /// Reports whether the agent stands exactly on the enemy marker.
    ///
    /// There is no proximity threshold; adjacency does not count.
    #[must_use]
    pub fn find_enemy(&self) -> bool {
        self.position == self.enemy
    }

    /// Snapshots the current position under the caller-supplied key.
    ///
    /// Recording the same key twice overwrites the earlier snapshot. The
    /// history grows without bound; entries are never evicted.
    pub fn record_position(&mut self, step: StepIndex) {
        let _ = self.history.insert(step, self.position);
    }

    /// Looks up the snapshot recorded under the provided key.
    ///
    /// Returns [`None`] for keys that were never recorded; an absent entry
    /// is an ordinary outcome, not an error.
    #[must_use]
    pub fn position_at_step(&self, step: StepIndex) -> Option<GridPos> {
        self.history.get(&step).copied()
    }

    /// Number of distinct history keys recorded so far.
    #[must_use]
    pub fn recorded_steps(&self) -> usize {
        self.history.len()
    }
}

/// Grid specialization that counts forward moves and measures enemy distance.
///
/// Composition over [`Grid`] rather than a deeper hierarchy: the wrapper
/// owns the base state, intercepts [`SteppedGrid::move_forward`] to bump its
/// counter, and delegates everything else unchanged. The move counter and
/// the [`StepIndex`] history keys are deliberately independent; callers may
/// key history however they like without disturbing the move count.
#[derive(Clone, Debug)]
pub struct SteppedGrid {
    grid: Grid,
    steps: u64,
}

impl SteppedGrid {
    /// Creates a stepped grid with the move counter at zero.
    #[must_use]
    pub fn new(size: GridSize, enemy: GridPos) -> Self {
        Self {
            grid: Grid::new(size, enemy),
            steps: 0,
        }
    }

    /// Validates raw dimensions and creates the stepped grid in one step.
    pub fn from_dimensions(width: u32, height: u32, enemy: GridPos) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::from_dimensions(width, height, enemy)?,
            steps: 0,
        })
    }

    /// Advances the agent and increments the move counter.
    ///
    /// The counter grows on every call, including moves the boundary clamps
    /// into no-ops.
    pub fn move_forward(&mut self) -> GridPos {
        let position = self.grid.move_forward();
        self.steps = self.steps.saturating_add(1);
        position
    }

    /// Number of forward moves attempted since construction.
    #[must_use]
    pub const fn steps(&self) -> u64 {
        self.steps
    }

    /// Manhattan distance from the agent to the enemy marker.
    ///
    /// Recomputed on every call; never cached.
    #[must_use]
    pub fn distance_to_enemy(&self) -> u64 {
        self.grid.position().manhattan_distance(self.grid.enemy())
    }

    /// Rotates the agent 90 degrees counter-clockwise.
    pub fn turn_left(&mut self) -> Facing {
        self.grid.turn_left()
    }

    /// Rotates the agent 90 degrees clockwise.
    pub fn turn_right(&mut self) -> Facing {
        self.grid.turn_right()
    }

    /// Moves the agent to the requested position, clamping per axis.
    ///
    /// Direct placement is not a forward move and leaves the counter alone.
    pub fn set_position(&mut self, requested: GridPos) -> GridPos {
        self.grid.set_position(requested)
    }

    /// Reports whether the agent stands exactly on the enemy marker.
    #[must_use]
    pub fn find_enemy(&self) -> bool {
        self.grid.find_enemy()
    }

    /// Snapshots the current position under the caller-supplied key.
    pub fn record_position(&mut self, step: StepIndex) {
        self.grid.record_position(step);
    }

    /// Looks up the snapshot recorded under the provided key.
    #[must_use]
    pub fn position_at_step(&self, step: StepIndex) -> Option<GridPos> {
        self.grid.position_at_step(step)
    }

    /// Playable dimensions of the grid.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.grid.size()
    }

    /// Current agent position, always within grid bounds.
    #[must_use]
    pub const fn position(&self) -> GridPos {
        self.grid.position()
    }

    /// Current agent orientation.
    #[must_use]
    pub const fn facing(&self) -> Facing {
        self.grid.facing()
    }

    /// Fixed enemy marker supplied at construction, never clamped.
    #[must_use]
    pub const fn enemy(&self) -> GridPos {
        self.grid.enemy()
    }

    /// Number of distinct history keys recorded so far.
    #[must_use]
    pub fn recorded_steps(&self) -> usize {
        self.grid.recorded_steps()
    }
}

#[cfg(test)]
mod tests {
    use super::{Grid, SteppedGrid};
    use grid_pursuit_core::{Facing, GridError, GridPos, GridSize, StepIndex};

    fn grid(width: u32, height: u32, enemy: GridPos) -> Grid {
        Grid::new(GridSize::new(width, height).expect("valid size"), enemy)
    }

    #[test]
    fn construction_rejects_degenerate_dimensions() {
        let result = Grid::from_dimensions(0, 5, GridPos::new(1, 1));
        assert_eq!(
            result.err(),
            Some(GridError::EmptyAxis {
                width: 0,
                height: 5
            })
        );
    }

    #[test]
    fn new_grid_starts_at_origin_facing_up() {
        let grid = grid(5, 5, GridPos::new(4, 4));
        assert_eq!(grid.position(), GridPos::new(0, 0));
        assert_eq!(grid.facing(), Facing::Up);
        assert_eq!(grid.recorded_steps(), 0);
    }

    #[test]
    fn enemy_marker_is_stored_unclamped() {
        let grid = grid(3, 3, GridPos::new(10, -4));
        assert_eq!(grid.enemy(), GridPos::new(10, -4));
    }

    #[test]
    fn set_position_clamps_each_axis_independently() {
        let mut grid = grid(5, 3, GridPos::new(0, 0));
        assert_eq!(grid.set_position(GridPos::new(-3, 7)), GridPos::new(0, 2));
        assert_eq!(grid.set_position(GridPos::new(9, 1)), GridPos::new(4, 1));
        assert_eq!(grid.position(), GridPos::new(4, 1));
    }

    #[test]
    fn move_against_boundary_is_a_silent_no_op() {
        let mut grid = grid(4, 4, GridPos::new(3, 3));
        let _ = grid.turn_left();
        let _ = grid.turn_left();
        assert_eq!(grid.facing(), Facing::Down);
        assert_eq!(grid.move_forward(), GridPos::new(0, 0));
        assert_eq!(grid.position(), GridPos::new(0, 0));
    }

    #[test]
    fn stepped_counter_ignores_direct_placement() {
        let mut stepped = SteppedGrid::new(
            GridSize::new(6, 6).expect("valid size"),
            GridPos::new(5, 5),
        );
        let _ = stepped.set_position(GridPos::new(3, 3));
        assert_eq!(stepped.steps(), 0);
        let _ = stepped.move_forward();
        assert_eq!(stepped.steps(), 1);
    }

    #[test]
    fn history_keys_do_not_disturb_the_move_counter() {
        let mut stepped = SteppedGrid::new(
            GridSize::new(6, 6).expect("valid size"),
            GridPos::new(5, 5),
        );
        let _ = stepped.move_forward();
        stepped.record_position(StepIndex::new(40));
        stepped.record_position(StepIndex::new(41));
        assert_eq!(stepped.steps(), 1);
        assert_eq!(stepped.recorded_steps(), 2);
    }
}

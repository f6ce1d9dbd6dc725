//! Game state module - the player state machine and per-tick physics
//!
//! A [`GameSession`] owns the world and everything about the player. Moves
//! change the logical grid position and the hop target; every tick eases the
//! world position toward the target, moves the obstacles, and then resolves
//! collisions against the lane the player is physically over.
//!
//! ```text
//!   Idle ──request_move──▶ Hopping ──converged──▶ Idle
//!     └──────────────┬───────────┘
//!                    ▼
//!                 GameOver (terminal until reset)
//! ```

use std::f32::consts::PI;

use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::{GameSnapshot, LaneSnapshot, PlayerSnapshot};
use crate::tuning::Tuning;
use crate::types::*;
use crate::world::World;

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameSession<R = SimpleRng> {
    world: World<R>,
    tuning: Tuning,
    grid: GridPos,
    position: WorldPos,
    target: WorldPos,
    hop_height: f32,
    hopping: bool,
    standing_on_log: bool,
    /// Furthest row reached this session.
    score: u32,
    best_score: u32,
    game_over: bool,
    death_cause: Option<DeathCause>,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    ticks: u64,
    elapsed_ms: u64,
    /// Last score/game-over event (consumed by collaborators).
    last_event: Option<SessionEvent>,
}

impl GameSession<SimpleRng> {
    /// Create a new session with the given RNG seed and default tuning
    pub fn new(seed: u32) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u32, tuning: Tuning) -> Self {
        Self::from_world(World::new(tuning, SimpleRng::new(seed)))
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Start a session on an existing world, player at the origin.
    pub fn from_world(world: World<R>) -> Self {
        let tuning = *world.tuning();
        Self {
            world,
            tuning,
            grid: GridPos::ORIGIN,
            position: WorldPos::default(),
            target: WorldPos::default(),
            hop_height: 0.0,
            hopping: false,
            standing_on_log: false,
            score: 0,
            best_score: 0,
            game_over: false,
            death_cause: None,
            episode_id: 0,
            ticks: 0,
            elapsed_ms: 0,
            last_event: None,
        }
    }

    /// Seed the best score loaded from persistence.
    pub fn with_best_score(mut self, best_score: u32) -> Self {
        self.best_score = best_score;
        self
    }

    pub fn world(&self) -> &World<R> {
        &self.world
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn grid(&self) -> GridPos {
        self.grid
    }

    pub fn position(&self) -> WorldPos {
        self.position
    }

    pub fn target(&self) -> WorldPos {
        self.target
    }

    pub fn hop_height(&self) -> f32 {
        self.hop_height
    }

    pub fn hopping(&self) -> bool {
        self.hopping
    }

    pub fn standing_on_log(&self) -> bool {
        self.standing_on_log
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn death_cause(&self) -> Option<DeathCause> {
        self.death_cause
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Lane row the player is physically over.
    pub fn physical_row(&self) -> u32 {
        self.tuning.row_at(self.position.z)
    }

    /// Whether a move request would currently be considered.
    pub fn accepts_input(&self) -> bool {
        !self.hopping && !self.game_over
    }

    /// Take and clear the last score/game-over event.
    pub fn take_last_event(&mut self) -> Option<SessionEvent> {
        self.last_event.take()
    }

    /// Request a one-cell hop.
    ///
    /// Ignored while hopping or after game over. Moves behind row 0 or past
    /// the lateral bound are rejected. Returns whether the move was accepted;
    /// a rejected move changes nothing.
    pub fn request_move(&mut self, dir: Direction) -> bool {
        if !self.accepts_input() {
            return false;
        }
        let Some(next) = self.grid.checked_step(dir, self.tuning.lateral_bound) else {
            return false;
        };

        self.grid = next;
        self.target = WorldPos::from_grid(next, self.tuning.grid_unit);
        self.hopping = true;

        if next.row > self.score {
            self.score = next.row;
            self.world.ensure_lookahead(self.score);
            self.last_event = Some(SessionEvent::ScoreRaised { score: self.score });
        }
        true
    }

    /// Main game tick: ease toward the target, move obstacles, resolve collisions.
    ///
    /// Motion is per tick; `elapsed_ms` only accumulates survival time.
    /// Returns false once the session is over.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over {
            return false;
        }
        self.ticks += 1;
        self.elapsed_ms += u64::from(elapsed_ms);

        self.advance_hop();
        self.world.tick_all();
        self.resolve_collisions();
        !self.game_over
    }

    /// Exponential smoothing toward the target plus the derived hop arc.
    fn advance_hop(&mut self) {
        let f = self.tuning.hop_fraction;
        self.position.x += (self.target.x - self.position.x) * f;
        self.position.z += (self.target.z - self.position.z) * f;

        let remaining = self.position.distance(&self.target);
        if remaining < self.tuning.hop_epsilon {
            self.hop_height = 0.0;
            self.hopping = false;
        } else {
            // A sideways hop from a log-drifted x can span more than one
            // cell; the arc stays on the ground for that stretch.
            let phase = PI * remaining / self.tuning.grid_unit;
            self.hop_height = (phase.sin() * self.tuning.hop_amplitude).max(0.0);
        }
    }

    fn resolve_collisions(&mut self) {
        let row = self.physical_row();
        debug_assert!(
            (row as usize) < self.world.len(),
            "row {} is past the generated tail ({} lanes)",
            row,
            self.world.len()
        );
        let Some(lane) = self.world.lane(row) else {
            return;
        };

        let terrain = lane.terrain();
        let velocity = lane.velocity();
        let half_width = self.tuning.hit_half_width(terrain);
        let half_depth = self.tuning.hit_half_depth;
        let dz = (self.position.z - lane.z()).abs();
        let contact = dz < half_depth
            && lane
                .obstacles()
                .iter()
                .any(|o| (self.position.x - o.x).abs() < half_width);

        self.standing_on_log = false;
        match terrain {
            Terrain::Road if contact => {
                self.end(DeathCause::HitByCar);
                return;
            }
            Terrain::River if contact => {
                self.standing_on_log = true;
                if !self.hopping {
                    self.position.x += velocity;
                    self.target.x += velocity;
                    self.grid.col = self.tuning.col_at(self.position.x);
                }
            }
            Terrain::River if !self.hopping => {
                self.end(DeathCause::Drowned);
                return;
            }
            _ => {}
        }

        if self.position.x.abs() > self.tuning.hard_boundary {
            self.end(DeathCause::OutOfBounds);
        }
    }

    /// Enter the terminal state.
    ///
    /// Idempotent: only the first call records the cause, raises the best
    /// score and emits the event. Returns whether this call ended the session.
    pub fn end(&mut self, cause: DeathCause) -> bool {
        if self.game_over {
            return false;
        }
        self.game_over = true;
        self.death_cause = Some(cause);
        self.best_score = self.best_score.max(self.score);
        self.last_event = Some(SessionEvent::GameOver {
            cause,
            score: self.score,
            best_score: self.best_score,
        });
        log::info!(
            "episode {} over: {} at row {} (score {}, best {})",
            self.episode_id,
            cause.as_str(),
            self.physical_row(),
            self.score,
            self.best_score
        );
        true
    }

    /// Discard lanes and player state; keep the best score and the RNG stream.
    pub fn reset(&mut self) {
        self.world.regenerate();
        self.grid = GridPos::ORIGIN;
        self.position = WorldPos::default();
        self.target = WorldPos::default();
        self.hop_height = 0.0;
        self.hopping = false;
        self.standing_on_log = false;
        self.score = 0;
        self.game_over = false;
        self.death_cause = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.ticks = 0;
        self.elapsed_ms = 0;
        self.last_event = None;
        log::info!("episode {} started", self.episode_id);
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(dir) => self.request_move(dir),
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let row = self.physical_row();
        out.player = PlayerSnapshot {
            grid: self.grid,
            world: self.position,
            target: self.target,
            hop_height: self.hop_height,
            physical_row: row,
        };
        out.hopping = self.hopping;
        out.standing_on_log = self.standing_on_log;
        out.game_over = self.game_over;
        out.death_cause = self.death_cause;
        out.score = self.score;
        out.best_score = self.best_score;
        out.episode_id = self.episode_id;
        out.ticks = self.ticks;
        out.elapsed_ms = self.elapsed_ms;

        let first = row.saturating_sub(SNAPSHOT_LANES_BEHIND) as usize;
        let last = (row as usize + SNAPSHOT_LANES_AHEAD as usize + 1).min(self.world.len());
        out.lanes.clear();
        out.lanes.extend(
            self.world.lanes()[first.min(last)..last]
                .iter()
                .map(|lane| LaneSnapshot {
                    index: lane.index(),
                    terrain: lane.terrain(),
                    z: lane.z(),
                    direction: lane.direction(),
                    speed: lane.speed(),
                    obstacles: lane.obstacles().iter().map(|o| o.x).collect(),
                }),
        );
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lane::Lane;

    fn all_safe() -> Tuning {
        Tuning {
            safe_zone: u32::MAX,
            ..Tuning::default()
        }
    }

    /// Tick until the current hop lands (bounded).
    fn settle<R: RandomSource>(s: &mut GameSession<R>) {
        for _ in 0..200 {
            if !s.hopping {
                return;
            }
            s.tick(TICK_MS);
        }
        panic!("hop did not converge");
    }

    /// Session whose lanes `0..prefix.len()` are given, player parked at `grid`.
    fn scripted(prefix: Vec<Lane>, grid: GridPos) -> GameSession {
        let tuning = Tuning::default();
        let world = World::from_lanes(prefix, tuning, SimpleRng::new(1));
        let mut s = GameSession::from_world(world);
        s.grid = grid;
        s.position = WorldPos::from_grid(grid, tuning.grid_unit);
        s.target = s.position;
        s
    }

    #[test]
    fn test_new_session() {
        let s = GameSession::new(12345);
        assert_eq!(s.grid, GridPos::ORIGIN);
        assert_eq!(s.position, WorldPos::default());
        assert!(!s.hopping);
        assert!(!s.game_over);
        assert_eq!(s.score, 0);
        assert_eq!(s.episode_id, 0);
        assert!(s.world.len() > s.tuning.lookahead_margin as usize);
    }

    #[test]
    fn test_forward_move_sets_target_and_score() {
        let mut s = GameSession::with_tuning(1, all_safe());
        assert!(s.request_move(Direction::Forward));
        assert_eq!(s.grid, GridPos::new(1, 0));
        assert_eq!(s.target, WorldPos::new(0.0, -40.0));
        assert!(s.hopping);
        assert_eq!(s.score, 1);
        assert_eq!(s.take_last_event(), Some(SessionEvent::ScoreRaised { score: 1 }));
        assert_eq!(s.take_last_event(), None);
    }

    #[test]
    fn test_backward_from_origin_is_rejected() {
        let mut s = GameSession::new(1);
        assert!(!s.request_move(Direction::Backward));
        assert_eq!(s.grid, GridPos::ORIGIN);
        assert!(!s.hopping);
    }

    #[test]
    fn test_move_while_hopping_is_noop() {
        let mut s = GameSession::with_tuning(1, all_safe());
        assert!(s.request_move(Direction::Forward));
        let (grid, target, score) = (s.grid, s.target, s.score);
        assert!(!s.request_move(Direction::Forward));
        assert!(!s.request_move(Direction::Left));
        assert_eq!((s.grid, s.target, s.score), (grid, target, score));
    }

    #[test]
    fn test_hop_height_peaks_mid_hop_and_lands_at_zero() {
        let mut s = GameSession::with_tuning(1, all_safe());
        s.request_move(Direction::Forward);
        let mut peak: f32 = 0.0;
        while s.hopping {
            s.tick(TICK_MS);
            peak = peak.max(s.hop_height);
            assert!(s.hop_height <= s.tuning.hop_amplitude + 1e-4);
        }
        assert!(peak > s.tuning.hop_amplitude * 0.9);
        assert_eq!(s.hop_height, 0.0);
    }

    #[test]
    fn test_ticks_and_elapsed_accumulate() {
        let mut s = GameSession::new(1);
        s.tick(16);
        s.tick(17);
        assert_eq!(s.ticks, 2);
        assert_eq!(s.elapsed_ms, 33);
    }

    #[test]
    fn test_road_contact_ends_session() {
        let tuning = Tuning::default();
        let mut s = scripted(
            vec![
                Lane::from_parts(0, Terrain::Safe, 1, 0.0, &[], &tuning),
                Lane::from_parts(1, Terrain::Road, 1, 1.0, &[5.0], &tuning),
            ],
            GridPos::new(1, 0),
        );
        assert!(!s.tick(TICK_MS));
        assert!(s.game_over);
        assert_eq!(s.death_cause, Some(DeathCause::HitByCar));
    }

    #[test]
    fn test_river_without_log_drowns() {
        let tuning = Tuning::default();
        let mut s = scripted(
            vec![
                Lane::from_parts(0, Terrain::Safe, 1, 0.0, &[], &tuning),
                Lane::from_parts(1, Terrain::River, 1, 1.0, &[200.0], &tuning),
            ],
            GridPos::new(1, 0),
        );
        s.tick(TICK_MS);
        assert_eq!(s.death_cause, Some(DeathCause::Drowned));
    }

    #[test]
    fn test_log_carries_player_and_resyncs_column() {
        let tuning = Tuning::default();
        let mut s = scripted(
            vec![
                Lane::from_parts(0, Terrain::Safe, 1, 0.0, &[], &tuning),
                Lane::from_parts(1, Terrain::River, 1, 2.0, &[0.0], &tuning),
            ],
            GridPos::new(1, 0),
        );
        for _ in 0..10 {
            assert!(s.tick(TICK_MS));
            assert!(s.standing_on_log);
        }
        assert_eq!(s.position.x, 20.0);
        assert_eq!(s.target.x, 20.0);
        assert_eq!(s.grid.col, 1);
    }

    #[test]
    fn test_river_mid_hop_does_not_drown() {
        let tuning = Tuning::default();
        let mut s = scripted(
            vec![
                Lane::from_parts(0, Terrain::Safe, 1, 0.0, &[], &tuning),
                Lane::from_parts(1, Terrain::River, 1, 1.0, &[300.0], &tuning),
                Lane::from_parts(2, Terrain::Safe, 1, 0.0, &[], &tuning),
            ],
            GridPos::new(1, 0),
        );
        // Standing in open water while a hop is in flight is not yet fatal.
        s.hopping = true;
        s.target = WorldPos::from_grid(GridPos::new(2, 0), tuning.grid_unit);
        s.grid = GridPos::new(2, 0);
        s.tick(TICK_MS);
        assert!(!s.game_over);
    }

    #[test]
    fn test_out_of_bounds_ends_session() {
        let tuning = Tuning::default();
        let mut s = scripted(
            vec![Lane::from_parts(0, Terrain::Safe, 1, 0.0, &[], &tuning)],
            GridPos::ORIGIN,
        );
        s.position.x = tuning.hard_boundary + 1.0;
        s.target.x = s.position.x;
        s.tick(TICK_MS);
        assert_eq!(s.death_cause, Some(DeathCause::OutOfBounds));
    }

    #[test]
    fn test_end_is_idempotent() {
        let mut s = GameSession::new(1).with_best_score(2);
        s.score = 5;
        assert!(s.end(DeathCause::HitByCar));
        assert_eq!(s.best_score, 5);
        let first = s.take_last_event();
        assert!(matches!(first, Some(SessionEvent::GameOver { best_score: 5, .. })));

        s.score = 9;
        assert!(!s.end(DeathCause::Drowned));
        assert_eq!(s.best_score, 5);
        assert_eq!(s.death_cause, Some(DeathCause::HitByCar));
        assert_eq!(s.take_last_event(), None);
    }

    #[test]
    fn test_game_over_freezes_everything() {
        let mut s = GameSession::with_tuning(1, all_safe());
        s.request_move(Direction::Forward);
        s.end(DeathCause::HitByCar);
        let before = (s.position, s.target, s.grid, s.ticks);
        assert!(!s.tick(TICK_MS));
        assert!(!s.request_move(Direction::Left));
        assert_eq!((s.position, s.target, s.grid, s.ticks), before);
    }

    #[test]
    fn test_reset_keeps_best_and_bumps_episode() {
        let mut s = GameSession::with_tuning(3, all_safe());
        s.request_move(Direction::Forward);
        settle(&mut s);
        s.request_move(Direction::Forward);
        settle(&mut s);
        s.end(DeathCause::Drowned);

        assert!(s.apply_action(GameAction::Restart));
        assert_eq!(s.episode_id, 1);
        assert_eq!(s.best_score, 2);
        assert_eq!(s.score, 0);
        assert_eq!(s.grid, GridPos::ORIGIN);
        assert!(!s.game_over);
        assert_eq!(s.death_cause, None);
        assert_eq!(s.world.len(), s.tuning.lookahead_margin as usize + 1);
    }

    #[test]
    fn test_snapshot_window_tracks_physical_row() {
        let mut s = GameSession::with_tuning(1, all_safe());
        for _ in 0..10 {
            s.request_move(Direction::Forward);
            settle(&mut s);
        }
        let snap = s.snapshot();
        assert_eq!(snap.player.physical_row, 10);
        assert_eq!(snap.lanes.first().map(|l| l.index), Some(10 - SNAPSHOT_LANES_BEHIND));
        assert_eq!(snap.lanes.last().map(|l| l.index), Some(10 + SNAPSHOT_LANES_AHEAD));
        assert_eq!(snap.lane(10).map(|l| l.index), Some(10));
        assert!(snap.lane(0).is_none());
    }

    #[test]
    fn test_long_sideways_hop_never_dips_below_ground() {
        let tuning = Tuning::default();
        let mut s = scripted(
            vec![Lane::from_parts(0, Terrain::Safe, 1, 0.0, &[], &tuning)],
            GridPos::ORIGIN,
        );
        // Drifted left of column 0 but still rounding to it.
        s.position.x = -19.0;
        s.target.x = -19.0;
        assert!(s.request_move(Direction::Right));
        assert_eq!(s.target.x, 40.0);

        s.tick(TICK_MS);
        assert!(s.position.distance(&s.target) > tuning.grid_unit);
        assert_eq!(s.hop_height, 0.0);
        while s.hopping {
            s.tick(TICK_MS);
            assert!(s.hop_height >= 0.0);
        }
        assert_eq!(s.grid, GridPos::new(0, 1));
    }
}

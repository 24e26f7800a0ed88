use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Active,
    Won(WinCondition),
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won(_) | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Active
    }
}

/// A single player move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Mark(Coord2),
    Reveal(Coord2),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// A flag was placed or removed.
    Marked,
    /// The target was already revealed, nothing changed.
    AlreadyExplored,
    Revealed,
    Won(WinCondition),
    Lost,
}

impl MoveOutcome {
    /// Whether the move was accepted and the turn is over.
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::AlreadyExplored)
    }
}

/// One board plus the Active/Won/Lost state around it.
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    board: Board,
    state: GameState,
    triggered_mine: Option<Coord2>,
}

impl Game {
    pub fn new(layout: &MineLayout) -> Self {
        Self {
            board: Board::new(layout),
            state: Default::default(),
            triggered_mine: None,
        }
    }

    pub fn from_config(config: GameConfig, generator: impl LayoutGenerator) -> Self {
        Self::new(&generator.generate(config))
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn view(&self, reveal_mines: bool) -> BoardView<'_> {
        BoardView::new(&self.board, reveal_mines)
    }

    pub fn play(&mut self, command: Command) -> Result<MoveOutcome> {
        self.check_active()?;

        let outcome = match command {
            Command::Mark(coords) => match self.board.mark(coords)? {
                MarkOutcome::Changed => MoveOutcome::Marked,
                MarkOutcome::NoChange => MoveOutcome::AlreadyExplored,
            },
            Command::Reveal(coords) => match self.board.reveal(coords)? {
                RevealOutcome::AlreadyRevealed => MoveOutcome::AlreadyExplored,
                RevealOutcome::HitMine => {
                    self.triggered_mine = Some(coords);
                    self.end_game(GameState::Lost);
                    return Ok(MoveOutcome::Lost);
                }
                RevealOutcome::Revealed => MoveOutcome::Revealed,
            },
        };

        if outcome.has_update()
            && let Some(condition) = win::evaluate(&self.board)
        {
            self.end_game(GameState::Won(condition));
            return Ok(MoveOutcome::Won(condition));
        }

        Ok(outcome)
    }

    fn end_game(&mut self, state: GameState) {
        if self.state.is_finished() {
            return;
        }
        log::info!("game over: {:?}", state);
        self.state = state;
    }

    fn check_active(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(size: Coord2, mines: &[Coord2]) -> Game {
        Game::new(&MineLayout::from_mine_coords(size, mines).unwrap())
    }

    #[test]
    fn reveal_hits_mine_and_sets_triggered_cell() {
        let mut game = game((2, 2), &[(0, 0)]);

        let outcome = game.play(Command::Reveal((0, 0))).unwrap();

        assert_eq!(outcome, MoveOutcome::Lost);
        assert_eq!(game.state(), GameState::Lost);
        assert_eq!(game.triggered_mine(), Some((0, 0)));
        assert_eq!(game.board().revealed_count(), 0);
    }

    #[test]
    fn revealing_every_safe_cell_wins() {
        let mut game = game((2, 2), &[(0, 0)]);

        assert_eq!(game.play(Command::Reveal((0, 1))).unwrap(), MoveOutcome::Revealed);
        assert_eq!(game.play(Command::Reveal((1, 0))).unwrap(), MoveOutcome::Revealed);
        assert_eq!(
            game.play(Command::Reveal((1, 1))).unwrap(),
            MoveOutcome::Won(WinCondition::AllSafeRevealed)
        );
        assert!(game.is_finished());
    }

    #[test]
    fn flagging_the_only_mine_wins() {
        let mut game = game((2, 2), &[(0, 0)]);

        assert_eq!(
            game.play(Command::Mark((0, 0))).unwrap(),
            MoveOutcome::Won(WinCondition::AllMinesFlagged)
        );
        assert_eq!(game.state(), GameState::Won(WinCondition::AllMinesFlagged));
    }

    #[test]
    fn explored_cells_do_not_end_the_turn() {
        let mut game = game((3, 3), &[(0, 0), (2, 2)]);

        assert_eq!(game.play(Command::Reveal((0, 1))).unwrap(), MoveOutcome::Revealed);
        let outcome = game.play(Command::Mark((0, 1))).unwrap();
        assert_eq!(outcome, MoveOutcome::AlreadyExplored);
        assert!(!outcome.has_update());
        assert_eq!(
            game.play(Command::Reveal((0, 1))).unwrap(),
            MoveOutcome::AlreadyExplored
        );
        assert_eq!(game.state(), GameState::Active);
    }

    #[test]
    fn moves_after_the_end_are_rejected() {
        let mut game = game((2, 2), &[(0, 0)]);

        game.play(Command::Reveal((0, 0))).unwrap();

        assert_eq!(
            game.play(Command::Mark((1, 1))),
            Err(GameError::AlreadyEnded)
        );
    }

    #[test]
    fn seeded_game_from_config() {
        let config = GameConfig::new((9, 9), 10).unwrap();

        let first = Game::from_config(config, RandomLayoutGenerator::new(99));
        let second = Game::from_config(config, RandomLayoutGenerator::new(99));

        assert_eq!(first, second);
        assert_eq!(first.size(), (9, 9));
        assert!(first.board().mine_count() <= 10);
    }
}

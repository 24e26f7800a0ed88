use super::*;

/// Purely random generation: every mine is an independent uniform draw, so
/// collisions leave fewer distinct mines than configured.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        use rand::prelude::*;

        log::debug!(
            "generating {} mines on {}x{} with seed {}",
            config.mines(),
            config.size().0,
            config.size().1,
            self.seed
        );
        let mut rng = SmallRng::seed_from_u64(self.seed);
        generate_mine_layout(config.size(), config.mines(), &mut rng)
    }
}

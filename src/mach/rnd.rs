use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// How `RND(x)` interprets its argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RndMode {
    /// A fraction in `[0, 1)`. The argument is truncated: `RND(0)`
    /// repeats the last value and `RND(-1)` reseeds first.
    ZeroToOne,
    /// A whole number from zero up to the rounded argument.
    ZeroToArg,
}

impl Default for RndMode {
    fn default() -> RndMode {
        RndMode::ZeroToOne
    }
}

#[derive(Debug)]
pub struct Rnd {
    mode: RndMode,
    rng: StdRng,
    last: Option<f64>,
}

impl Default for Rnd {
    fn default() -> Rnd {
        Rnd::new(RndMode::default())
    }
}

impl Rnd {
    pub fn new(mode: RndMode) -> Rnd {
        Rnd {
            mode,
            rng: StdRng::from_entropy(),
            last: None,
        }
    }

    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn randomize(&mut self) {
        self.rng = StdRng::from_entropy();
    }

    /// Forget the last value so `RND(0)` generates again.
    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn next(&mut self, arg: f64) -> f64 {
        match self.mode {
            RndMode::ZeroToOne => {
                let code = arg.trunc();
                if code == 0.0 {
                    if let Some(last) = self.last {
                        return last;
                    }
                } else if code == -1.0 {
                    self.randomize();
                }
                let value = self.rng.gen::<f64>();
                self.last = Some(value);
                value
            }
            RndMode::ZeroToArg => {
                let top = arg.round();
                let value = if top >= 1.0 && top <= i64::max_value() as f64 {
                    self.rng.gen_range(0..=top as i64) as f64
                } else {
                    0.0
                };
                self.last = Some(value);
                value
            }
        }
    }
}

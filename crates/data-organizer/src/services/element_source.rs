use crate::models::element::Element;

/// Producer of new elements for the organizer
pub trait ElementSource {
    /// Creates an element with a value in `1..=maximum_value`
    fn produce(&mut self, maximum_value: i64, color: (u8, u8, u8)) -> Element;
}

pub struct RandomElementSource {
    rng: fastrand::Rng,
}

impl RandomElementSource {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for RandomElementSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementSource for RandomElementSource {
    fn produce(&mut self, maximum_value: i64, color: (u8, u8, u8)) -> Element {
        let value = self.rng.i64(1..=maximum_value.max(1));
        Element::with_color(value, color)
    }
}

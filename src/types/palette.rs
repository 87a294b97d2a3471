//! Palette type: named colour collections and derivation algorithms.
//!
//! A palette is an ordered, non-empty list of colours. Ten predefined
//! palettes ship with the tool; further palettes can be derived from a base
//! colour (complementary, analogous) or sampled at random in HSV space.

use rand::Rng;

use super::Colour;

/// The predefined palette table: (name, five colours).
const PREDEFINED: &[(&str, [Colour; 5])] = &[
    (
        "warm",
        [
            Colour::rgb(255, 107, 107),
            Colour::rgb(255, 142, 83),
            Colour::rgb(255, 193, 7),
            Colour::rgb(220, 53, 69),
            Colour::rgb(255, 87, 51),
        ],
    ),
    (
        "cool",
        [
            Colour::rgb(0, 123, 255),
            Colour::rgb(23, 162, 184),
            Colour::rgb(40, 167, 69),
            Colour::rgb(111, 66, 193),
            Colour::rgb(108, 117, 125),
        ],
    ),
    (
        "pastel",
        [
            Colour::rgb(255, 179, 186),
            Colour::rgb(255, 223, 186),
            Colour::rgb(186, 255, 201),
            Colour::rgb(186, 225, 255),
            Colour::rgb(205, 180, 219),
        ],
    ),
    (
        "vibrant",
        [
            Colour::rgb(255, 0, 128),
            Colour::rgb(0, 255, 128),
            Colour::rgb(128, 0, 255),
            Colour::rgb(255, 128, 0),
            Colour::rgb(0, 128, 255),
        ],
    ),
    (
        "monochrome",
        [
            Colour::rgb(50, 50, 50),
            Colour::rgb(100, 100, 100),
            Colour::rgb(150, 150, 150),
            Colour::rgb(200, 200, 200),
            Colour::rgb(250, 250, 250),
        ],
    ),
    (
        "earth",
        [
            Colour::rgb(139, 69, 19),
            Colour::rgb(160, 82, 45),
            Colour::rgb(210, 180, 140),
            Colour::rgb(222, 184, 135),
            Colour::rgb(245, 245, 220),
        ],
    ),
    (
        "ocean",
        [
            Colour::rgb(0, 119, 190),
            Colour::rgb(0, 180, 216),
            Colour::rgb(144, 224, 239),
            Colour::rgb(173, 232, 244),
            Colour::rgb(202, 240, 248),
        ],
    ),
    (
        "sunset",
        [
            Colour::rgb(255, 94, 77),
            Colour::rgb(255, 154, 0),
            Colour::rgb(255, 206, 84),
            Colour::rgb(255, 238, 173),
            Colour::rgb(161, 136, 127),
        ],
    ),
    (
        "forest",
        [
            Colour::rgb(34, 139, 34),
            Colour::rgb(107, 142, 35),
            Colour::rgb(154, 205, 50),
            Colour::rgb(124, 252, 0),
            Colour::rgb(50, 205, 50),
        ],
    ),
    (
        "neon",
        [
            Colour::rgb(255, 20, 147),
            Colour::rgb(0, 255, 255),
            Colour::rgb(255, 255, 0),
            Colour::rgb(255, 105, 180),
            Colour::rgb(0, 255, 0),
        ],
    ),
];

/// An ordered, non-empty collection of colours.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colours: Vec<Colour>,
}

impl Palette {
    /// Create a palette from an explicit colour list.
    ///
    /// An empty list falls back to the `vibrant` palette so that the
    /// non-empty invariant always holds.
    pub fn new(colours: Vec<Colour>) -> Self {
        if colours.is_empty() {
            return Self::from_name("vibrant");
        }
        Self { colours }
    }

    /// Look up a predefined palette by name.
    ///
    /// Unknown names fall back to `vibrant`; this never errors.
    pub fn from_name(name: &str) -> Self {
        let colours = PREDEFINED
            .iter()
            .find(|(n, _)| *n == name)
            .or_else(|| PREDEFINED.iter().find(|(n, _)| *n == "vibrant"))
            .map(|(_, c)| c.to_vec())
            .unwrap_or_default();
        Self { colours }
    }

    /// All predefined palette names, in declaration order.
    pub fn names() -> Vec<&'static str> {
        PREDEFINED.iter().map(|(n, _)| *n).collect()
    }

    /// Generate `count` colours sampled uniformly in HSV space
    /// (hue in [0,1), saturation and value in [0.5,1]).
    pub fn random(count: usize, rng: &mut impl Rng) -> Self {
        let colours = (0..count)
            .map(|_| {
                let hue: f32 = rng.gen();
                let saturation = rng.gen_range(0.5..=1.0);
                let value = rng.gen_range(0.5..=1.0);
                Colour::from_hsv(hue, saturation, value)
            })
            .collect();
        Self::new(colours)
    }

    /// Derive a five-colour complementary palette from a base colour:
    /// the base, its hue-rotated complement, and three value/saturation
    /// variations at the base hue.
    pub fn complementary(base: Colour) -> Self {
        let (h, s, v) = base.to_hsv();

        let mut colours = vec![base];
        colours.push(Colour::from_hsv((h + 0.5).rem_euclid(1.0), s, v));

        for factor in [0.2, 0.8, 0.6] {
            let new_v = (v * factor + 0.3).min(1.0);
            let new_s = (s * (1.5 - factor)).min(1.0);
            colours.push(Colour::from_hsv(h, new_s, new_v));
        }

        Self::new(colours)
    }

    /// Derive `count` colours at hues spaced by 60°/count around the base
    /// hue, with saturation and value jittered by up to ±0.2.
    pub fn analogous(base: Colour, count: usize, rng: &mut impl Rng) -> Self {
        let (h, s, v) = base.to_hsv();
        let angle_step = 60.0 / count as f32;

        let colours = (0..count)
            .map(|i| {
                let offset = (i as isize - (count / 2) as isize) as f32;
                let new_h = (h + offset * angle_step / 360.0).rem_euclid(1.0);
                let new_s = (s + rng.gen_range(-0.2..=0.2)).clamp(0.0, 1.0);
                let new_v = (v + rng.gen_range(-0.2..=0.2)).clamp(0.0, 1.0);
                Colour::from_hsv(new_h, new_s, new_v)
            })
            .collect();
        Self::new(colours)
    }

    /// Uniform pick from the colour list.
    pub fn random_colour(&self, rng: &mut impl Rng) -> Colour {
        self.colours[rng.gen_range(0..self.colours.len())]
    }

    /// Index access, wrapping modulo length. Never out of range, including
    /// for negative indices.
    pub fn get(&self, index: isize) -> Colour {
        let len = self.colours.len() as isize;
        self.colours[index.rem_euclid(len) as usize]
    }

    /// Append a colour.
    pub fn add_colour(&mut self, colour: Colour) {
        self.colours.push(colour);
    }

    /// `steps` colours interpolated from `start` to `end`.
    ///
    /// With a single step the start colour is returned.
    pub fn gradient(start: Colour, end: Colour, steps: usize) -> Vec<Colour> {
        (0..steps)
            .map(|i| {
                let ratio = if steps > 1 {
                    i as f32 / (steps - 1) as f32
                } else {
                    0.0
                };
                start.blend(end, ratio)
            })
            .collect()
    }

    /// Number of colours in the palette.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Iterate over the colours in order.
    pub fn iter(&self) -> impl Iterator<Item = &Colour> {
        self.colours.iter()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_name("vibrant")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_from_name_known() {
        let p = Palette::from_name("warm");
        assert_eq!(p.len(), 5);
        assert_eq!(p.get(0), Colour::rgb(255, 107, 107));
    }

    #[test]
    fn test_from_name_unknown_falls_back_to_vibrant() {
        let p = Palette::from_name("does-not-exist");
        assert_eq!(p, Palette::from_name("vibrant"));
    }

    #[test]
    fn test_names_count() {
        assert_eq!(Palette::names().len(), 10);
        assert!(Palette::names().contains(&"vibrant"));
    }

    #[test]
    fn test_get_wraps_modulo_length() {
        let p = Palette::from_name("cool");
        assert_eq!(p.get(0), p.get(5));
        assert_eq!(p.get(2), p.get(7));
        assert_eq!(p.get(-1), p.get(4));
        assert_eq!(p.get(-6), p.get(4));
    }

    #[test]
    fn test_get_always_member() {
        let p = Palette::from_name("neon");
        for i in -20..20 {
            let c = p.get(i);
            assert!(p.iter().any(|&m| m == c));
        }
    }

    #[test]
    fn test_empty_list_falls_back() {
        let p = Palette::new(vec![]);
        assert!(!p.is_empty());
    }

    #[test]
    fn test_random_palette_in_hsv_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let p = Palette::random(8, &mut rng);
        assert_eq!(p.len(), 8);
        for c in p.iter() {
            let (_, s, v) = c.to_hsv();
            // Saturation/value sampled in [0.5, 1.0]; conversion truncation
            // can shave a little off
            assert!(s >= 0.45, "saturation {} too low", s);
            assert!(v >= 0.45, "value {} too low", v);
        }
    }

    #[test]
    fn test_complementary_has_five_colours() {
        let p = Palette::complementary(Colour::rgb(200, 40, 40));
        assert_eq!(p.len(), 5);
        assert_eq!(p.get(0), Colour::rgb(200, 40, 40));

        // The complement sits roughly half a hue-turn away
        let (h0, ..) = p.get(0).to_hsv();
        let (h1, ..) = p.get(1).to_hsv();
        let dist = (h1 - h0).rem_euclid(1.0);
        assert!((dist - 0.5).abs() < 0.02, "hue distance {}", dist);
    }

    #[test]
    fn test_analogous_count_and_hue_spread() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let p = Palette::analogous(Colour::rgb(30, 90, 200), 5, &mut rng);
        assert_eq!(p.len(), 5);
    }

    #[test]
    fn test_analogous_deterministic_for_seed() {
        let base = Colour::rgb(30, 90, 200);
        let a = Palette::analogous(base, 5, &mut ChaCha8Rng::seed_from_u64(9));
        let b = Palette::analogous(base, 5, &mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_gradient_endpoints() {
        let g = Palette::gradient(Colour::BLACK, Colour::WHITE, 5);
        assert_eq!(g.len(), 5);
        assert_eq!(g[0], Colour::BLACK);
        assert_eq!(g[4], Colour::WHITE);
    }

    #[test]
    fn test_gradient_single_step() {
        let g = Palette::gradient(Colour::BLACK, Colour::WHITE, 1);
        assert_eq!(g, vec![Colour::BLACK]);
    }

    #[test]
    fn test_random_colour_is_member() {
        let p = Palette::from_name("earth");
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..32 {
            let c = p.random_colour(&mut rng);
            assert!(p.iter().any(|&m| m == c));
        }
    }

    #[test]
    fn test_add_colour() {
        let mut p = Palette::from_name("warm");
        p.add_colour(Colour::BLACK);
        assert_eq!(p.len(), 6);
        assert_eq!(p.get(5), Colour::BLACK);
    }
}

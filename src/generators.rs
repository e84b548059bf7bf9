use rand::Rng;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+[]';/.,{}|:?> <`~";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    /// Pool order. Classes are always appended in this sequence.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Numbers => NUMBERS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.chars().contains(c)
    }
}

/// Concatenates the alphabets of `classes` in `CharacterClass::ALL` order,
/// regardless of the order they are passed in.
pub fn build_pool(classes: &[CharacterClass]) -> Vec<char> {
    CharacterClass::ALL
        .iter()
        .filter(|class| classes.contains(class))
        .flat_map(|class| class.chars().chars())
        .collect()
}

/// Picks one character at a uniform index in `0..pool.len()`.
///
/// Returns `None` for an empty pool.
pub fn generate_char<R: Rng + ?Sized>(rng: &mut R, pool: &[char]) -> Option<char> {
    if pool.is_empty() {
        return None;
    }

    let chosen_index = rng.random_range(0..pool.len());

    Some(pool[chosen_index])
}

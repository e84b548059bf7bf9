use crate::errors::{ GenerationError, Violation };
use crate::generators::{ build_pool, generate_char, CharacterClass };

use log::debug;
use rand::Rng;
use serde::{ Deserialize, Serialize };

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 8,
            include_lowercase: true,
            include_uppercase: false,
            include_numbers: false,
            include_symbols: false,
        }
    }
}

impl GenerationConfig {
    pub fn new(
        length: usize,
        include_lowercase: bool,
        include_uppercase: bool,
        include_numbers: bool,
        include_symbols: bool,
    ) -> Self {
        Self {
            length,
            include_lowercase,
            include_uppercase,
            include_numbers,
            include_symbols,
        }
    }

    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Numbers => self.include_numbers,
            CharacterClass::Symbols => self.include_symbols,
        }
    }

    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.includes(*class))
            .collect()
    }

    /// Checks length bounds first, then that some class is enabled.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.length < MIN_LENGTH {
            return Err(Violation::TooShort(self.length).into());
        }

        if self.length > MAX_LENGTH {
            return Err(Violation::TooLong(self.length).into());
        }

        if self.enabled_classes().is_empty() {
            return Err(Violation::NoCharacterClass.into());
        }

        Ok(())
    }
}

/// Stateless password generator.
///
/// Configurations are re-validated on every call, so an unchecked
/// `GenerationConfig` is rejected with `InvalidConfiguration` rather than
/// producing a short or empty password.
pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn generate(config: &GenerationConfig) -> Result<String, GenerationError> {
        let mut rng = rand::rng();

        Self::generate_with_rng(config, &mut rng)
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(
        config: &GenerationConfig,
        rng: &mut R,
    ) -> Result<String, GenerationError> {
        config.validate()?;

        let classes = config.enabled_classes();
        let pool = build_pool(&classes);
        debug!("Generating {} characters from a pool of {} ({:?})", config.length, pool.len(), classes);

        let mut password = String::with_capacity(config.length);
        for _ in 0..config.length {
            match generate_char(rng, &pool) {
                Some(c) => password.push(c),
                None => return Err(Violation::NoCharacterClass.into()),
            }
        }

        Ok(password)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::generators::{ LOWERCASE, NUMBERS, SYMBOLS, UPPERCASE };

    use super::*;

    fn all_configs() -> Vec<GenerationConfig> {
        let mut configs = Vec::new();
        for length in MIN_LENGTH..=MAX_LENGTH {
            for mask in 1u8..16 {
                configs.push(GenerationConfig::new(
                    length,
                    mask & 1 != 0,
                    mask & 2 != 0,
                    mask & 4 != 0,
                    mask & 8 != 0,
                ));
            }
        }
        configs
    }

    fn invalid(violation: Violation) -> Result<String, GenerationError> {
        Err(GenerationError::InvalidConfiguration(violation))
    }

    #[test]
    fn default_config_test() {
        let config = GenerationConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.enabled_classes(), vec![CharacterClass::Lowercase]);
    }

    #[test]
    fn length_and_charset_hold_for_every_config_test() {
        let mut rng = StdRng::seed_from_u64(1);

        for config in all_configs() {
            for _ in 0..5 {
                let password = PasswordGenerator::generate_with_rng(&config, &mut rng).unwrap();

                assert_eq!(password.chars().count(), config.length, "{:?}", config);
                assert!(
                    password.chars().all(|c| config.enabled_classes().iter().any(|class| class.contains(c))),
                    "{:?} produced {:?}",
                    config,
                    password
                );
            }
        }
    }

    #[test]
    fn lowercase_only_test() {
        let config = GenerationConfig::new(8, true, false, false, false);
        let password = PasswordGenerator::generate(&config).unwrap();

        assert_eq!(password.len(), 8);
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn symbols_only_test() {
        let config = GenerationConfig::new(12, false, false, false, true);

        for _ in 0..50 {
            let password = PasswordGenerator::generate(&config).unwrap();
            assert_eq!(password.chars().count(), 12);
            assert!(password.chars().all(|c| SYMBOLS.contains(c)));
        }
    }

    #[test]
    fn all_classes_max_length_test() {
        let config = GenerationConfig::new(16, true, true, true, true);
        let combined = format!("{}{}{}{}", LOWERCASE, UPPERCASE, NUMBERS, SYMBOLS);
        let password = PasswordGenerator::generate(&config).unwrap();

        assert_eq!(password.chars().count(), 16);
        assert!(password.chars().all(|c| combined.contains(c)));
    }

    #[test]
    fn rejects_out_of_range_length_test() {
        for length in [0, 3] {
            let config = GenerationConfig::new(length, true, true, true, true);
            assert_eq!(PasswordGenerator::generate(&config), invalid(Violation::TooShort(length)));
        }

        let config = GenerationConfig::new(17, true, false, false, false);
        assert_eq!(PasswordGenerator::generate(&config), invalid(Violation::TooLong(17)));
    }

    #[test]
    fn rejects_no_character_class_test() {
        let config = GenerationConfig::new(8, false, false, false, false);

        assert_eq!(PasswordGenerator::generate(&config), invalid(Violation::NoCharacterClass));
    }

    #[test]
    fn length_checked_before_classes_test() {
        let config = GenerationConfig::new(2, false, false, false, false);

        assert_eq!(config.validate(), Err(Violation::TooShort(2).into()));
    }

    #[test]
    fn seeded_generation_is_reproducible_test() {
        let config = GenerationConfig::new(16, true, true, true, true);

        let first = PasswordGenerator::generate_with_rng(&config, &mut StdRng::seed_from_u64(99)).unwrap();
        let second = PasswordGenerator::generate_with_rng(&config, &mut StdRng::seed_from_u64(99)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn last_pool_character_is_reachable_test() {
        let config = GenerationConfig::new(16, false, false, false, true);
        let mut rng = StdRng::seed_from_u64(3);
        let mut found = false;

        for _ in 0..500 {
            let password = PasswordGenerator::generate_with_rng(&config, &mut rng).unwrap();
            assert_eq!(password.chars().count(), 16);
            found |= password.contains('~');
        }

        assert!(found);
    }

    #[test]
    fn config_is_not_mutated_test() {
        let config = GenerationConfig::new(10, true, true, false, false);
        let before = config;

        PasswordGenerator::generate(&config).unwrap();

        assert_eq!(config, before);
    }

    #[test]
    fn config_json_test() {
        let json = r#"{"length":12,"include_lowercase":false,"include_uppercase":true,"include_numbers":true,"include_symbols":false}"#;
        let config: GenerationConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config, GenerationConfig::new(12, false, true, true, false));
    }

    #[test]
    fn partial_config_json_test() {
        let config: GenerationConfig = serde_json::from_str(r#"{"length":10,"include_symbols":true}"#).unwrap();

        assert_eq!(config, GenerationConfig::new(10, true, false, false, true));
    }
}

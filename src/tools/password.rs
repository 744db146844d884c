use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

// Characters that read alike in most fonts.
const SIMILAR: &str = "il1Lo0O";

#[derive(Clone, Copy, Debug)]
pub struct PasswordOptions {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub exclude_similar: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: false,
            exclude_similar: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Weak => "weak",
            Strength::Medium => "medium",
            Strength::Strong => "strong",
        }
    }
}

pub fn generate(options: &PasswordOptions) -> Result<(String, Strength)> {
    let charset = build_charset(options);
    if charset.is_empty() {
        bail!("select at least one character type");
    }

    let mut bytes = vec![0u8; options.length * 4];
    getrandom::getrandom(&mut bytes).map_err(|e| anyhow::anyhow!("getrandom: {:?}", e))?;

    let password: String = bytes
        .chunks_exact(4)
        .map(|chunk| {
            let n = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            charset[n as usize % charset.len()]
        })
        .collect();

    let strength = estimate_strength(&password);
    Ok((password, strength))
}

fn build_charset(options: &PasswordOptions) -> Vec<char> {
    let mut charset = String::new();
    if options.uppercase {
        charset.push_str("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }
    if options.lowercase {
        charset.push_str("abcdefghijklmnopqrstuvwxyz");
    }
    if options.numbers {
        charset.push_str("0123456789");
    }
    if options.symbols {
        charset.push_str(SYMBOLS);
    }

    charset
        .chars()
        .filter(|ch| !options.exclude_similar || !SIMILAR.contains(*ch))
        .collect()
}

/// Scores length thresholds (8, 12) and character class variety; under 3
/// points is weak, under 5 medium, otherwise strong.
pub fn estimate_strength(password: &str) -> Strength {
    let mut score = 0;
    if password.len() >= 8 {
        score += 1;
    }
    if password.len() >= 12 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    if score < 3 {
        Strength::Weak
    } else if score < 5 {
        Strength::Medium
    } else {
        Strength::Strong
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respects_length_and_charset() {
        let options = PasswordOptions {
            length: 24,
            uppercase: false,
            symbols: false,
            ..Default::default()
        };
        let (password, _) = generate(&options).unwrap();
        assert_eq!(password.chars().count(), 24);
        assert!(
            password
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn exclude_similar_drops_lookalikes() {
        let options = PasswordOptions {
            length: 64,
            exclude_similar: true,
            ..Default::default()
        };
        let (password, _) = generate(&options).unwrap();
        assert!(password.chars().all(|c| !"il1Lo0O".contains(c)));
    }

    #[test]
    fn empty_charset_is_an_error() {
        let options = PasswordOptions {
            uppercase: false,
            lowercase: false,
            numbers: false,
            symbols: false,
            ..Default::default()
        };
        let err = generate(&options).unwrap_err();
        assert!(err.to_string().contains("character type"));
    }

    #[test]
    fn strength_scoring() {
        assert_eq!(estimate_strength("abc"), Strength::Weak);
        assert_eq!(estimate_strength("abcdefgh"), Strength::Weak);
        assert_eq!(estimate_strength("abcdefgH1"), Strength::Medium);
        assert_eq!(estimate_strength("abcdefgH1!krw47q"), Strength::Strong);
    }
}

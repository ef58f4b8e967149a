use std::fmt;

/// A single round: one letter and the prompts players must answer with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// 1-based count of rounds played this session.
    pub number: usize,
    /// Every answer must start with this letter.
    pub letter: char,
    pub prompts: Vec<String>,
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Letter: {}", self.letter)?;
        writeln!(f, "Prompts:")?;
        for (i, prompt) in self.prompts.iter().enumerate() {
            writeln!(f, "  {}.\t{}", i + 1, prompt)?;
        }
        Ok(())
    }
}

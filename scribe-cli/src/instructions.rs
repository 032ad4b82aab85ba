//! Instruction presets for new assistants
//!
//! Named system instructions so an assistant can be created from the
//! command line without writing a prompt file first.

use clap::ValueEnum;

/// Built-in instruction sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InstructionPreset {
    /// Plain helpful assistant
    Default,
    /// Thorough document summarizer
    Summary,
}

impl InstructionPreset {
    /// The system instructions for this preset
    pub fn text(self) -> &'static str {
        match self {
            Self::Default => "You are a helpful assistant.",
            Self::Summary => {
                "You are a document assistant that summarizes uploaded documents.\n\
                 Give thorough answers with explanations.\n\
                 Do not repeat the question in the answer.\n\
                 Do not use unnecessarily fancy words.\n\
                 Cover the goals of the document, the requirements it states, \
                 any deadlines and budgets, and anything else relevant to the reader."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_have_distinct_instructions() {
        assert_ne!(
            InstructionPreset::Default.text(),
            InstructionPreset::Summary.text()
        );
        assert!(!InstructionPreset::Summary.text().is_empty());
    }
}

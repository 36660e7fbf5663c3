//! Session text and behavior settings.

use serde::{Deserialize, Serialize};

/// Game session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Banner printed before the cards are listed.
    pub title: String,

    /// Prompt for the first attribute.
    pub first_prompt: String,

    /// Prompt for the second attribute.
    pub second_prompt: String,

    /// Wait for Enter before returning.
    pub pause_on_exit: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "===== SUPER TRUNFO - DESAFIO AVANCADO =====".to_string(),
            first_prompt: "Jogador, escolha o PRIMEIRO atributo para comparar:".to_string(),
            second_prompt: "Agora, escolha o SEGUNDO atributo (diferente do primeiro):"
                .to_string(),
            pause_on_exit: true,
        }
    }
}

impl GameConfig {
    /// Create a config with custom banner.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Create a config with custom selection prompts.
    #[must_use]
    pub fn with_prompts(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.first_prompt = first.into();
        self.second_prompt = second.into();
        self
    }

    /// Create a config with the exit pause on or off.
    #[must_use]
    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause_on_exit = pause;
        self
    }
}

/// Carousel actions bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Next,
    Prev,
    TogglePlayback,
}

impl KeyCommand {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(KeyCommand::Next),
            "ArrowLeft" => Some(KeyCommand::Prev),
            " " | "Spacebar" => Some(KeyCommand::TogglePlayback),
            _ => None,
        }
    }

    /// Space would otherwise scroll the page
    pub fn suppresses_default(self) -> bool {
        matches!(self, KeyCommand::TogglePlayback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bindings() {
        assert_eq!(KeyCommand::from_key("ArrowRight"), Some(KeyCommand::Next));
        assert_eq!(KeyCommand::from_key("ArrowLeft"), Some(KeyCommand::Prev));
        assert_eq!(KeyCommand::from_key(" "), Some(KeyCommand::TogglePlayback));
        assert_eq!(KeyCommand::from_key("Enter"), None);
    }

    #[test]
    fn test_only_space_suppresses_default() {
        assert!(KeyCommand::TogglePlayback.suppresses_default());
        assert!(!KeyCommand::Next.suppresses_default());
        assert!(!KeyCommand::Prev.suppresses_default());
    }
}

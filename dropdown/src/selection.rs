/// The committed value of a dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Selected(String),
}

impl Selection {
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Selected(label) => Some(label),
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Selected(_))
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Selected(label) => write!(f, "{label}"),
        }
    }
}

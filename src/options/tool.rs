#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolKind {
    #[default]
    Pencil,
    FloodFill,
    Line,
    Rectangle,
    Ellipse,
    Selection,
    Zoom,
}

impl ToolKind {
    pub const ALL: [ToolKind; 7] = [
        Self::Pencil,
        Self::FloodFill,
        Self::Line,
        Self::Rectangle,
        Self::Ellipse,
        Self::Selection,
        Self::Zoom,
    ];

    /// Stable id written to the settings store.
    pub const fn id(self) -> i64 {
        match self {
            Self::Pencil => 1,
            Self::FloodFill => 2,
            Self::Line => 3,
            Self::Rectangle => 4,
            Self::Ellipse => 5,
            Self::Selection => 6,
            Self::Zoom => 7,
        }
    }

    pub const fn from_id(id: i64) -> Option<Self> {
        match id {
            1 => Some(Self::Pencil),
            2 => Some(Self::FloodFill),
            3 => Some(Self::Line),
            4 => Some(Self::Rectangle),
            5 => Some(Self::Ellipse),
            6 => Some(Self::Selection),
            7 => Some(Self::Zoom),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_stable_and_reversible() {
        for (index, tool) in ToolKind::ALL.into_iter().enumerate() {
            assert_eq!(tool.id(), index as i64 + 1);
            assert_eq!(ToolKind::from_id(tool.id()), Some(tool));
        }
        assert_eq!(ToolKind::from_id(0), None);
        assert_eq!(ToolKind::from_id(8), None);
    }
}

use crate::parsing::inline::types::TextKind;

/// A symmetric inline delimiter and the kind of span it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter {
    pub marker: &'static str,
    pub kind: TextKind,
}

impl Delimiter {
    pub const BOLD: Delimiter = Delimiter {
        marker: "**",
        kind: TextKind::Bold,
    };
    pub const ITALIC: Delimiter = Delimiter {
        marker: "*",
        kind: TextKind::Italic,
    };
    pub const CODE: Delimiter = Delimiter {
        marker: "`",
        kind: TextKind::Code,
    };
}

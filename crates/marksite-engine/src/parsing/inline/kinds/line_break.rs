/// A hard line break inside a block.
pub struct LineBreak;

impl LineBreak {
    pub const NEWLINE: char = '\n';
}

use super::target_file_name;

/// A file name from which an identifier was extracted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFileName {
    pub identifier: String,
    pub original_name: String,
}

impl ParsedFileName {
    /// The compact `[ID].json` name this file should carry
    pub fn target_name(&self) -> String {
        target_file_name(&self.identifier)
    }

    pub fn is_target_format(&self) -> bool {
        self.original_name == self.target_name()
    }
}

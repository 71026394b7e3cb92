use serde::Serialize;

use super::Book;

/// A row as the table draws it: working-set values with any staged edit
/// applied, plus the derived editing flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRow {
    /// Index into the displayed set.
    pub position: usize,
    pub book: Book,
    pub editing: bool,
}

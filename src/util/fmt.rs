use std::fmt::{self, Debug, Formatter};

/// Writes an already rendered string as-is, so it can be passed to a debug builder as a field
/// without being quoted and escaped.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

///
/// Debug identity of a component, used as the prefix of log lines and error messages.
///
/// The identity of a nested component is built from its parent one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DbgId(pub String);
//
//
impl DbgId {
    ///
    /// Returns identity of `me` nested into `parent`.
    pub fn with_parent(parent: &DbgId, me: &str) -> Self {
        Self(format!("{}/{}", parent.0, me))
    }
}
//
//
impl std::fmt::Display for DbgId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
//
//
impl From<&str> for DbgId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// One parsed journey document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    pub slug: String,
    pub name: String,
}

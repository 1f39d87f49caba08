/// Joined book + edition metadata row used by shelf and `book --list`
/// lookups. The page count lives on the edition, not the book, because
/// different printings paginate differently.
#[derive(Debug, Clone)]
pub struct EditionMeta {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub page_count: i64,
}

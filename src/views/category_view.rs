use crate::model::dataset::Dataset;
use crate::model::movie::ExpandedGenreRow;
use crate::model::selection::Category;

/// The "general relation" query mode: the full genre-expanded table, to be
/// grouped and colored by the selected category downstream. No filtering
/// happens here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryView<'a> {
    pub category: Category,
    pub rows: &'a [ExpandedGenreRow],
}

pub fn category_view(dataset: &Dataset, category: Category) -> CategoryView<'_> {
    CategoryView {
        category,
        rows: &dataset.expanded,
    }
}

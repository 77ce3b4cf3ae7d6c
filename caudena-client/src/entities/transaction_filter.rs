use serde::Serialize;
use strum::{Display, EnumString};

/// Filter of the transactions listing of an address.
///
/// Serializes to the JSON body expected by the listing route of the Prism API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionListFilter {
    /// Page to retrieve, starting at 1
    pub page: u64,

    /// Field the transactions are sorted by
    pub sort_by: TransactionSortField,

    /// Sort order of the transactions
    pub sort_order: SortOrder,
}

impl TransactionListFilter {
    /// Filter retrieving the given page with the default sorting (most recent first).
    pub fn for_page(page: u64) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }
}

impl Default for TransactionListFilter {
    fn default() -> Self {
        Self {
            page: 1,
            sort_by: TransactionSortField::default(),
            sort_order: SortOrder::default(),
        }
    }
}

/// Field the transactions of an address can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TransactionSortField {
    /// Transaction timestamp
    #[default]
    Time,
}

/// Sort order of a list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    /// Ascending, oldest first
    Asc,

    /// Descending, most recent first
    #[default]
    Desc,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_serializes_to_the_expected_body() {
        let body = serde_json::to_string(&TransactionListFilter::default()).unwrap();

        assert_eq!(r#"{"page":1,"sort_by":"time","sort_order":"desc"}"#, body);
    }

    #[test]
    fn filter_for_page_keeps_default_sorting() {
        let filter = TransactionListFilter::for_page(3);

        assert_eq!(
            TransactionListFilter {
                page: 3,
                sort_by: TransactionSortField::Time,
                sort_order: SortOrder::Desc,
            },
            filter
        );
    }

    #[test]
    fn ascending_order_serializes_to_asc() {
        let body = serde_json::to_string(&TransactionListFilter {
            page: 1,
            sort_by: TransactionSortField::Time,
            sort_order: SortOrder::Asc,
        })
        .unwrap();

        assert_eq!(r#"{"page":1,"sort_by":"time","sort_order":"asc"}"#, body);
    }
}

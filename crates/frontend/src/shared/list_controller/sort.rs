//! Column sort cycling for list tables.
//!
//! Each sortable column cycles `none -> descending -> ascending -> none`.
//! The whole page holds at most one active descriptor, so picking a new
//! column implicitly drops the previous one.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Descending,
    Ascending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Descending => "desc",
            SortDirection::Ascending => "asc",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "desc" => Some(SortDirection::Descending),
            "asc" => Some(SortDirection::Ascending),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortDescriptor {
    pub field: String,
    pub direction: SortDirection,
}

impl SortDescriptor {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

/// Advance the page's sort state after a click on `field`'s header.
pub fn toggle_sort(current: Option<&SortDescriptor>, field: &str) -> Option<SortDescriptor> {
    match current {
        Some(d) if d.field == field => match d.direction {
            SortDirection::Descending => {
                Some(SortDescriptor::new(field, SortDirection::Ascending))
            }
            SortDirection::Ascending => None,
        },
        // Different column (or no sort at all): start that column's cycle.
        _ => Some(SortDescriptor::new(field, SortDirection::Descending)),
    }
}

/// Header glyph for the given column.
pub fn sort_indicator(current: Option<&SortDescriptor>, field: &str) -> &'static str {
    match current {
        Some(d) if d.field == field => match d.direction {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        },
        _ => " ⇅",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_column_cycles_desc_asc_none() {
        let first = toggle_sort(None, "amount");
        assert_eq!(
            first,
            Some(SortDescriptor::new("amount", SortDirection::Descending))
        );

        let second = toggle_sort(first.as_ref(), "amount");
        assert_eq!(
            second,
            Some(SortDescriptor::new("amount", SortDirection::Ascending))
        );

        let third = toggle_sort(second.as_ref(), "amount");
        assert_eq!(third, None);
    }

    #[test]
    fn switching_columns_drops_the_previous_one() {
        let on_a = toggle_sort(None, "name");
        let on_b = toggle_sort(on_a.as_ref(), "amount");
        // Column B starts its own cycle; column A is gone entirely.
        assert_eq!(
            on_b,
            Some(SortDescriptor::new("amount", SortDirection::Descending))
        );
    }

    #[test]
    fn indicator_reflects_state() {
        let sort = Some(SortDescriptor::new("name", SortDirection::Ascending));
        assert_eq!(sort_indicator(sort.as_ref(), "name"), " ▲");
        assert_eq!(sort_indicator(sort.as_ref(), "amount"), " ⇅");
        assert_eq!(sort_indicator(None, "name"), " ⇅");
    }
}

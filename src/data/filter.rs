use log::debug;

use super::model::{Dataset, IndicatorRow};
use crate::error::{DashboardError, Result};

// ---------------------------------------------------------------------------
// Row predicate: which indicator label a chart is looking for
// ---------------------------------------------------------------------------

/// Matching rule applied to an indicator row's label.
///
/// Rows without a label never match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowPredicate {
    /// Label equals the literal.
    Exact(String),
    /// Label contains every `required` substring and none of `excluded`.
    ContainsAll {
        required: Vec<String>,
        excluded: Vec<String>,
    },
    /// Any of the inner predicates matches.
    AnyOf(Vec<RowPredicate>),
    /// `inner` matches and the label contains none of `excluded`.
    Excluding {
        inner: Box<RowPredicate>,
        excluded: Vec<String>,
    },
}

impl RowPredicate {
    pub fn exact(label: impl Into<String>) -> Self {
        RowPredicate::Exact(label.into())
    }

    /// Single required substring, no exclusions.
    pub fn contains(needle: impl Into<String>) -> Self {
        RowPredicate::ContainsAll {
            required: vec![needle.into()],
            excluded: Vec::new(),
        }
    }

    /// Several required substrings, no exclusions.
    pub fn contains_all<I, S>(needles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RowPredicate::ContainsAll {
            required: needles.into_iter().map(Into::into).collect(),
            excluded: Vec::new(),
        }
    }

    /// Adds excluded substrings. `ContainsAll` and `Excluding` take them in
    /// place; any other rule is wrapped in `Excluding`.
    pub fn excluding<I, S>(self, needles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match self {
            RowPredicate::ContainsAll {
                required,
                mut excluded,
            } => {
                excluded.extend(needles.into_iter().map(Into::into));
                RowPredicate::ContainsAll { required, excluded }
            }
            RowPredicate::Excluding {
                inner,
                mut excluded,
            } => {
                excluded.extend(needles.into_iter().map(Into::into));
                RowPredicate::Excluding { inner, excluded }
            }
            other => RowPredicate::Excluding {
                inner: Box::new(other),
                excluded: needles.into_iter().map(Into::into).collect(),
            },
        }
    }

    pub fn any_of(predicates: Vec<RowPredicate>) -> Self {
        RowPredicate::AnyOf(predicates)
    }

    /// Test a label against this rule.
    pub fn matches_label(&self, label: &str) -> bool {
        match self {
            RowPredicate::Exact(expected) => label == expected,
            RowPredicate::ContainsAll { required, excluded } => {
                required.iter().all(|needle| label.contains(needle.as_str()))
                    && !excluded.iter().any(|needle| label.contains(needle.as_str()))
            }
            RowPredicate::AnyOf(inner) => inner.iter().any(|p| p.matches_label(label)),
            RowPredicate::Excluding { inner, excluded } => {
                inner.matches_label(label)
                    && !excluded.iter().any(|needle| label.contains(needle.as_str()))
            }
        }
    }

    pub fn matches(&self, row: &IndicatorRow) -> bool {
        row.label().is_some_and(|label| self.matches_label(label))
    }
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// Rows of a category, in source order.
///
/// A missing category is a hard failure for whichever chart asked for it.
pub fn get_rows<'a>(dataset: &'a Dataset, category: &str) -> Result<&'a [IndicatorRow]> {
    dataset
        .category(category)
        .map(|c| c.data.as_slice())
        .ok_or_else(|| DashboardError::CategoryNotFound(category.to_string()))
}

/// First row satisfying `predicate`, or `None` (soft miss).
pub fn match_row<'a>(rows: &'a [IndicatorRow], predicate: &RowPredicate) -> Option<&'a IndicatorRow> {
    let found = rows.iter().find(|row| predicate.matches(row));
    if found.is_none() {
        debug!("indicator not found for {predicate:?}");
    }
    found
}

/// Positional row access; out of range is a soft miss.
pub fn row_at(rows: &[IndicatorRow], index: usize) -> Option<&IndicatorRow> {
    let found = rows.get(index);
    if found.is_none() {
        debug!("no row at position {index} (category has {} rows)", rows.len());
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engel_rows() -> Vec<IndicatorRow> {
        vec![
            IndicatorRow::new("城镇居民恩格尔系数(%)").with_cell("2024年", 28.8),
            IndicatorRow::new("农村居民恩格尔系数(%)").with_cell("2024年", 32.3),
            IndicatorRow::new("居民恩格尔系数(%)").with_cell("2024年", 29.8),
        ]
    }

    #[test]
    fn exact_requires_full_label() {
        let rows = engel_rows();
        let hit = match_row(&rows, &RowPredicate::exact("居民恩格尔系数(%)"));
        assert_eq!(hit.and_then(|r| r.value("2024年")), Some(29.8));
        assert!(match_row(&rows, &RowPredicate::exact("居民恩格尔系数")).is_none());
    }

    #[test]
    fn exclusion_disambiguates_national_row() {
        let rows = engel_rows();
        let national = RowPredicate::contains("居民恩格尔系数(%)").excluding(["城镇", "农村"]);
        let hit = match_row(&rows, &national).expect("national row");
        assert_eq!(hit.label(), Some("居民恩格尔系数(%)"));

        // Without the exclusion the urban row comes first.
        let loose = RowPredicate::contains("居民恩格尔系数(%)");
        assert_eq!(
            match_row(&rows, &loose).and_then(IndicatorRow::label),
            Some("城镇居民恩格尔系数(%)")
        );
    }

    #[test]
    fn contains_all_needs_every_substring() {
        let rows = engel_rows();
        let p = RowPredicate::contains_all(["农村", "恩格尔"]);
        assert_eq!(match_row(&rows, &p).and_then(|r| r.value("2024年")), Some(32.3));
        let p = RowPredicate::contains_all(["农村", "收入"]);
        assert!(match_row(&rows, &p).is_none());
    }

    #[test]
    fn any_of_matches_alternative_names() {
        let rows = vec![IndicatorRow::new("手机(部)").with_cell("2024年", 260.0)];
        let phone = RowPredicate::any_of(vec![
            RowPredicate::contains("移动电话"),
            RowPredicate::contains("手机"),
        ]);
        assert!(match_row(&rows, &phone).is_some());
    }

    #[test]
    fn exclusions_apply_to_any_rule() {
        let rows = vec![
            IndicatorRow::new("城镇居民恩格尔系数(%)").with_cell("2024年", 28.8),
            IndicatorRow::new("居民恩格尔系数(%)").with_cell("2024年", 29.8),
        ];
        let any = RowPredicate::any_of(vec![RowPredicate::contains("恩格尔")]).excluding(["城镇"]);
        assert_eq!(
            match_row(&rows, &any).and_then(IndicatorRow::label),
            Some("居民恩格尔系数(%)")
        );

        let exact = RowPredicate::exact("城镇居民恩格尔系数(%)").excluding(["城镇"]);
        assert!(match_row(&rows, &exact).is_none());

        let twice = RowPredicate::any_of(vec![RowPredicate::contains("恩格尔")])
            .excluding(["农村"])
            .excluding(["城镇"]);
        assert!(matches!(&twice, RowPredicate::Excluding { excluded, .. } if excluded.len() == 2));
        assert_eq!(
            match_row(&rows, &twice).and_then(IndicatorRow::label),
            Some("居民恩格尔系数(%)")
        );
    }

    #[test]
    fn unlabelled_rows_never_match() {
        let rows = vec![IndicatorRow::default().with_cell("2024年", 1.0)];
        assert!(match_row(&rows, &RowPredicate::contains("")).is_none());
    }

    #[test]
    fn missing_category_is_an_error() {
        let dataset = Dataset::new().with_category("居民恩格尔系数", engel_rows());
        assert_eq!(get_rows(&dataset, "居民恩格尔系数").map(|r| r.len()), Ok(3));
        assert_eq!(
            get_rows(&dataset, "不存在"),
            Err(DashboardError::CategoryNotFound("不存在".into()))
        );
    }

    proptest::proptest! {
        #[test]
        fn excluded_label_is_never_returned(
            labels in proptest::collection::vec("(城镇|农村|全国)?居民(恩格尔|收入)系数", 0..8),
        ) {
            let rows: Vec<IndicatorRow> = labels.iter().map(IndicatorRow::new).collect();
            let p = RowPredicate::contains("居民").excluding(["城镇"]);
            if let Some(row) = match_row(&rows, &p) {
                proptest::prop_assert!(!row.label().unwrap_or_default().contains("城镇"));
            }
        }
    }

    #[test]
    fn row_at_out_of_range_is_soft_miss() {
        let rows = engel_rows();
        assert!(row_at(&rows, 2).is_some());
        assert!(row_at(&rows, 3).is_none());
    }
}

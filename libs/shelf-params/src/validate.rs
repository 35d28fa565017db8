//! Range checks against the configurator limits.

use std::ops::RangeInclusive;

use config::constants::{
    LENGTH_RANGE, MAX_DIVIDERS_PER_SHELF, POST_HEIGHT_RANGE, SHELF_COUNT_RANGE, WIDTH_RANGE,
};

use crate::error::ParamIssue;
use crate::types::ShelfParameters;

fn check_range(
    issues: &mut Vec<ParamIssue>,
    field: &'static str,
    value: f64,
    range: &RangeInclusive<f64>,
) {
    if !range.contains(&value) {
        issues.push(ParamIssue::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        });
    }
}

impl ShelfParameters {
    /// Reports every value outside the configurator's accepted ranges.
    ///
    /// Missing dimensions are reported by
    /// [`missing_required`](Self::missing_required) instead and skipped here.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shelf_params::ShelfParameters;
    ///
    /// assert!(ShelfParameters::new(36.0, 18.0, 72.0, 4).validate().is_empty());
    /// assert_eq!(ShelfParameters::new(120.0, 18.0, 72.0, 4).validate().len(), 1);
    /// ```
    pub fn validate(&self) -> Vec<ParamIssue> {
        let mut issues = Vec::new();

        if self.width != 0.0 {
            check_range(&mut issues, "width", self.width, &WIDTH_RANGE);
        }
        if self.length != 0.0 {
            check_range(&mut issues, "length", self.length, &LENGTH_RANGE);
        }
        if self.post_height != 0.0 {
            check_range(&mut issues, "postHeight", self.post_height, &POST_HEIGHT_RANGE);
        }
        if self.number_of_shelves != 0 && !SHELF_COUNT_RANGE.contains(&self.number_of_shelves) {
            issues.push(ParamIssue::OutOfRange {
                field: "numberOfShelves",
                value: self.number_of_shelves as f64,
                min: *SHELF_COUNT_RANGE.start() as f64,
                max: *SHELF_COUNT_RANGE.end() as f64,
            });
        }

        if self.shelf_dividers_count > MAX_DIVIDERS_PER_SHELF {
            issues.push(ParamIssue::TooManyDividers {
                count: self.shelf_dividers_count,
                max: MAX_DIVIDERS_PER_SHELF,
            });
        }
        if self.shelf_dividers_count > 0 && self.shelf_dividers_shelves.is_empty() {
            issues.push(ParamIssue::DividersWithoutShelves {
                count: self.shelf_dividers_count,
            });
        }
        for &shelf in &self.shelf_dividers_shelves {
            if shelf == 0 || shelf > self.number_of_shelves {
                issues.push(ParamIssue::DividerShelfOutOfRange {
                    shelf,
                    shelves: self.number_of_shelves,
                });
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_parameters_have_no_issues() {
        let mut params = ShelfParameters::new(48.0, 24.0, 84.0, 5);
        params.shelf_dividers_count = 2;
        params.shelf_dividers_shelves = [1, 5].into_iter().collect();
        assert!(params.validate().is_empty());
    }

    #[test]
    fn test_missing_dimensions_are_not_range_issues() {
        assert!(ShelfParameters::default().validate().is_empty());
    }

    #[test]
    fn test_out_of_range_dimensions() {
        let params = ShelfParameters::new(8.0, 100.0, 72.0, 9);
        let fields: Vec<&str> = params
            .validate()
            .into_iter()
            .filter_map(|issue| match issue {
                ParamIssue::OutOfRange { field, .. } => Some(field),
                _ => None,
            })
            .collect();
        assert_eq!(fields, vec!["width", "length", "numberOfShelves"]);
    }

    #[test]
    fn test_divider_issues() {
        let mut params = ShelfParameters::new(36.0, 18.0, 72.0, 3);
        params.shelf_dividers_count = 7;
        params.shelf_dividers_shelves = [2, 4].into_iter().collect();
        let issues = params.validate();
        assert!(issues.contains(&ParamIssue::TooManyDividers { count: 7, max: 6 }));
        assert!(issues.contains(&ParamIssue::DividerShelfOutOfRange { shelf: 4, shelves: 3 }));
        assert_eq!(issues.len(), 2);
    }

    #[test]
    fn test_dividers_without_shelves() {
        let mut params = ShelfParameters::new(36.0, 18.0, 72.0, 3);
        params.shelf_dividers_count = 2;
        assert_eq!(
            params.validate(),
            vec![ParamIssue::DividersWithoutShelves { count: 2 }]
        );
    }
}

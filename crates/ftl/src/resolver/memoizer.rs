//! Per-context memoization of locale-sensitive formatters.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use icu_locale_core::{Locale, locale};
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};

use crate::types::{DateTimeOptions, DateTimeValue, NumberOptions, NumberValue};

/// Memoizes one formatter per distinct options set.
///
/// Options types derive `Eq + Hash`, so cache keys are canonical by
/// construction. Caches grow monotonically; the owning context is the
/// eviction boundary.
#[derive(Default)]
pub(crate) struct IntlMemoizer {
    number_formats: RefCell<HashMap<NumberOptions, Rc<NumberFormat>>>,
    date_time_formats: RefCell<HashMap<DateTimeOptions, Rc<DateTimeFormat>>>,
    plural_rules: RefCell<Option<Rc<PluralRules>>>,
}

impl IntlMemoizer {
    pub(crate) fn number_format(&self, options: &NumberOptions) -> Rc<NumberFormat> {
        if let Some(format) = self.number_formats.borrow().get(options) {
            return Rc::clone(format);
        }
        let format = Rc::new(NumberFormat { options: *options });
        self.number_formats
            .borrow_mut()
            .insert(*options, Rc::clone(&format));
        format
    }

    pub(crate) fn date_time_format(&self, options: &DateTimeOptions) -> Rc<DateTimeFormat> {
        if let Some(format) = self.date_time_formats.borrow().get(options) {
            return Rc::clone(format);
        }
        let format = Rc::new(DateTimeFormat {
            options: options.clone(),
        });
        self.date_time_formats
            .borrow_mut()
            .insert(options.clone(), Rc::clone(&format));
        format
    }

    /// Cardinal plural rules for the context's locale. An unparseable or
    /// unsupported locale tag falls back to English rules.
    pub(crate) fn plural_rules(&self, locale_tag: &str) -> Rc<PluralRules> {
        if let Some(rules) = self.plural_rules.borrow().as_ref() {
            return Rc::clone(rules);
        }
        let loc = locale_tag
            .parse::<Locale>()
            .unwrap_or_else(|_| locale!("en"));
        let rules = PluralRules::try_new(loc.into(), PluralRuleType::Cardinal.into())
            .unwrap_or_else(|_| {
                PluralRules::try_new(locale!("en").into(), PluralRuleType::Cardinal.into())
                    .expect("en plural rules are compiled in")
            });
        let rules = Rc::new(rules);
        *self.plural_rules.borrow_mut() = Some(Rc::clone(&rules));
        rules
    }
}

/// Plural category name used for variant key matching.
pub(crate) fn category_name(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}

/// Formats numbers for a fixed options set.
///
/// Without fraction-digit options the textual form is preserved as written.
pub(crate) struct NumberFormat {
    options: NumberOptions,
}

impl NumberFormat {
    pub(crate) fn format(&self, number: &NumberValue) -> String {
        let NumberOptions {
            minimum_fraction_digits,
            maximum_fraction_digits,
        } = self.options;
        if minimum_fraction_digits.is_none() && maximum_fraction_digits.is_none() {
            return number.source.clone();
        }
        let mut precision = number.visible_fraction_digits();
        if let Some(max) = maximum_fraction_digits {
            precision = precision.min(max);
        }
        if let Some(min) = minimum_fraction_digits {
            precision = precision.max(min);
        }
        format!("{:.*}", precision, number.value)
    }
}

/// Formats date-times for a fixed options set.
pub(crate) struct DateTimeFormat {
    options: DateTimeOptions,
}

impl DateTimeFormat {
    pub(crate) fn format(&self, value: &DateTimeValue) -> String {
        match &self.options.pattern {
            Some(pattern) => format_with_pattern(&value.instant, pattern),
            None => value.instant.to_rfc3339(),
        }
    }
}

/// Render with a strftime pattern, falling back to RFC 3339 when the
/// pattern contains invalid specifiers.
fn format_with_pattern(instant: &DateTime<Utc>, pattern: &str) -> String {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return instant.to_rfc3339();
    }
    instant.format_with_items(items.into_iter()).to_string()
}

//! Core test model types.
//!
//! A [`Test`] is one row of `manifest.csv`. Each test carries two variant
//! columns ([`Variant::Eval`] and [`Variant::Map`]); every enabled variant
//! becomes one manifest [`Entry`]. All serializers consume [`Entry`] values
//! produced by [`entries`], so the JSON-LD, Turtle, and HTML outputs always
//! describe the same entry set.

/// How a variant column of a test row is set.
///
/// - `Disabled`: the cell reads `FALSE` (or is empty); no entry is produced.
/// - `Standard`: the cell reads `TRUE`; the entry uses the variant's standard type.
/// - `Custom`: any other value; the entry type is `rdfc:{value}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantKind {
    /// The variant is not part of the manifest.
    Disabled,
    /// The variant uses its standard test type.
    Standard,
    /// The variant uses a custom type suffix (e.g. `negative-id-conflict`).
    Custom(String),
}

impl VariantKind {
    /// Parses a variant cell. Absent cells are treated as disabled.
    #[must_use]
    pub fn from_cell(cell: Option<&str>) -> Self {
        match cell {
            None | Some("FALSE") => VariantKind::Disabled,
            Some("TRUE") => VariantKind::Standard,
            Some(other) => VariantKind::Custom(other.to_owned()),
        }
    }

    /// Returns `true` unless the variant is [`VariantKind::Disabled`].
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !matches!(self, VariantKind::Disabled)
    }

    /// Returns `true` if the custom value marks a negative test.
    ///
    /// Matching is a case-insensitive substring search for `negative`.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        match self {
            VariantKind::Custom(value) => value.to_ascii_lowercase().contains("negative"),
            _ => false,
        }
    }
}

/// The two kinds of manifest entry a test row can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Canonicalization evaluation (`rdfc10` column).
    Eval,
    /// Issued identifiers map (`rdfc10map` column).
    Map,
}

impl Variant {
    /// All variants in emission order.
    pub const ALL: [Variant; 2] = [Variant::Eval, Variant::Map];

    /// Anchor suffix appended to the test id.
    #[must_use]
    pub fn anchor_suffix(self) -> &'static str {
        match self {
            Variant::Eval => "c",
            Variant::Map => "m",
        }
    }

    /// Entry type used when the column reads `TRUE`.
    #[must_use]
    pub fn standard_type(self) -> &'static str {
        match self {
            Variant::Eval => "rdfc:RDFC10EvalTest",
            Variant::Map => "rdfc:RDFC10MapTest",
        }
    }
}

/// Computational complexity bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
    /// Complexity 0.
    Low,
    /// Complexity 1 through 10.
    Medium,
    /// Anything else.
    High,
}

impl Complexity {
    /// Buckets a raw complexity value.
    #[must_use]
    pub fn from_value(value: i64) -> Self {
        match value {
            0 => Complexity::Low,
            1..=10 => Complexity::Medium,
            _ => Complexity::High,
        }
    }

    /// Returns the label emitted as `computationalComplexity`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
        }
    }
}

/// Reads the leading integer of a cell: an optional sign followed by digits.
///
/// Missing cells, non-numeric cells, and overflow all read as 0.
fn leading_integer(cell: Option<&str>) -> i64 {
    let Some(text) = cell.map(str::trim) else {
        return 0;
    };
    let (sign, digits) = match text.as_bytes().first() {
        Some(b'-') => (-1, &text[1..]),
        Some(b'+') => (1, &text[1..]),
        _ => (1, text),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().map(|v| sign * v).unwrap_or(0)
}

/// Approval status used when the `approval` cell is empty.
pub const DEFAULT_APPROVAL: &str = "Proposed";

/// One test case, as read from a manifest row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Test {
    /// Unique identifier (e.g. `test001`).
    pub id: String,
    /// Human-readable title.
    pub name: String,
    /// Free-text description.
    pub comment: Option<String>,
    /// Raw complexity cell.
    pub complexity: Option<String>,
    /// Approval status; [`DEFAULT_APPROVAL`] when absent.
    pub approval: Option<String>,
    /// Hash function the test exercises.
    pub hash_algorithm: Option<String>,
    /// Input file path, always `rdfc10/{id}-in.nq`.
    pub action: String,
    /// Evaluation variant.
    pub rdfc10: VariantKind,
    /// Issued identifiers map variant.
    pub rdfc10map: VariantKind,
}

impl Test {
    /// Derives the input file path for a test id.
    #[must_use]
    pub fn action_path(id: &str) -> String {
        format!("rdfc10/{id}-in.nq")
    }

    /// Returns the variant column value for `variant`.
    #[must_use]
    pub fn variant(&self, variant: Variant) -> &VariantKind {
        match variant {
            Variant::Eval => &self.rdfc10,
            Variant::Map => &self.rdfc10map,
        }
    }

    /// Fragment identifier of the entry for `variant` (e.g. `test001c`).
    #[must_use]
    pub fn anchor(&self, variant: Variant) -> String {
        format!("{}{}", self.id, variant.anchor_suffix())
    }

    /// Entry type for `variant`, or `None` if the variant is disabled.
    #[must_use]
    pub fn entry_type(&self, variant: Variant) -> Option<String> {
        match self.variant(variant) {
            VariantKind::Disabled => None,
            VariantKind::Standard => Some(variant.standard_type().to_owned()),
            VariantKind::Custom(value) => Some(format!("rdfc:{value}")),
        }
    }

    /// Expected result path for `variant`.
    ///
    /// `None` when the variant is disabled or marks a negative test.
    #[must_use]
    pub fn result(&self, variant: Variant) -> Option<String> {
        let kind = self.variant(variant);
        if !kind.is_enabled() || kind.is_negative() {
            return None;
        }
        Some(match variant {
            Variant::Eval => format!("rdfc10/{}-rdfc10.nq", self.id),
            Variant::Map => format!("rdfc10/{}-rdfc10map.json", self.id),
        })
    }

    /// Complexity bucket of this test.
    #[must_use]
    pub fn computational_complexity(&self) -> Complexity {
        Complexity::from_value(leading_integer(self.complexity.as_deref()))
    }

    /// Approval status, defaulted to [`DEFAULT_APPROVAL`].
    #[must_use]
    pub fn approval_or_default(&self) -> &str {
        self.approval.as_deref().unwrap_or(DEFAULT_APPROVAL)
    }

    /// Display name for `variant`, with the map or negative suffix applied.
    #[must_use]
    pub fn display_name(&self, variant: Variant) -> String {
        let suffix = match variant {
            Variant::Map => " (map test)",
            Variant::Eval if self.variant(variant).is_negative() => " (negative test)",
            Variant::Eval => "",
        };
        format!("{}{suffix}", self.name)
    }

    /// Builds the manifest entry for `variant`, or `None` if it is disabled.
    #[must_use]
    pub fn entry(&self, variant: Variant) -> Option<Entry> {
        let type_ = self.entry_type(variant)?;
        Some(Entry {
            anchor: self.anchor(variant),
            variant,
            type_,
            name: self.display_name(variant),
            comment: self.comment.clone(),
            computational_complexity: self.computational_complexity(),
            hash_algorithm: self.hash_algorithm.clone(),
            approval: format!("rdft:{}", self.approval_or_default()),
            action: self.action.clone(),
            result: self.result(variant),
        })
    }
}

/// One manifest entry: a single enabled variant of a test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Fragment identifier without the leading `#`.
    pub anchor: String,
    /// Variant this entry describes.
    pub variant: Variant,
    /// Compact type IRI (e.g. `rdfc:RDFC10EvalTest`).
    pub type_: String,
    /// Display name, including any variant suffix.
    pub name: String,
    /// Free-text description.
    pub comment: Option<String>,
    /// Complexity bucket.
    pub computational_complexity: Complexity,
    /// Hash function the test exercises.
    pub hash_algorithm: Option<String>,
    /// Compact approval IRI (e.g. `rdft:Proposed`).
    pub approval: String,
    /// Input file path.
    pub action: String,
    /// Expected result path; absent for negative tests.
    pub result: Option<String>,
}

/// Expands tests into manifest entries, in row order then [`Variant::ALL`] order.
#[must_use]
pub fn entries(tests: &[Test]) -> Vec<Entry> {
    tests
        .iter()
        .flat_map(|test| Variant::ALL.iter().filter_map(|v| test.entry(*v)))
        .collect()
}

#[cfg(test)]
pub(crate) fn sample_test(id: &str, rdfc10: &str, rdfc10map: &str) -> Test {
    Test {
        id: id.to_owned(),
        name: "Simple".to_owned(),
        comment: None,
        complexity: Some("0".to_owned()),
        approval: None,
        hash_algorithm: None,
        action: Test::action_path(id),
        rdfc10: VariantKind::from_cell(Some(rdfc10)),
        rdfc10map: VariantKind::from_cell(Some(rdfc10map)),
    }
}

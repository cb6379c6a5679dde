//! Cause-and-effect (Ishikawa / fishbone) diagram with the 6M categories.

use std::fmt;

use crate::error::{Error, Result};

/// One of the six fixed cause categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// People.
    Man,
    /// Equipment and tooling.
    Machine,
    /// Procedures.
    Method,
    /// Raw materials and components.
    Material,
    /// Inspection and gauging.
    Measurement,
    /// Surroundings.
    Environment,
}

impl Category {
    /// The six categories in diagram order.
    pub const ALL: [Category; 6] = [
        Self::Man,
        Self::Machine,
        Self::Method,
        Self::Material,
        Self::Measurement,
        Self::Environment,
    ];

    /// English label.
    pub fn name(self) -> &'static str {
        match self {
            Self::Man => "Man",
            Self::Machine => "Machine",
            Self::Method => "Method",
            Self::Material => "Material",
            Self::Measurement => "Measurement",
            Self::Environment => "Environment",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for Category {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(Error::CategoryOutOfRange(index))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// English 6M labels in diagram order.
pub fn standard_6m() -> [&'static str; 6] {
    Category::ALL.map(Category::name)
}

/// A labelled category slot and its causes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategorySlot {
    /// Display label (English or localized).
    pub name: String,
    /// Causes in insertion order.
    pub causes: Vec<String>,
}

/// Fishbone diagram: a problem statement and exactly six cause categories.
///
/// # Examples
///
/// ```
/// use u_quality::quality::{Category, IshikawaDiagram};
///
/// let mut d = IshikawaDiagram::new("burrs on edge");
/// d.add_cause(Category::Machine, "worn cutter");
/// d.add_cause(Category::Method, "feed rate too high");
/// d.add_cause(Category::Machine, "  ");
/// assert_eq!(d.total_causes(), 2);
/// assert_eq!(d.causes(Category::Machine), ["worn cutter"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IshikawaDiagram {
    problem: String,
    categories: [CategorySlot; 6],
}

impl IshikawaDiagram {
    /// Empty diagram with the English 6M labels.
    pub fn new(problem: impl Into<String>) -> Self {
        Self::with_names(problem, standard_6m())
    }

    /// Empty diagram with caller-supplied labels, in [`Category::ALL`] order.
    pub fn with_names<S: Into<String>>(problem: impl Into<String>, names: [S; 6]) -> Self {
        Self {
            problem: problem.into().trim().to_string(),
            categories: names.map(|name| CategorySlot {
                name: name.into(),
                causes: Vec::new(),
            }),
        }
    }

    /// Problem statement.
    pub fn problem(&self) -> &str {
        &self.problem
    }

    /// All six slots in diagram order.
    pub fn categories(&self) -> &[CategorySlot; 6] {
        &self.categories
    }

    /// Causes recorded under `category`.
    pub fn causes(&self, category: Category) -> &[String] {
        &self.categories[category.index()].causes
    }

    /// Appends a trimmed cause. Returns `false`, leaving the diagram
    /// unchanged, when the cause is blank.
    pub fn add_cause(&mut self, category: Category, cause: impl AsRef<str>) -> bool {
        let cause = cause.as_ref().trim();
        if cause.is_empty() {
            return false;
        }
        self.categories[category.index()].causes.push(cause.to_string());
        true
    }

    /// Removes and returns the cause at `index` under `category`.
    ///
    /// # Errors
    ///
    /// [`Error::CauseOutOfRange`] if `index` is past the end of the list.
    pub fn remove_cause(&mut self, category: Category, index: usize) -> Result<String> {
        let causes = &mut self.categories[category.index()].causes;
        if index >= causes.len() {
            return Err(Error::CauseOutOfRange {
                index,
                len: causes.len(),
            });
        }
        Ok(causes.remove(index))
    }

    /// Number of causes across all categories.
    pub fn total_causes(&self) -> usize {
        self.categories.iter().map(|slot| slot.causes.len()).sum()
    }

    /// `(label, cause count)` per category, in diagram order.
    pub fn cause_counts(&self) -> [(&str, usize); 6] {
        let mut counts = [("", 0); 6];
        for (out, slot) in counts.iter_mut().zip(&self.categories) {
            *out = (slot.name.as_str(), slot.causes.len());
        }
        counts
    }
}

impl fmt::Display for IshikawaDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} causes", self.problem, self.total_causes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_diagram_has_six_empty_categories() {
        let d = IshikawaDiagram::new("  late deliveries ");
        assert_eq!(d.problem(), "late deliveries");
        assert_eq!(d.categories().len(), 6);
        assert_eq!(d.total_causes(), 0);
        let names: Vec<&str> = d.categories().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Man", "Machine", "Method", "Material", "Measurement", "Environment"]
        );
    }

    #[test]
    fn localized_names_keep_order() {
        let d = IshikawaDiagram::with_names(
            "defect",
            ["Mensch", "Maschine", "Methode", "Material", "Messung", "Mitwelt"],
        );
        assert_eq!(d.categories()[Category::Machine as usize].name, "Maschine");
        assert_eq!(d.cause_counts()[5], ("Mitwelt", 0));
    }

    #[test]
    fn add_and_remove_causes() {
        let mut d = IshikawaDiagram::new("porosity");
        assert!(d.add_cause(Category::Material, " moisture "));
        assert!(d.add_cause(Category::Material, "contamination"));
        assert!(d.add_cause(Category::Environment, "humidity"));
        assert!(!d.add_cause(Category::Man, ""));
        assert_eq!(d.causes(Category::Material), ["moisture", "contamination"]);
        assert_eq!(d.total_causes(), 3);

        assert_eq!(d.remove_cause(Category::Material, 0), Ok("moisture".to_string()));
        assert_eq!(d.causes(Category::Material), ["contamination"]);
        assert_eq!(
            d.remove_cause(Category::Material, 1),
            Err(Error::CauseOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(d.total_causes(), 2);
    }

    #[test]
    fn cause_counts_in_order() {
        let mut d = IshikawaDiagram::new("noise");
        d.add_cause(Category::Machine, "loose bearing");
        d.add_cause(Category::Machine, "imbalance");
        d.add_cause(Category::Measurement, "meter drift");
        let counts = d.cause_counts();
        assert_eq!(counts[0], ("Man", 0));
        assert_eq!(counts[1], ("Machine", 2));
        assert_eq!(counts[4], ("Measurement", 1));
        assert_eq!(d.to_string(), "noise: 3 causes");
    }

    #[test]
    fn category_from_index() {
        assert_eq!(Category::try_from(0), Ok(Category::Man));
        assert_eq!(Category::try_from(5), Ok(Category::Environment));
        assert_eq!(Category::try_from(6), Err(Error::CategoryOutOfRange(6)));
        assert_eq!(standard_6m()[3], "Material");
    }
}

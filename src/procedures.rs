use std::collections::HashMap;

use crate::results::SqlType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    Average,
    Count,
    Max,
    Min,
    Sum,
}

impl Aggregate {
    /// Folds a column; NULLs are skipped.
    pub fn apply(&self, values: &[Option<f64>]) -> Option<f64> {
        let present = values.iter().flatten().copied();
        match self {
            Self::Count => Some(present.count() as f64),
            Self::Sum => present.reduce(|a, b| a + b),
            Self::Max => present.reduce(f64::max),
            Self::Min => present.reduce(f64::min),
            Self::Average => {
                let (sum, n) = present.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
                (n > 0).then(|| sum / n as f64)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Procedure {
    pub name: &'static str,
    pub remarks: &'static str,
    pub return_type: SqlType,
    pub kind: Aggregate,
}

/// Procedures callable from a statement, looked up by name ignoring case.
#[derive(Debug, Clone)]
pub struct ProcedureCatalog {
    procedures: Vec<Procedure>,
    by_name: HashMap<String, usize>,
}

impl ProcedureCatalog {
    pub fn new(procedures: Vec<Procedure>) -> Self {
        let by_name = procedures
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name.to_uppercase(), i))
            .collect();
        ProcedureCatalog {
            procedures,
            by_name,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Procedure> {
        let procedure = self
            .by_name
            .get(&name.to_uppercase())
            .map(|&i| &self.procedures[i]);
        log::trace!("procedure lookup {name}: {}", procedure.is_some());
        procedure
    }

    pub fn list(&self) -> &[Procedure] {
        &self.procedures
    }
}

impl Default for ProcedureCatalog {
    fn default() -> Self {
        ProcedureCatalog::new(vec![
            Procedure {
                name: "AVG",
                remarks: "Returns the average value of a numeric column.",
                return_type: SqlType::Double,
                kind: Aggregate::Average,
            },
            Procedure {
                name: "COUNT",
                remarks: "Returns the number of rows with a value.",
                return_type: SqlType::Integer,
                kind: Aggregate::Count,
            },
            Procedure {
                name: "MAX",
                remarks: "Returns the largest value of the selected column.",
                return_type: SqlType::Double,
                kind: Aggregate::Max,
            },
            Procedure {
                name: "MIN",
                remarks: "Returns the smallest value of the selected column.",
                return_type: SqlType::Double,
                kind: Aggregate::Min,
            },
            Procedure {
                name: "SUM",
                remarks: "Returns the total sum of a numeric column.",
                return_type: SqlType::Double,
                kind: Aggregate::Sum,
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        let catalog = ProcedureCatalog::default();
        assert_eq!(catalog.get("avg").unwrap().kind, Aggregate::Average);
        assert_eq!(catalog.get("Count").unwrap().return_type, SqlType::Integer);
        assert!(catalog.get("median").is_none());
    }

    #[test]
    fn list_keeps_registration_order() {
        let catalog = ProcedureCatalog::default();
        let names: Vec<_> = catalog.list().iter().map(|p| p.name).collect();
        assert_eq!(names, ["AVG", "COUNT", "MAX", "MIN", "SUM"]);
    }

    #[test]
    fn aggregates_skip_nulls() {
        let values = [Some(2.0), None, Some(4.0), Some(9.0)];
        assert_eq!(Aggregate::Count.apply(&values), Some(3.0));
        assert_eq!(Aggregate::Sum.apply(&values), Some(15.0));
        assert_eq!(Aggregate::Max.apply(&values), Some(9.0));
        assert_eq!(Aggregate::Min.apply(&values), Some(2.0));
        assert_eq!(Aggregate::Average.apply(&values), Some(5.0));
    }

    #[test]
    fn aggregates_of_nothing() {
        let values = [None, None];
        assert_eq!(Aggregate::Count.apply(&values), Some(0.0));
        assert_eq!(Aggregate::Sum.apply(&values), None);
        assert_eq!(Aggregate::Average.apply(&[]), None);
        assert_eq!(Aggregate::Max.apply(&[]), None);
    }
}

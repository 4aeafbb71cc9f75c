//!
//! The normalized benchmark representation.
//!

pub mod columns;
pub mod measure;
pub mod method;
pub mod unit;


use std::collections::HashMap;

use crate::input::Report;

use self::columns::Columns;
use self::measure::Measure;
use self::method::result::Result as MethodResult;
use self::method::Method;
use self::unit::Unit;

///
/// The normalized benchmark representation.
///
/// Doubles as the native JSON format of the tool.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Benchmark {
    /// The distinct categories in first-seen order.
    pub categories: Vec<String>,
    /// The category axis title, joined from the dimension column labels.
    pub categories_title: String,
    /// The methods, ordered by the first appearance of their name prefix.
    pub methods: Vec<Method>,
    /// The duration unit of the first parsed result.
    pub duration_unit: Unit,
    /// The allocation unit of the first result that reports one.
    pub allocation_unit: Unit,
}

impl Benchmark {
    ///
    /// Normalizes a tokenized report into a benchmark.
    ///
    /// Returns `None` when the report has no rows, when its header lacks the method
    /// or mean column, or when no data rows remain, meaning there is nothing to
    /// chart. Malformed cells never fail normalization: unparseable numbers become
    /// `NaN` and missing cells read as empty.
    ///
    pub fn from_report(report: &Report) -> Option<Self> {
        let header = report.header()?;
        let columns = Columns::discover(header)?;

        let mut methods: Vec<Method> = Vec::new();
        let mut method_indexes: HashMap<String, usize> = HashMap::new();
        let mut prefix_orders: HashMap<String, usize> = HashMap::new();

        for row in report.data() {
            let prefix = columns.method(row).to_owned();
            let name = match columns.runtime(row) {
                Some(runtime) => format!("{prefix} ({runtime})"),
                None => prefix.clone(),
            };

            let next_order = prefix_orders.len();
            let order = *prefix_orders.entry(prefix).or_insert(next_order);

            let index = match method_indexes.get(name.as_str()) {
                Some(index) => *index,
                None => {
                    methods.push(Method::new(name.clone(), order));
                    method_indexes.insert(name, methods.len() - 1);
                    methods.len() - 1
                }
            };

            let duration = Measure::parse(columns.duration(row));
            let allocation = columns.allocation(row).map(Measure::parse);
            methods[index].results.push(MethodResult::new(
                columns.join_dimensions(row),
                duration,
                allocation,
            ));
        }

        if methods.is_empty() {
            return None;
        }

        let mut categories: Vec<String> = Vec::new();
        for method in methods.iter() {
            for result in method.results.iter() {
                if !categories.contains(&result.category) {
                    categories.push(result.category.clone());
                }
            }
        }

        let duration_unit = methods
            .first()
            .and_then(|method| method.results.first())
            .map(|result| Unit::from(result.duration.unit.as_str()))
            .unwrap_or_default();
        let allocation_unit = methods
            .iter()
            .flat_map(|method| method.results.iter())
            .find_map(|result| result.allocation.as_ref())
            .map(|measure| Unit::from(measure.unit.as_str()))
            .unwrap_or_default();

        methods.sort_by_key(|method| method.order);

        Some(Self {
            categories,
            categories_title: columns.join_dimensions(header),
            methods,
            duration_unit,
            allocation_unit,
        })
    }

    ///
    /// Whether any method reports an allocation measure.
    ///
    pub fn has_allocations(&self) -> bool {
        self.methods
            .iter()
            .flat_map(|method| method.results.iter())
            .any(|result| result.allocation.is_some())
    }
}

//! Platform command report data structures.

use serde::Serialize;

use super::output::{Output, Report};

/// Every platform predicate, in declaration order.
#[derive(Debug, Serialize)]
pub struct PlatformReport {
    pub rows: Vec<PlatformRow>,
}

#[derive(Debug, Serialize)]
pub struct PlatformRow {
    /// Short name accepted on the command line.
    pub name: &'static str,
    /// Predicate expression.
    pub predicate: &'static str,
}

impl Report for PlatformReport {
    fn render(&self, out: &mut dyn Output) {
        out.section("Platforms");
        for row in &self.rows {
            out.key_value_indented(row.name, row.predicate);
        }
    }
}

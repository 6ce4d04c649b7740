//! Pointer command report data structures.

use serde::Serialize;

use super::output::{Output, Report};

/// Accessors for every pointer type.
#[derive(Debug, Serialize)]
pub struct PointerReport {
    pub rows: Vec<PointerRow>,
}

/// One pointer type and its three accessors.
#[derive(Debug, Serialize)]
pub struct PointerRow {
    pub tag: &'static str,
    pub mutable: bool,
    pub buffer: bool,
    pub const_raw: &'static str,
    pub raw: &'static str,
    pub raw_o: &'static str,
}

impl Report for PointerReport {
    fn render(&self, out: &mut dyn Output) {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.section(row.tag);
            out.key_value_indented("const-raw", row.const_raw);
            out.key_value_indented("raw", row.raw);
            out.key_value_indented("raw-o", row.raw_o);
        }
    }
}

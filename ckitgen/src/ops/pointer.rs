//! Pointer operation - the full accessor table.

use ckitgen_core::PointerKind;

use crate::reports::{PointerReport, PointerRow};

/// Resolve every accessor flavor for every pointer type.
pub fn pointers() -> PointerReport {
    PointerReport {
        rows: PointerKind::ALL
            .into_iter()
            .map(|kind| PointerRow {
                tag: kind.tag(),
                mutable: kind.is_mutable(),
                buffer: kind.is_buffer(),
                const_raw: kind.const_raw_pointer(),
                raw: kind.raw_pointer(),
                raw_o: kind.raw_o_pointer(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_table() {
        let report = pointers();
        assert_eq!(report.rows.len(), 4);

        let buffer = &report.rows[2];
        assert_eq!(buffer.tag, "AnyBufferPointer");
        assert_eq!(buffer.const_raw, ".rawBuffer.baseAddress");
        assert_eq!(buffer.raw, ".rawBuffer.baseAddress");
        assert_eq!(buffer.raw_o, ".rawBuffer");
    }

    #[test]
    fn test_pointer_table_json() {
        let json = serde_json::to_value(pointers()).unwrap();
        assert_eq!(json["rows"][3]["tag"], "AnyMutableBufferPointer");
        assert_eq!(json["rows"][3]["raw"], ".mutableRawBuffer.baseAddress");
        assert_eq!(json["rows"][1]["mutable"], true);
    }
}

//! License banner placed at the top of generated Swift files.

use crate::builder::{CodeBuilder, Renderable};

const BSD_2_CLAUSE: &[&str] = &[
    "All rights reserved.",
    "",
    "Redistribution and use in source and binary forms, with or without",
    "modification, are permitted provided that the following conditions are met:",
    "",
    "1. Redistributions of source code must retain the above copyright notice, this",
    "list of conditions and the following disclaimer.",
    "2. Redistributions in binary form must reproduce the above copyright notice,",
    "this list of conditions and the following disclaimer in the documentation",
    "and/or other materials provided with the distribution.",
    "",
    "THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS \"AS IS\" AND",
    "ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE IMPLIED",
    "WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE",
    "DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT OWNER OR CONTRIBUTORS BE LIABLE FOR",
    "ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES",
    "(INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES;",
    "LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER CAUSED AND",
    "ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY, OR TORT",
    "(INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE OF THIS",
    "SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.",
    "",
    "The views and conclusions contained in the software and documentation are those",
    "of the authors and should not be interpreted as representing official policies,",
    "either expressed or implied, of the FreeBSD Project.",
    "",
];

/// BSD 2-clause banner for a copyright holder.
///
/// The opening notice carries `since`, the year the work was first
/// published; the closing notice carries `year`, the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseHeader {
    pub holder: String,
    pub since: u16,
    pub year: u16,
}

impl LicenseHeader {
    /// Banner with the same year on both notices.
    pub fn new(holder: impl Into<String>, year: u16) -> Self {
        Self {
            holder: holder.into(),
            since: year,
            year,
        }
    }

    /// Set the year of first publication.
    pub fn since(mut self, since: u16) -> Self {
        self.since = since;
        self
    }
}

impl Renderable for LicenseHeader {
    fn emit(&self, builder: &mut CodeBuilder) {
        builder.push_comment(&format!("Copyright (c) {}, {}", self.since, self.holder));
        for line in BSD_2_CLAUSE {
            builder.push_comment(line);
        }
        builder.push_comment(&format!(
            "Copyright © {} {}. All rights reserved.",
            self.year, self.holder
        ));
        builder.push_comment("");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_bounds() {
        let header = LicenseHeader::new("CKit", 2017).render();
        let lines: Vec<&str> = header.lines().collect();

        assert_eq!(lines.first(), Some(&"//  Copyright (c) 2017, CKit"));
        assert_eq!(lines[1], "//  All rights reserved.");
        assert_eq!(lines[lines.len() - 2], "//  Copyright © 2017 CKit. All rights reserved.");
        assert_eq!(lines.last(), Some(&"//"));
    }

    #[test]
    fn test_since_year_on_opening_notice() {
        let header = LicenseHeader::new("CKit", 2017).since(2016).render();
        let lines: Vec<&str> = header.lines().collect();

        assert_eq!(lines[0], "//  Copyright (c) 2016, CKit");
        assert_eq!(lines[lines.len() - 2], "//  Copyright © 2017 CKit. All rights reserved.");
    }

    #[test]
    fn test_every_line_is_a_comment() {
        let header = LicenseHeader::new("Jane Doe", 2024).render();
        assert!(header.ends_with('\n'));
        for line in header.lines() {
            assert!(line == "//" || line.starts_with("//  "), "bad line: {line:?}");
        }
    }
}

//! Cell and table styling for the HTML report.

/// Visual style of a single table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    /// Light green background.
    Present,
    /// Light red background.
    Absent,
    /// No styling.
    Plain,
}

impl CellStyle {
    /// Style for a cell's text. Total: unknown values get [`CellStyle::Plain`].
    pub fn for_value(value: &str) -> Self {
        match value {
            "Yes" => CellStyle::Present,
            "No" => CellStyle::Absent,
            _ => CellStyle::Plain,
        }
    }

    /// Inline CSS declarations; empty for [`CellStyle::Plain`].
    pub fn css(self) -> &'static str {
        match self {
            CellStyle::Present => "background-color: #c6f6d5;",
            CellStyle::Absent => "background-color: #fed7d7;",
            CellStyle::Plain => "",
        }
    }
}

/// One CSS rule applied to the whole table.
#[derive(Debug, Clone, Copy)]
pub struct StyleRule {
    pub selector: &'static str,
    pub props: &'static [(&'static str, &'static str)],
}

pub const TABLE_STYLES: &[StyleRule] = &[
    StyleRule {
        selector: "table",
        props: &[
            ("font-family", "Segoe UI, Arial, sans-serif"),
            ("border-collapse", "collapse"),
            ("width", "100%"),
            ("table-layout", "fixed"),
        ],
    },
    StyleRule {
        selector: "th, td",
        props: &[
            ("text-align", "center"),
            ("padding", "8px"),
            ("border", "1px solid #ccc"),
            ("white-space", "nowrap"),
            ("overflow", "hidden"),
            ("text-overflow", "ellipsis"),
        ],
    },
];

/// Render [`TABLE_STYLES`] as a stylesheet, one rule per line.
pub fn stylesheet() -> String {
    TABLE_STYLES
        .iter()
        .map(|rule| {
            let props: Vec<String> = rule
                .props
                .iter()
                .map(|(name, value)| format!("{}: {};", name, value))
                .collect();
            format!("{} {{ {} }}", rule.selector, props.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

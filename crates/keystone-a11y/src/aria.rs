//! ARIA Support
//!
//! Roles and property values the widgets write to the host tree.

use serde::Deserialize;

/// ARIA role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AriaRole {
    Alert,
    Button,
    Cell,
    ColumnHeader,
    Dialog,
    Grid,
    GridCell,
    Row,
    RowGroup,
    Status,
    Tab,
    TabList,
    TabPanel,
}

impl AriaRole {
    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_lowercase().as_str() {
            "alert" => Self::Alert,
            "button" => Self::Button,
            "cell" => Self::Cell,
            "columnheader" => Self::ColumnHeader,
            "dialog" => Self::Dialog,
            "grid" => Self::Grid,
            "gridcell" => Self::GridCell,
            "row" => Self::Row,
            "rowgroup" => Self::RowGroup,
            "status" => Self::Status,
            "tab" => Self::Tab,
            "tablist" => Self::TabList,
            "tabpanel" => Self::TabPanel,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alert => "alert",
            Self::Button => "button",
            Self::Cell => "cell",
            Self::ColumnHeader => "columnheader",
            Self::Dialog => "dialog",
            Self::Grid => "grid",
            Self::GridCell => "gridcell",
            Self::Row => "row",
            Self::RowGroup => "rowgroup",
            Self::Status => "status",
            Self::Tab => "tab",
            Self::TabList => "tablist",
            Self::TabPanel => "tabpanel",
        }
    }
}

/// Live region politeness
///
/// `Polite` queues behind current speech; `Assertive` interrupts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Politeness {
    Polite,
    Assertive,
}

impl Politeness {
    pub const ALL: [Politeness; 2] = [Politeness::Polite, Politeness::Assertive];

    /// `aria-live` value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Polite => "polite",
            Self::Assertive => "assertive",
        }
    }

    /// Implicit live region role carrying this politeness
    pub fn role(&self) -> AriaRole {
        match self {
            Self::Polite => AriaRole::Status,
            Self::Assertive => AriaRole::Alert,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "polite" => Some(Self::Polite),
            "assertive" => Some(Self::Assertive),
            _ => None,
        }
    }
}

/// Navigation orientation of a composite widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
    Both,
}

impl Orientation {
    /// `aria-orientation` value; `Both` has none
    pub fn aria_value(&self) -> Option<&'static str> {
        match self {
            Self::Horizontal => Some("horizontal"),
            Self::Vertical => Some("vertical"),
            Self::Both => None,
        }
    }
}

/// Sort direction for `aria-sort`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    /// Next direction when a header is activated again
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::None | Self::Descending => Self::Ascending,
        }
    }
}

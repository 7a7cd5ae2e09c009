//! Data Table
//!
//! Selectable, sortable `grid`. Row 0 is the header row; data rows follow.
//! One cell at a time is the Tab stop. Rows and columns each have their
//! own roving navigator, so the wrap policy of either axis is configuration.

use keystone_a11y::roving::{first_enabled, last_enabled};
use keystone_a11y::{
    announce, with_announcer, AriaRole, Key, KeyDisposition, KeyEvent, Politeness, RovingConfig,
    RovingDecision, RovingNavigator, SortDirection,
};
use keystone_dom::{Document, NodeId};

use crate::{focus_quietly, WidgetError};

/// Column definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub key: String,
    pub label: String,
    pub sortable: bool,
}

impl Column {
    pub fn new(key: &str, label: &str) -> Self {
        Self { key: key.to_string(), label: label.to_string(), sortable: false }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

/// One data row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRow {
    pub id: String,
    pub cells: Vec<String>,
    pub disabled: bool,
    pub selected: bool,
}

impl DataRow {
    pub fn new(id: &str, cells: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            cells: cells.iter().map(|c| c.to_string()).collect(),
            disabled: false,
            selected: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

#[derive(Debug)]
struct GridNodes {
    grid: NodeId,
    /// Row elements, header first
    rows: Vec<NodeId>,
    /// Cell elements by [row][column], header first
    cells: Vec<Vec<NodeId>>,
}

/// Data table widget
#[derive(Debug)]
pub struct DataTable {
    label: String,
    columns: Vec<Column>,
    rows: Vec<DataRow>,
    active_row: usize,
    active_col: usize,
    row_nav: RovingNavigator,
    col_nav: RovingNavigator,
    sort: Option<(usize, SortDirection)>,
    nodes: Option<GridNodes>,
}

impl DataTable {
    pub fn new(
        label: &str,
        columns: Vec<Column>,
        rows: Vec<DataRow>,
        row_config: RovingConfig,
        column_config: RovingConfig,
    ) -> Result<Self, WidgetError> {
        if columns.is_empty() {
            return Err(WidgetError::Empty);
        }
        Ok(Self {
            label: label.to_string(),
            columns,
            rows,
            active_row: 0,
            active_col: 0,
            row_nav: RovingNavigator::new(row_config),
            col_nav: RovingNavigator::new(column_config),
            sort: None,
            nodes: None,
        })
    }

    pub fn rows(&self) -> &[DataRow] {
        &self.rows
    }

    /// Active cell as (row, column); row 0 is the header
    pub fn active_cell(&self) -> (usize, usize) {
        (self.active_row, self.active_col)
    }

    pub fn sort_state(&self) -> Option<(usize, SortDirection)> {
        self.sort
    }

    pub fn grid_node(&self) -> Option<NodeId> {
        self.nodes.as_ref().map(|n| n.grid)
    }

    pub fn cell_node(&self, row: usize, col: usize) -> Option<NodeId> {
        self.nodes.as_ref()?.cells.get(row)?.get(col).copied()
    }

    /// Disabled flags per grid row, header included
    fn row_flags(&self) -> Vec<bool> {
        std::iter::once(false)
            .chain(self.rows.iter().map(|r| r.disabled))
            .collect()
    }

    fn column_flags(&self) -> Vec<bool> {
        vec![false; self.columns.len()]
    }

    pub fn mount(&mut self, doc: &mut Document, parent: NodeId) -> Result<NodeId, WidgetError> {
        let grid = doc.append_element(parent, "table")?;
        doc.tree_mut().set_attribute(grid, "role", AriaRole::Grid.as_str())?;
        doc.tree_mut().set_attribute(grid, "aria-label", self.label.as_str())?;

        let mut rows = Vec::with_capacity(self.rows.len() + 1);
        let mut cells = Vec::with_capacity(self.rows.len() + 1);

        let header = doc.append_element(grid, "tr")?;
        doc.tree_mut().set_attribute(header, "role", AriaRole::Row.as_str())?;
        let mut header_cells = Vec::with_capacity(self.columns.len());
        for column in &self.columns {
            let th = doc.append_element(header, "th")?;
            let tree = doc.tree_mut();
            tree.set_attribute(th, "role", AriaRole::ColumnHeader.as_str())?;
            tree.set_attribute(th, "data-column", column.key.as_str())?;
            tree.set_text_content(th, &column.label)?;
            header_cells.push(th);
        }
        rows.push(header);
        cells.push(header_cells);

        for _ in &self.rows {
            let tr = doc.append_element(grid, "tr")?;
            doc.tree_mut().set_attribute(tr, "role", AriaRole::Row.as_str())?;
            let mut row_cells = Vec::with_capacity(self.columns.len());
            for _ in &self.columns {
                let td = doc.append_element(tr, "td")?;
                doc.tree_mut().set_attribute(td, "role", AriaRole::GridCell.as_str())?;
                row_cells.push(td);
            }
            rows.push(tr);
            cells.push(row_cells);
        }

        self.nodes = Some(GridNodes { grid, rows, cells });
        self.render_rows(doc)?;
        self.sync_focus_attrs(doc)?;
        Ok(grid)
    }

    /// Write row data, selection and sort state
    fn render_rows(&self, doc: &mut Document) -> Result<(), WidgetError> {
        let nodes = self.nodes.as_ref().ok_or(WidgetError::NotMounted)?;
        let tree = doc.tree_mut();

        for (col, column) in self.columns.iter().enumerate() {
            let th = nodes.cells[0][col];
            if column.sortable {
                let direction = match self.sort {
                    Some((sorted, direction)) if sorted == col => direction,
                    _ => SortDirection::None,
                };
                tree.set_attribute(th, "aria-sort", direction.as_str())?;
            }
        }

        for (index, row) in self.rows.iter().enumerate() {
            let tr = nodes.rows[index + 1];
            tree.set_attribute(tr, "data-row-id", row.id.as_str())?;
            tree.set_attribute(tr, "aria-selected", if row.selected { "true" } else { "false" })?;
            if row.disabled {
                tree.set_attribute(tr, "aria-disabled", "true")?;
            } else {
                tree.remove_attribute(tr, "aria-disabled")?;
            }
            for (col, &td) in nodes.cells[index + 1].iter().enumerate() {
                let text = row.cells.get(col).map(String::as_str).unwrap_or("");
                tree.set_text_content(td, text)?;
            }
        }
        Ok(())
    }

    /// Active cell is the only Tab stop
    fn sync_focus_attrs(&self, doc: &mut Document) -> Result<(), WidgetError> {
        let nodes = self.nodes.as_ref().ok_or(WidgetError::NotMounted)?;
        let tree = doc.tree_mut();
        for (r, row) in nodes.cells.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                let active = r == self.active_row && c == self.active_col;
                tree.set_attribute(cell, "tabindex", if active { "0" } else { "-1" })?;
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, doc: &mut Document, event: &KeyEvent) -> KeyDisposition {
        if event.ctrl && !event.alt && !event.meta {
            let target = match event.key {
                Key::Home => first_enabled(&self.row_flags()).map(|row| (row, 0)),
                Key::End => last_enabled(&self.row_flags()).map(|row| (row, self.columns.len() - 1)),
                _ => return KeyDisposition::PassThrough,
            };
            if let Some((row, col)) = target {
                self.move_to(doc, row, col);
            }
            return KeyDisposition::Handled;
        }

        match event.key {
            Key::ArrowUp | Key::ArrowDown => {
                let decision = self.row_nav.decide(event, self.active_row, &self.row_flags());
                if let RovingDecision::Move { index, select } = decision {
                    self.move_to(doc, index, self.active_col);
                    if select && index > 0 {
                        self.select_only(doc, index - 1);
                    }
                }
                decision.disposition()
            }
            Key::ArrowLeft | Key::ArrowRight | Key::Home | Key::End => {
                let decision = self.col_nav.decide(event, self.active_col, &self.column_flags());
                if let RovingDecision::Move { index, .. } = decision {
                    self.move_to(doc, self.active_row, index);
                }
                decision.disposition()
            }
            ref key if key.is_activation() && self.active_row == 0 => {
                if self.columns[self.active_col].sortable {
                    self.sort_by(doc, self.active_col);
                    KeyDisposition::Handled
                } else {
                    KeyDisposition::PassThrough
                }
            }
            Key::Space => {
                self.toggle_selection(doc, self.active_row - 1);
                KeyDisposition::Handled
            }
            _ => KeyDisposition::PassThrough,
        }
    }

    fn move_to(&mut self, doc: &mut Document, row: usize, col: usize) {
        self.active_row = row;
        self.active_col = col;
        if let Err(err) = self.sync_focus_attrs(doc) {
            tracing::warn!("data table not synced: {}", err);
            return;
        }
        if let Some(cell) = self.cell_node(row, col) {
            focus_quietly(doc, cell);
        }
    }

    /// Sort by `col`, toggling direction on repeat, and announce the result
    ///
    /// The active cell follows its row, not its position.
    pub fn sort_by(&mut self, doc: &mut Document, col: usize) {
        let Some(column) = self.columns.get(col) else {
            return;
        };
        let direction = match self.sort {
            Some((sorted, direction)) if sorted == col => direction.toggled(),
            _ => SortDirection::Ascending,
        };

        let active_id = self
            .active_row
            .checked_sub(1)
            .and_then(|index| self.rows.get(index))
            .map(|row| row.id.clone());
        let had_focus = self
            .cell_node(self.active_row, self.active_col)
            .is_some_and(|cell| doc.active_element() == Some(cell));

        self.rows.sort_by(|a, b| {
            let left = a.cells.get(col).map(|s| s.to_lowercase()).unwrap_or_default();
            let right = b.cells.get(col).map(|s| s.to_lowercase()).unwrap_or_default();
            match direction {
                SortDirection::Descending => right.cmp(&left),
                _ => left.cmp(&right),
            }
        });
        self.sort = Some((col, direction));

        let message = format!("Sorted by {}, {}", column.label, direction.as_str());
        if let Err(err) = self.render_rows(doc) {
            tracing::warn!("data table not re-rendered: {}", err);
        }
        if let Some(index) = active_id.and_then(|id| self.rows.iter().position(|r| r.id == id)) {
            if had_focus {
                self.move_to(doc, index + 1, self.active_col);
            } else {
                self.active_row = index + 1;
                if let Err(err) = self.sync_focus_attrs(doc) {
                    tracing::warn!("data table not synced: {}", err);
                }
            }
        }
        announce(doc, &message, Politeness::Polite);
    }

    fn toggle_selection(&mut self, doc: &mut Document, index: usize) {
        let Some(row) = self.rows.get_mut(index) else {
            return;
        };
        if row.disabled {
            return;
        }
        row.selected = !row.selected;
        let message = if row.selected { "Row selected" } else { "Row deselected" };

        if let Err(err) = self.render_rows(doc) {
            tracing::warn!("data table not re-rendered: {}", err);
        }
        announce(doc, message, Politeness::Polite);
    }

    /// Remove the grid; the announcer clears per its configuration
    pub fn unmount(&mut self, doc: &mut Document) -> Result<(), WidgetError> {
        if let Some(nodes) = self.nodes.take() {
            doc.tree_mut().detach(nodes.grid)?;
        }
        with_announcer(|announcer| announcer.owner_unmounted(doc));
        Ok(())
    }

    fn select_only(&mut self, doc: &mut Document, index: usize) {
        for (i, row) in self.rows.iter_mut().enumerate() {
            row.selected = i == index;
        }
        if let Err(err) = self.render_rows(doc) {
            tracing::warn!("data table not re-rendered: {}", err);
        }
    }
}

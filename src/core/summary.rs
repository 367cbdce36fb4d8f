use crate::config::SummaryAnchor;
use crate::excel::Sheet;
use crate::layout::{cell_reference, summary};
use crate::types::Summary;
use tracing::debug;

/// Writes the run totals into the fixed summary block
///
/// Every call overwrites the same cells, so re-running with the same totals
/// leaves the sheet unchanged.
#[derive(Debug, Clone, Copy)]
pub struct SummaryWriter<'a> {
    anchor: &'a SummaryAnchor,
}

impl<'a> SummaryWriter<'a> {
    pub fn new(anchor: &'a SummaryAnchor) -> Self {
        Self { anchor }
    }

    pub fn write_summary(&self, sheet: &mut Sheet, totals: &Summary) {
        let column = self.anchor.column;
        let value_column = column + summary::VALUE_COLUMN_OFFSET;
        let row = |offset: u32| self.anchor.row + offset;

        sheet.set(row(summary::TITLE_ROW_OFFSET), column, &self.anchor.title);

        let lines = [
            (summary::OCCUPANTS_ROW_OFFSET, &self.anchor.occupants_label, totals.total_occupants),
            (summary::ROOMS_ROW_OFFSET, &self.anchor.rooms_label, totals.unique_rooms),
            (summary::MEAL_PLAN_ROW_OFFSET, &self.anchor.meal_plan_label, totals.meal_plan_count),
        ];
        for (offset, label, value) in lines {
            sheet.set(row(offset), column, label);
            sheet.set(row(offset), value_column, value);
        }

        debug!(
            sheet = sheet.name(),
            anchor = %cell_reference(self.anchor.row, column),
            "summary written"
        );
    }
}

//! Repeatable sub-record rows (order lots, party addresses)
//!
//! Forms edit these rows in place; removing a row that already exists on
//! the server records its id so the update payload can tell the backend
//! to delete it.

use contracts::domain::order::aggregate::LotForm;
use contracts::domain::party::aggregate::AddressForm;

pub trait SubRecord: Default + Clone {
    /// Server id of the row, `None` while it only exists in the form
    fn persisted_id(&self) -> Option<i64>;
}

impl SubRecord for LotForm {
    fn persisted_id(&self) -> Option<i64> {
        self.id
    }
}

impl SubRecord for AddressForm {
    fn persisted_id(&self) -> Option<i64> {
        self.id
    }
}

/// Append a blank row
pub fn append_row<T: SubRecord>(rows: &mut Vec<T>) {
    rows.push(T::default());
}

/// Every form keeps at least one row; the UI disables the remove button
/// on the last one
pub fn can_remove<T>(rows: &[T]) -> bool {
    rows.len() > 1
}

/// Remove the row at `index`, accumulating its persisted id for the
/// update payload. Returns false when refused (last row or bad index).
pub fn remove_row<T: SubRecord>(rows: &mut Vec<T>, removed_ids: &mut Vec<i64>, index: usize) -> bool {
    if !can_remove(rows) || index >= rows.len() {
        return false;
    }
    let row = rows.remove(index);
    if let Some(id) = row.persisted_id() {
        removed_ids.push(id);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persisted_lot(id: i64) -> LotForm {
        LotForm {
            id: Some(id),
            ..LotForm::default()
        }
    }

    #[test]
    fn test_removing_persisted_row_records_its_id() {
        let mut rows = vec![persisted_lot(42), LotForm::default()];
        let mut removed = Vec::new();

        assert!(remove_row(&mut rows, &mut removed, 0));
        assert_eq!(rows.len(), 1);
        assert_eq!(removed, vec![42]);
    }

    #[test]
    fn test_removing_unsaved_row_records_nothing() {
        let mut rows = vec![LotForm::default(), persisted_lot(7)];
        let mut removed = Vec::new();

        assert!(remove_row(&mut rows, &mut removed, 0));
        assert!(removed.is_empty());
    }

    #[test]
    fn test_last_row_cannot_be_removed() {
        let mut rows = vec![persisted_lot(42)];
        let mut removed = Vec::new();

        assert!(!can_remove(&rows));
        assert!(!remove_row(&mut rows, &mut removed, 0));
        assert_eq!(rows.len(), 1);
        assert!(removed.is_empty());
    }

    #[test]
    fn test_append_adds_blank_row() {
        let mut rows: Vec<AddressForm> = vec![AddressForm::default()];
        append_row(&mut rows);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].persisted_id(), None);
    }
}

//! In-memory journal of received check-ins. Nothing survives a restart.

use std::sync::{Mutex, PoisonError};

use moodcheck_core::checkin::{CheckInReceipt, CheckInRecord};

#[derive(Debug, Default)]
struct Entries {
  last_id:  u64,
  receipts: Vec<CheckInReceipt>,
}

/// Assigns sequential ids (starting at 1) and keeps every receipt.
#[derive(Debug, Default)]
pub struct CheckInJournal {
  entries: Mutex<Entries>,
}

impl CheckInJournal {
  pub fn new() -> Self { Self::default() }

  /// Store `record` under the next id and return its receipt.
  pub fn record(&self, record: CheckInRecord) -> CheckInReceipt {
    let mut entries = self.lock();
    entries.last_id += 1;
    let receipt = CheckInReceipt::new(entries.last_id, record);
    entries.receipts.push(receipt.clone());
    receipt
  }

  pub fn list(&self) -> Vec<CheckInReceipt> { self.lock().receipts.clone() }

  pub fn get(&self, id: u64) -> Option<CheckInReceipt> {
    self.lock().receipts.iter().find(|r| r.id == id).cloned()
  }

  fn lock(&self) -> std::sync::MutexGuard<'_, Entries> {
    // `Entries` is updated with single pushes; a poisoned lock is still whole.
    self.entries.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn record(emotion: &str) -> CheckInRecord {
    CheckInRecord {
      emotion:   emotion.into(),
      notes:     String::new(),
      timestamp: "2024-01-01T00:00:00.000Z".into(),
    }
  }

  #[test]
  fn ids_are_sequential() {
    let journal = CheckInJournal::new();
    assert_eq!(journal.record(record("Happy")).id, 1);
    assert_eq!(journal.record(record("Sad")).id, 2);
    assert_eq!(journal.list().len(), 2);
  }

  #[test]
  fn get_by_id() {
    let journal = CheckInJournal::new();
    journal.record(record("Happy"));
    let sad = journal.record(record("Sad"));
    assert_eq!(journal.get(sad.id), Some(sad));
    assert_eq!(journal.get(99), None);
  }
}

//! Roster - the guest list partitioned into attending and declined

use crate::value_objects::GuestId;

use super::guest::GuestRecord;

/// Aggregate counts shown at the top of the guest list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterStats {
    /// Number of accepted RSVPs
    pub confirmed_count: i64,
    /// Sum of party sizes over accepted RSVPs
    pub total_people: i64,
    /// Accepted RSVPs already checked in
    pub checked_in_count: i64,
    /// Sum of party sizes over checked-in RSVPs
    pub checked_in_people: i64,
    /// Number of declined RSVPs
    pub declined_count: i64,
}

/// Partitioned roster with its aggregates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterView {
    pub attending: Vec<GuestRecord>,
    pub declined: Vec<GuestRecord>,
    pub stats: RosterStats,
}

impl RosterView {
    /// Partition records, keeping their relative order within each side
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = GuestRecord>,
    {
        let (attending, declined): (Vec<_>, Vec<_>) =
            records.into_iter().partition(|record| record.attending);

        let checked_in = attending.iter().filter(|g| g.is_checked_in());
        let stats = RosterStats {
            confirmed_count: attending.len() as i64,
            total_people: attending.iter().map(GuestRecord::party_size).sum(),
            checked_in_count: checked_in.clone().count() as i64,
            checked_in_people: checked_in.map(GuestRecord::party_size).sum(),
            declined_count: declined.len() as i64,
        };

        Self {
            attending,
            declined,
            stats,
        }
    }

    /// True when nobody has replied yet
    pub fn is_empty(&self) -> bool {
        self.attending.is_empty() && self.declined.is_empty()
    }

    /// Mark an attending record as checked in and update the aggregates
    ///
    /// Returns false when `id` is not on the attending side.
    pub fn check_in(&mut self, id: GuestId) -> bool {
        let Some(record) = self.attending.iter_mut().find(|r| r.id == id) else {
            return false;
        };
        if !record.is_checked_in() {
            record.check_in();
            self.stats.checked_in_count += 1;
            self.stats.checked_in_people += record.party_size();
        }
        true
    }

    /// Look up a record on either side of the roster
    pub fn find(&self, id: GuestId) -> Option<&GuestRecord> {
        self.attending
            .iter()
            .chain(self.declined.iter())
            .find(|record| record.id == id)
    }
}

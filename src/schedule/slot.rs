use sqlx::types::Uuid;
use time::{Duration, OffsetDateTime, UtcOffset};

use crate::db::{Appointment, AppointmentStatus};

/// A not-yet-committed appointment being checked against a
/// professional's existing bookings.
#[derive(Debug, Clone)]
pub struct CandidateSlot {
    pub professional_id: Uuid,
    pub start_time: OffsetDateTime,
    pub duration_minutes: i64,
}

impl CandidateSlot {
    pub fn end_time(&self) -> OffsetDateTime {
        self.start_time + Duration::minutes(self.duration_minutes)
    }
}

/// Outcome of a slot check. Not an error: a conflicting slot is the
/// normal "no" answer, carrying every appointment it collides with so
/// the caller can show them to the user.
#[derive(Debug, Clone)]
pub struct SlotDecision {
    pub conflicts: Vec<Appointment>,
}

impl SlotDecision {
    pub fn is_bookable(&self) -> bool {
        self.conflicts.is_empty()
    }
}

/// Decide whether `candidate` can be booked given a snapshot of
/// existing appointments.
///
/// Only appointments for the same professional, on the same calendar
/// date in salon-local time, and not cancelled are considered. Slots
/// are half-open intervals `[start, start + duration)`, so a candidate
/// may begin exactly when another appointment ends. When rescheduling,
/// pass the edited appointment's id as `exclude` so it does not
/// conflict with itself.
///
/// This is a pure predicate over the provided snapshot; it neither
/// fetches nor persists anything. Its answer is only meaningful when
/// the caller serializes the read-check-write sequence per
/// professional (see the booking workflow), otherwise two concurrent
/// requests can both see a free slot.
///
/// Panics if the candidate duration is not positive; that is a
/// programmer error, not a business outcome.
pub fn evaluate_slot(
    candidate: &CandidateSlot,
    existing: &[Appointment],
    exclude: Option<Uuid>,
    salon_offset: UtcOffset,
) -> SlotDecision {
    assert!(
        candidate.duration_minutes > 0,
        "candidate slot duration must be positive, got {}",
        candidate.duration_minutes
    );

    let candidate_date = candidate.start_time.to_offset(salon_offset).date();
    let candidate_end = candidate.end_time();

    let conflicts = existing
        .iter()
        .filter(|appt| appt.professional_id == candidate.professional_id)
        .filter(|appt| Some(appt.id) != exclude)
        .filter(|appt| appt.status != AppointmentStatus::Cancelled)
        .filter(|appt| appt.start_time.to_offset(salon_offset).date() == candidate_date)
        .filter(|appt| {
            candidate.start_time < appt.end_time() && candidate_end > appt.start_time
        })
        .cloned()
        .collect();

    SlotDecision { conflicts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn appointment(
        professional_id: Uuid,
        start_time: OffsetDateTime,
        duration_minutes: i64,
        status: AppointmentStatus,
    ) -> Appointment {
        Appointment {
            id: Uuid::new_v4(),
            professional_id,
            client_id: Uuid::new_v4(),
            service_id: Uuid::new_v4(),
            start_time,
            duration_minutes,
            status,
            notes: None,
            created_at: start_time,
            updated_at: start_time,
        }
    }

    fn candidate(
        professional_id: Uuid,
        start_time: OffsetDateTime,
        duration_minutes: i64,
    ) -> CandidateSlot {
        CandidateSlot {
            professional_id,
            start_time,
            duration_minutes,
        }
    }

    #[test]
    fn empty_schedule_is_always_bookable() {
        let pro = Uuid::new_v4();
        let cand = candidate(pro, datetime!(2026-09-01 10:00 UTC), 45);

        let decision = evaluate_slot(&cand, &[], None, UtcOffset::UTC);
        assert!(decision.is_bookable());
    }

    #[test]
    fn starting_exactly_at_previous_end_is_bookable() {
        let pro = Uuid::new_v4();
        let existing = appointment(
            pro,
            datetime!(2026-09-01 10:00 UTC),
            60,
            AppointmentStatus::Confirmed,
        );
        let cand = candidate(pro, datetime!(2026-09-01 11:00 UTC), 30);

        let decision = evaluate_slot(&cand, &[existing], None, UtcOffset::UTC);
        assert!(decision.is_bookable());
    }

    #[test]
    fn one_minute_overlap_is_rejected() {
        let pro = Uuid::new_v4();
        let existing = appointment(
            pro,
            datetime!(2026-09-01 10:00 UTC),
            60,
            AppointmentStatus::Confirmed,
        );
        let cand = candidate(pro, datetime!(2026-09-01 10:59 UTC), 30);

        let decision = evaluate_slot(&cand, &[existing.clone()], None, UtcOffset::UTC);
        assert!(!decision.is_bookable());
        assert_eq!(decision.conflicts.len(), 1);
        assert_eq!(decision.conflicts[0].id, existing.id);
    }

    #[test]
    fn candidate_ending_at_existing_start_is_bookable() {
        let pro = Uuid::new_v4();
        let existing = appointment(
            pro,
            datetime!(2026-09-01 10:00 UTC),
            60,
            AppointmentStatus::Pending,
        );
        let cand = candidate(pro, datetime!(2026-09-01 09:00 UTC), 60);

        let decision = evaluate_slot(&cand, &[existing], None, UtcOffset::UTC);
        assert!(decision.is_bookable());
    }

    #[test]
    fn other_professional_never_conflicts() {
        let pro = Uuid::new_v4();
        let other = Uuid::new_v4();
        let existing = appointment(
            other,
            datetime!(2026-09-01 10:00 UTC),
            60,
            AppointmentStatus::Confirmed,
        );
        let cand = candidate(pro, datetime!(2026-09-01 10:00 UTC), 60);

        let decision = evaluate_slot(&cand, &[existing], None, UtcOffset::UTC);
        assert!(decision.is_bookable());
    }

    #[test]
    fn cancelled_appointments_never_conflict() {
        let pro = Uuid::new_v4();
        let existing = appointment(
            pro,
            datetime!(2026-09-01 10:00 UTC),
            60,
            AppointmentStatus::Cancelled,
        );
        let cand = candidate(pro, datetime!(2026-09-01 10:00 UTC), 60);

        let decision = evaluate_slot(&cand, &[existing], None, UtcOffset::UTC);
        assert!(decision.is_bookable());
    }

    #[test]
    fn reschedule_excludes_the_edited_appointment() {
        let pro = Uuid::new_v4();
        let existing = appointment(
            pro,
            datetime!(2026-09-01 10:00 UTC),
            60,
            AppointmentStatus::Confirmed,
        );
        // Same time it already occupies.
        let cand = candidate(pro, datetime!(2026-09-01 10:00 UTC), 60);

        let decision = evaluate_slot(&cand, &[existing.clone()], Some(existing.id), UtcOffset::UTC);
        assert!(decision.is_bookable());
    }

    #[test]
    fn all_conflicting_appointments_are_reported() {
        let pro = Uuid::new_v4();
        let first = appointment(
            pro,
            datetime!(2026-09-01 10:00 UTC),
            30,
            AppointmentStatus::Confirmed,
        );
        let second = appointment(
            pro,
            datetime!(2026-09-01 10:30 UTC),
            30,
            AppointmentStatus::Pending,
        );
        // Spans both existing bookings.
        let cand = candidate(pro, datetime!(2026-09-01 10:15 UTC), 30);

        let decision = evaluate_slot(
            &cand,
            &[first.clone(), second.clone()],
            None,
            UtcOffset::UTC,
        );
        assert_eq!(decision.conflicts.len(), 2);
        let ids: Vec<Uuid> = decision.conflicts.iter().map(|a| a.id).collect();
        assert!(ids.contains(&first.id));
        assert!(ids.contains(&second.id));
    }

    #[test]
    fn other_calendar_dates_are_ignored() {
        let pro = Uuid::new_v4();
        let existing = appointment(
            pro,
            datetime!(2026-09-02 10:00 UTC),
            60,
            AppointmentStatus::Confirmed,
        );
        let cand = candidate(pro, datetime!(2026-09-01 10:00 UTC), 60);

        let decision = evaluate_slot(&cand, &[existing], None, UtcOffset::UTC);
        assert!(decision.is_bookable());
    }

    #[test]
    fn date_filter_uses_salon_local_time() {
        let pro = Uuid::new_v4();
        // 01:00 UTC on the 2nd is 22:00 on the 1st at UTC-3.
        let existing = appointment(
            pro,
            datetime!(2026-09-02 01:00 UTC),
            60,
            AppointmentStatus::Confirmed,
        );
        let cand = candidate(pro, datetime!(2026-09-02 01:30 UTC), 60);
        let salon = UtcOffset::from_hms(-3, 0, 0).unwrap();

        let decision = evaluate_slot(&cand, &[existing], None, salon);
        assert!(!decision.is_bookable());
    }

    #[test]
    #[should_panic(expected = "duration must be positive")]
    fn non_positive_duration_panics() {
        let pro = Uuid::new_v4();
        let cand = candidate(pro, datetime!(2026-09-01 10:00 UTC), 0);
        evaluate_slot(&cand, &[], None, UtcOffset::UTC);
    }

    // End-to-end scenario: P booked 10:00-11:00; 10:59 rejected with
    // that booking as the conflict, 11:00 accepted, and Q unaffected.
    #[test]
    fn booked_hour_scenario() {
        let p = Uuid::new_v4();
        let q = Uuid::new_v4();
        let booked = appointment(
            p,
            datetime!(2026-09-01 10:00 UTC),
            60,
            AppointmentStatus::Confirmed,
        );
        let snapshot = vec![booked.clone()];

        let late = evaluate_slot(
            &candidate(p, datetime!(2026-09-01 10:59 UTC), 15),
            &snapshot,
            None,
            UtcOffset::UTC,
        );
        assert_eq!(late.conflicts.len(), 1);
        assert_eq!(late.conflicts[0].id, booked.id);

        let adjacent = evaluate_slot(
            &candidate(p, datetime!(2026-09-01 11:00 UTC), 60),
            &snapshot,
            None,
            UtcOffset::UTC,
        );
        assert!(adjacent.is_bookable());

        let other_pro = evaluate_slot(
            &candidate(q, datetime!(2026-09-01 10:30 UTC), 60),
            &snapshot,
            None,
            UtcOffset::UTC,
        );
        assert!(other_pro.is_bookable());
    }
}

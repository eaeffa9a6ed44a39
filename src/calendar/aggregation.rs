//! Per-employee daily aggregation.
//!
//! Collapses one employee's records into one [`AggregatedDay`] per date and
//! attaches who else works that day: coworkers from the main roster and,
//! per specialty table, the colleague holding that on-call.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{AggregatedDay, CoworkerShift, ShiftRecord, SpecialtyOnCall, SpecialtyRoster};

/// Builds the aggregated days for `employee`, ascending by date.
///
/// Records are matched on the employee name ignoring case. Shift labels keep
/// encounter order (main list first, then each specialty list in the order
/// given) and appear once per day. An empty result means the employee has no
/// shifts in any list.
///
/// # Example
///
/// ```
/// use shift_calendar::calendar::aggregate_employee;
/// use shift_calendar::models::{ShiftKind, ShiftRecord};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
/// let main = vec![
///     ShiftRecord::new("Lee", date, "Σάββατο", ShiftKind::Regular).unwrap(),
///     ShiftRecord::new("Lee", date, "Σάββατο", ShiftKind::Tep12h).unwrap(),
///     ShiftRecord::new("Smith", date, "Σάββατο", ShiftKind::OnCall).unwrap(),
/// ];
/// let days = aggregate_employee("lee", &main, &[]);
/// assert_eq!(days.len(), 1);
/// assert_eq!(days[0].shift_summary(), "Regular Shift, TEP Shift (12h)");
/// assert_eq!(days[0].coworkers[0].to_string(), "Smith: On-Call Shift");
/// ```
pub fn aggregate_employee(
    employee: &str,
    main: &[ShiftRecord],
    specialties: &[SpecialtyRoster],
) -> Vec<AggregatedDay> {
    let own_records = main
        .iter()
        .chain(specialties.iter().flat_map(|s| s.records.iter()))
        .filter(|record| record.is_for(employee));

    let mut days: BTreeMap<NaiveDate, AggregatedDay> = BTreeMap::new();
    for record in own_records {
        let day = days
            .entry(record.date())
            .or_insert_with(|| AggregatedDay {
                date: record.date(),
                day_of_week: record.day_of_week().to_string(),
                shift_types: Vec::new(),
                coworkers: Vec::new(),
                specialty_on_call: Vec::new(),
            });
        let label = record.kind().label();
        if !day.shift_types.iter().any(|existing| existing == label) {
            day.shift_types.push(label.to_string());
        }
    }

    let main_by_date = group_by_date(main);
    for day in days.values_mut() {
        day.coworkers = coworkers_on(employee, main_by_date.get(&day.date));
        day.specialty_on_call = specialties
            .iter()
            .filter_map(|roster| specialty_holder(employee, day.date, roster))
            .collect();
    }

    days.into_values().collect()
}

fn group_by_date(records: &[ShiftRecord]) -> BTreeMap<NaiveDate, Vec<&ShiftRecord>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<&ShiftRecord>> = BTreeMap::new();
    for record in records {
        grouped.entry(record.date()).or_default().push(record);
    }
    grouped
}

/// Everyone except `employee` on the date, as sorted `name: shift` entries.
fn coworkers_on(employee: &str, records: Option<&Vec<&ShiftRecord>>) -> Vec<CoworkerShift> {
    let mut coworkers: Vec<CoworkerShift> = records
        .into_iter()
        .flatten()
        .filter(|record| !record.is_for(employee))
        .map(|record| CoworkerShift {
            employee: record.employee().to_string(),
            shift_type: record.kind().label().to_string(),
        })
        .collect();
    coworkers.sort_by_cached_key(|coworker| coworker.to_string());
    coworkers.dedup();
    coworkers
}

/// The first colleague holding this specialty on the date.
fn specialty_holder(
    employee: &str,
    date: NaiveDate,
    roster: &SpecialtyRoster,
) -> Option<SpecialtyOnCall> {
    roster
        .records
        .iter()
        .find(|record| record.date() == date && !record.is_for(employee))
        .map(|record| SpecialtyOnCall {
            specialty: roster.specialty,
            employee: record.employee().to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ShiftKind, Specialty};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn record(name: &str, day: u32, kind: ShiftKind) -> ShiftRecord {
        ShiftRecord::new(name, date(day), "Ημέρα", kind).unwrap()
    }

    fn specialty(specialty: Specialty, records: Vec<ShiftRecord>) -> SpecialtyRoster {
        SpecialtyRoster { specialty, records }
    }

    #[test]
    fn test_same_day_records_merge_in_encounter_order() {
        let main = vec![
            record("Lee", 4, ShiftKind::Tep12h),
            record("Lee", 4, ShiftKind::Major24h),
        ];
        let days = aggregate_employee("Lee", &main, &[]);
        assert_eq!(days.len(), 1);
        assert_eq!(
            days[0].shift_types,
            vec!["TEP Shift (12h)", "Μεγάλη Shift (24h)"]
        );
    }

    #[test]
    fn test_duplicate_labels_collapse() {
        let main = vec![
            record("Lee", 4, ShiftKind::Regular),
            record("LEE", 4, ShiftKind::Regular),
        ];
        let days = aggregate_employee("lee", &main, &[]);
        assert_eq!(days[0].shift_types, vec!["Regular Shift"]);
    }

    #[test]
    fn test_days_are_sorted_ascending() {
        let main = vec![
            record("Lee", 20, ShiftKind::Regular),
            record("Lee", 3, ShiftKind::Regular),
            record("Lee", 11, ShiftKind::OnCall),
        ];
        let dates: Vec<NaiveDate> = aggregate_employee("Lee", &main, &[])
            .iter()
            .map(|d| d.date)
            .collect();
        assert_eq!(dates, vec![date(3), date(11), date(20)]);
    }

    #[test]
    fn test_coworkers_are_sorted_and_exclude_target() {
        let main = vec![
            record("Lee", 5, ShiftKind::Regular),
            record("Zervas", 5, ShiftKind::OnCall),
            record("Adams", 5, ShiftKind::Regular),
            record("lee", 5, ShiftKind::Tep12h),
            record("Adams", 6, ShiftKind::Regular),
        ];
        let days = aggregate_employee("Lee", &main, &[]);
        let coworkers: Vec<String> = days[0].coworkers.iter().map(|c| c.to_string()).collect();
        assert_eq!(
            coworkers,
            vec!["Adams: Regular Shift", "Zervas: On-Call Shift"]
        );
    }

    #[test]
    fn test_specialty_records_join_the_day() {
        let main = vec![record("A.Papadopoulos", 1, ShiftKind::Regular)];
        let cath = specialty(
            Specialty::CathLab,
            vec![record("A.Papadopoulos", 1, ShiftKind::Specialty(Specialty::CathLab))],
        );
        let days = aggregate_employee("A.Papadopoulos", &main, &[cath]);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].shift_summary(), "Regular Shift, Cath Lab On-Call");
        assert!(days[0].specialty_on_call.is_empty());
    }

    #[test]
    fn test_specialty_only_day_is_included() {
        let ep = specialty(
            Specialty::Electrophysiology,
            vec![record("Lee", 9, ShiftKind::Specialty(Specialty::Electrophysiology))],
        );
        let days = aggregate_employee("Lee", &[], &[ep]);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].shift_types, vec!["Electrophysiology On-Call"]);
    }

    #[test]
    fn test_first_colleague_on_specialty_is_named() {
        let main = vec![record("Lee", 2, ShiftKind::Regular)];
        let cath = specialty(
            Specialty::CathLab,
            vec![
                record("Lee", 2, ShiftKind::Specialty(Specialty::CathLab)),
                record("Smith", 2, ShiftKind::Specialty(Specialty::CathLab)),
                record("Jones", 2, ShiftKind::Specialty(Specialty::CathLab)),
            ],
        );
        let ep = specialty(
            Specialty::Electrophysiology,
            vec![record("Adams", 3, ShiftKind::Specialty(Specialty::Electrophysiology))],
        );
        let days = aggregate_employee("Lee", &main, &[cath, ep]);
        assert_eq!(days[0].specialty_on_call.len(), 1);
        assert_eq!(
            days[0].specialty_on_call[0].to_string(),
            "Cath Lab On-Call: Smith"
        );
    }

    #[test]
    fn test_specialty_colleagues_are_not_coworkers() {
        let main = vec![record("Lee", 2, ShiftKind::Regular)];
        let cath = specialty(
            Specialty::CathLab,
            vec![record("Smith", 2, ShiftKind::Specialty(Specialty::CathLab))],
        );
        let days = aggregate_employee("Lee", &main, &[cath]);
        assert!(days[0].coworkers.is_empty());
    }

    #[test]
    fn test_unknown_employee_has_no_days() {
        let main = vec![record("Lee", 2, ShiftKind::Regular)];
        assert!(aggregate_employee("Nobody", &main, &[]).is_empty());
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let main = vec![record("Lee", 2, ShiftKind::Regular)];
        let before = main.clone();
        let _ = aggregate_employee("Lee", &main, &[]);
        assert_eq!(main, before);
    }
}

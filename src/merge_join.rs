use std::cmp::Ordering;

use crate::dump_io::DumpError;
use crate::stat_record::StatRecord;

/// Merges two dumps into one sequence with exactly one record per distinct
/// `id`, in ascending `id` order.
///
/// Both inputs are concatenated into one working vector and sorted by `id`;
/// each group of equal ids is then folded into an accumulator seeded from
/// the group's first record:
/// - `count` and `cost` are summed,
/// - `primary` is AND-ed (any record without the flag clears it),
/// - `mode` takes the numeric maximum seen in the group.
pub fn join_dumps(
    first: Vec<StatRecord>,
    second: Vec<StatRecord>,
) -> Result<Vec<StatRecord>, DumpError> {
    let mut working: Vec<StatRecord> = Vec::new();
    working.try_reserve_exact(first.len() + second.len())?;
    working.extend(first);
    working.extend(second);
    working.sort_unstable_by_key(|record| record.id);

    let mut merged: Vec<StatRecord> = Vec::new();
    for record in working {
        match merged.last_mut() {
            Some(accumulator) if accumulator.id == record.id => {
                accumulator.count += record.count;
                accumulator.cost += record.cost;
                accumulator.set_primary(accumulator.primary() && record.primary());
                if record.mode() > accumulator.mode() {
                    accumulator.set_mode(record.mode());
                }
            }
            _ => merged.push(record),
        }
    }
    Ok(merged)
}

/// In-place unstable sort under an explicitly passed comparator.
pub fn sort_dump_by<F>(records: &mut [StatRecord], compare: F)
where
    F: FnMut(&StatRecord, &StatRecord) -> Ordering,
{
    records.sort_unstable_by(compare);
}

/// Ascending `cost`. Total order over f64, so NaN and the infinities sort
/// deterministically instead of breaking the sort.
pub fn by_cost(a: &StatRecord, b: &StatRecord) -> Ordering {
    a.cost.total_cmp(&b.cost)
}

#[cfg(test)]
mod tests {
    use super::{by_cost, join_dumps, sort_dump_by};
    use crate::stat_record::StatRecord;

    #[test]
    fn disjoint_keys_pass_through_unchanged() {
        let first = vec![StatRecord::new(1, 10, 1.0, true, 2)];
        let second = vec![StatRecord::new(2, 20, 2.0, false, 3)];

        let merged = join_dumps(first.clone(), second.clone()).unwrap();
        assert_eq!(merged, vec![first[0], second[0]]);
    }

    #[test]
    fn duplicate_keys_fold_into_one_record() {
        let first = vec![
            StatRecord::new(1, 10, 1.0, true, 2),
            StatRecord::new(2, 20, 2.0, true, 3),
        ];
        let second = vec![
            StatRecord::new(1, 5, 0.5, false, 4),
            StatRecord::new(3, 30, 3.0, false, 1),
        ];

        let merged = join_dumps(first, second).unwrap();
        assert_eq!(merged.len(), 3);

        let folded = merged.iter().find(|record| record.id == 1).unwrap();
        assert_eq!(folded.count, 15);
        assert!((folded.cost - 1.5).abs() < 0.001);
        assert!(!folded.primary());
        assert_eq!(folded.mode(), 4);
    }

    #[test]
    fn fold_result_does_not_depend_on_input_order() {
        let first = vec![
            StatRecord::new(7, 1, 0.25, true, 1),
            StatRecord::new(7, 2, 0.50, true, 6),
        ];
        let second = vec![StatRecord::new(7, 4, 0.125, true, 3)];

        let forward = join_dumps(first.clone(), second.clone()).unwrap();
        let backward = join_dumps(second, first).unwrap();
        assert_eq!(forward, backward);

        assert_eq!(forward.len(), 1);
        assert_eq!(forward[0].count, 7);
        assert!((forward[0].cost - 0.875).abs() < 1e-9);
        assert!(forward[0].primary());
        assert_eq!(forward[0].mode(), 6);
    }

    #[test]
    fn output_is_ascending_by_id() {
        let first = vec![
            StatRecord::new(30, 1, 0.0, false, 0),
            StatRecord::new(10, 1, 0.0, false, 0),
        ];
        let second = vec![StatRecord::new(20, 1, 0.0, false, 0)];

        let merged = join_dumps(first, second).unwrap();
        let ids: Vec<u64> = merged.iter().map(|record| record.id).collect();
        assert_eq!(ids, vec![10, 20, 30]);
    }

    #[test]
    fn empty_inputs_yield_empty_output() {
        assert!(join_dumps(Vec::new(), Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn sort_by_cost_postcondition() {
        let mut records = vec![
            StatRecord::new(1, 0, 3.0, false, 0),
            StatRecord::new(2, 0, 1.0, false, 0),
            StatRecord::new(3, 0, 2.0, false, 0),
        ];
        sort_dump_by(&mut records, by_cost);
        for pair in records.windows(2) {
            assert!(pair[0].cost <= pair[1].cost);
        }
    }

    #[test]
    fn sort_survives_nan_and_infinity() {
        let mut records = vec![
            StatRecord::new(1, 0, f64::NAN, false, 0),
            StatRecord::new(2, 0, f64::NEG_INFINITY, false, 0),
            StatRecord::new(3, 0, 0.0, false, 0),
            StatRecord::new(4, 0, f64::INFINITY, false, 0),
            StatRecord::new(5, 0, -1.0, false, 0),
        ];
        sort_dump_by(&mut records, by_cost);

        let finite_or_inf: Vec<u64> = records
            .iter()
            .filter(|record| !record.cost.is_nan())
            .map(|record| record.id)
            .collect();
        assert_eq!(finite_or_inf, vec![2, 5, 3, 4]);
    }
}

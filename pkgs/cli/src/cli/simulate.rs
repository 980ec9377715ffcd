use crate::{cli::Stats, record_time, utils::human_duration};
use itertools::Itertools;
use keyed_heap::{HeapError, IndexedHeap, Order, Priority, Value};
use log::{debug, error, info};
use std::{collections::HashMap, error::Error, time::Instant};

/// Deadlines are drawn from `0..MAX_DEADLINE`.
const MAX_DEADLINE: Priority = 1_000_000;
/// Chance (in percent) that an insert reuses an id that is already scheduled.
const DUPLICATE_PERCENT: u8 = 1;
/// Number of popped timers shown after the run.
const PREVIEW_LEN: usize = 10;
/// Upper bound for up-front allocation; larger workloads grow on demand.
const MAX_PREALLOC: usize = 1 << 20;

#[derive(Debug, Clone)]
pub struct Workload {
    pub order: Order,
    pub timers: usize,
    pub updates: usize,
    pub seed: u64,
    pub validate: bool,
}

pub fn simulate(workload: Workload) -> Result<(), Box<dyn Error>> {
    info!(
        "Simulating {} timers with {} updates ({} order, seed {})",
        workload.timers, workload.updates, workload.order, workload.seed
    );

    let start = Instant::now();
    let stats = run(&workload).map_err(|e| {
        error!("Simulation failed: {}", e);
        e
    })?;

    stats.print_summary();
    info!("Total runtime: {}", human_duration(start.elapsed()));

    Ok(())
}

/// Runs the workload against a fresh heap, checking it against a plain map of deadlines.
pub fn run(workload: &Workload) -> Result<Stats, String> {
    let mut rng = fastrand::Rng::with_seed(workload.seed);
    let capacity = initial_capacity(workload.timers);
    let mut heap = IndexedHeap::with_capacity(workload.order, capacity);
    let mut deadlines: HashMap<Value, Priority> = HashMap::with_capacity(capacity);
    let mut stats = Stats::new();

    // Ids below `next_id` are all scheduled until the drain starts
    let mut next_id: Value = 0;

    record_time!(stats.insert_duration, {
        for _ in 0..workload.timers {
            let deadline = rng.i64(0..MAX_DEADLINE);
            if next_id > 0 && rng.u8(0..100) < DUPLICATE_PERCENT {
                heap.insert(deadline, rng.i64(0..next_id));
                stats.duplicates += 1;
            } else {
                heap.insert(deadline, next_id);
                deadlines.insert(next_id, deadline);
                next_id += 1;
                stats.inserted += 1;
            }
            check(&heap, workload.validate)?;
        }
    });

    if heap.len() != deadlines.len() {
        return Err(format!(
            "Heap holds {} timers after inserting {}",
            heap.len(),
            deadlines.len()
        ));
    }

    record_time!(stats.update_duration, {
        // Roughly one in eleven updates targets an id that was never scheduled
        let id_range = next_id + next_id / 10 + 1;
        for _ in 0..workload.updates {
            let value = rng.i64(0..id_range);
            let deadline = rng.i64(0..MAX_DEADLINE);
            heap.update(value, deadline);
            match deadlines.get_mut(&value) {
                Some(d) => {
                    *d = deadline;
                    stats.updated += 1;
                }
                None => stats.unknown_updates += 1,
            }
            check(&heap, workload.validate)?;
        }
    });

    let mut preview = Vec::with_capacity(PREVIEW_LEN);
    record_time!(stats.drain_duration, {
        let mut prev: Option<Priority> = None;
        while let Ok(value) = heap.pop() {
            let deadline = deadlines
                .remove(&value)
                .ok_or_else(|| format!("Popped timer {} was never scheduled", value))?;

            if let Some(prev) = prev {
                if !workload.order.is_monotone(prev, deadline) {
                    return Err(format!(
                        "Timer {} with deadline {} popped after deadline {}",
                        value, deadline, prev
                    ));
                }
            }
            prev = Some(deadline);

            if preview.len() < PREVIEW_LEN {
                preview.push(value);
            }
            stats.popped += 1;
            check(&heap, workload.validate)?;
        }
    });

    if !deadlines.is_empty() {
        return Err(format!("{} timers were never popped", deadlines.len()));
    }
    match heap.pop() {
        Err(e @ HeapError::Empty) => debug!("Drained heap reports: {}", e),
        Ok(value) => return Err(format!("Drained heap still yields timer {}", value)),
    }

    info!("First popped timers: {}", preview.iter().join(" "));
    Ok(stats)
}

/// Pre-allocation for `timers` inserts, bounded so huge workloads can't overflow it.
fn initial_capacity(timers: usize) -> usize {
    timers.min(MAX_PREALLOC)
}

fn check(heap: &IndexedHeap, validate: bool) -> Result<(), String> {
    if validate { heap.verify() } else { Ok(()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workload(order: Order, seed: u64) -> Workload {
        Workload {
            order,
            timers: 2_000,
            updates: 3_000,
            seed,
            validate: true,
        }
    }

    #[test]
    fn test_run_accounts_for_every_operation() {
        for order in [Order::Min, Order::Max] {
            let w = workload(order, 12345);
            let stats = run(&w).unwrap();

            assert_eq!(stats.inserted + stats.duplicates, w.timers as u64);
            assert_eq!(stats.updated + stats.unknown_updates, w.updates as u64);
            assert_eq!(stats.popped, stats.inserted);
        }
    }

    #[test]
    fn test_run_is_reproducible() {
        let a = run(&workload(Order::Min, 7)).unwrap();
        let b = run(&workload(Order::Min, 7)).unwrap();

        assert_eq!(a.inserted, b.inserted);
        assert_eq!(a.duplicates, b.duplicates);
        assert_eq!(a.unknown_updates, b.unknown_updates);
    }

    #[test]
    fn test_initial_capacity_is_bounded() {
        assert_eq!(initial_capacity(0), 0);
        assert_eq!(initial_capacity(2_000), 2_000);
        assert_eq!(initial_capacity(usize::MAX), MAX_PREALLOC);

        // Unbounded, this would panic with a capacity overflow
        let heap = IndexedHeap::with_capacity(Order::Min, initial_capacity(usize::MAX));
        assert!(heap.is_empty());
    }

    #[test]
    fn test_run_empty_workload() {
        let w = Workload {
            order: Order::Max,
            timers: 0,
            updates: 5,
            seed: 1,
            validate: true,
        };
        let stats = run(&w).unwrap();

        assert_eq!(stats.popped, 0);
        assert_eq!(stats.unknown_updates, 5);
    }
}

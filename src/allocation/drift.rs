use crate::types::AllocatorConfig;

/// The round-robin pass visits every scene at most this many times. Bounds the
/// loop even when the floor blocks every remaining decrement.
const ROUND_ROBIN_PASSES: usize = 2;

/// Nudge `durations` so they sum to `total`, never taking a scene below the
/// configured floor.
pub(super) fn correct_drift(durations: &mut [i64], total: i64, config: &AllocatorConfig) {
    let drift = total - durations.iter().sum::<i64>();
    if drift == 0 || durations.is_empty() {
        return;
    }
    let floor = i64::from(config.min_scene_seconds);
    let remaining = if drift.abs() <= i64::from(config.small_drift_limit) {
        absorb_in_longest(durations, drift, floor)
    } else {
        distribute_proportionally(durations, drift, floor)
    };
    round_robin(durations, remaining, floor);
}

/// Hand the whole drift to the first longest scene. Returns whatever the
/// floor prevented from being applied.
fn absorb_in_longest(durations: &mut [i64], drift: i64, floor: i64) -> i64 {
    let mut longest = 0;
    for (idx, &duration) in durations.iter().enumerate() {
        if duration > durations[longest] {
            longest = idx;
        }
    }
    let applied = if drift > 0 {
        drift
    } else {
        -(-drift).min((durations[longest] - floor).max(0))
    };
    durations[longest] += applied;
    drift - applied
}

/// Spread the drift in proportion to current durations. Returns the unapplied
/// remainder.
fn distribute_proportionally(durations: &mut [i64], drift: i64, floor: i64) -> i64 {
    let current_total = durations.iter().sum::<i64>();
    if current_total <= 0 {
        return drift;
    }
    let mut applied = 0;
    for duration in durations.iter_mut() {
        let adjustment = (drift as f64 * *duration as f64 / current_total as f64).round() as i64;
        if *duration + adjustment >= floor {
            *duration += adjustment;
            applied += adjustment;
        }
    }
    drift - applied
}

/// One second at a time, cycling through the scenes.
fn round_robin(durations: &mut [i64], mut remaining: i64, floor: i64) {
    let max_iterations = ROUND_ROBIN_PASSES * durations.len();
    let mut iteration = 0;
    while remaining != 0 && iteration < max_iterations {
        let idx = iteration % durations.len();
        if remaining > 0 {
            durations[idx] += 1;
            remaining -= 1;
        } else if durations[idx] > floor {
            durations[idx] -= 1;
            remaining += 1;
        }
        iteration += 1;
    }
}

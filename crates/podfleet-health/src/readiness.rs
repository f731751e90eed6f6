//! Pod readiness and availability predicates.

use podfleet_core::{ConditionStatus, Pod, PodCondition, PodConditionType, PodStatus};

/// The pod's `Ready` condition, if reported.
pub fn pod_ready_condition(status: &PodStatus) -> Option<&PodCondition> {
    status
        .conditions
        .iter()
        .find(|c| c.condition_type == PodConditionType::Ready)
}

/// Whether the pod's `Ready` condition is `True`.
pub fn is_pod_ready(pod: &Pod) -> bool {
    pod_ready_condition(&pod.status).is_some_and(|c| c.status == ConditionStatus::True)
}

/// Whether the pod has been ready for at least `min_ready_seconds` as of `now`.
///
/// With `min_ready_seconds == 0` every ready pod is available regardless of
/// its transition time. Otherwise the transition time must be set and lie
/// strictly more than `min_ready_seconds` before `now`. An unset transition
/// time never satisfies a non-zero threshold; `Some(0)` is the unix epoch,
/// a real instant, and is judged like any other timestamp.
pub fn is_pod_available(pod: &Pod, min_ready_seconds: u32, now: u64) -> bool {
    let Some(ready) = pod_ready_condition(&pod.status) else {
        return false;
    };
    if ready.status != ConditionStatus::True {
        return false;
    }
    if min_ready_seconds == 0 {
        return true;
    }
    match ready.last_transition_time {
        Some(since) => since.saturating_add(u64::from(min_ready_seconds)) < now,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pod_with(status: ConditionStatus, since: Option<u64>) -> Pod {
        let mut pod = Pod::default();
        pod.status.conditions.push(PodCondition {
            condition_type: PodConditionType::PodScheduled,
            status: ConditionStatus::True,
            last_transition_time: Some(0),
        });
        pod.status.conditions.push(PodCondition {
            condition_type: PodConditionType::Ready,
            status,
            last_transition_time: since,
        });
        pod
    }

    #[test]
    fn pod_without_conditions_is_not_ready() {
        let pod = Pod::default();
        assert!(pod_ready_condition(&pod.status).is_none());
        assert!(!is_pod_ready(&pod));
        assert!(!is_pod_available(&pod, 0, 100));
    }

    #[test]
    fn finds_ready_among_other_conditions() {
        let pod = pod_with(ConditionStatus::True, Some(10));
        let ready = pod_ready_condition(&pod.status).unwrap();
        assert_eq!(ready.last_transition_time, Some(10));
        assert!(is_pod_ready(&pod));
    }

    #[test]
    fn zero_threshold_ignores_elapsed_time() {
        let just_flipped = pod_with(ConditionStatus::True, Some(1_000));
        assert!(is_pod_available(&just_flipped, 0, 1_000));

        let no_timestamp = pod_with(ConditionStatus::True, None);
        assert!(is_pod_available(&no_timestamp, 0, 1_000));
    }

    #[test]
    fn requires_strictly_more_than_threshold() {
        let pod = pod_with(ConditionStatus::True, Some(1_000));
        assert!(!is_pod_available(&pod, 30, 1_029));
        assert!(!is_pod_available(&pod, 30, 1_030));
        assert!(is_pod_available(&pod, 30, 1_031));
    }

    #[test]
    fn missing_timestamp_is_unavailable_with_threshold() {
        let pod = pod_with(ConditionStatus::True, None);
        assert!(!is_pod_available(&pod, 1, u64::MAX));
    }

    #[test]
    fn unset_timestamp_differs_from_epoch() {
        let unset = pod_with(ConditionStatus::True, None);
        let epoch = pod_with(ConditionStatus::True, Some(0));

        assert!(!is_pod_available(&unset, 30, 1_700_000_000));
        assert!(is_pod_available(&epoch, 30, 1_700_000_000));

        assert!(is_pod_available(&unset, 0, 1_700_000_000));
        assert!(is_pod_available(&epoch, 0, 1_700_000_000));
    }

    #[test]
    fn not_ready_is_never_available() {
        for status in [ConditionStatus::False, ConditionStatus::Unknown] {
            let pod = pod_with(status, Some(0));
            assert!(!is_pod_available(&pod, 0, 1_000));
            assert!(!is_pod_available(&pod, 5, 1_000));
        }
    }

    #[test]
    fn larger_threshold_never_more_available() {
        let pod = pod_with(ConditionStatus::True, Some(500));
        let mut was_available = true;
        for threshold in 0..700 {
            let available = is_pod_available(&pod, threshold, 1_000);
            assert!(was_available || !available, "threshold {threshold}");
            was_available = available;
        }
        assert!(!was_available);
    }

    #[test]
    fn saturates_near_time_limit() {
        let pod = pod_with(ConditionStatus::True, Some(u64::MAX - 1));
        assert!(!is_pod_available(&pod, u32::MAX, u64::MAX));
    }
}

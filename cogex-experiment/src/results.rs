use cogex_core::{Condition, ResponseRecord, TaskType, Variant};
use serde::Serialize;
use std::collections::BTreeMap;

pub const NO_TRIALS: &str = "No trials completed.";

/// Session summary, always derived fresh from a response log
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsSummary {
    pub variant: Variant,
    pub total_trials: usize,
    pub correct_trials: usize,
    pub timed_out_trials: usize,
    /// Percent correct over all trials
    pub accuracy: f64,
    /// Mean RT over correct trials
    pub mean_rt_ms: f64,
    pub mean_rt_by_condition: BTreeMap<Condition, f64>,
    /// Switching only
    pub mean_rt_by_task: BTreeMap<TaskType, f64>,
    pub effect_label: &'static str,
    pub effect_ms: f64,
    /// False when a required condition had no correct trial
    pub effect_reliable: bool,
    pub explanation: String,
}

/// Reduces a response log to accuracy, mean RTs and the variant's effect.
pub fn summarize(log: &[ResponseRecord], variant: Variant) -> ResultsSummary {
    let total = log.len();
    let timed_out = log.iter().filter(|r| r.timed_out).count();
    if total == 0 {
        return ResultsSummary {
            variant,
            total_trials: 0,
            correct_trials: 0,
            timed_out_trials: 0,
            accuracy: 0.0,
            mean_rt_ms: 0.0,
            mean_rt_by_condition: BTreeMap::new(),
            mean_rt_by_task: BTreeMap::new(),
            effect_label: variant.effect_label(),
            effect_ms: 0.0,
            effect_reliable: false,
            explanation: NO_TRIALS.to_string(),
        };
    }

    let correct: Vec<&ResponseRecord> = log.iter().filter(|r| r.correct).collect();
    let accuracy = correct.len() as f64 / total as f64 * 100.0;
    let mean_rt = mean(correct.iter().map(|r| r.rt_ms)).unwrap_or(0.0);

    let by_condition = mean_by(&correct, |r| Some(r.condition));
    let by_task = if variant == Variant::Switching {
        mean_by(&correct, |r| r.task_type)
    } else {
        BTreeMap::new()
    };

    let effect = effect(variant, &by_condition);
    let explanation = match effect {
        Some(_) => {
            let mut text = reliable_explanation(variant).to_string();
            if let Some(detail) = task_detail(&by_task) {
                text.push(' ');
                text.push_str(&detail);
            }
            text
        }
        None => insufficient_explanation(variant).to_string(),
    };

    ResultsSummary {
        variant,
        total_trials: total,
        correct_trials: correct.len(),
        timed_out_trials: timed_out,
        accuracy,
        mean_rt_ms: mean_rt,
        mean_rt_by_condition: by_condition,
        mean_rt_by_task: by_task,
        effect_label: variant.effect_label(),
        effect_ms: effect.unwrap_or(0.0),
        effect_reliable: effect.is_some(),
        explanation,
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    (count > 0).then(|| sum / count as f64)
}

fn mean_by<K: Ord + Copy>(
    records: &[&ResponseRecord],
    key: impl Fn(&ResponseRecord) -> Option<K>,
) -> BTreeMap<K, f64> {
    let mut acc: BTreeMap<K, (f64, usize)> = BTreeMap::new();
    for record in records {
        if let Some(k) = key(*record) {
            let entry = acc.entry(k).or_insert((0.0, 0));
            entry.0 += record.rt_ms;
            entry.1 += 1;
        }
    }
    acc.into_iter()
        .map(|(k, (sum, count))| (k, sum / count as f64))
        .collect()
}

/// `None` when a condition the effect needs has no correct trial
fn effect(variant: Variant, means: &BTreeMap<Condition, f64>) -> Option<f64> {
    let get = |c: Condition| means.get(&c).copied();
    match variant {
        Variant::Classic | Variant::Numerical | Variant::Spatial => {
            Some(get(Condition::Incongruent)? - get(Condition::Congruent)?)
        }
        Variant::Emotional => {
            let neutral = get(Condition::Neutral)?;
            let emotional = mean(
                [Condition::Positive, Condition::Negative]
                    .into_iter()
                    .filter_map(get),
            )?;
            Some(emotional - neutral)
        }
        Variant::Switching => Some(get(Condition::Switch)? - get(Condition::NoSwitch)?),
    }
}

fn reliable_explanation(variant: Variant) -> &'static str {
    match variant {
        Variant::Classic => {
            "Stroop effect (classic): mean reaction time on incongruent trials minus \
             congruent trials. A positive value means the meaning of the word interfered \
             with naming the ink color; slower incongruent responses are the classic finding."
        }
        Variant::Numerical => {
            "Stroop effect (numerical): mean reaction time on incongruent trials minus \
             congruent trials. A positive value means the physical print size interfered \
             with judging numerical magnitude."
        }
        Variant::Spatial => {
            "Stroop effect (spatial): mean reaction time on incongruent trials minus \
             congruent trials. A positive value means the meaning of the location word \
             interfered with reporting where it was placed."
        }
        Variant::Emotional => {
            "Emotional Stroop effect: mean reaction time for naming the ink of emotional \
             (positive or negative) words minus neutral words. A positive value suggests \
             the emotional meaning is processed automatically and captures attention."
        }
        Variant::Switching => {
            "Switch cost: mean reaction time on trials where the task changed from the \
             previous trial minus trials where it repeated. A positive value reflects the \
             effort of reconfiguring the active task set."
        }
    }
}

fn insufficient_explanation(variant: Variant) -> &'static str {
    match variant {
        Variant::Classic | Variant::Numerical | Variant::Spatial => {
            "Not enough correct responses in both the congruent and incongruent conditions \
             to compute a reliable Stroop effect."
        }
        Variant::Emotional => {
            "Not enough correct responses in the neutral and emotional conditions to \
             compute a reliable emotional Stroop effect."
        }
        Variant::Switching => {
            "Not enough correct responses on both switch and no-switch trials to compute \
             a reliable switch cost."
        }
    }
}

fn task_detail(by_task: &BTreeMap<TaskType, f64>) -> Option<String> {
    if by_task.is_empty() {
        return None;
    }
    let parts: Vec<String> = by_task
        .iter()
        .map(|(task, rt)| format!("{} {:.0} ms", task.cue().to_lowercase(), rt))
        .collect();
    Some(format!("Mean reaction time by task: {}.", parts.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(i: usize, condition: Condition, correct: bool, rt_ms: f64) -> ResponseRecord {
        ResponseRecord {
            trial_index: i,
            condition,
            task_type: None,
            response: Some(if correct { "red" } else { "blue" }.to_string()),
            correct,
            rt_ms,
            correct_answer: "red".to_string(),
            timed_out: false,
        }
    }

    fn switching(i: usize, condition: Condition, task: TaskType, rt_ms: f64) -> ResponseRecord {
        ResponseRecord {
            task_type: Some(task),
            ..record(i, condition, true, rt_ms)
        }
    }

    #[test]
    fn classic_effect_from_correct_trials() {
        let log = vec![
            record(0, Condition::Congruent, true, 500.0),
            record(1, Condition::Congruent, true, 600.0),
            record(2, Condition::Incongruent, true, 700.0),
            record(3, Condition::Incongruent, true, 800.0),
        ];
        let summary = summarize(&log, Variant::Classic);
        assert_eq!(summary.accuracy, 100.0);
        assert_eq!(summary.mean_rt_ms, 650.0);
        assert_eq!(summary.effect_ms, 200.0);
        assert!(summary.effect_reliable);
        assert_eq!(summary.mean_rt_by_condition[&Condition::Congruent], 550.0);
        assert_eq!(summary.mean_rt_by_condition[&Condition::Incongruent], 750.0);
        assert!(summary.explanation.starts_with("Stroop effect (classic)"));
    }

    #[test]
    fn incorrect_trials_are_excluded_from_means() {
        let log = vec![
            record(0, Condition::Congruent, true, 500.0),
            record(1, Condition::Congruent, false, 5000.0),
            record(2, Condition::Incongruent, true, 700.0),
            record(3, Condition::Incongruent, false, 100.0),
        ];
        let summary = summarize(&log, Variant::Spatial);
        assert_eq!(summary.accuracy, 50.0);
        assert_eq!(summary.correct_trials, 2);
        assert_eq!(summary.mean_rt_ms, 600.0);
        assert_eq!(summary.effect_ms, 200.0);
    }

    #[test]
    fn empty_log_reports_no_trials() {
        let summary = summarize(&[], Variant::Emotional);
        assert_eq!(summary.accuracy, 0.0);
        assert_eq!(summary.mean_rt_ms, 0.0);
        assert_eq!(summary.effect_ms, 0.0);
        assert!(!summary.effect_reliable);
        assert_eq!(summary.explanation, NO_TRIALS);
    }

    #[test]
    fn missing_condition_degrades_effect() {
        let log = vec![
            record(0, Condition::Congruent, true, 500.0),
            record(1, Condition::Incongruent, false, 700.0),
        ];
        let summary = summarize(&log, Variant::Numerical);
        assert_eq!(summary.effect_ms, 0.0);
        assert!(!summary.effect_reliable);
        assert!(summary.explanation.starts_with("Not enough correct responses"));
        assert_eq!(summary.mean_rt_ms, 500.0);
    }

    #[test]
    fn emotional_effect_averages_available_categories() {
        let log = vec![
            record(0, Condition::Positive, true, 700.0),
            record(1, Condition::Negative, true, 900.0),
            record(2, Condition::Neutral, true, 600.0),
        ];
        assert_eq!(summarize(&log, Variant::Emotional).effect_ms, 200.0);

        let only_negative = vec![
            record(0, Condition::Positive, false, 700.0),
            record(1, Condition::Negative, true, 900.0),
            record(2, Condition::Neutral, true, 600.0),
        ];
        assert_eq!(summarize(&only_negative, Variant::Emotional).effect_ms, 300.0);

        let no_neutral = vec![record(0, Condition::Positive, true, 700.0)];
        let summary = summarize(&no_neutral, Variant::Emotional);
        assert!(!summary.effect_reliable);
        assert_eq!(summary.effect_ms, 0.0);
    }

    #[test]
    fn switch_cost_with_task_detail() {
        let log = vec![
            switching(0, Condition::NoSwitch, TaskType::NameColor, 600.0),
            switching(1, Condition::NoSwitch, TaskType::NameColor, 700.0),
            switching(2, Condition::Switch, TaskType::ReadWord, 900.0),
            switching(3, Condition::NoSwitch, TaskType::ReadWord, 500.0),
        ];
        let summary = summarize(&log, Variant::Switching);
        assert_eq!(summary.effect_ms, 300.0);
        assert_eq!(summary.mean_rt_by_task[&TaskType::NameColor], 650.0);
        assert_eq!(summary.mean_rt_by_task[&TaskType::ReadWord], 700.0);
        assert!(summary.explanation.contains("color 650 ms"));
        assert!(summary.explanation.contains("word 700 ms"));
    }

    #[test]
    fn switching_without_switch_trials_is_insufficient() {
        let log = vec![
            switching(0, Condition::NoSwitch, TaskType::NameColor, 600.0),
            switching(1, Condition::NoSwitch, TaskType::NameColor, 650.0),
        ];
        let summary = summarize(&log, Variant::Switching);
        assert_eq!(summary.effect_ms, 0.0);
        assert!(!summary.effect_reliable);
        assert!(summary.explanation.contains("switch cost"));
        assert!(!summary.explanation.contains("Mean reaction time by task"));
    }

    #[test]
    fn summarize_is_idempotent() {
        let log = vec![
            record(0, Condition::Congruent, true, 512.5),
            record(1, Condition::Incongruent, false, 640.0),
        ];
        assert_eq!(summarize(&log, Variant::Classic), summarize(&log, Variant::Classic));
    }

    #[test]
    fn timed_out_trials_count_against_accuracy() {
        let mut timeout = record(1, Condition::Incongruent, false, 2000.0);
        timeout.response = None;
        timeout.timed_out = true;
        let log = vec![record(0, Condition::Congruent, true, 450.0), timeout];
        let summary = summarize(&log, Variant::Classic);
        assert_eq!(summary.timed_out_trials, 1);
        assert_eq!(summary.accuracy, 50.0);
    }
}

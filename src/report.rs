use anyhow::Result;
use cogex_experiment::{Completion, ResultsSummary};
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Serialize)]
struct JsonReport<'a> {
    title: &'a str,
    #[serde(flatten)]
    summary: &'a ResultsSummary,
}

pub fn render_json(completion: &Completion) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport {
        title: completion.title,
        summary: &completion.summary,
    })?)
}

pub fn render_text(completion: &Completion) -> String {
    let s = &completion.summary;
    let mut out = String::new();

    let _ = writeln!(out, "{} results", completion.title);
    let _ = writeln!(
        out,
        "  Trials:    {} ({} correct, {} timed out)",
        s.total_trials, s.correct_trials, s.timed_out_trials
    );
    let _ = writeln!(out, "  Accuracy:  {:.1}%", s.accuracy);
    let _ = writeln!(out, "  Mean RT:   {:.0} ms", s.mean_rt_ms);
    for (condition, rt) in &s.mean_rt_by_condition {
        let _ = writeln!(out, "    {:<12} {:.0} ms", condition.as_str(), rt);
    }
    for (task, rt) in &s.mean_rt_by_task {
        let _ = writeln!(out, "    task {:<7} {:.0} ms", task.as_str(), rt);
    }
    if s.effect_reliable {
        let _ = writeln!(out, "  {}: {:.0} ms", s.effect_label, s.effect_ms);
    } else {
        let _ = writeln!(out, "  {}: n/a", s.effect_label);
    }
    let _ = writeln!(out, "  {}", s.explanation);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cogex_core::{Condition, ResponseRecord, Variant};
    use cogex_experiment::summarize;

    fn completion(records: &[(Condition, bool, f64)]) -> Completion {
        let log: Vec<ResponseRecord> = records
            .iter()
            .enumerate()
            .map(|(i, &(condition, correct, rt_ms))| ResponseRecord {
                trial_index: i,
                condition,
                task_type: None,
                response: Some("red".into()),
                correct,
                rt_ms,
                correct_answer: "red".into(),
                timed_out: false,
            })
            .collect();
        Completion {
            variant: Variant::Classic,
            title: Variant::Classic.title(),
            summary: summarize(&log, Variant::Classic),
        }
    }

    #[test]
    fn text_report_lists_effect_and_conditions() {
        let c = completion(&[
            (Condition::Congruent, true, 500.0),
            (Condition::Congruent, true, 600.0),
            (Condition::Incongruent, true, 700.0),
            (Condition::Incongruent, true, 800.0),
        ]);
        let text = render_text(&c);
        assert!(text.starts_with("Classic Stroop (color-word) results"));
        assert!(text.contains("Accuracy:  100.0%"));
        assert!(text.contains("Mean RT:   650 ms"));
        assert!(text.contains("congruent    550 ms"));
        assert!(text.contains("Stroop effect: 200 ms"));
    }

    #[test]
    fn unreliable_effect_is_not_reported_as_a_number() {
        let c = completion(&[(Condition::Congruent, true, 500.0)]);
        assert!(render_text(&c).contains("Stroop effect: n/a"));
    }

    #[test]
    fn json_report_is_flat() {
        let c = completion(&[
            (Condition::Congruent, true, 500.0),
            (Condition::Incongruent, false, 900.0),
        ]);
        let value: serde_json::Value = serde_json::from_str(&render_json(&c).unwrap()).unwrap();
        assert_eq!(value["title"], "Classic Stroop (color-word)");
        assert_eq!(value["variant"], "classic");
        assert_eq!(value["accuracy"], 50.0);
        assert_eq!(value["mean_rt_by_condition"]["congruent"], 500.0);
        assert_eq!(value["total_trials"], 2);
    }
}

//! Train reports for stdout.

use packing::{AuditReport, PackingStats, RejectedRecord, Wagon};
use serde_json::json;
use std::fmt::Write;

/// Human-readable report: one line per wagon, then a summary.
pub fn render_text(
    wagons: &[Wagon],
    stats: &PackingStats,
    rejected: &[RejectedRecord],
    audit: Option<&AuditReport>,
) -> String {
    let mut out = String::new();

    for (i, wagon) in wagons.iter().enumerate() {
        let mode = if wagon.is_relaxed() {
            "relaxed"
        } else {
            "normal"
        };
        let occupants = wagon
            .occupants()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(
            out,
            "Wagon {} [{}] {}/{}: {}",
            i + 1,
            mode,
            wagon.used_capacity(),
            stats.wagon_capacity,
            occupants
        );
    }

    let _ = writeln!(out, "{}", stats);

    for r in rejected {
        let _ = writeln!(
            out,
            "Skipped record #{} ({:?} {:?}): {}",
            r.index, r.record.diet, r.record.size, r.error
        );
    }

    if let Some(report) = audit {
        if report.is_clean() {
            let _ = writeln!(out, "Audit: clean ({} wagons)", report.wagons_checked);
        } else {
            for violation in &report.violations {
                let _ = writeln!(out, "Audit violation: {}", violation);
            }
        }
    }

    out
}

/// Machine-readable report.
pub fn render_json(
    wagons: &[Wagon],
    stats: &PackingStats,
    rejected: &[RejectedRecord],
    audit: Option<&AuditReport>,
) -> serde_json::Value {
    let wagons: Vec<serde_json::Value> = wagons
        .iter()
        .map(|w| {
            json!({
                "relaxed": w.is_relaxed(),
                "used_capacity": w.used_capacity(),
                "animals": w.occupants(),
            })
        })
        .collect();

    json!({
        "wagons": wagons,
        "stats": stats,
        "rejected": rejected,
        "audit": audit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use packing::{pack, Animal, AnimalError, AnimalRecord, Size};

    fn sample() -> (Vec<Wagon>, PackingStats) {
        let wagons = pack(&[
            Animal::carnivore(Size::Large),
            Animal::carnivore(Size::Medium),
            Animal::herbivore(Size::Large),
        ]);
        let stats = PackingStats::from_wagons(&wagons, 10);
        (wagons, stats)
    }

    #[test]
    fn test_render_text() {
        let (wagons, stats) = sample();
        let text = render_text(&wagons, &stats, &[], None);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "Wagon 1 [normal] 8/10: large carnivore, medium carnivore"
        );
        assert_eq!(lines[1], "Wagon 2 [normal] 5/10: large herbivore");
        assert!(lines[2].starts_with("3 animals in 2 wagons"));
        assert!(!text.contains("Audit"));
    }

    #[test]
    fn test_render_text_rejects_and_audit() {
        let (wagons, stats) = sample();
        let rejected = vec![RejectedRecord {
            index: 2,
            record: AnimalRecord::new("plant", "small"),
            error: AnimalError::UnknownDiet {
                value: "plant".into(),
            },
        }];
        let audit = AuditReport {
            wagons_checked: 2,
            violations: vec![],
        };
        let text = render_text(&wagons, &stats, &rejected, Some(&audit));
        assert!(text.contains("Skipped record #2 (\"plant\" \"small\"): unknown diet"));
        assert!(text.contains("Audit: clean (2 wagons)"));
    }

    #[test]
    fn test_render_json() {
        let (wagons, stats) = sample();
        let value = render_json(&wagons, &stats, &[], None);
        assert_eq!(value["wagons"].as_array().unwrap().len(), 2);
        assert_eq!(value["wagons"][0]["used_capacity"], 8);
        assert_eq!(value["wagons"][0]["relaxed"], false);
        assert_eq!(value["wagons"][0]["animals"][0]["diet"], "carnivore");
        assert_eq!(value["stats"]["animals"], 3);
        assert!(value["audit"].is_null());
    }
}

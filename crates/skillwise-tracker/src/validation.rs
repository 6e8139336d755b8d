//! Input checks applied before anything reaches the store. The scoring
//! core assumes valid inputs, so this is where they are enforced.

use skillwise_core::config::DecayConfig;
use skillwise_core::constants::{MAX_DIFFICULTY, MAX_SCORE, MIN_DIFFICULTY};
use skillwise_core::errors::{SkillwiseError, SkillwiseResult};
use skillwise_core::skill::{NewActivity, NewSkill};

/// Check a skill draft and resolve its decay rate.
pub fn validate_new_skill(draft: &NewSkill, decay: &DecayConfig) -> SkillwiseResult<f64> {
    if draft.name.trim().is_empty() {
        return Err(SkillwiseError::invalid("name", "must not be empty"));
    }
    if draft.category.trim().is_empty() {
        return Err(SkillwiseError::invalid("category", "must not be empty"));
    }
    if draft.initial_proficiency as f64 > MAX_SCORE {
        return Err(SkillwiseError::invalid(
            "initial_proficiency",
            format!("{} exceeds 100", draft.initial_proficiency),
        ));
    }

    let rate = draft.decay_rate.unwrap_or(decay.default_decay_rate);
    if !rate.is_finite() || rate < decay.min_decay_rate || rate > decay.max_decay_rate {
        return Err(SkillwiseError::invalid(
            "decay_rate",
            format!(
                "{rate} outside [{}, {}]",
                decay.min_decay_rate, decay.max_decay_rate
            ),
        ));
    }
    Ok(rate)
}

pub fn validate_new_activity(draft: &NewActivity) -> SkillwiseResult<()> {
    if draft.skill_id.trim().is_empty() {
        return Err(SkillwiseError::invalid("skill_id", "must not be empty"));
    }
    if draft.duration_minutes == 0 {
        return Err(SkillwiseError::invalid("duration_minutes", "must be positive"));
    }
    if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&draft.difficulty) {
        return Err(SkillwiseError::invalid(
            "difficulty",
            format!(
                "{} not between {MIN_DIFFICULTY} and {MAX_DIFFICULTY}",
                draft.difficulty
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillwise_core::skill::ActivityKind;

    fn skill_draft() -> NewSkill {
        NewSkill {
            name: "Rust".into(),
            category: "Programming Language".into(),
            initial_proficiency: 70,
            decay_rate: None,
        }
    }

    fn activity_draft() -> NewActivity {
        NewActivity {
            skill_id: "skill-1".into(),
            kind: ActivityKind::Coding,
            duration_minutes: 30,
            difficulty: 3,
            notes: None,
        }
    }

    #[test]
    fn missing_rate_uses_default() {
        let rate = validate_new_skill(&skill_draft(), &DecayConfig::default()).unwrap();
        assert_eq!(rate, 0.05);
    }

    #[test]
    fn blank_name_rejected() {
        let mut draft = skill_draft();
        draft.name = "  ".into();
        assert!(validate_new_skill(&draft, &DecayConfig::default()).is_err());
    }

    #[test]
    fn proficiency_above_hundred_rejected() {
        let mut draft = skill_draft();
        draft.initial_proficiency = 101;
        assert!(validate_new_skill(&draft, &DecayConfig::default()).is_err());
    }

    #[test]
    fn rate_outside_bounds_rejected() {
        let mut draft = skill_draft();
        for bad in [0.0, -0.05, 0.5, f64::NAN] {
            draft.decay_rate = Some(bad);
            assert!(
                validate_new_skill(&draft, &DecayConfig::default()).is_err(),
                "rate {bad} accepted"
            );
        }
        draft.decay_rate = Some(0.15);
        assert!(validate_new_skill(&draft, &DecayConfig::default()).is_ok());
    }

    #[test]
    fn activity_bounds() {
        assert!(validate_new_activity(&activity_draft()).is_ok());

        let mut zero = activity_draft();
        zero.duration_minutes = 0;
        assert!(validate_new_activity(&zero).is_err());

        for difficulty in [0, 6] {
            let mut bad = activity_draft();
            bad.difficulty = difficulty;
            assert!(validate_new_activity(&bad).is_err());
        }
    }
}
